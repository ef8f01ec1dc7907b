//! Registered endpoint schemas and their parameter declarations.

use serde::{Deserialize, Serialize};

/// Semantic type accepted by a parameter declaration.
///
/// Eight tags are recognized on the wire; anything else deserializes to
/// `Other` and never matches a value. Keeping unknown tags representable
/// means a model with a misspelled tag registers fine and simply flags every
/// value of that parameter, matching how unknown tags behave at validation
/// time in the original contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeTag {
    String,
    Int,
    Boolean,
    List,
    Date,
    Email,
    Uuid,
    AuthToken,
    Other(String),
}

impl TypeTag {
    /// Canonical wire spelling of this tag.
    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::String => "String",
            TypeTag::Int => "Int",
            TypeTag::Boolean => "Boolean",
            TypeTag::List => "List",
            TypeTag::Date => "Date",
            TypeTag::Email => "Email",
            TypeTag::Uuid => "UUID",
            TypeTag::AuthToken => "Auth-Token",
            TypeTag::Other(name) => name,
        }
    }
}

impl From<String> for TypeTag {
    fn from(s: String) -> Self {
        match s.as_str() {
            "String" => TypeTag::String,
            "Int" => TypeTag::Int,
            "Boolean" => TypeTag::Boolean,
            "List" => TypeTag::List,
            "Date" => TypeTag::Date,
            "Email" => TypeTag::Email,
            "UUID" => TypeTag::Uuid,
            "Auth-Token" => TypeTag::AuthToken,
            _ => TypeTag::Other(s),
        }
    }
}

impl From<TypeTag> for String {
    fn from(tag: TypeTag) -> Self {
        tag.as_str().to_string()
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared parameter within a field group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name, unique within its group.
    pub name: String,

    /// Accepted types, in declaration order. A value matching any one of
    /// them is valid.
    pub types: Vec<TypeTag>,

    /// Whether the parameter must be present in the request.
    #[serde(default)]
    pub required: bool,
}

/// Registered schema for one (path, method) endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointModel {
    pub path: String,

    pub method: String,

    #[serde(default)]
    pub query_params: Vec<Parameter>,

    #[serde(default)]
    pub headers: Vec<Parameter>,

    #[serde(default)]
    pub body: Vec<Parameter>,
}

impl EndpointModel {
    /// Identity key for this model.
    pub fn key(&self) -> ModelKey {
        ModelKey::new(&self.path, &self.method)
    }
}

/// Store key: path plus upper-cased method.
///
/// The constructor owns the method normalization, so `get /users` and
/// `GET /users` resolve to the same registered model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelKey {
    path: String,
    method: String,
}

impl ModelKey {
    pub fn new(path: &str, method: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_ascii_uppercase(),
        }
    }
}

impl std::fmt::Display for ModelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
