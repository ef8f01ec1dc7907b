//! Request-side shapes: what the boundary decodes from a validation call.

use serde::{Deserialize, Serialize};

/// Dynamically-typed parameter value as it arrives from JSON.
///
/// Closed set of the scalar kinds the contract admits: string, number,
/// boolean, list of such, or null. Objects are not valid parameter values
/// and are rejected at decode time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Runtime kind name, used in type-mismatch anomaly reasons.
    pub fn kind(&self) -> &'static str {
        match self {
            ParamValue::Null => "null",
            ParamValue::Bool(_) => "boolean",
            ParamValue::Number(_) => "number",
            ParamValue::String(_) => "string",
            ParamValue::List(_) => "list",
        }
    }
}

/// One named parameter carried by an incoming request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestParam {
    pub name: String,
    pub value: ParamValue,
}

/// An incoming request to check against a registered model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingRequest {
    pub path: String,

    pub method: String,

    #[serde(default)]
    pub query_params: Vec<RequestParam>,

    #[serde(default)]
    pub headers: Vec<RequestParam>,

    #[serde(default)]
    pub body: Vec<RequestParam>,
}
