//! Validation results: anomalies and the outcome envelope.

use serde::{Deserialize, Serialize};

/// Which of the three request field groups an anomaly belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldGroup {
    #[serde(rename = "query_params")]
    Query,
    #[serde(rename = "headers")]
    Header,
    #[serde(rename = "body")]
    Body,
}

impl FieldGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldGroup::Query => "query_params",
            FieldGroup::Header => "headers",
            FieldGroup::Body => "body",
        }
    }
}

impl std::fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected deviation between a request field and its declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldAnomaly {
    pub field: FieldGroup,
    pub parameter_name: String,
    pub reason: String,
}

/// Result of checking one request against one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub anomalies: Vec<FieldAnomaly>,
}

impl ValidationOutcome {
    /// Build an outcome from a (possibly empty) anomaly list; `valid` is
    /// derived, never set independently.
    pub fn from_anomalies(anomalies: Vec<FieldAnomaly>) -> Self {
        Self {
            valid: anomalies.is_empty(),
            anomalies,
        }
    }
}
