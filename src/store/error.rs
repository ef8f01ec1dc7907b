//! Store error taxonomy.

use thiserror::Error;

/// Errors surfaced by the model registry.
///
/// All variants are expected, caller-facing conditions; internal faults
/// (lock poisoning) are not part of the taxonomy and are recovered at the
/// call site.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Malformed schema entry: empty path or method.
    #[error("invalid model: path and method are required (got path {path:?}, method {method:?})")]
    InvalidModel { path: String, method: String },

    /// Key collision, either with the registry or within one batch.
    #[error("model already exists for {method} {path}")]
    DuplicateModel { path: String, method: String },

    /// Lookup miss.
    #[error("model not found for {method} {path}")]
    ModelNotFound { path: String, method: String },
}

impl StoreError {
    /// Whether this error was caused by caller input, as opposed to an
    /// internal fault. The boundary layer maps the two classes to
    /// different HTTP status families.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            StoreError::InvalidModel { .. }
                | StoreError::DuplicateModel { .. }
                | StoreError::ModelNotFound { .. }
        )
    }
}
