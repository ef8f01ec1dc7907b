//! Core data types shared across the store, validator, and HTTP boundary.
//!
//! # Data Flow
//! ```text
//! Registration (POST /models):
//!     JSON array → Vec<EndpointModel> → store
//!
//! Validation (POST /validate):
//!     JSON object → IncomingRequest
//!     store lookup → EndpointModel (read-only copy)
//!     validator → ValidationOutcome → JSON response
//! ```
//!
//! # Design Decisions
//! - EndpointModel identity is (path, upper-cased method); the key type owns
//!   the normalization so no caller can build a mismatched key
//! - Request values are a closed tagged variant, not serde_json::Value, so
//!   the type grammar's dispatch is exhaustive
//! - All wire field names match the original service's JSON contract

pub mod endpoint;
pub mod outcome;
pub mod request;

pub use endpoint::{EndpointModel, ModelKey, Parameter, TypeTag};
pub use outcome::{FieldAnomaly, FieldGroup, ValidationOutcome};
pub use request::{IncomingRequest, ParamValue, RequestParam};
