//! Request validation subsystem.
//!
//! # Data Flow
//! ```text
//! IncomingRequest + EndpointModel
//!     → request.rs (per-group field matching)
//!     → grammar.rs (value vs type tag)
//!     → ValidationOutcome (ordered anomaly list)
//! ```
//!
//! # Design Decisions
//! - Pure functions of their inputs: no shared state, no errors, safe to
//!   run with unbounded parallelism across calls
//! - Groups are checked in a fixed order (query, header, body) so the
//!   anomaly list is deterministic
//! - Permissive about undeclared request fields: anomalies are measured
//!   against the declared contract only

pub mod grammar;
pub mod request;

pub use request::RequestValidator;
