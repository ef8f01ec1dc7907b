//! Model registry subsystem.
//!
//! # Data Flow
//! ```text
//! POST /models → Vec<EndpointModel>
//!     → registry.rs (validate whole batch, then insert all)
//!
//! POST /validate → (path, method)
//!     → registry.rs (keyed lookup, owned copy out)
//! ```
//!
//! # Design Decisions
//! - Registration is all-or-nothing: a rejected batch leaves the registry
//!   untouched, so requests never validate against a partial schema set
//! - Duplicate keys are rejected, not overwritten, to prevent silent
//!   schema drift
//! - One reader/writer lock over the map; lookups share, registration
//!   excludes; the lock never spans a validator call

pub mod error;
pub mod registry;

pub use error::StoreError;
pub use registry::{InMemoryModelStore, ModelStore};
