//! HTTP boundary subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, middleware, graceful serve)
//!     → request_id.rs (attach x-request-id)
//!     → handlers.rs (decode JSON, call store/validator, encode result)
//! ```
//!
//! # Design Decisions
//! - Handlers own the HTTP status mapping; the core only distinguishes
//!   bad-input errors from internal faults
//! - Every error response uses the `{"error": "..."}` envelope
//! - Validation anomalies are payload on a 200, never an HTTP error

pub mod handlers;
pub mod request_id;
pub mod server;

pub use server::{AppState, HttpServer};
