//! Process lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! SIGINT / SIGTERM
//!     → signals.rs (translate to internal event)
//!     → shutdown.rs (broadcast to both listeners)
//!     → axum graceful shutdown drains in-flight requests
//! ```
//!
//! # Design Decisions
//! - One broadcast channel; every listener subscribes independently
//! - Signals only trigger shutdown; there is no reload path because the
//!   registry is process-lifetime state anyway

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
