//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, defaults when absent)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → shared with subsystems at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no reload machinery
//! - All fields have defaults so a missing file or empty table works
//! - Validation separates syntactic (serde) from semantic checks and
//!   reports every semantic error, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AppConfig, HealthConfig, LogFormat, ObservabilityConfig, ServerConfig};
