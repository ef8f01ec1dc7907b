//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Main API server settings.
    pub server: ServerConfig,

    /// Dedicated healthcheck listener settings.
    pub health: HealthConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Main API server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Maximum accepted request body size in bytes.
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 10,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

/// Dedicated healthcheck listener, kept off the API port so orchestrator
/// probes do not contend with API traffic.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthConfig {
    pub enabled: bool,

    /// Bind address for the health listener.
    pub bind_address: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bind_address: "0.0.0.0:2802".to_string(),
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics exporter.
    pub metrics_enabled: bool,

    /// Bind address for the metrics exporter.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Log output format: pretty for development, JSON for production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
