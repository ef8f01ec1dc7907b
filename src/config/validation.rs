//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check bind addresses parse and do not collide
//! - Validate value ranges (timeouts > 0, limits > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::AppConfig;

/// A single semantic configuration problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBindAddress { field: &'static str, value: String },
    ZeroValue { field: &'static str },
    AddressCollision { first: &'static str, second: &'static str },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress { field, value } => {
                write!(f, "{} is not a valid socket address: {:?}", field, value)
            }
            ValidationError::ZeroValue { field } => {
                write!(f, "{} must be greater than zero", field)
            }
            ValidationError::AddressCollision { first, second } => {
                write!(f, "{} and {} must not share an address", first, second)
            }
        }
    }
}

/// Validate the loaded configuration, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "server.bind_address", &config.server.bind_address);

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroValue {
            field: "server.request_timeout_secs",
        });
    }

    if config.server.body_limit_bytes == 0 {
        errors.push(ValidationError::ZeroValue {
            field: "server.body_limit_bytes",
        });
    }

    if config.health.enabled {
        check_address(&mut errors, "health.bind_address", &config.health.bind_address);

        if config.health.bind_address == config.server.bind_address {
            errors.push(ValidationError::AddressCollision {
                first: "server.bind_address",
                second: "health.bind_address",
            });
        }
    }

    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress {
            field,
            value: value.to_string(),
        });
    }
}
