//! API Request Anomaly Detector Library

pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod observability;
pub mod store;
pub mod validator;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{InMemoryModelStore, ModelStore};
pub use validator::RequestValidator;
