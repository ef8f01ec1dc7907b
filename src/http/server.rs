//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Serve on a bound listener with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::{handlers, request_id};
use crate::store::ModelStore;
use crate::validator::RequestValidator;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ModelStore>,
    pub validator: RequestValidator,
}

/// HTTP server for the anomaly detector API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the given store.
    pub fn new(config: &ServerConfig, store: Arc<dyn ModelStore>) -> Self {
        let state = AppState {
            store,
            validator: RequestValidator::new(),
        };

        Self {
            router: Self::build_router(config, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/models", post(handlers::register_models))
            .route("/validate", post(handlers::validate_request))
            .route("/health", get(handlers::health))
            .layer(middleware::from_fn(request_id::attach_request_id))
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.request_timeout_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
            .with_state(state)
    }

    /// The configured router, for tests that drive it directly.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve until the shutdown signal fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> std::io::Result<()> {
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await
    }
}
