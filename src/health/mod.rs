//! Dedicated healthcheck listener.
//!
//! # Design Decisions
//! - Runs on its own port so orchestrator probes never contend with API
//!   traffic or its body-limit/timeout middleware
//! - Same `{"status":"healthy"}` payload as /health on the main router
//! - Subscribes to the shutdown coordinator like the main listener

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::http::handlers;

/// Serve only GET /health until shutdown fires.
pub async fn serve(
    listener: TcpListener,
    mut shutdown: broadcast::Receiver<()>,
) -> std::io::Result<()> {
    let router = Router::new().route("/health", get(handlers::health));

    tracing::info!(
        address = %listener.local_addr()?,
        "healthcheck listener started"
    );

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
        })
        .await
}
