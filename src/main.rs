//! API Request Anomaly Detector
//!
//! An HTTP service that registers expected endpoint shapes ("models") and
//! flags anomalous fields in incoming requests.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │              ANOMALY DETECTOR                 │
//!                      │                                               │
//!   POST /models       │  ┌─────────┐    ┌──────────┐                 │
//!   ──────────────────►│  │  http   │───►│  store   │ (RwLock map)    │
//!                      │  │handlers │    │ registry │                 │
//!   POST /validate     │  └────┬────┘    └────▲─────┘                 │
//!   ──────────────────►│       │  lookup      │                       │
//!                      │       ▼              │                       │
//!                      │  ┌──────────┐   ┌────┴─────┐                 │
//!   ValidationOutcome  │  │validator │──►│ grammar  │ (8 type tags)   │
//!   ◄──────────────────┼──│ request  │   │          │                 │
//!                      │  └──────────┘   └──────────┘                 │
//!                      │                                               │
//!                      │  ┌─────────────────────────────────────────┐ │
//!                      │  │          Cross-Cutting Concerns          │ │
//!                      │  │  ┌────────┐ ┌────────┐ ┌─────────────┐  │ │
//!                      │  │  │ config │ │ health │ │observability│  │ │
//!                      │  │  └────────┘ └────────┘ └─────────────┘  │ │
//!                      │  │  ┌─────────────────────────────┐        │ │
//!                      │  │  │  lifecycle (signals/drain)  │        │ │
//!                      │  │  └─────────────────────────────┘        │ │
//!                      │  └─────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use anomaly_detector::config::{load_config, AppConfig};
use anomaly_detector::http::HttpServer;
use anomaly_detector::lifecycle::{signals, Shutdown};
use anomaly_detector::store::{InMemoryModelStore, ModelStore};
use anomaly_detector::{health, observability};

#[derive(Debug, Parser)]
#[command(name = "anomaly-detector", version, about = "API request anomaly detection service")]
struct Args {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    observability::logging::init(&config.observability);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "anomaly-detector starting");
    tracing::info!(
        bind_address = %config.server.bind_address,
        request_timeout_secs = config.server.request_timeout_secs,
        health_enabled = config.health.enabled,
        "configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "failed to parse metrics address"
            );
        }
    }

    let shutdown = Shutdown::new();
    tokio::spawn(signals::shutdown_on_signals(shutdown.clone()));

    let store: Arc<dyn ModelStore> = Arc::new(InMemoryModelStore::new());

    if config.health.enabled {
        let listener = TcpListener::bind(&config.health.bind_address).await?;
        let rx = shutdown.subscribe();
        tokio::spawn(async move {
            if let Err(error) = health::serve(listener, rx).await {
                tracing::error!(%error, "healthcheck listener failed");
            }
        });
    }

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "listening for connections");

    let server = HttpServer::new(&config.server, store);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("shutdown complete");

    Ok(())
}
