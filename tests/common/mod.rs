//! Shared helpers for integration tests.

use std::sync::Arc;

use anomaly_detector::config::ServerConfig;
use anomaly_detector::http::HttpServer;
use anomaly_detector::lifecycle::Shutdown;
use anomaly_detector::store::InMemoryModelStore;

/// A running API server bound to an ephemeral port.
///
/// Holds the shutdown coordinator so the server stays up for the test's
/// lifetime; dropping it closes the broadcast channel and drains the server.
pub struct TestApp {
    pub base_url: String,
    _shutdown: Shutdown,
}

/// Start the full API server on 127.0.0.1 with an OS-assigned port.
pub async fn spawn_app() -> TestApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let store = Arc::new(InMemoryModelStore::new());
    let server = HttpServer::new(&ServerConfig::default(), store);

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestApp {
        base_url: format!("http://{}", addr),
        _shutdown: shutdown,
    }
}
