//! Exercises the HTTP layer against a test double of the store capability.

use std::sync::Arc;

use anomaly_detector::config::ServerConfig;
use anomaly_detector::http::HttpServer;
use anomaly_detector::lifecycle::Shutdown;
use anomaly_detector::model::{EndpointModel, Parameter, TypeTag};
use anomaly_detector::store::{ModelStore, StoreError};
use serde_json::{json, Value};

/// Double that answers every lookup with one canned model and refuses all
/// registrations as duplicates.
struct CannedStore;

impl ModelStore for CannedStore {
    fn register_all(&self, models: Vec<EndpointModel>) -> Result<usize, StoreError> {
        let first = models.first();
        Err(StoreError::DuplicateModel {
            path: first.map(|m| m.path.clone()).unwrap_or_default(),
            method: first.map(|m| m.method.clone()).unwrap_or_default(),
        })
    }

    fn lookup(&self, path: &str, method: &str) -> Result<EndpointModel, StoreError> {
        Ok(EndpointModel {
            path: path.to_string(),
            method: method.to_string(),
            query_params: vec![],
            headers: vec![],
            body: vec![Parameter {
                name: "id".to_string(),
                types: vec![TypeTag::Int],
                required: true,
            }],
        })
    }
}

async fn spawn_with_canned_store() -> (String, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(&ServerConfig::default(), Arc::new(CannedStore));

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (format!("http://{}", addr), shutdown)
}

#[tokio::test]
async fn test_handlers_use_injected_store() {
    let (base_url, _shutdown) = spawn_with_canned_store().await;
    let client = reqwest::Client::new();

    // No registration happened, but the double supplies a model anyway.
    let request = json!({
        "path": "/anything",
        "method": "GET",
        "body": [{"name": "id", "value": 7}]
    });
    let outcome: Value = client
        .post(format!("{}/validate", base_url))
        .json(&request)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(outcome["valid"], true);

    // The double's refusal surfaces through the boundary's status mapping.
    let response = client
        .post(format!("{}/models", base_url))
        .json(&json!([{"path": "/x", "method": "GET"}]))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 409);
}
