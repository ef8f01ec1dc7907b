//! Metrics collection and exposition.
//!
//! # Metrics
//! - `anomaly_detector_requests_total` (counter): API calls by endpoint
//!   and result
//! - `anomaly_detector_models_registered_total` (counter): models accepted
//!   into the registry
//! - `anomaly_detector_validation_anomalies_total` (counter): anomalies
//!   reported across all validation calls
//!
//! # Design Decisions
//! - The `metrics` facade is always recorded; the Prometheus exporter only
//!   exists when enabled in config
//! - Low-cardinality labels only (endpoint, result)

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;

const REQUESTS_TOTAL: &str = "anomaly_detector_requests_total";
const MODELS_REGISTERED_TOTAL: &str = "anomaly_detector_models_registered_total";
const VALIDATION_ANOMALIES_TOTAL: &str = "anomaly_detector_validation_anomalies_total";

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "metrics exporter listening"),
        Err(error) => tracing::error!(%error, "failed to install metrics exporter"),
    }
}

pub fn record_request(endpoint: &'static str, result: &'static str) {
    counter!(REQUESTS_TOTAL, "endpoint" => endpoint, "result" => result).increment(1);
}

pub fn record_models_registered(count: usize) {
    counter!(MODELS_REGISTERED_TOTAL).increment(count as u64);
}

pub fn record_anomalies(count: usize) {
    if count > 0 {
        counter!(VALIDATION_ANOMALIES_TOTAL).increment(count as u64);
    }
}
