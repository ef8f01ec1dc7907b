//! Request handlers for the API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::http::server::AppState;
use crate::model::{EndpointModel, IncomingRequest, ValidationOutcome};
use crate::observability::metrics;
use crate::store::StoreError;

/// Error response carrying the status chosen by the boundary layer.
///
/// Serialized as the `{"error": "..."}` envelope.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let status = match &err {
            StoreError::InvalidModel { .. } => StatusCode::BAD_REQUEST,
            StoreError::DuplicateModel { .. } => StatusCode::CONFLICT,
            StoreError::ModelNotFound { .. } => StatusCode::NOT_FOUND,
        };
        // Client errors are safe to expose verbatim; anything else would be
        // logged and masked here instead.
        debug_assert!(err.is_client_error());
        Self::new(status, err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, format!("invalid JSON provided: {}", rejection.body_text()))
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub stored: usize,
    pub message: &'static str,
}

/// POST /models: register a batch of endpoint models.
pub async fn register_models(
    State(state): State<AppState>,
    payload: Result<Json<Vec<EndpointModel>>, JsonRejection>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let Json(models) = payload?;

    let count = models.len();
    let stored = state.store.register_all(models).map_err(|err| {
        tracing::warn!(error = %err, batch_size = count, "model registration rejected");
        metrics::record_request("models", "rejected");
        ApiError::from(err)
    })?;

    metrics::record_request("models", "ok");
    metrics::record_models_registered(stored);
    tracing::info!(stored, "model batch registered");

    Ok(Json(RegisterResponse {
        stored,
        message: "models stored successfully",
    }))
}

/// POST /validate: check one request against its registered model.
pub async fn validate_request(
    State(state): State<AppState>,
    payload: Result<Json<IncomingRequest>, JsonRejection>,
) -> Result<Json<ValidationOutcome>, ApiError> {
    let Json(request) = payload?;

    let model = state
        .store
        .lookup(&request.path, &request.method)
        .map_err(|err| {
            metrics::record_request("validate", "no_model");
            ApiError::from(err)
        })?;

    let outcome = state.validator.check(&request, &model);

    metrics::record_request("validate", if outcome.valid { "ok" } else { "anomalous" });
    metrics::record_anomalies(outcome.anomalies.len());

    if !outcome.valid {
        tracing::info!(
            path = %request.path,
            method = %request.method,
            anomalies = outcome.anomalies.len(),
            "anomalous request detected"
        );
    }

    Ok(Json(outcome))
}

/// GET /health: liveness probe on the main router.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}
