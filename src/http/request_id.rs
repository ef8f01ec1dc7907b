//! Request ID middleware.
//!
//! Attaches a UUIDv4 `x-request-id` to every response so log lines and
//! client reports can be correlated. An incoming id is passed through
//! untouched.

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const X_REQUEST_ID: &str = "x-request-id";

pub async fn attach_request_id(request: Request<Body>, next: Next) -> Response {
    let incoming = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let id = incoming.unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(X_REQUEST_ID, value);
    }

    response
}
