//! Error types for the dashboard API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors returned directly by the HTTP layer.
///
/// Analysis failures are not listed here: a failed run answers with the
/// snapshot itself, whose banner already says what went wrong in the
/// user's language.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body did not parse into what the route expects.
    #[error("invalid request: {0}")]
    BadRequest(String),

    /// An analysis run is already in flight.
    #[error("analysis already running: {0}")]
    Busy(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ApiError::Busy(msg) => (StatusCode::CONFLICT, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
