//! HTTP error responses.
//!
//! Invariants:
//! - Every error body is JSON.
//! - Internal failures are logged in full and surfaced as a short message.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use ptero_cleanup::CleanupError;
use serde_json::json;

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// A run that stopped before its action loop.
    Cleanup(CleanupError),
    /// Any method other than POST on an API route.
    MethodNotAllowed,
}

impl ApiError {
    /// A 400 listing every problem with the request.
    pub fn validation(details: Vec<String>) -> Self {
        Self::Cleanup(CleanupError::Validation(details))
    }
}

impl From<CleanupError> for ApiError {
    fn from(err: CleanupError) -> Self {
        Self::Cleanup(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            ApiError::MethodNotAllowed => {
                let body = json!({
                    "error": "Method not allowed",
                    "message": "Only POST method is allowed",
                });
                return (StatusCode::METHOD_NOT_ALLOWED, Json(body)).into_response();
            }
            ApiError::Cleanup(err) => err,
        };

        match err {
            CleanupError::Validation(details) => {
                let body = json!({ "error": "Validation failed", "details": details });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            CleanupError::RateLimited { .. } => {
                let reset_in = err.reset_in_secs().unwrap_or_default();
                let body = json!({
                    "error": "Rate limit exceeded",
                    "message": format!("Too many requests. Try again after {} seconds.", reset_in),
                    "resetIn": reset_in,
                });
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    [(header::RETRY_AFTER, reset_in.to_string())],
                    Json(body),
                )
                    .into_response()
            }
            CleanupError::Authentication(details) => {
                let body = json!({
                    "error": "Authentication failed",
                    "message": "Invalid panel URL or API key",
                    "details": details,
                });
                (StatusCode::UNAUTHORIZED, Json(body)).into_response()
            }
            CleanupError::Internal(message) => {
                tracing::error!(error = %message, "Cleanup request failed");
                let body = json!({
                    "success": false,
                    "error": "Internal server error",
                    "message": message,
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
