//! Route handlers for the cleanup HTTP API.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ptero_cleanup::{CleanupError, CleanupRequest, CleanupResponse};
use serde_json::json;

use super::AppState;
use super::error::ApiError;
use super::identity::CallerIdentity;

fn parse_request(body: &Bytes) -> Result<CleanupRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::validation(vec![
            "Request body is required".to_string(),
        ]));
    }
    serde_json::from_slice(body).map_err(|e| {
        ApiError::validation(vec![format!("Request body must be valid JSON: {}", e)])
    })
}

/// `POST /api/cleanup`
pub async fn cleanup(
    State(state): State<AppState>,
    CallerIdentity(identity): CallerIdentity,
    body: Bytes,
) -> Result<Json<CleanupResponse>, ApiError> {
    let request = parse_request(&body)?;
    let response = state.service.run(&request, &identity).await?;
    Ok(Json(response))
}

/// `POST /api/test-connection`
pub async fn test_connection(State(state): State<AppState>, body: Bytes) -> Response {
    let request = match parse_request(&body) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };

    match state.service.test_connection(&request).await {
        Ok(panel) => Json(json!({
            "success": true,
            "message": "Connection successful",
            "panel": panel,
            "permissions": "Connected",
        }))
        .into_response(),
        Err(err @ CleanupError::Validation(_)) => ApiError::from(err).into_response(),
        Err(err) => {
            let message = match err {
                CleanupError::Authentication(message) => message,
                other => other.to_string(),
            };
            let body = json!({
                "success": false,
                "error": "Connection failed",
                "message": message,
            });
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
    }
}

/// Any non-POST method on an API route.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
