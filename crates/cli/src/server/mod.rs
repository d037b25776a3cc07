//! HTTP surface for cleanup runs.
//!
//! Responsibilities:
//! - Expose `POST /api/cleanup` and `POST /api/test-connection`.
//! - Derive the caller identity used for rate limiting.
//! - Map run failures to JSON error responses.
//!
//! Does NOT handle:
//! - Validation, rate limiting or the run itself (see `ptero_cleanup::CleanupService`).
//!
//! Invariants:
//! - Non-POST methods on API routes answer 405 with a JSON body.
//! - CORS allows any origin.

mod error;
mod handlers;
mod identity;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::post;
use ptero_cleanup::CleanupService;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared state for every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CleanupService>,
}

/// Build the router with all API routes and middleware.
pub fn build_router(service: Arc<CleanupService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/cleanup",
            post(handlers::cleanup).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/test-connection",
            post(handlers::test_connection).fallback(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(AppState { service })
}

/// Serve the API on `listener` until Ctrl+C.
pub async fn serve(listener: TcpListener, service: Arc<CleanupService>) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    info!("Cleanup API listening on http://{}", addr);

    let app = build_router(service);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Cleanup API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use ptero_cleanup::InMemoryRateLimiter;
    use ptero_client::testing::{list_page, server_json};
    use ptero_config::{ConnectionConfig, RateLimitConfig};
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "ptla_router_test_token_value";

    fn app(max_requests: usize) -> Router {
        let limiter = InMemoryRateLimiter::new(RateLimitConfig {
            max_requests,
            window: Duration::from_secs(3600),
        });
        let service = CleanupService::new(Arc::new(limiter), ConnectionConfig::default());
        build_router(Arc::new(service))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value, axum::http::HeaderMap) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json, headers)
    }

    fn post_json(uri: &str, body: &Value, forwarded_for: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(addr) = forwarded_for {
            builder = builder.header("x-forwarded-for", addr);
        }
        builder
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    async fn mock_panel(connection_status: u16) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/application/users"))
            .and(query_param("per_page", "1"))
            .respond_with(
                ResponseTemplate::new(connection_status).set_body_json(list_page(vec![], 1, 1)),
            )
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/application/servers"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_page(
                vec![
                    server_json(1, "frozen", Some("running"), true),
                    server_json(2, "lobby", Some("running"), false),
                ],
                1,
                1,
            )))
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&mock_server)
            .await;
        mock_server
    }

    fn dry_run_body(panel: &MockServer) -> Value {
        json!({
            "panelUrl": panel.uri(),
            "apiKey": TOKEN,
            "dryRun": true,
        })
    }

    #[tokio::test]
    async fn test_cleanup_success() {
        let panel = mock_panel(200).await;
        let (status, body, _) = send(
            app(10),
            post_json("/api/cleanup", &dry_run_body(&panel), Some("203.0.113.1")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Cleanup completed (DRY RUN)");
        assert_eq!(
            body["report"]["summary"]["servers"],
            json!({"total": 2, "processed": 1, "deleted": 0})
        );
        assert_eq!(body["rateLimit"], json!({"remaining": 9, "resetIn": 3600}));
    }

    #[tokio::test]
    async fn test_cleanup_validation_lists_every_error() {
        let body = json!({
            "panelBaseUrl": "not a url",
            "apiToken": "short",
            "actions": ["removeAllServers", "dance"],
        });
        let (status, body, _) = send(app(10), post_json("/api/cleanup", &body, None)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(
            body["details"],
            json!([
                "panelBaseUrl must be a valid http(s) URL",
                "apiToken must be a valid Pterodactyl application API key",
                "Invalid action: dance",
            ])
        );
    }

    #[tokio::test]
    async fn test_cleanup_empty_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/cleanup")
            .body(Body::empty())
            .unwrap();
        let (status, body, _) = send(app(10), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"], json!(["Request body is required"]));
    }

    #[tokio::test]
    async fn test_cleanup_rate_limited_per_caller() {
        let panel = mock_panel(200).await;
        let app = app(1);
        let body = dry_run_body(&panel);

        let (status, _, _) = send(
            app.clone(),
            post_json("/api/cleanup", &body, Some("198.51.100.4")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, json, headers) = send(
            app.clone(),
            post_json("/api/cleanup", &body, Some("198.51.100.4")),
        )
        .await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(json["error"], "Rate limit exceeded");
        let reset_in = json["resetIn"].as_u64().unwrap();
        assert!(reset_in > 0 && reset_in <= 3600);
        assert_eq!(
            json["message"],
            format!("Too many requests. Try again after {} seconds.", reset_in)
        );
        assert_eq!(
            headers.get(header::RETRY_AFTER).unwrap().to_str().unwrap(),
            reset_in.to_string()
        );

        let (status, _, _) = send(app, post_json("/api/cleanup", &body, Some("198.51.100.5"))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cleanup_authentication_failure() {
        let panel = mock_panel(403).await;
        let (status, body, _) = send(
            app(10),
            post_json("/api/cleanup", &dry_run_body(&panel), None),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Authentication failed");
        assert_eq!(body["message"], "Invalid panel URL or API key");
        assert_eq!(
            body["details"],
            "Failed to connect to panel: API returned status 403"
        );
    }

    #[tokio::test]
    async fn test_non_post_is_method_not_allowed() {
        for uri in ["/api/cleanup", "/api/test-connection"] {
            let request = Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap();
            let (status, body, _) = send(app(10), request).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(body["error"], "Method not allowed");
            assert_eq!(body["message"], "Only POST method is allowed");
        }
    }

    #[tokio::test]
    async fn test_connection_endpoint() {
        let panel = mock_panel(200).await;
        let body = json!({"panelUrl": panel.uri(), "apiKey": TOKEN});
        let (status, json, _) = send(app(10), post_json("/api/test-connection", &body, None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Connection successful");
        assert_eq!(json["panel"], panel.uri());
    }

    #[tokio::test]
    async fn test_connection_endpoint_failure() {
        let panel = mock_panel(401).await;
        let body = json!({"panelUrl": panel.uri(), "apiKey": TOKEN});
        let (status, json, _) = send(app(10), post_json("/api/test-connection", &body, None)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Connection failed");
        assert_eq!(
            json["message"],
            "Failed to connect to panel: API returned status 401"
        );
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/cleanup")
            .header("origin", "https://dashboard.example.com")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();
        let (status, _, headers) = send(app(10), request).await;
        assert!(status.is_success());
        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap()
                .to_str()
                .unwrap(),
            "*"
        );
    }
}
