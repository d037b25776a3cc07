//! Shared mock-panel setup for cleanup integration tests.

use std::time::Duration;

use secrecy::SecretString;
use serde_json::Value;
use wiremock::matchers::{method, path, query_param};

#[allow(unused_imports)]
pub use ptero_client::testing::{list_page, list_without_meta, server_json, user_json};
#[allow(unused_imports)]
pub use ptero_client::{PanelClient, ResourceKind};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token accepted by every mock panel.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "ptla_integration_test_token";

/// Build a client pointed at the mock panel.
#[allow(dead_code)]
pub fn panel_client(server: &MockServer) -> PanelClient {
    panel_client_with_timeout(server, Duration::from_secs(5))
}

/// Build a client with a custom per-call timeout.
#[allow(dead_code)]
pub fn panel_client_with_timeout(server: &MockServer, timeout: Duration) -> PanelClient {
    PanelClient::builder()
        .base_url(server.uri())
        .api_token(SecretString::new(TEST_TOKEN.to_string().into()))
        .timeout(timeout)
        .build()
        .expect("client should build")
}

/// Serve `servers` as a single page.
#[allow(dead_code)]
pub async fn mount_servers(mock_server: &MockServer, servers: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/api/application/servers"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(servers, 1, 1)))
        .mount(mock_server)
        .await;
}

/// Serve `users` as a single page.
#[allow(dead_code)]
pub async fn mount_users(mock_server: &MockServer, users: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/api/application/users"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(users, 1, 1)))
        .mount(mock_server)
        .await;
}

/// Answer the connectivity check with `status`.
#[allow(dead_code)]
pub async fn mount_connection(mock_server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/api/application/users"))
        .and(query_param("per_page", "1"))
        .respond_with(ResponseTemplate::new(status).set_body_json(list_page(vec![], 1, 1)))
        .mount(mock_server)
        .await;
}

/// Accept a delete of one resource exactly `times` times.
#[allow(dead_code)]
pub async fn expect_delete(mock_server: &MockServer, kind: ResourceKind, id: u64, times: u64) {
    Mock::given(method("DELETE"))
        .and(path(kind.item_path(id)))
        .respond_with(ResponseTemplate::new(204))
        .expect(times)
        .mount(mock_server)
        .await;
}

/// Fail the test if any delete call reaches the panel.
#[allow(dead_code)]
pub async fn forbid_deletes(mock_server: &MockServer) {
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(mock_server)
        .await;
}
