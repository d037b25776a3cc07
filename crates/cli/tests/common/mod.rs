//! Shared test utilities for ptero-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount the panel endpoints the commands touch.
//!
//! Invariants / Assumptions:
//! - No `PTERO_*` variable leaks in from the host environment.

#![allow(dead_code)]

use assert_cmd::Command;
use ptero_client::testing::list_page;
use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A key that passes the application key format check.
pub const TEST_TOKEN: &str = "ptla_cli_integration_token";

/// Returns a hermetic `ptero-cli` command for integration testing.
pub fn ptero_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ptero-cli");

    cmd.env("DOTENV_DISABLED", "1");

    for var in [
        "PTERO_PANEL_URL",
        "PTERO_API_TOKEN",
        "PTERO_TIMEOUT",
        "PTERO_PAGE_SIZE",
        "PTERO_MAX_PAGES",
        "PTERO_RATE_LIMIT_MAX_REQUESTS",
        "PTERO_RATE_LIMIT_WINDOW",
        "PTERO_BIND_ADDR",
        "PTERO_SKIP_VERIFY",
        "PTERO_OTLP_ENDPOINT",
        "PTERO_METRICS_BIND",
        "OTEL_SERVICE_NAME",
    ] {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a hermetic command pointed at `panel` with a valid key.
pub fn ptero_cmd_for(panel: &MockServer) -> Command {
    let mut cmd = ptero_cmd();
    cmd.env("PTERO_PANEL_URL", panel.uri());
    cmd.env("PTERO_API_TOKEN", TEST_TOKEN);
    cmd
}

/// Answer the connection check with `status`.
pub async fn mount_connection(panel: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/api/application/users"))
        .and(query_param("per_page", "1"))
        .respond_with(ResponseTemplate::new(status).set_body_json(list_page(vec![], 1, 1)))
        .mount(panel)
        .await;
}

/// Serve `servers` as a single listing page.
pub async fn mount_servers(panel: &MockServer, servers: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/api/application/servers"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(servers, 1, 1)))
        .mount(panel)
        .await;
}

/// Fail the test if any DELETE reaches the panel.
pub async fn forbid_deletes(panel: &MockServer) {
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(panel)
        .await;
}
