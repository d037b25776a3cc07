//! Integration tests for structured exit codes.
//!
//! These tests verify that ptero-cli returns the correct exit codes
//! for different error scenarios, enabling reliable shell scripting.

mod common;

use common::{mount_connection, ptero_cmd, ptero_cmd_for};
use wiremock::MockServer;

/// Test that a reachable panel returns exit code 0.
#[tokio::test]
async fn test_connection_success_returns_exit_code_0() {
    let panel = MockServer::start().await;
    mount_connection(&panel, 200).await;

    ptero_cmd_for(&panel)
        .arg("test-connection")
        .assert()
        .code(0);
}

/// Test that a rejected key returns exit code 2.
#[tokio::test]
async fn test_auth_failure_returns_exit_code_2() {
    let panel = MockServer::start().await;
    mount_connection(&panel, 401).await;

    ptero_cmd_for(&panel)
        .arg("test-connection")
        .assert()
        .code(2);
}

/// Test that a cleanup run against a rejecting panel returns exit code 2.
#[tokio::test]
async fn test_run_auth_failure_returns_exit_code_2() {
    let panel = MockServer::start().await;
    mount_connection(&panel, 403).await;

    ptero_cmd_for(&panel)
        .args(["run", "--dry-run"])
        .assert()
        .code(2);
}

/// Test that a missing panel URL returns exit code 5.
#[test]
fn test_missing_panel_url_returns_exit_code_5() {
    let mut cmd = ptero_cmd();
    cmd.env("PTERO_API_TOKEN", common::TEST_TOKEN);
    cmd.arg("test-connection").assert().code(5);
}

/// Test that an unknown action is rejected before any panel call.
#[tokio::test]
async fn test_invalid_action_returns_exit_code_5() {
    let panel = MockServer::start().await;
    common::forbid_deletes(&panel).await;

    ptero_cmd_for(&panel)
        .args(["run", "--action", "removeEverything"])
        .assert()
        .code(5)
        .stderr(predicates::str::contains("Invalid action: removeEverything"));

    assert!(panel.received_requests().await.unwrap_or_default().is_empty());
}

/// Test that a malformed key returns exit code 5.
#[test]
fn test_malformed_token_returns_exit_code_5() {
    let mut cmd = ptero_cmd();
    cmd.env("PTERO_PANEL_URL", "https://panel.example.com");
    cmd.env("PTERO_API_TOKEN", "not-a-panel-key");
    cmd.args(["run", "--dry-run"])
        .assert()
        .code(5)
        .stderr(predicates::str::contains(
            "apiToken must be a valid Pterodactyl application API key",
        ));
}

/// Test that a non-numeric page size in the environment returns exit code 5.
#[test]
fn test_invalid_page_size_returns_exit_code_5() {
    let mut cmd = ptero_cmd();
    cmd.env("PTERO_PAGE_SIZE", "lots");
    cmd.arg("test-connection").assert().code(5);
}
