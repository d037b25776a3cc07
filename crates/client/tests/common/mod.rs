//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the panel client.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use std::time::Duration;

use secrecy::SecretString;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use ptero_client::testing::{list_page, list_without_meta, server_json, user_json};
#[allow(unused_imports)]
pub use ptero_client::{CallOutcome, ClientError, PanelClient, ResourceKind};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use ptero_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token accepted by every mock panel.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "ptla_integration_test_token";

/// Build a client pointed at the mock panel.
#[allow(dead_code)]
pub fn panel_client(server: &MockServer) -> PanelClient {
    PanelClient::builder()
        .base_url(server.uri())
        .api_token(SecretString::new(TEST_TOKEN.to_string().into()))
        .build()
        .expect("client should build")
}

/// Build a client with a short timeout for transport-failure tests.
#[allow(dead_code)]
pub fn panel_client_with_timeout(server: &MockServer, timeout: Duration) -> PanelClient {
    PanelClient::builder()
        .base_url(server.uri())
        .api_token(SecretString::new(TEST_TOKEN.to_string().into()))
        .timeout(timeout)
        .build()
        .expect("client should build")
}
