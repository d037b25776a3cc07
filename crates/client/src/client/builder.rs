//! Client builder for constructing [`PanelClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, api_token)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification, redirects)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`PanelClient`] methods)
//! - Validating the token's shape (done on the incoming cleanup request)
//!
//! # Invariants
//! - `base_url` and `api_token` are required fields and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use secrecy::SecretString;

use crate::client::PanelClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use ptero_config::{
    ConnectionConfig, Credentials,
    constants::{DEFAULT_MAX_PAGES, DEFAULT_MAX_REDIRECTS, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`PanelClient`].
///
/// All configuration options have defaults except for `base_url` and
/// `api_token`, which are required.
pub struct PanelClientBuilder {
    base_url: Option<String>,
    api_token: Option<SecretString>,
    skip_verify: bool,
    timeout: Duration,
    page_size: u32,
    max_pages: u32,
    metrics: Option<MetricsCollector>,
}

impl Default for PanelClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_token: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
            metrics: None,
        }
    }
}

impl PanelClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the panel, e.g. `https://panel.example.com`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the application API token sent as a bearer token.
    pub fn api_token(mut self, token: SecretString) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this for panels with self-signed certificates you trust.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the per-call timeout.
    ///
    /// Default is 30 seconds. A call exceeding it is a transport failure.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of items requested per collection page.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Set the maximum number of pages fetched for one collection.
    pub fn max_pages(mut self, pages: u32) -> Self {
        self.max_pages = pages;
        self
    }

    /// Set the metrics collector for API call performance tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Apply credentials.
    pub fn credentials(mut self, credentials: &Credentials) -> Self {
        self.base_url = Some(credentials.base_url().to_string());
        self.api_token = Some(credentials.api_token().clone());
        self
    }

    /// Apply transport settings from configuration.
    pub fn from_config(mut self, connection: &ConnectionConfig) -> Self {
        self.skip_verify = connection.skip_verify;
        self.timeout = connection.timeout;
        self.page_size = connection.page_size;
        self.max_pages = connection.max_pages;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://panel.example.com/"` -> `"https://panel.example.com"`
    /// - `"https://panel.example.com//"` -> `"https://panel.example.com"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`PanelClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::Authentication`] if `api_token` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<PanelClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let api_token = self
            .api_token
            .ok_or_else(|| ClientError::Authentication("api_token is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(PanelClient {
            http,
            base_url,
            api_token,
            page_size: self.page_size,
            max_pages: self.max_pages,
            metrics: self.metrics,
        })
    }
}
