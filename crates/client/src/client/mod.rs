//! Main panel client and API methods.
//!
//! This module provides the primary [`PanelClient`] for talking to the
//! Pterodactyl application API with one set of credentials.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `servers`: Server listing and deletion
//! - `users`: User listing, per-user server lookup and deletion
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Classification or orchestration of deletions (see the cleanup crate)
//!
//! # Invariants
//! - Listing methods either return the complete collection or an error.
//! - Delete methods never return an error; they return a [`CallOutcome`].

pub mod builder;

mod servers;
mod users;

use secrecy::{ExposeSecret, SecretString};

use crate::endpoints;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::ResourceKind;
use crate::outcome::CallOutcome;

/// Pterodactyl application API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use ptero_client::PanelClient;
/// use secrecy::SecretString;
///
/// let client = PanelClient::builder()
///     .base_url("https://panel.example.com".to_string())
///     .api_token(SecretString::new("ptla_...".to_string().into()))
///     .build()?;
/// client.test_connection().await?;
/// ```
pub struct PanelClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_token: SecretString,
    pub(crate) page_size: u32,
    pub(crate) max_pages: u32,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl std::fmt::Debug for PanelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelClient")
            .field("base_url", &self.base_url)
            .field("api_token", &"[REDACTED]")
            .field("page_size", &self.page_size)
            .field("max_pages", &self.max_pages)
            .finish()
    }
}

impl PanelClient {
    /// Create a new client builder.
    pub fn builder() -> builder::PanelClientBuilder {
        builder::PanelClientBuilder::new()
    }

    /// Get the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Metrics collector attached to this client, if any.
    pub fn metrics(&self) -> Option<&MetricsCollector> {
        self.metrics.as_ref()
    }

    /// Check that the panel is reachable and accepts the token.
    pub async fn test_connection(&self) -> Result<()> {
        endpoints::test_connection(
            &self.http,
            &self.base_url,
            self.api_token.expose_secret(),
            self.metrics.as_ref(),
        )
        .await
    }

    /// Delete one resource; the outcome is always returned, never an error.
    pub async fn delete_resource(&self, kind: ResourceKind, id: u64) -> CallOutcome<()> {
        let outcome = endpoints::delete_resource(
            &self.http,
            &self.base_url,
            self.api_token.expose_secret(),
            kind,
            id,
            self.metrics.as_ref(),
        )
        .await;

        if outcome.is_ok()
            && let Some(m) = &self.metrics
        {
            m.record_deletion(kind);
        }
        outcome
    }
}
