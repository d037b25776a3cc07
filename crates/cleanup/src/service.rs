//! The cleanup run pipeline shared by every surface.
//!
//! Responsibilities:
//! - Order the stages of a run: validate, rate-limit, connectivity check, actions.
//! - Own the rate-limit store for the life of the process.
//! - Shape the success envelope returned to callers.
//!
//! Invariants:
//! - A run rejected at validation or client construction never consumes rate-limit allowance.
//! - No panel traffic happens before the rate-limit check passes.
//! - Stage failures before the action loop return an error and no report.

use std::sync::Arc;

use chrono::Utc;
use ptero_client::{MetricsCollector, PanelClient};
use ptero_config::{ConnectionConfig, Credentials};
use serde::Serialize;
use tracing::{Instrument, Span, error, field, info, info_span, warn};
use uuid::Uuid;

use crate::error::CleanupError;
use crate::orchestrator::run_cleanup;
use crate::rate_limit::{RateLimitDecision, RateLimitStore};
use crate::report::Report;
use crate::request::CleanupRequest;

/// Remaining allowance reported alongside a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitStatus {
    pub remaining: usize,
    pub reset_in: u64,
}

impl From<RateLimitDecision> for RateLimitStatus {
    fn from(decision: RateLimitDecision) -> Self {
        Self {
            remaining: decision.remaining,
            reset_in: decision.reset_in_secs(),
        }
    }
}

/// Envelope for a completed run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupResponse {
    pub success: bool,
    pub message: String,
    pub report: Report,
    pub rate_limit: RateLimitStatus,
}

impl CleanupResponse {
    fn completed(report: Report, decision: RateLimitDecision) -> Self {
        let message = if report.dry_run() {
            "Cleanup completed (DRY RUN)"
        } else {
            "Cleanup completed"
        };
        Self {
            success: true,
            message: message.to_string(),
            report,
            rate_limit: decision.into(),
        }
    }
}

/// Runs cleanup requests against the panels they name.
pub struct CleanupService {
    limiter: Arc<dyn RateLimitStore>,
    connection: ConnectionConfig,
    metrics: Option<MetricsCollector>,
}

impl CleanupService {
    /// Create a service using `limiter` for every caller.
    pub fn new(limiter: Arc<dyn RateLimitStore>, connection: ConnectionConfig) -> Self {
        Self {
            limiter,
            connection,
            metrics: None,
        }
    }

    /// Attach a metrics collector passed to every panel client.
    pub fn with_metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    fn client_for(&self, credentials: &Credentials) -> Result<PanelClient, CleanupError> {
        let mut builder = PanelClient::builder()
            .credentials(credentials)
            .from_config(&self.connection);
        if let Some(metrics) = &self.metrics {
            builder = builder.metrics(metrics.clone());
        }
        builder.build().map_err(|e| {
            error!(error = %e, "Failed to build panel client");
            CleanupError::Internal(e.to_string())
        })
    }

    /// Run `request` on behalf of `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`CleanupError::Validation`], [`CleanupError::RateLimited`],
    /// [`CleanupError::Authentication`] or [`CleanupError::Internal`] when the
    /// run stops before its action loop.
    pub async fn run(
        &self,
        request: &CleanupRequest,
        identity: &str,
    ) -> Result<CleanupResponse, CleanupError> {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            "cleanup_run",
            %run_id,
            identity,
            panel = field::Empty,
            dry_run = field::Empty
        );
        self.run_inner(request, identity).instrument(span).await
    }

    async fn run_inner(
        &self,
        request: &CleanupRequest,
        identity: &str,
    ) -> Result<CleanupResponse, CleanupError> {
        let validated = request.validate().map_err(|errors| {
            info!(violations = errors.len(), "Rejected invalid cleanup request");
            CleanupError::Validation(errors)
        })?;
        let span = Span::current();
        span.record("panel", validated.credentials.base_url());
        span.record("dry_run", validated.options.dry_run);

        // No I/O; a run that cannot build a client spends no allowance.
        let client = self.client_for(&validated.credentials)?;

        let decision = self.limiter.check(identity);
        if !decision.allowed {
            warn!(reset_in_secs = decision.reset_in_secs(), "Cleanup request rate limited");
            if let Some(m) = &self.metrics {
                m.record_rate_limited();
            }
            return Err(CleanupError::RateLimited {
                reset_in: decision.reset_in,
            });
        }

        client.test_connection().await.map_err(|e| {
            warn!(panel = client.base_url(), error = %e, "Panel connectivity check failed");
            CleanupError::Authentication(e.to_string())
        })?;

        let report = run_cleanup(&client, &validated.options, Utc::now()).await;
        Ok(CleanupResponse::completed(report, decision))
    }

    /// Check that the credentials in `request` reach a panel that accepts them.
    ///
    /// Returns the normalized panel URL on success. Not rate limited.
    ///
    /// # Errors
    ///
    /// Returns [`CleanupError::Validation`] for malformed credentials and
    /// [`CleanupError::Authentication`] when the panel check fails.
    pub async fn test_connection(&self, request: &CleanupRequest) -> Result<String, CleanupError> {
        let credentials = request
            .validate_credentials()
            .map_err(CleanupError::Validation)?;
        let client = self.client_for(&credentials)?;
        client.test_connection().await.map_err(|e| {
            warn!(panel = client.base_url(), error = %e, "Panel connectivity check failed");
            CleanupError::Authentication(e.to_string())
        })?;
        info!(panel = client.base_url(), "Panel connection verified");
        Ok(client.base_url().to_string())
    }
}

impl std::fmt::Debug for CleanupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CleanupService")
            .field("connection", &self.connection)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}
