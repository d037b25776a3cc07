//! Metrics collection for panel API calls and cleanup runs.
//!
//! This module provides metrics collection for panel calls, including:
//! - Request latency histograms
//! - Request counters and error categorization
//! - Deletion and rate-limit rejection counters
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (see [`crate::metrics_exporter`])
//! - Persistent storage of metrics
//!
//! # Invariants
//! - All metrics use consistent label names: `endpoint`, `method`, `status`, `error_category`
//! - Metric recording is infallible
//! - Zero-cost when no metrics recorder is installed

use std::time::Duration;

use crate::models::ResourceKind;
use crate::outcome::CallOutcome;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "ptero_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "ptero_api_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "ptero_api_errors_total";

/// Metric name for pages fetched counter.
pub const METRIC_PAGES_FETCHED: &str = "ptero_api_pages_fetched_total";

/// Metric name for deletion counter.
pub const METRIC_DELETIONS_TOTAL: &str = "ptero_cleanup_deletions_total";

/// Metric name for rate-limit rejection counter.
pub const METRIC_RATE_LIMITED_TOTAL: &str = "ptero_cleanup_rate_limited_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, timeout, 5xx)
    Transport,
    /// HTTP 4xx client errors
    Http4xx,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
        }
    }

    /// Categorize a call outcome, `None` when the call succeeded.
    pub fn from_outcome<T>(outcome: &CallOutcome<T>) -> Option<Self> {
        match outcome {
            CallOutcome::Ok(_) => None,
            CallOutcome::ApiRejected { .. } => Some(ErrorCategory::Http4xx),
            CallOutcome::TransportFailed { .. } => Some(ErrorCategory::Transport),
        }
    }
}

/// Metrics collector for panel calls.
///
/// This struct provides a lightweight wrapper around the `metrics` crate macros,
/// providing type-safe methods for recording metrics with consistent labels.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    /// Whether metrics collection is enabled.
    enabled: bool,
}

impl MetricsCollector {
    /// Create a new metrics collector.
    ///
    /// The collector is enabled by default. Use [`Self::disabled()`] to create
    /// a collector that does not record any metrics.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a disabled metrics collector.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if metrics collection is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of a panel request.
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path (e.g., "/api/application/servers")
    /// * `method` - The HTTP method (e.g., "GET", "DELETE")
    /// * `duration` - The request duration
    /// * `status` - The HTTP status code, or None if the request failed before receiving a response
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record an error.
    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record a fetched collection page.
    pub fn record_page_fetched(&self, resource: ResourceKind) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_PAGES_FETCHED, "resource" => resource.path_segment())
            .increment(1);
    }

    /// Record a successful deletion.
    pub fn record_deletion(&self, resource: ResourceKind) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_DELETIONS_TOTAL, "resource" => resource.path_segment())
            .increment(1);
    }

    /// Record a cleanup run rejected by the rate limiter.
    pub fn record_rate_limited(&self) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_RATE_LIMITED_TOTAL).increment(1);
    }
}
