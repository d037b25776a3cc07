//! Error types for cleanup runs.
//!
//! Only failures that abort a run before its action loop are errors here.
//! Fetch and delete failures inside the loop are recorded in the report.

use std::time::Duration;

use thiserror::Error;

use crate::rate_limit::ceil_secs;

/// A cleanup run that ended without a report.
#[derive(Error, Debug)]
pub enum CleanupError {
    /// The request had one or more invalid fields; every violation is listed.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The caller used up its allowance for the current window.
    #[error("Rate limit exceeded. Try again after {} seconds.", ceil_secs(*reset_in))]
    RateLimited { reset_in: Duration },

    /// The connectivity check failed.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Anything else, e.g. the HTTP client could not be built.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CleanupError {
    /// Whole seconds until a rate-limited caller may retry.
    pub fn reset_in_secs(&self) -> Option<u64> {
        match self {
            Self::RateLimited { reset_in } => Some(ceil_secs(*reset_in)),
            _ => None,
        }
    }
}
