//! Error types for the panel client.

use thiserror::Error;

use crate::models::ResourceKind;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during panel client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The connectivity check did not get a 200 from the panel.
    #[error("Failed to connect to panel: {0}")]
    Authentication(String),

    /// A collection listing failed; nothing from that listing is returned.
    #[error("Failed to fetch {resource}: {message}")]
    Fetch {
        resource: ResourceKind,
        status: Option<u16>,
        message: String,
    },

    /// The panel kept reporting further pages past the configured bound.
    #[error("Failed to fetch {resource}: exceeded the limit of {max_pages} pages")]
    PageLimitExceeded {
        resource: ResourceKind,
        max_pages: u32,
    },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid response format from the panel.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// HTTP client construction or transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl ClientError {
    /// HTTP status the panel answered with, when the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => *status,
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }
}
