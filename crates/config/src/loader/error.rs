//! Error types for configuration loading.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, bounds).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Panel URL is required. Set PTERO_PANEL_URL or pass --panel-url.")]
    MissingBaseUrl,

    #[error("API token is required. Set PTERO_API_TOKEN or pass --api-token.")]
    MissingApiToken,

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    #[error("invalid pagination settings: {message}")]
    InvalidPagination { message: String },

    #[error("invalid rate limit settings: {message}")]
    InvalidRateLimit { message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file")]
    DotenvUnknown,
}
