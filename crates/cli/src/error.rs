//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map cleanup, client and configuration errors to those codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use ptero_cleanup::CleanupError;
use ptero_client::ClientError;
use ptero_config::ConfigError;

/// Structured exit codes for ptero-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - the panel rejected the API key or could not be checked.
    ///
    /// Scripts should verify the panel URL and API key.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ///
    /// Scripts may retry with exponential backoff.
    ConnectionError = 3,

    /// Validation error - malformed URL, token, action or option.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Rate limited - too many cleanup runs in the current window.
    ///
    /// Scripts should back off and retry later.
    RateLimited = 7,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&CleanupError> for ExitCode {
    fn from(err: &CleanupError) -> Self {
        match err {
            CleanupError::Validation(_) => ExitCode::ValidationError,
            CleanupError::RateLimited { .. } => ExitCode::RateLimited,
            CleanupError::Authentication(_) => ExitCode::AuthenticationFailed,
            CleanupError::Internal(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Authentication(_) => ExitCode::AuthenticationFailed,
            ClientError::InvalidUrl(_) => ExitCode::ValidationError,
            ClientError::Fetch { status: None, .. } => ExitCode::ConnectionError,
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }
            _ => ExitCode::GeneralError,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingBaseUrl
            | ConfigError::MissingApiToken
            | ConfigError::InvalidValue { .. } => ExitCode::ValidationError,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError when no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(e) = cause.downcast_ref::<CleanupError>() {
                return ExitCode::from(e);
            }
            if let Some(e) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(e);
            }
            if let Some(e) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(e);
            }
        }
        ExitCode::GeneralError
    }
}
