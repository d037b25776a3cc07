//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Build the final `Config` and, when a command needs them, `Credentials`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods called after `from_env()` override environment values.
//! - Credentials are optional at load time; the `serve` command receives them per request.

use secrecy::SecretString;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{MAX_PAGE_SIZE, MAX_RATE_LIMIT_WINDOW_SECS, MAX_TIMEOUT_SECS};
use crate::types::{Config, ConnectionConfig, Credentials, RateLimitConfig, ServerConfig};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    api_token: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    page_size: Option<u32>,
    max_pages: Option<u32>,
    rate_limit_max_requests: Option<usize>,
    rate_limit_window: Option<Duration>,
    bind_addr: Option<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but cannot be parsed or read.
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the panel base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the application API token.
    pub fn with_api_token(mut self, token: String) -> Self {
        self.api_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the collection page size.
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Set the maximum number of pages fetched per collection.
    pub fn with_max_pages(mut self, pages: u32) -> Self {
        self.max_pages = Some(pages);
        self
    }

    /// Set the number of runs allowed per caller inside one window.
    pub fn with_rate_limit_max_requests(mut self, max: usize) -> Self {
        self.rate_limit_max_requests = Some(max);
        self
    }

    /// Set the rate-limit window length.
    pub fn with_rate_limit_window(mut self, window: Duration) -> Self {
        self.rate_limit_window = Some(window);
        self
    }

    /// Set the HTTP bind address.
    pub fn with_bind_addr(mut self, addr: String) -> Self {
        self.bind_addr = Some(addr);
        self
    }

    /// Build the final configuration.
    pub fn build(&self) -> Result<Config, ConfigError> {
        let defaults = ConnectionConfig::default();
        let connection = ConnectionConfig {
            timeout: self.timeout.unwrap_or(defaults.timeout),
            page_size: self.page_size.unwrap_or(defaults.page_size),
            max_pages: self.max_pages.unwrap_or(defaults.max_pages),
            skip_verify: self.skip_verify.unwrap_or(defaults.skip_verify),
        };
        Self::validate_connection(&connection)?;

        let rate_defaults = RateLimitConfig::default();
        let rate_limit = RateLimitConfig {
            max_requests: self
                .rate_limit_max_requests
                .unwrap_or(rate_defaults.max_requests),
            window: self.rate_limit_window.unwrap_or(rate_defaults.window),
        };
        Self::validate_rate_limit(&rate_limit)?;

        let server = match self.bind_addr {
            Some(ref addr) => ServerConfig {
                bind_addr: addr.clone(),
            },
            None => ServerConfig::default(),
        };

        Ok(Config {
            connection,
            rate_limit,
            server,
        })
    }

    /// Build the panel credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBaseUrl`] or [`ConfigError::MissingApiToken`]
    /// when either value was never supplied, and [`ConfigError::InvalidValue`]
    /// when the base URL is not an absolute http(s) URL.
    pub fn build_credentials(&self) -> Result<Credentials, ConfigError> {
        let base_url = self
            .base_url
            .as_deref()
            .map(validate_and_normalize_base_url)
            .transpose()?
            .ok_or(ConfigError::MissingBaseUrl)?;

        let token = self.api_token.clone().ok_or(ConfigError::MissingApiToken)?;

        Ok(Credentials::new(base_url, token))
    }

    fn validate_connection(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }
        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        if connection.page_size == 0 || connection.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidPagination {
                message: format!(
                    "page size must be between 1 and {} (got {})",
                    MAX_PAGE_SIZE, connection.page_size
                ),
            });
        }
        if connection.max_pages == 0 {
            return Err(ConfigError::InvalidPagination {
                message: "max pages must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    fn validate_rate_limit(rate_limit: &RateLimitConfig) -> Result<(), ConfigError> {
        if rate_limit.max_requests == 0 {
            return Err(ConfigError::InvalidRateLimit {
                message: "max requests must be greater than 0".to_string(),
            });
        }
        let window_secs = rate_limit.window.as_secs();
        if window_secs == 0 || window_secs > MAX_RATE_LIMIT_WINDOW_SECS {
            return Err(ConfigError::InvalidRateLimit {
                message: format!(
                    "window must be between 1 and {} seconds (got {})",
                    MAX_RATE_LIMIT_WINDOW_SECS, window_secs
                ),
            });
        }
        Ok(())
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_api_token(&mut self, token: Option<SecretString>) {
        self.api_token = token;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_page_size(&mut self, size: Option<u32>) {
        self.page_size = size;
    }

    pub(crate) fn set_max_pages(&mut self, pages: Option<u32>) {
        self.max_pages = pages;
    }

    pub(crate) fn set_rate_limit_max_requests(&mut self, max: Option<usize>) {
        self.rate_limit_max_requests = max;
    }

    pub(crate) fn set_rate_limit_window(&mut self, window: Option<Duration>) {
        self.rate_limit_window = window;
    }

    pub(crate) fn set_bind_addr(&mut self, addr: Option<String>) {
        self.bind_addr = addr;
    }
}

/// Validates and normalizes a panel base URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Treat blank/whitespace-only as missing (returns Err(ConfigError::MissingBaseUrl))
/// - Parse as an absolute URL
/// - Require scheme is http or https
/// - Require host is present
/// - Normalize by stripping trailing slash
pub fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "panel_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://panel.example.com): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "panel_url".into(),
            message: format!(
                "scheme must be http or https (e.g. https://panel.example.com), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "panel_url".into(),
            message: "host is required (e.g. https://panel.example.com)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
