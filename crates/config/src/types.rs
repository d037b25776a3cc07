//! Configuration types for ptero-cleanup.

use std::fmt;
use std::time::Duration;

use secrecy::SecretString;

use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE, DEFAULT_RATE_LIMIT_MAX_REQUESTS,
    DEFAULT_RATE_LIMIT_WINDOW_SECS, DEFAULT_TIMEOUT_SECS,
};

/// Panel address and application API key for one run.
///
/// Invariants:
/// - `base_url` never ends with a slash.
/// - The token is never printed by `Debug`.
#[derive(Clone)]
pub struct Credentials {
    base_url: String,
    api_token: SecretString,
}

impl Credentials {
    /// Create credentials, stripping trailing slashes from the base URL.
    pub fn new(base_url: impl Into<String>, api_token: SecretString) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            api_token,
        }
    }

    /// Normalized panel base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bearer token sent with every panel request.
    pub fn api_token(&self) -> &SecretString {
        &self.api_token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

/// Transport settings applied to every panel client.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Per-call timeout; a call exceeding it counts as a transport failure.
    pub timeout: Duration,
    /// Items requested per collection page.
    pub page_size: u32,
    /// Upper bound on pages fetched for one collection.
    pub max_pages: u32,
    /// Whether to skip TLS verification (for self-signed panel certificates).
    pub skip_verify: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
            skip_verify: false,
        }
    }
}

/// Sliding-window throttle applied per caller identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Runs allowed inside one window.
    pub max_requests: usize,
    /// Window length.
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            window: Duration::from_secs(DEFAULT_RATE_LIMIT_WINDOW_SECS),
        }
    }
}

/// HTTP surface settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Transport settings
    pub connection: ConnectionConfig,
    /// Throttle settings
    pub rate_limit: RateLimitConfig,
    /// HTTP surface settings
    pub server: ServerConfig,
}
