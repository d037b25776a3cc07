//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(key: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("PTERO_PANEL_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(token) = env_var_or_none("PTERO_API_TOKEN") {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if let Some(skip) = parse_env::<bool>("PTERO_SKIP_VERIFY", "must be true or false")? {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = parse_env::<u64>("PTERO_TIMEOUT", "must be a number")? {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(size) = parse_env::<u32>("PTERO_PAGE_SIZE", "must be a positive integer")? {
        loader.set_page_size(Some(size));
    }
    if let Some(pages) = parse_env::<u32>("PTERO_MAX_PAGES", "must be a positive integer")? {
        loader.set_max_pages(Some(pages));
    }
    if let Some(max) = parse_env::<usize>(
        "PTERO_RATE_LIMIT_MAX_REQUESTS",
        "must be a positive integer",
    )? {
        loader.set_rate_limit_max_requests(Some(max));
    }
    if let Some(secs) = parse_env::<u64>("PTERO_RATE_LIMIT_WINDOW", "must be a number")? {
        loader.set_rate_limit_window(Some(Duration::from_secs(secs)));
    }
    if let Some(addr) = env_var_or_none("PTERO_BIND_ADDR") {
        loader.set_bind_addr(Some(addr));
    }
    Ok(())
}
