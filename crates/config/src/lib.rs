//! Configuration management for ptero-cleanup.
//!
//! This crate provides types and loaders for the panel connection, the
//! per-caller throttle, and the HTTP surface, sourced from environment
//! variables, an optional `.env` file, and command-line overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none, validate_and_normalize_base_url};
pub use types::{Config, ConnectionConfig, Credentials, RateLimitConfig, ServerConfig};
