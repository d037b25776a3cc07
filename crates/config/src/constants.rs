//! Centralized constants for the ptero-cleanup workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed per-call timeout in seconds (10 minutes).
pub const MAX_TIMEOUT_SECS: u64 = 600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// User agent sent with every panel request.
pub const USER_AGENT: &str = concat!("ptero-cleanup/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Pagination Defaults
// =============================================================================

/// Items requested per page from collection endpoints.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Largest page size the panel accepts.
pub const MAX_PAGE_SIZE: u32 = 500;

/// Upper bound on pages fetched for one collection.
///
/// Guards against a panel that keeps reporting more pages than it has.
pub const DEFAULT_MAX_PAGES: u32 = 1000;

// =============================================================================
// Rate Limiting Defaults
// =============================================================================

/// Cleanup runs allowed per caller identity within one window.
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: usize = 10;

/// Sliding window length in seconds (1 hour).
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 3600;

/// Maximum allowed rate-limit window in seconds (24 hours).
pub const MAX_RATE_LIMIT_WINDOW_SECS: u64 = 86400;

// =============================================================================
// Classification Defaults
// =============================================================================

/// A server whose last activity is older than this is considered offline.
pub const OFFLINE_ACTIVITY_THRESHOLD_HOURS: i64 = 24;

/// Default number of days without activity before a user counts as inactive.
pub const DEFAULT_INACTIVITY_THRESHOLD_DAYS: u32 = 30;

/// Prefix every application API key issued by the panel carries.
pub const API_TOKEN_PREFIX: &str = "ptla_";

/// Tokens must be strictly longer than this.
pub const MIN_API_TOKEN_LEN: usize = 20;

// =============================================================================
// Server Defaults
// =============================================================================

/// Default bind address for the HTTP surface.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
