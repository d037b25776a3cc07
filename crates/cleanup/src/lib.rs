//! Cleanup runs against a Pterodactyl panel.
//!
//! This crate turns a validated cleanup request into a [`Report`]:
//! - [`request`]: inbound request shape and validation
//! - [`rate_limit`]: per-caller sliding-window throttle
//! - [`classify`]: pure predicates deciding which resources match an action
//! - [`orchestrator`]: per-action sweeps over the panel's collections
//! - [`report`]: the append-only run report
//! - [`service`]: the full run pipeline shared by the CLI and HTTP surfaces

pub mod classify;
pub mod error;
pub mod orchestrator;
pub mod rate_limit;
pub mod report;
pub mod request;
pub mod service;

pub use classify::{MatchReason, is_empty, is_inactive, is_offline};
pub use error::CleanupError;
pub use orchestrator::run_cleanup;
pub use rate_limit::{InMemoryRateLimiter, RateLimitDecision, RateLimitStore};
pub use report::{ActionError, CategorySummary, Details, ItemOutcome, Report, Subject, Summary};
pub use request::{Action, CleanupOptions, CleanupRequest, RunOptions, ValidatedRequest};
pub use service::{CleanupResponse, CleanupService, RateLimitStatus};
