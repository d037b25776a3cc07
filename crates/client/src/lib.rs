//! Pterodactyl application API client.
//!
//! This crate provides a typed client for the panel's application API:
//! paginated listing of servers and users, per-user server lookup, and
//! single-item deletion. Every call is classified into a [`CallOutcome`]
//! so fetch and delete paths treat API refusals and transport failures
//! the same way.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
pub mod outcome;
pub mod tracing;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::PanelClient;
pub use client::builder::PanelClientBuilder;
pub use error::{ClientError, Result};
pub use crate::metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{ResourceKind, Server, User};
pub use outcome::CallOutcome;
pub use crate::tracing::{TracingConfig, TracingError, TracingGuard};
