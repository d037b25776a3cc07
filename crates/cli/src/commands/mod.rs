//! Command implementations.

pub mod run;
pub mod serve;
pub mod test_connection;

use std::sync::Arc;

use ptero_cleanup::{CleanupService, InMemoryRateLimiter};
use ptero_client::MetricsCollector;
use ptero_config::Config;

/// Build the cleanup service with a process-local rate limiter.
pub fn build_service(config: &Config, metrics: Option<MetricsCollector>) -> CleanupService {
    let limiter = Arc::new(InMemoryRateLimiter::new(config.rate_limit));
    let service = CleanupService::new(limiter, config.connection.clone());
    match metrics {
        Some(m) => service.with_metrics(m),
        None => service,
    }
}
