//! Per-caller sliding-window rate limiting for cleanup runs.
//!
//! Each caller identity keeps the timestamps of its accepted runs inside the
//! trailing window. Timestamps older than the window are pruned before every
//! decision, so entries age out without a background task.
//!
//! # Invariants
//! - Check-and-record happens under one lock; concurrent checks never lose an increment.
//! - A denied check records nothing.
//! - After pruning, no identity holds more than `max_requests` timestamps.
//! - An identity whose newest run has left the window is dropped from the map.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use ptero_config::RateLimitConfig;
use serde::{Serialize, Serializer};
use tracing::debug;

/// Round a duration up to whole seconds.
pub(crate) fn ceil_secs(duration: Duration) -> u64 {
    duration.as_secs() + u64::from(duration.subsec_nanos() > 0)
}

fn serialize_ceil_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(ceil_secs(*duration))
}

/// Result of one rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitDecision {
    /// Whether the run may proceed.
    pub allowed: bool,
    /// Runs left in the current window after this one.
    pub remaining: usize,
    /// Time until the caller's allowance grows again.
    #[serde(serialize_with = "serialize_ceil_secs")]
    pub reset_in: Duration,
}

impl RateLimitDecision {
    /// `reset_in` rounded up to whole seconds.
    pub fn reset_in_secs(&self) -> u64 {
        ceil_secs(self.reset_in)
    }
}

/// Storage for per-identity request windows.
///
/// Implementations must make check-and-record atomic per identity.
pub trait RateLimitStore: Send + Sync {
    /// Decide whether `identity` may run now, recording the run when allowed.
    fn check(&self, identity: &str) -> RateLimitDecision;
}

/// Process-local rate limiter backed by a mutex-guarded map.
#[derive(Debug)]
pub struct InMemoryRateLimiter {
    config: RateLimitConfig,
    windows: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl InMemoryRateLimiter {
    /// Create a limiter with the given allowance and window.
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// The allowance this limiter enforces.
    pub fn config(&self) -> RateLimitConfig {
        self.config
    }

    /// Check `identity` as of `now`.
    pub fn check_at(&self, identity: &str, now: Instant) -> RateLimitDecision {
        let window = self.config.window;
        let max = self.config.max_requests;

        let mut windows = self.windows.lock().unwrap_or_else(PoisonError::into_inner);
        windows.retain(|_, timestamps| {
            timestamps
                .back()
                .is_some_and(|newest| now.saturating_duration_since(*newest) < window)
        });
        let timestamps = windows.entry(identity.to_string()).or_default();

        while let Some(oldest) = timestamps.front() {
            if now.saturating_duration_since(*oldest) >= window {
                timestamps.pop_front();
            } else {
                break;
            }
        }

        if timestamps.len() >= max {
            let reset_in = timestamps
                .front()
                .map(|oldest| window.saturating_sub(now.saturating_duration_since(*oldest)))
                .unwrap_or(window);
            debug!(identity, reset_in_secs = ceil_secs(reset_in), "Rate limit reached");
            return RateLimitDecision {
                allowed: false,
                remaining: 0,
                reset_in,
            };
        }

        timestamps.push_back(now);
        RateLimitDecision {
            allowed: true,
            remaining: max - timestamps.len(),
            reset_in: window,
        }
    }

    /// Number of identities currently tracked.
    pub fn tracked_identities(&self) -> usize {
        self.windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl RateLimitStore for InMemoryRateLimiter {
    fn check(&self, identity: &str) -> RateLimitDecision {
        self.check_at(identity, Instant::now())
    }
}
