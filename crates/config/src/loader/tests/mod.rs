//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and bounds validation.
//! - Test environment variable handling and precedence.
//! - Test dotenv gating.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;

pub mod validation_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
