//! Timeout helpers used across the crate.
//!
//! Every poll interval and settle delay in the crate goes through these so
//! tests and code can express timing in milliseconds clearly.

use std::time::Duration;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Suspend the current thread for the given number of milliseconds.
pub fn sleep_ms(interval_ms: u64) {
    std::thread::sleep(ms(interval_ms));
}
