//! Time sources for window computation.
//!
//! The history query needs "now". Production code reads the wall clock; tests
//! plug in a [`FixedClock`] so the computed window is deterministic.

use chrono::{DateTime, Utc};

/// Source of the current instant, in Unix milliseconds.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    millis: i64,
}

impl FixedClock {
    pub fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            millis: instant.timestamp_millis(),
        }
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.millis
    }
}
