//! Time sources for recordings and persistence tracking
//!
//! The persistence tracker prunes its windows by wall-clock age, so time is
//! injected through the `Clock` trait instead of read inline. `SystemClock`
//! is the production source; `ManualClock` drives deterministic tests.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "now" as seconds since the Unix epoch
pub trait Clock: Send + Sync {
    fn now(&self) -> f64;
}

/// Wall-clock time source
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs_f64()
    }
}

/// Settable time source for tests
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Mutex<f64>,
}

impl ManualClock {
    /// Create a manual clock starting at the given epoch time
    pub fn new(start: f64) -> Self {
        ManualClock {
            now: Mutex::new(start),
        }
    }

    /// Set the current time
    pub fn set(&self, now: f64) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    /// Advance the current time by `seconds`
    pub fn advance(&self, seconds: f64) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) += seconds;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Milliseconds since the Unix epoch, for entity creation stamps
pub fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64
}
