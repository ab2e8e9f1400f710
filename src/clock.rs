//! Monotonic clock capability
//!
//! All timing reads go through the `Clock` trait so tests can substitute a
//! deterministic source. A reading is a `Duration` from the clock's own
//! origin; only differences between two readings are meaningful.

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock: Send + Sync {
    /// Current monotonic reading, relative to the clock's own origin.
    fn now(&self) -> Duration;
}

/// Wall-clock monotonic time via `Instant`, origin fixed at construction.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-advanced clock for deterministic tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    reading: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the reading by `delta`.
    pub fn advance(&self, delta: Duration) {
        *self.lock() += delta;
    }

    /// Set the reading to an absolute value.
    pub fn set(&self, reading: Duration) {
        *self.lock() = reading;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Duration> {
        // A poisoned reading is still usable; recover it.
        self.reading.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.lock()
    }
}
