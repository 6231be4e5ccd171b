//! Time sources for animation.
//!
//! Animations sample a [`Clock`] rather than calling `Instant::now()`
//! directly. Production code uses [`MonotonicClock`]; tests inject a
//! [`ManualClock`] and advance it explicitly, which makes cancellation
//! ordering and progress values testable without a real timer.

use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// A source of monotonic time for animations.
///
/// Implementations return the time elapsed since an arbitrary fixed
/// origin. Only differences between samples are meaningful.
pub trait Clock: Send + Sync {
    /// The current time, relative to the clock's origin.
    fn now(&self) -> Duration;
}

/// A clock backed by [`Instant`], anchored at its creation time.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock anchored at the current instant.
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

/// A manually advanced clock for tests.
///
/// Starts at zero and only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Mutex<Duration>,
}

impl ManualClock {
    /// Create a clock frozen at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by `delta`.
    pub fn advance(&self, delta: Duration) {
        *self.now.lock() += delta;
    }

    /// Set the clock to an absolute time.
    pub fn set(&self, now: Duration) {
        *self.now.lock() = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock()
    }
}
