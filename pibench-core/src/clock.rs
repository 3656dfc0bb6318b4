//! Monotonic Clock Abstraction
//!
//! The harness reads the clock exactly twice per run, around the
//! estimator invocation. Putting those reads behind a trait lets tests
//! drive the elapsed-time computation deterministically.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of monotonic readings for the benchmark harness.
pub trait Clock {
    /// Current reading. Monotonically non-decreasing within one clock
    /// instance; the absolute origin is unspecified.
    fn now(&self) -> Duration;
}

/// Production clock backed by `std::time::Instant`.
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

/// Test clock that advances by a fixed step on every reading.
///
/// A step of zero yields a frozen clock (elapsed time of exactly
/// zero), which is how the harness's zero-elapsed guard is exercised.
#[derive(Debug, Default)]
pub struct ManualClock {
    reading: Cell<Duration>,
    step: Duration,
}

impl ManualClock {
    /// Frozen clock: every reading returns zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock that ticks forward by `step` each time it is read.
    pub fn with_step(step: Duration) -> Self {
        Self {
            reading: Cell::new(Duration::ZERO),
            step,
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        let reading = self.reading.get();
        self.reading.set(reading + self.step);
        reading
    }
}
