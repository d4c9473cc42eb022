//! Clock capability.

use std::cell::Cell;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

/// Access to wall-clock and monotonic time.
///
/// Monotonic readings are expressed as time elapsed since the clock was
/// created, which is all the session needs for uptime arithmetic.
pub trait Clock {
    /// Current wall-clock time in the local timezone.
    fn now_local(&self) -> DateTime<Local>;

    /// Monotonic time elapsed since this clock was created.
    fn monotonic(&self) -> Duration;
}

/// Production clock over `Instant` and `chrono::Local`.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_local(&self) -> DateTime<Local> {
        Local::now()
    }

    fn monotonic(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Fixed clock for tests: wall time never moves, monotonic time advances
/// only when told to.
pub struct FixedClock {
    now: DateTime<Local>,
    monotonic: Cell<Duration>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            now,
            monotonic: Cell::new(Duration::ZERO),
        }
    }

    /// Advance the monotonic reading by `by`.
    pub fn advance(&self, by: Duration) {
        self.monotonic.set(self.monotonic.get() + by);
    }
}

impl Clock for FixedClock {
    fn now_local(&self) -> DateTime<Local> {
        self.now
    }

    fn monotonic(&self) -> Duration {
        self.monotonic.get()
    }
}
