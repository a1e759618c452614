//! Injected clock for timing the kernel section only.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time source, read as an offset from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Process-local monotonic clock backed by `Instant`.
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

/// Advances by a fixed step on every read, so a measured section always
/// takes exactly `step`. A zero step gives a frozen clock.
pub struct SteppingClock {
    current: Cell<Duration>,
    step: Duration,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        Self {
            current: Cell::new(Duration::ZERO),
            step,
        }
    }

    pub fn frozen() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Duration {
        let now = self.current.get();
        self.current.set(now + self.step);
        now
    }
}

#[derive(Debug)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Runs `f` between two clock reads.
pub fn measure<C: Clock + ?Sized, T>(clock: &C, f: impl FnOnce() -> T) -> Timed<T> {
    let start = clock.now();
    let value = f();
    let elapsed = clock.now().saturating_sub(start);
    Timed { value, elapsed }
}
