//! Nullable clock — deterministic time for testing.

use std::cell::Cell;
use tokengov_types::Timestamp;

/// A deterministic monotonic clock for testing.
///
/// Time only advances when you tell it to. Engine operations take `now` as
/// an argument, so tests pass `clock.now()` and step the clock explicitly.
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial_tick: u64) -> Self {
        Self {
            current: Cell::new(initial_tick),
        }
    }

    /// Get the current tick.
    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.current.get())
    }

    /// Advance the clock by a number of ticks.
    pub fn advance(&self, ticks: u64) {
        self.current.set(self.current.get() + ticks);
    }

    /// Set the clock to a specific tick.
    pub fn set(&self, tick: u64) {
        self.current.set(tick);
    }
}
