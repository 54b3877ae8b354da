//! Timestamp type used for voting deadlines.
//!
//! A `Timestamp` is a tick on the external monotonic clock or height
//! source. It is not required to be wall-clock time; the engine only ever
//! compares ticks and adds fixed offsets to them. Callers supply `now` on
//! every time-sensitive operation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tick on the external monotonic clock (seconds, block height, or any
/// other non-decreasing integer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Tick zero.
    pub const ZERO: Self = Self(0);

    pub const fn new(tick: u64) -> Self {
        Self(tick)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// This tick plus `offset`, clamped at the maximum representable tick.
    pub fn saturating_add(&self, offset: u64) -> Self {
        Self(self.0.saturating_add(offset))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
