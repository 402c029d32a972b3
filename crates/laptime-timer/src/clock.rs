//! Clock sources for laptime timers

use std::fmt;
use std::time::Duration;

use laptime_core::Timestamp;
use parking_lot::Mutex;

/// Supplies the current instant on demand
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> Timestamp;
}

/// System wall clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock that only moves when told to.
/// Share it through an `Arc` to drive several timers from one test.
#[derive(Debug)]
pub struct ManualClock {
    value: Mutex<Timestamp>,
}

impl ManualClock {
    /// Create a manual clock frozen at `start`
    pub fn new(start: Timestamp) -> Self {
        ManualClock {
            value: Mutex::new(start),
        }
    }

    /// Jump to an arbitrary instant, backwards included
    pub fn set(&self, to: Timestamp) {
        *self.value.lock() = to;
    }

    /// Move forward by `dt`.
    /// Stays put if the result would leave the representable range.
    pub fn advance(&self, dt: Duration) -> Timestamp {
        let mut value = self.value.lock();
        if let Some(next) = value.checked_add(dt) {
            *value = next;
        }
        *value
    }

    /// Move backward by `dt`, as a stepped system clock would
    pub fn rewind(&self, dt: Duration) -> Timestamp {
        let mut value = self.value.lock();
        if let Some(prev) = value.checked_sub(dt) {
            *value = prev;
        }
        *value
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Timestamp::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.value.lock()
    }
}
