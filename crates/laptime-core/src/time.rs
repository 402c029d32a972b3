//! Time primitives for laptime
//!
//! Timers read wall-clock instants and report every derived quantity
//! (relative times, lap durations, run totals) as fractional seconds.
//! Differences are signed: an instant earlier than its reference yields a
//! negative number of seconds rather than an error or a clamp to zero.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

/// Wall-clock instant, microsecond resolution for all arithmetic
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Read the system wall clock
    #[inline]
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    /// Wrap an instant already read from chrono
    #[inline]
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Timestamp(datetime)
    }

    /// Build a UTC instant from calendar fields.
    /// Returns `None` for fields that do not name a valid instant.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: u32,
    ) -> Option<Self> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .map(Timestamp)
    }

    #[inline]
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Signed seconds elapsed from `earlier` to `self`
    pub fn seconds_since(self, earlier: Timestamp) -> f64 {
        let delta = self.0.signed_duration_since(earlier.0);
        match delta.num_microseconds() {
            Some(micros) => micros as f64 / 1_000_000.0,
            // Beyond ±292k years; millisecond precision is plenty there
            None => delta.num_milliseconds() as f64 / 1_000.0,
        }
    }

    /// Instant `duration` later, or `None` past the representable range
    pub fn checked_add(self, duration: Duration) -> Option<Self> {
        let delta = chrono::Duration::from_std(duration).ok()?;
        self.0.checked_add_signed(delta).map(Timestamp)
    }

    /// Instant `duration` earlier, or `None` past the representable range
    pub fn checked_sub(self, duration: Duration) -> Option<Self> {
        let delta = chrono::Duration::from_std(duration).ok()?;
        self.0.checked_sub_signed(delta).map(Timestamp)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Timestamp(datetime)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ts({})", self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
