//! Timer event definitions
//!
//! Events are immutable records of what happened to a timer during a run.
//! Each event carries the run-start instant and its own instant, so the
//! time relative to the start of the run can be derived at any point.

use std::fmt;

use crate::{Lap, Timestamp};

/// Event type classification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Started,
    Stopped,
    Committed,
    Lapped,
}

impl EventKind {
    /// Name used when rendering an event
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Started => "TimerStarted",
            EventKind::Stopped => "TimerStopped",
            EventKind::Committed => "TimerCommitted",
            EventKind::Lapped => "TimerLapped",
        }
    }

    /// Can a lap be measured from an event of this kind?
    /// Stopped events never start a lap.
    #[inline]
    pub fn is_lap_reference(self) -> bool {
        matches!(self, EventKind::Started | EventKind::Lapped | EventKind::Committed)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Something that happened to a timer.
/// No ordering check is made between `start_time` and `time`.
#[derive(Clone, PartialEq)]
pub enum TimerEvent {
    Started {
        start_time: Timestamp,
        time: Timestamp,
    },
    Stopped {
        start_time: Timestamp,
        time: Timestamp,
    },
    Committed {
        message: String,
        start_time: Timestamp,
        time: Timestamp,
    },
    Lapped {
        /// Copy of the lap the timer recorded
        lap: Lap,
        start_time: Timestamp,
        time: Timestamp,
    },
}

impl TimerEvent {
    pub fn started(start_time: Timestamp, time: Timestamp) -> Self {
        TimerEvent::Started { start_time, time }
    }

    pub fn stopped(start_time: Timestamp, time: Timestamp) -> Self {
        TimerEvent::Stopped { start_time, time }
    }

    pub fn committed(message: impl Into<String>, start_time: Timestamp, time: Timestamp) -> Self {
        TimerEvent::Committed {
            message: message.into(),
            start_time,
            time,
        }
    }

    pub fn lapped(lap: Lap, start_time: Timestamp, time: Timestamp) -> Self {
        TimerEvent::Lapped { lap, start_time, time }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            TimerEvent::Started { .. } => EventKind::Started,
            TimerEvent::Stopped { .. } => EventKind::Stopped,
            TimerEvent::Committed { .. } => EventKind::Committed,
            TimerEvent::Lapped { .. } => EventKind::Lapped,
        }
    }

    /// Instant the timer run started
    pub fn start_time(&self) -> Timestamp {
        match self {
            TimerEvent::Started { start_time, .. }
            | TimerEvent::Stopped { start_time, .. }
            | TimerEvent::Committed { start_time, .. }
            | TimerEvent::Lapped { start_time, .. } => *start_time,
        }
    }

    /// Instant this event occurred
    pub fn time(&self) -> Timestamp {
        match self {
            TimerEvent::Started { time, .. }
            | TimerEvent::Stopped { time, .. }
            | TimerEvent::Committed { time, .. }
            | TimerEvent::Lapped { time, .. } => *time,
        }
    }

    /// Seconds from the run start to this event; zero for immediate events
    #[inline]
    pub fn relative_time(&self) -> f64 {
        self.time().seconds_since(self.start_time())
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            TimerEvent::Committed { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn lap(&self) -> Option<&Lap> {
        match self {
            TimerEvent::Lapped { lap, .. } => Some(lap),
            _ => None,
        }
    }
}

impl fmt::Display for TimerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?} s", self.kind(), self.relative_time())?;
        match self {
            TimerEvent::Committed { message, .. } => write!(f, " ({})", message),
            TimerEvent::Lapped { lap, .. } => write!(f, " ({})", lap),
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for TimerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::time::Duration;

    fn new_year() -> Timestamp {
        Timestamp::from_ymd_hms(2017, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_relative_time_one_minute() {
        let event = TimerEvent::started(
            Timestamp::from_ymd_hms(2017, 1, 1, 12, 0, 0).unwrap(),
            Timestamp::from_ymd_hms(2017, 1, 1, 12, 1, 0).unwrap(),
        );
        assert_eq!(event.relative_time(), 60.0);
        assert_eq!(event.to_string(), "TimerStarted: 60.0 s");
    }

    #[test]
    fn test_started_event() {
        let event = TimerEvent::started(new_year(), new_year());
        assert_eq!(event.kind(), EventKind::Started);
        assert_eq!(event.relative_time(), 0.0);
        assert_eq!(event.to_string(), "TimerStarted: 0.0 s");
        assert_eq!(format!("{:?}", event), "<TimerStarted: 0.0 s>");
    }

    #[test]
    fn test_stopped_event() {
        let event = TimerEvent::stopped(new_year(), new_year());
        assert_eq!(event.kind(), EventKind::Stopped);
        assert_eq!(event.relative_time(), 0.0);
        assert_eq!(event.to_string(), "TimerStopped: 0.0 s");
        assert_eq!(format!("{:?}", event), "<TimerStopped: 0.0 s>");
        assert!(event.message().is_none());
        assert!(event.lap().is_none());
    }

    #[test]
    fn test_committed_event() {
        let event = TimerEvent::committed("message", new_year(), new_year());
        assert_eq!(event.kind(), EventKind::Committed);
        assert_eq!(event.relative_time(), 0.0);
        assert_eq!(event.to_string(), "TimerCommitted: 0.0 s (message)");
        assert_eq!(format!("{:?}", event), "<TimerCommitted: 0.0 s (message)>");
        assert_eq!(event.message(), Some("message"));
    }

    #[test]
    fn test_lapped_event() {
        let event = TimerEvent::lapped(Lap::new(2, 1.0), new_year(), new_year());
        assert_eq!(event.kind(), EventKind::Lapped);
        assert_eq!(event.relative_time(), 0.0);
        assert_eq!(event.to_string(), "TimerLapped: 0.0 s (Lap 2: 1.0 s)");
        assert_eq!(format!("{:?}", event), "<TimerLapped: 0.0 s (Lap 2: 1.0 s)>");

        let lap = event.lap().unwrap();
        assert_eq!(lap.index(), 2);
        assert_eq!(lap.duration(), 1.0);
    }

    #[test]
    fn test_out_of_order_instants_are_kept() {
        // Clock stepped backwards between start and event
        let earlier = new_year().checked_sub(Duration::from_secs(2)).unwrap();
        let event = TimerEvent::stopped(new_year(), earlier);
        assert_eq!(event.relative_time(), -2.0);
        assert_eq!(event.to_string(), "TimerStopped: -2.0 s");
    }

    #[test]
    fn test_lap_reference_kinds() {
        assert!(EventKind::Started.is_lap_reference());
        assert!(EventKind::Lapped.is_lap_reference());
        assert!(EventKind::Committed.is_lap_reference());
        assert!(!EventKind::Stopped.is_lap_reference());
    }

    proptest! {
        #[test]
        fn prop_relative_time_is_offset_from_start(micros in 0u64..86_400_000_000) {
            let time = new_year().checked_add(Duration::from_micros(micros)).unwrap();
            let event = TimerEvent::committed("checkpoint", new_year(), time);
            prop_assert_eq!(event.relative_time(), micros as f64 / 1_000_000.0);
            prop_assert_eq!(event.start_time(), new_year());
            prop_assert_eq!(event.time(), time);
        }
    }
}
