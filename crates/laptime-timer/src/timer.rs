//! Timer - records one run of start, laps, commits and stop

use std::fmt;
use std::sync::Arc;

use laptime_core::{Lap, TimerError, TimerEvent, TimerResult, Timestamp};
use tracing::{debug, warn};

use crate::{Clock, SystemClock};

/// Name given to timers created without one
pub const DEFAULT_TIMER_NAME: &str = "no name";

/// Timer configuration
#[derive(Clone, Debug)]
pub struct TimerConfig {
    /// Name used for lookups in collections
    pub name: String,
    /// Source of every instant the timer records
    pub clock: Arc<dyn Clock>,
}

impl Default for TimerConfig {
    fn default() -> Self {
        TimerConfig {
            name: DEFAULT_TIMER_NAME.to_string(),
            clock: Arc::new(SystemClock),
        }
    }
}

impl TimerConfig {
    /// System clock, given name
    pub fn named(name: impl Into<String>) -> Self {
        TimerConfig {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

/// Where a timer is in its run cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    /// Never started
    Idle,
    /// Started and not stopped since
    Running,
    /// Stopped; a new start begins a fresh run
    Stopped,
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerState::Idle => f.write_str("idle"),
            TimerState::Running => f.write_str("running"),
            TimerState::Stopped => f.write_str("stopped"),
        }
    }
}

/// Named, restartable recorder of elapsed wall-clock time.
///
/// Each `start` begins a new run and discards the previous run's events and
/// laps. Within a run the event log is append-only and chronological, and
/// `laps` always matches the Lapped events in it one for one.
///
/// Constructing a timer has no side effects; registering it with a
/// [`Registry`](crate::Registry) is a separate step.
pub struct Timer {
    name: String,
    clock: Arc<dyn Clock>,
    start_time: Option<Timestamp>,
    end_time: Option<Timestamp>,
    events: Vec<TimerEvent>,
    laps: Vec<Lap>,
}

impl Timer {
    /// Create a timer on the system clock
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(TimerConfig::named(name))
    }

    /// Create a timer named "no name"
    pub fn unnamed() -> Self {
        Self::with_config(TimerConfig::default())
    }

    pub fn with_config(config: TimerConfig) -> Self {
        Timer {
            name: config.name,
            clock: config.clock,
            start_time: None,
            end_time: None,
            events: Vec::new(),
            laps: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Start of the current run
    pub fn start_time(&self) -> Option<Timestamp> {
        self.start_time
    }

    /// Last stop of the current run
    pub fn end_time(&self) -> Option<Timestamp> {
        self.end_time
    }

    /// Events of the current run, oldest first
    pub fn events(&self) -> &[TimerEvent] {
        &self.events
    }

    /// Laps of the current run, in creation order
    pub fn laps(&self) -> &[Lap] {
        &self.laps
    }

    pub fn state(&self) -> TimerState {
        match (self.start_time, self.end_time) {
            (None, _) => TimerState::Idle,
            (Some(_), None) => TimerState::Running,
            (Some(_), Some(_)) => TimerState::Stopped,
        }
    }

    /// Begin a new run. Always legal; clears the previous run.
    pub fn start(&mut self) {
        let now = self.clock.now();
        self.start_time = Some(now);
        self.end_time = None;
        self.events.clear();
        self.laps.clear();
        self.events.push(TimerEvent::started(now, now));
        debug!(timer = %self.name, at = %now, "timer started");
    }

    /// Record a lap measured from the latest start, lap or commit.
    /// Fails with `InvalidState` unless the timer is running.
    pub fn lap(&mut self) -> TimerResult<Lap> {
        let start_time = self.running_since("lap")?;
        let now = self.clock.now();
        let reference = self
            .events
            .iter()
            .rev()
            .find(|event| event.kind().is_lap_reference())
            .map(TimerEvent::time)
            .ok_or_else(|| {
                TimerError::InvalidState(format!(
                    "timer '{}' has no event to measure a lap from",
                    self.name
                ))
            })?;

        let lap = Lap::new(self.laps.len(), now.seconds_since(reference));
        self.laps.push(lap);
        self.events.push(TimerEvent::lapped(lap, start_time, now));
        debug!(timer = %self.name, index = lap.index(), duration = lap.duration(), "lap recorded");
        Ok(lap)
    }

    /// Record a labeled checkpoint without ending the run or creating a lap.
    /// Fails with `InvalidState` unless the timer is running.
    pub fn commit(&mut self, message: impl Into<String>) -> TimerResult<()> {
        let start_time = self.running_since("commit")?;
        let now = self.clock.now();
        let event = TimerEvent::committed(message, start_time, now);
        debug!(timer = %self.name, event = %event, "commit recorded");
        self.events.push(event);
        Ok(())
    }

    /// End the run.
    ///
    /// Stopping is permissive: a second stop overwrites `end_time` and logs
    /// another Stopped event, and stopping a timer that never started
    /// records a Stopped event measured from the stop instant itself.
    pub fn stop(&mut self) {
        let now = self.clock.now();
        match self.state() {
            TimerState::Running => debug!(timer = %self.name, at = %now, "timer stopped"),
            state => {
                warn!(timer = %self.name, %state, "stop called on a timer that is not running")
            }
        }
        self.end_time = Some(now);
        self.events
            .push(TimerEvent::stopped(self.start_time.unwrap_or(now), now));
    }

    /// Seconds from start to stop
    pub fn total_time(&self) -> TimerResult<f64> {
        let start = self.start_time.ok_or(TimerError::MissingState("start_time"))?;
        let end = self.end_time.ok_or(TimerError::MissingState("end_time"))?;
        Ok(end.seconds_since(start))
    }

    /// Mean lap duration in seconds.
    /// A run without laps is an error, never zero or NaN.
    pub fn average_lap(&self) -> TimerResult<f64> {
        if self.laps.is_empty() {
            return Err(TimerError::InvalidState(format!(
                "timer '{}' has no laps to average",
                self.name
            )));
        }
        let total: f64 = self.laps.iter().map(Lap::duration).sum();
        Ok(total / self.laps.len() as f64)
    }

    fn running_since(&self, operation: &str) -> TimerResult<Timestamp> {
        match (self.state(), self.start_time) {
            (TimerState::Running, Some(start_time)) => Ok(start_time),
            (state, _) => Err(TimerError::InvalidState(format!(
                "cannot {} timer '{}' while it is {}",
                operation, self.name, state
            ))),
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::unnamed()
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timer '{}'", self.name)
    }
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self)
    }
}
