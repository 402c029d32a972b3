//! Timer registries
//!
//! A registry accumulates every timer handed to it and answers the same name
//! queries as a [`TimerCollection`]. Applications either own a `Registry`
//! and pass it where timers are created, or use [`Registry::global`], which
//! is initialized on first use and lives, never cleared, until the process
//! exits. Neither kind supports removing a timer.

use std::sync::OnceLock;

use parking_lot::Mutex;
use tracing::debug;

use crate::{SharedTimer, Timer, TimerCollection, TimerConfig};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Append-only collection of timers, safe to share between threads
#[derive(Debug, Default)]
pub struct Registry {
    timers: Mutex<TimerCollection>,
}

impl Registry {
    /// Create an empty, application-owned registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::new)
    }

    /// Add a constructed timer, returning its shared handle
    pub fn register(&self, timer: Timer) -> SharedTimer {
        let mut timers = self.timers.lock();
        debug!(timer = %timer.name(), index = timers.len(), "timer registered");
        timers.push(timer)
    }

    /// Add a timer that is already shared elsewhere.
    /// The timer's own lock is not taken.
    pub fn register_shared(&self, timer: SharedTimer) {
        let mut timers = self.timers.lock();
        debug!(timer = %timer.name(), index = timers.len(), "shared timer registered");
        timers.push_shared(timer);
    }

    /// Construct a system-clock timer and register it
    pub fn create(&self, name: impl Into<String>) -> SharedTimer {
        self.create_with_config(TimerConfig::named(name))
    }

    pub fn create_with_config(&self, config: TimerConfig) -> SharedTimer {
        self.register(Timer::with_config(config))
    }

    pub fn len(&self) -> usize {
        self.timers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.lock().is_empty()
    }

    /// Copy of the current membership; later registrations do not show up in it
    pub fn snapshot(&self) -> TimerCollection {
        self.timers.lock().clone()
    }

    pub fn filter_by_name(&self, pattern: &str) -> Vec<SharedTimer> {
        self.timers.lock().filter_by_name(pattern)
    }

    pub fn get_all_by_name(&self, name: &str) -> Vec<SharedTimer> {
        self.timers.lock().get_all_by_name(name)
    }

    pub fn get_first_by_name(&self, name: &str) -> Option<SharedTimer> {
        self.timers.lock().get_first_by_name(name)
    }
}
