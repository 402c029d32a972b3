//! Ordered timer collections with name queries

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::Timer;

/// Timer handle shared between its owner and any collection holding it.
///
/// A timer's name is fixed at construction, so the handle keeps a copy of it
/// and name lookups never take the timer's lock.
#[derive(Clone, Debug)]
pub struct SharedTimer {
    name: Arc<str>,
    timer: Arc<Mutex<Timer>>,
}

impl SharedTimer {
    pub fn new(timer: Timer) -> Self {
        SharedTimer {
            name: Arc::from(timer.name()),
            timer: Arc::new(Mutex::new(timer)),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lock(&self) -> MutexGuard<'_, Timer> {
        self.timer.lock()
    }

    /// Do both handles point at the same timer?
    pub fn ptr_eq(a: &SharedTimer, b: &SharedTimer) -> bool {
        Arc::ptr_eq(&a.timer, &b.timer)
    }
}

impl From<Timer> for SharedTimer {
    fn from(timer: Timer) -> Self {
        SharedTimer::new(timer)
    }
}

/// Ordered sequence of timers.
/// Insertion order is kept and names need not be unique.
#[derive(Clone, Debug, Default)]
pub struct TimerCollection {
    timers: Vec<SharedTimer>,
}

impl TimerCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a timer, returning its shared handle
    pub fn push(&mut self, timer: Timer) -> SharedTimer {
        let shared = SharedTimer::new(timer);
        self.timers.push(shared.clone());
        shared
    }

    /// Append an already shared timer
    pub fn push_shared(&mut self, timer: SharedTimer) {
        self.timers.push(timer);
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SharedTimer> {
        self.timers.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SharedTimer> {
        self.timers.iter()
    }

    /// Every timer whose name contains `pattern` (case-sensitive)
    pub fn filter_by_name(&self, pattern: &str) -> Vec<SharedTimer> {
        self.select(|name| name.contains(pattern))
    }

    /// Every timer whose name is exactly `name`
    pub fn get_all_by_name(&self, name: &str) -> Vec<SharedTimer> {
        self.select(|candidate| candidate == name)
    }

    /// First timer, in insertion order, whose name is exactly `name`
    pub fn get_first_by_name(&self, name: &str) -> Option<SharedTimer> {
        self.timers
            .iter()
            .find(|timer| timer.name() == name)
            .cloned()
    }

    fn select(&self, mut predicate: impl FnMut(&str) -> bool) -> Vec<SharedTimer> {
        self.timers
            .iter()
            .filter(|timer| predicate(timer.name()))
            .cloned()
            .collect()
    }
}

impl FromIterator<Timer> for TimerCollection {
    fn from_iter<I: IntoIterator<Item = Timer>>(iter: I) -> Self {
        TimerCollection {
            timers: iter.into_iter().map(SharedTimer::new).collect(),
        }
    }
}

impl FromIterator<SharedTimer> for TimerCollection {
    fn from_iter<I: IntoIterator<Item = SharedTimer>>(iter: I) -> Self {
        TimerCollection {
            timers: iter.into_iter().collect(),
        }
    }
}

impl Extend<Timer> for TimerCollection {
    fn extend<I: IntoIterator<Item = Timer>>(&mut self, iter: I) {
        self.timers.extend(iter.into_iter().map(SharedTimer::new));
    }
}

impl Extend<SharedTimer> for TimerCollection {
    fn extend<I: IntoIterator<Item = SharedTimer>>(&mut self, iter: I) {
        self.timers.extend(iter);
    }
}

impl IntoIterator for TimerCollection {
    type Item = SharedTimer;
    type IntoIter = std::vec::IntoIter<SharedTimer>;

    fn into_iter(self) -> Self::IntoIter {
        self.timers.into_iter()
    }
}

impl<'a> IntoIterator for &'a TimerCollection {
    type Item = &'a SharedTimer;
    type IntoIter = std::slice::Iter<'a, SharedTimer>;

    fn into_iter(self) -> Self::IntoIter {
        self.timers.iter()
    }
}
