//! laptime Timer - Named, restartable timers and their collections
//!
//! This crate implements the recording side of laptime:
//! - Clock sources (system wall clock, manual clock for tests)
//! - Timers with start/lap/commit/stop runs and derived statistics
//! - Ordered timer collections with name queries
//! - Registries that accumulate timers, including a process-wide one

pub mod clock;
pub mod timer;
pub mod collection;
pub mod registry;

pub use clock::*;
pub use timer::*;
pub use collection::*;
pub use registry::*;

pub use laptime_core::{EventKind, Lap, TimerError, TimerEvent, TimerResult, Timestamp};
