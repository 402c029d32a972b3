//! laptime Core - Fundamental types and primitives
//!
//! This crate defines the value types shared by every timer:
//! - Wall-clock instants (Timestamp) and seconds arithmetic
//! - Laps recorded within a timer run
//! - Timer events (started, stopped, committed, lapped)
//! - Error types

pub mod time;
pub mod lap;
pub mod event;
pub mod error;

pub use time::*;
pub use lap::*;
pub use event::*;
pub use error::*;
