//! Error types for laptime

use thiserror::Error;

/// Timer contract violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// An operation needs a running timer, or a populated history, that is not there
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A derived value needs an instant that has not been recorded yet
    #[error("Missing state: {0} is not set")]
    MissingState(&'static str),
}

/// Result type for timer operations
pub type TimerResult<T> = Result<T, TimerError>;
