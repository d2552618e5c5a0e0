//! Fatal scheduling errors.
//!
//! Only configuration that prevents any schedule from existing is an
//! error. Everything else degrades to a warning on the
//! [`GeneratedSchedule`](crate::models::GeneratedSchedule).

use thiserror::Error;

/// Errors that abort schedule generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The tournament start date is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid tournament start date '{0}': expected YYYY-MM-DD")]
    InvalidStartDate(String),

    /// The tournament start time is not an `HH:MM` or `HH:MM:SS` clock time.
    #[error("Invalid tournament start time '{0}': expected HH:MM")]
    InvalidStartTime(String),
}

/// Result alias for fallible scheduling operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
