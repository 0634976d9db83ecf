//! Error types for schedule computation.

use chrono::NaiveDate;

/// Result type for schedule computation.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Error type for schedule computation.
///
/// Every variant is an invalid-input condition detected before any output is
/// assembled; an empty plan is a valid result, never an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// Playback speed must be strictly positive.
    #[error("invalid playback speed {speed}: must be greater than 0")]
    InvalidPlaybackSpeed { speed: f64 },

    /// Daily study budget must be strictly positive.
    #[error("invalid daily study budget {seconds} seconds: must be greater than 0")]
    InvalidDailyBudget { seconds: f64 },

    /// The requested date range ends before it starts.
    #[error("end date {end} precedes start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Packing requires at least one study date.
    #[error("no study dates available to assign lectures to")]
    EmptyStudyDates,
}
