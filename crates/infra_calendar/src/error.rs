//! Calendar errors.

use thiserror::Error;

/// Errors that can occur when building calendars or parsing dates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Date string is not a `YYYY-MM-DD` calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Month/day rule that can never name a real date
    #[error("Invalid holiday rule: {month:02}-{day:02}")]
    InvalidHoliday { month: u32, day: u32 },
}
