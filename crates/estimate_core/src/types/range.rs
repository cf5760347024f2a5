//! Inclusive calendar date ranges.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use infra_calendar::{parse_date, CalendarError};

/// An inclusive range of timezone-naive calendar dates.
///
/// A range whose `start` is after its `end` is *degenerate*: it is still a
/// valid value, it simply covers no days.
///
/// # Examples
///
/// ```
/// use estimate_core::types::DateRange;
///
/// let range = DateRange::parse("2024-01-01", "2024-01-07").unwrap();
/// assert_eq!(range.total_days(), 7);
/// assert!(!range.is_degenerate());
///
/// let reversed = DateRange::parse("2024-01-07", "2024-01-01").unwrap();
/// assert_eq!(reversed.total_days(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateRange {
    /// First day of the range
    pub start: NaiveDate,
    /// Last day of the range (inclusive)
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range; never fails, even when `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse a range from two `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, CalendarError> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    /// Whether `start` is after `end`.
    pub fn is_degenerate(&self) -> bool {
        self.start > self.end
    }

    /// Inclusive calendar-day count; `0` for a degenerate range.
    pub fn total_days(&self) -> u32 {
        if self.is_degenerate() {
            return 0;
        }
        let days = (self.end - self.start).num_days() + 1;
        u32::try_from(days).unwrap_or(u32::MAX)
    }

    /// Calendar years touched by the range, for building holiday sets.
    ///
    /// A degenerate range still reports the years of both endpoints.
    pub fn years(&self) -> RangeInclusive<i32> {
        let (first, last) = if self.is_degenerate() {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        };
        first.year()..=last.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_spans_endpoints() {
        let range = DateRange::parse("2024-12-20", "2026-01-05").unwrap();
        assert_eq!(range.years(), 2024..=2026);

        let reversed = DateRange::parse("2026-01-05", "2024-12-20").unwrap();
        assert_eq!(reversed.years(), 2024..=2026);
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::parse("2024-02-29", "2024-02-29").unwrap();
        assert_eq!(range.total_days(), 1);
    }

    #[test]
    fn test_parse_error_names_input() {
        let err = DateRange::parse("2024-01-01", "soon").unwrap_err();
        assert_eq!(err, CalendarError::InvalidDate("soon".to_string()));
    }
}
