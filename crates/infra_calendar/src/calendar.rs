//! Business-day calendar and counting.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::holidays::HolidaySet;

/// Calendar identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CalendarId {
    /// New Year's Day, Christmas Eve and Christmas Day
    #[default]
    Common,
    /// Weekend only (Saturday/Sunday)
    WeekendOnly,
    /// Month/day rules supplied by configuration
    Custom,
}

/// Check if a date falls on Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Day-by-day classification of an inclusive date range.
///
/// Every day lands in exactly one bucket, so the buckets always sum to
/// `total_days`. A holiday on a weekend counts as a weekend day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayBreakdown {
    /// Monday–Friday days that are not holidays
    pub business_days: u32,
    /// Saturdays and Sundays
    pub weekend_days: u32,
    /// Weekdays removed by the holiday set
    pub holidays: u32,
}

impl DayBreakdown {
    /// Inclusive number of calendar days covered.
    pub fn total_days(&self) -> u32 {
        self.business_days + self.weekend_days + self.holidays
    }
}

/// Classify every day of `[start, end]`.
///
/// A degenerate range (`start > end`) yields an all-zero breakdown.
pub fn day_breakdown(start: NaiveDate, end: NaiveDate, holidays: &HolidaySet) -> DayBreakdown {
    let mut breakdown = DayBreakdown::default();
    for day in start.iter_days().take_while(|day| *day <= end) {
        if is_weekend(day) {
            breakdown.weekend_days += 1;
        } else if holidays.contains(day) {
            breakdown.holidays += 1;
        } else {
            breakdown.business_days += 1;
        }
    }
    breakdown
}

/// Count the business days in `[start, end]`, both ends inclusive.
///
/// A business day is Monday–Friday and not in `holidays`. Returns `0` when
/// `start` is after `end`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use infra_calendar::{count_business_days, HolidaySet};
///
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// assert_eq!(count_business_days(monday, sunday, &HolidaySet::new()), 5);
/// assert_eq!(count_business_days(sunday, monday, &HolidaySet::new()), 0);
/// ```
pub fn count_business_days(start: NaiveDate, end: NaiveDate, holidays: &HolidaySet) -> u32 {
    day_breakdown(start, end, holidays).business_days
}

/// Holiday calendar for business day calculations.
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    holidays: HolidaySet,
}

impl Calendar {
    /// Calendar excluding the given holidays.
    pub fn new(holidays: HolidaySet) -> Self {
        Self { holidays }
    }

    /// Check if a date is a business day.
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && !self.is_holiday(date)
    }

    /// Check if a date is a holiday (regardless of weekday).
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(date)
    }

    /// Get the next business day on or after the given date.
    ///
    /// Returns `None` if the supported date range ends first.
    pub fn next_business_day(&self, date: NaiveDate) -> Option<NaiveDate> {
        date.iter_days().find(|day| self.is_business_day(*day))
    }

    /// Get the previous business day on or before the given date.
    ///
    /// Returns `None` if the supported date range ends first.
    pub fn prev_business_day(&self, date: NaiveDate) -> Option<NaiveDate> {
        std::iter::successors(Some(date), NaiveDate::pred_opt).find(|day| self.is_business_day(*day))
    }

    /// Add business days to a date.
    ///
    /// Negative `days` walks backwards. The starting date itself is never
    /// counted, so adding one business day to a Friday lands on Monday.
    /// Returns `None` when the walk runs past `NaiveDate::MIN` or
    /// `NaiveDate::MAX` before the budget is used up.
    pub fn checked_add_business_days(&self, mut date: NaiveDate, days: i32) -> Option<NaiveDate> {
        let forward = days >= 0;
        let mut remaining = days.unsigned_abs();

        while remaining > 0 {
            date = if forward {
                date.succ_opt()?
            } else {
                date.pred_opt()?
            };
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }

        Some(date)
    }
}
