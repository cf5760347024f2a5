//! Human-readable project durations.
//!
//! Durations are expressed in business days and in five-day weeks rounded
//! to one decimal place.

use chrono::NaiveDate;
use infra_calendar::{count_business_days, day_breakdown, HolidaySet};

use crate::types::DateRange;

/// Business days in a working week.
const BUSINESS_DAYS_PER_WEEK: f64 = 5.0;

/// Breakdown of a date range into business, weekend and holiday days.
///
/// `total_days == business_days + weekend_days + holidays` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusinessDaysSummary {
    /// Weekdays that are not holidays
    pub business_days: u32,
    /// Inclusive calendar days in the range
    pub total_days: u32,
    /// Saturdays and Sundays in the range
    pub weekend_days: u32,
    /// Weekday holidays inside the range
    pub holidays: u32,
    /// e.g. `"5 business days (excluding 2 weekend days)"`
    pub description: String,
}

/// Summarise the business-day span of `[start, end]`.
///
/// Weekend days are counted directly, and only holidays that fall on a
/// weekday inside the range are reported, so no figure can go negative.
/// A degenerate range produces an all-zero summary.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use estimate_core::business_days_description;
/// use infra_calendar::HolidaySet;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// let summary = business_days_description(start, end, &HolidaySet::new());
///
/// assert_eq!(summary.total_days, 7);
/// assert_eq!(summary.description, "5 business days (excluding 2 weekend days)");
/// ```
pub fn business_days_description(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &HolidaySet,
) -> BusinessDaysSummary {
    let breakdown = day_breakdown(start, end, holidays);
    let total_days = DateRange::new(start, end).total_days();
    debug_assert_eq!(total_days, breakdown.total_days());

    let mut description = format!(
        "{} business days (excluding {} weekend days",
        breakdown.business_days, breakdown.weekend_days
    );
    if breakdown.holidays > 0 {
        description.push_str(&format!(" and {} holidays", breakdown.holidays));
    }
    description.push(')');

    BusinessDaysSummary {
        business_days: breakdown.business_days,
        total_days,
        weekend_days: breakdown.weekend_days,
        holidays: breakdown.holidays,
        description,
    }
}

/// Convert business days to five-day weeks, rounded half up to one decimal.
///
/// # Examples
///
/// ```
/// use estimate_core::business_days_to_weeks;
///
/// assert_eq!(business_days_to_weeks(5), 1.0);
/// assert_eq!(business_days_to_weeks(7), 1.4);
/// ```
pub fn business_days_to_weeks(business_days: u32) -> f64 {
    ((f64::from(business_days) / BUSINESS_DAYS_PER_WEEK) * 10.0).round() / 10.0
}

/// `"1 business day"` or `"<n> business days"`.
pub fn format_business_days(n: u32) -> String {
    if n == 1 {
        "1 business day".to_string()
    } else {
        format!("{} business days", n)
    }
}

/// Readable duration of `[start, end]`.
///
/// - under one week: `"3 business days"`
/// - under two weeks: `"1.4 week (7 business days)"`
/// - otherwise: `"2 weeks (10 business days)"`
pub fn format_project_duration(start: NaiveDate, end: NaiveDate, holidays: &HolidaySet) -> String {
    let business_days = count_business_days(start, end, holidays);
    let weeks = business_days_to_weeks(business_days);
    let days = format_business_days(business_days);

    if weeks < 1.0 {
        days
    } else if weeks < 2.0 {
        format!("{} week ({})", weeks, days)
    } else {
        format!("{} weeks ({})", weeks, days)
    }
}
