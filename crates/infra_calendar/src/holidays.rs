//! Holiday sets and default holiday providers.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use chrono::NaiveDate;
use tracing::trace;

use crate::error::CalendarError;

/// Canonical key format for calendar dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a timezone-naive `YYYY-MM-DD` calendar date.
///
/// Surrounding whitespace is ignored. Time-of-day suffixes are rejected; a
/// date here is never an instant.
///
/// # Examples
///
/// ```
/// use infra_calendar::parse_date;
///
/// let date = parse_date("2024-01-01").unwrap();
/// assert_eq!(date.to_string(), "2024-01-01");
/// assert!(parse_date("01/01/2024").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| CalendarError::InvalidDate(input.to_string()))
}

/// A set of calendar dates excluded from business-day counts.
///
/// Membership is calendar-date identity: two entries are equal when their
/// `YYYY-MM-DD` keys are equal. Insertion order is irrelevant and
/// duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Create an empty holiday set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a holiday set from `YYYY-MM-DD` strings.
    ///
    /// Fails on the first entry that is not a calendar date.
    pub fn parse<I, S>(keys: I) -> Result<Self, CalendarError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter()
            .map(|key| parse_date(key.as_ref()))
            .collect()
    }

    /// Normalised `YYYY-MM-DD` key for a date.
    pub fn key(date: NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Check whether a date is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of distinct holidays.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the set holds no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterate the holidays in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// All holiday keys in calendar order.
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(Self::key).collect()
    }

    /// Merge another set into this one.
    pub fn extend_from(&mut self, other: &HolidaySet) {
        self.extend(other.iter());
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl Extend<NaiveDate> for HolidaySet {
    fn extend<T: IntoIterator<Item = NaiveDate>>(&mut self, iter: T) {
        self.dates.extend(iter);
    }
}

/// Source of holidays for a given year.
pub trait HolidayProvider {
    /// Holidays observed in `year`, in the provider's own order.
    fn holidays_for_year(&self, year: i32) -> Vec<NaiveDate>;

    /// Collect the holidays of every year in `years` into a set.
    fn holiday_set(&self, years: RangeInclusive<i32>) -> HolidaySet {
        let set: HolidaySet = years
            .flat_map(|year| self.holidays_for_year(year))
            .collect();
        trace!(holidays = set.len(), "built holiday set");
        set
    }
}

/// Default holiday calendar: New Year's Day, Christmas Day and Christmas Eve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommonHolidays;

impl CommonHolidays {
    const RULES: [(u32, u32); 3] = [
        (1, 1),   // New Year's Day
        (12, 25), // Christmas Day
        (12, 24), // Christmas Eve
    ];
}

impl HolidayProvider for CommonHolidays {
    fn holidays_for_year(&self, year: i32) -> Vec<NaiveDate> {
        Self::RULES
            .iter()
            .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(year, month, day))
            .collect()
    }
}

/// Calendar without holidays; only weekends are excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHolidays;

impl HolidayProvider for NoHolidays {
    fn holidays_for_year(&self, _year: i32) -> Vec<NaiveDate> {
        Vec::new()
    }
}

/// Holidays recurring on the same month/day every year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedHolidays {
    rules: Vec<(u32, u32)>,
}

impl FixedHolidays {
    /// Build from `(month, day)` pairs.
    ///
    /// February 29th is accepted and simply skipped in non-leap years.
    pub fn new(rules: Vec<(u32, u32)>) -> Result<Self, CalendarError> {
        for &(month, day) in &rules {
            // 2024 is a leap year, so every real month/day exists in it
            if NaiveDate::from_ymd_opt(2024, month, day).is_none() {
                return Err(CalendarError::InvalidHoliday { month, day });
            }
        }
        Ok(Self { rules })
    }

    /// Parse `MM-DD` rules.
    pub fn parse<I, S>(rules: I) -> Result<Self, CalendarError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = rules
            .into_iter()
            .map(|rule| parse_month_day(rule.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(parsed)
    }
}

impl HolidayProvider for FixedHolidays {
    fn holidays_for_year(&self, year: i32) -> Vec<NaiveDate> {
        self.rules
            .iter()
            .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(year, month, day))
            .collect()
    }
}

fn parse_month_day(rule: &str) -> Result<(u32, u32), CalendarError> {
    let invalid = || CalendarError::InvalidDate(rule.to_string());
    let (month, day) = rule.trim().split_once('-').ok_or_else(invalid)?;
    let month = month.parse().map_err(|_| invalid())?;
    let day = day.parse().map_err(|_| invalid())?;
    Ok((month, day))
}

/// Default holidays for `year` as `YYYY-MM-DD` keys.
///
/// # Examples
///
/// ```
/// use infra_calendar::common_holidays;
///
/// assert_eq!(
///     common_holidays(2024),
///     vec!["2024-01-01", "2024-12-25", "2024-12-24"]
/// );
/// ```
pub fn common_holidays(year: i32) -> Vec<String> {
    CommonHolidays
        .holidays_for_year(year)
        .into_iter()
        .map(HolidaySet::key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_common_holidays_order() {
        assert_eq!(
            common_holidays(2025),
            vec!["2025-01-01", "2025-12-25", "2025-12-24"]
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("2024-01-01T00:00:00Z").is_err());
        assert_eq!(parse_date(" 2024-03-04 ").unwrap(), date(2024, 3, 4));
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = HolidaySet::parse(["2024-12-25", "2024-12-25", "2024-01-01"]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.keys(), vec!["2024-01-01", "2024-12-25"]);
    }

    #[test]
    fn test_fixed_holidays_leap_day() {
        let provider = FixedHolidays::parse(["02-29", "07-04"]).unwrap();
        assert_eq!(provider.holidays_for_year(2023), vec![date(2023, 7, 4)]);
        assert_eq!(
            provider.holidays_for_year(2024),
            vec![date(2024, 2, 29), date(2024, 7, 4)]
        );
    }

    #[test]
    fn test_fixed_holidays_invalid_rule() {
        assert_eq!(
            FixedHolidays::new(vec![(2, 30)]),
            Err(CalendarError::InvalidHoliday { month: 2, day: 30 })
        );
        assert!(FixedHolidays::parse(["July 4"]).is_err());
    }

    #[test]
    fn test_no_holidays() {
        assert!(NoHolidays.holiday_set(2000..=2030).is_empty());
    }
}
