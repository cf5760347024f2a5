//! Schedule command implementation
//!
//! Projects an end date from a start date and a business-day budget.

use chrono::Datelike;
use estimate_core::format_business_days;
use infra_calendar::{parse_date, Calendar};
use tracing::info;

use crate::context::Context;
use crate::{CliError, Result};

/// Run the schedule command
///
/// The start date counts as the first business day when it is one, so a
/// one-day budget starting on a Monday ends that same Monday. A start on a
/// weekend or holiday rolls forward to the next business day.
pub fn run(ctx: &Context, start: &str, business_days: u32, extra_holidays: &[String]) -> Result<String> {
    if business_days == 0 {
        return Err(CliError::InvalidArgument(
            "business day budget must be at least 1".to_string(),
        ));
    }

    let start = parse_date(start)?;
    // Every calendar year holds well over 200 business days
    let span_years = i32::try_from(business_days / 200).unwrap_or(i32::MAX) + 1;
    let years = start.year()..=start.year().saturating_add(span_years);
    let calendar = Calendar::new(ctx.holidays(years, extra_holidays)?);

    let offset = i32::try_from(business_days - 1).unwrap_or(i32::MAX);
    let (first, end) = calendar
        .next_business_day(start)
        .and_then(|first| Some((first, calendar.checked_add_business_days(first, offset)?)))
        .ok_or_else(|| {
            CliError::InvalidArgument(format!(
                "{} from {} runs past the last supported date",
                format_business_days(business_days),
                start
            ))
        })?;
    info!(%start, %end, business_days, "scheduled project");

    Ok(format!(
        "{} -> {} ({})",
        first,
        end,
        format_business_days(business_days)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_one_week_from_monday() {
        let output = run(&Context::default(), "2024-01-08", 5, &[]).unwrap();
        assert_eq!(output, "2024-01-08 -> 2024-01-12 (5 business days)");
    }

    #[test]
    fn test_start_on_holiday_rolls_forward() {
        let output = run(&Context::default(), "2024-01-01", 1, &[]).unwrap();
        assert_eq!(output, "2024-01-02 -> 2024-01-02 (1 business day)");
    }

    #[test]
    fn test_crosses_year_end() {
        // Dec 24, Dec 25 and Jan 1 are skipped
        let output = run(&Context::default(), "2024-12-23", 6, &[]).unwrap();
        assert_eq!(output, "2024-12-23 -> 2025-01-02 (6 business days)");
    }

    #[test]
    fn test_zero_budget_rejected() {
        let result = run(&Context::default(), "2024-12-23", 0, &[]);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_budget_past_last_supported_date() {
        let start = NaiveDate::from_ymd_opt(NaiveDate::MAX.year(), 12, 20).unwrap();
        let result = run(&Context::default(), &start.to_string(), 50, &[]);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }
}
