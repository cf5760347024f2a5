//! Days command implementation
//!
//! Breaks a date range down into business, weekend and holiday days.

use estimate_core::{business_days_description, DateRange};
use tracing::info;

use crate::context::Context;
use crate::Result;

/// Run the days command
pub fn run(ctx: &Context, start: &str, end: &str, extra_holidays: &[String], json: bool) -> Result<String> {
    let range = DateRange::parse(start, end)?;
    let holidays = ctx.holidays(range.years(), extra_holidays)?;
    let summary = business_days_description(range.start, range.end, &holidays);
    info!(%start, %end, business_days = summary.business_days, "counted business days");

    if json {
        return Ok(serde_json::to_string_pretty(&summary)?);
    }

    Ok(format!(
        "{}\n  Business days: {}\n  Total days:    {}\n  Weekend days:  {}\n  Holidays:      {}",
        summary.description,
        summary.business_days,
        summary.total_days,
        summary.weekend_days,
        summary.holidays
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_week_text() {
        let output = run(&Context::default(), "2024-01-01", "2024-01-07", &[], false).unwrap();
        // New Year's Day is in the default calendar
        assert!(output.starts_with("4 business days (excluding 2 weekend days and 1 holidays)"));
    }

    #[test]
    fn test_json_output() {
        let output = run(&Context::default(), "2024-01-08", "2024-01-14", &[], true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["business_days"], 5);
        assert_eq!(value["total_days"], 7);
    }

    #[test]
    fn test_bad_date_is_an_error() {
        assert!(run(&Context::default(), "2024-01-08", "tomorrow", &[], false).is_err());
    }
}
