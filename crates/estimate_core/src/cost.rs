//! Project labour cost estimation.

use chrono::NaiveDate;
use infra_calendar::{count_business_days, HolidaySet};
use tracing::debug;

use crate::types::CostParameters;

/// Estimate the labour cost of a project.
///
/// `cost = team_size × hours_per_day × business_days × hourly_rate`, in
/// plain `f64` with no rounding.
///
/// Returns `0.0` without counting anything when either date is missing or
/// the team is empty. A degenerate range (`start > end`) also costs `0.0`
/// because it has no business days.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use estimate_core::{estimate_cost, CostParameters};
/// use infra_calendar::HolidaySet;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1);
/// let end = NaiveDate::from_ymd_opt(2024, 1, 5);
/// let params = CostParameters::new(100.0, 4.0);
///
/// assert_eq!(estimate_cost(start, end, 3, &params, &HolidaySet::new()), 6000.0);
/// assert_eq!(estimate_cost(start, None, 3, &params, &HolidaySet::new()), 0.0);
/// ```
pub fn estimate_cost(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    team_size: u32,
    params: &CostParameters,
    holidays: &HolidaySet,
) -> f64 {
    estimate_cost_breakdown(start, end, team_size, params, holidays).cost
}

/// Cost estimate together with the figures it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostEstimate {
    /// Business days in the range
    pub business_days: u32,
    /// `team_size × hours_per_day × business_days`
    pub person_hours: f64,
    /// `person_hours × hourly_rate`
    pub cost: f64,
}

/// Like [`estimate_cost`], but also reports business days and person-hours.
///
/// The short-circuit cases return an all-zero estimate.
pub fn estimate_cost_breakdown(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    team_size: u32,
    params: &CostParameters,
    holidays: &HolidaySet,
) -> CostEstimate {
    let (Some(start), Some(end)) = (start, end) else {
        debug!("missing project date, cost is zero");
        return CostEstimate::default();
    };
    if team_size == 0 {
        debug!("empty team, cost is zero");
        return CostEstimate::default();
    }

    let business_days = count_business_days(start, end, holidays);
    let person_hours = f64::from(team_size) * params.hours_per_day * f64::from(business_days);
    let cost = person_hours * params.hourly_rate;

    debug!(%start, %end, team_size, business_days, cost, "estimated project cost");

    CostEstimate {
        business_days,
        person_hours,
        cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_dashboard_week() {
        let params = CostParameters::dashboard();
        let cost = estimate_cost(date(2024, 1, 1), date(2024, 1, 5), 3, &params, &HolidaySet::new());
        assert_relative_eq!(cost, 6000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_default_rate() {
        let params = CostParameters::default();
        let cost = estimate_cost(date(2024, 1, 1), date(2024, 1, 1), 1, &params, &HolidaySet::new());
        assert_relative_eq!(cost, 600.0, epsilon = 1e-9);
    }

    #[test]
    fn test_short_circuits() {
        let params = CostParameters::dashboard();
        let none = HolidaySet::new();
        assert_eq!(estimate_cost(None, date(2024, 1, 5), 3, &params, &none), 0.0);
        assert_eq!(estimate_cost(date(2024, 1, 1), None, 3, &params, &none), 0.0);
        assert_eq!(estimate_cost(date(2024, 1, 1), date(2024, 1, 5), 0, &params, &none), 0.0);
    }

    #[test]
    fn test_reversed_range_costs_nothing() {
        let params = CostParameters::dashboard();
        let cost = estimate_cost(date(2024, 1, 5), date(2024, 1, 1), 3, &params, &HolidaySet::new());
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn test_breakdown_person_hours() {
        let holidays = HolidaySet::parse(["2024-01-01"]).unwrap();
        let estimate = estimate_cost_breakdown(
            date(2024, 1, 1),
            date(2024, 1, 5),
            2,
            &CostParameters::new(120.0, 6.0),
            &holidays,
        );
        assert_eq!(estimate.business_days, 4);
        assert_relative_eq!(estimate.person_hours, 48.0);
        assert_relative_eq!(estimate.cost, 5760.0);
    }

    #[test]
    fn test_fractional_rates_are_not_rounded() {
        let params = CostParameters::new(99.99, 7.5);
        let cost = estimate_cost(date(2024, 1, 1), date(2024, 1, 1), 1, &params, &HolidaySet::new());
        assert_relative_eq!(cost, 749.925, epsilon = 1e-9);
    }
}
