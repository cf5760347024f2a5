//! Project records and per-project estimates.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use estimate_core::{
    business_days_description, estimate_cost, format_project_duration,
    BusinessDaysSummary, CostParameters, DateRange,
};
use infra_calendar::HolidaySet;
use serde::Serialize;

/// A project as exported by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    /// Project name
    pub name: String,
    /// Planned start, if set
    pub start_date: Option<NaiveDate>,
    /// Planned end, if set
    pub end_date: Option<NaiveDate>,
    /// Assigned headcount; `0` when unset
    pub team_size: u32,
}

/// Cost and duration figures for a single project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectEstimate {
    /// Project name
    pub name: String,
    /// Assigned headcount
    pub team_size: u32,
    /// Business days between start and end
    pub business_days: u32,
    /// Labour cost
    pub cost: f64,
    /// Readable duration, when both dates are set
    pub duration: Option<String>,
    /// Day breakdown, when both dates are set
    pub summary: Option<BusinessDaysSummary>,
}

impl ProjectRecord {
    /// Both dates, when set.
    pub fn date_range(&self) -> Option<DateRange> {
        Some(DateRange::new(self.start_date?, self.end_date?))
    }

    /// Calendar years touched by whichever dates are set.
    pub fn years(&self) -> Option<RangeInclusive<i32>> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end).years()),
            (Some(date), None) | (None, Some(date)) => Some(date.year()..=date.year()),
            (None, None) => None,
        }
    }

    /// Estimate cost and duration with the given rates and holidays.
    ///
    /// A project without both dates or without a team costs nothing.
    pub fn estimate(&self, params: &CostParameters, holidays: &HolidaySet) -> ProjectEstimate {
        let cost = estimate_cost(self.start_date, self.end_date, self.team_size, params, holidays);
        let range = self.date_range();
        let summary = range.map(|r| business_days_description(r.start, r.end, holidays));

        ProjectEstimate {
            name: self.name.clone(),
            team_size: self.team_size,
            business_days: summary.as_ref().map_or(0, |s| s.business_days),
            cost,
            duration: range.map(|r| format_project_duration(r.start, r.end, holidays)),
            summary,
        }
    }
}
