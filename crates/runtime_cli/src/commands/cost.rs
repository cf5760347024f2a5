//! Cost command implementation
//!
//! Estimates the labour cost of a team over a date range.

use estimate_core::{estimate_cost_breakdown, DateRange};
use tracing::info;

use crate::context::Context;
use crate::Result;

/// Arguments for the cost command
#[derive(Debug, Clone, Default)]
pub struct CostArgs {
    /// First day (`YYYY-MM-DD`)
    pub start: String,
    /// Last day (`YYYY-MM-DD`)
    pub end: String,
    /// Team size
    pub team: u32,
    /// Hourly rate override
    pub rate: Option<f64>,
    /// Hours per day override
    pub hours: Option<f64>,
    /// Extra holidays
    pub holidays: Vec<String>,
}

/// Run the cost command
pub fn run(ctx: &Context, args: &CostArgs) -> Result<String> {
    let range = DateRange::parse(&args.start, &args.end)?;
    let params = ctx.cost_parameters(args.rate, args.hours)?;
    let holidays = ctx.holidays(range.years(), &args.holidays)?;

    let estimate = estimate_cost_breakdown(
        Some(range.start),
        Some(range.end),
        args.team,
        &params,
        &holidays,
    );
    info!(team = args.team, cost = estimate.cost, "estimated cost");

    Ok(format!(
        "Cost: {:.2}\n  Team size:     {}\n  Business days: {}\n  Person-hours:  {}\n  Hourly rate:   {}\n  Hours per day: {}",
        estimate.cost,
        args.team,
        estimate.business_days,
        estimate.person_hours,
        params.hourly_rate,
        params.hours_per_day
    ))
}
