//! Report command implementation
//!
//! Estimates every project in a CSV export.

use std::path::Path;

use adapter_loader::{ProjectEstimate, ProjectLoader};
use infra_calendar::HolidaySet;
use tracing::info;

use crate::context::Context;
use crate::Result;

/// Run the report command
pub fn run(ctx: &Context, path: &Path, json: bool) -> Result<String> {
    let projects = ProjectLoader::load(path)?;
    let params = ctx.cost_parameters(None, None)?;

    let first_year = projects.iter().filter_map(|p| p.years()).map(|y| *y.start()).min();
    let last_year = projects.iter().filter_map(|p| p.years()).map(|y| *y.end()).max();
    let holidays = match (first_year, last_year) {
        (Some(first), Some(last)) => ctx.holidays(first..=last, &[])?,
        _ => HolidaySet::new(),
    };

    let estimates: Vec<ProjectEstimate> = projects
        .iter()
        .map(|project| project.estimate(&params, &holidays))
        .collect();
    let total: f64 = estimates.iter().map(|e| e.cost).sum();
    info!(projects = estimates.len(), total, "estimated project report");

    if json {
        return Ok(serde_json::to_string_pretty(&estimates)?);
    }

    let mut lines: Vec<String> = estimates
        .iter()
        .map(|e| {
            format!(
                "{:<24} {:>4} people  {:<28} {:>12.2}",
                e.name,
                e.team_size,
                e.duration.as_deref().unwrap_or("no dates"),
                e.cost
            )
        })
        .collect();
    lines.push(format!("Total: {:.2} across {} projects", total, estimates.len()));
    Ok(lines.join("\n"))
}
