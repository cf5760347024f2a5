//! Duration command implementation

use estimate_core::{format_project_duration, DateRange};

use crate::context::Context;
use crate::Result;

/// Run the duration command
pub fn run(ctx: &Context, start: &str, end: &str, extra_holidays: &[String]) -> Result<String> {
    let range = DateRange::parse(start, end)?;
    let holidays = ctx.holidays(range.years(), extra_holidays)?;
    Ok(format_project_duration(range.start, range.end, &holidays))
}
