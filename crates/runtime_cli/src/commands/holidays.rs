//! Holidays command implementation
//!
//! Lists the holidays the configured calendar observes in a year.

use crate::context::Context;
use crate::Result;

/// Run the holidays command
pub fn run(ctx: &Context, year: i32) -> Result<String> {
    let holidays = ctx.holidays(year..=year, &[])?;
    if holidays.is_empty() {
        return Ok(format!("No holidays configured for {}", year));
    }
    Ok(holidays.keys().join("\n"))
}
