//! Check command implementation
//!
//! Prints the effective configuration.

use tracing::info;

use crate::context::Context;
use crate::Result;

/// Run the check command, listing the holidays observed in `year`
pub fn run(ctx: &Context, year: i32) -> Result<String> {
    info!("Checking configuration...");

    let settings = &ctx.settings;
    settings.validate()?;
    let holidays = ctx.holidays(year..=year, &[])?;

    let mut lines = vec![
        "Trackwise Configuration Check".to_string(),
        "=============================".to_string(),
        String::new(),
        format!("Version: {}", env!("CARGO_PKG_VERSION")),
        format!("Log level: {}", settings.general.log_level),
        String::new(),
        "Cost:".to_string(),
        format!("  Hourly rate:   {}", settings.cost.hourly_rate),
        format!("  Hours per day: {}", settings.cost.hours_per_day),
        String::new(),
        format!("Calendar: {:?}", settings.calendar.calendar),
        format!("  Holidays in {}: {}", year, holidays.len()),
    ];
    lines.extend(holidays.keys().into_iter().map(|key| format!("    {}", key)));
    lines.push(String::new());
    lines.push("All checks passed!".to_string());

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_check_passes() {
        let output = run(&Context::default(), 2025).unwrap();
        let expected = [
            "Cost:",
            "  Hourly rate:   100",
            "  Hours per day: 4",
            "",
            "Calendar: Common",
            "  Holidays in 2025: 3",
            "    2025-01-01",
            "    2025-12-24",
            "    2025-12-25",
            "",
            "All checks passed!",
        ]
        .join("\n");
        assert!(output.starts_with("Trackwise Configuration Check\n"));
        assert!(output.ends_with(&expected));
    }

    #[test]
    fn test_invalid_settings_fail() {
        let mut ctx = Context::default();
        ctx.settings.cost.hours_per_day = 0.0;
        assert!(run(&ctx, 2025).is_err());
    }
}
