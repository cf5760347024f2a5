//! Integration tests running commands against a configuration file.

use std::io::Write;

use runtime_cli::commands::{self, cost::CostArgs};
use runtime_cli::Context;

fn context_from(toml: &str) -> Context {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(toml.as_bytes()).unwrap();
    Context::load(Some(file.path())).unwrap()
}

#[test]
fn test_custom_calendar_drives_every_command() {
    let ctx = context_from(
        r#"
[cost]
hourly_rate = 120.0
hours_per_day = 6.0

[calendar]
calendar = "custom"
fixed_holidays = ["07-04"]
"#,
    );

    // Independence Day 2024 is a Thursday
    let days = commands::days::run(&ctx, "2024-07-01", "2024-07-07", &[], false).unwrap();
    assert!(days.starts_with("4 business days (excluding 2 weekend days and 1 holidays)"));

    let cost = commands::cost::run(
        &ctx,
        &CostArgs {
            start: "2024-07-01".to_string(),
            end: "2024-07-07".to_string(),
            team: 2,
            ..CostArgs::default()
        },
    )
    .unwrap();
    // 2 people x 6 h x 4 days x 120
    assert!(cost.starts_with("Cost: 5760.00"));

    let holidays = commands::holidays::run(&ctx, 2025).unwrap();
    assert_eq!(holidays, "2025-07-04");

    // Christmas is a working day on this calendar
    let duration = commands::duration::run(&ctx, "2024-12-23", "2024-12-27", &[]).unwrap();
    assert_eq!(duration, "1 week (5 business days)");
}

#[test]
fn test_weekend_only_calendar() {
    let ctx = context_from("[calendar]\ncalendar = \"weekend_only\"\n");
    let output = commands::holidays::run(&ctx, 2024).unwrap();
    assert_eq!(output, "No holidays configured for 2024");
}

#[test]
fn test_missing_config_file_is_an_error() {
    let result = Context::load(Some(std::path::Path::new("missing/trackwise.toml")));
    assert!(result.is_err());
}

#[test]
fn test_invalid_config_value_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[cost]\nhours_per_day = -4.0\n").unwrap();
    assert!(Context::load(Some(file.path())).is_err());
}
