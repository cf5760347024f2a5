//! End-to-end tests: CSV file on disk to per-project estimates.

use std::io::Write;

use adapter_loader::prelude::*;
use approx::assert_relative_eq;
use estimate_core::CostParameters;
use infra_calendar::{CommonHolidays, HolidayProvider};

const PROJECTS: &str = "\
name,start_date,end_date,team_size,status
Billing revamp,2024-12-16,2024-12-27,4,active
Search spike,2024-01-01,2024-01-03,1,done
Backlog idea,,,0,proposed
";

#[test]
fn test_load_and_estimate_projects() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PROJECTS.as_bytes()).unwrap();

    let projects = ProjectLoader::load(file.path()).unwrap();
    assert_eq!(projects.len(), 3);

    let holidays = CommonHolidays.holiday_set(2024..=2024);
    let params = CostParameters::dashboard();
    let estimates: Vec<ProjectEstimate> = projects
        .iter()
        .map(|project| project.estimate(&params, &holidays))
        .collect();

    // Christmas Eve and Christmas Day fall inside the first project
    assert_eq!(estimates[0].business_days, 8);
    assert_relative_eq!(estimates[0].cost, 4.0 * 4.0 * 8.0 * 100.0);
    assert_eq!(estimates[0].duration.as_deref(), Some("1.6 week (8 business days)"));

    // New Year's Day is excluded
    assert_eq!(estimates[1].business_days, 2);
    assert_relative_eq!(estimates[1].cost, 800.0);

    assert_eq!(estimates[2].cost, 0.0);
    assert!(estimates[2].summary.is_none());
}

#[test]
fn test_ragged_rows_are_csv_errors() {
    let data = "name,start_date,end_date,team_size\nA,2024-01-01\n";
    let result = ProjectLoader::from_reader(data.as_bytes());
    assert!(matches!(result, Err(LoaderError::Csv(_))));
}
