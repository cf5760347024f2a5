//! Shared state handed to every command.

use std::ops::RangeInclusive;
use std::path::Path;

use estimate_core::CostParameters;
use infra_calendar::HolidaySet;
use infra_config::Settings;
use tracing::debug;

use crate::{CliError, Result};

/// Resolved settings for one CLI invocation.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Effective configuration
    pub settings: Settings,
}

impl Context {
    /// Wrap already-loaded settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Load settings from `path`, or from the layered defaults when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => Settings::from_file(path)?,
            None => Settings::load()?,
        };
        Ok(Self::new(settings))
    }

    /// Configured cost parameters with optional per-command overrides.
    pub fn cost_parameters(&self, rate: Option<f64>, hours: Option<f64>) -> Result<CostParameters> {
        let params = CostParameters::new(
            rate.unwrap_or(self.settings.cost.hourly_rate),
            hours.unwrap_or(self.settings.cost.hours_per_day),
        );
        if !(params.hourly_rate.is_finite() && params.hourly_rate > 0.0) {
            return Err(CliError::InvalidArgument(format!(
                "hourly rate must be positive, got {}",
                params.hourly_rate
            )));
        }
        if !(params.hours_per_day.is_finite() && params.hours_per_day > 0.0) {
            return Err(CliError::InvalidArgument(format!(
                "hours per day must be positive, got {}",
                params.hours_per_day
            )));
        }
        Ok(params)
    }

    /// Configured holidays over `years`, plus any `extra` dates.
    pub fn holidays(&self, years: RangeInclusive<i32>, extra: &[String]) -> Result<HolidaySet> {
        let mut holidays = self.settings.calendar.holiday_set(years)?;
        holidays.extend_from(&HolidaySet::parse(extra)?);
        debug!(holidays = holidays.len(), "holiday set for command");
        Ok(holidays)
    }
}
