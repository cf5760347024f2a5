//! Settings and configuration structures.

use std::ops::RangeInclusive;
use std::path::Path;

use config::{Config, Environment, File};
use infra_calendar::{
    CalendarId, CommonHolidays, FixedHolidays, HolidayProvider, HolidaySet, NoHolidays,
};
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// Main application settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Settings {
    /// General configuration
    #[serde(default)]
    pub general: GeneralConfig,
    /// Cost estimation configuration
    #[serde(default)]
    pub cost: CostConfig,
    /// Holiday calendar configuration
    #[serde(default)]
    pub calendar: CalendarConfig,
}

impl Settings {
    /// Load settings from configuration files and environment variables.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `TRACKWISE_ENV`)
    /// 3. Environment variables prefixed with `TRACKWISE_`
    ///
    /// Holiday lists may be given in the environment as comma-separated
    /// values, e.g. `TRACKWISE_CALENDAR__HOLIDAYS=2024-11-28,2024-11-29`.
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("TRACKWISE_ENV").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("TRACKWISE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("calendar.holidays")
                    .with_list_parse_key("calendar.fixed_holidays"),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        debug!(environment = %env, "loaded layered settings");
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a single TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded settings file");
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values no estimate can be computed from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("cost.hourly_rate", self.cost.hourly_rate)?;
        check_positive("cost.hours_per_day", self.cost.hours_per_day)?;
        if self.general.log_level.trim().is_empty() {
            return Err(ConfigError::invalid("general.log_level", "must not be empty"));
        }
        Ok(())
    }
}

fn check_positive(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(key, format!("must be a positive number, got {}", value)))
    }
}

/// General settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GeneralConfig {
    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Cost estimation settings.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct CostConfig {
    /// Cost of one person-hour
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: f64,
    /// Billable hours per person per business day
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            hourly_rate: default_hourly_rate(),
            hours_per_day: default_hours_per_day(),
        }
    }
}

fn default_hourly_rate() -> f64 {
    100.0
}

fn default_hours_per_day() -> f64 {
    4.0
}

/// Holiday calendar settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct CalendarConfig {
    /// Built-in calendar to start from
    #[serde(default)]
    pub calendar: CalendarId,
    /// Extra one-off holidays (`YYYY-MM-DD`)
    #[serde(default)]
    pub holidays: Vec<String>,
    /// Recurring `MM-DD` holidays, used by the `custom` calendar
    #[serde(default)]
    pub fixed_holidays: Vec<String>,
}

impl CalendarConfig {
    /// Holiday provider for the configured calendar.
    ///
    /// `custom` draws its rules from `fixed_holidays`; the built-in
    /// calendars ignore that list.
    pub fn provider(&self) -> Result<Box<dyn HolidayProvider>, ConfigError> {
        let provider: Box<dyn HolidayProvider> = match self.calendar {
            CalendarId::Common => Box::new(CommonHolidays),
            CalendarId::WeekendOnly => Box::new(NoHolidays),
            CalendarId::Custom => Box::new(
                FixedHolidays::parse(&self.fixed_holidays)
                    .map_err(|e| ConfigError::invalid("calendar.fixed_holidays", e.to_string()))?,
            ),
        };
        Ok(provider)
    }

    /// Build the holiday set for `years` from this configuration.
    pub fn holiday_set(&self, years: RangeInclusive<i32>) -> Result<HolidaySet, ConfigError> {
        let mut set = self.provider()?.holiday_set(years);

        let extra = HolidaySet::parse(&self.holidays)
            .map_err(|e| ConfigError::invalid("calendar.holidays", e.to_string()))?;
        set.extend_from(&extra);

        debug!(calendar = ?self.calendar, holidays = set.len(), "resolved holiday set");
        Ok(set)
    }
}
