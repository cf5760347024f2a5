//! Cost parameters.

/// Rate parameters for labour cost estimation.
///
/// Team size is not part of the parameters; it is passed per project.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostParameters {
    /// Cost of one person-hour
    pub hourly_rate: f64,
    /// Billable hours per person per business day
    pub hours_per_day: f64,
}

impl CostParameters {
    /// Generic hourly rate.
    pub const DEFAULT_HOURLY_RATE: f64 = 150.0;
    /// Hourly rate used by the project dashboard.
    pub const DASHBOARD_HOURLY_RATE: f64 = 100.0;
    /// Billable hours per business day.
    pub const DEFAULT_HOURS_PER_DAY: f64 = 4.0;

    /// Create parameters from an explicit rate and hours per day.
    pub fn new(hourly_rate: f64, hours_per_day: f64) -> Self {
        Self {
            hourly_rate,
            hours_per_day,
        }
    }

    /// Parameters used by the project dashboard (rate 100, 4 hours/day).
    pub fn dashboard() -> Self {
        Self::new(Self::DASHBOARD_HOURLY_RATE, Self::DEFAULT_HOURS_PER_DAY)
    }
}

impl Default for CostParameters {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOURLY_RATE, Self::DEFAULT_HOURS_PER_DAY)
    }
}
