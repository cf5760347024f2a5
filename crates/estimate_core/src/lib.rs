//! # estimate_core
//!
//! Project cost and duration estimation for Trackwise.
//!
//! Every operation here is a pure function of its inputs: business days come
//! from [`infra_calendar`], cost and duration strings are derived from them.
//! Missing or degenerate inputs produce zero values rather than errors.
//!
//! ## Architecture Position
//!
//! Part of the **E**stimation layer. Depends only on `infra_calendar`.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use estimate_core::{estimate_cost, format_project_duration, CostParameters};
//! use infra_calendar::HolidaySet;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
//! let holidays = HolidaySet::new();
//!
//! let cost = estimate_cost(Some(start), Some(end), 2, &CostParameters::dashboard(), &holidays);
//! assert_eq!(cost, 8000.0);
//! assert_eq!(format_project_duration(start, end, &holidays), "2 weeks (10 business days)");
//! ```

pub mod cost;
pub mod duration;
pub mod types;

pub use cost::{estimate_cost, estimate_cost_breakdown, CostEstimate};
pub use duration::{
    business_days_description, business_days_to_weeks, format_business_days,
    format_project_duration, BusinessDaysSummary,
};
pub use types::{CostParameters, DateRange};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        business_days_description, estimate_cost, format_project_duration, BusinessDaysSummary,
        CostParameters, DateRange,
    };
}
