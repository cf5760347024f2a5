//! # infra_calendar
//!
//! Business-day calendars for Trackwise.
//!
//! This crate is the source of truth for calendar arithmetic:
//! - Holiday sets keyed by `YYYY-MM-DD` calendar date
//! - Default and configurable holiday providers
//! - Business-day counting and scheduling helpers
//!
//! All dates are timezone-naive [`chrono::NaiveDate`] values.
//!
//! ## Architecture Position
//!
//! Part of the **I**nfra layer. Must not depend on estimation, adapter or
//! runtime crates.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use infra_calendar::{Calendar, CommonHolidays, HolidayProvider};
//!
//! let calendar = Calendar::new(CommonHolidays.holiday_set(2026..=2026));
//! let friday = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
//! assert_eq!(
//!     calendar.checked_add_business_days(friday, 1),
//!     NaiveDate::from_ymd_opt(2026, 1, 12)
//! );
//! ```

mod calendar;
mod error;
mod holidays;

pub use calendar::{
    count_business_days, day_breakdown, is_weekend, Calendar, CalendarId, DayBreakdown,
};
pub use error::CalendarError;
pub use holidays::{
    common_holidays, parse_date, CommonHolidays, FixedHolidays, HolidayProvider, HolidaySet,
    NoHolidays,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        count_business_days, Calendar, CalendarError, CalendarId, HolidayProvider, HolidaySet,
    };
}
