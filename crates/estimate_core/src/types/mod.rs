//! Core value types.
//!
//! This module provides:
//! - `range`: Inclusive calendar date ranges
//! - `params`: Cost parameters (hourly rate, hours per day)

pub mod params;
pub mod range;

pub use params::CostParameters;
pub use range::DateRange;
