//! CLI command implementations
//!
//! Each submodule implements a specific CLI command and returns the text
//! to print, leaving output to the caller.

pub mod check;
pub mod cost;
pub mod days;
pub mod duration;
pub mod holidays;
pub mod report;
pub mod schedule;
