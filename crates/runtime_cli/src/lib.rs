//! # runtime_cli
//!
//! Command-line front end for Trackwise.
//!
//! The `trackwise` binary parses arguments, loads [`infra_config::Settings`]
//! and dispatches to one of the [`commands`]. Commands return the text to
//! print so they can be exercised without a terminal.
//!
//! ## Architecture Position
//!
//! Part of the **R**untime layer. Depends on every lower layer.

pub mod commands;
pub mod context;
mod error;
pub mod logging;

pub use context::Context;
pub use error::{CliError, Result};
