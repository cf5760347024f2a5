//! # infra_config
//!
//! System configuration and environment management for Trackwise.
//!
//! This crate loads runtime settings (TOML files and environment variables)
//! and defines the cost rates, holiday calendar and log level used by the
//! estimation commands.
//!
//! ## Architecture Position
//!
//! Part of the **I**nfra layer.
//! Must not depend on estimation, adapter or runtime crates.
//!
//! ## Example
//!
//! ```rust,ignore
//! use infra_config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Hourly rate: {}", settings.cost.hourly_rate);
//! ```

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{CalendarConfig, CostConfig, GeneralConfig, Settings};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CalendarConfig, ConfigError, CostConfig, GeneralConfig, Settings};
}
