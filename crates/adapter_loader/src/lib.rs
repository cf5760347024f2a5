//! # adapter_loader
//!
//! Flat file loaders for Trackwise project exports.
//!
//! This crate reads the dashboard's project list (name, dates, team size)
//! from CSV and turns each record into a cost and duration estimate.
//!
//! ## Architecture Position
//!
//! Part of the **A**dapter layer.
//! Depends only on `estimate_core` and `infra_calendar`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use adapter_loader::ProjectLoader;
//!
//! let projects = ProjectLoader::load("projects.csv")?;
//! ```

mod csv_loader;
mod error;
mod project;

pub use csv_loader::ProjectLoader;
pub use error::LoaderError;
pub use project::{ProjectEstimate, ProjectRecord};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LoaderError, ProjectEstimate, ProjectLoader, ProjectRecord};
}
