//! Loader errors.

use thiserror::Error;

/// Errors that can occur while loading project records.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Source file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Reading the source failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV (unbalanced quotes, ragged rows, bad encoding)
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row lacks a required column
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// A cell could not be interpreted
    #[error("Invalid value in row {row}, column '{column}': {message}")]
    InvalidRow {
        row: usize,
        column: &'static str,
        message: String,
    },
}
