//! Errors raised while loading a rental dataset.

use std::path::PathBuf;
use thiserror::Error;

/// Load failures are fatal: without a table there is nothing to report on.
#[derive(Debug, Error)]
pub enum LoadError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// A column the dataset requires is absent.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// A column does not hold the declared type.
    #[error("column '{column}' in {path} must be {expected}, found {found}")]
    InvalidColumnType {
        column: String,
        path: PathBuf,
        expected: String,
        found: String,
    },

    /// A required column has empty cells.
    #[error("column '{column}' in {path} has {count} missing values")]
    MissingValues {
        column: String,
        path: PathBuf,
        count: usize,
    },

    /// A date cell is not `YYYY-MM-DD`.
    #[error("invalid date '{value}' in {path} (row {row})")]
    InvalidDate {
        value: String,
        row: usize,
        path: PathBuf,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for LoadError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
