//! Errors raised while filtering, labelling and aggregating a loaded table.
//!
//! Every variant is recoverable: the loaded tables are never touched, so a
//! caller can report the message and keep serving further interactions.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// A row carries a code that has no display label.
    #[error("column '{column}' has code {code} without a label ({rows} rows)")]
    UnmappedCode {
        column: String,
        code: i64,
        rows: usize,
    },

    /// Rows with no code at all in a column that must be labelled.
    #[error("column '{column}' has {rows} rows without a code")]
    MissingCode { column: String, rows: usize },

    /// An operation needs a column the selected dataset does not have.
    #[error("column '{column}' is not available in this dataset")]
    UnavailableColumn { column: String },

    /// A filter was requested on a column that is not categorical.
    #[error("column '{column}' is not categorical")]
    NotCategorical { column: String },

    /// A column has a type the operation cannot work with.
    #[error("column '{column}' has unsupported type {dtype}")]
    UnsupportedType { column: String, dtype: String },

    /// Derived ratio hit a zero denominator under the reject policy.
    #[error("ratio '{column}' is undefined for {rows} rows with a zero denominator")]
    UndefinedRatio { column: String, rows: usize },

    /// A date cell could not be parsed.
    #[error("invalid date '{value}' in column '{column}'")]
    InvalidDate { column: String, value: String },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for DashboardError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
