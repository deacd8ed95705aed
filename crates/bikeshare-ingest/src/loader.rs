//! CSV loading with schema enforcement.
//!
//! The preprocessed files are read with the Polars CSV reader and then
//! conformed to the [`Field`] schema: integer columns are cast to `Int64`,
//! measures to `Float64`, and `dteday` is checked to be a calendar date on
//! every row. Anything that does not fit fails the load instead of surfacing
//! later as a missing key in a report.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use polars::prelude::{Column, CsvReadOptions, DataFrame, DataType, SerReader};
use tracing::{debug, info, warn};

use bikeshare_model::values::{is_integer_dtype, is_numeric_dtype};
use bikeshare_model::{DATE_FORMAT, DatasetKind, Field, FieldKind, Table};

use crate::error::{LoadError, Result};

/// Load one dataset and validate it against the schema for `dataset`.
pub fn load_table(path: &Path, dataset: DatasetKind) -> Result<Table> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let frame = read_frame(path)?;
    debug!(
        path = %path.display(),
        rows = frame.height(),
        columns = frame.width(),
        "read csv"
    );
    let frame = conform_schema(frame, dataset, path)?;
    let mismatched = count_total_mismatches(&frame)?;
    if mismatched > 0 {
        warn!(
            path = %path.display(),
            rows = mismatched,
            "cnt differs from casual + registered"
        );
    }
    info!(
        dataset = %dataset,
        path = %path.display(),
        rows = frame.height(),
        "loaded dataset"
    );
    Ok(Table::new(dataset, frame))
}

fn read_frame(path: &Path) -> Result<DataFrame> {
    let to_parse_error = |err: polars::prelude::PolarsError| LoadError::CsvParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    };
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(to_parse_error)?
        .finish()
        .map_err(to_parse_error)
}

/// Check every known column present in `frame` and cast it to its
/// canonical type. Unknown columns pass through untouched.
pub fn conform_schema(mut frame: DataFrame, dataset: DatasetKind, path: &Path) -> Result<DataFrame> {
    for field in Field::ALL {
        let Ok(column) = frame.column(field.name()) else {
            if field.is_required_for(dataset) {
                return Err(LoadError::MissingColumn {
                    column: field.name().to_string(),
                    path: path.to_path_buf(),
                });
            }
            continue;
        };
        let conformed = conform_column(column, field, path)?;
        frame.with_column(conformed)?;
    }
    Ok(frame)
}

fn conform_column(column: &Column, field: Field, path: &Path) -> Result<Column> {
    let dtype = column.dtype().clone();
    // Header-only files come back with untyped text columns.
    if column.len() == 0 {
        let target = match field.kind() {
            FieldKind::Date => DataType::String,
            FieldKind::Categorical | FieldKind::Count => DataType::Int64,
            FieldKind::Measure => DataType::Float64,
        };
        return Ok(column.cast(&target)?);
    }
    match field.kind() {
        FieldKind::Date => {
            if dtype != DataType::String {
                return Err(invalid_type(field, path, "date text", &dtype));
            }
            validate_dates(column, field, path)?;
            Ok(column.clone())
        }
        FieldKind::Categorical | FieldKind::Count => {
            if !is_integer_dtype(&dtype) {
                return Err(invalid_type(field, path, "integer", &dtype));
            }
            let missing = column.null_count();
            if missing > 0 {
                return Err(LoadError::MissingValues {
                    column: field.name().to_string(),
                    path: path.to_path_buf(),
                    count: missing,
                });
            }
            Ok(column.cast(&DataType::Int64)?)
        }
        FieldKind::Measure => {
            if !is_numeric_dtype(&dtype) {
                return Err(invalid_type(field, path, "numeric", &dtype));
            }
            Ok(column.cast(&DataType::Float64)?)
        }
    }
}

fn validate_dates(column: &Column, field: Field, path: &Path) -> Result<()> {
    let values = column.str()?;
    let mut missing = 0usize;
    for (idx, value) in values.into_iter().enumerate() {
        let Some(value) = value else {
            missing += 1;
            continue;
        };
        if NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).is_err() {
            return Err(LoadError::InvalidDate {
                value: value.to_string(),
                row: idx + 1,
                path: path.to_path_buf(),
            });
        }
    }
    if missing > 0 {
        return Err(LoadError::MissingValues {
            column: field.name().to_string(),
            path: path.to_path_buf(),
            count: missing,
        });
    }
    Ok(())
}

fn invalid_type(field: Field, path: &Path, expected: &str, found: &DataType) -> LoadError {
    LoadError::InvalidColumnType {
        column: field.name().to_string(),
        path: path.to_path_buf(),
        expected: expected.to_string(),
        found: found.to_string(),
    }
}

/// Rows where `cnt != casual + registered`.
pub fn count_total_mismatches(frame: &DataFrame) -> Result<usize> {
    let total = frame.column(Field::Total.name())?.i64()?;
    let casual = frame.column(Field::Casual.name())?.i64()?;
    let registered = frame.column(Field::Registered.name())?.i64()?;
    let mismatched = total
        .into_iter()
        .zip(casual)
        .zip(registered)
        .filter(|((total, casual), registered)| match (total, casual, registered) {
            (Some(total), Some(casual), Some(registered)) => *total != casual + registered,
            _ => false,
        })
        .count();
    Ok(mismatched)
}

/// Locations of the two source files.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DatasetPaths {
    pub daily: PathBuf,
    pub hourly: PathBuf,
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            daily: PathBuf::from("day_preprocessed.csv"),
            hourly: PathBuf::from("hour_preprocessed.csv"),
        }
    }
}

impl DatasetPaths {
    pub fn new(daily: impl Into<PathBuf>, hourly: impl Into<PathBuf>) -> Self {
        Self {
            daily: daily.into(),
            hourly: hourly.into(),
        }
    }

    pub fn get(&self, dataset: DatasetKind) -> &Path {
        match dataset {
            DatasetKind::Daily => &self.daily,
            DatasetKind::Hourly => &self.hourly,
        }
    }
}
