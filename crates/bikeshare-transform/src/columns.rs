//! Typed column extraction.
//!
//! Each helper checks the column's dtype before reading so that a text
//! column is never silently cast to integers full of nulls.

use polars::prelude::{ChunkFilter, DataType, Float64Chunked};

use bikeshare_model::values::{is_integer_dtype, is_numeric_dtype};
use bikeshare_model::{DashboardError, Result, Table};

fn unsupported(column: &str, dtype: &DataType) -> DashboardError {
    DashboardError::UnsupportedType {
        column: column.to_string(),
        dtype: dtype.to_string(),
    }
}

/// Integer codes of `name`, one entry per row.
pub fn column_codes(table: &Table, name: &str) -> Result<Vec<Option<i64>>> {
    let column = table.column(name)?;
    if !is_integer_dtype(column.dtype()) {
        return Err(unsupported(name, column.dtype()));
    }
    let cast = column.cast(&DataType::Int64)?;
    Ok(cast.i64()?.into_iter().collect())
}

/// Numeric values of `name` as `f64`, one entry per row.
pub fn column_f64(table: &Table, name: &str) -> Result<Vec<Option<f64>>> {
    let column = table.column(name)?;
    if !is_numeric_dtype(column.dtype()) {
        return Err(unsupported(name, column.dtype()));
    }
    let cast = column.cast(&DataType::Float64)?;
    Ok(cast.f64()?.into_iter().collect())
}

/// Numeric values of `name` as a `Float64` array with NaN and null cells
/// removed.
pub fn defined_f64(table: &Table, name: &str) -> Result<Float64Chunked> {
    let column = table.column(name)?;
    if !is_numeric_dtype(column.dtype()) {
        return Err(unsupported(name, column.dtype()));
    }
    let cast = column.cast(&DataType::Float64)?;
    let values = cast.f64()?;
    let defined = values.is_not_nan();
    Ok(values.filter(&defined)?)
}

/// Text values of `name`, one entry per row.
pub fn column_strings(table: &Table, name: &str) -> Result<Vec<Option<String>>> {
    let column = table.column(name)?;
    if column.dtype() != &DataType::String {
        return Err(unsupported(name, column.dtype()));
    }
    Ok(column
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}
