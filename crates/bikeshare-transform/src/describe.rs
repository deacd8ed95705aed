//! Descriptive statistics.
//!
//! Every statistic is computed by the polars aggregation kernels over the
//! defined (non-null, non-NaN) values of a column.

use polars::prelude::{
    ChunkAgg, ChunkQuantile, ChunkVar, Float64Chunked, QuantileMethod,
};

use bikeshare_model::values::is_numeric_dtype;
use bikeshare_model::{BoxSummary, ColumnStatistics, Result, StatisticsReport, Table};

use crate::columns::defined_f64;

fn chunked(values: &[f64]) -> Float64Chunked {
    Float64Chunked::from_vec(
        "value".into(),
        values.iter().copied().filter(|value| !value.is_nan()).collect(),
    )
}

fn defined_count(values: &Float64Chunked) -> usize {
    values.len() - values.null_count()
}

fn quantile_of(values: &Float64Chunked, q: f64) -> f64 {
    values
        .quantile(q.clamp(0.0, 1.0), QuantileMethod::Linear)
        .ok()
        .flatten()
        .unwrap_or(f64::NAN)
}

fn mean_of(values: &Float64Chunked) -> f64 {
    values.mean().unwrap_or(f64::NAN)
}

fn std_of(values: &Float64Chunked) -> f64 {
    if defined_count(values) < 2 {
        return f64::NAN;
    }
    values.std(1).unwrap_or(f64::NAN)
}

/// Quantile by linear interpolation between closest ranks; NaN when empty.
/// `q` is clamped to `[0, 1]`.
pub fn quantile(values: &[f64], q: f64) -> f64 {
    quantile_of(&chunked(values), q)
}

/// Sample standard deviation; NaN for fewer than two values.
pub fn sample_std(values: &[f64]) -> f64 {
    std_of(&chunked(values))
}

/// Min, quartiles, max and mean; `None` for an empty slice.
pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
    let values = chunked(values);
    let (min, max) = (values.min()?, values.max()?);
    Some(BoxSummary {
        min,
        q1: quantile_of(&values, 0.25),
        median: quantile_of(&values, 0.5),
        q3: quantile_of(&values, 0.75),
        max,
        mean: mean_of(&values),
    })
}

fn column_statistics(column: &str, values: &Float64Chunked) -> ColumnStatistics {
    ColumnStatistics {
        column: column.to_string(),
        count: defined_count(values),
        mean: mean_of(values),
        std: std_of(values),
        min: values.min().unwrap_or(f64::NAN),
        q25: quantile_of(values, 0.25),
        median: quantile_of(values, 0.5),
        q75: quantile_of(values, 0.75),
        max: values.max().unwrap_or(f64::NAN),
    }
}

/// Statistics for every numeric column, in column order. NaN and null cells
/// are not counted.
pub fn describe(table: &Table) -> Result<StatisticsReport> {
    let mut columns = Vec::new();
    for column in table.frame().get_columns() {
        if !is_numeric_dtype(column.dtype()) {
            continue;
        }
        let name = column.name().to_string();
        let values = defined_f64(table, &name)?;
        columns.push(column_statistics(&name, &values));
    }
    Ok(StatisticsReport {
        rows: table.height(),
        columns,
    })
}
