//! Group-by aggregation.
//!
//! Groups are keyed by an integer code column or a derived label column.
//! Integer keys come out in ascending order; label keys follow the declared
//! order recorded on the table (see [`crate::labels::map_labels`]), with any
//! undeclared labels after them in lexical order. Rows whose key is missing
//! belong to no group and are counted as `unkeyed`.

use std::cmp::Ordering;
use std::collections::HashMap;

use polars::prelude::{
    Column, DataFrame, DataType, IntoColumn, IntoLazy, NamedFrom, Series, col, len,
};
use tracing::{debug, warn};

use bikeshare_model::values::is_integer_dtype;
use bikeshare_model::{
    AggregateResult, DashboardError, Distribution, DistributionGroup, GroupKey, GroupMean, Result,
    Table,
};

use crate::columns::column_f64;
use crate::describe::box_summary;

const ROWS: &str = "__rows";
const DEFINED: &str = "__defined";
const MEAN: &str = "__mean";

fn ensure_key_dtype(column: &Column) -> Result<()> {
    let dtype = column.dtype();
    if is_integer_dtype(dtype) || dtype == &DataType::String {
        Ok(())
    } else {
        Err(DashboardError::UnsupportedType {
            column: column.name().to_string(),
            dtype: dtype.to_string(),
        })
    }
}

fn key_values(column: &Column) -> Result<Vec<Option<GroupKey>>> {
    ensure_key_dtype(column)?;
    if column.dtype() == &DataType::String {
        return Ok(column
            .str()?
            .into_iter()
            .map(|label| label.map(|label| GroupKey::Label(label.to_string())))
            .collect());
    }
    let cast = column.cast(&DataType::Int64)?;
    Ok(cast
        .i64()?
        .into_iter()
        .map(|code| code.map(GroupKey::Code))
        .collect())
}

fn compare_keys(left: &GroupKey, right: &GroupKey, declared: Option<&[String]>) -> Ordering {
    match (left, right) {
        (GroupKey::Code(left), GroupKey::Code(right)) => left.cmp(right),
        (GroupKey::Label(left), GroupKey::Label(right)) => {
            let rank = |label: &String| {
                declared
                    .and_then(|order| order.iter().position(|candidate| candidate == label))
                    .unwrap_or(usize::MAX)
            };
            rank(left).cmp(&rank(right)).then_with(|| left.cmp(right))
        }
        (GroupKey::Code(_), GroupKey::Label(_)) => Ordering::Less,
        (GroupKey::Label(_), GroupKey::Code(_)) => Ordering::Greater,
    }
}

/// Values of `value_column` with NaN turned into null, so that polars
/// aggregations skip them.
fn defined_or_null(table: &Table, value_column: &str) -> Result<Column> {
    let values: Vec<Option<f64>> = column_f64(table, value_column)?
        .into_iter()
        .map(|value| value.filter(|value| !value.is_nan()))
        .collect();
    Ok(Series::new(value_column.into(), values).into_column())
}

fn counts(frame: &DataFrame, name: &str) -> Result<Vec<usize>> {
    let cast = frame.column(name)?.cast(&DataType::UInt64)?;
    Ok(cast
        .u64()?
        .into_iter()
        .map(|count| count.map_or(0, |count| count as usize))
        .collect())
}

fn report_unkeyed(key_column: &str, unkeyed: usize) {
    if unkeyed > 0 {
        warn!(column = key_column, rows = unkeyed, "rows without a group key");
    }
}

/// Arithmetic mean of `value_column` per distinct `key_column` value.
///
/// NaN and null values are skipped and counted in [`GroupMean::undefined`];
/// a group with no defined values has a NaN mean.
pub fn group_mean(table: &Table, key_column: &str, value_column: &str) -> Result<AggregateResult> {
    let key = table.column(key_column)?.clone();
    ensure_key_dtype(&key)?;
    let frame = DataFrame::new(vec![key, defined_or_null(table, value_column)?])?;
    let grouped = frame
        .lazy()
        .group_by([col(key_column)])
        .agg([
            len().alias(ROWS),
            col(value_column).count().alias(DEFINED),
            col(value_column).mean().alias(MEAN),
        ])
        .collect()?;

    let keys = key_values(grouped.column(key_column)?)?;
    let rows = counts(&grouped, ROWS)?;
    let defined = counts(&grouped, DEFINED)?;
    let means = grouped.column(MEAN)?.cast(&DataType::Float64)?;
    let means: Vec<f64> = means
        .f64()?
        .into_iter()
        .map(|mean| mean.unwrap_or(f64::NAN))
        .collect();

    let mut unkeyed = 0usize;
    let mut groups = Vec::with_capacity(keys.len());
    for (((key, rows), defined), mean) in keys.into_iter().zip(rows).zip(defined).zip(means) {
        let Some(key) = key else {
            unkeyed += rows;
            continue;
        };
        groups.push(GroupMean {
            key,
            rows,
            undefined: rows - defined,
            mean,
        });
    }
    let declared = table.declared_order(key_column);
    groups.sort_by(|left, right| compare_keys(&left.key, &right.key, declared));
    report_unkeyed(key_column, unkeyed);
    debug!(key = key_column, groups = groups.len(), "grouped means");

    Ok(AggregateResult {
        key_column: key_column.to_string(),
        value_column: value_column.to_string(),
        groups,
        unkeyed,
    })
}

/// Every defined value of `value_column` per `key_column` group, with a
/// five-number summary for box and line charts.
pub fn group_values(table: &Table, key_column: &str, value_column: &str) -> Result<Distribution> {
    let keys = key_values(table.column(key_column)?)?;
    let values = column_f64(table, value_column)?;
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut buckets: Vec<(GroupKey, Vec<f64>)> = Vec::new();
    let mut unkeyed = 0usize;
    for (key, value) in keys.into_iter().zip(values) {
        let Some(key) = key else {
            unkeyed += 1;
            continue;
        };
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            buckets.push((key, Vec::new()));
            buckets.len() - 1
        });
        if let Some(value) = value.filter(|value| !value.is_nan()) {
            buckets[slot].1.push(value);
        }
    }
    let declared = table.declared_order(key_column);
    buckets.sort_by(|(left, _), (right, _)| compare_keys(left, right, declared));
    report_unkeyed(key_column, unkeyed);

    let groups = buckets
        .into_iter()
        .map(|(key, values)| {
            let summary = box_summary(&values);
            DistributionGroup {
                key,
                values,
                summary,
            }
        })
        .collect();
    Ok(Distribution {
        key_column: key_column.to_string(),
        value_column: value_column.to_string(),
        groups,
        unkeyed,
    })
}
