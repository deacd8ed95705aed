//! Label mapping for coded categorical columns.

use std::collections::BTreeMap;

use polars::prelude::{IntoColumn, NamedFrom, Series};
use tracing::debug;

use bikeshare_model::{DashboardError, Field, LabelLookup, Result, Table};

use crate::columns::column_codes;

/// Name of the label column derived from `field`, e.g. `season_label`.
pub fn label_column_name(field: Field) -> String {
    format!("{}_label", field.name())
}

/// Add `<field>_label` holding the display string of each row's code.
///
/// The lookup's declared label order is recorded on the returned table so
/// that grouping by the label column presents groups in that order. A code
/// without a label fails with [`DashboardError::UnmappedCode`] and a row
/// without a code fails with [`DashboardError::MissingCode`].
pub fn map_labels(table: &Table, field: Field, lookup: &LabelLookup) -> Result<Table> {
    let codes = column_codes(table, field.name())?;
    let mut labels: Vec<Option<&str>> = Vec::with_capacity(codes.len());
    let mut unmapped: BTreeMap<i64, usize> = BTreeMap::new();
    let mut missing = 0usize;
    for code in codes {
        match code {
            Some(code) => match lookup.label(code) {
                Some(label) => labels.push(Some(label)),
                None => {
                    *unmapped.entry(code).or_default() += 1;
                    labels.push(None);
                }
            },
            None => {
                missing += 1;
                labels.push(None);
            }
        }
    }
    if missing > 0 {
        return Err(DashboardError::MissingCode {
            column: field.name().to_string(),
            rows: missing,
        });
    }
    if let Some((code, rows)) = unmapped.into_iter().next() {
        return Err(DashboardError::UnmappedCode {
            column: field.name().to_string(),
            code,
            rows,
        });
    }

    let column_name = label_column_name(field);
    let mut frame = table.frame().clone();
    frame.with_column(Series::new(column_name.as_str().into(), labels).into_column())?;
    debug!(column = %column_name, rows = frame.height(), "mapped labels");
    Ok(table
        .with_frame(frame)
        .with_declared_order(column_name, lookup.labels()))
}
