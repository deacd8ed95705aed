//! Category filter over a single categorical column.

use std::collections::BTreeSet;

use polars::prelude::{BooleanChunked, NewChunkedArray};
use tracing::{debug, warn};

use bikeshare_model::{DashboardError, Field, FieldKind, Result, Table};

use crate::columns::column_codes;

/// Rows whose `field` code is in `accepted`, in original order.
///
/// An empty `accepted` set yields an empty table with the same columns.
/// Codes that do not occur in the table simply match nothing.
pub fn filter(table: &Table, field: Field, accepted: &BTreeSet<i64>) -> Result<Table> {
    if field.kind() != FieldKind::Categorical {
        return Err(DashboardError::NotCategorical {
            column: field.name().to_string(),
        });
    }
    let codes = column_codes(table, field.name())?;
    let keep: Vec<bool> = codes
        .iter()
        .map(|code| code.is_some_and(|code| accepted.contains(&code)))
        .collect();
    let mask = BooleanChunked::from_slice("filter".into(), &keep);
    let frame = table.frame().filter(&mask)?;
    debug!(
        column = field.name(),
        accepted = accepted.len(),
        rows_in = table.height(),
        rows_out = frame.height(),
        "applied category filter"
    );
    Ok(table.with_frame(frame))
}

/// Sorted distinct codes of a categorical column; the filter's option list.
pub fn distinct_codes(table: &Table, field: Field) -> Result<Vec<i64>> {
    let codes: BTreeSet<i64> = column_codes(table, field.name())?
        .into_iter()
        .flatten()
        .collect();
    Ok(codes.into_iter().collect())
}

/// Accepted `season` codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonFilter {
    accepted: BTreeSet<i64>,
}

impl SeasonFilter {
    pub fn new<I>(codes: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        Self {
            accepted: codes.into_iter().collect(),
        }
    }

    /// Accept nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Accept every season present in `table`.
    pub fn all(table: &Table) -> Result<Self> {
        Ok(Self::new(distinct_codes(table, Field::Season)?))
    }

    pub fn accepts(&self, code: i64) -> bool {
        self.accepted.contains(&code)
    }

    pub fn codes(&self) -> &BTreeSet<i64> {
        &self.accepted
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}

/// Restrict `table` to the seasons accepted by `season_filter`.
pub fn apply_season_filter(table: &Table, season_filter: &SeasonFilter) -> Result<Table> {
    let present = distinct_codes(table, Field::Season)?;
    let unknown: Vec<i64> = season_filter
        .codes()
        .iter()
        .copied()
        .filter(|code| !present.contains(code))
        .collect();
    if !unknown.is_empty() {
        warn!(codes = ?unknown, "season filter accepts codes absent from the dataset");
    }
    filter(table, Field::Season, season_filter.codes())
}
