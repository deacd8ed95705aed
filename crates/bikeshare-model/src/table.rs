//! Immutable rental table backed by a Polars DataFrame.
//!
//! A [`Table`] pairs the frame with the dataset it came from and the
//! declared display order of derived label columns. Operations never mutate
//! a table; they build a new one with [`Table::with_frame`] so that a loaded
//! dataset stays untouched across any number of interactions.

use std::collections::BTreeMap;

use polars::prelude::{Column, DataFrame};

use crate::error::{DashboardError, Result};
use crate::schema::{DatasetKind, Field};

#[derive(Debug, Clone)]
pub struct Table {
    dataset: DatasetKind,
    frame: DataFrame,
    declared_orders: BTreeMap<String, Vec<String>>,
}

impl Table {
    pub fn new(dataset: DatasetKind, frame: DataFrame) -> Self {
        Self {
            dataset,
            frame,
            declared_orders: BTreeMap::new(),
        }
    }

    pub fn dataset(&self) -> DatasetKind {
        self.dataset
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.frame.column(name).is_ok()
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.has_column(field.name())
    }

    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Column by name, or [`DashboardError::UnavailableColumn`].
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.frame
            .column(name)
            .map_err(|_| DashboardError::UnavailableColumn {
                column: name.to_string(),
            })
    }

    pub fn field(&self, field: Field) -> Result<&Column> {
        self.column(field.name())
    }

    /// Derive a table with a new frame, keeping dataset and declared orders.
    pub fn with_frame(&self, frame: DataFrame) -> Self {
        Self {
            dataset: self.dataset,
            frame,
            declared_orders: self.declared_orders.clone(),
        }
    }

    /// Record the presentation order of a derived string column.
    #[must_use]
    pub fn with_declared_order(mut self, column: impl Into<String>, order: Vec<String>) -> Self {
        self.declared_orders.insert(column.into(), order);
        self
    }

    pub fn declared_order(&self, column: &str) -> Option<&[String]> {
        self.declared_orders.get(column).map(Vec::as_slice)
    }

    /// First `rows` rows.
    pub fn head(&self, rows: usize) -> Self {
        self.with_frame(self.frame.head(Some(rows)))
    }
}

/// Row-for-row content equality; declared orders are metadata and ignored.
impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.dataset == other.dataset && self.frame.equals_missing(&other.frame)
    }
}
