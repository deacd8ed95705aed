//! Descriptive statistics over the numeric columns of a table.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistics {
    pub column: String,
    /// Defined (non-null, non-NaN) values.
    pub count: usize,
    #[serde(with = "crate::serde_float")]
    pub mean: f64,
    /// Sample standard deviation (n - 1).
    #[serde(with = "crate::serde_float")]
    pub std: f64,
    #[serde(with = "crate::serde_float")]
    pub min: f64,
    #[serde(with = "crate::serde_float")]
    pub q25: f64,
    #[serde(with = "crate::serde_float")]
    pub median: f64,
    #[serde(with = "crate::serde_float")]
    pub q75: f64,
    #[serde(with = "crate::serde_float")]
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub rows: usize,
    pub columns: Vec<ColumnStatistics>,
}

impl StatisticsReport {
    pub fn column(&self, name: &str) -> Option<&ColumnStatistics> {
        self.columns.iter().find(|stats| stats.column == name)
    }
}
