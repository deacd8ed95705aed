//! Grouped results handed to the rendering layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Group identity: an integer code (`hr`, `weathersit`) or a display label
/// (`season_label`, `day_type`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupKey {
    Code(i64),
    Label(String),
}

impl GroupKey {
    pub fn label(value: impl Into<String>) -> Self {
        GroupKey::Label(value.into())
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Code(code) => write!(f, "{code}"),
            GroupKey::Label(label) => write!(f, "{label}"),
        }
    }
}

/// Mean of one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMean {
    pub key: GroupKey,
    /// Rows in the group, including those with an undefined value.
    pub rows: usize,
    /// Rows skipped because the value was NaN or missing.
    pub undefined: usize,
    /// Mean over defined values; NaN when none are defined.
    #[serde(with = "crate::serde_float")]
    pub mean: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub key_column: String,
    pub value_column: String,
    pub groups: Vec<GroupMean>,
    /// Rows left out of every group because their key is missing.
    #[serde(default)]
    pub unkeyed: usize,
}

impl AggregateResult {
    pub fn get(&self, key: &GroupKey) -> Option<&GroupMean> {
        self.groups.iter().find(|group| &group.key == key)
    }

    pub fn mean_for_code(&self, code: i64) -> Option<f64> {
        self.get(&GroupKey::Code(code)).map(|group| group.mean)
    }

    pub fn mean_for_label(&self, label: &str) -> Option<f64> {
        self.get(&GroupKey::label(label)).map(|group| group.mean)
    }

    pub fn keys(&self) -> Vec<GroupKey> {
        self.groups.iter().map(|group| group.key.clone()).collect()
    }

    /// Total rows that contributed no value to their group's mean.
    pub fn undefined_rows(&self) -> usize {
        self.groups.iter().map(|group| group.undefined).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Five-number summary plus mean, the data behind one box or one line point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    #[serde(with = "crate::serde_float")]
    pub min: f64,
    #[serde(with = "crate::serde_float")]
    pub q1: f64,
    #[serde(with = "crate::serde_float")]
    pub median: f64,
    #[serde(with = "crate::serde_float")]
    pub q3: f64,
    #[serde(with = "crate::serde_float")]
    pub max: f64,
    #[serde(with = "crate::serde_float")]
    pub mean: f64,
}

/// Every value of one group, kept for distribution-style charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionGroup {
    pub key: GroupKey,
    pub values: Vec<f64>,
    pub summary: Option<BoxSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub key_column: String,
    pub value_column: String,
    pub groups: Vec<DistributionGroup>,
    /// Rows left out of every group because their key is missing.
    #[serde(default)]
    pub unkeyed: usize,
}

impl Distribution {
    pub fn get(&self, key: &GroupKey) -> Option<&DistributionGroup> {
        self.groups.iter().find(|group| &group.key == key)
    }

    pub fn keys(&self) -> Vec<GroupKey> {
        self.groups.iter().map(|group| group.key.clone()).collect()
    }

    pub fn value_count(&self) -> usize {
        self.groups.iter().map(|group| group.values.len()).sum()
    }
}
