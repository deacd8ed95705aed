//! Data model for the bike sharing analytics engine.
//!
//! Defines the column schema of the rental datasets, the static label
//! lookups, the immutable [`Table`] wrapper and the result types every
//! report pipeline produces.

pub mod aggregate;
pub mod error;
pub mod labels;
pub mod options;
pub mod report;
pub mod schema;
pub mod serde_float;
pub mod statistics;
pub mod table;
pub mod values;

pub use aggregate::{AggregateResult, BoxSummary, Distribution, DistributionGroup, GroupKey, GroupMean};
pub use error::{DashboardError, Result};
pub use labels::{
    LabelLookup, SEASON_LABELS, WEATHER_LABELS, WEEKDAY_LABELS, WEEKEND_LABEL, WORKING_DAY_LABEL,
    day_type_label,
};
pub use options::{RatioPolicy, ReportOptions};
pub use report::{ChartReport, ChartStyle, DatePoint, ReportData, ReportKind, ReportOutcome};
pub use schema::{
    AVG_DURATION, DATE_FORMAT, DAY_TYPE, DatasetKind, Field, FieldKind, RIDER_TOTAL, SEASON_LABEL,
    WEEKDAY_LABEL,
};
pub use statistics::{ColumnStatistics, StatisticsReport};
pub use table::Table;

/// The two tables loaded at startup.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub daily: Table,
    pub hourly: Table,
}

impl Datasets {
    pub fn get(&self, kind: DatasetKind) -> &Table {
        match kind {
            DatasetKind::Daily => &self.daily,
            DatasetKind::Hourly => &self.hourly,
        }
    }
}
