//! Column schema for the daily and hourly rental datasets.
//!
//! Both preprocessed CSV files share one column vocabulary. The hourly file
//! adds `hr`. Columns are addressed through [`Field`] so that a typo in a
//! column name is a compile error rather than a missing-key surprise at
//! runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the two source datasets a table was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Daily,
    Hourly,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 2] = [DatasetKind::Daily, DatasetKind::Hourly];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Daily => "daily",
            DatasetKind::Hourly => "hourly",
        }
    }

    /// Heading used when presenting the dataset.
    pub fn title(&self) -> &'static str {
        match self {
            DatasetKind::Daily => "Daily Data",
            DatasetKind::Hourly => "Hourly Data",
        }
    }

    /// Columns that must be present for a file to load as this dataset.
    pub fn required_fields(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|field| field.is_required_for(*self))
            .collect()
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" | "day" => Ok(DatasetKind::Daily),
            "hourly" | "hour" => Ok(DatasetKind::Hourly),
            other => Err(format!("unknown dataset: {other}")),
        }
    }
}

/// Logical type of a column, checked when a file is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// ISO calendar date stored as text (`YYYY-MM-DD`).
    Date,
    /// Small integer code standing in for a named category.
    Categorical,
    /// Non-negative integer rental count.
    Count,
    /// Normalised floating point measurement (temperature, humidity, ...).
    Measure,
}

impl FieldKind {
    /// True when values must be stored as integers.
    pub fn is_integer(&self) -> bool {
        matches!(self, FieldKind::Categorical | FieldKind::Count)
    }
}

/// Known columns of the rental datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Instant,
    Date,
    Season,
    Year,
    Month,
    Hour,
    Holiday,
    Weekday,
    WorkingDay,
    WeatherSituation,
    Temperature,
    FeelsLike,
    Humidity,
    WindSpeed,
    Casual,
    Registered,
    Total,
}

impl Field {
    /// All fields in source file order.
    pub const ALL: [Field; 17] = [
        Field::Instant,
        Field::Date,
        Field::Season,
        Field::Year,
        Field::Month,
        Field::Hour,
        Field::Holiday,
        Field::Weekday,
        Field::WorkingDay,
        Field::WeatherSituation,
        Field::Temperature,
        Field::FeelsLike,
        Field::Humidity,
        Field::WindSpeed,
        Field::Casual,
        Field::Registered,
        Field::Total,
    ];

    /// Column name as it appears in the CSV header.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Instant => "instant",
            Field::Date => "dteday",
            Field::Season => "season",
            Field::Year => "yr",
            Field::Month => "mnth",
            Field::Hour => "hr",
            Field::Holiday => "holiday",
            Field::Weekday => "weekday",
            Field::WorkingDay => "workingday",
            Field::WeatherSituation => "weathersit",
            Field::Temperature => "temp",
            Field::FeelsLike => "atemp",
            Field::Humidity => "hum",
            Field::WindSpeed => "windspeed",
            Field::Casual => "casual",
            Field::Registered => "registered",
            Field::Total => "cnt",
        }
    }

    /// Human-readable axis label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Instant => "Record",
            Field::Date => "Date",
            Field::Season => "Season",
            Field::Year => "Year",
            Field::Month => "Month",
            Field::Hour => "Hour",
            Field::Holiday => "Holiday",
            Field::Weekday => "Weekday",
            Field::WorkingDay => "Working Day",
            Field::WeatherSituation => "Weather Condition",
            Field::Temperature => "Temperature",
            Field::FeelsLike => "Feels-like Temperature",
            Field::Humidity => "Humidity",
            Field::WindSpeed => "Wind Speed",
            Field::Casual => "Casual Rentals",
            Field::Registered => "Registered Rentals",
            Field::Total => "Total Rentals",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Date => FieldKind::Date,
            Field::Season
            | Field::Year
            | Field::Month
            | Field::Hour
            | Field::Holiday
            | Field::Weekday
            | Field::WorkingDay
            | Field::WeatherSituation => FieldKind::Categorical,
            Field::Instant | Field::Casual | Field::Registered | Field::Total => FieldKind::Count,
            Field::Temperature | Field::FeelsLike | Field::Humidity | Field::WindSpeed => {
                FieldKind::Measure
            }
        }
    }

    /// Whether a file must carry this column to load as `dataset`.
    ///
    /// Descriptive columns (`instant`, `yr`, `temp`, ...) are optional; when
    /// present they are type-checked and kept.
    pub fn is_required_for(&self, dataset: DatasetKind) -> bool {
        match self {
            Field::Date
            | Field::Season
            | Field::Weekday
            | Field::WorkingDay
            | Field::WeatherSituation
            | Field::Casual
            | Field::Registered
            | Field::Total => true,
            Field::Hour => dataset == DatasetKind::Hourly,
            _ => false,
        }
    }

    /// Look up a field by its CSV column name.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|field| field.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Date format of the `dteday` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Display label derived from `season`.
pub const SEASON_LABEL: &str = "season_label";
/// Display label derived from `weekday`.
pub const WEEKDAY_LABEL: &str = "weekday_label";
/// "Working Day" / "Weekend" derived from `workingday`.
pub const DAY_TYPE: &str = "day_type";
/// `casual + registered`, the denominator of the duration ratio.
pub const RIDER_TOTAL: &str = "rider_total";
/// `cnt / (casual + registered)`.
pub const AVG_DURATION: &str = "avg_duration";
