//! Report kinds and the chart-ready results they produce.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::aggregate::{AggregateResult, Distribution};
use crate::schema::{DatasetKind, Field};

/// The seven charts the dashboard offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    TotalRentalsByDay,
    WeatherDistribution,
    TrendOverTime,
    HourlyPatterns,
    WeekdayRentals,
    SeasonAverages,
    DurationByDayType,
}

impl ReportKind {
    /// Selector order.
    pub const ALL: [ReportKind; 7] = [
        ReportKind::TotalRentalsByDay,
        ReportKind::WeatherDistribution,
        ReportKind::TrendOverTime,
        ReportKind::HourlyPatterns,
        ReportKind::WeekdayRentals,
        ReportKind::SeasonAverages,
        ReportKind::DurationByDayType,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::TotalRentalsByDay => "Total Rentals by Day",
            ReportKind::WeatherDistribution => "Rentals Distribution by Weather",
            ReportKind::TrendOverTime => "Trend Over Time",
            ReportKind::HourlyPatterns => "Hourly Rental Patterns",
            ReportKind::WeekdayRentals => "Daily Rentals by Weekday",
            ReportKind::SeasonAverages => "Average Rentals by Season",
            ReportKind::DurationByDayType => "Average Duration: Weekday vs Weekend",
        }
    }

    /// Short command-line name.
    pub fn slug(&self) -> &'static str {
        match self {
            ReportKind::TotalRentalsByDay => "total-by-day",
            ReportKind::WeatherDistribution => "weather-distribution",
            ReportKind::TrendOverTime => "trend",
            ReportKind::HourlyPatterns => "hourly-patterns",
            ReportKind::WeekdayRentals => "weekday",
            ReportKind::SeasonAverages => "season-averages",
            ReportKind::DurationByDayType => "duration-by-day-type",
        }
    }

    pub fn chart(&self) -> ChartStyle {
        match self {
            ReportKind::TotalRentalsByDay
            | ReportKind::SeasonAverages
            | ReportKind::DurationByDayType => ChartStyle::Bar,
            ReportKind::WeatherDistribution => ChartStyle::Box,
            ReportKind::TrendOverTime | ReportKind::HourlyPatterns | ReportKind::WeekdayRentals => {
                ChartStyle::Line
            }
        }
    }

    pub fn x_label(&self) -> &'static str {
        match self {
            ReportKind::TotalRentalsByDay | ReportKind::TrendOverTime => Field::Date.label(),
            ReportKind::WeatherDistribution => Field::WeatherSituation.label(),
            ReportKind::HourlyPatterns => Field::Hour.label(),
            ReportKind::WeekdayRentals => Field::Weekday.label(),
            ReportKind::SeasonAverages => Field::Season.label(),
            ReportKind::DurationByDayType => "Day Type",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            ReportKind::TotalRentalsByDay
            | ReportKind::WeatherDistribution
            | ReportKind::TrendOverTime => "Total Rentals",
            ReportKind::HourlyPatterns => "Average Rentals",
            ReportKind::WeekdayRentals => "Number of Bike Rentals",
            ReportKind::SeasonAverages => "Average Rentals",
            ReportKind::DurationByDayType => "Average Rental Duration",
        }
    }

    /// Source columns the pipeline reads.
    pub fn required_fields(&self) -> &'static [Field] {
        match self {
            ReportKind::TotalRentalsByDay | ReportKind::TrendOverTime => {
                &[Field::Date, Field::Total]
            }
            ReportKind::WeatherDistribution => &[Field::WeatherSituation, Field::Total],
            ReportKind::HourlyPatterns => &[Field::Hour, Field::Total],
            ReportKind::WeekdayRentals => &[Field::Weekday, Field::Total],
            ReportKind::SeasonAverages => &[Field::Season, Field::Total],
            ReportKind::DurationByDayType => &[
                Field::WorkingDay,
                Field::Total,
                Field::Casual,
                Field::Registered,
            ],
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for ReportKind {
    type Err = String;

    /// Accepts either the slug or the full title (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ReportKind::ALL
            .iter()
            .copied()
            .find(|kind| {
                kind.slug().eq_ignore_ascii_case(needle) || kind.title().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| format!("unknown report: {needle}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartStyle {
    Bar,
    Box,
    Line,
}

impl ChartStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartStyle::Bar => "bar",
            ChartStyle::Box => "box",
            ChartStyle::Line => "line",
        }
    }
}

/// One `(date, value)` pair of a per-row projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePoint {
    pub date: NaiveDate,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ReportData {
    /// Raw per-row projection.
    Points { points: Vec<DatePoint> },
    /// Values grouped by key, every value retained.
    Distribution(Distribution),
    /// One mean per group.
    Aggregate(AggregateResult),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartReport {
    pub kind: ReportKind,
    pub title: String,
    pub chart: ChartStyle,
    pub x_label: String,
    pub y_label: String,
    pub data: ReportData,
    /// Anomalies the viewer should know about (undefined ratios, ...).
    pub caveats: Vec<String>,
}

impl ChartReport {
    pub fn new(kind: ReportKind, data: ReportData) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            chart: kind.chart(),
            x_label: kind.x_label().to_string(),
            y_label: kind.y_label().to_string(),
            data,
            caveats: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_caveat(mut self, caveat: impl Into<String>) -> Self {
        self.caveats.push(caveat.into());
        self
    }
}

/// Result of selecting a report against a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportOutcome {
    Ready(ChartReport),
    /// The dataset lacks a column the report needs.
    Unavailable {
        kind: ReportKind,
        dataset: DatasetKind,
        column: String,
    },
}

impl ReportOutcome {
    pub fn is_available(&self) -> bool {
        matches!(self, ReportOutcome::Ready(_))
    }

    pub fn report(&self) -> Option<&ChartReport> {
        match self {
            ReportOutcome::Ready(report) => Some(report),
            ReportOutcome::Unavailable { .. } => None,
        }
    }

    /// User-facing explanation for an unavailable report.
    pub fn message(&self) -> Option<String> {
        match self {
            ReportOutcome::Ready(_) => None,
            ReportOutcome::Unavailable {
                kind,
                dataset,
                column,
            } => Some(format!(
                "{} is unavailable for the {} dataset (missing column '{}')",
                kind.title(),
                dataset,
                column
            )),
        }
    }
}
