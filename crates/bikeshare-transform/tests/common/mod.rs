//! Fixture tables for transformation tests.

#![allow(dead_code)]

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use bikeshare_model::{DatasetKind, Table};

/// One fixture row; `cnt` is always `casual + registered`.
#[derive(Debug, Clone, Copy)]
pub struct Row {
    pub season: i64,
    pub weekday: i64,
    pub workingday: i64,
    pub weathersit: i64,
    pub casual: i64,
    pub registered: i64,
}

impl Row {
    pub fn new(season: i64, casual: i64, registered: i64) -> Self {
        Self {
            season,
            weekday: 1,
            workingday: 1,
            weathersit: 1,
            casual,
            registered,
        }
    }

    pub fn weekday(mut self, weekday: i64) -> Self {
        self.weekday = weekday;
        self
    }

    pub fn workingday(mut self, workingday: i64) -> Self {
        self.workingday = workingday;
        self
    }

    pub fn weather(mut self, weathersit: i64) -> Self {
        self.weathersit = weathersit;
        self
    }
}

pub fn daily_table(rows: &[Row]) -> Table {
    let dates: Vec<String> = (0..rows.len())
        .map(|idx| format!("2011-01-{:02}", idx % 28 + 1))
        .collect();
    let columns: Vec<Column> = vec![
        Series::new("dteday".into(), dates).into(),
        Series::new("season".into(), rows.iter().map(|r| r.season).collect::<Vec<_>>()).into(),
        Series::new("weekday".into(), rows.iter().map(|r| r.weekday).collect::<Vec<_>>()).into(),
        Series::new(
            "workingday".into(),
            rows.iter().map(|r| r.workingday).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "weathersit".into(),
            rows.iter().map(|r| r.weathersit).collect::<Vec<_>>(),
        )
        .into(),
        Series::new("casual".into(), rows.iter().map(|r| r.casual).collect::<Vec<_>>()).into(),
        Series::new(
            "registered".into(),
            rows.iter().map(|r| r.registered).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "cnt".into(),
            rows.iter().map(|r| r.casual + r.registered).collect::<Vec<_>>(),
        )
        .into(),
    ];
    Table::new(DatasetKind::Daily, DataFrame::new(columns).unwrap())
}

/// Table of `(key, value)` pairs with integer keys.
pub fn keyed_table(key: &str, keys: Vec<i64>, value: &str, values: Vec<f64>) -> Table {
    let frame = DataFrame::new(vec![
        Series::new(key.into(), keys).into(),
        Series::new(value.into(), values).into(),
    ])
    .unwrap();
    Table::new(DatasetKind::Daily, frame)
}

/// Like [`keyed_table`], but keys may be missing.
pub fn nullable_keyed_table(
    key: &str,
    keys: Vec<Option<i64>>,
    value: &str,
    values: Vec<f64>,
) -> Table {
    let frame = DataFrame::new(vec![
        Series::new(key.into(), keys).into(),
        Series::new(value.into(), values).into(),
    ])
    .unwrap();
    Table::new(DatasetKind::Daily, frame)
}

pub fn i64_values(table: &Table, column: &str) -> Vec<i64> {
    table
        .column(column)
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .map(|value| value.unwrap())
        .collect()
}

pub fn f64_values(table: &Table, column: &str) -> Vec<f64> {
    table
        .column(column)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|value| value.unwrap())
        .collect()
}

pub fn str_values(table: &Table, column: &str) -> Vec<String> {
    table
        .column(column)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|value| value.unwrap().to_string())
        .collect()
}
