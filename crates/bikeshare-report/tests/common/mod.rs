#![allow(dead_code)]

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use bikeshare_model::{DatasetKind, Datasets, Table};

fn int_column(name: &str, values: &[i64]) -> Column {
    Series::new(name.into(), values.to_vec()).into_column()
}

/// Six days across the four seasons; the Summer day has no riders at all.
pub fn daily() -> Table {
    let frame = DataFrame::new(vec![
        Series::new(
            "dteday".into(),
            vec![
                "2011-01-02",
                "2011-01-01",
                "2011-01-03",
                "2011-04-04",
                "2011-07-05",
                "2011-10-06",
            ],
        )
        .into_column(),
        int_column("season", &[1, 1, 1, 2, 3, 4]),
        int_column("weekday", &[0, 6, 1, 1, 2, 4]),
        int_column("workingday", &[0, 0, 1, 1, 1, 1]),
        int_column("weathersit", &[2, 2, 1, 1, 3, 1]),
        int_column("casual", &[131, 331, 120, 300, 0, 500]),
        int_column("registered", &[670, 654, 1229, 1700, 0, 2500]),
        int_column("cnt", &[801, 985, 1349, 2000, 0, 3000]),
    ])
    .unwrap();
    Table::new(DatasetKind::Daily, frame)
}

pub fn hourly() -> Table {
    let frame = DataFrame::new(vec![
        Series::new(
            "dteday".into(),
            vec!["2011-01-01", "2011-01-01", "2011-01-01"],
        )
        .into_column(),
        int_column("season", &[1, 1, 1]),
        int_column("hr", &[0, 1, 0]),
        int_column("weekday", &[6, 6, 6]),
        int_column("workingday", &[0, 0, 0]),
        int_column("weathersit", &[1, 1, 1]),
        int_column("casual", &[3, 1, 8]),
        int_column("registered", &[7, 4, 12]),
        int_column("cnt", &[10, 5, 20]),
    ])
    .unwrap();
    Table::new(DatasetKind::Hourly, frame)
}

pub fn datasets() -> Datasets {
    Datasets {
        daily: daily(),
        hourly: hourly(),
    }
}

/// Copy of `table` with the integer cell at `row` of `column` set to null.
pub fn with_missing(table: &Table, column: &str, row: usize) -> Table {
    let values: Vec<Option<i64>> = table
        .column(column)
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .enumerate()
        .map(|(idx, value)| if idx == row { None } else { value })
        .collect();
    let mut frame = table.frame().clone();
    frame
        .with_column(Series::new(column.into(), values).into_column())
        .unwrap();
    Table::new(table.dataset(), frame)
}
