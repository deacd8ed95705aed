mod common;

use bikeshare_transform::{box_summary, describe, quantile, sample_std};

use common::{Row, daily_table, keyed_table, nullable_keyed_table};

#[test]
fn describes_five_rows() {
    let table = keyed_table(
        "season",
        vec![1, 1, 2, 2, 3],
        "cnt",
        vec![10.0, 20.0, 30.0, 40.0, 50.0],
    );

    let report = describe(&table).expect("describe");

    assert_eq!(report.rows, 5);
    let cnt = report.column("cnt").expect("cnt statistics");
    assert_eq!(cnt.count, 5);
    assert!((cnt.mean - 30.0).abs() < 1e-9);
    assert!((cnt.std - 250f64.sqrt()).abs() < 1e-9);
    assert_eq!(cnt.min, 10.0);
    assert_eq!(cnt.q25, 20.0);
    assert_eq!(cnt.median, 30.0);
    assert_eq!(cnt.q75, 40.0);
    assert_eq!(cnt.max, 50.0);
}

#[test]
fn text_columns_are_skipped() {
    let table = daily_table(&[Row::new(1, 1, 2), Row::new(2, 3, 4)]);

    let report = describe(&table).expect("describe");

    assert!(report.column("dteday").is_none());
    let names: Vec<&str> = report.columns.iter().map(|c| c.column.as_str()).collect();
    assert_eq!(
        names,
        vec!["season", "weekday", "workingday", "weathersit", "casual", "registered", "cnt"]
    );
}

#[test]
fn nan_cells_are_not_counted() {
    let table = keyed_table("k", vec![1, 1, 1], "v", vec![1.0, f64::NAN, 3.0]);

    let v = describe(&table).unwrap().column("v").cloned().expect("v");

    assert_eq!(v.count, 2);
    assert_eq!(v.mean, 2.0);
}

#[test]
fn null_cells_are_not_counted() {
    let table = nullable_keyed_table("k", vec![Some(2), None, Some(4)], "v", vec![1.0, 2.0, 3.0]);

    let k = describe(&table).unwrap().column("k").cloned().expect("k");

    assert_eq!(k.count, 2);
    assert_eq!(k.mean, 3.0);
    assert_eq!(k.min, 2.0);
    assert_eq!(k.max, 4.0);
    assert_eq!(k.median, 3.0);
}

#[test]
fn empty_table_yields_nan_statistics() {
    let table = keyed_table("k", Vec::new(), "v", Vec::new());

    let v = describe(&table).unwrap().column("v").cloned().expect("v");

    assert_eq!(v.count, 0);
    assert!(v.mean.is_nan());
    assert!(v.min.is_nan());
}

#[test]
fn quantiles_interpolate_linearly() {
    let sorted = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(quantile(&sorted, 0.25), 1.75);
    assert_eq!(quantile(&sorted, 0.5), 2.5);
    assert_eq!(quantile(&sorted, 1.0), 4.0);
    assert!(quantile(&[], 0.5).is_nan());
}

#[test]
fn std_of_single_value_is_nan() {
    assert!(sample_std(&[4.0]).is_nan());
    assert!((sample_std(&[2.0, 4.0]) - 2f64.sqrt()).abs() < 1e-12);
}

#[test]
fn box_summary_of_unsorted_values() {
    let summary = box_summary(&[5.0, 1.0, 3.0]).expect("summary");
    assert_eq!(summary.min, 1.0);
    assert_eq!(summary.median, 3.0);
    assert_eq!(summary.max, 5.0);
    assert_eq!(summary.mean, 3.0);
    assert!(box_summary(&[]).is_none());
}
