mod common;

use bikeshare_model::{DashboardError, Field, GroupKey, SEASON_LABELS};
use bikeshare_transform::{group_mean, group_values, label_column_name, map_labels};

use common::{Row, daily_table, keyed_table, nullable_keyed_table};

#[test]
fn mean_per_code() {
    let table = keyed_table("season", vec![1, 1, 2], "cnt", vec![10.0, 20.0, 5.0]);

    let result = group_mean(&table, "season", "cnt").expect("group mean");

    assert_eq!(result.keys(), vec![GroupKey::Code(1), GroupKey::Code(2)]);
    assert_eq!(result.mean_for_code(1), Some(15.0));
    assert_eq!(result.mean_for_code(2), Some(5.0));
    assert_eq!(result.undefined_rows(), 0);
}

#[test]
fn integer_keys_come_out_ascending() {
    let table = keyed_table("hr", vec![23, 0, 12, 0, 5], "cnt", vec![1.0, 2.0, 3.0, 4.0, 5.0]);

    let result = group_mean(&table, "hr", "cnt").expect("group mean");

    assert_eq!(
        result.keys(),
        vec![
            GroupKey::Code(0),
            GroupKey::Code(5),
            GroupKey::Code(12),
            GroupKey::Code(23)
        ]
    );
    assert_eq!(result.mean_for_code(0), Some(3.0));
    assert_eq!(result.get(&GroupKey::Code(0)).map(|g| g.rows), Some(2));
}

#[test]
fn label_keys_follow_declared_order() {
    let rows = [
        Row::new(4, 10, 10),
        Row::new(3, 20, 20),
        Row::new(1, 30, 30),
        Row::new(3, 40, 40),
    ];
    let table = map_labels(&daily_table(&rows), Field::Season, &SEASON_LABELS).expect("labels");

    let result =
        group_mean(&table, &label_column_name(Field::Season), "cnt").expect("group mean");

    assert_eq!(
        result.keys(),
        vec![
            GroupKey::label("Winter"),
            GroupKey::label("Summer"),
            GroupKey::label("Fall")
        ]
    );
    assert_eq!(result.mean_for_label("Summer"), Some(60.0));
}

#[test]
fn nan_values_are_skipped_and_counted() {
    let table = keyed_table(
        "workingday",
        vec![0, 0, 1, 1],
        "ratio",
        vec![f64::NAN, f64::NAN, 2.0, f64::NAN],
    );

    let result = group_mean(&table, "workingday", "ratio").expect("group mean");

    let weekend = result.get(&GroupKey::Code(0)).expect("weekend group");
    assert!(weekend.mean.is_nan());
    assert_eq!(weekend.undefined, 2);
    let working = result.get(&GroupKey::Code(1)).expect("working group");
    assert_eq!(working.mean, 2.0);
    assert_eq!(working.rows, 2);
    assert_eq!(result.undefined_rows(), 3);
}

#[test]
fn empty_table_has_no_groups() {
    let table = keyed_table("season", Vec::new(), "cnt", Vec::new());

    assert!(group_mean(&table, "season", "cnt").unwrap().is_empty());
}

#[test]
fn distribution_keeps_values_and_summary() {
    let table = keyed_table(
        "weathersit",
        vec![2, 1, 1, 1, 2],
        "cnt",
        vec![7.0, 1.0, 3.0, 2.0, 9.0],
    );

    let distribution = group_values(&table, "weathersit", "cnt").expect("distribution");

    assert_eq!(distribution.keys(), vec![GroupKey::Code(1), GroupKey::Code(2)]);
    let clear = distribution.get(&GroupKey::Code(1)).expect("clear group");
    assert_eq!(clear.values, vec![1.0, 3.0, 2.0]);
    let summary = clear.summary.expect("summary");
    assert_eq!(summary.min, 1.0);
    assert_eq!(summary.median, 2.0);
    assert_eq!(summary.max, 3.0);
    assert_eq!(distribution.value_count(), 5);
}

#[test]
fn value_column_must_be_numeric() {
    let table = daily_table(&[Row::new(1, 1, 1)]);

    let err = group_mean(&table, "season", "dteday").unwrap_err();

    assert!(matches!(err, DashboardError::UnsupportedType { column, .. } if column == "dteday"));
}

#[test]
fn missing_key_column_is_unavailable() {
    let table = daily_table(&[Row::new(1, 1, 1)]);

    let err = group_mean(&table, "hr", "cnt").unwrap_err();

    assert!(matches!(err, DashboardError::UnavailableColumn { column } if column == "hr"));
}

#[test]
fn rows_without_a_key_are_counted_not_grouped() {
    let table = nullable_keyed_table(
        "season",
        vec![Some(1), None, Some(1)],
        "cnt",
        vec![10.0, 1000.0, 20.0],
    );

    let means = group_mean(&table, "season", "cnt").expect("group mean");
    let values = group_values(&table, "season", "cnt").expect("group values");

    assert_eq!(means.keys(), vec![GroupKey::Code(1)]);
    assert_eq!(means.mean_for_code(1), Some(15.0));
    assert_eq!(means.unkeyed, 1);
    assert_eq!(values.value_count(), 2);
    assert_eq!(values.unkeyed, 1);
}

#[test]
fn fully_keyed_tables_have_no_unkeyed_rows() {
    let table = keyed_table("season", vec![1, 2], "cnt", vec![1.0, 2.0]);

    assert_eq!(group_mean(&table, "season", "cnt").unwrap().unkeyed, 0);
    assert_eq!(group_values(&table, "season", "cnt").unwrap().unkeyed, 0);
}
