//! Serialized shape of report results.

use serde_json::json;

use bikeshare_model::{
    AggregateResult, ChartReport, ColumnStatistics, DatasetKind, GroupKey, GroupMean, ReportData,
    ReportKind, ReportOutcome, StatisticsReport,
};

#[test]
fn unavailable_outcome_names_the_missing_column() {
    let outcome = ReportOutcome::Unavailable {
        kind: ReportKind::HourlyPatterns,
        dataset: DatasetKind::Daily,
        column: "hr".to_string(),
    };

    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({
            "status": "unavailable",
            "kind": "hourly_patterns",
            "dataset": "daily",
            "column": "hr",
        })
    );
}

#[test]
fn ready_outcome_inlines_the_report() {
    let report = ChartReport::new(
        ReportKind::SeasonAverages,
        ReportData::Aggregate(AggregateResult {
            key_column: "season_label".to_string(),
            value_column: "cnt".to_string(),
            groups: vec![GroupMean {
                key: GroupKey::label("Winter"),
                rows: 2,
                undefined: 0,
                mean: 1.5,
            }],
            unkeyed: 0,
        }),
    )
    .with_caveat("check");

    let value = serde_json::to_value(ReportOutcome::Ready(report)).unwrap();

    assert_eq!(value["status"], "ready");
    assert_eq!(value["chart"], "bar");
    assert_eq!(value["title"], "Average Rentals by Season");
    assert_eq!(value["data"]["shape"], "aggregate");
    assert_eq!(value["data"]["groups"][0]["key"], "Winter");
    assert_eq!(value["caveats"], json!(["check"]));
}

#[test]
fn code_keys_serialize_as_numbers() {
    assert_eq!(serde_json::to_value(GroupKey::Code(7)).unwrap(), json!(7));
    let parsed: GroupKey = serde_json::from_value(json!("Fall")).unwrap();
    assert_eq!(parsed, GroupKey::label("Fall"));
}

#[test]
fn outcomes_round_trip() {
    let outcome = ReportOutcome::Unavailable {
        kind: ReportKind::HourlyPatterns,
        dataset: DatasetKind::Daily,
        column: "hr".to_string(),
    };
    let text = serde_json::to_string(&outcome).unwrap();
    let parsed: ReportOutcome = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, outcome);
}

#[test]
fn undefined_group_mean_reads_back_as_nan() {
    let report = ChartReport::new(
        ReportKind::DurationByDayType,
        ReportData::Aggregate(AggregateResult {
            key_column: "day_type".to_string(),
            value_column: "avg_duration".to_string(),
            groups: vec![GroupMean {
                key: GroupKey::label("Weekend"),
                rows: 1,
                undefined: 1,
                mean: f64::NAN,
            }],
            unkeyed: 0,
        }),
    );

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["data"]["groups"][0]["mean"], json!(null));

    let parsed: ChartReport = serde_json::from_value(value).unwrap();
    let ReportData::Aggregate(means) = parsed.data else {
        panic!("expected aggregate");
    };
    assert!(means.groups[0].mean.is_nan());
    assert_eq!(means.groups[0].undefined, 1);
}

#[test]
fn single_value_statistics_read_back_with_nan_std() {
    let report = StatisticsReport {
        rows: 1,
        columns: vec![ColumnStatistics {
            column: "cnt".to_string(),
            count: 1,
            mean: 985.0,
            std: f64::NAN,
            min: 985.0,
            q25: 985.0,
            median: 985.0,
            q75: 985.0,
            max: 985.0,
        }],
    };

    let text = serde_json::to_string(&report).unwrap();
    let parsed: StatisticsReport = serde_json::from_str(&text).unwrap();

    let cnt = parsed.column("cnt").expect("cnt");
    assert!(cnt.std.is_nan());
    assert_eq!(cnt.mean, 985.0);
}

#[test]
fn unkeyed_count_defaults_when_absent() {
    let parsed: AggregateResult = serde_json::from_value(json!({
        "key_column": "hr",
        "value_column": "cnt",
        "groups": [],
    }))
    .unwrap();

    assert_eq!(parsed.unkeyed, 0);
}
