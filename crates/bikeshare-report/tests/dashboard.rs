mod common;

use bikeshare_model::{DatasetKind, ReportData, ReportKind, ReportOptions};
use bikeshare_report::Dashboard;
use bikeshare_transform::SeasonFilter;

fn dashboard() -> Dashboard {
    Dashboard::new(common::datasets())
}

#[test]
fn select_dataset_returns_the_requested_table() {
    let dashboard = dashboard();

    assert_eq!(
        dashboard.select_dataset(DatasetKind::Daily).dataset(),
        DatasetKind::Daily
    );
    assert_eq!(dashboard.select_dataset(DatasetKind::Hourly).height(), 3);
}

#[test]
fn view_without_filter_accepts_every_season() {
    let view = dashboard()
        .view(
            DatasetKind::Daily,
            None,
            ReportKind::SeasonAverages,
            &ReportOptions::default(),
        )
        .expect("view");

    assert_eq!(view.total_rows, 6);
    assert_eq!(view.filtered_rows, 6);
    assert_eq!(view.seasons, vec![1, 2, 3, 4]);
    assert!(view.report.is_available());
    assert_eq!(view.statistics.rows, 6);
}

#[test]
fn view_applies_the_season_filter() {
    let winter = SeasonFilter::new([1]);

    let view = dashboard()
        .view(
            DatasetKind::Daily,
            Some(&winter),
            ReportKind::SeasonAverages,
            &ReportOptions::default(),
        )
        .expect("view");

    assert_eq!(view.filtered_rows, 3);
    let report = view.report.report().expect("ready");
    let ReportData::Aggregate(means) = &report.data else {
        panic!("expected aggregate");
    };
    assert_eq!(means.groups.len(), 1);
    assert_eq!(means.mean_for_label("Winter"), Some(1045.0));
    let cnt = view.statistics.column("cnt").expect("cnt statistics");
    assert_eq!(cnt.count, 3);
}

#[test]
fn empty_filter_gives_empty_groups() {
    let view = dashboard()
        .view(
            DatasetKind::Daily,
            Some(&SeasonFilter::none()),
            ReportKind::SeasonAverages,
            &ReportOptions::default(),
        )
        .expect("view");

    assert_eq!(view.filtered_rows, 0);
    let report = view.report.report().expect("ready");
    let ReportData::Aggregate(means) = &report.data else {
        panic!("expected aggregate");
    };
    assert!(means.is_empty());
}

#[test]
fn unavailable_report_still_returns_a_view() {
    let view = dashboard()
        .view(
            DatasetKind::Daily,
            None,
            ReportKind::HourlyPatterns,
            &ReportOptions::default(),
        )
        .expect("view");

    assert!(!view.report.is_available());
    assert_eq!(view.filtered_rows, 6);
}

#[test]
fn preview_returns_leading_rows() {
    let dashboard = dashboard();
    let table = dashboard.select_dataset(DatasetKind::Daily);

    let preview = dashboard.preview(table, 2);

    assert_eq!(preview.height(), 2);
    assert_eq!(preview.column_names(), table.column_names());
    assert_eq!(dashboard.preview(table, 100).height(), 6);
}

#[test]
fn view_serializes_for_json_output() {
    let view = dashboard()
        .view(
            DatasetKind::Hourly,
            None,
            ReportKind::HourlyPatterns,
            &ReportOptions::default(),
        )
        .expect("view");

    let json = serde_json::to_value(&view).expect("json");

    assert_eq!(json["dataset"], "hourly");
    assert_eq!(json["report"]["status"], "ready");
    assert_eq!(json["report"]["data"]["shape"], "aggregate");
    assert_eq!(json["report"]["data"]["groups"][0]["mean"], 15.0);
}
