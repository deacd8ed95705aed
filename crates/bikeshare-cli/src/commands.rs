use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use bikeshare_cli::render::{
    preview_table, report_kinds_table, report_table, statistics_table, write_report_csv,
    write_statistics_csv,
};
use bikeshare_ingest::{DatasetPaths, load_datasets};
use bikeshare_model::{ReportKind, ReportOptions, ReportOutcome};
use bikeshare_report::{Dashboard, DashboardView};
use bikeshare_transform::SeasonFilter;

use crate::cli::{DescribeArgs, OutputArg, PreviewArgs, ReportArgs, SelectionArgs};

fn open_dashboard(paths: &DatasetPaths) -> Result<Dashboard> {
    let datasets = load_datasets(paths).context("load datasets")?;
    Ok(Dashboard::new(datasets))
}

pub fn run_reports() -> Result<()> {
    println!("{}", report_kinds_table());
    Ok(())
}

pub fn run_report(paths: &DatasetPaths, args: &ReportArgs) -> Result<()> {
    let kind: ReportKind = args.kind.into();
    let span = info_span!("report", report = kind.slug());
    let _guard = span.enter();
    let dashboard = open_dashboard(paths)?;
    let options = ReportOptions::default().with_ratio_policy(args.ratio_policy.into());
    let filter = args.selection.season_filter();
    let view = dashboard
        .view(args.selection.dataset(), filter.as_ref(), kind, &options)
        .with_context(|| format!("build report '{}'", kind.title()))?;
    debug!(filtered = view.filtered_rows, "report view built");

    match args.output {
        OutputArg::Json => print_json(&view)?,
        OutputArg::Table => print_view(&view),
        OutputArg::Csv => match &view.report {
            ReportOutcome::Ready(report) => {
                write_report_csv(report, io::stdout().lock()).context("write csv")?;
            }
            ReportOutcome::Unavailable { .. } => print_unavailable(&view.report),
        },
    }
    Ok(())
}

pub fn run_describe(paths: &DatasetPaths, args: &DescribeArgs) -> Result<()> {
    let dashboard = open_dashboard(paths)?;
    let filtered = filtered_table(&dashboard, &args.selection)?;
    let statistics = dashboard
        .statistics(&filtered)
        .context("compute statistics")?;
    match args.output {
        OutputArg::Json => print_json(&statistics)?,
        OutputArg::Table => {
            println!(
                "{} ({} rows)",
                args.selection.dataset().title(),
                statistics.rows
            );
            println!("{}", statistics_table(&statistics));
        }
        OutputArg::Csv => {
            write_statistics_csv(&statistics, io::stdout().lock()).context("write csv")?;
        }
    }
    Ok(())
}

pub fn run_preview(paths: &DatasetPaths, args: &PreviewArgs) -> Result<()> {
    let dashboard = open_dashboard(paths)?;
    let table = dashboard.select_dataset(args.dataset.into());
    let preview = dashboard.preview(table, args.rows);
    let rendered = preview_table(&preview).context("render preview")?;
    println!(
        "{} (first {} of {} rows)",
        table.dataset().title(),
        preview.height(),
        table.height()
    );
    println!("{rendered}");
    Ok(())
}

fn filtered_table(dashboard: &Dashboard, selection: &SelectionArgs) -> Result<bikeshare_model::Table> {
    let table = dashboard.select_dataset(selection.dataset());
    let filter = match selection.season_filter() {
        Some(filter) => filter,
        None => SeasonFilter::all(table).context("collect seasons")?,
    };
    dashboard
        .apply_filter(table, &filter)
        .context("apply season filter")
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize json")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("write json")?;
    Ok(())
}

fn print_view(view: &DashboardView) {
    let seasons: Vec<String> = view.seasons.iter().map(i64::to_string).collect();
    println!(
        "{}: {} of {} rows (seasons: {})",
        view.dataset.title(),
        view.filtered_rows,
        view.total_rows,
        if seasons.is_empty() {
            "none".to_string()
        } else {
            seasons.join(", ")
        }
    );
    match &view.report {
        ReportOutcome::Ready(report) => {
            println!("{}", report.title);
            println!("{}", report_table(report));
            for caveat in &report.caveats {
                println!("note: {caveat}");
            }
        }
        ReportOutcome::Unavailable { .. } => print_unavailable(&view.report),
    }
}

fn print_unavailable(outcome: &ReportOutcome) {
    if let Some(message) = outcome.message() {
        println!("{message}");
    }
}
