//! One pipeline per [`ReportKind`].
//!
//! Each pipeline is a fixed sequence of label, derive and aggregate steps
//! over an already filtered table. A pipeline whose source columns are not
//! in the table yields [`ReportOutcome::Unavailable`] rather than an error.

use chrono::NaiveDate;
use tracing::{debug, info};

use bikeshare_model::{
    AVG_DURATION, ChartReport, DATE_FORMAT, DAY_TYPE, DashboardError, DatePoint, Field,
    RIDER_TOTAL, ReportData, ReportKind, ReportOptions, ReportOutcome, Result, SEASON_LABEL,
    SEASON_LABELS, Table, WEEKDAY_LABEL, WEEKDAY_LABELS,
};
use bikeshare_transform::columns::{column_codes, column_strings};
use bikeshare_transform::{
    derive_day_type, derive_ratio, derive_sum, group_mean, group_values, map_labels,
};

/// Run the pipeline for `kind` against `table`.
pub fn select_report(
    table: &Table,
    kind: ReportKind,
    options: &ReportOptions,
) -> Result<ReportOutcome> {
    if let Some(field) = missing_field(table, kind) {
        info!(
            report = kind.slug(),
            dataset = %table.dataset(),
            column = field.name(),
            "report unavailable"
        );
        return Ok(ReportOutcome::Unavailable {
            kind,
            dataset: table.dataset(),
            column: field.name().to_string(),
        });
    }

    let report = match kind {
        ReportKind::TotalRentalsByDay => total_rentals_by_day(table)?,
        ReportKind::WeatherDistribution => weather_distribution(table)?,
        ReportKind::TrendOverTime => trend_over_time(table)?,
        ReportKind::HourlyPatterns => hourly_patterns(table)?,
        ReportKind::WeekdayRentals => weekday_rentals(table)?,
        ReportKind::SeasonAverages => season_averages(table)?,
        ReportKind::DurationByDayType => duration_by_day_type(table, options)?,
    };
    debug!(report = kind.slug(), rows = table.height(), "report ready");
    Ok(ReportOutcome::Ready(report))
}

fn missing_field(table: &Table, kind: ReportKind) -> Option<Field> {
    kind.required_fields()
        .iter()
        .copied()
        .find(|field| !table.has_field(*field))
}

/// `(dteday, cnt)` per row, in table order, and the number of rows left out
/// because either cell was missing.
fn date_points(table: &Table) -> Result<(Vec<DatePoint>, usize)> {
    let dates = column_strings(table, Field::Date.name())?;
    let totals = column_codes(table, Field::Total.name())?;
    let mut points = Vec::with_capacity(dates.len());
    let mut skipped = 0usize;
    for (date, value) in dates.into_iter().zip(totals) {
        let (Some(date), Some(value)) = (date, value) else {
            skipped += 1;
            continue;
        };
        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|_| {
            DashboardError::InvalidDate {
                column: Field::Date.name().to_string(),
                value: date.clone(),
            }
        })?;
        points.push(DatePoint { date, value });
    }
    Ok((points, skipped))
}

fn with_skipped_caveat(report: ChartReport, skipped: usize, reason: &str) -> ChartReport {
    if skipped == 0 {
        report
    } else {
        report.with_caveat(format!("{skipped} row(s) left out: {reason}"))
    }
}

fn total_rentals_by_day(table: &Table) -> Result<ChartReport> {
    let (points, skipped) = date_points(table)?;
    let report = ChartReport::new(
        ReportKind::TotalRentalsByDay,
        ReportData::Points { points },
    );
    Ok(with_skipped_caveat(report, skipped, "missing date or total"))
}

fn trend_over_time(table: &Table) -> Result<ChartReport> {
    let (mut points, skipped) = date_points(table)?;
    points.sort_by_key(|point| point.date);
    let report = ChartReport::new(
        ReportKind::TrendOverTime,
        ReportData::Points { points },
    );
    Ok(with_skipped_caveat(report, skipped, "missing date or total"))
}

fn weather_distribution(table: &Table) -> Result<ChartReport> {
    let distribution = group_values(
        table,
        Field::WeatherSituation.name(),
        Field::Total.name(),
    )?;
    let unkeyed = distribution.unkeyed;
    let report = ChartReport::new(
        ReportKind::WeatherDistribution,
        ReportData::Distribution(distribution),
    );
    Ok(with_skipped_caveat(report, unkeyed, "missing weather code"))
}

fn hourly_patterns(table: &Table) -> Result<ChartReport> {
    let means = group_mean(table, Field::Hour.name(), Field::Total.name())?;
    let unkeyed = means.unkeyed;
    let report = ChartReport::new(ReportKind::HourlyPatterns, ReportData::Aggregate(means));
    Ok(with_skipped_caveat(report, unkeyed, "missing hour"))
}

fn weekday_rentals(table: &Table) -> Result<ChartReport> {
    let labelled = map_labels(table, Field::Weekday, &WEEKDAY_LABELS)?;
    let distribution = group_values(&labelled, WEEKDAY_LABEL, Field::Total.name())?;
    Ok(ChartReport::new(
        ReportKind::WeekdayRentals,
        ReportData::Distribution(distribution),
    ))
}

fn season_averages(table: &Table) -> Result<ChartReport> {
    let labelled = map_labels(table, Field::Season, &SEASON_LABELS)?;
    let means = group_mean(&labelled, SEASON_LABEL, Field::Total.name())?;
    Ok(ChartReport::new(
        ReportKind::SeasonAverages,
        ReportData::Aggregate(means),
    ))
}

fn duration_by_day_type(table: &Table, options: &ReportOptions) -> Result<ChartReport> {
    let with_day_type = derive_day_type(table)?;
    let with_riders = derive_sum(
        &with_day_type,
        Field::Casual.name(),
        Field::Registered.name(),
        RIDER_TOTAL,
    )?;
    let ratio = derive_ratio(
        &with_riders,
        Field::Total.name(),
        RIDER_TOTAL,
        AVG_DURATION,
        options.ratio_policy,
    )?;
    let means = group_mean(&ratio.table, DAY_TYPE, AVG_DURATION)?;
    let undefined_groups: Vec<String> = means
        .groups
        .iter()
        .filter(|group| group.mean.is_nan())
        .map(|group| group.key.to_string())
        .collect();

    let mut report = ChartReport::new(ReportKind::DurationByDayType, ReportData::Aggregate(means));
    if ratio.zero_denominators > 0 {
        report = report.with_caveat(format!(
            "{} row(s) had no casual or registered riders; ratio policy '{}' applied",
            ratio.zero_denominators, options.ratio_policy
        ));
    }
    if !undefined_groups.is_empty() {
        report = report.with_caveat(format!(
            "average duration is undefined for: {}",
            undefined_groups.join(", ")
        ));
    }
    Ok(report)
}
