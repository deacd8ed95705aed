//! The dashboard interaction: pick a dataset, filter by season, pick a report.

use serde::Serialize;
use tracing::{debug, info_span};

use bikeshare_model::{
    DatasetKind, Datasets, ReportKind, ReportOptions, ReportOutcome, Result, StatisticsReport,
    Table,
};
use bikeshare_transform::{SeasonFilter, apply_season_filter, describe};

use crate::pipelines;

/// Everything one interaction shows.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub dataset: DatasetKind,
    /// Rows before filtering.
    pub total_rows: usize,
    /// Rows after the season filter.
    pub filtered_rows: usize,
    /// Accepted season codes.
    pub seasons: Vec<i64>,
    pub report: ReportOutcome,
    /// Summary statistics of the filtered table.
    pub statistics: StatisticsReport,
}

/// Holds both loaded datasets; every interaction reads them without mutation.
#[derive(Debug, Clone)]
pub struct Dashboard {
    datasets: Datasets,
}

impl Dashboard {
    pub fn new(datasets: Datasets) -> Self {
        Self { datasets }
    }

    pub fn datasets(&self) -> &Datasets {
        &self.datasets
    }

    pub fn select_dataset(&self, kind: DatasetKind) -> &Table {
        self.datasets.get(kind)
    }

    pub fn apply_filter(&self, table: &Table, filter: &SeasonFilter) -> Result<Table> {
        apply_season_filter(table, filter)
    }

    pub fn select_report(
        &self,
        table: &Table,
        kind: ReportKind,
        options: &ReportOptions,
    ) -> Result<ReportOutcome> {
        pipelines::select_report(table, kind, options)
    }

    /// First `rows` rows of `table`.
    pub fn preview(&self, table: &Table, rows: usize) -> Table {
        table.head(rows)
    }

    /// Summary statistics of `table`.
    pub fn statistics(&self, table: &Table) -> Result<StatisticsReport> {
        describe(table)
    }

    /// Run one full interaction. Without a filter every season present in the
    /// dataset is accepted.
    pub fn view(
        &self,
        kind: DatasetKind,
        filter: Option<&SeasonFilter>,
        report: ReportKind,
        options: &ReportOptions,
    ) -> Result<DashboardView> {
        let span = info_span!("view", dataset = %kind, report = report.slug());
        let _guard = span.enter();

        let table = self.select_dataset(kind);
        let all_seasons;
        let filter = match filter {
            Some(filter) => filter,
            None => {
                all_seasons = SeasonFilter::all(table)?;
                &all_seasons
            }
        };
        let filtered = self.apply_filter(table, filter)?;
        debug!(
            total = table.height(),
            filtered = filtered.height(),
            "season filter applied"
        );
        let outcome = self.select_report(&filtered, report, options)?;
        let statistics = self.statistics(&filtered)?;
        Ok(DashboardView {
            dataset: kind,
            total_rows: table.height(),
            filtered_rows: filtered.height(),
            seasons: filter.codes().iter().copied().collect(),
            report: outcome,
            statistics,
        })
    }
}
