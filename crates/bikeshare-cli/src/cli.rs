//! CLI argument definitions for the bike sharing dashboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use bikeshare_ingest::DatasetPaths;
use bikeshare_model::{DatasetKind, RatioPolicy, ReportKind};
use bikeshare_transform::SeasonFilter;

#[derive(Parser)]
#[command(
    name = "bikeshare",
    version,
    about = "Bike sharing rental analytics",
    long_about = "Explore the daily and hourly bike sharing rental datasets.\n\n\
                  Filter by season and render one of seven reports, summary\n\
                  statistics, or a preview of the raw rows."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Daily dataset CSV (default: day_preprocessed.csv).
    #[arg(long = "daily", value_name = "PATH", global = true)]
    pub daily: Option<PathBuf>,

    /// Hourly dataset CSV (default: hour_preprocessed.csv).
    #[arg(long = "hourly", value_name = "PATH", global = true)]
    pub hourly: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Dataset locations: flags first, then the default file names.
    pub fn dataset_paths(&self) -> DatasetPaths {
        let defaults = DatasetPaths::default();
        DatasetPaths::new(
            self.daily.clone().unwrap_or(defaults.daily),
            self.hourly.clone().unwrap_or(defaults.hourly),
        )
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List the available reports.
    Reports,

    /// Render one report.
    Report(ReportArgs),

    /// Summary statistics of every numeric column.
    Describe(DescribeArgs),

    /// Show the first rows of a dataset.
    Preview(PreviewArgs),
}

/// Dataset and season selection shared by several commands.
#[derive(Args)]
pub struct SelectionArgs {
    /// Dataset to read.
    #[arg(long = "dataset", value_enum, default_value = "daily")]
    pub dataset: DatasetArg,

    /// Season code to keep (1 Winter, 2 Spring, 3 Summer, 4 Fall). Repeat for
    /// several; omit to keep every season.
    #[arg(long = "season", value_name = "CODE")]
    pub seasons: Vec<i64>,
}

impl SelectionArgs {
    pub fn dataset(&self) -> DatasetKind {
        self.dataset.into()
    }

    /// `None` when no season was given, meaning every season.
    pub fn season_filter(&self) -> Option<SeasonFilter> {
        if self.seasons.is_empty() {
            None
        } else {
            Some(SeasonFilter::new(self.seasons.iter().copied()))
        }
    }
}

#[derive(Args)]
pub struct ReportArgs {
    /// Report to render.
    #[arg(value_enum, value_name = "KIND")]
    pub kind: ReportKindArg,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// What to do with rows whose rider total is zero.
    #[arg(long = "ratio-policy", value_enum, default_value = "nan")]
    pub ratio_policy: RatioPolicyArg,

    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Args)]
pub struct DescribeArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Args)]
pub struct PreviewArgs {
    /// Dataset to read.
    #[arg(long = "dataset", value_enum, default_value = "daily")]
    pub dataset: DatasetArg,

    /// Number of rows to show.
    #[arg(long = "rows", value_name = "N", default_value_t = 5)]
    pub rows: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DatasetArg {
    Daily,
    Hourly,
}

impl From<DatasetArg> for DatasetKind {
    fn from(arg: DatasetArg) -> Self {
        match arg {
            DatasetArg::Daily => DatasetKind::Daily,
            DatasetArg::Hourly => DatasetKind::Hourly,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportKindArg {
    #[value(name = "total-by-day")]
    TotalByDay,
    #[value(name = "weather-distribution")]
    WeatherDistribution,
    #[value(name = "trend")]
    Trend,
    #[value(name = "hourly-patterns")]
    HourlyPatterns,
    #[value(name = "weekday")]
    Weekday,
    #[value(name = "season-averages")]
    SeasonAverages,
    #[value(name = "duration-by-day-type")]
    DurationByDayType,
}

impl From<ReportKindArg> for ReportKind {
    fn from(arg: ReportKindArg) -> Self {
        match arg {
            ReportKindArg::TotalByDay => ReportKind::TotalRentalsByDay,
            ReportKindArg::WeatherDistribution => ReportKind::WeatherDistribution,
            ReportKindArg::Trend => ReportKind::TrendOverTime,
            ReportKindArg::HourlyPatterns => ReportKind::HourlyPatterns,
            ReportKindArg::Weekday => ReportKind::WeekdayRentals,
            ReportKindArg::SeasonAverages => ReportKind::SeasonAverages,
            ReportKindArg::DurationByDayType => ReportKind::DurationByDayType,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RatioPolicyArg {
    Nan,
    Zero,
    Exclude,
    Reject,
}

impl From<RatioPolicyArg> for RatioPolicy {
    fn from(arg: RatioPolicyArg) -> Self {
        match arg {
            RatioPolicyArg::Nan => RatioPolicy::Nan,
            RatioPolicyArg::Zero => RatioPolicy::Zero,
            RatioPolicyArg::Exclude => RatioPolicy::Exclude,
            RatioPolicyArg::Reject => RatioPolicy::Reject,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
    Csv,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn report_slugs_match_kind_slugs() {
        for arg in ReportKindArg::value_variants() {
            let name = arg
                .to_possible_value()
                .map(|value| value.get_name().to_string());
            let kind: ReportKind = (*arg).into();
            assert_eq!(name.as_deref(), Some(kind.slug()));
        }
    }

    #[test]
    fn seasons_build_a_filter() {
        let cli = Cli::parse_from([
            "bikeshare", "report", "season-averages", "--season", "1", "--season", "3",
        ]);
        let Command::Report(args) = cli.command else {
            panic!("expected report command");
        };
        let filter = args.selection.season_filter().expect("filter");
        assert!(filter.accepts(1) && filter.accepts(3) && !filter.accepts(2));
        assert_eq!(args.selection.dataset(), DatasetKind::Daily);
    }

    #[test]
    fn dataset_paths_default_to_preprocessed_files() {
        let cli = Cli::parse_from(["bikeshare", "--hourly", "h.csv", "reports"]);
        let paths = cli.dataset_paths();
        assert_eq!(paths.daily, PathBuf::from("day_preprocessed.csv"));
        assert_eq!(paths.hourly, PathBuf::from("h.csv"));
    }
}
