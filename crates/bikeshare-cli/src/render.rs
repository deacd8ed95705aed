//! Terminal tables and CSV export for reports, statistics and previews.

use std::io::Write;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bikeshare_model::values::{display_value, format_number};
use bikeshare_model::{
    BoxSummary, ChartReport, DatePoint, Distribution, GroupKey, ReportData, ReportKind,
    StatisticsReport, WEATHER_LABELS,
};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn align_numbers(table: &mut Table, from: usize) {
    for index in from..table.column_count() {
        align_column(table, index, CellAlignment::Right);
    }
}

/// Group key as shown to the user; weather codes carry their label.
pub fn key_text(kind: ReportKind, key: &GroupKey) -> String {
    match (kind, key) {
        (ReportKind::WeatherDistribution, GroupKey::Code(code)) => match WEATHER_LABELS.label(*code)
        {
            Some(label) => format!("{code} {label}"),
            None => code.to_string(),
        },
        _ => key.to_string(),
    }
}

pub fn report_kinds_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Report"),
        header_cell("Title"),
        header_cell("Chart"),
        header_cell("Needs"),
    ]);
    apply_table_style(&mut table);
    for kind in ReportKind::ALL {
        let needs: Vec<&str> = kind
            .required_fields()
            .iter()
            .map(|field| field.name())
            .collect();
        table.add_row(vec![
            Cell::new(kind.slug()),
            Cell::new(kind.title()),
            Cell::new(kind.chart().as_str()),
            dim_cell(&needs.join(", ")),
        ]);
    }
    table
}

pub fn report_table(report: &ChartReport) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    match &report.data {
        ReportData::Points { points } => {
            table.set_header(vec![
                header_cell(&report.x_label),
                header_cell(&report.y_label),
            ]);
            for DatePoint { date, value } in points {
                table.add_row(vec![Cell::new(date), Cell::new(value)]);
            }
        }
        ReportData::Aggregate(means) => {
            table.set_header(vec![
                header_cell(&report.x_label),
                header_cell(&report.y_label),
                header_cell("Rows"),
                header_cell("Undefined"),
            ]);
            for group in &means.groups {
                table.add_row(vec![
                    Cell::new(key_text(report.kind, &group.key)),
                    Cell::new(format_number(group.mean)),
                    Cell::new(group.rows),
                    if group.undefined > 0 {
                        Cell::new(group.undefined).fg(Color::Yellow)
                    } else {
                        dim_cell("0")
                    },
                ]);
            }
        }
        ReportData::Distribution(distribution) => {
            let mut header = vec![header_cell(&report.x_label), header_cell("Count")];
            header.extend(SUMMARY_COLUMNS.iter().map(|name| header_cell(name)));
            table.set_header(header);
            for group in &distribution.groups {
                let mut row = vec![
                    Cell::new(key_text(report.kind, &group.key)),
                    Cell::new(group.values.len()),
                ];
                match &group.summary {
                    Some(summary) => row.extend(
                        summary_values(summary)
                            .into_iter()
                            .map(|value| Cell::new(format_number(value))),
                    ),
                    None => row.extend(SUMMARY_COLUMNS.iter().map(|_| dim_cell("-"))),
                }
                table.add_row(row);
            }
        }
    }
    align_numbers(&mut table, 1);
    table
}

const SUMMARY_COLUMNS: [&str; 6] = ["Min", "Q1", "Median", "Q3", "Max", "Mean"];

fn summary_values(summary: &BoxSummary) -> [f64; 6] {
    [
        summary.min,
        summary.q1,
        summary.median,
        summary.q3,
        summary.max,
        summary.mean,
    ]
}

const STATISTICS_COLUMNS: [&str; 9] = [
    "Column", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max",
];

fn statistics_rows(report: &StatisticsReport) -> Vec<Vec<String>> {
    report
        .columns
        .iter()
        .map(|stats| {
            let mut row = vec![stats.column.clone(), stats.count.to_string()];
            row.extend(
                [
                    stats.mean,
                    stats.std,
                    stats.min,
                    stats.q25,
                    stats.median,
                    stats.q75,
                    stats.max,
                ]
                .into_iter()
                .map(format_number),
            );
            row
        })
        .collect()
}

pub fn statistics_table(report: &StatisticsReport) -> Table {
    let mut table = Table::new();
    table.set_header(STATISTICS_COLUMNS.iter().map(|name| header_cell(name)));
    apply_table_style(&mut table);
    for row in statistics_rows(report) {
        table.add_row(row);
    }
    align_numbers(&mut table, 1);
    table
}

/// Every cell of `data` as text, row-major.
pub fn preview_table(data: &bikeshare_model::Table) -> bikeshare_model::Result<Table> {
    let frame = data.frame();
    let mut table = Table::new();
    table.set_header(
        frame
            .get_column_names()
            .into_iter()
            .map(|name| header_cell(name.as_str())),
    );
    apply_table_style(&mut table);
    for idx in 0..frame.height() {
        let mut row = Vec::with_capacity(frame.width());
        for column in frame.get_columns() {
            row.push(display_value(column.get(idx)?));
        }
        table.add_row(row);
    }
    Ok(table)
}

fn distribution_rows(kind: ReportKind, distribution: &Distribution) -> Vec<Vec<String>> {
    distribution
        .groups
        .iter()
        .map(|group| {
            let mut row = vec![key_text(kind, &group.key), group.values.len().to_string()];
            match &group.summary {
                Some(summary) => row.extend(summary_values(summary).into_iter().map(format_number)),
                None => row.extend(SUMMARY_COLUMNS.iter().map(|_| String::new())),
            }
            row
        })
        .collect()
}

/// Write the report's data as CSV, one record per point or group.
pub fn write_report_csv<W: Write>(report: &ChartReport, writer: W) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    match &report.data {
        ReportData::Points { points } => {
            writer.write_record([report.x_label.as_str(), report.y_label.as_str()])?;
            for point in points {
                writer.write_record([point.date.to_string(), point.value.to_string()])?;
            }
        }
        ReportData::Aggregate(means) => {
            writer.write_record([
                report.x_label.as_str(),
                report.y_label.as_str(),
                "Rows",
                "Undefined",
            ])?;
            for group in &means.groups {
                writer.write_record([
                    key_text(report.kind, &group.key),
                    format_number(group.mean),
                    group.rows.to_string(),
                    group.undefined.to_string(),
                ])?;
            }
        }
        ReportData::Distribution(distribution) => {
            let mut header = vec![report.x_label.as_str(), "Count"];
            header.extend(SUMMARY_COLUMNS);
            writer.write_record(header)?;
            for row in distribution_rows(report.kind, distribution) {
                writer.write_record(row)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn write_statistics_csv<W: Write>(report: &StatisticsReport, writer: W) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(STATISTICS_COLUMNS)?;
    for row in statistics_rows(report) {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
