//! Terminal and JSON rendering of daily statistics.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use inflam_stats::DailySummary;

/// JSON shape of the `analyse` command.
#[derive(Debug, Serialize)]
pub struct StdDevReport<'a> {
    pub days: usize,
    pub standard_deviation_by_day: &'a [f64],
}

impl<'a> StdDevReport<'a> {
    pub fn new(daily: &'a [f64]) -> Self {
        Self {
            days: daily.len(),
            standard_deviation_by_day: daily,
        }
    }
}

/// One row per day, one column per named series.
///
/// Every series must have the same length.
pub fn daily_table(series: &[(&str, &[f64])]) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Day")];
    header.extend(series.iter().map(|(name, _)| header_cell(name)));
    table.set_header(header);
    apply_table_style(&mut table);

    let days = series.first().map_or(0, |(_, values)| values.len());
    for day in 0..days {
        let mut row = vec![Cell::new(day)];
        row.extend(series.iter().map(|(_, values)| value_cell(values[day])));
        table.add_row(row);
    }

    for index in 0..=series.len() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

/// Table for the `analyse` command.
pub fn std_dev_table(daily: &[f64]) -> Table {
    daily_table(&[("Std dev of means", daily)])
}

/// Table for the `summary` command.
pub fn summary_table(summary: &DailySummary) -> Table {
    daily_table(&[
        ("Mean", summary.mean.as_slice()),
        ("Max", summary.max.as_slice()),
        ("Min", summary.min.as_slice()),
        ("Std dev", summary.std_dev.as_slice()),
    ])
}

/// Fixed three-decimal rendering; NaN marks a day with missing data.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{value:.3}")
    }
}

fn value_cell(value: f64) -> Cell {
    if value.is_nan() {
        dim_cell(format_value(value))
    } else {
        Cell::new(format_value(value))
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
