//! Terminal rendering of the daily chart.
//!
//! Rows whose confidence gap reaches the strong threshold are drawn in
//! green, moderate ones in yellow. Plain mode emits no escape codes.

use crate::constants::display::CHART_HEADERS;
use crate::constants::highlight::{MODERATE_GAP, STRONG_GAP};
use crate::error::AppError;
use crate::models::ChartRow;
use crate::pipeline::DailyChart;
use crossterm::{execute, style::Color, style::Print};
use std::io::Write;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

fn strong_fg() -> Color {
    Color::AnsiValue(46)
}

fn moderate_fg() -> Color {
    Color::AnsiValue(226)
}

fn header_fg() -> Color {
    Color::AnsiValue(231)
}

fn warning_fg() -> Color {
    Color::AnsiValue(208)
}

/// Extracts the 256-color index of `color`, using `fallback` for other color kinds.
fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}

/// How the table is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Disable colors
    pub plain: bool,
    pub strong_gap: f64,
    pub moderate_gap: f64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            plain: false,
            strong_gap: STRONG_GAP,
            moderate_gap: MODERATE_GAP,
        }
    }
}

impl TableOptions {
    fn row_color(&self, row: &ChartRow) -> Option<Color> {
        if self.plain {
            return None;
        }
        match row.confidence_gap_value() {
            Some(gap) if gap >= self.strong_gap => Some(strong_fg()),
            Some(gap) if gap >= self.moderate_gap => Some(moderate_fg()),
            _ => None,
        }
    }
}

/// Renders the chart table, the summary line and any unresolved-name warning.
pub fn render_table(chart: &DailyChart, options: &TableOptions) -> String {
    let widths = column_widths(&chart.rows);
    let mut buffer = String::new();

    let header = format_line(&CHART_HEADERS, &widths);
    push_colored(&mut buffer, &header, (!options.plain).then(header_fg));
    let rule_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1);
    buffer.push_str(&"-".repeat(rule_width));
    buffer.push('\n');

    for row in &chart.rows {
        let line = format_line(&row.cells(), &widths);
        push_colored(&mut buffer, &line, options.row_color(row));
    }

    buffer.push('\n');
    buffer.push_str(&format!(
        "Generated chart with {} games ({} teams in ranking table)\n",
        chart.rows.len(),
        chart.teams_count
    ));

    if !chart.unresolved.is_empty() {
        let names: Vec<&str> = chart.unresolved.iter().map(String::as_str).collect();
        let warning = format!("Unresolved teams (no statistics found): {}", names.join(", "));
        push_colored(&mut buffer, &warning, (!options.plain).then(warning_fg));
    }

    buffer
}

/// Writes the rendered table to `out`.
pub fn print_table<W: Write>(
    out: &mut W,
    chart: &DailyChart,
    options: &TableOptions,
) -> Result<(), AppError> {
    execute!(out, Print(render_table(chart, options)))?;
    Ok(())
}

fn column_widths(rows: &[ChartRow]) -> [usize; 8] {
    let mut widths = CHART_HEADERS.map(|header| header.width());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

fn format_line(cells: &[&str; 8], widths: &[usize; 8]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| pad_cell(cell, width))
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}

/// Left-aligns `text` in `width` terminal columns.
fn pad_cell(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(padding))
}

fn push_colored(buffer: &mut String, line: &str, color: Option<Color>) {
    match color {
        Some(color) => {
            buffer.push_str(&format!(
                "\x1b[38;5;{}m{line}\x1b[0m\n",
                get_ansi_code(color, 231)
            ));
        }
        None => {
            buffer.push_str(line);
            buffer.push('\n');
        }
    }
}
