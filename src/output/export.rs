//! CSV and JSON serialization of the chart, and the timestamped export file.

use crate::constants::display::CHART_HEADERS;
use crate::error::AppError;
use crate::models::ChartRow;
use crate::pipeline::DailyChart;
use chrono::NaiveDateTime;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes the header row and one record per chart row.
pub fn write_csv<W: Write>(rows: &[ChartRow], writer: W) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(CHART_HEADERS)?;
    for row in rows {
        writer.write_record(row.cells())?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the whole chart, including counts and unresolved names, as pretty JSON.
pub fn write_json<W: Write>(chart: &DailyChart, mut writer: W) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut writer, chart)?;
    writeln!(writer)?;
    Ok(())
}

/// Export file name for a chart generated at `timestamp`,
/// e.g. `daily_chart_20250204_193005.csv`.
pub fn default_export_file_name(timestamp: NaiveDateTime) -> String {
    format!("daily_chart_{}.csv", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Full export path inside `output_dir`.
pub fn export_path(output_dir: &Path, timestamp: NaiveDateTime) -> PathBuf {
    output_dir.join(default_export_file_name(timestamp))
}

/// Writes the chart rows as CSV to `path`, creating missing parent directories.
pub async fn export_chart_file(rows: &[ChartRow], path: &Path) -> Result<(), AppError> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, buffer).await?;

    info!("Chart exported to {}", path.display());
    Ok(())
}
