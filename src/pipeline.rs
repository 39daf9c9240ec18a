//! End-to-end chart generation from the two pasted texts.

use crate::chart::assemble_chart;
use crate::error::AppError;
use crate::models::{ChartRow, UnresolvedNames};
use crate::schedule::extract_games;
use crate::stats::extract_stats;
use crate::teams::AliasTable;
use serde::Serialize;
use tracing::info;

/// Name used for the schedule text in errors and logs
pub const SCHEDULE_SOURCE: &str = "schedule";

/// Name used for the ranking table text in errors and logs
pub const STATS_SOURCE: &str = "stats";

/// The finished chart for one day's slate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyChart {
    pub rows: Vec<ChartRow>,
    pub unresolved: UnresolvedNames,
    /// Number of games read from the schedule
    pub games_count: usize,
    /// Number of teams read from the ranking table
    pub teams_count: usize,
}

/// Rejects input that is blank or larger than `max_bytes`.
pub fn validate_input(source_name: &str, text: &str, max_bytes: usize) -> Result<(), AppError> {
    if text.len() > max_bytes {
        return Err(AppError::input_too_large(source_name, text.len(), max_bytes));
    }
    if text.trim().is_empty() {
        return Err(AppError::empty_input(source_name));
    }
    Ok(())
}

/// Runs both extractors and assembles the chart.
///
/// Fails when either text is blank or oversized, or when an extractor
/// recognizes nothing at all. Unresolved team names are not an error;
/// they come back in [`DailyChart::unresolved`].
///
/// # Example
/// ```
/// use ats_chart::pipeline::build_daily_chart;
/// use ats_chart::teams::AliasTable;
///
/// let schedule = "7:00 PM\nDuke\n(20-5 Away)\nNorth Carolina\n(18-7 Home)\nSpread:DUKE -3.5";
/// let stats = "1 Duke 18-7 70.0% 3.2\n40 North Carolina 12-13 40.0% -1.0";
/// let chart = build_daily_chart(schedule, stats, AliasTable::standard(), 1024).unwrap();
/// assert_eq!(chart.games_count, 1);
/// assert_eq!(chart.rows[0].market, "DUKE -3.5");
/// ```
pub fn build_daily_chart(
    schedule_text: &str,
    stats_text: &str,
    aliases: &AliasTable,
    max_input_bytes: usize,
) -> Result<DailyChart, AppError> {
    validate_input(SCHEDULE_SOURCE, schedule_text, max_input_bytes)?;
    validate_input(STATS_SOURCE, stats_text, max_input_bytes)?;

    let games = extract_games(schedule_text);
    if games.is_empty() {
        return Err(AppError::NoGamesParsed);
    }

    let stats = extract_stats(stats_text);
    if stats.is_empty() {
        return Err(AppError::NoStatsParsed);
    }

    let chart = assemble_chart(&games, &stats, aliases);
    info!(
        "Generated chart with {} games ({} teams in ranking table, {} unresolved)",
        chart.rows.len(),
        stats.len(),
        chart.unresolved.len()
    );

    Ok(DailyChart {
        games_count: games.len(),
        teams_count: stats.len(),
        rows: chart.rows,
        unresolved: chart.unresolved,
    })
}
