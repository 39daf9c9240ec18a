//! Mobile layout scanner.
//!
//! Every game in the mobile paste occupies a fixed-width template
//! starting at its clock-time anchor:
//!
//! ```text
//! 7:00 PM          <- anchor
//! ESPN
//! Duke             <- away (anchor + 2)
//! 20-5
//! North Carolina   <- home (anchor + 4)
//! 18-7
//! Spread:
//! DUKE -3.5
//! ```

use super::cursor::LineCursor;
use super::patterns::{is_clock_time, parse_spread_value};
use crate::constants::schedule::{
    MOBILE_AWAY_OFFSET, MOBILE_HOME_OFFSET, MOBILE_SPREAD_SEARCH_OFFSET,
    MOBILE_SPREAD_WINDOW_LINES, MOBILE_STRIDE_LINES, SPREAD_MARKER,
};
use crate::models::{GameRecord, SpreadToken};
use tracing::debug;

/// Extracts every game from mobile-layout text, in order of appearance.
pub fn parse_mobile(cursor: &LineCursor<'_>) -> Vec<GameRecord> {
    let mut games = Vec::new();
    let mut index = 0;

    while index < cursor.len() {
        let line = cursor.line(index);
        if !is_clock_time(line) {
            index += 1;
            continue;
        }

        // The whole template must fit before the end of the text
        if index + MOBILE_STRIDE_LINES - 1 < cursor.len() {
            let away = cursor.line(index + MOBILE_AWAY_OFFSET);
            let home = cursor.line(index + MOBILE_HOME_OFFSET);

            if !away.is_empty() && !home.is_empty() {
                let spread = find_spread(cursor, index);
                games.push(GameRecord::new(away, home, line, spread));
            } else {
                debug!(
                    "Skipped mobile game anchored at line {} ({}): missing team name",
                    index + 1,
                    line
                );
            }
        }

        index += MOBILE_STRIDE_LINES;
    }

    games
}

/// Looks for a standalone `Spread:` line in the window after the anchor and
/// reads the `CODE N` line right below it. Only the first marker is used.
fn find_spread(cursor: &LineCursor<'_>, anchor: usize) -> SpreadToken {
    let end = (anchor + MOBILE_SPREAD_WINDOW_LINES).min(cursor.len());

    (anchor + MOBILE_SPREAD_SEARCH_OFFSET..end)
        .find(|&position| cursor.line(position) == SPREAD_MARKER)
        .and_then(|position| cursor.get(position + 1))
        .and_then(parse_spread_value)
        .unwrap_or(SpreadToken::Unavailable)
}
