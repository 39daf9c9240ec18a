//! Schedule extractor: recovers ordered game records from a pasted schedule page.
//!
//! The layout is detected once per input and the whole text is then read
//! with that layout's scanner. Fragments that fit neither template are
//! skipped silently; an unrecognizable text yields an empty list.

pub mod cursor;
pub mod desktop;
pub mod detection;
pub mod mobile;
pub mod patterns;

pub use cursor::LineCursor;
pub use desktop::parse_desktop;
pub use detection::{ScheduleLayout, detect_layout};
pub use mobile::parse_mobile;

use crate::models::GameRecord;
use tracing::debug;

/// Detects the layout of `text` and extracts its games in order of appearance.
///
/// # Example
/// ```
/// use ats_chart::schedule::extract_games;
///
/// let text = "7:00 PM\n\nDuke\n(20-5 Away)\nNorth Carolina\n(18-7 Home)\nSpread:DUKE -3.5";
/// let games = extract_games(text);
/// assert_eq!(games.len(), 1);
/// assert_eq!(games[0].away_team, "Duke");
/// assert_eq!(games[0].spread.display(), "DUKE -3.5");
/// ```
pub fn extract_games(text: &str) -> Vec<GameRecord> {
    let cursor = LineCursor::new(text);
    let layout = detect_layout(&cursor);
    debug!("Detected {layout} schedule layout ({} lines)", cursor.len());

    let games = extract_games_with_layout(&cursor, layout);
    debug!("Extracted {} games from {layout} layout", games.len());
    games
}

/// Extracts games using an explicitly chosen layout.
pub fn extract_games_with_layout(cursor: &LineCursor<'_>, layout: ScheduleLayout) -> Vec<GameRecord> {
    match layout {
        ScheduleLayout::Desktop => parse_desktop(cursor),
        ScheduleLayout::Mobile => parse_mobile(cursor),
    }
}
