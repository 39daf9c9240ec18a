//! Line shapes recognized in pasted schedule text.

use crate::models::SpreadToken;
use regex::Regex;
use std::sync::LazyLock;

static CLOCK_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2}\s*[AP]M$").unwrap());

static PAREN_RECORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d+-\d+.*?\)$").unwrap());

static SIDED_RECORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d+-\d+.*?(Home|Away)\)$").unwrap());

static BARE_RECORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+-\d+$").unwrap());

static INLINE_SPREAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Spread:\s*([A-Z0-9&\-]+)\s+([-+]?\d+\.?\d*)$").unwrap()
});

static SPREAD_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z0-9&\-]+)\s+([-+]?\d+\.?\d*)$").unwrap());

/// Which side a parenthesized record line says the team is playing as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSide {
    Home,
    Away,
    Unmarked,
}

/// `7:00 PM`, `12:30PM`
pub fn is_clock_time(line: &str) -> bool {
    CLOCK_TIME.is_match(line)
}

/// `20-5` with nothing else on the line
pub fn is_bare_record(line: &str) -> bool {
    BARE_RECORD.is_match(line)
}

/// Classifies `(20-5)`, `(20-5, 8-2 Away)` style lines. Returns `None` for
/// anything that is not a parenthesized win-loss record.
pub fn record_side(line: &str) -> Option<RecordSide> {
    if !PAREN_RECORD.is_match(line) {
        return None;
    }
    let side = match SIDED_RECORD
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    {
        Some("Home") => RecordSide::Home,
        Some("Away") => RecordSide::Away,
        _ => RecordSide::Unmarked,
    };
    Some(side)
}

/// A line that could hold a team name: non-empty, not numeric, not a record.
pub fn is_team_candidate(line: &str) -> bool {
    !line.is_empty()
        && !line.starts_with(|c: char| c.is_ascii_digit())
        && record_side(line).is_none()
}

/// `Spread:DUKE -3.5` on a single line.
pub fn parse_inline_spread(line: &str) -> Option<SpreadToken> {
    let caps = INLINE_SPREAD.captures(line)?;
    SpreadToken::from_parts(caps.get(1)?.as_str(), caps.get(2)?.as_str())
}

/// `DUKE -3.5` on the line after a standalone `Spread:` marker.
pub fn parse_spread_value(line: &str) -> Option<SpreadToken> {
    let caps = SPREAD_VALUE.captures(line)?;
    SpreadToken::from_parts(caps.get(1)?.as_str(), caps.get(2)?.as_str())
}
