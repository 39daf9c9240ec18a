//! Statistics extractor for the pasted against-the-spread ranking table.
//!
//! Every line is matched on its own against two row shapes:
//!
//! - ranked: `12 Duke 18-7 64.3% 3.2`
//!   (rank, team, ATS record, cover %, ATS +/-)
//! - unranked: `Duke 18-7 64.3% 5.1 3.2`
//!   (team, ATS record, cover %, margin, ATS +/-)
//!
//! Header, banner and otherwise unreadable lines contribute nothing.

use crate::models::{CoverPct, Rank, StatMap, TeamStatRecord};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static RANKED_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s+(.+?)\s+(\d+-\d+-?\d*)\s+([\d.]+%)\s+([-+]?\d+\.?\d*)$").unwrap()
});

static UNRANKED_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s+(\d+-\d+-?\d*)\s+([\d.]+%)\s+[-+]?\d+\.?\d*\s+([-+]?\d+\.?\d*)$")
        .unwrap()
});

/// Extracts a statistics record for every readable line of `text`.
///
/// When a team appears twice, the later line wins.
///
/// # Example
/// ```
/// use ats_chart::stats::extract_stats;
///
/// let stats = extract_stats("Rank Team ATS Record Cover % ATS +/-\n12 Duke 18-7 64.3% 3.2");
/// let duke = &stats["Duke"];
/// assert_eq!(duke.record, "18-7");
/// assert_eq!(duke.cover_pct.as_str(), "64.3%");
/// assert_eq!(duke.ats_plus_minus, 3.2);
/// ```
pub fn extract_stats(text: &str) -> StatMap {
    let mut stats = StatMap::new();

    for line in text.trim().lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }

        match parse_stat_line(line) {
            Some((team, record)) => {
                stats.insert(team, record);
            }
            None => debug!("Ignored statistics line: {line}"),
        }
    }

    debug!("Extracted statistics for {} teams", stats.len());
    stats
}

/// Reads one table row, trying the ranked shape first.
pub fn parse_stat_line(line: &str) -> Option<(String, TeamStatRecord)> {
    parse_ranked_line(line).or_else(|| parse_unranked_line(line))
}

fn parse_ranked_line(line: &str) -> Option<(String, TeamStatRecord)> {
    let caps = RANKED_ROW.captures(line)?;
    let record = TeamStatRecord {
        rank: Rank::Ranked(caps.get(1)?.as_str().to_string()),
        record: caps.get(3)?.as_str().to_string(),
        cover_pct: CoverPct::parse(caps.get(4)?.as_str())?,
        ats_plus_minus: caps.get(5)?.as_str().parse().ok()?,
    };
    Some((caps.get(2)?.as_str().trim().to_string(), record))
}

fn parse_unranked_line(line: &str) -> Option<(String, TeamStatRecord)> {
    let caps = UNRANKED_ROW.captures(line)?;
    let record = TeamStatRecord {
        rank: Rank::Unavailable,
        record: caps.get(2)?.as_str().to_string(),
        cover_pct: CoverPct::parse(caps.get(3)?.as_str())?,
        ats_plus_minus: caps.get(4)?.as_str().parse().ok()?,
    };
    Some((caps.get(1)?.as_str().trim().to_string(), record))
}
