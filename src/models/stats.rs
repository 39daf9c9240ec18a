use crate::constants::display::UNRANKED;
use std::collections::HashMap;
use std::fmt;

/// Team statistics keyed by the exact name used in the ranking table.
pub type StatMap = HashMap<String, TeamStatRecord>;

/// A cover percentage as printed in the ranking table (`"64.3%"`),
/// together with its numeric value.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverPct {
    display: String,
    value: f64,
}

impl CoverPct {
    /// Parses a `NN.N%` token. Returns `None` when the `%` sign is missing or
    /// the number does not convert.
    ///
    /// # Example
    /// ```
    /// use ats_chart::models::CoverPct;
    ///
    /// let pct = CoverPct::parse("64.3%").unwrap();
    /// assert_eq!(pct.value(), 64.3);
    /// assert_eq!(pct.as_str(), "64.3%");
    /// assert!(CoverPct::parse("64.3").is_none());
    /// ```
    pub fn parse(token: &str) -> Option<Self> {
        let value = token.strip_suffix('%')?.parse::<f64>().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(Self {
            display: token.to_string(),
            value,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }
}

impl fmt::Display for CoverPct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// Position of a team in the ranking table, if the table had a rank column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rank {
    Ranked(String),
    Unavailable,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ranked(rank) => f.write_str(rank),
            Rank::Unavailable => f.write_str(UNRANKED),
        }
    }
}

/// Against-the-spread numbers for one team.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStatRecord {
    pub rank: Rank,
    /// Win-loss(-push) record against the spread, e.g. `"12-8-1"`
    pub record: String,
    pub cover_pct: CoverPct,
    /// Net units against the spread over the season
    pub ats_plus_minus: f64,
}
