use crate::constants::display::NO_SPREAD;
use std::fmt;

/// One matchup recovered from the schedule text.
///
/// `tip_off` is kept as the literal clock token from the source
/// (e.g. `"7:00 PM"`); it is never parsed into a time type.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub away_team: String,
    pub home_team: String,
    pub tip_off: String,
    pub spread: SpreadToken,
}

impl GameRecord {
    pub fn new(
        away_team: impl Into<String>,
        home_team: impl Into<String>,
        tip_off: impl Into<String>,
        spread: SpreadToken,
    ) -> Self {
        Self {
            away_team: away_team.into(),
            home_team: home_team.into(),
            tip_off: tip_off.into(),
            spread,
        }
    }
}

/// A point spread as printed by the schedule source, or the marker for
/// games that carried no spread line.
#[derive(Debug, Clone, PartialEq)]
pub enum SpreadToken {
    /// `team_abbrev` is handicapped by `magnitude` points.
    Line {
        team_abbrev: String,
        magnitude: f64,
        display: String,
    },
    Unavailable,
}

impl SpreadToken {
    /// Builds a spread from the code and the signed number exactly as they
    /// appeared in the source. Returns `None` if the number does not parse.
    ///
    /// # Example
    /// ```
    /// use ats_chart::models::SpreadToken;
    ///
    /// let spread = SpreadToken::from_parts("DUKE", "-3.5").unwrap();
    /// assert_eq!(spread.display(), "DUKE -3.5");
    /// assert_eq!(spread.magnitude(), Some(-3.5));
    /// ```
    pub fn from_parts(team_abbrev: &str, raw_value: &str) -> Option<Self> {
        let magnitude = raw_value.parse::<f64>().ok()?;
        Some(SpreadToken::Line {
            team_abbrev: team_abbrev.to_string(),
            magnitude,
            display: format!("{team_abbrev} {raw_value}"),
        })
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SpreadToken::Line { .. })
    }

    pub fn team_abbrev(&self) -> Option<&str> {
        match self {
            SpreadToken::Line { team_abbrev, .. } => Some(team_abbrev),
            SpreadToken::Unavailable => None,
        }
    }

    pub fn magnitude(&self) -> Option<f64> {
        match self {
            SpreadToken::Line { magnitude, .. } => Some(*magnitude),
            SpreadToken::Unavailable => None,
        }
    }

    /// The market text shown for this spread (`"PK"` when unavailable).
    pub fn display(&self) -> &str {
        match self {
            SpreadToken::Line { display, .. } => display,
            SpreadToken::Unavailable => NO_SPREAD,
        }
    }
}

impl fmt::Display for SpreadToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}
