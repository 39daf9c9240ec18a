//! Re-expresses a game's point spread from the side of the better cover team.

use crate::constants::display::NO_SPREAD;
use crate::models::{CoverPct, SpreadToken};
use crate::teams::derive_abbreviation;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Away,
    Home,
}

/// Returns the market display for one game, oriented toward the team with
/// the higher cover percentage.
///
/// - No spread, or a side without a cover percentage: `"PK"`.
/// - Equal cover percentages: the raw spread unchanged.
/// - Raw code that matches neither side: the raw spread unchanged.
/// - Otherwise the higher-cover side's code, keeping the magnitude when that
///   side is the one the raw spread names and negating it when it is not.
///
/// # Example
/// ```
/// use ats_chart::chart::reorient;
/// use ats_chart::models::{CoverPct, SpreadToken};
///
/// let spread = SpreadToken::from_parts("UNC", "3.5").unwrap();
/// let duke = CoverPct::parse("70.0%").unwrap();
/// let unc = CoverPct::parse("40.0%").unwrap();
/// let market = reorient(&spread, "Duke", "North Carolina", Some(&duke), Some(&unc));
/// assert_eq!(market, "DUKE -3.5");
/// ```
pub fn reorient(
    spread: &SpreadToken,
    away_team: &str,
    home_team: &str,
    away_cover: Option<&CoverPct>,
    home_cover: Option<&CoverPct>,
) -> String {
    let (Some(away_cover), Some(home_cover)) = (away_cover, home_cover) else {
        return NO_SPREAD.to_string();
    };
    let SpreadToken::Line {
        team_abbrev,
        magnitude,
        display,
    } = spread
    else {
        return NO_SPREAD.to_string();
    };

    if away_cover.value() == home_cover.value() {
        return display.clone();
    }

    let away_code = derive_abbreviation(away_team);
    let home_code = derive_abbreviation(home_team);

    let spread_side = if codes_match(team_abbrev, &away_code) {
        Side::Away
    } else if codes_match(team_abbrev, &home_code) {
        Side::Home
    } else {
        debug!(
            "Spread code {team_abbrev} matches neither {away_team} ({away_code}) nor {home_team} ({home_code})"
        );
        return display.clone();
    };

    let (favored_side, favored_code) = if away_cover.value() > home_cover.value() {
        (Side::Away, away_code)
    } else {
        (Side::Home, home_code)
    };

    let value = if favored_side == spread_side {
        *magnitude
    } else {
        -magnitude
    };

    format!("{favored_code} {}", format_signed(value))
}

/// Formats `value` with an explicit sign and one decimal place.
/// Negative zero prints as `+0.0`.
pub fn format_signed(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:+.1}")
}

/// Case-insensitive comparison that also accepts either code being a
/// prefix of the other (`"MICH"` against `"MICHST"`).
fn codes_match(raw: &str, derived: &str) -> bool {
    if raw.is_empty() || derived.is_empty() {
        return false;
    }
    let raw = raw.to_uppercase();
    let derived = derived.to_uppercase();
    raw == derived || raw.starts_with(&derived) || derived.starts_with(&raw)
}
