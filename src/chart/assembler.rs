//! Joins extracted games with team statistics into chart rows.

use super::spread::{format_signed, reorient};
use crate::constants::display::NO_EDGE;
use crate::models::{ChartRow, GameRecord, StatMap, TeamStatRecord, UnresolvedNames};
use crate::teams::{AliasTable, resolve};
use tracing::{debug, warn};

/// Chart rows in schedule order plus every team name that found no
/// statistics row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssembledChart {
    pub rows: Vec<ChartRow>,
    pub unresolved: UnresolvedNames,
}

/// Builds one row per game. Unresolved teams leave their cells empty and
/// are collected instead of dropping the row.
///
/// # Example
/// ```
/// use ats_chart::chart::assemble_chart;
/// use ats_chart::schedule::extract_games;
/// use ats_chart::stats::extract_stats;
/// use ats_chart::teams::AliasTable;
///
/// let games = extract_games("7:00 PM\nDuke\n(20-5 Away)\nNorth Carolina\n(18-7 Home)\nSpread:UNC 3.5");
/// let stats = extract_stats("1 Duke 18-7 70.0% 3.2\n40 North Carolina 12-13 40.0% -1.0");
/// let chart = assemble_chart(&games, &stats, AliasTable::standard());
///
/// let row = &chart.rows[0];
/// assert_eq!(row.market, "DUKE -3.5");
/// assert_eq!(row.confidence_gap, "30.0");
/// assert_eq!(row.recommended_side_ats, "+3.2");
/// assert!(chart.unresolved.is_empty());
/// ```
pub fn assemble_chart(games: &[GameRecord], stats: &StatMap, aliases: &AliasTable) -> AssembledChart {
    let mut unresolved = UnresolvedNames::new();
    let rows = games
        .iter()
        .map(|game| build_row(game, stats, aliases, &mut unresolved))
        .collect();

    for name in &unresolved {
        warn!("No statistics found for team: {name}");
    }

    AssembledChart { rows, unresolved }
}

/// Builds the row for a single game, recording unresolved names.
pub fn build_row(
    game: &GameRecord,
    stats: &StatMap,
    aliases: &AliasTable,
    unresolved: &mut UnresolvedNames,
) -> ChartRow {
    let away = lookup(&game.away_team, stats, aliases, unresolved);
    let home = lookup(&game.home_team, stats, aliases, unresolved);

    let market = reorient(
        &game.spread,
        &game.away_team,
        &game.home_team,
        away.map(|record| &record.cover_pct),
        home.map(|record| &record.cover_pct),
    );

    let (confidence_gap, recommended_side_ats) = match (away, home) {
        (Some(away), Some(home)) => (
            format!("{:.1}", (away.cover_pct.value() - home.cover_pct.value()).abs()),
            recommended_side(away, home),
        ),
        _ => (String::new(), String::new()),
    };

    ChartRow {
        away: game.away_team.clone(),
        home: game.home_team.clone(),
        market,
        away_cover_pct: away.map(|record| record.cover_pct.to_string()).unwrap_or_default(),
        home_cover_pct: home.map(|record| record.cover_pct.to_string()).unwrap_or_default(),
        confidence_gap,
        recommended_side_ats,
        tip_off: game.tip_off.clone(),
    }
}

fn lookup<'a>(
    team_name: &str,
    stats: &'a StatMap,
    aliases: &AliasTable,
    unresolved: &mut UnresolvedNames,
) -> Option<&'a TeamStatRecord> {
    let record = resolve(team_name, stats, aliases);
    if record.is_none() && unresolved.insert(team_name.to_string()) {
        debug!("Team {team_name} is not in the ranking table");
    }
    record
}

/// ATS +/- of the team with the higher cover percentage, or the no-edge
/// marker on a tie.
fn recommended_side(away: &TeamStatRecord, home: &TeamStatRecord) -> String {
    let (away_pct, home_pct) = (away.cover_pct.value(), home.cover_pct.value());
    if away_pct > home_pct {
        format_signed(away.ats_plus_minus)
    } else if home_pct > away_pct {
        format_signed(home.ats_plus_minus)
    } else {
        NO_EDGE.to_string()
    }
}
