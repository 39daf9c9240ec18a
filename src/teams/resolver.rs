//! Matches schedule-side team names to ranking-table rows.

use super::aliases::AliasTable;
use crate::models::{StatMap, TeamStatRecord};
use tracing::trace;

/// Finds the statistics record for `team_name`.
///
/// The exact name is tried first, then its alias. Aliases are followed a
/// single hop only: an alias whose target is itself an alias key does not
/// resolve further.
///
/// # Example
/// ```
/// use ats_chart::stats::extract_stats;
/// use ats_chart::teams::{AliasTable, resolve};
///
/// let stats = extract_stats("40 Mississippi 15-10 60.0% 1.8");
/// let record = resolve("Ole Miss", &stats, AliasTable::standard());
/// assert_eq!(record.map(|r| r.record.as_str()), Some("15-10"));
/// ```
pub fn resolve<'a>(
    team_name: &str,
    stats: &'a StatMap,
    aliases: &AliasTable,
) -> Option<&'a TeamStatRecord> {
    if let Some(record) = stats.get(team_name) {
        return Some(record);
    }

    let alias = aliases.get(team_name)?;
    let record = stats.get(alias);
    trace!(
        "Alias {team_name} -> {alias}: {}",
        if record.is_some() { "found" } else { "missing" }
    );
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    fn stat_map(entries: &[(&str, &str)]) -> StatMap {
        entries
            .iter()
            .map(|(team, pct)| {
                (
                    team.to_string(),
                    TestDataBuilder::stat_record(Some("1"), "10-10", pct, 0.0),
                )
            })
            .collect()
    }

    #[test]
    fn test_exact_name_wins_over_alias() {
        let stats = stat_map(&[("Ole Miss", "55.0%"), ("Mississippi", "60.0%")]);
        let record = resolve("Ole Miss", &stats, AliasTable::standard()).unwrap();
        assert_eq!(record.cover_pct.as_str(), "55.0%");
    }

    #[test]
    fn test_alias_lookup() {
        let stats = stat_map(&[("Michigan St", "61.5%")]);
        let record = resolve("Michigan State", &stats, AliasTable::standard()).unwrap();
        assert_eq!(record.cover_pct.as_str(), "61.5%");
    }

    #[test]
    fn test_unknown_name() {
        let stats = stat_map(&[("Duke", "70.0%")]);
        assert!(resolve("Nowhere Tech", &stats, AliasTable::standard()).is_none());
        assert!(resolve("Duke", &StatMap::new(), AliasTable::standard()).is_none());
    }

    #[test]
    fn test_alias_target_missing_from_stats() {
        let stats = stat_map(&[("Duke", "70.0%")]);
        assert!(resolve("Ole Miss", &stats, AliasTable::standard()).is_none());
    }

    #[test]
    fn test_aliases_are_followed_one_hop_only() {
        let aliases = AliasTable::from_pairs([("Ole Miss Rebels", "Ole Miss"), ("Ole Miss", "Mississippi")]);
        let stats = stat_map(&[("Mississippi", "60.0%")]);

        assert!(resolve("Ole Miss", &stats, &aliases).is_some());
        assert!(resolve("Ole Miss Rebels", &stats, &aliases).is_none());
    }

    #[test]
    fn test_resolution_is_case_sensitive() {
        let stats = stat_map(&[("Duke", "70.0%")]);
        assert!(resolve("duke", &stats, AliasTable::standard()).is_none());
    }
}
