use ats_chart::{
    chart::reorient,
    models::{CoverPct, Rank, SpreadToken},
    schedule::{LineCursor, ScheduleLayout, detect_layout, extract_games},
    stats::{extract_stats, parse_stat_line},
    teams::derive_abbreviation,
    testing_utils::TestDataBuilder,
};

#[test]
fn test_fixture_layouts_are_detected() {
    let desktop = TestDataBuilder::desktop_schedule();
    let mobile = TestDataBuilder::mobile_schedule();
    assert_eq!(detect_layout(&LineCursor::new(&desktop)), ScheduleLayout::Desktop);
    assert_eq!(detect_layout(&LineCursor::new(&mobile)), ScheduleLayout::Mobile);
}

#[test]
fn test_desktop_block_extraction() {
    let text = "\
7:00 PM

Duke
(20-5 Away)
North Carolina
(18-7 Home)
Spread:DUKE -3.5
Gamecast";
    let games = extract_games(text);

    assert_eq!(games.len(), 1);
    let game = &games[0];
    assert_eq!(game.away_team, "Duke");
    assert_eq!(game.home_team, "North Carolina");
    assert_eq!(game.tip_off, "7:00 PM");
    assert_eq!(game.spread.team_abbrev(), Some("DUKE"));
    assert_eq!(game.spread.magnitude(), Some(-3.5));
    assert_eq!(game.spread.display(), "DUKE -3.5");
}

#[test]
fn test_mobile_template_extraction() {
    let text = "\
7:00 PM
ESPN
Duke
20-5
North Carolina
18-7
Spread:
DUKE -3.5";
    let games = extract_games(text);

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].away_team, "Duke");
    assert_eq!(games[0].home_team, "North Carolina");
    assert_eq!(games[0].spread.display(), "DUKE -3.5");
}

#[test]
fn test_mobile_game_without_spread() {
    let text = "\
7:00 PM
ESPN
Duke
20-5
North Carolina
18-7
";
    let games = extract_games(text);
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].spread, SpreadToken::Unavailable);
}

#[test]
fn test_schedule_fixtures_keep_order() {
    for text in [
        TestDataBuilder::desktop_schedule(),
        TestDataBuilder::mobile_schedule(),
    ] {
        let games = extract_games(&text);
        let matchups: Vec<(&str, &str)> = games
            .iter()
            .map(|game| (game.away_team.as_str(), game.home_team.as_str()))
            .collect();
        assert_eq!(
            matchups,
            vec![("Duke", "North Carolina"), ("Michigan State", "Kansas")]
        );
    }
}

#[test]
fn test_unrecognized_schedule_is_empty() {
    assert!(extract_games("No games scheduled today").is_empty());
    assert!(extract_games("").is_empty());
}

#[test]
fn test_stats_line_scenario() {
    let (team, record) = parse_stat_line("12 Duke 18-7 64.3% 3.2").unwrap();
    assert_eq!(team, "Duke");
    assert_eq!(record.rank, Rank::Ranked("12".to_string()));
    assert_eq!(record.record, "18-7");
    assert_eq!(record.cover_pct.as_str(), "64.3%");
    assert_eq!(record.ats_plus_minus, 3.2);
}

#[test]
fn test_stats_fixture_tables() {
    let ranked = extract_stats(&TestDataBuilder::ranked_stats_table());
    let unranked = extract_stats(&TestDataBuilder::unranked_stats_table());

    assert_eq!(ranked.len(), 4);
    assert_eq!(unranked.len(), 4);
    assert_eq!(ranked["North Carolina"].record, "9-15-1");
    assert_eq!(unranked["North Carolina"].rank, Rank::Unavailable);
    assert_eq!(
        ranked["Kansas"].cover_pct.value(),
        unranked["Kansas"].cover_pct.value()
    );
}

#[test]
fn test_spread_flips_to_better_cover_team() {
    let spread = SpreadToken::from_parts("UNC", "-3.5").unwrap();
    let duke = CoverPct::parse("64.3%").unwrap();
    let unc = CoverPct::parse("44.0%").unwrap();

    let market = reorient(&spread, "Duke", "North Carolina", Some(&duke), Some(&unc));
    assert_eq!(market, "DUKE +3.5");

    // Same line, reversed cover percentages: the raw side is kept
    let market = reorient(&spread, "Duke", "North Carolina", Some(&unc), Some(&duke));
    assert_eq!(market, "UNC -3.5");
}

#[test]
fn test_abbreviations_used_for_markets() {
    assert_eq!(derive_abbreviation("Duke"), "DUKE");
    assert_eq!(derive_abbreviation("North Carolina"), "UNC");
    assert_eq!(derive_abbreviation("Michigan State"), "MSU");
}
