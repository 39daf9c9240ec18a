use crate::models::{CoverPct, GameRecord, Rank, SpreadToken, TeamStatRecord};

/// Test utilities for building pasted inputs and model values
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Desktop schedule paste with two games and some page chrome around them
    pub fn desktop_schedule() -> String {
        "\
NCAA Men's Basketball Schedule
Tuesday, February 4
7:00 PM

Duke
(20-5 Away)
North Carolina
(18-7 Home)
Spread:DUKE -3.5
Gamecast
9:00 PM

Michigan State
(15-9 Away)
Kansas
(19-5 Home)
Spread:KU -6.5
Gamecast
"
        .to_string()
    }

    /// Mobile schedule paste carrying the same two games
    pub fn mobile_schedule() -> String {
        "\
7:00 PM
ESPN
Duke
20-5
North Carolina
18-7
Spread:
DUKE -3.5
9:00 PM
ESPN2
Michigan State
15-9
Kansas
19-5
Spread:
KU -6.5
"
        .to_string()
    }

    /// Ranking table with a rank column, covering the teams of both schedules
    pub fn ranked_stats_table() -> String {
        "\
NCAAB ATS Records
Rank Team ATS Record Cover % ATS +/-
1 Duke 18-7 72.0% 5.5
2 Michigan St 16-8 66.7% 3.4
101 Kansas 11-13 45.8% -1.2
140 North Carolina 9-15-1 37.5% -3.1
"
        .to_string()
    }

    /// Ranking table without a rank column (team, record, cover %, margin, +/-)
    pub fn unranked_stats_table() -> String {
        "\
Team ATS Record Cover % MOV ATS +/-
Duke 18-7 72.0% 8.1 5.5
Michigan St 16-8 66.7% 4.0 3.4
Kansas 11-13 45.8% 1.5 -1.2
North Carolina 9-15-1 37.5% -0.7 -3.1
"
        .to_string()
    }

    /// Creates a statistics record; `rank` of `None` means the table had no rank column
    pub fn stat_record(
        rank: Option<&str>,
        record: &str,
        cover_pct: &str,
        ats_plus_minus: f64,
    ) -> TeamStatRecord {
        TeamStatRecord {
            rank: rank.map_or(Rank::Unavailable, |rank| Rank::Ranked(rank.to_string())),
            record: record.to_string(),
            cover_pct: CoverPct::parse(cover_pct).expect("test cover percentage must parse"),
            ats_plus_minus,
        }
    }

    /// Creates a game; `spread` is the `(code, number)` pair as printed
    pub fn game(away: &str, home: &str, tip_off: &str, spread: Option<(&str, &str)>) -> GameRecord {
        let spread = spread
            .and_then(|(code, value)| SpreadToken::from_parts(code, value))
            .unwrap_or(SpreadToken::Unavailable);
        GameRecord::new(away, home, tip_off, spread)
    }
}
