//! Short display codes for team names.
//!
//! Well-known programs use the code the schedule source prints next to
//! their spreads. Every other name falls back to a mechanical rule so that
//! a code can always be derived.

use crate::constants::abbreviation::{MAX_INITIALISM_WORDS, STRIPPED_PREFIXES, WORD_CODE_LETTERS};
use std::collections::HashMap;
use std::sync::LazyLock;

const KNOWN_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Alabama", "ALA"),
    ("Arizona", "ARIZ"),
    ("Arizona State", "ASU"),
    ("Arkansas", "ARK"),
    ("Auburn", "AUB"),
    ("Baylor", "BAY"),
    ("Boise State", "BSU"),
    ("Boston College", "BC"),
    ("Butler", "BUT"),
    ("BYU", "BYU"),
    ("Cincinnati", "CIN"),
    ("Clemson", "CLEM"),
    ("Colorado State", "CSU"),
    ("Connecticut", "CONN"),
    ("Creighton", "CREI"),
    ("Dayton", "DAY"),
    ("DePaul", "DEP"),
    ("Duke", "DUKE"),
    ("Florida", "FLA"),
    ("Florida Atlantic", "FAU"),
    ("Florida State", "FSU"),
    ("Georgetown", "GTWN"),
    ("Georgia", "UGA"),
    ("Georgia Tech", "GT"),
    ("Gonzaga", "GONZ"),
    ("Houston", "HOU"),
    ("Illinois", "ILL"),
    ("Indiana", "IU"),
    ("Iowa", "IOWA"),
    ("Iowa State", "ISU"),
    ("Kansas", "KU"),
    ("Kansas State", "KSU"),
    ("Kentucky", "UK"),
    ("Louisville", "LOU"),
    ("LSU", "LSU"),
    ("Marquette", "MARQ"),
    ("Maryland", "MD"),
    ("Memphis", "MEM"),
    ("Miami (FL)", "MIA"),
    ("Miami (OH)", "M-OH"),
    ("Michigan", "MICH"),
    ("Michigan State", "MSU"),
    ("Minnesota", "MINN"),
    ("Mississippi State", "MSST"),
    ("Missouri", "MIZ"),
    ("NC State", "NCSU"),
    ("Nebraska", "NEB"),
    ("Nevada", "NEV"),
    ("New Mexico", "UNM"),
    ("North Carolina", "UNC"),
    ("Northwestern", "NU"),
    ("Notre Dame", "ND"),
    ("Ohio State", "OSU"),
    ("Oklahoma", "OU"),
    ("Oklahoma State", "OKST"),
    ("Ole Miss", "MISS"),
    ("Oregon", "ORE"),
    ("Penn State", "PSU"),
    ("Pittsburgh", "PITT"),
    ("Providence", "PROV"),
    ("Purdue", "PUR"),
    ("Rutgers", "RUTG"),
    ("Saint Louis", "SLU"),
    ("Saint Mary's (CA)", "SMC"),
    ("San Diego State", "SDSU"),
    ("Seton Hall", "HALL"),
    ("South Carolina", "SC"),
    ("St. John's", "SJU"),
    ("Stephen F. Austin", "SFA"),
    ("Syracuse", "SYR"),
    ("TCU", "TCU"),
    ("Tennessee", "TENN"),
    ("Texas", "TEX"),
    ("Texas A&M", "TA&M"),
    ("Texas Tech", "TTU"),
    ("UCF", "UCF"),
    ("UCLA", "UCLA"),
    ("UConn", "CONN"),
    ("UNLV", "UNLV"),
    ("USC", "USC"),
    ("Utah State", "USU"),
    ("Vanderbilt", "VAN"),
    ("VCU", "VCU"),
    ("Villanova", "VILL"),
    ("Virginia", "UVA"),
    ("Virginia Tech", "VT"),
    ("Wake Forest", "WAKE"),
    ("Washington", "WASH"),
    ("West Virginia", "WVU"),
    ("Wichita State", "WICH"),
    ("Wisconsin", "WIS"),
    ("Xavier", "XAV"),
];

static ABBREVIATIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| KNOWN_ABBREVIATIONS.iter().copied().collect());

/// Returns the display code for `team_name`.
///
/// Listed programs get their fixed code. Otherwise institutional prefixes
/// are dropped and the code is built from the remaining words:
/// one word gives its first four letters, two or three words give their
/// initials, and longer names fall back to the first word's first four
/// letters. The result is always uppercase.
///
/// # Example
/// ```
/// use ats_chart::teams::derive_abbreviation;
///
/// assert_eq!(derive_abbreviation("Duke"), "DUKE");
/// assert_eq!(derive_abbreviation("North Carolina"), "UNC");
/// assert_eq!(derive_abbreviation("Gardner-Webb"), "GARD");
/// assert_eq!(derive_abbreviation("Texas Southern"), "TS");
/// ```
pub fn derive_abbreviation(team_name: &str) -> String {
    let team_name = team_name.trim();
    if let Some(code) = ABBREVIATIONS.get(team_name) {
        return (*code).to_string();
    }

    let base = STRIPPED_PREFIXES
        .iter()
        .find_map(|prefix| team_name.strip_prefix(*prefix))
        .unwrap_or(team_name);
    let words: Vec<&str> = base.split_whitespace().collect();

    match words.as_slice() {
        [] => String::new(),
        [word] => word_code(word),
        words if words.len() <= MAX_INITIALISM_WORDS => words
            .iter()
            .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
            .flat_map(char::to_uppercase)
            .collect(),
        [first, ..] => word_code(first),
    }
}

fn word_code(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .take(WORD_CODE_LETTERS)
        .flat_map(char::to_uppercase)
        .collect()
}
