//! Schedule-side team names mapped to the names used by the ranking table.
//!
//! The schedule source spells most schools out ("Michigan State") while the
//! ranking table abbreviates ("Michigan St"). Several schedule names can
//! map to the same table name. Names that are spelled identically in both
//! sources need no entry: the resolver always tries the exact name first.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

const BUILT_IN_ALIASES: &[(&str, &str)] = &[
    ("Arkansas-Pine Bluff", "AR-Pine Bluff"),
    ("Abilene Christian", "Abl Christian"),
    ("Alabama State", "Alabama St"),
    ("Alcorn State", "Alcorn St"),
    ("Appalachian State", "App State"),
    ("Arizona State", "Arizona St"),
    ("Arkansas State", "Arkansas St"),
    ("Ball State", "Ball St"),
    ("Bethune-Cookman", "Bethune"),
    ("Boise State", "Boise St"),
    ("Boston University", "Boston U"),
    ("Central Arkansas", "C Arkansas"),
    ("Central Connecticut", "C Connecticut"),
    ("Central Michigan", "C Michigan"),
    ("CSU Bakersfield", "CS Bakersfield"),
    ("Cal State Bakersfield", "CS Bakersfield"),
    ("Cal State Fullerton", "CS Fullerton"),
    ("CSU Northridge", "CS Northridge"),
    ("Cal State Northridge", "CS Northridge"),
    ("California Baptist", "Cal Baptist"),
    ("Charleston Southern", "Charleston So"),
    ("Chicago State", "Chicago St"),
    ("Cleveland State", "Cleveland St"),
    ("Coastal Carolina", "Coastal Car"),
    ("Colorado State", "Colorado St"),
    ("Coppin State", "Coppin St"),
    ("Delaware State", "Delaware St"),
    ("East Carolina", "E Carolina"),
    ("Eastern Illinois", "E Illinois"),
    ("Eastern Kentucky", "E Kentucky"),
    ("Eastern Michigan", "E Michigan"),
    ("East Tennessee State", "E Tennessee St"),
    ("East Texas A&M", "E Texas A&M"),
    ("Eastern Washington", "E Washington"),
    ("Fairleigh Dickinson", "F Dickinson"),
    ("Florida Gulf Coast", "FGCU"),
    ("Florida International", "Florida Intl"),
    ("Florida State", "Florida St"),
    ("Fresno State", "Fresno St"),
    ("George Washington", "G Washington"),
    ("Georgia Southern", "Georgia So"),
    ("Georgia State", "Georgia St"),
    ("Hawaii", "Hawai'i"),
    ("Houston Christian", "Hou Christian"),
    ("IU Indianapolis", "IU Indy"),
    ("Idaho State", "Idaho St"),
    ("UIC", "Illinois Chicago"),
    ("Illinois State", "Illinois St"),
    ("Indiana State", "Indiana St"),
    ("Iowa State", "Iowa St"),
    ("James Madison", "J Madison"),
    ("Jackson State", "Jackson St"),
    ("Jacksonville State", "Jacksonville St"),
    ("Kansas State", "Kansas St"),
    ("Kennesaw State", "Kennesaw St"),
    ("Kent State", "Kent St"),
    ("Long Beach State", "Long Beach St"),
    ("Loyola Chicago", "Loyola Chi"),
    ("Loyola Maryland", "Loyola MD"),
    ("Loyola Marymount", "Loyola Mymt"),
    ("Maryland Eastern Shore", "Maryland ES"),
    ("Miami (OH)", "Miami OH"),
    ("Miami (FL)", "Miami"),
    ("Michigan State", "Michigan St"),
    ("Middle Tennessee", "Middle Tenn"),
    ("Mississippi Valley State", "Miss Valley St"),
    ("Ole Miss", "Mississippi"),
    ("Mississippi State", "Mississippi St"),
    ("Missouri State", "Missouri St"),
    ("Montana State", "Montana St"),
    ("Morehead State", "Morehead St"),
    ("Morgan State", "Morgan St"),
    ("Mount St. Mary's", "Mt St Mary's"),
    ("Murray State", "Murray St"),
    ("New Mexico State", "New Mexico St"),
    ("North Alabama", "N Alabama"),
    ("Northern Arizona", "N Arizona"),
    ("Northern Colorado", "N Colorado"),
    ("North Dakota State", "N Dakota St"),
    ("North Florida", "N Florida"),
    ("Northern Illinois", "N Illinois"),
    ("Northern Iowa", "N Iowa"),
    ("Northern Kentucky", "N Kentucky"),
    ("North Texas", "N Texas"),
    ("North Carolina A&T", "NC A&T"),
    ("UNC Asheville", "NC Asheville"),
    ("UNC Greensboro", "NC Greensboro"),
    ("UNC Wilmington", "NC Wilmington"),
    ("Northwestern State", "NW State"),
    ("Norfolk State", "Norfolk St"),
    ("Ohio State", "Ohio St"),
    ("Oklahoma State", "Oklahoma St"),
    ("Oregon State", "Oregon St"),
    ("Penn State", "Penn St"),
    ("Portland State", "Portland St"),
    ("Prairie View A&M", "Prairie View"),
    ("Purdue Fort Wayne", "Purdue FW"),
    ("Queens University", "Queens"),
    ("South Alabama", "S Alabama"),
    ("South Carolina State", "S Carolina St"),
    ("South Dakota State", "S Dakota St"),
    ("South Florida", "S Florida"),
    ("Southern Illinois", "S Illinois"),
    ("Southern Indiana", "S Indiana"),
    ("Southern Utah", "S Utah"),
    ("Southeastern Louisiana", "SE Louisiana"),
    ("Southeast Missouri State", "SE Missouri St"),
    ("Stephen F. Austin", "SF Austin"),
    ("SIU Edwardsville", "SIU Edward"),
    ("Sacramento State", "Sacramento St"),
    ("Saint Mary's (CA)", "Saint Mary's"),
    ("Sam Houston State", "Sam Houston"),
    ("San Diego State", "San Diego St"),
    ("San Jose State", "San Jose St"),
    ("St. Bonaventure", "St Bonaventure"),
    ("St. Francis (PA)", "St Francis PA"),
    ("St. John's", "St John's"),
    ("St. Thomas", "St Thomas"),
    ("Tarleton State", "Tarleton St"),
    ("Tennessee Tech", "Tenn Tech"),
    ("Tennessee State", "Tennessee St"),
    ("Texas A&M-Corpus Christi", "Texas A&M-CC"),
    ("Texas Southern", "Texas So"),
    ("Texas State", "Texas St"),
    ("UAlbany", "Albany"),
    ("UC San Diego", "UCSD"),
    ("UC Santa Barbara", "UCSB"),
    ("UT Rio Grande Valley", "UT Rio Grande"),
    ("Utah State", "Utah St"),
    ("Weber State", "Weber St"),
    ("Western Carolina", "W Carolina"),
    ("West Georgia", "W Georgia"),
    ("Western Illinois", "W Illinois"),
    ("Western Kentucky", "W Kentucky"),
    ("Western Michigan", "W Michigan"),
    ("Wichita State", "Wichita St"),
    ("Wright State", "Wright St"),
    ("Washington State", "Washington St"),
    ("Youngstown State", "Youngstown St"),
];

static STANDARD_ALIASES: LazyLock<AliasTable> =
    LazyLock::new(|| AliasTable::from_pairs(BUILT_IN_ALIASES.iter().copied()));

/// Many-to-one mapping from schedule-side names to ranking-table names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// The built-in table, shared for the life of the process.
    pub fn standard() -> &'static AliasTable {
        &STANDARD_ALIASES
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        }
    }

    /// Copy of this table with `overrides` added; an override replaces a
    /// built-in entry with the same key.
    pub fn with_overrides(&self, overrides: &BTreeMap<String, String>) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(
            overrides
                .iter()
                .map(|(from, to)| (from.clone(), to.clone())),
        );
        Self { entries }
    }

    /// The ranking-table name for `team_name`, if one is listed.
    pub fn get(&self, team_name: &str) -> Option<&str> {
        self.entries.get(team_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
