use serde::Serialize;
use std::collections::BTreeSet;

/// Team names from the schedule that had no statistics row, directly or via alias.
pub type UnresolvedNames = BTreeSet<String>;

/// One line of the daily chart. Every field is display-ready text;
/// fields that could not be computed are empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub away: String,
    pub home: String,
    pub market: String,
    pub away_cover_pct: String,
    pub home_cover_pct: String,
    pub confidence_gap: String,
    pub recommended_side_ats: String,
    pub tip_off: String,
}

impl ChartRow {
    /// Row cells in the fixed output order.
    pub fn cells(&self) -> [&str; 8] {
        [
            &self.away,
            &self.home,
            &self.market,
            &self.away_cover_pct,
            &self.home_cover_pct,
            &self.confidence_gap,
            &self.recommended_side_ats,
            &self.tip_off,
        ]
    }

    /// Numeric confidence gap, or `None` when either side was unresolved.
    pub fn confidence_gap_value(&self) -> Option<f64> {
        self.confidence_gap.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(confidence_gap: &str) -> ChartRow {
        ChartRow {
            away: "Duke".to_string(),
            home: "North Carolina".to_string(),
            market: "DUKE -3.5".to_string(),
            away_cover_pct: "70.0%".to_string(),
            home_cover_pct: "40.0%".to_string(),
            confidence_gap: confidence_gap.to_string(),
            recommended_side_ats: "+3.2".to_string(),
            tip_off: "7:00 PM".to_string(),
        }
    }

    #[test]
    fn test_cells_follow_output_order() {
        let r = row("30.0");
        let cells = r.cells();
        assert_eq!(
            cells,
            [
                "Duke",
                "North Carolina",
                "DUKE -3.5",
                "70.0%",
                "40.0%",
                "30.0",
                "+3.2",
                "7:00 PM"
            ]
        );
    }

    #[test]
    fn test_confidence_gap_value() {
        assert_eq!(row("30.0").confidence_gap_value(), Some(30.0));
        assert_eq!(row("").confidence_gap_value(), None);
    }
}
