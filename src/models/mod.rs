pub mod chart;
pub mod game;
pub mod stats;

pub use chart::{ChartRow, UnresolvedNames};
pub use game::{GameRecord, SpreadToken};
pub use stats::{CoverPct, Rank, StatMap, TeamStatRecord};
