//! Daily against-the-spread chart builder
//!
//! This library turns two blobs of copy-pasted web text, a college
//! basketball schedule page and an against-the-spread ranking table, into a
//! daily chart: one row per game with both teams' cover percentages, the
//! confidence gap between them and the spread re-expressed from the side of
//! the better cover team.
//!
//! # Examples
//!
//! ```rust
//! use ats_chart::pipeline::build_daily_chart;
//! use ats_chart::teams::AliasTable;
//! use ats_chart::error::AppError;
//!
//! fn main() -> Result<(), AppError> {
//!     let schedule = "\
//! 7:00 PM
//!
//! Duke
//! (20-5 Away)
//! North Carolina
//! (18-7 Home)
//! Spread:UNC -3.5
//! Gamecast";
//!     let stats = "\
//! Rank Team ATS Record Cover % ATS +/-
//! 12 Duke 18-7 64.3% 3.2
//! 80 North Carolina 11-14 44.0% -2.1";
//!
//!     let chart = build_daily_chart(schedule, stats, AliasTable::standard(), 1 << 20)?;
//!     let row = &chart.rows[0];
//!     assert_eq!(row.market, "DUKE +3.5");
//!     assert_eq!(row.confidence_gap, "20.3");
//!     assert_eq!(row.recommended_side_ats, "+3.2");
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod schedule;
pub mod stats;
pub mod teams;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use models::{ChartRow, GameRecord, SpreadToken, TeamStatRecord};
pub use pipeline::{DailyChart, build_daily_chart};
pub use teams::AliasTable;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
