//! Application-wide constants and configuration values
//!
//! This module centralizes the scan windows, marker tokens and display
//! sentinels used by the extractors so the brittle parts of the text
//! templates live in one place.

/// Default maximum size of a single pasted input, in bytes
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Default log file name inside the log directory
pub const DEFAULT_LOG_FILE_NAME: &str = "ats_chart.log";

/// Layout detection and scanning windows for the schedule extractor
pub mod schedule {
    /// Number of leading lines inspected when detecting the layout
    pub const DETECTION_WINDOW_LINES: usize = 100;

    /// Maximum number of lines a desktop block may span after its anchor
    pub const DESKTOP_BLOCK_WINDOW_LINES: usize = 40;

    /// Offset of the away team line from the clock-time anchor (mobile)
    pub const MOBILE_AWAY_OFFSET: usize = 2;

    /// Offset of the home team line from the clock-time anchor (mobile)
    pub const MOBILE_HOME_OFFSET: usize = 4;

    /// Offset where the mobile spread search starts
    pub const MOBILE_SPREAD_SEARCH_OFFSET: usize = 5;

    /// Exclusive end of the mobile spread search, relative to the anchor
    pub const MOBILE_SPREAD_WINDOW_LINES: usize = 20;

    /// Lines skipped after a mobile anchor once a game was read
    pub const MOBILE_STRIDE_LINES: usize = 6;

    /// Marker token that ends a desktop block
    pub const GAMECAST_MARKER: &str = "Gamecast";

    /// Prefix of the line carrying the point spread
    pub const SPREAD_MARKER: &str = "Spread:";
}

/// Display values rendered in place of missing data
pub mod display {
    /// Market shown when no spread could be read for a game
    pub const NO_SPREAD: &str = "PK";

    /// ATS +/- shown when both teams have the same cover percentage
    pub const NO_EDGE: &str = "-";

    /// Rank stored for statistics rows without a rank column
    pub const UNRANKED: &str = "N/A";

    /// Column headers of the chart, in output order
    pub const CHART_HEADERS: [&str; 8] = [
        "Away",
        "Home",
        "Market",
        "A Cover %",
        "H Cover %",
        "Avg Conf",
        "ATS +/-",
        "Time",
    ];
}

/// Confidence gap thresholds used to highlight rows
pub mod highlight {
    /// Gap (percentage points) at or above which a row is a strong play
    pub const STRONG_GAP: f64 = 50.0;

    /// Gap (percentage points) at or above which a row is a moderate play
    pub const MODERATE_GAP: f64 = 30.0;
}

/// Abbreviation derivation rules
pub mod abbreviation {
    /// Generic prefixes removed before deriving a code
    pub const STRIPPED_PREFIXES: [&str; 2] = ["University of ", "College of "];

    /// Letters taken from a single word (or the first of many words)
    pub const WORD_CODE_LETTERS: usize = 4;

    /// Largest word count that still yields an initialism
    pub const MAX_INITIALISM_WORDS: usize = 3;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "ATS_CHART_LOG_FILE";

    /// Environment variable for export directory override
    pub const OUTPUT_DIR: &str = "ATS_CHART_OUTPUT_DIR";

    /// Environment variable for input size limit override
    pub const MAX_INPUT_BYTES: &str = "ATS_CHART_MAX_INPUT_BYTES";
}
