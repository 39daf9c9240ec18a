use super::cursor::LineCursor;
use super::patterns::{is_bare_record, record_side};
use crate::constants::schedule::DETECTION_WINDOW_LINES;
use std::fmt;

/// The two copy-paste templates the schedule extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleLayout {
    /// Team names followed by parenthesized records, `Spread:CODE N` lines
    Desktop,
    /// Fixed six-line game template with bare records
    Mobile,
}

impl fmt::Display for ScheduleLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleLayout::Desktop => f.write_str("desktop"),
            ScheduleLayout::Mobile => f.write_str("mobile"),
        }
    }
}

/// Finds the earliest line in the detection window whose successor
/// discriminates the layout.
///
/// - Next line is a parenthesized record: desktop.
/// - Next line is a bare `W-L` token, and the line after it is blank or is
///   followed by another bare record: mobile.
///
/// Falls back to desktop when nothing in the window discriminates.
pub fn detect_layout(cursor: &LineCursor<'_>) -> ScheduleLayout {
    let window = DETECTION_WINDOW_LINES.min(cursor.len().saturating_sub(2));

    for index in 0..window {
        if cursor.line(index).is_empty() {
            continue;
        }

        let next = cursor.line(index + 1);
        if record_side(next).is_some() {
            return ScheduleLayout::Desktop;
        }

        if is_bare_record(next) {
            let after = cursor.line(index + 2);
            if after.is_empty() || is_bare_record(cursor.line(index + 3)) {
                return ScheduleLayout::Mobile;
            }
        }
    }

    ScheduleLayout::Desktop
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_desktop_from_parenthesized_record() {
        let cursor = LineCursor::new("7:00 PM\n\nDuke\n(20-5 Away)\nNorth Carolina\n(18-7 Home)");
        assert_eq!(detect_layout(&cursor), ScheduleLayout::Desktop);
    }

    #[test]
    fn test_detects_mobile_from_bare_record_block() {
        let cursor = LineCursor::new("7:00 PM\nESPN\nDuke\n20-5\nNorth Carolina\n18-7\n");
        assert_eq!(detect_layout(&cursor), ScheduleLayout::Mobile);
    }

    #[test]
    fn test_detects_mobile_from_record_followed_by_blank() {
        let cursor = LineCursor::new("Duke\n20-5\n\nNorth Carolina\n18-7");
        assert_eq!(detect_layout(&cursor), ScheduleLayout::Mobile);
    }

    #[test]
    fn test_bare_record_without_block_is_not_mobile() {
        let cursor = LineCursor::new("Duke\n20-5\nNorth Carolina\nUNC\nnothing");
        assert_eq!(detect_layout(&cursor), ScheduleLayout::Desktop);
    }

    #[test]
    fn test_defaults_to_desktop_without_discriminator() {
        let cursor = LineCursor::new("No games scheduled\nCheck back later\nThanks");
        assert_eq!(detect_layout(&cursor), ScheduleLayout::Desktop);
    }

    #[test]
    fn test_defaults_to_desktop_for_short_input() {
        assert_eq!(detect_layout(&LineCursor::new("")), ScheduleLayout::Desktop);
        assert_eq!(detect_layout(&LineCursor::new("Duke\n20-5")), ScheduleLayout::Desktop);
    }

    #[test]
    fn test_discriminator_outside_window_is_ignored() {
        let mut text = "filler\n".repeat(DETECTION_WINDOW_LINES + 5);
        text.push_str("Duke\n20-5\n\nNorth Carolina\n18-7\n");
        assert_eq!(detect_layout(&LineCursor::new(&text)), ScheduleLayout::Desktop);
    }

    #[test]
    fn test_earliest_discriminator_wins() {
        let cursor = LineCursor::new("Duke\n(20-5)\nKansas\n20-5\n\nBaylor\n18-7");
        assert_eq!(detect_layout(&cursor), ScheduleLayout::Desktop);
    }

    #[test]
    fn test_layout_display() {
        assert_eq!(ScheduleLayout::Desktop.to_string(), "desktop");
        assert_eq!(ScheduleLayout::Mobile.to_string(), "mobile");
    }
}
