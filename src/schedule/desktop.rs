//! Desktop layout scanner.
//!
//! The desktop paste is a run of blocks, each anchored by a clock-time
//! line. Inside a block the team names are recognized by the record line
//! printed under them, and the spread is a `Spread:CODE N` line somewhere
//! after the home team:
//!
//! ```text
//! 7:00 PM
//!
//! Duke
//! (20-5 Away)
//! North Carolina
//! (18-7 Home)
//! Spread:DUKE -3.5
//! Gamecast
//! ```

use super::cursor::LineCursor;
use super::patterns::{RecordSide, is_clock_time, is_team_candidate, parse_inline_spread, record_side};
use crate::constants::schedule::{DESKTOP_BLOCK_WINDOW_LINES, GAMECAST_MARKER, SPREAD_MARKER};
use crate::models::{GameRecord, SpreadToken};
use tracing::debug;

/// States of the per-block scanner. The outer `ExpectTime` state is the
/// anchor search in [`parse_desktop`].
#[derive(Debug, Clone, PartialEq)]
enum BlockState<'a> {
    ExpectAwayTeam,
    ExpectHomeTeam { away: &'a str },
    ExpectSpread { away: &'a str, home: &'a str, spread: SpreadToken },
}

/// Outcome of one step of the block scanner.
enum Step<'a> {
    /// Move to `state`, advancing the cursor by `advance` lines.
    Next { state: BlockState<'a>, advance: usize },
    /// The block ends at the current line.
    Stop,
}

/// Extracts every complete game from desktop-layout text, in order of appearance.
pub fn parse_desktop(cursor: &LineCursor<'_>) -> Vec<GameRecord> {
    let mut games = Vec::new();
    let mut index = 0;

    while index < cursor.len() {
        if !is_clock_time(cursor.line(index)) {
            index += 1;
            continue;
        }

        let (game, resume) = scan_block(cursor, index);
        match game {
            Some(game) => games.push(game),
            None => debug!(
                "Discarded desktop block anchored at line {} ({}): teams not found",
                index + 1,
                cursor.line(index)
            ),
        }
        index = resume;
    }

    games
}

/// Scans the block anchored at `anchor`. Returns the game, if both teams
/// were found, and the line where the outer scan resumes.
fn scan_block<'a>(cursor: &LineCursor<'a>, anchor: usize) -> (Option<GameRecord>, usize) {
    let tip_off = cursor.line(anchor);
    let end = (anchor + DESKTOP_BLOCK_WINDOW_LINES).min(cursor.len());

    let mut state = BlockState::ExpectAwayTeam;
    let mut position = anchor + 1;

    while position < end {
        match step(cursor, position, state.clone()) {
            Step::Next {
                state: next,
                advance,
            } => {
                state = next;
                position += advance;
            }
            Step::Stop => break,
        }
    }

    let game = match state {
        BlockState::ExpectSpread { away, home, spread } => {
            Some(GameRecord::new(away, home, tip_off, spread))
        }
        _ => None,
    };

    (game, position)
}

fn step<'a>(cursor: &LineCursor<'a>, position: usize, state: BlockState<'a>) -> Step<'a> {
    let line = cursor.line(position);

    match state {
        BlockState::ExpectAwayTeam => {
            if !is_team_candidate(line) {
                return Step::Next {
                    state,
                    advance: 1,
                };
            }

            let next = cursor.line(position + 1);
            match record_side(next) {
                Some(RecordSide::Away | RecordSide::Unmarked) => Step::Next {
                    state: BlockState::ExpectHomeTeam { away: line },
                    advance: 2,
                },
                Some(RecordSide::Home) => Step::Next {
                    state,
                    advance: 1,
                },
                // Both names stacked above a single home record line. An away
                // record two lines down belongs to `next`, not to this line.
                None if is_team_candidate(next)
                    && record_side(cursor.line(position + 2)) == Some(RecordSide::Home) =>
                {
                    Step::Next {
                        state: BlockState::ExpectSpread {
                            away: line,
                            home: next,
                            spread: SpreadToken::Unavailable,
                        },
                        advance: 3,
                    }
                }
                None => Step::Next {
                    state,
                    advance: 1,
                },
            }
        }
        BlockState::ExpectHomeTeam { away } => {
            let is_home = is_team_candidate(line)
                && matches!(
                    record_side(cursor.line(position + 1)),
                    Some(RecordSide::Home | RecordSide::Unmarked)
                );
            if is_home {
                Step::Next {
                    state: BlockState::ExpectSpread {
                        away,
                        home: line,
                        spread: SpreadToken::Unavailable,
                    },
                    advance: 2,
                }
            } else {
                Step::Next {
                    state: BlockState::ExpectHomeTeam { away },
                    advance: 1,
                }
            }
        }
        BlockState::ExpectSpread { away, home, spread } => {
            if is_clock_time(line) || line.contains(GAMECAST_MARKER) {
                return Step::Stop;
            }

            // A later spread line replaces an earlier one
            let spread = if line.starts_with(SPREAD_MARKER) {
                parse_inline_spread(line).unwrap_or(spread)
            } else {
                spread
            };

            Step::Next {
                state: BlockState::ExpectSpread { away, home, spread },
                advance: 1,
            }
        }
    }
}
