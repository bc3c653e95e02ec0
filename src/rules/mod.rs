//! Game rules for Pente
//!
//! This module implements the rule set:
//! - Pair capture (custodian `P O O P`, all eight directions)
//! - Win conditions (5-in-a-row, five captured pairs)
//! - Game state transitions

pub mod capture;
pub mod game;
pub mod pattern;
pub mod win;

// Re-exports for convenient access
pub use capture::{apply_captures, captured_positions, count_captures, has_capture};
pub use game::{GameState, Outcome};
pub use pattern::{board_lines, Expect, Pattern};
pub use win::{find_five, find_winner, has_five_in_row, has_five_through, CAPTURES_TO_WIN};
