//! Custodian pair capture
//!
//! Capture pattern: P-O-O-P where P is the capturing player's stone
//! and O is the opponent's stone. Only exactly 2 stones can be captured,
//! at most one pair per direction, so up to 8 pairs from one placement.

use crate::board::{Board, Direction, Player, Pos};

use super::pattern::{Expect, Pattern};

/// Everything past the anchor of `P O O P`
const CAPTURE_TAIL: Pattern = Pattern::new(&[Expect::Opponent, Expect::Opponent, Expect::Own]);

/// Does a stone of `player` at `pos` capture along `dir`?
/// The anchor cell itself is not inspected, so this works before placement too.
#[inline]
fn captures_along(board: &Board, pos: Pos, dir: Direction, player: Player) -> bool {
    board
        .step(pos, dir, 1)
        .is_some_and(|next| CAPTURE_TAIL.matches_at(board, next, dir, player))
}

/// Find positions that would be captured by a stone of `player` at `pos`.
///
/// Every direction is judged against the same board, so removals in one
/// direction never affect another.
///
/// # Returns
/// Captured positions, two per capturing direction
pub fn captured_positions(board: &Board, pos: Pos, player: Player) -> Vec<Pos> {
    let mut captured = Vec::new();
    for dir in Direction::ALL {
        if captures_along(board, pos, dir, player) {
            // Bounds already proven by the match
            if let (Some(first), Some(second)) = (board.step(pos, dir, 1), board.step(pos, dir, 2)) {
                captured.push(first);
                captured.push(second);
            }
        }
    }
    captured
}

/// Check if a move would result in any captures.
#[inline]
pub fn has_capture(board: &Board, pos: Pos, player: Player) -> bool {
    Direction::ALL
        .iter()
        .any(|&dir| captures_along(board, pos, dir, player))
}

/// Count how many pairs would be captured by a move.
#[inline]
pub fn count_captures(board: &Board, pos: Pos, player: Player) -> usize {
    Direction::ALL
        .iter()
        .filter(|&&dir| captures_along(board, pos, dir, player))
        .count()
}

/// Remove the pairs captured by the stone `player` just placed at `pos`.
///
/// # Returns
/// Number of pairs removed
pub fn apply_captures(board: &mut Board, pos: Pos, player: Player) -> usize {
    let captured = captured_positions(board, pos, player);
    for &cap in &captured {
        board.remove_stone(cap);
    }
    captured.len() / 2
}
