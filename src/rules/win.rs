//! Win condition checking
//!
//! Win conditions:
//! 1. Five stones in a row (longer runs also contain a five)
//! 2. Five captured pairs

use crate::board::{Board, Direction, Player, Pos};

use super::pattern::FIVE;

/// Pairs a player must capture to win
pub const CAPTURES_TO_WIN: u32 = 5;

/// Check if there's a five-in-a-row anywhere for `player`.
///
/// Scans every five-cell window in all four orientations, O(N²).
pub fn has_five_in_row(board: &Board, player: Player) -> bool {
    find_five(board, player).is_some()
}

/// Find the first five-in-a-row for `player`, row-major by its first stone.
pub fn find_five(board: &Board, player: Player) -> Option<[Pos; 5]> {
    for start in board.positions() {
        for dir in Direction::AXES {
            if FIVE.matches_at(board, start, dir, player) {
                let mut line = [start; 5];
                for (k, slot) in line.iter_mut().enumerate().skip(1) {
                    *slot = board.step(start, dir, k as i32)?;
                }
                return Some(line);
            }
        }
    }
    None
}

/// Fast five-in-a-row check through a specific position.
///
/// Only walks the four lines through `pos`. This is the restricted form
/// the search uses at every node: after a move, only lines through the
/// placed stone can have become winning.
#[inline]
pub fn has_five_through(board: &Board, pos: Pos, player: Player) -> bool {
    Direction::AXES.iter().any(|&dir| {
        let run = 1 + run_length(board, pos, dir, player) + run_length(board, pos, dir.reversed(), player);
        run >= 5
    })
}

/// Consecutive `player` stones after `pos` along `dir` (excluding `pos`)
#[inline]
fn run_length(board: &Board, pos: Pos, dir: Direction, player: Player) -> usize {
    let mut count = 0;
    let mut cursor = board.step(pos, dir, 1);
    while let Some(p) = cursor {
        if board.get(p).player() != Some(player) {
            break;
        }
        count += 1;
        cursor = board.step(p, dir, 1);
    }
    count
}

/// Check for a winner given the board and the captured pair counts,
/// indexed by [`Player::index`].
///
/// Lines are checked before captures, player one before player two.
pub fn find_winner(board: &Board, captures: [u32; 2]) -> Option<Player> {
    for player in [Player::One, Player::Two] {
        if has_five_in_row(board, player) {
            return Some(player);
        }
    }
    [Player::One, Player::Two]
        .into_iter()
        .find(|p| captures[p.index()] >= CAPTURES_TO_WIN)
}
