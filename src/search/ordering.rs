//! Move prioritizer
//!
//! Produces every empty cell exactly once, tactically urgent cells first:
//!
//! 1. Pattern cells, found by scanning every empty cell in every direction
//!    for both sides: winning moves, then blocks, fours, captures and
//!    open threes (see [`Threat`])
//! 2. Cells within Chebyshev distance 2 of the center
//! 3. Cells next to any stone
//! 4. Everything else, row-major
//!
//! Ordering only changes how many nodes the search visits, never the
//! value it returns.

use crate::board::{Board, Direction, Player, Pos};
use crate::rules::capture::has_capture;

/// Chebyshev radius of the center tier
pub const CENTER_RADIUS: usize = 2;

/// Tactical classes of tier 1, most urgent first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Threat {
    /// Mover completes five
    Win,
    /// Opponent would complete five here
    BlockWin,
    /// Mover makes four with an open end
    Four,
    /// Opponent would make four with an open end
    BlockFour,
    /// Mover captures a pair
    Capture,
    /// Opponent would capture a pair
    BlockCapture,
    /// Mover makes three with both ends open
    OpenThree,
}

impl Threat {
    const COUNT: usize = 7;

    #[inline]
    fn rank(self) -> usize {
        self as usize
    }
}

/// Run a stone of `player` at `pos` would join along one axis, and how
/// many ends of that run have an empty cell beyond them. `pos` itself is
/// not inspected.
fn axis_line(board: &Board, pos: Pos, dir: Direction, player: Player) -> (usize, usize) {
    let mut run = 1;
    let mut open_ends = 0;
    for d in [dir, dir.reversed()] {
        let mut k = 1;
        while let Some(p) = board.step(pos, d, k) {
            if board.get(p).player() != Some(player) {
                if board.is_empty(p) {
                    open_ends += 1;
                }
                break;
            }
            run += 1;
            k += 1;
        }
    }
    (run, open_ends)
}

/// Line shapes `player` would form at `pos`, gathered over every axis
#[derive(Debug, Clone, Copy, Default)]
struct LineShapes {
    five: bool,
    four: bool,
    open_three: bool,
}

impl LineShapes {
    fn at(board: &Board, pos: Pos, player: Player) -> Self {
        let mut shapes = Self::default();
        for dir in Direction::AXES {
            match axis_line(board, pos, dir, player) {
                (run, _) if run >= 5 => shapes.five = true,
                (4, open_ends) if open_ends > 0 => shapes.four = true,
                (3, 2) => shapes.open_three = true,
                _ => {}
            }
        }
        shapes
    }
}

/// Most urgent class an empty `pos` belongs to when `player` is to move.
/// Every axis is judged on its own, so a dead line on one axis never
/// hides a threat on another.
pub fn classify(board: &Board, pos: Pos, player: Player) -> Option<Threat> {
    let opponent = player.opponent();
    let own = LineShapes::at(board, pos, player);
    let theirs = LineShapes::at(board, pos, opponent);

    if own.five {
        Some(Threat::Win)
    } else if theirs.five {
        Some(Threat::BlockWin)
    } else if own.four {
        Some(Threat::Four)
    } else if theirs.four {
        Some(Threat::BlockFour)
    } else if has_capture(board, pos, player) {
        Some(Threat::Capture)
    } else if has_capture(board, pos, opponent) {
        Some(Threat::BlockCapture)
    } else if own.open_three {
        Some(Threat::OpenThree)
    } else {
        None
    }
}

/// Ordered, deduplicated candidate moves for `player`.
///
/// # Arguments
/// * `board` - Position to move in
/// * `player` - Side to move
/// * `limit` - Keep only the first `limit` candidates
///
/// # Returns
/// Empty cells, each exactly once. Empty only when the board is full.
pub fn order_moves(board: &Board, player: Player, limit: Option<usize>) -> Vec<Pos> {
    let size = board.size();
    let empty = size * size - board.stone_count();
    let cap = limit.map_or(empty, |l| l.min(empty));
    let mut moves = Vec::with_capacity(cap);
    let mut seen = vec![false; size * size];
    let mut push = |moves: &mut Vec<Pos>, pos: Pos| {
        let idx = pos.row * size + pos.col;
        if !seen[idx] {
            seen[idx] = true;
            moves.push(pos);
        }
    };

    if board.stone_count() > 0 {
        let mut tiers: [Vec<Pos>; Threat::COUNT] = Default::default();
        for pos in board.empty_positions() {
            if let Some(threat) = classify(board, pos, player) {
                tiers[threat.rank()].push(pos);
            }
        }
        for pos in tiers.into_iter().flatten() {
            push(&mut moves, pos);
        }
    }

    let center = board.center();
    for pos in board.empty_positions() {
        if pos.chebyshev(center) <= CENTER_RADIUS {
            push(&mut moves, pos);
        }
    }

    for pos in board.empty_positions() {
        if has_neighbor(board, pos) {
            push(&mut moves, pos);
        }
    }

    for pos in board.empty_positions() {
        push(&mut moves, pos);
    }

    moves.truncate(cap);
    moves
}

#[inline]
fn has_neighbor(board: &Board, pos: Pos) -> bool {
    Direction::ALL
        .iter()
        .filter_map(|&dir| board.step(pos, dir, 1))
        .any(|p| !board.is_empty(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_board_covers_every_cell_once() {
        let board = Board::new(7);
        let moves = order_moves(&board, Player::One, None);
        assert_eq!(moves.len(), 49);
        let unique: HashSet<_> = moves.iter().collect();
        assert_eq!(unique.len(), 49);
        // Center tier comes first
        assert!(moves[..25].iter().all(|p| p.chebyshev(board.center()) <= CENTER_RADIUS));
    }

    #[test]
    fn test_occupied_cells_excluded() {
        let mut board = Board::new(9);
        board.place_stone(Pos::new(4, 4), Player::One);
        board.place_stone(Pos::new(0, 0), Player::Two);
        let moves = order_moves(&board, Player::Two, None);
        assert_eq!(moves.len(), 79);
        assert!(!moves.contains(&Pos::new(4, 4)));
        assert!(!moves.contains(&Pos::new(0, 0)));
    }

    #[test]
    fn test_winning_move_first() {
        let mut board = Board::new(19);
        for col in 3..7 {
            board.place_stone(Pos::new(0, col), Player::One);
        }
        // Opponent open four elsewhere; own win still comes first
        for col in 3..7 {
            board.place_stone(Pos::new(10, col), Player::Two);
        }
        let moves = order_moves(&board, Player::One, None);
        assert!(
            moves[0] == Pos::new(0, 2) || moves[0] == Pos::new(0, 7),
            "expected a winning cell first, got {:?}",
            moves[0]
        );
        assert_eq!(classify(&board, Pos::new(10, 2), Player::One), Some(Threat::BlockWin));
    }

    #[test]
    fn test_block_win_before_own_four() {
        let mut board = Board::new(19);
        for col in 5..9 {
            board.place_stone(Pos::new(3, col), Player::Two);
        }
        for col in 5..8 {
            board.place_stone(Pos::new(12, col), Player::One);
        }
        let moves = order_moves(&board, Player::One, None);
        assert_eq!(classify(&board, moves[0], Player::One), Some(Threat::BlockWin));
        assert!(moves[..2].contains(&Pos::new(3, 4)));
        assert!(moves[..2].contains(&Pos::new(3, 9)));
        assert_eq!(classify(&board, moves[2], Player::One), Some(Threat::Four));
    }

    #[test]
    fn test_capture_cell_prioritized() {
        let mut board = Board::new(19);
        board.place_stone(Pos::new(15, 15), Player::One);
        board.place_stone(Pos::new(15, 16), Player::Two);
        board.place_stone(Pos::new(15, 17), Player::Two);
        let moves = order_moves(&board, Player::One, None);
        assert_eq!(moves[0], Pos::new(15, 18));
        assert_eq!(classify(&board, Pos::new(15, 18), Player::Two), Some(Threat::BlockCapture));
    }

    #[test]
    fn test_neighbors_before_far_cells() {
        let mut board = Board::new(19);
        board.place_stone(Pos::new(0, 0), Player::One);
        let moves = order_moves(&board, Player::Two, None);
        let center_tier = 25;
        let neighbors = &moves[center_tier..center_tier + 3];
        for pos in [Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)] {
            assert!(neighbors.contains(&pos), "{:?} missing from neighbor tier {:?}", pos, neighbors);
        }
        // Remaining tier is row-major
        let rest = &moves[center_tier + 3..];
        assert!(rest.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_dead_four_does_not_hide_open_three() {
        let mut board = Board::new(11);
        // Row 5: O X X X _ O, dead four through the gap at (5, 5)
        board.place_stone(Pos::new(5, 1), Player::Two);
        for col in 2..5 {
            board.place_stone(Pos::new(5, col), Player::One);
        }
        board.place_stone(Pos::new(5, 6), Player::Two);
        // Column 5: open three through the same gap
        board.place_stone(Pos::new(6, 5), Player::One);
        board.place_stone(Pos::new(7, 5), Player::One);

        let gap = Pos::new(5, 5);
        assert_eq!(classify(&board, gap, Player::One), Some(Threat::OpenThree));
        let moves = order_moves(&board, Player::One, None);
        let tier_one = moves
            .iter()
            .take_while(|&&p| classify(&board, p, Player::One).is_some())
            .count();
        assert!(
            moves[..tier_one].contains(&gap),
            "{:?} should be in the tactical tier {:?}",
            gap,
            &moves[..tier_one]
        );
    }

    #[test]
    fn test_limit_truncates() {
        let board = Board::new(19);
        assert_eq!(order_moves(&board, Player::One, Some(5)).len(), 5);
        assert_eq!(order_moves(&Board::new(5), Player::One, Some(100)).len(), 25);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let mut board = Board::new(5);
        for pos in Board::new(5).positions() {
            board.place_stone(pos, Player::One);
        }
        assert!(order_moves(&board, Player::Two, None).is_empty());
    }
}
