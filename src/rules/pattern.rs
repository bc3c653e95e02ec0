//! Fixed-length cell patterns matched along a direction
//!
//! The same matcher drives capture detection, capture-threat scoring and
//! the line templates of the evaluator. Off-board cells never raise; they
//! only satisfy [`Expect::Blocked`].

use crate::board::{Board, Cell, Direction, Player, Pos};

/// Expected content of one pattern cell, relative to a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    Empty,
    Own,
    Opponent,
    /// Opponent stone or board edge
    Blocked,
}

impl Expect {
    /// Does `slot` satisfy this expectation? `None` is off the board.
    #[inline]
    pub fn accepts(self, slot: Option<Cell>, player: Player) -> bool {
        match (self, slot) {
            (Expect::Empty, Some(Cell::Empty)) => true,
            (Expect::Own, Some(Cell::Stone(p))) => p == player,
            (Expect::Opponent, Some(Cell::Stone(p))) => p != player,
            (Expect::Blocked, None) => true,
            (Expect::Blocked, Some(Cell::Stone(p))) => p != player,
            _ => false,
        }
    }
}

/// Ordered sequence of expectations, index 0 at the anchor cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    cells: &'static [Expect],
}

impl Pattern {
    pub const fn new(cells: &'static [Expect]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Match with index 0 at `anchor`, stepping along `dir`.
    pub fn matches_at(&self, board: &Board, anchor: Pos, dir: Direction, player: Player) -> bool {
        self.cells.iter().enumerate().all(|(k, expect)| {
            let slot = board.step(anchor, dir, k as i32).map(|p| board.get(p));
            expect.accepts(slot, player)
        })
    }

    /// Count every window of `line` that matches. `line` is a full board
    /// line padded with `None` at both ends (see [`board_lines`]).
    pub fn count_in(&self, line: &[Option<Cell>], player: Player) -> usize {
        if line.len() < self.cells.len() {
            return 0;
        }
        line.windows(self.cells.len())
            .filter(|window| {
                window
                    .iter()
                    .zip(self.cells)
                    .all(|(&slot, expect)| expect.accepts(slot, player))
            })
            .count()
    }
}

/// `P O O P` anchored at the capturing stone
pub const CAPTURE: Pattern = Pattern::new(&[Expect::Own, Expect::Opponent, Expect::Opponent, Expect::Own]);

/// `_ O O P` anchored at the empty landing cell: playing there captures
pub const CAPTURE_LANDING: Pattern =
    Pattern::new(&[Expect::Empty, Expect::Opponent, Expect::Opponent, Expect::Own]);

/// Five in a row
pub const FIVE: Pattern = Pattern::new(&[Expect::Own; 5]);

/// Every full line of the board in the four orientations, each padded
/// with one off-board slot on both ends.
pub fn board_lines(board: &Board) -> Vec<Vec<Option<Cell>>> {
    let mut lines = Vec::with_capacity(board.size() * 6);
    for dir in Direction::AXES {
        for start in board.positions() {
            // Only start where the previous cell is off the board
            if board.step(start, dir, -1).is_some() {
                continue;
            }
            let mut line = Vec::with_capacity(board.size() + 2);
            line.push(None);
            let mut cursor = Some(start);
            while let Some(pos) = cursor {
                line.push(Some(board.get(pos)));
                cursor = board.step(pos, dir, 1);
            }
            line.push(None);
            lines.push(line);
        }
    }
    lines
}
