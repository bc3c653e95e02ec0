//! Scoped stone placement for hypothetical moves
//!
//! A [`Placement`] puts a stone on a borrowed board and, when dropped,
//! puts back exactly what was there before: the placed cell and every
//! stone removed by captures. Search code never has to remember to undo.

use super::{Board, Cell, Player, Pos};
use crate::rules::capture::captured_positions;

/// Guard over a hypothetical placement. Restores the board on drop.
#[derive(Debug)]
pub struct Placement<'a> {
    board: &'a mut Board,
    pos: Pos,
    previous: Cell,
    player: Player,
    /// Opponent stones removed by the placement (always pairs)
    captured: Vec<Pos>,
}

impl<'a> Placement<'a> {
    /// Place a stone without capture processing.
    pub fn place(board: &'a mut Board, pos: Pos, player: Player) -> Self {
        let previous = board.get(pos);
        board.place_stone(pos, player);
        Self {
            board,
            pos,
            previous,
            player,
            captured: Vec::new(),
        }
    }

    /// Place a stone and resolve custodian captures like a real move would.
    pub fn place_with_captures(board: &'a mut Board, pos: Pos, player: Player) -> Self {
        let mut placement = Self::place(board, pos, player);
        let captured = captured_positions(placement.board, pos, player);
        for &cap in &captured {
            placement.board.remove_stone(cap);
        }
        placement.captured = captured;
        placement
    }

    /// Position of the placed stone
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Number of pairs captured by this placement
    #[inline]
    pub fn pairs(&self) -> usize {
        self.captured.len() / 2
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.board
    }

    /// Mutable access for nesting further placements. Nested guards must be
    /// dropped before this one, which the borrow checker enforces.
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        let opponent = self.player.opponent();
        for &cap in &self.captured {
            self.board.place_stone(cap, opponent);
        }
        self.board.set(self.pos, self.previous);
    }
}
