//! N×N board with explicit bounds guards

use std::fmt;

use super::{Cell, Direction, Player, Pos};

/// Game board. Holds only stones; capture counts live in
/// [`GameState`](crate::rules::GameState).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Size validation is the caller's job
    /// (see [`GameState::new`](crate::rules::GameState::new)).
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Center intersection
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.size / 2, self.size / 2)
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        pos.row * self.size + pos.col
    }

    /// Convert signed coordinates into a position, if on the board
    #[inline]
    pub fn pos(&self, row: i32, col: i32) -> Option<Pos> {
        let size = self.size as i32;
        if row >= 0 && row < size && col >= 0 && col < size {
            Some(Pos::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Position `steps` cells away from `pos` along `dir`, if still on the board
    #[inline]
    pub fn step(&self, pos: Pos, dir: Direction, steps: i32) -> Option<Pos> {
        self.pos(
            pos.row as i32 + dir.dr * steps,
            pos.col as i32 + dir.dc * steps,
        )
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Cell at signed coordinates; `None` when off the board
    #[inline]
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        self.pos(row, col).map(|p| self.get(p))
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Overwrite a cell (no capture processing)
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// Place a stone (no capture processing).
    /// Use [`GameState::make_move`](crate::rules::GameState::make_move) for game moves.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, player: Player) {
        self.set(pos, Cell::Stone(player));
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.set(pos, Cell::Empty);
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        (0..size * size).map(move |i| Pos::new(i / size, i % size))
    }

    /// Empty positions in row-major order
    pub fn empty_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&p| self.is_empty(p))
    }

    /// Positions holding a stone of `player`
    pub fn stones(&self, player: Player) -> impl Iterator<Item = Pos> + '_ {
        self.positions()
            .filter(move |&p| self.get(p) == Cell::Stone(player))
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}

/// Plain-text rendering: `.` empty, `X` player one, `O` player two.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{:>3}", row)?;
            for col in 0..self.size {
                let ch = match self.get(Pos::new(row, col)) {
                    Cell::Empty => '.',
                    Cell::Stone(Player::One) => 'X',
                    Cell::Stone(Player::Two) => 'O',
                };
                write!(f, "{:>3}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
