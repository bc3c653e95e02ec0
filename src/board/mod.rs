//! Board representation for Pente

pub mod board;
pub mod placement;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;
pub use placement::Placement;

/// Default board size (19x19)
pub const BOARD_SIZE: usize = 19;
/// Smallest board that still fits a five-in-a-row
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest supported board. Keeps every evaluator bound far below the win score.
pub const MAX_BOARD_SIZE: usize = 64;

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Zero-based index, handy for per-player arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// 1 or 2, the numbering used when talking to a presentation layer
    #[inline]
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// Content of a single intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Player),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Owner of the stone, if any
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Stone(p) => Some(p),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev (king-move) distance
    #[inline]
    pub fn chebyshev(self, other: Pos) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major ordering
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// Unit step used for line and capture scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i32,
    pub dc: i32,
}

impl Direction {
    pub const EAST: Direction = Direction { dr: 0, dc: 1 };
    pub const SOUTH: Direction = Direction { dr: 1, dc: 0 };
    pub const SOUTH_EAST: Direction = Direction { dr: 1, dc: 1 };
    pub const SOUTH_WEST: Direction = Direction { dr: 1, dc: -1 };

    /// One direction per line orientation (horizontal, vertical, both diagonals)
    pub const AXES: [Direction; 4] = [
        Direction::EAST,
        Direction::SOUTH,
        Direction::SOUTH_EAST,
        Direction::SOUTH_WEST,
    ];

    /// All 8 unit vectors
    pub const ALL: [Direction; 8] = [
        Direction { dr: 0, dc: 1 },
        Direction { dr: 1, dc: 0 },
        Direction { dr: 1, dc: 1 },
        Direction { dr: -1, dc: 1 },
        Direction { dr: 0, dc: -1 },
        Direction { dr: -1, dc: 0 },
        Direction { dr: -1, dc: -1 },
        Direction { dr: 1, dc: -1 },
    ];

    #[inline]
    pub const fn reversed(self) -> Direction {
        Direction {
            dr: -self.dr,
            dc: -self.dc,
        }
    }
}
