//! Pente rule engine and search-based AI
//!
//! Rules implemented:
//! - N×N board (default 19x19), players alternate placing stones
//! - 5-in-a-row to win (overlines allowed), in any of the four orientations
//! - Pair capture: X-O-O-X removes the O-O pair, in all eight directions
//! - Capture win: 5 captured pairs
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation and scoped hypothetical placement
//! - [`rules`]: Game rules (capture, win) and the live [`GameState`]
//! - [`eval`]: Static evaluation behind the [`Evaluator`] trait
//! - [`search`]: Move prioritization and minimax / alpha-beta search
//! - [`engine`]: AI controller running iterative deepening under a deadline
//! - [`config`]: Search configuration, loadable from TOML
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use pente::{get_best_move, make_move, new_game, Player, SearchConfig};
//!
//! let mut game = new_game(9).unwrap();
//! make_move(&mut game, 4, 4).unwrap();
//!
//! let config = SearchConfig::default()
//!     .with_depth(2)
//!     .with_time_limit(Duration::from_millis(500));
//! if let Some(pos) = get_best_move(&mut game, Player::Two, &config) {
//!     make_move(&mut game, pos.row as i32, pos.col as i32).unwrap();
//! }
//! assert_eq!(game.current_player(), Player::One);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Direction, Player, Pos, BOARD_SIZE};
pub use config::{EvaluatorKind, SearchConfig, SearchVariant};
pub use engine::{AiController, MoveResult};
pub use error::{BoardSizeError, ConfigError, InvalidMove};
pub use eval::{Evaluator, PatternEvaluator};
pub use rules::{GameState, Outcome};
pub use search::{SearchStats, WIN_SCORE};

/// Start a game on an empty `board_size`×`board_size` board, player one to move.
pub fn new_game(board_size: usize) -> Result<GameState, BoardSizeError> {
    GameState::new(board_size)
}

/// True iff `(row, col)` is on the board and empty.
#[inline]
pub fn is_valid_move(state: &GameState, row: i32, col: i32) -> bool {
    state.is_valid_move(row, col)
}

/// Play the current player's stone. Returns the number of pairs captured.
#[inline]
pub fn make_move(state: &mut GameState, row: i32, col: i32) -> Result<usize, InvalidMove> {
    state.make_move(row, col)
}

/// Winner by five in a row or five captured pairs, if any.
#[inline]
pub fn check_win(state: &GameState) -> Option<Player> {
    state.check_win()
}

/// Choose a move for `player`. `None` only when the board is full.
///
/// The board is mutated during the search and restored before returning.
pub fn get_best_move(state: &mut GameState, player: Player, config: &SearchConfig) -> Option<Pos> {
    AiController::new(player, config.clone()).get_move(state)
}
