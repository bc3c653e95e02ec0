//! AI controller driving iterative deepening
//!
//! The controller binds a player to a [`SearchConfig`] and answers "which
//! move?" for a live [`GameState`]. It searches depths `1..=max_depth` in
//! order and keeps the result of the deepest depth that finished before
//! the deadline:
//!
//! 1. Each completed depth replaces the recorded best move
//! 2. A depth cut short by the deadline is discarded, except depth 1,
//!    whose partial best is still better than nothing
//! 3. A forced win or loss ends the deepening early
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use pente::{AiController, GameState, Player, SearchConfig};
//!
//! let mut state = GameState::new(9).unwrap();
//! state.make_move(4, 4).unwrap();
//!
//! let config = SearchConfig::default()
//!     .with_depth(2)
//!     .with_time_limit(Duration::from_millis(500));
//! let ai = AiController::new(Player::Two, config);
//! let result = ai.get_move_with_stats(&mut state);
//! assert!(result.best_move.is_some());
//! ```

use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::{Player, Pos};
use crate::config::SearchConfig;
use crate::eval::Evaluator;
use crate::rules::GameState;
use crate::search::{is_win_score, SearchStats, Searcher};

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, `None` only on a full board
    pub best_move: Option<Pos>,
    /// Score of the best move from the controller's point of view
    pub score: i64,
    /// Deepest fully completed depth, 0 if even depth 1 was cut short
    pub depth: u32,
    /// Counters summed over every depth searched
    pub stats: SearchStats,
    pub elapsed: Duration,
    /// The deadline stopped the deepening
    pub timed_out: bool,
}

impl MoveResult {
    fn empty() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            stats: SearchStats::default(),
            elapsed: Duration::ZERO,
            timed_out: false,
        }
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.stats.nodes
    }
}

/// Search-based opponent for one side of the game.
pub struct AiController {
    player: Player,
    config: SearchConfig,
    evaluator: Box<dyn Evaluator>,
}

impl AiController {
    /// Build a controller for `player`. The evaluator named by
    /// `config.evaluator` is constructed once here.
    pub fn new(player: Player, config: SearchConfig) -> Self {
        let evaluator = config.evaluator.build();
        Self {
            player,
            config,
            evaluator,
        }
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the configuration, rebuilding the evaluator.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.evaluator = config.evaluator.build();
        self.config = config;
    }

    /// Best move for the controller's player, or `None` on a full board.
    /// The board is back in its original state when this returns.
    pub fn get_move(&self, state: &mut GameState) -> Option<Pos> {
        self.get_move_with_stats(state).best_move
    }

    /// Run iterative deepening and report the chosen move with statistics.
    pub fn get_move_with_stats(&self, state: &mut GameState) -> MoveResult {
        let deadline = Instant::now().checked_add(self.config.time_limit);
        self.deepen(state, |_, _| deadline.is_some_and(|d| Instant::now() >= d))
    }

    /// Iterative deepening driven by `stop(depth, candidate)`, asked before
    /// each depth after the first (with candidate 0) and before each root
    /// candidate after the first.
    fn deepen(&self, state: &mut GameState, mut stop: impl FnMut(u32, usize) -> bool) -> MoveResult {
        let start = Instant::now();
        let captures = state.capture_counts();
        let board = state.board_mut();

        let mut searcher = Searcher::new(
            self.evaluator.as_ref(),
            self.config.variant,
            self.config.candidate_limit,
        );
        let mut result = MoveResult::empty();

        for depth in 1..=self.config.max_depth.max(1) {
            if depth > 1 && stop(depth, 0) {
                result.timed_out = true;
                debug!(depth, "deadline reached before starting depth");
                break;
            }

            let root = searcher.search_root_until(board, self.player, captures, depth, |i| stop(depth, i));

            if !root.completed {
                result.timed_out = true;
                if depth == 1 {
                    result.best_move = root.best_move;
                    result.score = root.score;
                }
                debug!(depth, "deadline reached, partial depth discarded");
                break;
            }

            result.best_move = root.best_move;
            result.score = root.score;
            result.depth = depth;
            debug!(
                depth,
                score = root.score,
                best = ?root.best_move,
                nodes = searcher.stats().nodes,
                elapsed_ms = start.elapsed().as_millis() as u64,
                evaluator = self.evaluator.name(),
                variant = %self.config.variant,
                "depth complete"
            );

            if root.best_move.is_none() || is_win_score(root.score) {
                break;
            }
        }

        result.stats = searcher.stats();
        result.elapsed = start.elapsed();
        result
    }
}
