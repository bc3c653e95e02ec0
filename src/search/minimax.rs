//! Depth-limited minimax with optional alpha-beta pruning
//!
//! One recursive routine serves both variants. Scores are always from the
//! searching player's point of view: that player's nodes maximize, the
//! opponent's nodes minimize. The pruning variant cuts siblings once
//! `beta <= alpha` and is fail-soft, so at the root it picks the same move
//! with the same score as plain minimax.
//!
//! # Features
//!
//! - Hypothetical moves go through [`Placement`], which restores the board
//!   (captured stones included) on every exit path
//! - Terminal detection only looks at lines through the last stone
//! - Wins are scored by distance, so shorter wins rank higher
//! - The deadline is checked between root candidates only

use std::time::Instant;

use crate::board::{Board, Placement, Player, Pos, MAX_BOARD_SIZE};
use crate::config::SearchVariant;
use crate::eval::Evaluator;
use crate::rules::win::{has_five_through, CAPTURES_TO_WIN};

use super::ordering::order_moves;

/// Score of a won position at ply 0. Above every evaluator bound for
/// supported boards; a win found `ply` moves deep scores `WIN_SCORE - ply`.
pub const WIN_SCORE: i64 = 1_000_000_000_000_000;

/// Window bound for alpha-beta, never returned as a score
const INF: i64 = i64::MAX;

/// Scores at or beyond this magnitude are decided games
pub const WIN_THRESHOLD: i64 = WIN_SCORE - (MAX_BOARD_SIZE * MAX_BOARD_SIZE) as i64;

/// True if `score` is a forced win or loss rather than a heuristic value
#[inline]
pub fn is_win_score(score: i64) -> bool {
    score.abs() >= WIN_THRESHOLD
}

/// Counters for diagnostics and for comparing the two variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, root children included
    pub nodes: u64,
    /// Sibling loops cut short by `beta <= alpha`
    pub cutoffs: u64,
    /// Static evaluations performed
    pub evaluations: u64,
}

/// Result of searching the root to one depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootResult {
    pub best_move: Option<Pos>,
    /// Score of `best_move`; meaningless when it is `None`
    pub score: i64,
    /// False when the deadline stopped the root loop early
    pub completed: bool,
}

/// Tree searcher bound to one evaluator and variant.
pub struct Searcher<'e> {
    evaluator: &'e dyn Evaluator,
    variant: SearchVariant,
    candidate_limit: Option<usize>,
    stats: SearchStats,
}

impl<'e> Searcher<'e> {
    pub fn new(evaluator: &'e dyn Evaluator, variant: SearchVariant, candidate_limit: Option<usize>) -> Self {
        Self {
            evaluator,
            variant,
            candidate_limit,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search every root candidate of `player` to `depth` plies.
    ///
    /// # Arguments
    /// * `board` - Position to search; restored before returning
    /// * `player` - Side to move and point of view of the score
    /// * `captures` - Pairs captured so far, indexed by [`Player::index`]
    /// * `depth` - Plies to search, at least 1
    /// * `deadline` - Checked before each root candidate after the first
    ///
    /// # Returns
    /// Best move and score. On timeout `completed` is false and the result
    /// only covers the candidates searched so far.
    pub fn search_root(
        &mut self,
        board: &mut Board,
        player: Player,
        captures: [u32; 2],
        depth: u32,
        deadline: Option<Instant>,
    ) -> RootResult {
        self.search_root_until(board, player, captures, depth, |_| {
            deadline.is_some_and(|d| Instant::now() >= d)
        })
    }

    /// [`search_root`](Self::search_root) with a caller-supplied stop check.
    ///
    /// `stop` receives the index of the next root candidate and is asked
    /// before every candidate after the first.
    pub fn search_root_until(
        &mut self,
        board: &mut Board,
        player: Player,
        captures: [u32; 2],
        depth: u32,
        mut stop: impl FnMut(usize) -> bool,
    ) -> RootResult {
        let depth = depth.max(1);
        let candidates = order_moves(board, player, self.candidate_limit);
        let mut best = RootResult {
            best_move: None,
            score: -INF,
            completed: true,
        };
        let mut alpha = -INF;

        for (i, &pos) in candidates.iter().enumerate() {
            if i > 0 && stop(i) {
                best.completed = false;
                break;
            }

            let score = self.child(board, pos, player, captures, depth, 1, alpha, INF, player);

            if score > best.score {
                best.score = score;
                best.best_move = Some(pos);
            }
            alpha = alpha.max(score);
        }

        if best.best_move.is_none() {
            // Full board
            best.score = 0;
        }
        best
    }

    /// Play `pos` for `mover` under a guard and score the resulting node.
    #[allow(clippy::too_many_arguments)]
    fn child(
        &mut self,
        board: &mut Board,
        pos: Pos,
        mover: Player,
        mut captures: [u32; 2],
        depth: u32,
        ply: u32,
        alpha: i64,
        beta: i64,
        root: Player,
    ) -> i64 {
        let mut placement = Placement::place_with_captures(board, pos, mover);
        captures[mover.index()] += placement.pairs() as u32;
        self.node(placement.board_mut(), pos, mover, captures, depth - 1, ply, alpha, beta, root)
    }

    /// Score the node reached by `mover` playing `last`.
    #[allow(clippy::too_many_arguments)]
    fn node(
        &mut self,
        board: &mut Board,
        last: Pos,
        mover: Player,
        captures: [u32; 2],
        depth: u32,
        ply: u32,
        mut alpha: i64,
        mut beta: i64,
        root: Player,
    ) -> i64 {
        self.stats.nodes += 1;

        // Only the last mover can have just won
        if has_five_through(board, last, mover) || captures[mover.index()] >= CAPTURES_TO_WIN {
            let score = WIN_SCORE - i64::from(ply);
            return if mover == root { score } else { -score };
        }

        if depth == 0 {
            self.stats.evaluations += 1;
            return self.evaluator.score(board, root);
        }

        let to_move = mover.opponent();
        let candidates = order_moves(board, to_move, self.candidate_limit);
        if candidates.is_empty() {
            // Full board without a winner
            return 0;
        }

        let maximizing = to_move == root;
        let mut best = if maximizing { -INF } else { INF };

        for pos in candidates {
            let score = self.child(board, pos, to_move, captures, depth, ply + 1, alpha, beta, root);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if self.variant == SearchVariant::AlphaBeta && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}
