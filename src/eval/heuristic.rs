//! Heuristic evaluation of board positions
//!
//! This module provides the static evaluation used at search leaves.
//! It scores board positions based on:
//! - Line patterns (fives, fours, threes, twos) for both players
//! - Capture threats (one move from a custodian capture)
//! - Positional bonuses (center control)
//!
//! Evaluators are plain values owning their weight table. The search only
//! sees the [`Evaluator`] trait and never branches on which profile it got.

use crate::board::{Board, Cell, Direction, Player};
use crate::config::EvaluatorKind;
use crate::rules::pattern::{board_lines, CAPTURE_LANDING};

use super::patterns::{PatternWeights, TEMPLATES};

/// Static scoring capability handed to the search.
pub trait Evaluator {
    /// Score `board` from `player`'s point of view. Higher favors `player`.
    fn score(&self, board: &Board, player: Player) -> i64;

    /// Upper bound on `|score|` for any board of this size.
    /// Win scores in the search must stay above it.
    fn score_bound(&self, size: usize) -> i64;

    /// Short identifier for logs
    fn name(&self) -> &'static str;
}

/// Which terms a [`PatternEvaluator`] adds up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Line patterns only
    Fast,
    /// Line patterns, capture threats and center bonus
    Full,
}

/// Template-sliding evaluator
#[derive(Debug, Clone)]
pub struct PatternEvaluator {
    weights: PatternWeights,
    profile: Profile,
}

impl PatternEvaluator {
    pub fn new(weights: PatternWeights, profile: Profile) -> Self {
        Self { weights, profile }
    }

    pub fn fast() -> Self {
        Self::new(PatternWeights::default(), Profile::Fast)
    }

    pub fn full() -> Self {
        Self::new(PatternWeights::default(), Profile::Full)
    }

    #[inline]
    pub fn weights(&self) -> &PatternWeights {
        &self.weights
    }

    #[inline]
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Offensive line score for `player` minus defensive score for the opponent.
    fn line_score(&self, board: &Board, player: Player) -> i64 {
        let opponent = player.opponent();
        let mut score = 0;

        for line in board_lines(board) {
            // Skip lines without stones
            if line.iter().all(|slot| !matches!(slot, Some(Cell::Stone(_)))) {
                continue;
            }
            for (shape, pattern) in &TEMPLATES {
                let weight = self.weights.weight(*shape);
                let own = pattern.count_in(&line, player) as i64;
                let theirs = pattern.count_in(&line, opponent) as i64;
                score += own * weight.offense - theirs * weight.defense;
            }
        }

        score
    }

    /// Empty landing cells, counted per direction, where `player` captures
    /// a pair by moving there.
    fn capture_threats(&self, board: &Board, player: Player) -> i64 {
        let mut threats = 0;
        for pos in board.empty_positions() {
            for dir in Direction::ALL {
                if CAPTURE_LANDING.matches_at(board, pos, dir, player) {
                    threats += 1;
                }
            }
        }
        threats
    }

    /// Center bonus for `player`'s stones, decaying with Chebyshev distance.
    fn position_score(&self, board: &Board, player: Player) -> i64 {
        let center = board.center();
        let radius = board.size() / 2 + 1;
        board
            .stones(player)
            .map(|pos| radius.saturating_sub(pos.chebyshev(center)) as i64)
            .sum::<i64>()
            * self.weights.position
    }
}

impl Evaluator for PatternEvaluator {
    fn score(&self, board: &Board, player: Player) -> i64 {
        let mut score = self.line_score(board, player);

        if self.profile == Profile::Full {
            let opponent = player.opponent();
            let threats = self.capture_threats(board, player) - self.capture_threats(board, opponent);
            score += threats * self.weights.capture_threat;
            score += self.position_score(board, player) - self.position_score(board, opponent);
        }

        score
    }

    fn score_bound(&self, size: usize) -> i64 {
        self.weights.max_total(size)
    }

    fn name(&self) -> &'static str {
        match self.profile {
            Profile::Fast => "fast",
            Profile::Full => "full",
        }
    }
}

impl EvaluatorKind {
    /// Build the evaluator this identifier names.
    pub fn build(self) -> Box<dyn Evaluator> {
        match self {
            EvaluatorKind::Fast => Box::new(PatternEvaluator::fast()),
            EvaluatorKind::Full => Box::new(PatternEvaluator::full()),
        }
    }
}
