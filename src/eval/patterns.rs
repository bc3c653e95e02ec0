//! Line templates and their weights
//!
//! Every template is matched against board lines padded with off-board
//! walls, so a run touching the edge counts as blocked on that side.

use crate::rules::pattern::Expect::{Blocked as B, Empty as E, Own as P};
use crate::rules::pattern::Pattern;

/// Threat shapes scored by the evaluator, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    OpenTwo,
    BlockedThree,
    OpenThree,
    BlockedFour,
    OpenFour,
    Five,
}

impl Shape {
    pub const ALL: [Shape; 6] = [
        Shape::OpenTwo,
        Shape::BlockedThree,
        Shape::OpenThree,
        Shape::BlockedFour,
        Shape::OpenFour,
        Shape::Five,
    ];
}

/// Every template with the shape it represents.
/// Flanks are never `Own`, so a run matches at most one shape.
pub const TEMPLATES: [(Shape, Pattern); 8] = [
    (Shape::Five, Pattern::new(&[P, P, P, P, P])),
    (Shape::OpenFour, Pattern::new(&[E, P, P, P, P, E])),
    (Shape::BlockedFour, Pattern::new(&[B, P, P, P, P, E])),
    (Shape::BlockedFour, Pattern::new(&[E, P, P, P, P, B])),
    (Shape::OpenThree, Pattern::new(&[E, P, P, P, E])),
    (Shape::BlockedThree, Pattern::new(&[B, P, P, P, E])),
    (Shape::BlockedThree, Pattern::new(&[E, P, P, P, B])),
    (Shape::OpenTwo, Pattern::new(&[E, P, P, E])),
];

/// Value of one shape: `offense` when it belongs to the evaluated
/// player, `defense` (subtracted) when it belongs to the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weight {
    pub offense: i64,
    pub defense: i64,
}

impl Weight {
    pub const fn new(offense: i64, defense: i64) -> Self {
        Self { offense, defense }
    }

    #[inline]
    fn both(self) -> i64 {
        self.offense + self.defense
    }
}

/// Scoring table owned by an evaluator instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternWeights {
    pub five: Weight,
    pub open_four: Weight,
    pub blocked_four: Weight,
    pub open_three: Weight,
    pub blocked_three: Weight,
    pub open_two: Weight,
    /// Per empty cell and direction where a move captures next turn
    pub capture_threat: i64,
    /// Per stone, per step of closeness to the center
    pub position: i64,
}

impl Default for PatternWeights {
    fn default() -> Self {
        Self {
            five: Weight::new(10_000_000_000, 10_000_000_000),
            open_four: Weight::new(50_000, 60_000),
            blocked_four: Weight::new(10_000, 12_000),
            open_three: Weight::new(5_000, 6_000),
            blocked_three: Weight::new(500, 600),
            open_two: Weight::new(100, 100),
            capture_threat: 8_000,
            position: 3,
        }
    }
}

impl PatternWeights {
    #[inline]
    pub fn weight(&self, shape: Shape) -> Weight {
        match shape {
            Shape::Five => self.five,
            Shape::OpenFour => self.open_four,
            Shape::BlockedFour => self.blocked_four,
            Shape::OpenThree => self.open_three,
            Shape::BlockedThree => self.blocked_three,
            Shape::OpenTwo => self.open_two,
        }
    }

    /// Upper bound on every term except five-in-a-row, for either player,
    /// on a `size`×`size` board.
    pub fn lesser_bound(&self, size: usize) -> i64 {
        let lines: i64 = TEMPLATES
            .iter()
            .filter(|(shape, _)| *shape != Shape::Five)
            .map(|&(shape, _)| self.weight(shape).both())
            .sum();
        let cells = (size * size) as i64;
        let radius = (size / 2 + 1) as i64;
        max_windows(size) * lines
            + 8 * cells * self.capture_threat * 2
            + cells * radius * self.position * 2
    }

    /// Upper bound on the absolute value of any score on a `size`×`size` board
    pub fn max_total(&self, size: usize) -> i64 {
        self.lesser_bound(size) + max_windows(size) * self.five.both()
    }
}

/// Upper bound on the windows one template can match on a board:
/// 4N² cells over all orientations plus two walls for each of the 6N-2 lines.
#[inline]
pub fn max_windows(size: usize) -> i64 {
    let n = size as i64;
    4 * n * n + 12 * n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MAX_BOARD_SIZE;

    #[test]
    fn test_weight_hierarchy() {
        let w = PatternWeights::default();
        let order = Shape::ALL.map(|s| w.weight(s));
        for pair in order.windows(2) {
            assert!(pair[0].offense < pair[1].offense, "offense not increasing: {:?}", pair);
            assert!(pair[0].defense <= pair[1].defense, "defense not increasing: {:?}", pair);
        }
    }

    #[test]
    fn test_defense_outweighs_offense_for_threes_and_fours() {
        let w = PatternWeights::default();
        for shape in [Shape::BlockedThree, Shape::OpenThree, Shape::BlockedFour, Shape::OpenFour] {
            let weight = w.weight(shape);
            assert!(weight.defense > weight.offense, "{:?}: {:?}", shape, weight);
        }
    }

    #[test]
    fn test_capture_threat_between_three_and_four() {
        let w = PatternWeights::default();
        assert!(w.capture_threat > w.open_three.defense);
        assert!(w.capture_threat < w.blocked_four.offense);
    }

    #[test]
    fn test_five_dominates_lesser_terms() {
        let w = PatternWeights::default();
        for size in [5, 19, MAX_BOARD_SIZE] {
            assert!(
                w.lesser_bound(size) < w.five.offense,
                "size {}: lesser {} vs five {}",
                size,
                w.lesser_bound(size),
                w.five.offense
            );
        }
    }

    #[test]
    fn test_templates_cover_every_shape() {
        for shape in Shape::ALL {
            assert!(TEMPLATES.iter().any(|(s, _)| *s == shape), "{:?} has no template", shape);
        }
    }
}
