//! Position evaluation module

pub mod heuristic;
pub mod patterns;

pub use heuristic::{Evaluator, PatternEvaluator, Profile};
pub use patterns::{PatternWeights, Shape, Weight};
