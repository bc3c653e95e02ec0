//! Search module for the Pente AI
//!
//! Contains:
//! - Move prioritization (tactical tiers, then proximity)
//! - Minimax search with an alpha-beta pruning variant

pub mod minimax;
pub mod ordering;

pub use minimax::{is_win_score, RootResult, SearchStats, Searcher, WIN_SCORE};
pub use ordering::{classify, order_moves, Threat};
