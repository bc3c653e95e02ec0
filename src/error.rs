//! Error types

use std::path::PathBuf;

use thiserror::Error;

use crate::board::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// A rejected move. Recoverable: the game state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: usize },
    #[error("({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },
}

/// Requested board size cannot hold a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("board size {0} is outside the supported range {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}")]
pub struct BoardSizeError(pub usize);

/// Problems loading or validating a [`SearchConfig`](crate::config::SearchConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    #[error("max_depth must be at least 1")]
    InvalidDepth,
    #[error("time_limit must be greater than zero")]
    InvalidTimeLimit,
    #[error("candidate_limit must be at least 1 when set")]
    InvalidCandidateLimit,
    #[error("unknown search variant `{0}` (expected minimax or alphabeta)")]
    UnknownVariant(String),
    #[error("unknown evaluator `{0}` (expected fast or full)")]
    UnknownEvaluator(String),
}
