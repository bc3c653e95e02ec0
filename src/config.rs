//! Search configuration
//!
//! Loaded from TOML, e.g.
//!
//! ```toml
//! variant = "alphabeta"
//! evaluator = "full"
//! max_depth = 3
//! time_limit_ms = 2000
//! candidate_limit = 16
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::error::ConfigError;

/// Tree search flavor. Both return the same value for the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchVariant {
    /// Plain minimax, visits every node
    Minimax,
    /// Minimax with alpha-beta pruning
    #[default]
    AlphaBeta,
}

impl FromStr for SearchVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(SearchVariant::Minimax),
            "alphabeta" | "alpha-beta" => Ok(SearchVariant::AlphaBeta),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for SearchVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchVariant::Minimax => "minimax",
            SearchVariant::AlphaBeta => "alphabeta",
        })
    }
}

/// Evaluator identifier, resolved by [`EvaluatorKind::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluatorKind {
    /// Line patterns only
    #[serde(alias = "easy")]
    Fast,
    /// Line patterns plus capture threats and center bonus
    #[default]
    Full,
}

impl FromStr for EvaluatorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fast" | "easy" => Ok(EvaluatorKind::Fast),
            "full" => Ok(EvaluatorKind::Full),
            _ => Err(ConfigError::UnknownEvaluator(s.to_string())),
        }
    }
}

impl fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EvaluatorKind::Fast => "fast",
            EvaluatorKind::Full => "full",
        })
    }
}

/// Parameters of one AI decision
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    #[serde(alias = "search_variant")]
    pub variant: SearchVariant,
    pub evaluator: EvaluatorKind,
    /// Deepest iterative-deepening iteration, at least 1
    pub max_depth: u32,
    /// Wall-clock budget, checked between root candidates
    #[serde(rename = "time_limit_ms", deserialize_with = "deserialize_millis")]
    pub time_limit: Duration,
    /// Candidates expanded per node, taken from the front of the
    /// prioritized order. `None` expands every empty cell.
    pub candidate_limit: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            variant: SearchVariant::AlphaBeta,
            evaluator: EvaluatorKind::Full,
            max_depth: 3,
            time_limit: Duration::from_secs(2),
            candidate_limit: Some(16),
        }
    }
}

fn deserialize_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
}

impl SearchConfig {
    /// Check the value ranges serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidDepth);
        }
        if self.time_limit.is_zero() {
            return Err(ConfigError::InvalidTimeLimit);
        }
        if self.candidate_limit == Some(0) {
            return Err(ConfigError::InvalidCandidateLimit);
        }
        Ok(())
    }

    /// Read and validate a TOML config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        contents.parse()
    }

    pub fn with_variant(mut self, variant: SearchVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn with_candidate_limit(mut self, limit: Option<usize>) -> Self {
        self.candidate_limit = limit;
        self
    }
}

/// Parse and validate TOML text. Missing fields take their defaults.
impl FromStr for SearchConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: SearchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
