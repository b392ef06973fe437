//! Match error types.
//!
//! Nothing here is fatal. Every variant explains why a query produced no
//! match; the engine's `match_by_*` surface folds them into `None`.

use std::fmt;

use thiserror::Error;

/// Which retrieval path a query took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// Nearest neighbour over embeddings.
    Vector,
    /// Lexical match on the emotion tag.
    Emotion,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vector => f.write_str("vector"),
            Self::Emotion => f.write_str("emotion"),
        }
    }
}

/// Reasons a query produced no match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// No record is eligible for the requested mode.
    #[error("no records eligible for {mode} matching")]
    EmptyCorpus {
        /// The mode that had no candidates.
        mode: MatchMode,
    },

    /// Every candidate had a different dimensionality than the query.
    #[error("dimension mismatch: query has {expected} dimensions, {skipped} candidates skipped")]
    DimensionMismatch {
        /// Query dimensionality.
        expected: usize,
        /// Number of candidates excluded.
        skipped: usize,
    },

    /// Query was empty or whitespace only.
    #[error("empty or blank input")]
    EmptyOrBlankInput,

    /// Candidates existed but none satisfied the emotion predicate.
    #[error("no record matches emotion '{0}'")]
    NoMatchingEmotion(String),
}

/// Result alias for match operations.
pub type Result<T> = std::result::Result<T, MatchError>;
