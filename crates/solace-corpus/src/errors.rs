//! Corpus loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading corpus, embedding or alias files.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The file does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading the file failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON of the expected shape.
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        /// File being parsed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// A corpus file whose top level is not an array.
    #[error("expected a JSON array of quotes in {}", .0.display())]
    NotAnArray(PathBuf),

    /// A query embedding file with no components.
    #[error("empty embedding in {}", .0.display())]
    EmptyEmbedding(PathBuf),
}

/// Result alias for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;
