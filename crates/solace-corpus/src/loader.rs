//! JSON loaders for corpora, query embeddings and alias tables.
//!
//! Corpus entries are parsed one by one: a malformed entry is skipped with a
//! warning instead of failing the whole file. Missing `quote`, `author` and
//! `book` fields get placeholders; missing counters default to zero.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use solace_core::QuoteRecord;
use solace_core::constants::{PLACEHOLDER_AUTHOR, PLACEHOLDER_BOOK, PLACEHOLDER_QUOTE};
use tracing::{debug, info, warn};

use crate::errors::{CorpusError, Result};

/// One corpus entry as it appears on disk. Every field is optional.
#[derive(Debug, Default, Deserialize)]
struct RawQuote {
    quote: Option<String>,
    author: Option<String>,
    book: Option<String>,
    emotion: Option<String>,
    positive: Option<u32>,
    negative: Option<u32>,
    embedding: Option<Vec<f32>>,
}

impl RawQuote {
    fn has_placeholders(&self) -> bool {
        self.quote.is_none() || self.author.is_none() || self.book.is_none()
    }

    fn into_record(self) -> QuoteRecord {
        QuoteRecord {
            quote: self.quote.unwrap_or_else(|| PLACEHOLDER_QUOTE.to_string()),
            author: self.author.unwrap_or_else(|| PLACEHOLDER_AUTHOR.to_string()),
            book: self.book.unwrap_or_else(|| PLACEHOLDER_BOOK.to_string()),
            emotion: self.emotion,
            positive: self.positive.unwrap_or(0),
            negative: self.negative.unwrap_or(0),
            embedding: self.embedding,
        }
    }
}

#[derive(Deserialize)]
struct EmbeddingFile {
    embedding: Vec<f32>,
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CorpusError::NotFound(path.to_path_buf())
        } else {
            CorpusError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

fn json_error(path: &Path) -> impl FnOnce(serde_json::Error) -> CorpusError + '_ {
    move |source| CorpusError::Json {
        path: path.to_path_buf(),
        source,
    }
}

/// Parse corpus JSON. `origin` is only used in errors and logs.
pub fn parse_records(content: &str, origin: &Path) -> Result<Vec<QuoteRecord>> {
    let value: Value = serde_json::from_str(content).map_err(json_error(origin))?;
    let Value::Array(entries) = value else {
        return Err(CorpusError::NotAnArray(origin.to_path_buf()));
    };

    let mut records = Vec::with_capacity(entries.len());
    let mut defaulted = 0usize;
    for (index, entry) in entries.into_iter().enumerate() {
        match RawQuote::deserialize(entry) {
            Ok(raw) => {
                if raw.has_placeholders() {
                    defaulted += 1;
                }
                records.push(raw.into_record());
            }
            Err(e) => {
                warn!(
                    path = %origin.display(),
                    index,
                    error = %e,
                    "skipping malformed quote entry"
                );
            }
        }
    }

    if defaulted > 0 {
        warn!(
            path = %origin.display(),
            defaulted,
            "quote entries with missing fields got placeholders"
        );
    }
    Ok(records)
}

/// Load one corpus file.
pub fn load_records(path: &Path) -> Result<Vec<QuoteRecord>> {
    let content = read_file(path)?;
    let records = parse_records(&content, path)?;
    info!(path = %path.display(), records = records.len(), "corpus loaded");
    Ok(records)
}

/// Load and concatenate several corpus files, in order.
///
/// Missing files are skipped with a warning; any other failure is returned.
pub fn load_corpus<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<QuoteRecord>> {
    let mut all = Vec::new();
    for path in paths {
        match load_records(path.as_ref()) {
            Ok(mut records) => all.append(&mut records),
            Err(CorpusError::NotFound(missing)) => {
                warn!(path = %missing.display(), "corpus file missing, skipping");
            }
            Err(e) => return Err(e),
        }
    }
    debug!(records = all.len(), files = paths.len(), "corpus assembled");
    Ok(all)
}

/// Load the user's query embedding from `{"embedding": [...]}`.
pub fn load_query_embedding(path: &Path) -> Result<Vec<f32>> {
    let content = read_file(path)?;
    let file: EmbeddingFile = serde_json::from_str(&content).map_err(json_error(path))?;
    if file.embedding.is_empty() {
        return Err(CorpusError::EmptyEmbedding(PathBuf::from(path)));
    }
    debug!(path = %path.display(), dims = file.embedding.len(), "query embedding loaded");
    Ok(file.embedding)
}

/// Load an alias table from a JSON object of `alias -> canonical`.
pub fn load_aliases(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = read_file(path)?;
    let aliases: BTreeMap<String, String> =
        serde_json::from_str(&content).map_err(json_error(path))?;
    debug!(path = %path.display(), aliases = aliases.len(), "alias table loaded");
    Ok(aliases)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
