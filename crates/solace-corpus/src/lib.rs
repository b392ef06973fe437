//! # solace-corpus
//!
//! Loads what the retrieval engine consumes, from JSON files on disk:
//!
//! - quote corpora (`quotes_with_embeddings`-style and `books_dataset`-style
//!   arrays) into [`QuoteRecord`](solace_core::QuoteRecord)s, with
//!   placeholders for missing text fields
//! - the user's query embedding (`{"embedding": [...]}`)
//! - extra alias tables (`{"alias": "canonical"}`)

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;

pub use errors::{CorpusError, Result};
pub use loader::{load_aliases, load_corpus, load_query_embedding, load_records, parse_records};
