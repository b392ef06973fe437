//! # solace-retrieval
//!
//! Quote retrieval and ranking: match a user's emotional state to one quote.
//!
//! Two independent paths:
//! - **Vector**: query embedding -> [`vector::find_best`] (cosine similarity,
//!   first maximum wins)
//! - **Emotion**: free text -> [`EmotionNormalizer`] -> [`lexical::find_top`]
//!   (tag match, net-sentiment top-3, uniform random pick)
//!
//! [`QuoteEngine`] owns the corpus for a session and exposes both paths.
//! Every failure is a "no match", never a panic.

#![deny(unsafe_code)]

pub mod engine;
pub mod errors;
pub mod lexical;
pub mod normalize;
pub mod similarity;
pub mod vector;
pub mod vocabulary;

pub use engine::QuoteEngine;
pub use errors::{MatchError, MatchMode, Result};
pub use lexical::{Ranked, TOP_K, TopMatches, emotion_matches, find_top, shortlist};
pub use normalize::EmotionNormalizer;
pub use similarity::{SIMILARITY_EPSILON, cosine_similarity, l2_norm};
pub use vector::{VectorMatch, find_best};
pub use vocabulary::{AliasTable, CanonicalVocabulary, clean_token};
