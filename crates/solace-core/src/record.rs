//! The quote record held in a loaded corpus.
//!
//! Records are built once by a loader and never mutated afterwards. Matchers
//! hand out `&QuoteRecord` borrows into the loaded collection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable corpus entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Quote text.
    pub quote: String,
    /// Attributed author.
    pub author: String,
    /// Source book.
    pub book: String,
    /// Emotion tag. `None` excludes the record from lexical matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    /// Positive feedback counter.
    #[serde(default)]
    pub positive: u32,
    /// Negative feedback counter.
    #[serde(default)]
    pub negative: u32,
    /// Precomputed embedding. `None` excludes the record from vector matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl QuoteRecord {
    /// Create a record with no emotion tag, zero counters and no embedding.
    pub fn new(
        quote: impl Into<String>,
        author: impl Into<String>,
        book: impl Into<String>,
    ) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
            book: book.into(),
            emotion: None,
            positive: 0,
            negative: 0,
            embedding: None,
        }
    }

    /// Set the emotion tag.
    #[must_use]
    pub fn with_emotion(mut self, emotion: impl Into<String>) -> Self {
        self.emotion = Some(emotion.into());
        self
    }

    /// Set the sentiment counters.
    #[must_use]
    pub fn with_sentiment(mut self, positive: u32, negative: u32) -> Self {
        self.positive = positive;
        self.negative = negative;
        self
    }

    /// Set the embedding.
    #[must_use]
    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Net sentiment: `positive - negative`. May be negative.
    pub fn net_score(&self) -> i64 {
        i64::from(self.positive) - i64::from(self.negative)
    }

    /// The emotion tag, if present and not blank.
    pub fn emotion_tag(&self) -> Option<&str> {
        self.emotion.as_deref().filter(|e| !e.trim().is_empty())
    }

    /// The embedding as a slice, if present.
    pub fn embedding(&self) -> Option<&[f32]> {
        self.embedding.as_deref()
    }
}

impl fmt::Display for QuoteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"\n- {}, {}", self.quote, self.author, self.book)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
