//! Quote engine: owns the loaded corpus for a session and routes queries to
//! the vector or lexical matcher.
//!
//! Records are never mutated after construction. The tie-break generator is
//! seeded once per engine and guarded by a mutex, so concurrent queries get
//! independent draws.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use solace_core::QuoteRecord;
use tracing::debug;

use crate::errors::{MatchError, Result};
use crate::lexical;
use crate::normalize::EmotionNormalizer;
use crate::vector::{self, VectorMatch};

/// Composition root over a read-only quote collection.
pub struct QuoteEngine {
    records: Vec<QuoteRecord>,
    normalizer: EmotionNormalizer,
    rng: Mutex<StdRng>,
}

impl QuoteEngine {
    /// Create an engine whose tie-break generator is seeded from OS entropy.
    pub fn new(records: Vec<QuoteRecord>, normalizer: EmotionNormalizer) -> Self {
        Self::with_rng(records, normalizer, StdRng::from_os_rng())
    }

    /// Create an engine with a reproducible tie-break sequence.
    pub fn with_seed(records: Vec<QuoteRecord>, normalizer: EmotionNormalizer, seed: u64) -> Self {
        Self::with_rng(records, normalizer, StdRng::seed_from_u64(seed))
    }

    /// Create an engine with an explicit generator.
    pub fn with_rng(records: Vec<QuoteRecord>, normalizer: EmotionNormalizer, rng: StdRng) -> Self {
        debug!(
            records = records.len(),
            embedded = records.iter().filter(|r| r.embedding.is_some()).count(),
            tagged = records.iter().filter(|r| r.emotion_tag().is_some()).count(),
            "quote engine ready"
        );
        Self {
            records,
            normalizer,
            rng: Mutex::new(rng),
        }
    }

    /// The loaded records.
    pub fn records(&self) -> &[QuoteRecord] {
        &self.records
    }

    /// Number of loaded records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records eligible for vector matching.
    pub fn embedded_count(&self) -> usize {
        self.records.iter().filter(|r| r.embedding.is_some()).count()
    }

    /// Records eligible for lexical matching.
    pub fn tagged_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.emotion_tag().is_some())
            .count()
    }

    /// The emotion normalizer.
    pub fn normalizer(&self) -> &EmotionNormalizer {
        &self.normalizer
    }

    /// Best record by cosine similarity, or why there is none.
    pub fn try_match_by_vector(&self, query: &[f32]) -> Result<VectorMatch<&QuoteRecord>> {
        if query.is_empty() {
            return Err(MatchError::EmptyOrBlankInput);
        }
        let candidates = self
            .records
            .iter()
            .filter_map(|r| r.embedding().map(|e| (r, e)));
        vector::find_best(query, candidates)
    }

    /// Best record by cosine similarity.
    pub fn match_by_vector(&self, query: &[f32]) -> Option<VectorMatch<&QuoteRecord>> {
        self.try_match_by_vector(query)
            .inspect_err(|e| debug!(error = %e, "no vector match"))
            .ok()
    }

    /// Normalize `raw` and pick among the top lexical matches using the
    /// session generator.
    ///
    /// The scan runs without the generator lock; only the final draw takes it.
    pub fn try_match_by_emotion(&self, raw: &str) -> Result<&QuoteRecord> {
        let canonical = self.canonical_query(raw)?;
        let top = lexical::shortlist(&canonical, &self.records)?;
        let picked = top.pick(&mut *self.rng.lock());
        picked
            .map(|r| r.record)
            .ok_or(MatchError::NoMatchingEmotion(canonical))
    }

    /// Normalize `raw` and pick among the top lexical matches.
    pub fn match_by_emotion(&self, raw: &str) -> Option<&QuoteRecord> {
        self.try_match_by_emotion(raw)
            .inspect_err(|e| debug!(error = %e, "no emotion match"))
            .ok()
    }

    /// Like [`Self::try_match_by_emotion`] with a caller-supplied generator.
    pub fn match_by_emotion_with<R: Rng>(&self, raw: &str, rng: &mut R) -> Result<&QuoteRecord> {
        let canonical = self.canonical_query(raw)?;
        lexical::find_top(&canonical, &self.records, rng)
    }

    fn canonical_query(&self, raw: &str) -> Result<String> {
        let canonical = self.normalizer.normalize(raw);
        debug!(raw, canonical = %canonical, "normalized emotion");
        if canonical.is_empty() {
            return Err(MatchError::EmptyOrBlankInput);
        }
        Ok(canonical)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
