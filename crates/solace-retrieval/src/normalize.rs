//! Emotion label normalization.
//!
//! Trim, lower-case, then look the token up in the alias table. Unknown
//! tokens fall back to themselves, so an unrecognized emotion degrades to
//! raw-token matching instead of failing.

use std::sync::Arc;

use crate::vocabulary::{AliasTable, CanonicalVocabulary, clean_token};

/// Canonicalizes raw emotion text against a fixed alias table.
#[derive(Clone, Debug)]
pub struct EmotionNormalizer {
    aliases: Arc<AliasTable>,
    vocabulary: Arc<CanonicalVocabulary>,
}

impl EmotionNormalizer {
    /// Create a normalizer over shared tables.
    pub fn new(aliases: Arc<AliasTable>, vocabulary: Arc<CanonicalVocabulary>) -> Self {
        Self {
            aliases,
            vocabulary,
        }
    }

    /// Normalizer over the built-in alias table and vocabulary.
    pub fn builtin() -> Self {
        Self::new(
            Arc::new(AliasTable::builtin()),
            Arc::new(CanonicalVocabulary::builtin()),
        )
    }

    /// Canonical token for `raw`, or the cleaned input when unknown.
    pub fn normalize(&self, raw: &str) -> String {
        let cleaned = clean_token(raw);
        match self.aliases.get(&cleaned) {
            Some(canonical) => canonical.to_owned(),
            None => cleaned,
        }
    }

    /// True iff `normalize(raw)` is non-empty.
    ///
    /// Only guards against blank input; unknown emotions are still valid.
    pub fn is_valid(&self, raw: &str) -> bool {
        !self.normalize(raw).is_empty()
    }

    /// Whether `raw` normalizes to a member of the canonical vocabulary.
    pub fn is_canonical(&self, raw: &str) -> bool {
        self.vocabulary.contains(&self.normalize(raw))
    }

    /// The alias table.
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// The canonical vocabulary.
    pub fn vocabulary(&self) -> &CanonicalVocabulary {
        &self.vocabulary
    }
}

impl Default for EmotionNormalizer {
    fn default() -> Self {
        Self::builtin()
    }
}
