//! Canonical emotion vocabulary and the alias table that maps free-text
//! emotion words onto it.
//!
//! Both are built once at startup and are read-only afterwards. There is no
//! removal API.

use std::collections::{HashMap, HashSet};

/// Trim and lower-case an emotion token.
pub fn clean_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Built-in canonical emotion tokens.
pub const BUILTIN_CANONICAL: &[&str] = &[
    "joy",
    "sadness",
    "anger",
    "fear",
    "anxiety",
    "love",
    "hope",
    "grief",
    "loneliness",
    "gratitude",
    "calm",
    "stress",
    "shame",
    "guilt",
    "surprise",
    "disgust",
    "confusion",
    "boredom",
];

/// Built-in aliases (free-text word, canonical token).
pub const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("happy", "joy"),
    ("happiness", "joy"),
    ("glad", "joy"),
    ("joyful", "joy"),
    ("cheerful", "joy"),
    ("sad", "sadness"),
    ("unhappy", "sadness"),
    ("down", "sadness"),
    ("depressed", "sadness"),
    ("melancholy", "sadness"),
    ("angry", "anger"),
    ("mad", "anger"),
    ("furious", "anger"),
    ("irritated", "anger"),
    ("rage", "anger"),
    ("afraid", "fear"),
    ("scared", "fear"),
    ("frightened", "fear"),
    ("terrified", "fear"),
    ("anxious", "anxiety"),
    ("nervous", "anxiety"),
    ("worried", "anxiety"),
    ("worry", "anxiety"),
    ("panic", "anxiety"),
    ("loving", "love"),
    ("affection", "love"),
    ("hopeful", "hope"),
    ("optimistic", "hope"),
    ("grieving", "grief"),
    ("mourning", "grief"),
    ("heartbroken", "grief"),
    ("lonely", "loneliness"),
    ("alone", "loneliness"),
    ("isolated", "loneliness"),
    ("grateful", "gratitude"),
    ("thankful", "gratitude"),
    ("relaxed", "calm"),
    ("peaceful", "calm"),
    ("serene", "calm"),
    ("stressed", "stress"),
    ("overwhelmed", "stress"),
    ("ashamed", "shame"),
    ("embarrassed", "shame"),
    ("guilty", "guilt"),
    ("surprised", "surprise"),
    ("shocked", "surprise"),
    ("disgusted", "disgust"),
    ("confused", "confusion"),
    ("lost", "confusion"),
    ("bored", "boredom"),
];

/// The set of recognized canonical emotion tokens.
///
/// Informational only: an unknown token still participates in lexical
/// matching on its raw form.
#[derive(Clone, Debug, Default)]
pub struct CanonicalVocabulary {
    tokens: HashSet<String>,
}

impl CanonicalVocabulary {
    /// Build from arbitrary tokens (cleaned on insert).
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|t| clean_token(t.as_ref()))
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// The built-in vocabulary.
    pub fn builtin() -> Self {
        Self::from_tokens(BUILTIN_CANONICAL)
    }

    /// Whether `token` (already cleaned) is canonical.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Number of canonical tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Many-to-one mapping from free-text token to canonical token.
#[derive(Clone, Debug, Default)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// Build from `(alias, canonical)` pairs. Keys and values are cleaned;
    /// pairs with a blank side are dropped; later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::default().extended(pairs)
    }

    /// The built-in table: every builtin alias plus each canonical token
    /// mapped to itself.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_CANONICAL.iter().map(|c| (*c, *c)))
            .extended(BUILTIN_ALIASES.iter().copied())
    }

    /// Merge additional pairs over this table, consuming it.
    #[must_use]
    pub fn extended<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (alias, canonical) in pairs {
            let alias = clean_token(alias.as_ref());
            let canonical = clean_token(canonical.as_ref());
            if alias.is_empty() || canonical.is_empty() {
                continue;
            }
            let _ = self.entries.insert(alias, canonical);
        }
        self
    }

    /// Look up an already-cleaned token.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    /// Number of aliases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
