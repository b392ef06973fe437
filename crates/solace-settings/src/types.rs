//! Settings type definitions.
//!
//! camelCase on the wire; every struct is `#[serde(default)]` so partial
//! JSON fills in from [`Default`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use solace_core::logging::DEFAULT_LEVEL;

/// Root settings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolaceSettings {
    /// Corpus file locations.
    pub corpus: CorpusSettings,
    /// Matching behaviour.
    pub matching: MatchingSettings,
    /// Logging.
    pub logging: LoggingSettings,
}

/// Where the corpora and the query embedding live.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CorpusSettings {
    /// Corpus with precomputed embeddings.
    pub quotes_path: String,
    /// Corpus with emotion tags and sentiment counters.
    pub books_path: String,
    /// JSON file holding the user's query embedding.
    pub user_embedding_path: String,
    /// Optional JSON object of extra aliases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases_path: Option<String>,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            quotes_path: "quotes_with_embeddings.json".to_string(),
            books_path: "books_dataset.json".to_string(),
            user_embedding_path: "user_embedding.json".to_string(),
            aliases_path: None,
        }
    }
}

/// Matching behaviour.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchingSettings {
    /// Seed for the tie-break generator. `None` seeds from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Extra aliases merged over the built-in table.
    pub aliases: BTreeMap<String, String>,
}

/// Logging configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_camel_case() {
        let value = serde_json::to_value(SolaceSettings::default()).unwrap();
        assert!(value["corpus"].get("quotesPath").is_some());
        assert!(value["corpus"].get("userEmbeddingPath").is_some());
        assert!(value["corpus"].get("quotes_path").is_none());
        assert!(value["corpus"].get("aliasesPath").is_none());
        assert!(value["matching"].get("seed").is_none());
    }

    #[test]
    fn partial_json_with_defaults() {
        let json = r#"{"matching": {"seed": 7}}"#;
        let settings: SolaceSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.matching.seed, Some(7));
        assert_eq!(settings.corpus.books_path, "books_dataset.json");
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn aliases_deserialize() {
        let json = r#"{"matching": {"aliases": {"blue": "sadness"}}}"#;
        let settings: SolaceSettings = serde_json::from_str(json).unwrap();
        assert_eq!(
            settings.matching.aliases.get("blue").map(String::as_str),
            Some("sadness")
        );
    }
}
