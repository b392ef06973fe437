//! # solace-settings
//!
//! Configuration with layered sources. In priority order:
//! 1. **Compiled defaults**: [`SolaceSettings::default()`]
//! 2. **User file**: `~/.solace/settings.json`, deep-merged over defaults
//! 3. **Environment variables**: `SOLACE_*` overrides (highest priority)

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::{CorpusSettings, LoggingSettings, MatchingSettings, SolaceSettings};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_exports_work() {
        let _settings = SolaceSettings::default();
        let _path = settings_path();
    }

    #[test]
    fn default_settings_are_valid() {
        let settings = SolaceSettings::default();
        assert_eq!(settings.corpus.quotes_path, "quotes_with_embeddings.json");
        assert_eq!(settings.corpus.books_path, "books_dataset.json");
        assert_eq!(settings.corpus.user_embedding_path, "user_embedding.json");
        assert!(settings.corpus.aliases_path.is_none());
        assert!(settings.matching.seed.is_none());
        assert!(settings.matching.aliases.is_empty());
        assert_eq!(settings.logging.level, "warn");
    }
}
