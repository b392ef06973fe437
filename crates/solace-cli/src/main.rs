//! # solace
//!
//! Command line front end: loads settings and corpora, builds a
//! [`QuoteEngine`] and prints the best matching quote for a query embedding
//! or an emotion label.

#![deny(unsafe_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use solace_core::QuoteRecord;
use solace_core::logging::init_subscriber;
use solace_retrieval::{
    AliasTable, CanonicalVocabulary, EmotionNormalizer, QuoteEngine, VectorMatch,
};
use solace_settings::SolaceSettings;
use tracing::{debug, info};

/// Find a comforting quote for how you feel.
#[derive(Parser, Debug)]
#[command(name = "solace", version, about = "Match quotes to embeddings or emotions")]
struct Cli {
    /// Settings file (defaults to `~/.solace/settings.json`).
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Seed for the tie-break generator (overrides settings).
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter, e.g. `debug` (overrides settings; `RUST_LOG` wins over both).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Best quote by cosine similarity to the user embedding.
    Vector {
        /// User embedding file (overrides settings).
        #[arg(long)]
        embedding: Option<PathBuf>,
    },
    /// Quote picked among the top matches for an emotion label.
    Emotion {
        /// Emotion label, e.g. `anxious`.
        text: String,
        /// Number of independent draws in one session.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        repeat: u32,
    },
    /// Show the canonical form of an emotion label.
    Normalize {
        /// Emotion label.
        text: String,
    },
}

fn load_settings(cli: &Cli) -> Result<SolaceSettings> {
    let path = cli
        .settings
        .clone()
        .unwrap_or_else(solace_settings::settings_path);
    let mut settings = solace_settings::load_settings_from_path(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    if let Some(seed) = cli.seed {
        settings.matching.seed = Some(seed);
    }
    if let Some(ref level) = cli.log_level {
        settings.logging.level.clone_from(level);
    }
    Ok(settings)
}

/// Built-in aliases, then inline settings aliases, then the alias file.
fn build_normalizer(settings: &SolaceSettings) -> Result<EmotionNormalizer> {
    let mut aliases = AliasTable::builtin().extended(&settings.matching.aliases);
    if let Some(ref path) = settings.corpus.aliases_path {
        let extra = solace_corpus::load_aliases(Path::new(path))
            .with_context(|| format!("Failed to load aliases from {path}"))?;
        aliases = aliases.extended(&extra);
    }
    debug!(aliases = aliases.len(), "alias table built");
    Ok(EmotionNormalizer::new(
        Arc::new(aliases),
        Arc::new(CanonicalVocabulary::builtin()),
    ))
}

fn build_engine(
    records: Vec<QuoteRecord>,
    normalizer: EmotionNormalizer,
    seed: Option<u64>,
) -> QuoteEngine {
    match seed {
        Some(seed) => QuoteEngine::with_seed(records, normalizer, seed),
        None => QuoteEngine::new(records, normalizer),
    }
}

fn render_quote(record: &QuoteRecord) -> String {
    format!("Best matching quote:\n{record}")
}

fn render_vector_match(m: &VectorMatch<&QuoteRecord>) -> String {
    format!("{}\n(Score: {:.6})", render_quote(m.item), m.score)
}

fn render_normalized(normalizer: &EmotionNormalizer, text: &str) -> String {
    let canonical = normalizer.normalize(text);
    if canonical.is_empty() {
        return "empty input".to_string();
    }
    let status = if normalizer.vocabulary().contains(&canonical) {
        "in vocabulary"
    } else {
        "not in vocabulary"
    };
    format!("{canonical} ({status})")
}

fn run_vector(settings: &SolaceSettings, embedding: Option<PathBuf>) -> Result<()> {
    let corpus_path = Path::new(&settings.corpus.quotes_path);
    let records = solace_corpus::load_records(corpus_path)
        .with_context(|| format!("Failed to load quotes from {}", corpus_path.display()))?;

    let embedding_path =
        embedding.unwrap_or_else(|| PathBuf::from(&settings.corpus.user_embedding_path));
    let query = solace_corpus::load_query_embedding(&embedding_path).with_context(|| {
        format!(
            "Failed to load user embedding from {}",
            embedding_path.display()
        )
    })?;

    let engine = build_engine(records, build_normalizer(settings)?, settings.matching.seed);
    match engine.match_by_vector(&query) {
        Some(m) => println!("{}", render_vector_match(&m)),
        None => println!("No matching quote found."),
    }
    Ok(())
}

fn run_emotion(settings: &SolaceSettings, text: &str, repeat: u32) -> Result<()> {
    let corpus_path = Path::new(&settings.corpus.books_path);
    let records = solace_corpus::load_records(corpus_path)
        .with_context(|| format!("Failed to load books from {}", corpus_path.display()))?;

    let engine = build_engine(records, build_normalizer(settings)?, settings.matching.seed);
    info!(records = engine.len(), tagged = engine.tagged_count(), "books corpus ready");

    for draw in 0..repeat {
        if draw > 0 {
            println!();
        }
        match engine.match_by_emotion(text) {
            Some(record) => println!("{}", render_quote(record)),
            None => println!("No matching quote found for '{text}'."),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(&cli)?;
    init_subscriber(&settings.logging.level);
    debug!(?settings, "settings loaded");

    match cli.command {
        Command::Vector { embedding } => run_vector(&settings, embedding),
        Command::Emotion { ref text, repeat } => run_emotion(&settings, text, repeat),
        Command::Normalize { ref text } => {
            println!("{}", render_normalized(&build_normalizer(&settings)?, text));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_emotion_defaults_to_single_draw() {
        let cli = Cli::parse_from(["solace", "emotion", "anxious"]);
        match cli.command {
            Command::Emotion { text, repeat } => {
                assert_eq!(text, "anxious");
                assert_eq!(repeat, 1);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_zero_repeat() {
        assert!(Cli::try_parse_from(["solace", "emotion", "sad", "--repeat", "0"]).is_err());
    }

    #[test]
    fn cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "solace",
            "vector",
            "--embedding",
            "/tmp/u.json",
            "--seed",
            "7",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Command::Vector { embedding } => {
                assert_eq!(embedding, Some(PathBuf::from("/tmp/u.json")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["solace"]).is_err());
    }

    #[test]
    fn flags_override_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"matching": {"seed": 1}, "logging": {"level": "info"}}"#)
            .unwrap();
        let cli = Cli::parse_from([
            "solace",
            "--settings",
            path.to_str().unwrap(),
            "--seed",
            "99",
            "normalize",
            "sad",
        ]);
        let settings = load_settings(&cli).unwrap();
        assert_eq!(settings.matching.seed, Some(99));
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn malformed_settings_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{").unwrap();
        let cli = Cli::parse_from([
            "solace",
            "--settings",
            path.to_str().unwrap(),
            "normalize",
            "x",
        ]);
        assert!(load_settings(&cli).is_err());
    }

    #[test]
    fn normalizer_merges_settings_and_file_aliases() {
        let dir = tempfile::tempdir().unwrap();
        let alias_file = dir.path().join("aliases.json");
        std::fs::write(&alias_file, r#"{"jittery": "anxiety", "blue": "calm"}"#).unwrap();

        let mut settings = SolaceSettings::default();
        let _ = settings
            .matching
            .aliases
            .insert("blue".to_string(), "sadness".to_string());
        settings.corpus.aliases_path = Some(alias_file.to_string_lossy().into_owned());

        let normalizer = build_normalizer(&settings).unwrap();
        assert_eq!(normalizer.normalize("Jittery"), "anxiety");
        // the alias file is applied last
        assert_eq!(normalizer.normalize("blue"), "calm");
        assert_eq!(normalizer.normalize("afraid"), "fear");
    }

    #[test]
    fn missing_alias_file_is_an_error() {
        let mut settings = SolaceSettings::default();
        settings.corpus.aliases_path = Some("/nonexistent/aliases.json".to_string());
        assert!(build_normalizer(&settings).is_err());
    }

    #[test]
    fn renders_vector_match_with_score() {
        let record = QuoteRecord::new("So it goes.", "Kurt Vonnegut", "Slaughterhouse-Five");
        let m = VectorMatch {
            item: &record,
            score: 0.5,
        };
        assert_eq!(
            render_vector_match(&m),
            "Best matching quote:\n\"So it goes.\"\n\
             - Kurt Vonnegut, Slaughterhouse-Five\n(Score: 0.500000)"
        );
    }

    #[test]
    fn renders_normalized_token() {
        let normalizer = EmotionNormalizer::builtin();
        assert_eq!(render_normalized(&normalizer, " Anxious "), "anxiety (in vocabulary)");
        assert_eq!(render_normalized(&normalizer, "Wistful"), "wistful (not in vocabulary)");
        assert_eq!(render_normalized(&normalizer, "   "), "empty input");
    }

    #[test]
    fn seeded_engines_repeat_draws() {
        let records: Vec<QuoteRecord> = (0..3)
            .map(|i| {
                QuoteRecord::new(format!("q{i}"), "a", "b")
                    .with_emotion("grief")
                    .with_sentiment(3, 0)
            })
            .collect();
        let draws = |seed| {
            let engine = build_engine(records.clone(), EmotionNormalizer::builtin(), Some(seed));
            (0..10)
                .map(|_| engine.match_by_emotion("grief").unwrap().quote.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(draws(4), draws(4));
    }
}
