//! Settings loading with deep merge and environment variable overrides.
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::types::SolaceSettings;

/// Resolve the path to the settings file (`~/.solace/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".solace").join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<SolaceSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// A missing file yields defaults; invalid JSON is an error.
pub fn load_settings_from_path(path: &Path) -> Result<SolaceSettings> {
    let mut settings = read_layered(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

fn read_layered(path: &Path) -> Result<SolaceSettings> {
    let defaults = serde_json::to_value(SolaceSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    Ok(serde_json::from_value(merged)?)
}

/// Recursive deep merge of two JSON values.
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply `SOLACE_*` environment variable overrides.
pub fn apply_env_overrides(settings: &mut SolaceSettings) {
    apply_overrides(settings, |name| std::env::var(name).ok());
}

/// Apply overrides read through `lookup`.
///
/// Blank values are ignored. An unparseable seed is ignored with a warning.
pub fn apply_overrides<F>(settings: &mut SolaceSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(v) = read("SOLACE_QUOTES_PATH") {
        settings.corpus.quotes_path = v;
    }
    if let Some(v) = read("SOLACE_BOOKS_PATH") {
        settings.corpus.books_path = v;
    }
    if let Some(v) = read("SOLACE_USER_EMBEDDING") {
        settings.corpus.user_embedding_path = v;
    }
    if let Some(v) = read("SOLACE_ALIASES_PATH") {
        settings.corpus.aliases_path = Some(v);
    }
    if let Some(v) = read("SOLACE_SEED") {
        match parse_seed(&v) {
            Some(seed) => settings.matching.seed = Some(seed),
            None => warn!(key = "SOLACE_SEED", value = %v, "invalid seed env var, ignoring"),
        }
    }
    if let Some(v) = read("SOLACE_LOG_LEVEL") {
        settings.logging.level = v;
    }
}

/// Parse a seed as decimal or `0x`-prefixed hex.
pub fn parse_seed(val: &str) -> Option<u64> {
    let val = val.trim();
    match val.strip_prefix("0x").or_else(|| val.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => val.parse().ok(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
