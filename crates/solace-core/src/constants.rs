//! Package-level constants.

/// Current version of Solace (sourced from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name.
pub const NAME: &str = "solace";

/// Quote text used when a corpus entry has none.
pub const PLACEHOLDER_QUOTE: &str = "...";

/// Author used when a corpus entry has none.
pub const PLACEHOLDER_AUTHOR: &str = "Unknown";

/// Book title used when a corpus entry has none.
pub const PLACEHOLDER_BOOK: &str = "Unknown";
