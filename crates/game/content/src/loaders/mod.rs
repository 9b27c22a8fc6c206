//! Content loaders for reading decks and rules from files.
//!
//! Decks are RON, rule sets are TOML. Both deserialize straight into the
//! `showdown-core` types.

pub mod deck;
pub mod rules;

pub use deck::DeckLoader;
pub use rules::RulesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
