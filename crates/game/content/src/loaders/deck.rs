//! Deck loader.

use std::path::Path;

use crate::deck::Deck;
use crate::loaders::{LoadResult, read_file};

/// The two-club solo deck bundled with the crate.
pub const SOLO_DECK: &str = include_str!("../../data/solo_deck.ron");

/// Loader for decks from RON files.
pub struct DeckLoader;

impl DeckLoader {
    /// Load a deck from a RON file.
    pub fn load(path: &Path) -> LoadResult<Deck> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Deck> {
        let deck: Deck = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse deck RON: {}", e))?;
        Ok(deck)
    }

    /// The bundled solo deck.
    pub fn solo() -> LoadResult<Deck> {
        Self::parse(SOLO_DECK)
    }
}
