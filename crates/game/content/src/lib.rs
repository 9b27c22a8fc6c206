//! Decks and rule sets for the showdown engine.
//!
//! This crate houses static game content and provides loaders for RON/TOML
//! data files:
//! - Player card decks (RON)
//! - Rule sets (TOML)
//!
//! Content is turned into `showdown-core` teams and rules before a game
//! starts and never appears in game state on its own.

pub mod deck;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use deck::{Deck, DeckIssue};

#[cfg(feature = "loaders")]
pub use loaders::{DeckLoader, LoadResult, RulesLoader};
