//! Setup errors.
//!
//! Only broken setup invariants are errors. Everything that can go wrong
//! while a game is running (unknown card, empty hand, exhausted deck) is
//! reported through `Option` or a sentinel enum and skipped by the engine.

use thiserror::Error;

use crate::cards::Card;

/// A game could not be set up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("player count {count} is outside {min}..={max}")]
    PlayerCount { count: usize, min: usize, max: usize },

    #[error("table size must be at least 1")]
    TableSize,

    #[error("first deal needs {needed} cards but the deck has {available}")]
    DeckTooSmall { needed: usize, available: usize },

    #[error("deck has {0} cards, expected 52")]
    DeckSize(usize),

    #[error("card {0} appears more than once in the deck")]
    DuplicateCard(Card),
}
