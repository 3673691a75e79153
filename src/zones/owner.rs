//! Owner states: where a card currently lives.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// The zone holding a card.
///
/// Shared zones and player hands are distinct variants, so a seat index can
/// never collide with a zone tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OwnerState {
    /// Undealt, in deck order.
    Deck,
    /// Out of play for the rest of the game.
    Discard,
    /// Played against the defender this turn.
    AttackPile,
    /// Played by the defender this turn.
    DefensePile,
    /// In a player's hand.
    Hand(PlayerId),
}

impl OwnerState {
    /// True for the two table piles.
    #[must_use]
    pub const fn is_table(self) -> bool {
        matches!(self, OwnerState::AttackPile | OwnerState::DefensePile)
    }

    /// The seat holding the card, if it is in a hand.
    #[must_use]
    pub const fn holder(self) -> Option<PlayerId> {
        match self {
            OwnerState::Hand(p) => Some(p),
            _ => None,
        }
    }
}

impl std::fmt::Display for OwnerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OwnerState::Deck => f.write_str("deck"),
            OwnerState::Discard => f.write_str("discard"),
            OwnerState::AttackPile => f.write_str("attack"),
            OwnerState::DefensePile => f.write_str("defense"),
            OwnerState::Hand(p) => write!(f, "hand of {p}"),
        }
    }
}
