//! Game configuration.
//!
//! `GameConfig` carries every tunable of a simulated round. Defaults follow
//! the classic table: four players, six cards per hand, six attack cards per
//! turn, trump taken from the last card of the shuffled deck.

use serde::{Deserialize, Serialize};

use super::error::SetupError;
use crate::cards::Suit;

/// Number of cards in the deck (13 ranks × 4 suits).
pub const DECK_SIZE: usize = 52;

/// Cards a player is topped up to, and the attack-pile cap.
pub const TABLE_SIZE: usize = 6;

/// Smallest table that can play.
pub const MIN_PLAYERS: usize = 2;

/// Largest table whose first deal fits in the deck.
pub const MAX_PLAYERS: usize = DECK_SIZE / TABLE_SIZE;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats.
    pub player_count: usize,

    /// Cards dealt per player and the replenish target.
    pub hand_size: usize,

    /// Maximum cards in the attack pile per turn.
    pub table_size: usize,

    /// Fixed trump suit. `None` takes the suit of the last deck card.
    pub trump: Option<Suit>,

    /// Turns after which a game is abandoned as stalled.
    pub max_turns: u32,

    /// Seed for the shuffle and identifier streams.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            hand_size: TABLE_SIZE,
            table_size: TABLE_SIZE,
            trump: None,
            max_turns: 10_000,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Create a configuration for `player_count` seats with defaults otherwise.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fix the trump suit.
    #[must_use]
    pub fn with_trump(mut self, trump: Suit) -> Self {
        self.trump = Some(trump);
        self
    }

    /// Set the stall bound.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set hand and table size together.
    #[must_use]
    pub fn with_table_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self.table_size = size;
        self
    }

    /// Check that a game can be dealt with this configuration.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.table_size == 0 || self.hand_size == 0 {
            return Err(SetupError::TableSize);
        }

        if !(MIN_PLAYERS..=u8::MAX as usize).contains(&self.player_count) {
            return Err(SetupError::PlayerCount {
                count: self.player_count,
                min: MIN_PLAYERS,
                max: DECK_SIZE / self.hand_size,
            });
        }

        let needed = self.player_count * self.hand_size;
        if needed > DECK_SIZE {
            return Err(SetupError::DeckTooSmall {
                needed,
                available: DECK_SIZE,
            });
        }

        Ok(())
    }
}
