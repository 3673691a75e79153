//! # durak-sim
//!
//! A self-playing simulation of the card game Durak.
//!
//! ## Design Principles
//!
//! 1. **One Source of Truth**: A single `CardRegistry` holds all 52 cards
//!    and an owner state per card. Deck, discard, both table piles and
//!    every hand are views over it.
//!
//! 2. **One Mutation**: Dealing, attacking, defending, taking and
//!    discarding are all expressed as `CardRegistry::transfer` calls.
//!
//! 3. **Injected Randomness**: Shuffling and identifiers come from a
//!    seeded `GameRng`; tests can also hand in a fixed deck.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, setup errors
//! - `cards`: Cards, comparison rules, the registry
//! - `zones`: Owner states and the owner index
//! - `players`: Cached hands and play heuristics
//! - `rules`: Turn records and final reports
//! - `games`: The Durak engine
//!
//! ```
//! use durak_sim::games::durak::DurakGameBuilder;
//!
//! let mut game = DurakGameBuilder::new().player_count(3).seed(7).build().unwrap();
//! let report = game.run();
//! assert_eq!(report.players.len(), 3);
//! ```

pub mod cards;
pub mod core;
pub mod games;
pub mod players;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, PlayerId, PlayerMap, SetupError};

pub use crate::cards::{Card, CardKey, CardRegistry, Comparison, Rank, Suit, Transfer};

pub use crate::zones::{OwnerIndex, OwnerState};

pub use crate::players::{CardSet, Player};

pub use crate::rules::{GameReport, PlayerResult, TurnRecord};

pub use crate::games::durak::{DealOutcome, DurakGame, DurakGameBuilder, TurnStatus};
