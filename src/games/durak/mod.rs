//! Durak for 2-8 automated players on a 52-card deck.
//!
//! - Six cards are dealt to each seat; hands are topped back up to six
//!   after every turn while the deck lasts
//! - Attacker and defender rotate through a single step counter, skipping
//!   seats that have already won
//! - Once the deck is gone, emptying your hand wins; the last seat holding
//!   cards is the Durak

mod game;
mod turn;

pub use game::{DealOutcome, DurakGame, DurakGameBuilder, TurnStatus};
