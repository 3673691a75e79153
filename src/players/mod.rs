//! Automated participants.
//!
//! A `Player` never decides anything on its own: the engine refreshes its
//! cached hand and asks for one of two fixed heuristics, the weakest rank
//! group (`least_cards`) or cards matching table ranks (`cards_of_rank`).

pub mod player;

pub use player::{CardSet, Player};
