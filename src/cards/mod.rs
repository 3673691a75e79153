//! Cards and the card registry.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: the 4 × 13 card values
//! - `Card`: rank + suit + derived trump flag, with the beating relation
//! - `Comparison`: outcome of `Card::compare`
//! - `CardRegistry`: all 52 cards and their current owner state

pub mod card;
pub mod registry;

pub use card::{Card, CardKey, Comparison, Rank, Suit};
pub use registry::{CardRegistry, Transfer};
