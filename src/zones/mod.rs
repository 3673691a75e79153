//! Card locations.
//!
//! ## Key Types
//!
//! - `OwnerState`: Deck, Discard, AttackPile, DefensePile, or a player's hand
//! - `OwnerIndex`: Slot -> owner map with ordered per-owner slot lists

pub mod index;
pub mod owner;

pub use index::OwnerIndex;
pub use owner::OwnerState;
