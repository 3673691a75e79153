//! Game records and results.
//!
//! - `TurnRecord`: what one turn did (pairing, cards, take)
//! - `GameReport`, `PlayerResult`: final standings

pub mod outcome;
pub mod record;

pub use outcome::{GameReport, PlayerResult};
pub use record::TurnRecord;
