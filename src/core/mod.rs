//! Core building blocks: seats, RNG, configuration, setup errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, DECK_SIZE, MAX_PLAYERS, MIN_PLAYERS, TABLE_SIZE};
pub use error::SetupError;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
