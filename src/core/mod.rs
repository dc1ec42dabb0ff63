//! Core building blocks: players, RNG, configuration and layout tables.
//!
//! Everything above this module (cards, draws, rules, sessions) is
//! expressed in terms of these types.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{
    column_for, BingoConfig, ConfigError, CELL_COUNT, COLUMN_LETTERS, COLUMN_RANGES, FREE,
    FREE_INDEX, GRID_SIZE, MAX_NUMBER, MAX_PLAYERS, NUMBERS_PER_COLUMN,
};
