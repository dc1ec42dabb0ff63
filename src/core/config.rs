//! Table configuration and the fixed layout tables of a 75-ball card.
//!
//! The layout constants are pure data: a card is a 5×5 grid stored
//! row-major, column `c` draws from `COLUMN_RANGES[c]`, and the centre
//! cell is always free.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side length of a card.
pub const GRID_SIZE: usize = 5;

/// Number of cells on a card.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Index of the free centre cell.
pub const FREE_INDEX: usize = 12;

/// Sentinel value stored in the free cell.
pub const FREE: u8 = 0;

/// Highest number in the draw universe (numbers run 1..=MAX_NUMBER).
pub const MAX_NUMBER: u8 = 75;

/// Numbers per column range.
pub const NUMBERS_PER_COLUMN: u8 = 15;

/// Number ranges for the B, I, N, G and O columns.
pub const COLUMN_RANGES: [RangeInclusive<u8>; GRID_SIZE] = [1..=15, 16..=30, 31..=45, 46..=60, 61..=75];

/// Column letters, for display.
pub const COLUMN_LETTERS: [char; GRID_SIZE] = ['B', 'I', 'N', 'G', 'O'];

/// Largest table the engine deals for.
pub const MAX_PLAYERS: usize = 8;

/// Column whose range contains `number`, if it is drawable.
#[must_use]
pub fn column_for(number: u8) -> Option<usize> {
    if (1..=MAX_NUMBER).contains(&number) {
        Some(usize::from((number - 1) / NUMBERS_PER_COLUMN))
    } else {
        None
    }
}

/// Invalid table configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Player count {0} out of range (1-{})", MAX_PLAYERS)]
    PlayerCount(usize),
}

/// Table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BingoConfig {
    /// Number of seated players (default: 2).
    /// Seat order decides ties on the same draw.
    pub player_count: usize,

    /// Random seed for dealing and drawing.
    /// `None` seeds from OS entropy; the chosen seed is still reported.
    pub seed: Option<u64>,
}

impl Default for BingoConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            seed: None,
        }
    }
}

impl BingoConfig {
    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom player count.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Check the config before dealing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (1..=MAX_PLAYERS).contains(&self.player_count) {
            Ok(())
        } else {
            Err(ConfigError::PlayerCount(self.player_count))
        }
    }
}
