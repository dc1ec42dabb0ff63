//! Per-player set of covered cells.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{CELL_COUNT, FREE_INDEX};

/// A cell index outside the card.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Cell index {0} is outside the card")]
pub struct CellOutOfRange(pub u8);

/// Covered cell indices, stored as a 25-bit mask.
///
/// Starts with the free centre covered. Within a session it only grows.
/// Serializes as an ascending list of indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", try_from = "Vec<u8>")]
pub struct MarkedSet {
    bits: u32,
}

impl MarkedSet {
    /// The starting set: only the free cell.
    #[must_use]
    pub const fn new() -> Self {
        Self { bits: 1 << FREE_INDEX }
    }

    /// Nothing covered, not even the free cell.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Cover a cell. Returns `false` if it was already covered.
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(index < CELL_COUNT, "cell index {index} out of range");
        let bit = 1 << index;
        let fresh = self.bits & bit == 0;
        self.bits |= bit;
        fresh
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index < CELL_COUNT && self.bits & (1 << index) != 0
    }

    /// Number of covered cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Does this set cover every cell in `mask`?
    #[must_use]
    pub const fn covers(&self, mask: u32) -> bool {
        self.bits & mask == mask
    }

    /// Covered indices, ascending.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELL_COUNT).filter(move |&i| self.contains(i))
    }

    /// Raw bit mask, bit `i` set when cell `i` is covered.
    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.bits
    }
}

impl Default for MarkedSet {
    fn default() -> Self {
        Self::new()
    }
}

impl From<MarkedSet> for Vec<u8> {
    fn from(set: MarkedSet) -> Self {
        set.iter().map(|i| i as u8).collect()
    }
}

impl TryFrom<Vec<u8>> for MarkedSet {
    type Error = CellOutOfRange;

    fn try_from(indices: Vec<u8>) -> Result<Self, Self::Error> {
        let mut set = Self::empty();
        for i in indices {
            if usize::from(i) >= CELL_COUNT {
                return Err(CellOutOfRange(i));
            }
            set.insert(usize::from(i));
        }
        Ok(set)
    }
}
