//! The bingo card: 25 cells in row-major order with a free centre.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{column_for, CELL_COUNT, COLUMN_LETTERS, FREE, FREE_INDEX, GRID_SIZE};

/// A card that breaks the layout rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("Centre cell holds {0}, expected the free sentinel")]
    CentreNotFree(u8),

    #[error("Free sentinel at index {0}; only the centre may be free")]
    StrayFree(usize),

    #[error("Value {value} at index {index} is outside column {column}")]
    WrongColumn { index: usize, value: u8, column: char },

    #[error("Value {0} appears more than once")]
    Duplicate(u8),
}

/// A player's 5×5 card.
///
/// Cell `index = row * 5 + column`. Column `c` holds numbers from
/// `COLUMN_RANGES[c]`; index 12 always holds `FREE`. Cells `0..5` are
/// therefore the top row, one number per column, not five B numbers.
/// Front ends laying ranges out as consecutive blocks of five must
/// transpose.
///
/// Serializes as the flat 25-cell array. Deserializing runs the same
/// checks as `from_cells`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "[u8; 25]", try_from = "[u8; 25]")]
pub struct Card {
    cells: [u8; CELL_COUNT],
}

impl Card {
    /// Build a card from explicit cells, checking every layout rule.
    ///
    /// ```
    /// use bingo_engine::cards::Card;
    ///
    /// let mut cells = [0u8; 25];
    /// for (i, cell) in cells.iter_mut().enumerate() {
    ///     let (row, col) = (i / 5, i % 5);
    ///     *cell = (col * 15 + row + 1) as u8;
    /// }
    /// cells[12] = 0;
    ///
    /// let card = Card::from_cells(cells).unwrap();
    /// assert_eq!(card.position_of(16), Some(1));
    /// ```
    pub fn from_cells(cells: [u8; CELL_COUNT]) -> Result<Self, CardError> {
        let card = Self { cells };
        card.validate()?;
        Ok(card)
    }

    /// Wrap cells without checking them. Callers validate afterwards.
    pub(crate) fn from_cells_unchecked(cells: [u8; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Report the first layout rule this card breaks, if any.
    pub fn validate(&self) -> Result<(), CardError> {
        if self.cells[FREE_INDEX] != FREE {
            return Err(CardError::CentreNotFree(self.cells[FREE_INDEX]));
        }

        let mut seen = FxHashSet::default();
        for (index, &value) in self.cells.iter().enumerate() {
            if index == FREE_INDEX {
                continue;
            }
            if value == FREE {
                return Err(CardError::StrayFree(index));
            }

            let column = index % GRID_SIZE;
            if column_for(value) != Some(column) {
                return Err(CardError::WrongColumn {
                    index,
                    value,
                    column: COLUMN_LETTERS[column],
                });
            }
            if !seen.insert(value) {
                return Err(CardError::Duplicate(value));
            }
        }

        Ok(())
    }

    /// Value at a cell index (`FREE` for the centre).
    #[must_use]
    pub fn cell(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Is this the free cell?
    #[must_use]
    pub fn is_free(&self, index: usize) -> bool {
        index == FREE_INDEX
    }

    /// Values of one row, left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> [u8; GRID_SIZE] {
        std::array::from_fn(|col| self.cells[row * GRID_SIZE + col])
    }

    /// Values of one column, top to bottom.
    #[must_use]
    pub fn column(&self, col: usize) -> [u8; GRID_SIZE] {
        std::array::from_fn(|row| self.cells[row * GRID_SIZE + col])
    }

    /// Cell index holding `number`.
    ///
    /// `FREE` is not a number and never matches.
    #[must_use]
    pub fn position_of(&self, number: u8) -> Option<usize> {
        if number == FREE {
            return None;
        }
        self.cells.iter().position(|&v| v == number)
    }
}

impl From<Card> for [u8; CELL_COUNT] {
    fn from(card: Card) -> Self {
        card.cells
    }
}

impl TryFrom<[u8; CELL_COUNT]> for Card {
    type Error = CardError;

    fn try_from(cells: [u8; CELL_COUNT]) -> Result<Self, Self::Error> {
        Self::from_cells(cells)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in COLUMN_LETTERS {
            write!(f, "{letter:>5}")?;
        }
        writeln!(f)?;
        for row in 0..GRID_SIZE {
            for (col, value) in self.row(row).into_iter().enumerate() {
                if self.is_free(row * GRID_SIZE + col) {
                    write!(f, "{:>5}", "FREE")?;
                } else {
                    write!(f, "{value:>5}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
