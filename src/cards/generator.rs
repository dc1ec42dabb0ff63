//! Card dealing.

use tracing::debug;

use super::card::Card;
use crate::core::{GameRng, CELL_COUNT, COLUMN_RANGES, FREE, FREE_INDEX, GRID_SIZE, NUMBERS_PER_COLUMN};

/// Deal a fresh card.
///
/// Each column shuffles its 15-number range and keeps the first five,
/// top to bottom. The centre is then overwritten with `FREE`, whatever
/// the shuffle put there.
///
/// # Panics
///
/// If the dealt card breaks a layout rule. That is a defect in this
/// function, never a condition callers can recover from.
pub fn generate_card(rng: &mut GameRng) -> Card {
    let mut cells = [FREE; CELL_COUNT];

    for (col, range) in COLUMN_RANGES.iter().enumerate() {
        let start = *range.start();
        let mut column: [u8; NUMBERS_PER_COLUMN as usize] = std::array::from_fn(|i| start + i as u8);
        rng.shuffle(&mut column);

        for (row, &value) in column.iter().take(GRID_SIZE).enumerate() {
            cells[row * GRID_SIZE + col] = value;
        }
    }
    cells[FREE_INDEX] = FREE;

    let card = Card::from_cells_unchecked(cells);
    if let Err(err) = card.validate() {
        panic!("dealt a malformed card: {err}");
    }

    debug!(?cells, "dealt card");
    card
}
