//! Marking drawn numbers on a card.

use crate::cards::Card;

use super::marked::MarkedSet;

/// Cover the cell holding `number`, if the card has it.
///
/// Returns the newly covered index. Returns `None` when the card lacks
/// the number or the cell was already covered, so applying the same
/// draw twice changes nothing.
pub fn apply_draw(card: &Card, marked: &mut MarkedSet, number: u8) -> Option<usize> {
    let index = card.position_of(number)?;
    marked.insert(index).then_some(index)
}
