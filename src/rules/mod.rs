//! Bingo rules: covering drawn numbers and recognising a win.
//!
//! - `MarkedSet`: covered cells per player
//! - `apply_draw`: cover the cell holding a drawn number
//! - `WINNING_LINES` / `has_won`: the 12 fixed lines and the win check
//!
//! Win checks are recomputed from the marked set on every draw. Marked
//! sets only grow, so a win never un-happens before a reset.

pub mod marked;
pub mod matcher;
pub mod win;

pub use marked::{CellOutOfRange, MarkedSet};
pub use matcher::apply_draw;
pub use win::{completed_lines, first_winning_line, has_won, LineKind, WinningLine, WINNING_LINES};
