//! Winning lines and win detection.

use serde::{Deserialize, Serialize};

use super::marked::MarkedSet;

/// Which line of the card a winning line is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Row 0-4, top to bottom.
    Row(u8),
    /// Column 0-4, B to O.
    Column(u8),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::Row(r) => write!(f, "row {}", r + 1),
            LineKind::Column(c) => write!(f, "column {}", crate::core::COLUMN_LETTERS[usize::from(*c)]),
            LineKind::Diagonal => write!(f, "diagonal"),
            LineKind::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Five cells that win when all are covered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub kind: LineKind,
    pub cells: [usize; 5],
    mask: u32,
}

impl WinningLine {
    const fn new(kind: LineKind, cells: [usize; 5]) -> Self {
        let mut mask = 0u32;
        let mut i = 0;
        while i < cells.len() {
            mask |= 1 << cells[i];
            i += 1;
        }
        Self { kind, cells, mask }
    }

    /// Bit mask of this line's cells.
    #[must_use]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Are all five cells covered?
    #[must_use]
    pub fn is_complete(&self, marked: &MarkedSet) -> bool {
        marked.covers(self.mask)
    }
}

/// Rows, then columns, then the two diagonals.
pub static WINNING_LINES: [WinningLine; 12] = [
    WinningLine::new(LineKind::Row(0), [0, 1, 2, 3, 4]),
    WinningLine::new(LineKind::Row(1), [5, 6, 7, 8, 9]),
    WinningLine::new(LineKind::Row(2), [10, 11, 12, 13, 14]),
    WinningLine::new(LineKind::Row(3), [15, 16, 17, 18, 19]),
    WinningLine::new(LineKind::Row(4), [20, 21, 22, 23, 24]),
    WinningLine::new(LineKind::Column(0), [0, 5, 10, 15, 20]),
    WinningLine::new(LineKind::Column(1), [1, 6, 11, 16, 21]),
    WinningLine::new(LineKind::Column(2), [2, 7, 12, 17, 22]),
    WinningLine::new(LineKind::Column(3), [3, 8, 13, 18, 23]),
    WinningLine::new(LineKind::Column(4), [4, 9, 14, 19, 24]),
    WinningLine::new(LineKind::Diagonal, [0, 6, 12, 18, 24]),
    WinningLine::new(LineKind::AntiDiagonal, [4, 8, 12, 16, 20]),
];

/// Does `marked` complete at least one winning line?
#[must_use]
pub fn has_won(marked: &MarkedSet) -> bool {
    first_winning_line(marked).is_some()
}

/// First completed line in catalog order.
#[must_use]
pub fn first_winning_line(marked: &MarkedSet) -> Option<&'static WinningLine> {
    completed_lines(marked).next()
}

/// Every completed line, in catalog order.
pub fn completed_lines(marked: &MarkedSet) -> impl Iterator<Item = &'static WinningLine> + '_ {
    WINNING_LINES.iter().filter(move |line| line.is_complete(marked))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FREE_INDEX, GRID_SIZE};

    fn marked(indices: &[usize]) -> MarkedSet {
        let mut set = MarkedSet::new();
        for &i in indices {
            set.insert(i);
        }
        set
    }

    #[test]
    fn test_catalog_shape() {
        for line in &WINNING_LINES {
            assert_eq!(line.mask().count_ones(), 5, "{} should cover five cells", line.kind);
        }

        let through_centre = WINNING_LINES.iter().filter(|l| l.cells.contains(&FREE_INDEX)).count();
        assert_eq!(through_centre, 4); // row 2, column N, both diagonals
    }

    #[test]
    fn test_rows_and_columns_match_grid() {
        for i in 0..GRID_SIZE {
            let row = &WINNING_LINES[i];
            assert_eq!(row.kind, LineKind::Row(i as u8));
            assert!(row.cells.iter().all(|c| c / GRID_SIZE == i));

            let col = &WINNING_LINES[GRID_SIZE + i];
            assert_eq!(col.kind, LineKind::Column(i as u8));
            assert!(col.cells.iter().all(|c| c % GRID_SIZE == i));
        }
    }

    #[test]
    fn test_fresh_card_has_not_won() {
        assert!(!has_won(&MarkedSet::new()));
    }

    #[test]
    fn test_row_win() {
        let set = marked(&[0, 1, 2, 3]);
        assert!(!has_won(&set));

        let set = marked(&[0, 1, 2, 3, 4]);
        assert!(has_won(&set));
        assert_eq!(first_winning_line(&set).map(|l| l.kind), Some(LineKind::Row(0)));
    }

    #[test]
    fn test_centre_row_needs_four_draws() {
        let set = marked(&[10, 11, 13, 14]);
        assert_eq!(first_winning_line(&set).map(|l| l.kind), Some(LineKind::Row(2)));
    }

    #[test]
    fn test_diagonals() {
        let set = marked(&[0, 6, 18, 24]);
        assert_eq!(first_winning_line(&set).map(|l| l.kind), Some(LineKind::Diagonal));

        let set = marked(&[4, 8, 16, 20]);
        assert_eq!(first_winning_line(&set).map(|l| l.kind), Some(LineKind::AntiDiagonal));
    }

    #[test]
    fn test_completed_lines_lists_all() {
        // Full row 0 and full column B share cell 0
        let set = marked(&[0, 1, 2, 3, 4, 5, 10, 15, 20]);
        let kinds: Vec<_> = completed_lines(&set).map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LineKind::Row(0), LineKind::Column(0)]);
    }

    #[test]
    fn test_free_cell_alone_is_not_enough() {
        // Without the free cell, the centre row is incomplete
        let mut set = MarkedSet::empty();
        for i in [10, 11, 13, 14] {
            set.insert(i);
        }
        assert!(!has_won(&set));
    }

    #[test]
    fn test_line_kind_display() {
        assert_eq!(LineKind::Row(0).to_string(), "row 1");
        assert_eq!(LineKind::Column(2).to_string(), "column N");
        assert_eq!(LineKind::AntiDiagonal.to_string(), "anti-diagonal");
    }
}
