use serde::{Deserialize, Serialize};

use crate::Cell;

/// What a frontend should draw for a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    /// Revealed safe cell with its adjacent-mine count, `0` draws blank.
    Open(u8),
    /// Mine disclosed after the game was lost.
    Mine,
    /// The mine whose reveal lost the game.
    Exploded,
}

impl CellView {
    pub const fn of(cell: &Cell, detonated: bool) -> Self {
        match (cell.is_revealed(), cell.has_mine()) {
            (false, _) if cell.is_flagged() => Self::Flagged,
            (false, _) => Self::Hidden,
            (true, true) if detonated => Self::Exploded,
            (true, true) => Self::Mine,
            (true, false) => Self::Open(cell.adjacent_mine_count()),
        }
    }

    // whether the cell is visually closed
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(has_mine: bool, flagged: bool, revealed: bool, count: u8) -> Cell {
        let mut cell = Cell::default();
        cell.set_mine(has_mine);
        cell.set_flagged(flagged);
        cell.set_revealed(revealed);
        cell.set_adjacent_mine_count(count);
        cell
    }

    #[test]
    fn hidden_cells_show_flags_only() {
        assert_eq!(CellView::of(&cell(true, false, false, 0), false), CellView::Hidden);
        assert_eq!(CellView::of(&cell(true, true, false, 0), false), CellView::Flagged);
        assert!(CellView::Flagged.is_closed());
    }

    #[test]
    fn revealed_cells_show_content() {
        assert_eq!(CellView::of(&cell(false, false, true, 3), false), CellView::Open(3));
        assert_eq!(CellView::of(&cell(false, true, true, 0), false), CellView::Open(0));
        assert_eq!(CellView::of(&cell(true, false, true, 1), false), CellView::Mine);
        assert_eq!(CellView::of(&cell(true, false, true, 1), true), CellView::Exploded);
        assert!(!CellView::Mine.is_closed());
    }
}
