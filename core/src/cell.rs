use serde::{Deserialize, Serialize};

/// One grid position: mine presence, player marks, and the cached neighbor tally.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    has_mine: bool,
    flagged: bool,
    revealed: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub const fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub fn set_mine(&mut self, has_mine: bool) {
        self.has_mine = has_mine;
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn set_revealed(&mut self, revealed: bool) {
        self.revealed = revealed;
    }

    /// Flags are informational; whether they gate a reveal is up to the engine rules.
    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub fn set_flagged(&mut self, flagged: bool) {
        self.flagged = flagged;
    }

    pub const fn adjacent_mine_count(&self) -> u8 {
        self.adjacent_mines
    }

    pub fn set_adjacent_mine_count(&mut self, count: u8) {
        self.adjacent_mines = count;
    }

    pub const fn is_hidden(&self) -> bool {
        !self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_empty() {
        let cell = Cell::default();

        assert!(!cell.has_mine());
        assert!(!cell.is_flagged());
        assert!(!cell.is_revealed());
        assert_eq!(cell.adjacent_mine_count(), 0);
    }

    #[test]
    fn flag_does_not_touch_reveal_state() {
        let mut cell = Cell::default();

        cell.set_flagged(true);
        assert!(cell.is_hidden());

        cell.set_revealed(true);
        assert!(cell.is_flagged());
        assert!(cell.is_revealed());
    }
}
