use core::ops::{Index, IndexMut};
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// The `rows x cols` grid of cells for one session, stored row-major.
///
/// Mines are laid once, right after the grid is allocated, and never move
/// afterwards. Every cell caches its adjacent-mine count from that point on,
/// which [`Board::count_adjacent_mines`] can recompute on demand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: Coord2,
    grid: Array2<Cell>,
    mine_count: CellCount,
    neighborhood: Neighborhood,
}

impl Board {
    /// Allocates a validated board with no mines yet.
    pub fn empty(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let size = config.size();
        Ok(Self {
            size,
            grid: Array2::default(size.to_nd_index()),
            mine_count: 0,
            neighborhood: config.neighborhood,
        })
    }

    /// Allocates the grid and lays `config.mines` mines uniformly at random.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        let mut board = Self::empty(config)?;
        board.place_mines(config.mines, rng)?;
        Ok(board)
    }

    pub fn from_seed(config: &GameConfig, seed: u64) -> Result<Self> {
        RandomMineGenerator::new(seed).generate(config)
    }

    /// Builds a board with mines exactly at `mine_coords`; duplicates collapse.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let (rows, cols) = size;
        check_fits(rows, cols, 0)?;

        let mut board = Self {
            size,
            grid: Array2::default(size.to_nd_index()),
            mine_count: 0,
            neighborhood: Neighborhood::default(),
        };
        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            if !board[coords].has_mine() {
                board[coords].set_mine(true);
                board.mine_count += 1;
            }
        }
        check_fits(rows, cols, board.mine_count)?;

        board.refresh_adjacent_counts();
        Ok(board)
    }

    /// Switches the adjacency rule and recomputes every cached count.
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self.refresh_adjacent_counts();
        self
    }

    /// Lays `count` more mines by rejection sampling: draw a uniform cell,
    /// redraw if it already holds a mine.
    ///
    /// The number of draws grows with density, so the total is capped to keep
    /// at least one safe cell, which also guarantees termination.
    pub fn place_mines<R: Rng + ?Sized>(&mut self, count: CellCount, rng: &mut R) -> Result<()> {
        let (rows, cols) = self.size;
        let target = self.mine_count.saturating_add(count);
        check_fits(rows, cols, target)?;

        let mut remaining = count;
        let mut draws: u32 = 0;
        while remaining > 0 {
            let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
            draws += 1;
            if self[coords].has_mine() {
                continue;
            }
            self[coords].set_mine(true);
            self.mine_count += 1;
            remaining -= 1;
        }
        log::debug!(
            "Placed {} mines on a {}x{} board in {} draws",
            count,
            rows,
            cols,
            draws
        );

        self.refresh_adjacent_counts();
        Ok(())
    }

    /// Counts mines around `coords`, clipped to the board edges.
    pub fn count_adjacent_mines(&self, coords: Coord2) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self.tally_adjacent_mines(coords))
    }

    fn tally_adjacent_mines(&self, coords: Coord2) -> u8 {
        let mut count = 0;
        for pos in self.neighbors(coords) {
            if self[pos].has_mine() {
                count += 1;
            }
        }
        count
    }

    fn refresh_adjacent_counts(&mut self) {
        for coords in self.coords() {
            let count = self.tally_adjacent_mines(coords);
            self[coords].set_adjacent_mine_count(count);
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size;
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::IndexOutOfBounds {
                row: coords.0,
                col: coords.1,
            })
        }
    }

    pub fn cell(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self[coords])
    }

    pub fn has_mine(&self, coords: Coord2) -> Result<bool> {
        Ok(self.cell(coords)?.has_mine())
    }

    pub fn is_revealed(&self, coords: Coord2) -> Result<bool> {
        Ok(self.cell(coords)?.is_revealed())
    }

    pub fn is_flagged(&self, coords: Coord2) -> Result<bool> {
        Ok(self.cell(coords)?.is_flagged())
    }

    pub fn set_revealed(&mut self, coords: Coord2, revealed: bool) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self[coords].set_revealed(revealed);
        Ok(())
    }

    pub fn set_flagged(&mut self, coords: Coord2, flagged: bool) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self[coords].set_flagged(flagged);
        Ok(())
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub const fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    /// Clipped neighborhood of `coords` under this board's adjacency rule.
    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size, self.neighborhood)
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size;
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.coords().filter(|&coords| self[coords].has_mine())
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.grid[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.grid[coords.to_nd_index()]
    }
}
