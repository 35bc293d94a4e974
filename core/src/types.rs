use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Which cells count as neighbors when tallying adjacent mines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Neighborhood {
    /// The eight surrounding cells.
    #[default]
    Moore,
    /// The eight surrounding cells plus the center itself.
    WithCenter,
}

impl Neighborhood {
    /// Upper bound of an adjacency count under this rule.
    pub const fn max_count(self) -> u8 {
        match self {
            Self::Moore => 8,
            Self::WithCenter => 9,
        }
    }

    fn displacements(self) -> &'static [(i8, i8)] {
        match self {
            Self::Moore => &DISPLACEMENTS[..8],
            Self::WithCenter => &DISPLACEMENTS,
        }
    }
}

// Center goes last so the first eight entries form the plain Moore ring.
static DISPLACEMENTS: [(i8, i8); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 0),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the in-bounds neighbors of a cell, clipped at edges and corners.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    displacements: &'static [(i8, i8)],
    index: usize,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2, neighborhood: Neighborhood) -> Self {
        Self {
            center,
            bounds,
            displacements: neighborhood.displacements(),
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = self.displacements.get(self.index) {
            self.index += 1;
            if let Some(item) = apply_delta(self.center, delta, self.bounds) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.displacements.len() - self.index))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn corner_is_clipped_to_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (3, 3), Neighborhood::Moore).collect();

        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn interior_cell_has_full_ring() {
        assert_eq!(
            NeighborIter::new((1, 1), (3, 3), Neighborhood::Moore).count(),
            8
        );
        assert_eq!(
            NeighborIter::new((1, 1), (3, 3), Neighborhood::WithCenter).count(),
            9
        );
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(
            NeighborIter::new((0, 0), (1, 1), Neighborhood::Moore).count(),
            0
        );
        assert_eq!(
            NeighborIter::new((0, 0), (1, 1), Neighborhood::WithCenter).collect::<Vec<_>>(),
            [(0, 0)]
        );
    }

    #[test]
    fn edge_of_max_sized_board_does_not_overflow() {
        let max = Coord::MAX;
        let neighbors: Vec<_> =
            NeighborIter::new((max - 1, 0), (max, max), Neighborhood::Moore).collect();

        assert_eq!(neighbors, [(max - 2, 0), (max - 2, 1), (max - 1, 1)]);
    }
}
