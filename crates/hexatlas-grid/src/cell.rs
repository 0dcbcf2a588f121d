//! Row-offset cell coordinates.

use crate::direction::Direction;
use smallvec::SmallVec;
use std::fmt;

/// Neighbour offsets `(dcol, drow)` for cells on even rows, indexed by
/// canonical direction order: NE, E, SE, SW, W, NW.
const EVEN_ROW_OFFSETS: [(i32, i32); 6] = [
    (1, -1), // NE
    (1, 0),  // E
    (1, 1),  // SE
    (0, 1),  // SW
    (-1, 0), // W
    (0, -1), // NW
];

/// Neighbour offsets `(dcol, drow)` for cells on odd rows.
const ODD_ROW_OFFSETS: [(i32, i32); 6] = [
    (0, -1),  // NE
    (1, 0),   // E
    (0, 1),   // SE
    (-1, 1),  // SW
    (-1, 0),  // W
    (-1, -1), // NW
];

/// A grid cell address `(col, row)` in the row-offset scheme.
///
/// Even rows sit half a cell to the right of odd rows (pointy-top
/// hexagons), so the offset to a diagonal neighbour depends on row parity.
/// North is `row - 1`. Coordinates may go negative during placement; the
/// final [`HexGrid`](crate::HexGrid) snapshot normalises them.
///
/// # Examples
///
/// ```
/// use hexatlas_grid::{Cell, Direction};
///
/// let even = Cell::new(2, 2);
/// assert_eq!(even.neighbour(Direction::NorthEast), Cell::new(3, 1));
/// assert_eq!(even.neighbour(Direction::NorthWest), Cell::new(2, 1));
///
/// let odd = Cell::new(2, 1);
/// assert_eq!(odd.neighbour(Direction::NorthEast), Cell::new(2, 0));
/// assert_eq!(odd.neighbour(Direction::NorthWest), Cell::new(1, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column index.
    pub col: i32,
    /// Row index; smaller rows are further north.
    pub row: i32,
}

impl Cell {
    /// The origin cell `(0, 0)`, where resolution starts.
    pub const ORIGIN: Cell = Cell { col: 0, row: 0 };

    /// Create a cell address.
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Whether this cell sits on an even (right-shifted) row.
    ///
    /// Uses `rem_euclid` so negative rows keep the correct parity.
    pub fn is_even_row(self) -> bool {
        self.row.rem_euclid(2) == 0
    }

    /// The neighbour cell in the given direction.
    pub fn neighbour(self, direction: Direction) -> Cell {
        let offsets = if self.is_even_row() {
            &EVEN_ROW_OFFSETS
        } else {
            &ODD_ROW_OFFSETS
        };
        let (dcol, drow) = offsets[direction.index()];
        Cell::new(self.col + dcol, self.row + drow)
    }

    /// All six neighbour cells in canonical direction order.
    pub fn neighbours(self) -> SmallVec<[Cell; 6]> {
        Direction::ALL.iter().map(|&d| self.neighbour(d)).collect()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn even_row_neighbours() {
        let c = Cell::new(2, 2);
        assert_eq!(c.neighbour(Direction::NorthEast), Cell::new(3, 1));
        assert_eq!(c.neighbour(Direction::East), Cell::new(3, 2));
        assert_eq!(c.neighbour(Direction::SouthEast), Cell::new(3, 3));
        assert_eq!(c.neighbour(Direction::SouthWest), Cell::new(2, 3));
        assert_eq!(c.neighbour(Direction::West), Cell::new(1, 2));
        assert_eq!(c.neighbour(Direction::NorthWest), Cell::new(2, 1));
    }

    #[test]
    fn odd_row_neighbours() {
        let c = Cell::new(2, 1);
        assert_eq!(c.neighbour(Direction::NorthEast), Cell::new(2, 0));
        assert_eq!(c.neighbour(Direction::East), Cell::new(3, 1));
        assert_eq!(c.neighbour(Direction::SouthEast), Cell::new(2, 2));
        assert_eq!(c.neighbour(Direction::SouthWest), Cell::new(1, 2));
        assert_eq!(c.neighbour(Direction::West), Cell::new(1, 1));
        assert_eq!(c.neighbour(Direction::NorthWest), Cell::new(1, 0));
    }

    #[test]
    fn negative_rows_keep_parity() {
        // Row -2 is even, row -1 is odd.
        assert!(Cell::new(0, -2).is_even_row());
        assert!(!Cell::new(0, -1).is_even_row());
        assert_eq!(Cell::new(0, -2).neighbour(Direction::NorthEast), Cell::new(1, -3));
        assert_eq!(Cell::new(0, -1).neighbour(Direction::NorthEast), Cell::new(0, -2));
    }

    #[test]
    fn six_distinct_neighbours() {
        for cell in [Cell::ORIGIN, Cell::new(4, 3), Cell::new(-1, -1)] {
            let neighbours = cell.neighbours();
            assert_eq!(neighbours.len(), 6);
            for (i, a) in neighbours.iter().enumerate() {
                assert_ne!(*a, cell);
                for b in &neighbours[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    proptest! {
        /// Walking one step and stepping back in the opposite direction
        /// returns to the start, whatever the parity.
        #[test]
        fn neighbour_opposite_round_trip(col in -50i32..50, row in -50i32..50) {
            let cell = Cell::new(col, row);
            for d in Direction::ALL {
                prop_assert_eq!(cell.neighbour(d).neighbour(d.opposite()), cell);
            }
        }
    }
}
