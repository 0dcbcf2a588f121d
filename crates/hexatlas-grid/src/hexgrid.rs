//! The immutable, normalised grid snapshot.

use crate::cell::Cell;
use hexatlas_core::RegionId;
use indexmap::IndexMap;

/// A sparse mapping from normalised cell coordinates to placed regions.
///
/// Built once by [`PlacementStore::to_grid`](crate::PlacementStore::to_grid)
/// at the end of a resolution run and immutable thereafter. Coordinates
/// are shifted so the minimum occupied column and row are both zero;
/// `width`/`height` are the dimensions of the occupied bounding rectangle
/// in cells.
///
/// Each occupied cell holds exactly one region and each placed region
/// occupies exactly one cell; the store enforces this while the grid is
/// being built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HexGrid {
    cells: IndexMap<Cell, RegionId>,
    width: u32,
    height: u32,
}

impl HexGrid {
    /// Build a snapshot from occupied cells, shifting coordinates so the
    /// minimum column and row are zero. Entries keep their iteration
    /// (placement) order.
    pub(crate) fn normalised(occupied: impl Iterator<Item = (Cell, RegionId)>) -> Self {
        let raw: Vec<(Cell, RegionId)> = occupied.collect();
        if raw.is_empty() {
            return Self::default();
        }

        let min_col = raw.iter().map(|(c, _)| c.col).min().unwrap_or(0);
        let max_col = raw.iter().map(|(c, _)| c.col).max().unwrap_or(0);
        let min_row = raw.iter().map(|(c, _)| c.row).min().unwrap_or(0);
        let max_row = raw.iter().map(|(c, _)| c.row).max().unwrap_or(0);

        let cells = raw
            .into_iter()
            .map(|(c, region)| (Cell::new(c.col - min_col, c.row - min_row), region))
            .collect();

        Self {
            cells,
            width: (max_col - min_col + 1) as u32,
            height: (max_row - min_row + 1) as u32,
        }
    }

    /// The region at `(col, row)`, if any.
    pub fn get(&self, col: i32, row: i32) -> Option<RegionId> {
        self.region_at(Cell::new(col, row))
    }

    /// The region at a cell, if any.
    pub fn region_at(&self, cell: Cell) -> Option<RegionId> {
        self.cells.get(&cell).copied()
    }

    /// The cell a region occupies, if it was placed.
    pub fn cell_of(&self, region: RegionId) -> Option<Cell> {
        self.cells
            .iter()
            .find(|(_, &r)| r == region)
            .map(|(&cell, _)| cell)
    }

    /// Width of the occupied bounding rectangle, in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the occupied bounding rectangle, in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no occupied cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate occupied cells in placement order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, RegionId)> + '_ {
        self.cells.iter().map(|(&cell, &region)| (cell, region))
    }
}
