//! The mutable bidirectional cell↔region placement store.

use crate::cell::Cell;
use crate::direction::Direction;
use crate::error::PlacementError;
use crate::hexgrid::HexGrid;
use hexatlas_core::{BoundaryId, Neighbour, NeighbourLink, RegionId, RegionSet};
use indexmap::IndexMap;

/// Tracks which grid cell holds which region during a resolution run.
///
/// The store is an arena of normalised integer cell coordinates with a
/// parallel region→cell lookup; regions reference each other only through
/// IDs, never through owning references. It is exclusively owned and
/// mutated by one in-progress resolution and must not be shared across
/// concurrent runs.
///
/// Placement also performs the adjacency bookkeeping: every successful
/// [`place`](PlacementStore::place) or
/// [`force_place`](PlacementStore::force_place) records the link in both
/// regions' neighbour maps, so `Region` itself never has to know about
/// placement order.
#[derive(Clone, Debug)]
pub struct PlacementStore {
    by_cell: IndexMap<Cell, RegionId>,
    by_region: IndexMap<RegionId, Cell>,
}

impl PlacementStore {
    /// Create a store seeded with the first region at the origin cell.
    pub fn new(origin_region: RegionId) -> Self {
        let mut by_cell = IndexMap::new();
        let mut by_region = IndexMap::new();
        by_cell.insert(Cell::ORIGIN, origin_region);
        by_region.insert(origin_region, Cell::ORIGIN);
        Self { by_cell, by_region }
    }

    /// Whether the region already occupies a cell.
    pub fn contains(&self, region: RegionId) -> bool {
        self.by_region.contains_key(&region)
    }

    /// The cell a region occupies, if placed.
    pub fn cell_of(&self, region: RegionId) -> Option<Cell> {
        self.by_region.get(&region).copied()
    }

    /// The region occupying a cell, if any.
    pub fn region_at(&self, cell: Cell) -> Option<RegionId> {
        self.by_cell.get(&cell).copied()
    }

    /// The neighbour cell of `region` in `direction`, if that cell is
    /// free. Returns `None` when the cell is occupied or when `region` is
    /// not placed (fail-closed).
    pub fn free_neighbour(&self, region: RegionId, direction: Direction) -> Option<Cell> {
        let cell = self.cell_of(region)?.neighbour(direction);
        if self.by_cell.contains_key(&cell) {
            None
        } else {
            Some(cell)
        }
    }

    /// Whether the neighbour cell of `region` in `direction` is free.
    pub fn has_free_neighbour(&self, region: RegionId, direction: Direction) -> bool {
        self.free_neighbour(region, direction).is_some()
    }

    /// Place `new` in the neighbour cell of `anchor` in `direction` and
    /// record the verified adjacency bidirectionally: both regions'
    /// neighbour maps gain a [`NeighbourLink::Shared`] entry carrying the
    /// shared boundary segments.
    ///
    /// # Errors
    ///
    /// [`PlacementError::RegionAlreadyPlaced`] if `new` occupies a cell,
    /// [`PlacementError::AnchorNotPlaced`] if `anchor` does not,
    /// [`PlacementError::CellOccupied`] if the target cell is taken,
    /// [`PlacementError::UnknownRegion`] if either ID is not in `regions`.
    pub fn place(
        &mut self,
        regions: &mut RegionSet,
        new: RegionId,
        anchor: RegionId,
        direction: Direction,
        boundaries: Vec<BoundaryId>,
    ) -> Result<Cell, PlacementError> {
        let cell = self.occupy(regions, new, anchor, direction)?;
        Self::link(regions, new, anchor, NeighbourLink::Shared(boundaries));
        Ok(cell)
    }

    /// Place `new` next to `anchor` without a verified shared boundary.
    ///
    /// Identical cell bookkeeping to [`place`](PlacementStore::place), but
    /// the adjacency is recorded as [`NeighbourLink::Forced`] carrying the
    /// observed centroid distance, so downstream consumers can tell
    /// synthetic adjacency from real adjacency.
    ///
    /// # Errors
    ///
    /// Same as [`place`](PlacementStore::place).
    pub fn force_place(
        &mut self,
        regions: &mut RegionSet,
        new: RegionId,
        anchor: RegionId,
        direction: Direction,
        observed_distance: f64,
    ) -> Result<Cell, PlacementError> {
        let cell = self.occupy(regions, new, anchor, direction)?;
        Self::link(
            regions,
            new,
            anchor,
            NeighbourLink::Forced {
                distance: observed_distance,
            },
        );
        Ok(cell)
    }

    /// Validate preconditions and occupy the target cell.
    fn occupy(
        &mut self,
        regions: &RegionSet,
        new: RegionId,
        anchor: RegionId,
        direction: Direction,
    ) -> Result<Cell, PlacementError> {
        if !regions.contains(new) {
            return Err(PlacementError::UnknownRegion { region: new });
        }
        if !regions.contains(anchor) {
            return Err(PlacementError::UnknownRegion { region: anchor });
        }
        if self.contains(new) {
            return Err(PlacementError::RegionAlreadyPlaced { region: new });
        }
        let anchor_cell = self
            .cell_of(anchor)
            .ok_or(PlacementError::AnchorNotPlaced { anchor })?;

        let cell = anchor_cell.neighbour(direction);
        if let Some(occupant) = self.region_at(cell) {
            return Err(PlacementError::CellOccupied { cell, occupant });
        }

        self.by_cell.insert(cell, new);
        self.by_region.insert(new, cell);
        Ok(cell)
    }

    /// Record the adjacency on both regions' neighbour maps.
    ///
    /// IDs were validated by `occupy`, so missing regions are unreachable
    /// here; the lookups stay fallible to keep this free of panics anyway.
    fn link(regions: &mut RegionSet, new: RegionId, anchor: RegionId, link: NeighbourLink) {
        if let Some(region) = regions.get_mut(new) {
            region.record_neighbour(Neighbour::Region(anchor), link.clone());
        }
        if let Some(region) = regions.get_mut(anchor) {
            region.record_neighbour(Neighbour::Region(new), link);
        }
    }

    /// Placed regions in placement order.
    pub fn placed(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.by_region.keys().copied()
    }

    /// Placed regions with their cells, in placement order.
    pub fn placed_cells(&self) -> impl Iterator<Item = (RegionId, Cell)> + '_ {
        self.by_region.iter().map(|(&region, &cell)| (region, cell))
    }

    /// Number of placed regions.
    pub fn len(&self) -> usize {
        self.by_region.len()
    }

    /// Whether the store holds no placements. A freshly created store
    /// always holds its origin region, so this never returns `true` in a
    /// resolution run; it exists for API completeness.
    pub fn is_empty(&self) -> bool {
        self.by_region.is_empty()
    }

    /// Snapshot the placements into an immutable, normalised [`HexGrid`].
    pub fn to_grid(&self) -> HexGrid {
        HexGrid::normalised(self.by_cell.iter().map(|(&cell, &region)| (cell, region)))
    }
}
