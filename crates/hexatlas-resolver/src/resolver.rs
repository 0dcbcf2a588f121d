//! The frontier-growth placement algorithm.

use crate::adjacency::AdjacencyOracle;
use crate::config::ResolveConfig;
use crate::error::ResolveError;
use hexatlas_core::{Point, RegionId, RegionSet};
use hexatlas_geometry::bearing;
use hexatlas_grid::{Direction, HexGrid, PlacementError, PlacementStore};
use std::cmp::Ordering;

/// Places every region of a [`RegionSet`] onto the hex grid.
///
/// The resolver owns its [`PlacementStore`], frontier, and step counter,
/// so a caller can either [`run`](GridResolver::run) to completion or
/// drive individual [`step`](GridResolver::step)s and snapshot the grid
/// between them (for example to animate placement). One resolver performs
/// one resolution; create a fresh one to resolve again.
///
/// # Examples
///
/// ```
/// use hexatlas_core::{Point, Region, RegionSet};
/// use hexatlas_resolver::{GridResolver, ResolveConfig, SharedBoundaryIndex};
///
/// let mut regions = RegionSet::new();
/// let a = regions.insert(Region::new(Point::new(0.0, 0.0)));
/// let b = regions.insert(Region::new(Point::new(10.0, 0.0)));
///
/// let mut index = SharedBoundaryIndex::new();
/// index.record(a, b, hexatlas_core::BoundaryId(0));
///
/// let mut resolver =
///     GridResolver::new(&mut regions, &index, ResolveConfig::new(a)).unwrap();
/// let grid = resolver.run().unwrap();
/// assert_eq!(grid.len(), 2);
/// ```
pub struct GridResolver<'a, O: AdjacencyOracle> {
    regions: &'a mut RegionSet,
    oracle: &'a O,
    config: ResolveConfig,
    store: PlacementStore,
    /// Regions not yet placed, in input order. Iteration order is the
    /// tie-breaker for candidate selection and the queue for fallback
    /// placement, which is what makes resolution reproducible.
    unplaced: Vec<RegionId>,
    frontier: Option<RegionId>,
    steps: u64,
}

impl<'a, O: AdjacencyOracle> GridResolver<'a, O> {
    /// Validate the config and seed the store with the start region at
    /// the origin cell.
    ///
    /// # Errors
    ///
    /// [`ResolveError::EmptyInput`] or [`ResolveError::UnknownStartRegion`]
    /// when the preconditions of the run do not hold.
    pub fn new(
        regions: &'a mut RegionSet,
        oracle: &'a O,
        config: ResolveConfig,
    ) -> Result<Self, ResolveError> {
        config.validate(regions)?;
        let unplaced = regions.ids().filter(|&id| id != config.start).collect();
        let store = PlacementStore::new(config.start);
        Ok(Self {
            regions,
            oracle,
            config,
            store,
            unplaced,
            frontier: Some(config.start),
            steps: 0,
        })
    }

    /// Run to completion within the configured step budget and snapshot
    /// the grid.
    ///
    /// With an unlimited budget every input region ends up placed; with a
    /// budget, resolution stops once the step counter reaches it.
    ///
    /// # Errors
    ///
    /// [`ResolveError::Placement`] if a store invariant is violated
    /// mid-run, which signals a defect rather than an expected condition.
    pub fn run(&mut self) -> Result<HexGrid, ResolveError> {
        while !self.budget_exhausted() && self.step()? {}
        Ok(self.store.to_grid())
    }

    /// Perform one step: expand the current frontier, or force-place a
    /// disconnected region when the frontier is exhausted.
    ///
    /// Returns `true` while unplaced regions remain. Does nothing (and
    /// counts no step) once every region is placed.
    ///
    /// # Errors
    ///
    /// [`ResolveError::Placement`] on a store-invariant violation.
    pub fn step(&mut self) -> Result<bool, ResolveError> {
        if self.unplaced.is_empty() {
            return Ok(false);
        }
        self.steps += 1;

        match self.frontier {
            Some(frontier) => {
                let slots = self.expand(frontier)?;
                self.frontier = self.advance(&slots);
            }
            None => {
                self.frontier = self.fallback()?;
            }
        }
        Ok(!self.unplaced.is_empty())
    }

    /// Steps performed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Whether every region has been placed.
    pub fn is_done(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// The region the next expansion starts from, if any.
    pub fn frontier(&self) -> Option<RegionId> {
        self.frontier
    }

    /// The placements made so far.
    pub fn store(&self) -> &PlacementStore {
        &self.store
    }

    /// Snapshot the current placements without ending the run.
    pub fn grid(&self) -> HexGrid {
        self.store.to_grid()
    }

    fn budget_exhausted(&self) -> bool {
        self.config
            .max_steps
            .is_some_and(|budget| self.steps >= budget)
    }

    /// Expand the frontier: for each direction with a free neighbour
    /// cell, place the nearest unplaced region lying in that direction,
    /// provided it shares a verified boundary with the frontier. Returns
    /// the regions placed this step, indexed by direction.
    fn expand(&mut self, frontier: RegionId) -> Result<[Option<RegionId>; 6], ResolveError> {
        let origin = self.centroid_of(frontier)?;
        let mut slots = [None; 6];

        for direction in Direction::ALL {
            if !self.store.has_free_neighbour(frontier, direction) {
                continue;
            }
            let Some((position, candidate)) = self.nearest_in_direction(origin, direction) else {
                continue;
            };
            // Only the nearest candidate is tested; an unverified nearest
            // leaves the direction empty rather than falling through to
            // the next-nearest.
            let Some(shared) = self.oracle.shared_boundaries(frontier, candidate) else {
                continue;
            };
            self.store
                .place(self.regions, candidate, frontier, direction, shared)?;
            self.unplaced.remove(position);
            slots[direction.index()] = Some(candidate);
        }
        Ok(slots)
    }

    /// The unplaced region whose bearing from `origin` classifies into
    /// `direction`, minimising centroid distance. Ties go to the earliest
    /// entry in the unplaced queue.
    fn nearest_in_direction(&self, origin: Point, direction: Direction) -> Option<(usize, RegionId)> {
        let mut best: Option<(usize, RegionId, f64)> = None;
        for (position, &candidate) in self.unplaced.iter().enumerate() {
            let centroid = self.regions.get(candidate)?.centroid();
            if Direction::from_bearing(bearing(origin, centroid)) != direction {
                continue;
            }
            let distance = origin.distance_to(centroid);
            if best.is_none_or(|(_, _, d)| distance < d) {
                best = Some((position, candidate, distance));
            }
        }
        best.map(|(position, candidate, _)| (position, candidate))
    }

    /// Choose the next frontier among the regions just placed: scan the
    /// six direction slots starting at the configured direction, rotating
    /// in the configured sense, and take the first occupied slot.
    fn advance(&self, slots: &[Option<RegionId>; 6]) -> Option<RegionId> {
        let start = self.config.start_direction.index();
        (0..Direction::COUNT).find_map(|i| {
            let index = if self.config.clockwise {
                (start + i) % Direction::COUNT
            } else {
                (start + Direction::COUNT - i) % Direction::COUNT
            };
            slots[index]
        })
    }

    /// Force-place the first unplaced region next to its nearest placed
    /// counterpart, in the direction opposite to the bearing from the new
    /// region to that counterpart (the nearest region is treated as lying
    /// in the direction the new region is approached from). If the
    /// preferred cell is taken, the anchor's remaining directions are
    /// scanned in canonical rotation, then the next-nearest anchors.
    ///
    /// Returns the newly placed region, which becomes the frontier.
    fn fallback(&mut self) -> Result<Option<RegionId>, ResolveError> {
        let Some(&candidate) = self.unplaced.first() else {
            return Ok(None);
        };
        let centroid = self.centroid_of(candidate)?;

        // Placed regions by increasing centroid distance; stable sort
        // keeps placement order on ties.
        let mut anchors: Vec<(RegionId, f64)> = Vec::with_capacity(self.store.len());
        for placed in self.store.placed() {
            let distance = centroid.distance_to(self.centroid_of(placed)?);
            anchors.push((placed, distance));
        }
        anchors.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

        for (anchor, distance) in anchors {
            let anchor_centroid = self.centroid_of(anchor)?;
            let preferred = Direction::from_bearing(bearing(centroid, anchor_centroid)).opposite();
            for turn in 0..Direction::COUNT {
                let direction = Direction::from_index(preferred.index() + turn);
                if self.store.has_free_neighbour(anchor, direction) {
                    self.store
                        .force_place(self.regions, candidate, anchor, direction, distance)?;
                    self.unplaced.retain(|&id| id != candidate);
                    return Ok(Some(candidate));
                }
            }
        }

        // Unreachable on the unbounded grid: the outermost placed cells
        // always have free neighbours.
        Ok(None)
    }

    fn centroid_of(&self, region: RegionId) -> Result<Point, ResolveError> {
        self.regions
            .get(region)
            .map(|r| r.centroid())
            .ok_or(ResolveError::Placement(PlacementError::UnknownRegion {
                region,
            }))
    }
}

/// A resolution strategy over a whole region set.
///
/// The one-method seam rendering callers program against; the standard
/// implementation is [`DefaultResolver`].
pub trait Resolver {
    /// Place every region and return the resulting grid.
    ///
    /// # Errors
    ///
    /// [`ResolveError`] on precondition or invariant violations.
    fn resolve(&self, regions: &mut RegionSet) -> Result<HexGrid, ResolveError>;
}

/// The conventional strategy: start from the first region in input order,
/// scan from north-east, clockwise, unlimited budget.
#[derive(Clone, Debug)]
pub struct DefaultResolver<O: AdjacencyOracle> {
    oracle: O,
}

impl<O: AdjacencyOracle> DefaultResolver<O> {
    /// Wrap an adjacency oracle into the default strategy.
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }
}

impl<O: AdjacencyOracle> Resolver for DefaultResolver<O> {
    fn resolve(&self, regions: &mut RegionSet) -> Result<HexGrid, ResolveError> {
        let Some(first) = regions.ids().next() else {
            return Err(ResolveError::EmptyInput);
        };
        GridResolver::new(regions, &self.oracle, ResolveConfig::new(first))?.run()
    }
}
