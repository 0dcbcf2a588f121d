//! Regions, their neighbour model, and the region arena.

use crate::id::{BoundaryId, RegionId};
use crate::point::Point;
use indexmap::IndexMap;

/// Display name returned when a region has no default field.
pub const NO_NAME: &str = "noname";

/// The other side of a recorded adjacency: another region, or the map
/// exterior (sea, unclaimed space) when a boundary belongs to no second
/// region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Neighbour {
    /// No region on the other side of the shared boundary.
    Exterior,
    /// A specific region on the other side.
    Region(RegionId),
}

/// How two regions came to be adjacent on the grid.
///
/// The resolver records `Shared` links when a verified shared boundary
/// exists and `Forced` links when a disconnected region was attached to its
/// nearest placed neighbour by proximity alone. Downstream consumers that
/// care (e.g. a renderer drawing real borders thicker) can tell the two
/// apart.
#[derive(Clone, Debug, PartialEq)]
pub enum NeighbourLink {
    /// Verified adjacency: the boundary segments both regions share.
    Shared(Vec<BoundaryId>),
    /// Synthetic proximity-only adjacency, with the centroid distance that
    /// was observed when the link was forced.
    Forced {
        /// Straight-line centroid distance at placement time.
        distance: f64,
    },
}

/// A named geographic area with a centroid and attribute data.
///
/// The centroid is fixed at construction and never mutated. The attribute
/// table and the neighbour map only ever grow; the neighbour map is
/// populated by the grid resolver as regions are placed, not by `Region`
/// itself.
#[derive(Clone, Debug)]
pub struct Region {
    centroid: Point,
    data: IndexMap<String, String>,
    default_field: Option<String>,
    neighbours: IndexMap<Neighbour, NeighbourLink>,
}

impl Region {
    /// Create a region from its centre of mass.
    pub fn new(centroid: Point) -> Self {
        Self {
            centroid,
            data: IndexMap::new(),
            default_field: None,
            neighbours: IndexMap::new(),
        }
    }

    /// The region's centre of mass, in map units.
    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// Record an attribute value (typically a column from the upstream
    /// attribute table).
    pub fn set_data(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.data.insert(field.into(), value.into());
    }

    /// Look up an attribute value by field name.
    pub fn data(&self, field: &str) -> Option<&str> {
        self.data.get(field).map(String::as_str)
    }

    /// Select which attribute field holds the display name.
    ///
    /// Ignored unless the field already exists in the attribute table.
    pub fn set_default_field(&mut self, field: impl Into<String>) {
        let field = field.into();
        if self.data.contains_key(&field) {
            self.default_field = Some(field);
        }
    }

    /// The currently selected default field, if any.
    pub fn default_field(&self) -> Option<&str> {
        self.default_field.as_deref()
    }

    /// The region's display name: the default field's value, or
    /// [`NO_NAME`] when no default field is set.
    pub fn name(&self) -> &str {
        self.default_field
            .as_deref()
            .and_then(|field| self.data(field))
            .unwrap_or(NO_NAME)
    }

    /// Straight-line distance between this region's centroid and another's.
    pub fn distance_to(&self, other: &Region) -> f64 {
        self.centroid.distance_to(other.centroid)
    }

    /// The recorded adjacencies, in the order they were recorded.
    pub fn neighbours(&self) -> &IndexMap<Neighbour, NeighbourLink> {
        &self.neighbours
    }

    /// Record an adjacency, merging with any existing entry.
    ///
    /// Two `Shared` links for the same neighbour extend the boundary list;
    /// any other combination keeps the existing entry untouched, because a
    /// verified link must never be downgraded to a forced one.
    pub fn record_neighbour(&mut self, neighbour: Neighbour, link: NeighbourLink) {
        match self.neighbours.get_mut(&neighbour) {
            None => {
                self.neighbours.insert(neighbour, link);
            }
            Some(NeighbourLink::Shared(existing)) => {
                if let NeighbourLink::Shared(more) = link {
                    existing.extend(more);
                }
            }
            Some(NeighbourLink::Forced { .. }) => {
                if matches!(link, NeighbourLink::Shared(_)) {
                    self.neighbours.insert(neighbour, link);
                }
            }
        }
    }
}

/// Insertion-ordered arena of [`Region`] values addressed by [`RegionId`].
///
/// IDs are dense indices in insertion order. Insertion order is the input
/// order of the upstream parser and is semantically load-bearing: the grid
/// resolver iterates it for tie-breaking and fallback selection, which is
/// what makes resolution deterministic.
#[derive(Clone, Debug, Default)]
pub struct RegionSet {
    regions: Vec<Region>,
}

impl RegionSet {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a region, returning its ID.
    pub fn insert(&mut self, region: Region) -> RegionId {
        let id = RegionId(self.regions.len() as u32);
        self.regions.push(region);
        id
    }

    /// Look up a region by ID.
    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.index())
    }

    /// Look up a region mutably by ID.
    pub fn get_mut(&mut self, id: RegionId) -> Option<&mut Region> {
        self.regions.get_mut(id.index())
    }

    /// Whether the arena contains this ID.
    pub fn contains(&self, id: RegionId) -> bool {
        id.index() < self.regions.len()
    }

    /// Iterate regions with their IDs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &Region)> {
        self.regions
            .iter()
            .enumerate()
            .map(|(i, r)| (RegionId(i as u32), r))
    }

    /// All IDs in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        (0..self.regions.len()).map(|i| RegionId(i as u32))
    }

    /// Number of regions in the arena.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
