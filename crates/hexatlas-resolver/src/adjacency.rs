//! The external boundary-intersection seam.

use hexatlas_core::{BoundaryId, RegionId};
use indexmap::IndexMap;

/// Answers whether two regions share a verified boundary.
///
/// The geometric test itself belongs to the parsing collaborator, which
/// has the polygon data; the resolver only needs a yes/no (plus the shared
/// segments for bookkeeping). Implementations must fail closed: a pair the
/// oracle knows nothing about is "not adjacent", never an error, because
/// the resolver's progress depends on getting an answer for every
/// candidate pair.
pub trait AdjacencyOracle {
    /// The boundary segments shared by `a` and `b`, or `None` when no
    /// verified shared boundary is known.
    fn shared_boundaries(&self, a: RegionId, b: RegionId) -> Option<Vec<BoundaryId>>;

    /// Whether a verified shared boundary is known for the pair.
    fn are_adjacent(&self, a: RegionId, b: RegionId) -> bool {
        self.shared_boundaries(a, b).is_some()
    }
}

/// The standard [`AdjacencyOracle`]: a prebuilt index over unordered
/// region pairs, populated by the parsing collaborator while it assigns
/// boundary segments to regions.
///
/// An empty index is a valid oracle that reports every pair as not
/// adjacent, which drives the resolver entirely through its fallback
/// path.
#[derive(Clone, Debug, Default)]
pub struct SharedBoundaryIndex {
    pairs: IndexMap<(RegionId, RegionId), Vec<BoundaryId>>,
}

impl SharedBoundaryIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one shared boundary segment between two regions.
    ///
    /// The pair is unordered; recording `(a, b)` and `(b, a)` accumulates
    /// into the same entry. Recording a region against itself is ignored.
    pub fn record(&mut self, a: RegionId, b: RegionId, boundary: BoundaryId) {
        if a == b {
            return;
        }
        self.pairs.entry(Self::key(a, b)).or_default().push(boundary);
    }

    /// Number of adjacent pairs known to the index.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the index knows no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn key(a: RegionId, b: RegionId) -> (RegionId, RegionId) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

impl AdjacencyOracle for SharedBoundaryIndex {
    fn shared_boundaries(&self, a: RegionId, b: RegionId) -> Option<Vec<BoundaryId>> {
        if a == b {
            return None;
        }
        self.pairs.get(&Self::key(a, b)).cloned()
    }
}
