//! Strongly-typed identifiers for arena-stored entities.

use std::fmt;

/// Identifies a region within a [`RegionSet`](crate::RegionSet).
///
/// Regions are inserted in parse order and assigned sequential IDs.
/// `RegionId(n)` corresponds to the n-th inserted region. The input order
/// matters: the grid resolver breaks distance ties and picks fallback
/// candidates by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u32);

impl RegionId {
    /// Arena index of this ID.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RegionId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a boundary polyline within a [`BoundarySet`](crate::BoundarySet).
///
/// Boundaries are inserted in parse order and assigned sequential IDs.
/// The simplified boundary list produced by the simplifier keeps the same
/// ordering, so a `BoundaryId` addresses both the raw and the simplified
/// form of the same polyline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoundaryId(pub u32);

impl BoundaryId {
    /// Arena index of this ID.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BoundaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BoundaryId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
