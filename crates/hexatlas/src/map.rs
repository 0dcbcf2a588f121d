//! The assembled map: regions, boundaries, and their simplified forms.

use hexatlas_core::{Boundary, BoundarySet, RegionSet};
use hexatlas_geometry::{simplify_all, SimplifyError};

/// Simplification tolerance applied when none is given.
///
/// Tuned against country-scale shapefiles in degree units; callers
/// working in other units should pass their own tolerance.
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 0.3;

/// Everything the rendering collaborator needs about the unprojected map:
/// its extent, its regions, its raw boundaries, and a simplified version
/// of every boundary computed once at construction.
///
/// The simplified list parallels the boundary arena: entry `i` is the
/// simplified form of the boundary with ID `i`.
#[derive(Clone, Debug)]
pub struct GeoMap {
    width: f64,
    height: f64,
    regions: RegionSet,
    boundaries: BoundarySet,
    simple_boundaries: Vec<Boundary>,
}

impl GeoMap {
    /// Assemble a map, simplifying every boundary with the
    /// [default tolerance](DEFAULT_SIMPLIFY_TOLERANCE).
    ///
    /// # Errors
    ///
    /// [`SimplifyError`] if any boundary has fewer than 2 points.
    pub fn new(
        width: f64,
        height: f64,
        regions: RegionSet,
        boundaries: BoundarySet,
    ) -> Result<Self, SimplifyError> {
        Self::with_tolerance(width, height, regions, boundaries, DEFAULT_SIMPLIFY_TOLERANCE)
    }

    /// Assemble a map with a caller-chosen simplification tolerance.
    ///
    /// # Errors
    ///
    /// [`SimplifyError`] if any boundary has fewer than 2 points or the
    /// tolerance is invalid.
    pub fn with_tolerance(
        width: f64,
        height: f64,
        regions: RegionSet,
        boundaries: BoundarySet,
        tolerance: f64,
    ) -> Result<Self, SimplifyError> {
        let simple_boundaries = simplify_all(&boundaries, tolerance)?;
        Ok(Self {
            width,
            height,
            regions,
            boundaries,
            simple_boundaries,
        })
    }

    /// Total map width (x extent) in map units.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Total map height (y extent) in map units.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The map's regions.
    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }

    /// Mutable access to the regions, for the resolver and for attribute
    /// updates.
    pub fn regions_mut(&mut self) -> &mut RegionSet {
        &mut self.regions
    }

    /// The raw boundaries as parsed.
    pub fn boundaries(&self) -> &BoundarySet {
        &self.boundaries
    }

    /// The simplified boundaries, in the same order as the raw arena.
    pub fn simple_boundaries(&self) -> &[Boundary] {
        &self.simple_boundaries
    }

    /// Select the attribute field holding the display name on every
    /// region. Regions without that field keep their fallback name.
    pub fn set_region_names(&mut self, field: &str) {
        for id in self.regions.ids().collect::<Vec<_>>() {
            if let Some(region) = self.regions.get_mut(id) {
                region.set_default_field(field);
            }
        }
    }
}
