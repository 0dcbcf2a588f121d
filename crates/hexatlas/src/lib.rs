//! Hexatlas: boundary simplification and hex-grid placement for
//! geographic regions.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Hexatlas sub-crates. For most users, adding `hexatlas` as a single
//! dependency is sufficient.
//!
//! Hexatlas consumes already-parsed region data (centroids, attribute
//! tables, boundary polylines) and produces two artifacts for a renderer:
//! a simplified version of every boundary, and a placement of every
//! region onto a discrete hexagonal grid that approximates the regions'
//! real relative directions and adjacency. Parsing shapefiles and drawing
//! the results are collaborator concerns and live outside this workspace.
//!
//! # Quick start
//!
//! ```rust
//! use hexatlas::prelude::*;
//!
//! // Two regions side by side, sharing one vertical boundary.
//! let mut regions = RegionSet::new();
//! let west = regions.insert(Region::new(Point::new(0.0, 0.0)));
//! let east = regions.insert(Region::new(Point::new(10.0, 0.0)));
//!
//! let mut boundaries = BoundarySet::new();
//! let shared = boundaries.insert(Boundary::new(vec![
//!     Point::new(5.0, -5.0),
//!     Point::new(5.0, 5.0),
//! ]));
//!
//! let mut index = SharedBoundaryIndex::new();
//! index.record(west, east, shared);
//!
//! // Place both regions on the hex grid.
//! let mut resolver =
//!     GridResolver::new(&mut regions, &index, ResolveConfig::new(west)).unwrap();
//! let grid = resolver.run().unwrap();
//! assert_eq!((grid.width(), grid.height()), (2, 1));
//! assert_eq!(grid.get(0, 0), Some(west));
//! assert_eq!(grid.get(1, 0), Some(east));
//!
//! // Thin the boundaries for rendering.
//! let simplified = simplify_all(&boundaries, 0.3).unwrap();
//! assert_eq!(simplified.len(), 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hexatlas-core` | IDs, points, boundaries, regions, arenas |
//! | [`geometry`] | `hexatlas-geometry` | Primitives and the boundary simplifier |
//! | [`grid`] | `hexatlas-grid` | Directions, cells, placement store, grid snapshot |
//! | [`resolver`] | `hexatlas-resolver` | Adjacency oracle and the grid resolver |
//!
//! The [`map::GeoMap`] type in this crate bundles a parsed map's regions
//! and boundaries with their simplified forms, ready to hand to a
//! renderer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod map;

/// Core types and arenas (`hexatlas-core`).
///
/// Contains [`types::Point`], [`types::Region`], [`types::Boundary`], the
/// ID types, and the insertion-ordered arenas.
pub use hexatlas_core as types;

/// Geometry primitives and the boundary simplifier (`hexatlas-geometry`).
///
/// Provides [`geometry::bearing`], [`geometry::polygon_centroid`], and
/// [`geometry::simplify`].
pub use hexatlas_geometry as geometry;

/// Hex-grid spatial model (`hexatlas-grid`).
///
/// Provides [`grid::Direction`], [`grid::Cell`], [`grid::PlacementStore`],
/// and the immutable [`grid::HexGrid`] snapshot.
pub use hexatlas_grid as grid;

/// The placement resolver (`hexatlas-resolver`).
///
/// Provides [`resolver::GridResolver`], [`resolver::ResolveConfig`], and
/// the [`resolver::AdjacencyOracle`] seam.
pub use hexatlas_resolver as resolver;

pub use map::{GeoMap, DEFAULT_SIMPLIFY_TOLERANCE};

/// Common imports for typical Hexatlas usage.
///
/// ```rust
/// use hexatlas::prelude::*;
/// ```
pub mod prelude {
    // Core types and arenas
    pub use hexatlas_core::{
        Boundary, BoundaryId, BoundarySet, Neighbour, NeighbourLink, Point, RawPolygon, Region,
        RegionId, RegionSet,
    };

    // Geometry
    pub use hexatlas_geometry::{
        bearing, main_polygon, polygon_centroid, simplify, simplify_all, SimplifyError,
    };

    // Grid
    pub use hexatlas_grid::{Cell, Direction, HexGrid, PlacementError, PlacementStore};

    // Resolver
    pub use hexatlas_resolver::{
        AdjacencyOracle, DefaultResolver, GridResolver, ResolveConfig, ResolveError, Resolver,
        SharedBoundaryIndex,
    };

    // Facade
    pub use crate::map::GeoMap;
}
