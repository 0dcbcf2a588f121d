//! Core types for the Hexatlas spatial processing workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental vocabulary shared by every Hexatlas crate: strongly-typed
//! identifiers, the [`Point`] value type, polyline containers
//! ([`Boundary`], [`RawPolygon`]), and the [`Region`] model with its
//! insertion-ordered arenas ([`RegionSet`], [`BoundarySet`]).
//!
//! Regions never hold references to each other. All cross-region
//! relationships are expressed through [`RegionId`] entries in a region's
//! neighbour map, so the object graph stays cycle-free and the arenas stay
//! trivially growable.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod id;
pub mod point;
pub mod region;

pub use boundary::{Boundary, BoundarySet, RawPolygon};
pub use id::{BoundaryId, RegionId};
pub use point::Point;
pub use region::{Neighbour, NeighbourLink, Region, RegionSet};
