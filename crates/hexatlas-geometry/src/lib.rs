//! Geometry primitives and the boundary simplifier.
//!
//! This crate holds the stateless math of the spatial core: distances,
//! bearings, along-path lengths, polygon centroids, and the recursive
//! boundary simplification used to thin region outlines for fast
//! rendering.
//!
//! The model is flat 2D Euclidean. Bearings are measured clockwise from
//! "up": a target directly above the reference is at 0°, directly to the
//! right at 90°.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod primitives;
pub mod simplify;

pub use error::SimplifyError;
pub use primitives::{bearing, distance, main_polygon, path_length, polygon_centroid};
pub use simplify::{simplify, simplify_all};
