//! The grid resolver: places regions onto the hex grid so that grid
//! adjacency approximates real relative directions and adjacency.
//!
//! Resolution grows outward from a start region. Each step expands the
//! current frontier region: for every direction with a free neighbour
//! cell, the nearest unplaced region lying in that direction is placed
//! next to the frontier, provided the two share a verified boundary. When
//! the frontier is exhausted, a disconnected region is force-placed next
//! to its nearest placed counterpart, so islands end up adjacent to the
//! mainland they are closest to.
//!
//! The boundary-intersection test is an external concern behind the
//! [`AdjacencyOracle`] trait; the resolver only requires that it answers
//! for every candidate pair and fails closed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod config;
pub mod error;
pub mod resolver;

pub use adjacency::{AdjacencyOracle, SharedBoundaryIndex};
pub use config::ResolveConfig;
pub use error::ResolveError;
pub use resolver::{DefaultResolver, GridResolver, Resolver};
