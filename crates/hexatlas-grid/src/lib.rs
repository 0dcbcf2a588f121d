//! Hex-grid spatial model: directions, offset cells, the placement store,
//! and the immutable grid snapshot.
//!
//! The grid uses row-offset addressing over pointy-top hexagons: even rows
//! (`row.rem_euclid(2) == 0`) sit half a cell to the right of odd rows,
//! matching the rendering layout. North is `row - 1`. Each cell has six
//! neighbours, one per [`Direction`].
//!
//! [`Direction`] doubles as a bearing classifier: the six 60° sectors of
//! the compass are centred on the exact bearings from a cell centre to its
//! six neighbour centres, so classifying the bearing to a neighbour cell
//! round-trips to the direction of that neighbour.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod error;
pub mod hexgrid;
pub mod store;

pub use cell::Cell;
pub use direction::Direction;
pub use error::PlacementError;
pub use hexgrid::HexGrid;
pub use store::PlacementStore;
