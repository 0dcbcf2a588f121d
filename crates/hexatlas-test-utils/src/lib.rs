//! Shared fixtures for Hexatlas tests and benchmarks.
//!
//! Small hand-checkable maps ([`square_ring`], [`strip_map`],
//! [`isolated_triple`]) and a parameterised rectangular map
//! ([`grid_map`]) for integration tests and benches.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{grid_map, isolated_triple, square_ring, strip_map, wavy_boundary};
