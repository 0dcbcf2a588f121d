//! Error types for placement-store operations.

use crate::cell::Cell;
use hexatlas_core::RegionId;
use std::fmt;

/// Internal-invariant violations raised by the placement store.
///
/// In a correct resolution run none of these occur: the resolver checks
/// cell availability before placing and never re-places a region. A value
/// of this type therefore signals a defect in the caller, not a
/// recoverable condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// The target cell already holds a region.
    CellOccupied {
        /// The contested cell.
        cell: Cell,
        /// The region already in it.
        occupant: RegionId,
    },
    /// The region being placed already occupies a cell.
    RegionAlreadyPlaced {
        /// The twice-placed region.
        region: RegionId,
    },
    /// The anchor region has not been placed yet.
    AnchorNotPlaced {
        /// The missing anchor.
        anchor: RegionId,
    },
    /// A region ID does not exist in the region arena.
    UnknownRegion {
        /// The unknown ID.
        region: RegionId,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOccupied { cell, occupant } => {
                write!(f, "cell {cell} is already occupied by region {occupant}")
            }
            Self::RegionAlreadyPlaced { region } => {
                write!(f, "region {region} is already placed")
            }
            Self::AnchorNotPlaced { anchor } => {
                write!(f, "anchor region {anchor} is not placed")
            }
            Self::UnknownRegion { region } => {
                write!(f, "region {region} does not exist in the region set")
            }
        }
    }
}

impl std::error::Error for PlacementError {}
