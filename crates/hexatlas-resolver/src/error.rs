//! Error types for grid resolution.

use hexatlas_core::RegionId;
use hexatlas_grid::PlacementError;
use std::error::Error;
use std::fmt;

/// Errors from [`GridResolver`](crate::GridResolver).
///
/// `EmptyInput` and `UnknownStartRegion` are configuration errors caught
/// up front. `Placement` wraps a store-invariant violation surfacing
/// mid-run; in a correct resolver that is a defect, never an expected
/// outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// The input region set is empty.
    EmptyInput,
    /// The configured start region is not in the input set.
    UnknownStartRegion {
        /// The missing start region.
        region: RegionId,
    },
    /// The placement store rejected an operation.
    Placement(PlacementError),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "cannot resolve an empty region set"),
            Self::UnknownStartRegion { region } => {
                write!(f, "start region {region} is not in the input set")
            }
            Self::Placement(inner) => write!(f, "placement failed: {inner}"),
        }
    }
}

impl Error for ResolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Placement(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<PlacementError> for ResolveError {
    fn from(inner: PlacementError) -> Self {
        Self::Placement(inner)
    }
}
