//! Resolution parameters and their validation.

use crate::error::ResolveError;
use hexatlas_core::{RegionId, RegionSet};
use hexatlas_grid::Direction;

/// Parameters of one resolution run.
///
/// For fixed inputs and a fixed config, resolution is fully
/// deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolveConfig {
    /// The region placed first, at the origin cell.
    pub start: RegionId,
    /// Where the frontier-advance scan starts on the 6-cycle.
    pub start_direction: Direction,
    /// Rotational sense of the frontier-advance scan: `true` scans by
    /// increasing direction index mod 6, `false` by decreasing.
    pub clockwise: bool,
    /// Step budget; `None` runs until every region is placed. One step is
    /// one frontier expansion or one fallback placement, so a caller can
    /// animate placement by resolving incrementally.
    pub max_steps: Option<u64>,
}

impl ResolveConfig {
    /// Config with the conventional defaults: scan from north-east,
    /// clockwise, unlimited budget.
    pub fn new(start: RegionId) -> Self {
        Self {
            start,
            start_direction: Direction::NorthEast,
            clockwise: true,
            max_steps: None,
        }
    }

    /// Check the preconditions of a run against the input regions.
    ///
    /// # Errors
    ///
    /// [`ResolveError::EmptyInput`] for an empty region set;
    /// [`ResolveError::UnknownStartRegion`] when the start region is not
    /// in the set.
    pub fn validate(&self, regions: &RegionSet) -> Result<(), ResolveError> {
        if regions.is_empty() {
            return Err(ResolveError::EmptyInput);
        }
        if !regions.contains(self.start) {
            return Err(ResolveError::UnknownStartRegion { region: self.start });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexatlas_core::{Point, Region};

    #[test]
    fn defaults() {
        let config = ResolveConfig::new(RegionId(3));
        assert_eq!(config.start, RegionId(3));
        assert_eq!(config.start_direction, Direction::NorthEast);
        assert!(config.clockwise);
        assert_eq!(config.max_steps, None);
    }

    #[test]
    fn validate_rejects_empty_input() {
        let regions = RegionSet::new();
        assert_eq!(
            ResolveConfig::new(RegionId(0)).validate(&regions),
            Err(ResolveError::EmptyInput)
        );
    }

    #[test]
    fn validate_rejects_unknown_start() {
        let mut regions = RegionSet::new();
        regions.insert(Region::new(Point::new(0.0, 0.0)));
        assert_eq!(
            ResolveConfig::new(RegionId(5)).validate(&regions),
            Err(ResolveError::UnknownStartRegion { region: RegionId(5) })
        );
        assert_eq!(ResolveConfig::new(RegionId(0)).validate(&regions), Ok(()));
    }
}
