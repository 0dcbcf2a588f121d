//! The six discrete hex directions and the bearing classifier.

use std::fmt;

/// One of the six 60°-spaced directions around a hex cell.
///
/// Doubles as a bearing classifier and a neighbour-offset selector.
/// Canonical order is clockwise by increasing bearing, starting at
/// north-east:
///
/// | direction | canonical bearing | sector |
/// |---|---|---|
/// | `NorthEast` | 30° | [0°, 60°) |
/// | `East` | 90° | [60°, 120°) |
/// | `SouthEast` | 150° | [120°, 180°) |
/// | `SouthWest` | 210° | [180°, 240°) |
/// | `West` | 270° | [240°, 300°) |
/// | `NorthWest` | 330° | [300°, 360°) |
///
/// The canonical bearings are the exact bearings from a cell centre to its
/// six neighbour centres in the row-offset layout, so
/// [`from_bearing`](Direction::from_bearing) round-trips for every
/// neighbour offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Up and to the right; bearing sector [0°, 60°).
    NorthEast,
    /// Directly right; bearing sector [60°, 120°).
    East,
    /// Down and to the right; bearing sector [120°, 180°).
    SouthEast,
    /// Down and to the left; bearing sector [180°, 240°).
    SouthWest,
    /// Directly left; bearing sector [240°, 300°).
    West,
    /// Up and to the left; bearing sector [300°, 360°).
    NorthWest,
}

impl Direction {
    /// All six directions in canonical (clockwise) order.
    ///
    /// This is the default scan order for adjacency checks and the base of
    /// the resolver's rotational frontier scan.
    pub const ALL: [Direction; 6] = [
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Number of directions.
    pub const COUNT: usize = 6;

    /// Position of this direction in the canonical order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction at a canonical-order position; the index wraps mod 6.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Classify a bearing in degrees into its 60° sector.
    ///
    /// Bearings outside `[0, 360)` are normalised first.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexatlas_grid::Direction;
    ///
    /// assert_eq!(Direction::from_bearing(0.0), Direction::NorthEast);
    /// assert_eq!(Direction::from_bearing(90.0), Direction::East);
    /// assert_eq!(Direction::from_bearing(359.9), Direction::NorthWest);
    /// ```
    pub fn from_bearing(bearing: f64) -> Self {
        let normalised = bearing.rem_euclid(360.0);
        let sector = ((normalised / 60.0) as usize).min(Self::COUNT - 1);
        Self::ALL[sector]
    }

    /// The canonical bearing of this direction: the centre of its sector,
    /// and the exact bearing to the neighbour cell it selects.
    pub fn bearing(self) -> f64 {
        30.0 + 60.0 * self.index() as f64
    }

    /// The direction three steps away on the 6-cycle (rotated 180°).
    ///
    /// ```
    /// use hexatlas_grid::Direction;
    ///
    /// assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
    /// assert_eq!(Direction::West.opposite(), Direction::East);
    /// ```
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % Self::COUNT]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NorthEast => "north-east",
            Self::East => "east",
            Self::SouthEast => "south-east",
            Self::SouthWest => "south-west",
            Self::West => "west",
            Self::NorthWest => "north-west",
        };
        write!(f, "{name}")
    }
}
