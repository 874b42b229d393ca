//! The eight compass directions and their grid offsets.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::geom::Point;

/// A compass direction on the grid, in clockwise order starting at north.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Returned when a direction code is not one of `N`, `NE`, ... `NW`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction code `{0}`")]
pub struct ParseDirectionError(pub String);

impl Direction {
    /// All directions in ordinal order: N, NE, E, SE, S, SW, W, NW.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The non-diagonal directions: N, E, S, W.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Index of the direction in [`Direction::ALL`].
    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Inverse of [`ordinal`](Self::ordinal), wrapping modulo 8.
    #[inline]
    pub const fn from_ordinal(i: usize) -> Self {
        Self::ALL[i % 8]
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::NorthEast | Direction::SouthEast | Direction::SouthWest | Direction::NorthWest
        )
    }

    /// Unit offset of one step in this direction.
    pub const fn offset(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::NorthEast => Point::new(1, -1),
            Direction::East => Point::new(1, 0),
            Direction::SouthEast => Point::new(1, 1),
            Direction::South => Point::new(0, 1),
            Direction::SouthWest => Point::new(-1, 1),
            Direction::West => Point::new(-1, 0),
            Direction::NorthWest => Point::new(-1, -1),
        }
    }

    /// Short code: `"N"`, `"NE"`, `"E"`, ...
    pub const fn code(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }

    /// This direction followed by its clockwise and counter-clockwise
    /// neighbours, e.g. `N` gives `[N, NE, NW]`.
    pub const fn similar(self) -> [Direction; 3] {
        let i = self.ordinal();
        [self, Self::from_ordinal(i + 1), Self::from_ordinal(i + 7)]
    }

    /// The direction of the 45° sector containing the bearing from `src`
    /// to `tgt`.
    ///
    /// Sectors start at each compass point and run clockwise, so a bearing
    /// slightly south of east still resolves to `East`. Equal points resolve
    /// to `East`.
    pub fn toward(src: Point, tgt: Point) -> Direction {
        let degrees = src.angle_to(tgt) * 180.0 / PI;
        let bearing = degrees + 360.0;
        let sector = (bearing / 360.0 * 8.0).floor() as usize;
        Self::from_ordinal(sector + 2)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.code() == s)
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}
