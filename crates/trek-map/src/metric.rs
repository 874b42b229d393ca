//! Grid distance metrics and the heuristics built from them.

use std::fmt;
use std::str::FromStr;

use trek_astar::{Heuristic, Node};
use trek_core::Point;

use crate::error::MapError;

/// Straight-line (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    dx.hypot(dy)
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance: the number of king moves between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// A named distance metric, usable directly as an A* heuristic over
/// [`Point`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metric {
    Euclidean,
    Manhattan,
    /// Chebyshev distance, admissible when diagonal moves are allowed.
    SpecialManhattan,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Euclidean, Metric::Manhattan, Metric::SpecialManhattan];

    pub const fn name(self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::Manhattan => "manhattan",
            Metric::SpecialManhattan => "specialmanhattan",
        }
    }

    pub fn distance(self, a: Point, b: Point) -> f64 {
        match self {
            Metric::Euclidean => euclidean(a, b),
            Metric::Manhattan => f64::from(manhattan(a, b)),
            Metric::SpecialManhattan => f64::from(chebyshev(a, b)),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| MapError::UnknownMetric(s.to_string()))
    }
}

impl Heuristic<Point> for Metric {
    #[inline]
    fn h(&self, node: &Node<Point>, goal: &Node<Point>) -> f64 {
        self.distance(*node.element(), *goal.element())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 5);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(chebyshev(a, a), 0);
    }

    #[test]
    fn parse_by_name() {
        for m in Metric::ALL {
            assert_eq!(m.name().parse::<Metric>(), Ok(m));
        }
        assert_eq!(
            "taxicab".parse::<Metric>(),
            Err(MapError::UnknownMetric("taxicab".into()))
        );
        assert!("Manhattan".parse::<Metric>().is_err());
    }

    #[test]
    fn metric_as_heuristic() {
        let n = Node::new(Point::new(0, 0));
        let g = Node::new(Point::new(3, 4));
        assert_eq!(Metric::Euclidean.h(&n, &g), 5.0);
        assert_eq!(Metric::Manhattan.h(&n, &g), 7.0);
        assert_eq!(Metric::SpecialManhattan.h(&n, &g), 4.0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn metric_serializes_by_name() {
        assert_eq!(
            serde_json::to_string(&Metric::SpecialManhattan).unwrap(),
            "\"specialmanhattan\""
        );
        let m: Metric = serde_json::from_str("\"euclidean\"").unwrap();
        assert_eq!(m, Metric::Euclidean);
    }
}
