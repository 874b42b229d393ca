//! Geometry primitives: [`Point`] and [`Range`].
//!
//! Coordinates are integer cells. X grows right (east), Y grows down
//! (south), so "north" is `y - 1`.

use std::fmt;
use std::ops::{Add, Sub};

use crate::direction::Direction;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer cell coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The adjacent cell in direction `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        self + dir.offset()
    }

    /// The four cardinal neighbours in N, E, S, W order.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        Direction::CARDINAL.map(|d| self.step(d))
    }

    /// All eight neighbours in N, NE, E, SE, S, SW, W, NW order.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Angle from `self` to `other` in radians, as `atan2(dy, dx)`.
    ///
    /// Because Y grows downward, a target directly south yields `+π/2`.
    pub fn angle_to(self, other: Point) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        dy.atan2(dx)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners and canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// The range covering both corners inclusively.
    ///
    /// The exclusive bound saturates, so a corner on `i32::MAX` leaves that
    /// last row or column out instead of overflowing.
    #[inline]
    pub fn inclusive(top_left: Point, bottom_right: Point) -> Self {
        let r = Self::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y);
        Self {
            min: r.min,
            max: Point::new(r.max.x.saturating_add(1), r.max.y.saturating_add(1)),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Intersection of two ranges. Disjoint ranges yield the zero range.
    #[inline]
    pub fn intersect(self, other: Range) -> Self {
        let r = Self {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let remaining_in_row = (self.range.max.x - self.cur.x) as usize;
        let remaining_rows = (self.range.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
    }

    #[test]
    fn point_display() {
        assert_eq!(Point::new(3, -1).to_string(), "(3, -1)");
    }

    #[test]
    fn neighbors_follow_compass_order() {
        let p = Point::new(4, 4);
        assert_eq!(
            p.neighbors_4(),
            [
                Point::new(4, 3),
                Point::new(5, 4),
                Point::new(4, 5),
                Point::new(3, 4),
            ]
        );
        let n8 = p.neighbors_8();
        assert_eq!(n8[0], Point::new(4, 3));
        assert_eq!(n8[1], Point::new(5, 3));
        assert_eq!(n8[3], Point::new(5, 5));
        assert_eq!(n8[7], Point::new(3, 3));
    }

    #[test]
    fn angle_to_matches_atan2() {
        let a = Point::new(1, 1);
        let b = Point::new(2, 7);
        assert!((a.angle_to(b) - 1.405_647_649_380_269_9).abs() < 1e-9);
        assert_eq!(a.angle_to(Point::new(5, 1)), 0.0);
    }

    #[test]
    fn range_basics() {
        let r = Range::new(0, 0, 3, 2);
        assert_eq!((r.width(), r.height()), (3, 2));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!(r.max, Point::new(3, 2));
    }

    #[test]
    fn range_inclusive_corners() {
        let r = Range::inclusive(Point::new(2, 2), Point::new(4, 3));
        assert_eq!(r.iter().len(), 6);
        assert!(r.contains(Point::new(4, 3)));
        assert!(!r.contains(Point::new(5, 3)));
        let single = Range::inclusive(Point::new(1, 1), Point::new(1, 1));
        assert_eq!(single.iter().collect::<Vec<_>>(), vec![Point::new(1, 1)]);
    }

    #[test]
    fn range_inclusive_saturates_at_max() {
        let r = Range::inclusive(Point::new(0, 0), Point::new(i32::MAX, i32::MAX));
        assert_eq!(r.max, Point::new(i32::MAX, i32::MAX));
        assert!(!r.is_empty());
        let clipped = r.intersect(Range::new(0, 0, 5, 5));
        assert_eq!(clipped, Range::new(0, 0, 5, 5));
    }

    #[test]
    fn range_iter_row_major() {
        let r = Range::new(0, 0, 3, 2);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[3], Point::new(0, 1));
        assert_eq!(pts[5], Point::new(2, 1));
        assert_eq!(r.iter().len(), 6);
    }

    #[test]
    fn range_intersect() {
        let a = Range::new(0, 0, 4, 4);
        let b = Range::new(2, 2, 6, 6);
        assert_eq!(a.intersect(b), Range::new(2, 2, 4, 4));
        let c = Range::new(5, 5, 7, 7);
        assert!(a.intersect(c).is_empty());
        assert_eq!(a.intersect(c), Range::default());
    }
}
