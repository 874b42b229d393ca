//! Random coordinate sampling.
//!
//! Every sampler takes the caller's generator, so results are reproducible
//! with a seeded one. The `free` variants draw only among cells that are
//! free when called and fail with [`MapError::NoFreeCell`] when there are
//! none.

use rand::Rng;
use trek_core::{Point, Range};

use crate::error::MapError;
use crate::map::GridMap;

fn pick(candidates: &[Point], rng: &mut impl Rng) -> Result<Point, MapError> {
    if candidates.is_empty() {
        return Err(MapError::NoFreeCell);
    }
    Ok(candidates[rng.random_range(0..candidates.len())])
}

impl<T> GridMap<T> {
    /// Any cell of the map, occupied or not. `None` on an empty map.
    pub fn random_coordinates(&self, rng: &mut impl Rng) -> Option<Point> {
        if self.bounds().is_empty() {
            return None;
        }
        Some(Point::new(
            rng.random_range(0..self.width()),
            rng.random_range(0..self.height()),
        ))
    }

    /// A uniformly chosen free cell.
    pub fn random_free_coordinates(&self, rng: &mut impl Rng) -> Result<Point, MapError> {
        let free: Vec<Point> = self.bounds().iter().filter(|&p| self.is_free(p)).collect();
        pick(&free, rng)
    }

    /// A uniformly chosen free cell among `candidates`. Occupied and
    /// off-map candidates are never returned.
    pub fn random_free_from(&self, candidates: &[Point], rng: &mut impl Rng) -> Result<Point, MapError> {
        let free: Vec<Point> = candidates.iter().copied().filter(|&p| self.is_free(p)).collect();
        pick(&free, rng)
    }

    /// Any point of the inclusive rectangle spanned by the two corners.
    /// The rectangle is not clipped to the map.
    pub fn random_coordinates_in(&self, top_left: Point, bottom_right: Point, rng: &mut impl Rng) -> Point {
        let r = Range::inclusive(top_left, bottom_right);
        Point::new(
            rng.random_range(r.min.x..r.max.x),
            rng.random_range(r.min.y..r.max.y),
        )
    }

    /// A uniformly chosen free cell inside the inclusive rectangle spanned
    /// by the two corners.
    pub fn random_free_coordinates_in(
        &self,
        top_left: Point,
        bottom_right: Point,
        rng: &mut impl Rng,
    ) -> Result<Point, MapError> {
        let free: Vec<Point> = Range::inclusive(top_left, bottom_right)
            .intersect(self.bounds())
            .iter()
            .filter(|&p| self.is_free(p))
            .collect();
        pick(&free, rng)
    }
}
