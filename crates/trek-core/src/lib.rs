//! **trek-core**: grid geometry shared by the trek crates.
//!
//! This crate provides the coordinate types used by the search engine and
//! the grid map: integer [`Point`]s, half-open [`Range`] rectangles, and the
//! eight compass [`Direction`]s with their offsets.

pub mod direction;
pub mod geom;

pub use direction::{Direction, ParseDirectionError};
pub use geom::{Point, Range, RangeIter};
