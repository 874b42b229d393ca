use trek_core::{Direction, Point};

use crate::entity::Entity;
use crate::map::GridMap;

impl<T> GridMap<T> {
    /// Whether `to` is visible from `from`.
    ///
    /// The sight line is walked one cell at a time, each step heading in
    /// the compass direction of `to` from the current cell. It succeeds on
    /// reaching `to` and fails at the first cell in between that is
    /// occupied or off the map. Neither endpoint needs to be free.
    pub fn line_of_sight(&self, from: Point, to: Point) -> bool {
        let mut cur = from;
        while cur != to {
            cur = cur.step(Direction::toward(cur, to));
            log::trace!("line_of_sight {from} -> {to}: at {cur}");
            if cur != to && !self.is_free(cur) {
                return false;
            }
        }
        true
    }
}

impl<T: Entity> GridMap<T> {
    /// Line of sight between the cells two entities stand on.
    pub fn entities_have_line_of_sight(&self, one: &T, other: &T) -> bool {
        self.line_of_sight(one.pos(), other.pos())
    }
}
