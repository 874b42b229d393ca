use trek_astar::{Node, NodeId, NodeRef, NeighborProviderFactory, parented};
use trek_core::{Direction, Point};

use crate::map::GridMap;

/// Yields the free cells around one search node, in compass order starting
/// at north.
///
/// Diagonal directions are skipped unless the map allows diagonal
/// movement. Out-of-bounds and occupied cells are skipped silently.
#[derive(Debug)]
pub struct GridNeighbors<'a, T> {
    map: &'a GridMap<T>,
    origin: Point,
    parent: NodeId,
    next: usize,
    diagonal: bool,
}

impl<'a, T> GridNeighbors<'a, T> {
    pub fn new(map: &'a GridMap<T>, node: NodeRef<'_, Point>) -> Self {
        Self {
            map,
            origin: *node.element(),
            parent: node.id(),
            next: 0,
            diagonal: map.config().allow_diagonal_movement,
        }
    }
}

impl<T> Iterator for GridNeighbors<'_, T> {
    type Item = Node<Point>;

    fn next(&mut self) -> Option<Node<Point>> {
        while self.next < Direction::ALL.len() {
            let dir = Direction::from_ordinal(self.next);
            self.next += 1;
            if dir.is_diagonal() && !self.diagonal {
                continue;
            }
            let p = self.origin.step(dir);
            if self.map.is_free(p) {
                return Some(parented(p, self.parent));
            }
        }
        None
    }
}

/// Hands out a [`GridNeighbors`] for every node the search expands.
#[derive(Debug)]
pub struct GridNeighborFactory<'a, T> {
    map: &'a GridMap<T>,
}

impl<T> Clone for GridNeighborFactory<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GridNeighborFactory<'_, T> {}

impl<'a, T> GridNeighborFactory<'a, T> {
    pub fn new(map: &'a GridMap<T>) -> Self {
        Self { map }
    }
}

impl<'a, T> NeighborProviderFactory<Point> for GridNeighborFactory<'a, T> {
    type Provider<'p>
        = GridNeighbors<'a, T>
    where
        Self: 'p;

    fn provider(&self, node: NodeRef<'_, Point>) -> Self::Provider<'_> {
        GridNeighbors::new(self.map, node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapConfig;
    use trek_astar::NodeArena;

    fn expand<T>(map: &GridMap<T>, at: Point) -> Vec<Point> {
        let mut arena = NodeArena::new();
        let id = arena.insert(Node::new(at));
        let neighbors: Vec<Node<Point>> = GridNeighborFactory::new(map).provider(arena.node_ref(id)).collect();
        assert!(neighbors.iter().all(|n| n.parent() == Some(id) && n.g() == 0.0));
        neighbors.into_iter().map(Node::into_element).collect()
    }

    #[test]
    fn cardinal_neighbors_in_compass_order() {
        let map: GridMap<()> = GridMap::new(10, 10);
        let got = expand(&map, Point::new(4, 4));
        assert_eq!(
            got,
            vec![Point::new(4, 3), Point::new(5, 4), Point::new(4, 5), Point::new(3, 4)]
        );
    }

    #[test]
    fn diagonal_neighbors_in_compass_order() {
        let map: GridMap<()> = GridMap::new(10, 10).with_config(MapConfig::default().with_diagonal_movement(true));
        let got = expand(&map, Point::new(4, 4));
        let want: Vec<Point> = Direction::ALL.iter().map(|&d| Point::new(4, 4).step(d)).collect();
        assert_eq!(got, want);
        assert_eq!(got.len(), 8);
    }

    #[test]
    fn blocked_and_out_of_bounds_are_skipped() {
        let mut map: GridMap<()> =
            GridMap::new(10, 10).with_config(MapConfig::default().with_diagonal_movement(true));
        map.set_contents(Point::new(1, 0), Some(())).unwrap();
        let got = expand(&map, Point::new(0, 0));
        assert_eq!(got, vec![Point::new(1, 1), Point::new(0, 1)]);
    }

    #[test]
    fn enclosed_cell_has_no_neighbors() {
        let mut map: GridMap<()> = GridMap::new(3, 3);
        for p in Point::new(1, 1).neighbors_4() {
            map.set_contents(p, Some(())).unwrap();
        }
        assert!(expand(&map, Point::new(1, 1)).is_empty());
    }
}
