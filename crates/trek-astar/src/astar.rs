use std::collections::HashMap;

use crate::element::Element;
use crate::error::SearchError;
use crate::node::{Node, NodeArena, NodeId, PathNode};
use crate::open::OpenSet;
use crate::traits::{Heuristic, NeighborProvider, NeighborProviderFactory};

/// A single A* query from `start` to `goal`.
///
/// The finder holds only the query; every call to [`execute`](Self::execute)
/// builds its own open set, closed set and node arena, so a finder can be
/// run repeatedly and never shares search state between calls.
pub struct AStar<E, F, H> {
    start: Node<E>,
    goal: Node<E>,
    depth_constraint: u32,
    factory: F,
    heuristic: H,
}

impl<E, F, H> AStar<E, F, H>
where
    E: Element,
    F: NeighborProviderFactory<E>,
    H: Heuristic<E>,
{
    /// Create a finder.
    ///
    /// Nodes whose `g` reaches a non-zero `depth_constraint` are not
    /// expanded; `0` means unbounded.
    pub fn new(start: Node<E>, goal: Node<E>, depth_constraint: u32, factory: F, heuristic: H) -> Self {
        Self {
            start,
            goal,
            depth_constraint,
            factory,
            heuristic,
        }
    }

    pub fn start(&self) -> &Node<E> {
        &self.start
    }

    pub fn goal(&self) -> &Node<E> {
        &self.goal
    }

    pub fn depth_constraint(&self) -> u32 {
        self.depth_constraint
    }

    /// Run the search.
    ///
    /// Returns the path from start to goal, inclusive. If the goal cannot be
    /// reached (no route, or the depth constraint cut the search short) the
    /// path instead ends at the expanded node with the smallest heuristic
    /// remainder; when nothing beat the start that is just `[start]`.
    ///
    /// Among queued nodes with equal `f`, the one with the smaller heuristic
    /// remainder is expanded first, then the one queued earlier.
    pub fn execute(&self) -> Result<Vec<PathNode<E>>, SearchError> {
        let mut arena = NodeArena::new();
        let mut open: OpenSet<E::Key> = OpenSet::new();
        let mut closed: HashMap<E::Key, NodeId> = HashMap::new();

        let mut start = Node::new(self.start.element().clone());
        let h = self.heuristic.h(&start, &self.goal);
        let f = start.evaluate(h);
        let key = start.key();
        let start_id = arena.insert(start);
        open.push(key, start_id, f, h);
        let mut best = start_id;

        while let Some(current_id) = open.pop() {
            let current = &arena[current_id];
            if current.try_eq(&self.goal)? {
                return Ok(arena.path_to(current_id));
            }
            closed.insert(current.key(), current_id);

            if current.remainder() < arena[best].remainder() {
                best = current_id;
            }

            if self.depth_constraint > 0 && current.g() >= f64::from(self.depth_constraint) {
                continue;
            }

            let current_g = current.g();
            let mut neighbors = self.factory.provider(arena.node_ref(current_id));
            while let Some(mut neighbor) = neighbors.next_neighbor() {
                neighbor.g = current_g + neighbor.edge_cost();
                let key = neighbor.key();

                if let Some(queued) = open.get(&key) {
                    if neighbor.g < arena[queued].g {
                        open.remove(&key);
                        self.enqueue(neighbor, key, &mut arena, &mut open);
                    }
                } else if let Some(&expanded) = closed.get(&key) {
                    if neighbor.g < arena[expanded].g {
                        closed.remove(&key);
                        self.enqueue(neighbor, key, &mut arena, &mut open);
                    }
                } else {
                    self.enqueue(neighbor, key, &mut arena, &mut open);
                }
            }
        }

        Ok(arena.path_to(best))
    }

    fn enqueue(&self, mut node: Node<E>, key: E::Key, arena: &mut NodeArena<E>, open: &mut OpenSet<E::Key>) {
        let h = self.heuristic.h(&node, &self.goal);
        let f = node.evaluate(h);
        let id = arena.insert(node);
        open.push(key, id, f, h);
    }
}
