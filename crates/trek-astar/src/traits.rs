use crate::node::{Node, NodeRef};

/// Lazily yields the traversable neighbors of one node.
///
/// A provider is finite and single-use: the engine asks its factory for a
/// fresh one each time it expands a node. Any `Iterator<Item = Node<E>>`
/// is a provider.
pub trait NeighborProvider<E> {
    /// The next neighbor, or `None` once exhausted.
    fn next_neighbor(&mut self) -> Option<Node<E>>;
}

impl<E, I: Iterator<Item = Node<E>>> NeighborProvider<E> for I {
    #[inline]
    fn next_neighbor(&mut self) -> Option<Node<E>> {
        self.next()
    }
}

/// Creates a [`NeighborProvider`] for a node about to be expanded.
///
/// Neighbors should be built with [`NodeRef::child`] so that their parent
/// is the expanded node. Their `g` is overwritten by the engine.
pub trait NeighborProviderFactory<E> {
    type Provider<'a>: NeighborProvider<E>
    where
        Self: 'a;

    fn provider(&self, node: NodeRef<'_, E>) -> Self::Provider<'_>;
}

/// Estimates the remaining cost from a node to the goal.
///
/// Estimates must be non-negative. An admissible estimate (one that never
/// exceeds the true remaining cost) yields optimal paths; anything else
/// silently degrades optimality.
pub trait Heuristic<E> {
    fn h(&self, node: &Node<E>, goal: &Node<E>) -> f64;
}

impl<E, F: Fn(&E, &E) -> f64> Heuristic<E> for F {
    #[inline]
    fn h(&self, node: &Node<E>, goal: &Node<E>) -> f64 {
        self(node.element(), goal.element())
    }
}
