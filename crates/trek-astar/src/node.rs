use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use crate::element::Element;
use crate::error::SearchError;

/// Index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A search node: an element plus path-cost bookkeeping.
///
/// The parent link is an arena index used only to rebuild paths. It takes
/// no part in equality, which is decided by the element alone.
#[derive(Debug, Clone)]
pub struct Node<E> {
    element: E,
    parent: Option<NodeId>,
    pub(crate) g: f64,
    pub(crate) f: Option<f64>,
    cost: f64,
}

impl<E> Node<E> {
    /// A parentless node with `g = 0`, no `f` yet and an edge cost of 1.
    pub fn new(element: E) -> Self {
        Self {
            element,
            parent: None,
            g: 0.0,
            f: None,
            cost: 1.0,
        }
    }

    /// Override the cost of the edge leading into this node.
    pub fn with_cost(mut self, cost: f64) -> Self {
        debug_assert!(cost >= 0.0, "edge cost must be non-negative");
        self.cost = cost;
        self
    }

    #[inline]
    pub fn element(&self) -> &E {
        &self.element
    }

    #[inline]
    pub fn into_element(self) -> E {
        self.element
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Accumulated path cost from the start.
    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Estimated total cost, `None` until the engine evaluates the node.
    #[inline]
    pub fn f(&self) -> Option<f64> {
        self.f
    }

    /// Cost of the edge from the parent to this node.
    #[inline]
    pub fn edge_cost(&self) -> f64 {
        self.cost
    }

    /// Heuristic remainder `f - g`, or `None` while `f` is unset.
    #[inline]
    pub fn remainder(&self) -> Option<f64> {
        self.f.map(|f| f - self.g)
    }

    /// Compare by `f`. Returns `None` if either node has not been
    /// evaluated yet.
    pub fn cmp_f(&self, other: &Self) -> Option<Ordering> {
        Some(self.f?.total_cmp(&other.f?))
    }

    pub(crate) fn evaluate(&mut self, h: f64) -> f64 {
        debug_assert!(h >= 0.0, "heuristic must be non-negative");
        let f = self.g + h;
        self.f = Some(f);
        f
    }
}

impl<E: Element> Node<E> {
    /// Whether both nodes wrap equal elements.
    pub fn try_eq(&self, other: &Self) -> Result<bool, SearchError> {
        self.element.equals(&other.element)
    }

    #[inline]
    pub fn key(&self) -> E::Key {
        self.element.key()
    }
}

impl<E: fmt::Display> fmt::Display for Node<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} g={}", self.element, self.g)?;
        match self.f {
            Some(v) => write!(f, " f={v}"),
            None => f.write_str(" f=unset"),
        }
    }
}

// ---------------------------------------------------------------------------
// Arena
// ---------------------------------------------------------------------------

/// A node stored in an arena, handed to neighbor factories.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a, E> {
    id: NodeId,
    node: &'a Node<E>,
}

impl<'a, E> NodeRef<'a, E> {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn node(&self) -> &'a Node<E> {
        self.node
    }

    #[inline]
    pub fn element(&self) -> &'a E {
        &self.node.element
    }

    /// A fresh node for `element` whose parent is this node.
    pub fn child(&self, element: E) -> Node<E> {
        parented(element, self.id)
    }
}

/// Build a node parented to `parent`, for providers that keep the parent id
/// instead of a borrowed [`NodeRef`].
pub fn parented<E>(element: E, parent: NodeId) -> Node<E> {
    Node {
        parent: Some(parent),
        ..Node::new(element)
    }
}

/// Owns every node created during one search.
///
/// Nodes are never removed; superseded ones simply become unreachable from
/// the open and closed sets.
#[derive(Debug, Clone)]
pub struct NodeArena<E> {
    nodes: Vec<Node<E>>,
}

impl<E> Default for NodeArena<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> NodeArena<E> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn insert(&mut self, node: Node<E>) -> NodeId {
        debug_assert!(
            node.parent.is_none_or(|p| p.0 < self.nodes.len()),
            "parent must already live in this arena"
        );
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node<E>> {
        self.nodes.get(id.0)
    }

    /// Borrow a stored node together with its id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    #[inline]
    pub fn node_ref(&self, id: NodeId) -> NodeRef<'_, E> {
        NodeRef {
            id,
            node: &self.nodes[id.0],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<E: Clone> NodeArena<E> {
    /// Walk parent links from `id` back to the root and return the nodes in
    /// root-to-`id` order.
    pub fn path_to(&self, id: NodeId) -> Vec<PathNode<E>> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(i) = cur {
            let node = &self[i];
            path.push(PathNode {
                element: node.element.clone(),
                g: node.g,
                f: node.f.unwrap_or(node.g),
            });
            cur = node.parent;
        }
        path.reverse();
        path
    }
}

impl<E> Index<NodeId> for NodeArena<E> {
    type Output = Node<E>;

    #[inline]
    fn index(&self, id: NodeId) -> &Node<E> {
        &self.nodes[id.0]
    }
}

/// One step of a returned path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode<E> {
    pub element: E,
    /// Cost from the start to this step.
    pub g: f64,
    /// Estimated total cost when this step was queued.
    pub f: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Unequatable;

    impl Element for Unequatable {
        type Key = ();

        fn key(&self) -> Self::Key {}
    }

    fn with_f(value: u32, f: f64) -> Node<u32> {
        let mut n = Node::new(value);
        n.f = Some(f);
        n
    }

    #[test]
    fn cmp_f_orders_by_estimate() {
        assert_eq!(with_f(1, 1.0).cmp_f(&with_f(1, 2.0)), Some(Ordering::Less));
        assert_eq!(with_f(1, 2.0).cmp_f(&with_f(1, 2.0)), Some(Ordering::Equal));
        assert_eq!(with_f(1, 2.0).cmp_f(&with_f(1, 1.0)), Some(Ordering::Greater));
        assert_eq!(Node::new(1u32).cmp_f(&with_f(1, 1.0)), None);
    }

    #[test]
    fn equality_ignores_costs_and_parent() {
        let mut arena = NodeArena::new();
        let root = arena.insert(Node::new(1u32));
        let a = Node::new(7u32);
        let mut b = arena.node_ref(root).child(7u32);
        b.g = 12.0;
        assert_eq!(a.try_eq(&b), Ok(true));
        assert_eq!(a.try_eq(&Node::new(5)), Ok(false));
    }

    #[test]
    fn equality_without_element_support_fails() {
        let a = Node::new(Unequatable);
        let b = Node::new(Unequatable);
        assert!(matches!(
            a.try_eq(&b),
            Err(SearchError::EqualityUnsupported { .. })
        ));
    }

    #[test]
    fn new_nodes_are_unevaluated() {
        let n = Node::new('x');
        assert_eq!(n.g(), 0.0);
        assert_eq!(n.f(), None);
        assert_eq!(n.remainder(), None);
        assert_eq!(n.edge_cost(), 1.0);
        assert_eq!(n.parent(), None);
        assert_eq!(Node::new('x').with_cost(2.5).edge_cost(), 2.5);
    }

    #[test]
    fn evaluate_sets_total_estimate() {
        let mut n = Node::new(3u32);
        n.g = 4.0;
        assert_eq!(n.evaluate(2.0), 6.0);
        assert_eq!(n.f(), Some(6.0));
        assert_eq!(n.remainder(), Some(2.0));
    }

    #[test]
    fn path_runs_root_to_leaf() {
        let mut arena = NodeArena::new();
        let mut id = arena.insert(Node::new(10u32));
        for value in (1..10u32).rev() {
            let child = arena.node_ref(id).child(value);
            id = arena.insert(child);
        }
        let path: Vec<u32> = arena.path_to(id).into_iter().map(|s| s.element).collect();
        assert_eq!(path, vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn path_to_root_is_single_step() {
        let mut arena = NodeArena::new();
        let root = arena.insert(Node::new(4u32));
        let path = arena.path_to(root);
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].element, 4);
        assert_eq!(arena.len(), 1);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use trek_core::Point;

    #[test]
    fn path_node_json_round_trip() {
        let step = PathNode {
            element: Point::new(3, 4),
            g: 2.0,
            f: 5.0,
        };
        let json = serde_json::to_string(&step).unwrap();
        let back: PathNode<Point> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, step);
    }
}
