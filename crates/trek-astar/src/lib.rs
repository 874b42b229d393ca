//! Generic A* search over caller-defined graphs.
//!
//! The engine knows nothing about the graph it explores. Callers describe it
//! through three seams:
//!
//! | Trait | Role |
//! |---|---|
//! | [`Element`] | payload wrapped by each [`Node`]; supplies lookup key and goal equality |
//! | [`NeighborProviderFactory`] | hands out a [`NeighborProvider`] per expanded node |
//! | [`Heuristic`] | estimates remaining cost; any `Fn(&E, &E) -> f64` qualifies |
//!
//! [`AStar::execute`] returns the path as a list of [`PathNode`]s. When the
//! goal is unreachable, or a depth constraint stops the search early, the
//! path ends at the node that got closest to the goal by heuristic estimate.
//!
//! ```
//! use trek_astar::{AStar, Node, NodeRef, NeighborProviderFactory};
//!
//! struct Line;
//!
//! impl NeighborProviderFactory<i32> for Line {
//!     type Provider<'a> = std::array::IntoIter<Node<i32>, 2>;
//!
//!     fn provider(&self, node: NodeRef<'_, i32>) -> Self::Provider<'_> {
//!         let v = *node.element();
//!         [node.child(v - 1), node.child(v + 1)].into_iter()
//!     }
//! }
//!
//! let h = |a: &i32, b: &i32| f64::from((a - b).abs());
//! let path = AStar::new(Node::new(0), Node::new(3), 0, Line, h).execute().unwrap();
//! let steps: Vec<i32> = path.into_iter().map(|s| s.element).collect();
//! assert_eq!(steps, [0, 1, 2, 3]);
//! ```

mod astar;
mod element;
mod error;
mod node;
mod open;
mod traits;

pub use astar::AStar;
pub use element::Element;
pub use error::SearchError;
pub use node::{Node, NodeArena, NodeId, NodeRef, PathNode, parented};
pub use open::OpenSet;
pub use traits::{Heuristic, NeighborProvider, NeighborProviderFactory};
