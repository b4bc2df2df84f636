#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Adjacency-list graph with a Bellman-Ford shortest path.
pub mod graph;
/// Stack and queue.
pub mod linear;
/// Boxed-node binary search tree.
pub mod tree;

pub use graph::ListGraph;
pub use linear::{RingQueue, VecStack};
pub use tree::{Node, SearchTree};
