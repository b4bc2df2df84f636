#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Interfaces a submission implements to be graded.
//!
//! Each data-structure category is one trait. A submission that is missing a
//! required operation fails to compile against its grader, rather than
//! failing a test at runtime.

use anyhow::Result;

use crate::oracle::PathResult;

/// A last-in, first-out stack.
pub trait Stack<T> {
    /// Pushes `value` on top.
    fn push(&mut self, value: T);
    /// Removes and returns the top value, or `None` when empty.
    fn pop(&mut self) -> Option<T>;
    /// The top value without removing it.
    fn peek(&self) -> Option<&T>;
    /// Number of values held.
    fn size(&self) -> usize;
}

/// A first-in, first-out queue.
pub trait Queue<T> {
    /// Adds `value` at the back.
    fn enqueue(&mut self, value: T);
    /// Removes and returns the front value, or `None` when empty.
    fn dequeue(&mut self) -> Option<T>;
    /// The front value without removing it.
    fn peek(&self) -> Option<&T>;
    /// Number of values held.
    fn size(&self) -> usize;
}

/// An unbalanced binary search tree holding unique values.
pub trait BinarySearchTree<T> {
    /// Inserts `value`; inserting a value already present does nothing.
    fn insert(&mut self, value: T);
    /// Whether `value` is in the tree.
    fn contains(&self, value: &T) -> bool;
    /// Number of distinct values.
    fn size(&self) -> usize;
    /// Height counted in nodes: 0 when empty, 1 for a lone root.
    fn depth(&self) -> usize;
    /// Left subtree depth minus right subtree depth at the root.
    fn balance(&self) -> i64;
    /// Values in ascending order.
    fn in_order(&self) -> Vec<T>;
    /// Values with each node before its subtrees, left first.
    fn pre_order(&self) -> Vec<T>;
    /// Values with each node after its subtrees, left first.
    fn post_order(&self) -> Vec<T>;
    /// Values level by level, left to right.
    fn breadth_first(&self) -> Vec<T>;
}

/// A directed graph with non-negative edge weights.
pub trait WeightedGraph<N> {
    /// Adds a node with no edges.
    fn add_node(&mut self, node: N);
    /// Adds a directed edge, adding missing endpoints.
    fn add_edge(&mut self, from: N, to: N, weight: u64);
    /// Whether `node` is in the graph.
    fn has_node(&self, node: &N) -> bool;
    /// Every node.
    fn nodes(&self) -> Vec<N>;
    /// Neighbours of `node` with edge weights; errors if `node` is absent.
    fn neighbors(&self, node: &N) -> Result<Vec<(N, u64)>>;
    /// Whether an edge runs from `from` to `to`; errors if either is absent.
    fn adjacent(&self, from: &N, to: &N) -> Result<bool>;
    /// Breadth-first order from `start`; errors if `start` is absent.
    fn breadth_first(&self, start: &N) -> Result<Vec<N>>;
    /// Depth-first order from `start`; errors if `start` is absent.
    fn depth_first(&self, start: &N) -> Result<Vec<N>>;
    /// Cheapest path from `start` to `end`; errors if either is absent.
    fn shortest_path(&self, start: &N, end: &N) -> Result<PathResult<N>>;
}
