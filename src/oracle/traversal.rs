#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    collections::{BTreeSet, VecDeque},
    fmt::Debug,
};

use super::partition::PartitionTree;
use crate::{
    error::{OracleError, Result},
    graph::Graph,
};

/// Read access to a binary tree made of explicit left/right child links.
///
/// Implemented by any node type a candidate exposes, so the level-order and
/// ordering oracles can walk the candidate's real structure.
pub trait TreeLinks {
    /// The value stored in each node.
    type Value;

    /// The value held by this node.
    fn value(&self) -> &Self::Value;
    /// The left child, if any.
    fn left(&self) -> Option<&Self>;
    /// The right child, if any.
    fn right(&self) -> Option<&Self>;
}

/// Values of the tree built from `sequence`, in order. Always equal to the
/// sorted, deduplicated sequence.
pub fn in_order<T: Ord + Clone>(sequence: &[T]) -> Vec<T> {
    let tree = PartitionTree::from_sequence(sequence);
    let mut output = Vec::with_capacity(tree.len());
    let mut stack = Vec::new();
    let mut current = tree.root();

    while current.is_some() || !stack.is_empty() {
        while let Some(index) = current {
            stack.push(index);
            current = tree.node(index).less;
        }
        if let Some(index) = stack.pop() {
            let node = tree.node(index);
            output.push(node.value.clone());
            current = node.more;
        }
    }
    output
}

/// Values of the tree built from `sequence`, each node before its subtrees,
/// left subtree before right.
pub fn pre_order<T: Ord + Clone>(sequence: &[T]) -> Vec<T> {
    let tree = PartitionTree::from_sequence(sequence);
    let mut output = Vec::with_capacity(tree.len());
    let mut stack: Vec<usize> = tree.root().into_iter().collect();

    while let Some(index) = stack.pop() {
        let node = tree.node(index);
        output.push(node.value.clone());
        stack.extend(node.more);
        stack.extend(node.less);
    }
    output
}

/// Values of the tree built from `sequence`, both subtrees (left first)
/// before their node.
pub fn post_order<T: Ord + Clone>(sequence: &[T]) -> Vec<T> {
    let tree = PartitionTree::from_sequence(sequence);
    let mut output = Vec::with_capacity(tree.len());
    let mut stack: Vec<usize> = tree.root().into_iter().collect();

    // node, right, left; reversed at the end
    while let Some(index) = stack.pop() {
        let node = tree.node(index);
        output.push(node.value.clone());
        stack.extend(node.less);
        stack.extend(node.more);
    }
    output.reverse();
    output
}

/// Values of the tree built from `sequence`, level by level, left child
/// before right child.
pub fn breadth_first<T: Ord + Clone>(sequence: &[T]) -> Vec<T> {
    let tree = PartitionTree::from_sequence(sequence);
    let mut output = Vec::with_capacity(tree.len());
    let mut queue: VecDeque<usize> = tree.root().into_iter().collect();

    while let Some(index) = queue.pop_front() {
        let node = tree.node(index);
        output.push(node.value.clone());
        queue.extend(node.less);
        queue.extend(node.more);
    }
    output
}

/// Level-order values of an explicit tree, left child before right child.
pub fn breadth_first_links<L>(root: Option<&L>) -> Vec<L::Value>
where
    L: TreeLinks,
    L::Value: Clone,
{
    let mut output = Vec::new();
    let mut queue: VecDeque<&L> = root.into_iter().collect();

    while let Some(node) = queue.pop_front() {
        output.push(node.value().clone());
        queue.extend(node.left());
        queue.extend(node.right());
    }
    output
}

/// Whether every node of an explicit tree is strictly greater than all of
/// its left subtree and strictly less than all of its right subtree.
pub fn is_search_tree<L>(root: Option<&L>) -> bool
where
    L: TreeLinks,
    L::Value: Ord,
{
    let mut stack: Vec<(&L, Option<&L::Value>, Option<&L::Value>)> =
        root.into_iter().map(|r| (r, None, None)).collect();

    while let Some((node, lower, upper)) = stack.pop() {
        let value = node.value();
        if lower.is_some_and(|low| value <= low) || upper.is_some_and(|high| value >= high) {
            return false;
        }
        if let Some(left) = node.left() {
            stack.push((left, lower, Some(value)));
        }
        if let Some(right) = node.right() {
            stack.push((right, Some(value), upper));
        }
    }
    true
}

/// Breadth-first order of the nodes reachable from `start`, enumerating
/// each node's neighbours in adjacency-list order.
pub fn graph_breadth_first<N>(graph: &Graph<N>, start: &N) -> Result<Vec<N>>
where
    N: Ord + Clone + Debug,
{
    if !graph.contains_node(start) {
        return Err(OracleError::node_not_found(start));
    }

    let mut output = Vec::new();
    let mut found = BTreeSet::from([start.clone()]);
    let mut queue = VecDeque::from([start.clone()]);

    while let Some(node) = queue.pop_front() {
        for edge in graph.neighbors(&node)? {
            if found.insert(edge.to.clone()) {
                queue.push_back(edge.to.clone());
            }
        }
        output.push(node);
    }
    Ok(output)
}

/// Depth-first order of the nodes reachable from `start`.
///
/// Uses a stack: when a node is first popped it is emitted and all of its
/// neighbours are pushed in adjacency-list order, so the last listed
/// neighbour is explored first.
pub fn graph_depth_first<N>(graph: &Graph<N>, start: &N) -> Result<Vec<N>>
where
    N: Ord + Clone + Debug,
{
    if !graph.contains_node(start) {
        return Err(OracleError::node_not_found(start));
    }

    let mut output = Vec::new();
    let mut found = BTreeSet::new();
    let mut stack = vec![start.clone()];

    while let Some(node) = stack.pop() {
        if !found.insert(node.clone()) {
            continue;
        }
        stack.extend(graph.neighbors(&node)?.iter().map(|e| e.to.clone()));
        output.push(node);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SEQ: [i32; 7] = [5, 3, 8, 1, 4, 7, 9];

    #[test]
    fn depth_first_traversals_of_sample_tree() {
        assert_eq!(in_order(&SEQ), vec![1, 3, 4, 5, 7, 8, 9]);
        assert_eq!(pre_order(&SEQ), vec![5, 3, 1, 4, 8, 7, 9]);
        assert_eq!(post_order(&SEQ), vec![1, 4, 3, 7, 9, 8, 5]);
    }

    #[test]
    fn breadth_first_of_sample_tree() {
        assert_eq!(breadth_first(&SEQ), vec![5, 3, 8, 1, 4, 7, 9]);
        assert_eq!(breadth_first(&[1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn empty_sequence_traversals_are_empty() {
        let empty: [i32; 0] = [];
        assert!(in_order(&empty).is_empty());
        assert!(pre_order(&empty).is_empty());
        assert!(post_order(&empty).is_empty());
        assert!(breadth_first(&empty).is_empty());
    }

    /// Minimal boxed tree for exercising the link-based oracles.
    struct Node {
        /// Stored value.
        value: i32,
        /// Left child.
        left:  Option<Box<Node>>,
        /// Right child.
        right: Option<Box<Node>>,
    }

    impl TreeLinks for Node {
        type Value = i32;

        fn value(&self) -> &i32 {
            &self.value
        }

        fn left(&self) -> Option<&Self> {
            self.left.as_deref()
        }

        fn right(&self) -> Option<&Self> {
            self.right.as_deref()
        }
    }

    fn leaf(value: i32) -> Option<Box<Node>> {
        Some(Box::new(Node {
            value,
            left: None,
            right: None,
        }))
    }

    #[test]
    fn link_oracles_walk_explicit_nodes() {
        let root = Node {
            value: 5,
            left:  Some(Box::new(Node {
                value: 3,
                left:  leaf(1),
                right: leaf(4),
            })),
            right: leaf(8),
        };
        assert_eq!(breadth_first_links(Some(&root)), vec![5, 3, 8, 1, 4]);
        assert!(is_search_tree(Some(&root)));
        assert!(breadth_first_links::<Node>(None).is_empty());
    }

    #[test]
    fn search_tree_check_sees_deep_violations() {
        // 6 sits in the left subtree of 5 without being a direct child
        let root = Node {
            value: 5,
            left:  Some(Box::new(Node {
                value: 3,
                left:  leaf(1),
                right: leaf(6),
            })),
            right: leaf(8),
        };
        assert!(!is_search_tree(Some(&root)));
    }
}
