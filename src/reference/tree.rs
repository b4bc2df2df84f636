#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{cmp::Ordering, collections::VecDeque};

use crate::{candidate::BinarySearchTree, oracle::TreeLinks};

/// A node of a [`SearchTree`].
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Stored value.
    value: T,
    /// Subtree of smaller values.
    left:  Option<Box<Node<T>>>,
    /// Subtree of larger values.
    right: Option<Box<Node<T>>>,
}

impl<T> TreeLinks for Node<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// Height in nodes of the subtree under `node`.
fn height<T>(node: Option<&Node<T>>) -> usize {
    let mut levels = 0;
    let mut level: Vec<&Node<T>> = node.into_iter().collect();
    while !level.is_empty() {
        levels += 1;
        level = level
            .iter()
            .flat_map(|n| n.left.as_deref().into_iter().chain(n.right.as_deref()))
            .collect();
    }
    levels
}

/// Appends the in-order values under `node` to `out`.
fn walk_in<T: Clone>(node: Option<&Node<T>>, out: &mut Vec<T>) {
    if let Some(n) = node {
        walk_in(n.left.as_deref(), out);
        out.push(n.value.clone());
        walk_in(n.right.as_deref(), out);
    }
}

/// Appends the pre-order values under `node` to `out`.
fn walk_pre<T: Clone>(node: Option<&Node<T>>, out: &mut Vec<T>) {
    if let Some(n) = node {
        out.push(n.value.clone());
        walk_pre(n.left.as_deref(), out);
        walk_pre(n.right.as_deref(), out);
    }
}

/// Appends the post-order values under `node` to `out`.
fn walk_post<T: Clone>(node: Option<&Node<T>>, out: &mut Vec<T>) {
    if let Some(n) = node {
        walk_post(n.left.as_deref(), out);
        walk_post(n.right.as_deref(), out);
        out.push(n.value.clone());
    }
}

/// A plain unbalanced binary search tree of boxed nodes.
#[derive(Debug, Clone)]
pub struct SearchTree<T> {
    /// Root node, if any.
    root: Option<Box<Node<T>>>,
    /// Number of values stored.
    size: usize,
}

impl<T> Default for SearchTree<T> {
    fn default() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }
}

impl<T: Ord + Clone> SearchTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root node, for link-based checks.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T: Ord + Clone> FromIterator<T> for SearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = SearchTree::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<T: Ord + Clone> BinarySearchTree<T> for SearchTree<T> {
    fn insert(&mut self, value: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match value.cmp(&node.value) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => return,
            }
        }
        *slot = Some(Box::new(Node {
            value,
            left: None,
            right: None,
        }));
        self.size += 1;
    }

    fn contains(&self, value: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    fn size(&self) -> usize {
        self.size
    }

    fn depth(&self) -> usize {
        height(self.root.as_deref())
    }

    fn balance(&self) -> i64 {
        match self.root.as_deref() {
            Some(root) => {
                height(root.left.as_deref()) as i64 - height(root.right.as_deref()) as i64
            }
            None => 0,
        }
    }

    fn in_order(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.size);
        walk_in(self.root.as_deref(), &mut out);
        out
    }

    fn pre_order(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.size);
        walk_pre(self.root.as_deref(), &mut out);
        out
    }

    fn post_order(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.size);
        walk_post(self.root.as_deref(), &mut out);
        out
    }

    fn breadth_first(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.size);
        let mut queue: VecDeque<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            out.push(node.value.clone());
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        out
    }
}
