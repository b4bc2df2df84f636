#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// One split of a sequence around its first element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    /// The first element of the sequence.
    pub pivot: T,
    /// Later elements strictly less than the pivot, in original order.
    pub less:  Vec<T>,
    /// Later elements strictly greater than the pivot, in original order.
    pub more:  Vec<T>,
}

/// Splits `sequence` around its first element.
///
/// Returns `None` for an empty sequence. Elements equal to the pivot are
/// dropped, which models inserting into a tree that holds unique values.
pub fn partition<T: Ord + Clone>(sequence: &[T]) -> Option<Partition<T>> {
    let (pivot, rest) = sequence.split_first()?;
    let (less, more): (Vec<T>, Vec<T>) = rest
        .iter()
        .filter(|item| *item != pivot)
        .cloned()
        .partition(|item| item < pivot);
    Some(Partition {
        pivot: pivot.clone(),
        less,
        more,
    })
}

/// A node of a [`PartitionTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionNode<T> {
    /// The pivot of this partition step.
    pub value: T,
    /// Index of the node built from the "less" side.
    pub less:  Option<usize>,
    /// Index of the node built from the "more" side.
    pub more:  Option<usize>,
}

/// Which child slot of the parent a pending sub-sequence fills.
#[derive(Debug, Clone, Copy)]
enum Side {
    /// The parent's `less` child.
    Less,
    /// The parent's `more` child.
    More,
}

/// The complete recursive partition of a sequence, which is exactly the
/// binary search tree produced by inserting the sequence in order with no
/// rebalancing.
///
/// Built with an explicit work stack so sorted input of any length cannot
/// exhaust the call stack. A parent always has a smaller index than its
/// children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionTree<T> {
    /// Arena of nodes; index 0 is the root when non-empty.
    nodes: Vec<PartitionNode<T>>,
}

impl<T: Ord + Clone> PartitionTree<T> {
    /// Partitions `sequence` all the way down.
    pub fn from_sequence(sequence: &[T]) -> Self {
        let mut nodes: Vec<PartitionNode<T>> = Vec::new();
        let mut pending: Vec<(Vec<T>, Option<(usize, Side)>)> = vec![(sequence.to_vec(), None)];

        while let Some((items, parent)) = pending.pop() {
            let Some(Partition { pivot, less, more }) = partition(&items) else {
                continue;
            };
            let index = nodes.len();
            nodes.push(PartitionNode {
                value: pivot,
                less:  None,
                more:  None,
            });
            match parent {
                Some((p, Side::Less)) => nodes[p].less = Some(index),
                Some((p, Side::More)) => nodes[p].more = Some(index),
                None => {}
            }
            pending.push((more, Some((index, Side::More))));
            pending.push((less, Some((index, Side::Less))));
        }

        Self { nodes }
    }
}

impl<T> PartitionTree<T> {
    /// Index of the root node, if any.
    pub fn root(&self) -> Option<usize> {
        if self.nodes.is_empty() { None } else { Some(0) }
    }

    /// The node at `index`.
    pub fn node(&self, index: usize) -> &PartitionNode<T> {
        &self.nodes[index]
    }

    /// Number of distinct values in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Height of every subtree, indexed like the nodes. A leaf has height 1.
    pub fn heights(&self) -> Vec<usize> {
        let mut heights = vec![0; self.nodes.len()];
        // children always sit after their parent
        for index in (0..self.nodes.len()).rev() {
            let node = &self.nodes[index];
            let less = node.less.map_or(0, |i| heights[i]);
            let more = node.more.map_or(0, |i| heights[i]);
            heights[index] = 1 + less.max(more);
        }
        heights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_around_first_element() {
        let p = partition(&[5, 3, 8, 1, 4]).expect("non-empty");
        assert_eq!(p.pivot, 5);
        assert_eq!(p.less, vec![3, 1, 4]);
        assert_eq!(p.more, vec![8]);
    }

    #[test]
    fn drops_values_equal_to_pivot() {
        let p = partition(&[2, 2, 1, 2, 3]).expect("non-empty");
        assert_eq!(p.less, vec![1]);
        assert_eq!(p.more, vec![3]);
    }

    #[test]
    fn empty_sequence_has_no_partition() {
        assert_eq!(partition::<i32>(&[]), None);
    }

    #[test]
    fn tree_links_children_to_parents() {
        let tree = PartitionTree::from_sequence(&[5, 3, 8, 1, 4]);
        assert_eq!(tree.len(), 5);
        let root = tree.node(0);
        assert_eq!(root.value, 5);
        let less = tree.node(root.less.expect("3 is left of 5"));
        assert_eq!(less.value, 3);
        assert_eq!(tree.node(less.less.expect("1 is left of 3")).value, 1);
        assert_eq!(tree.node(less.more.expect("4 is right of 3")).value, 4);
        assert_eq!(tree.node(root.more.expect("8 is right of 5")).value, 8);
    }

    #[test]
    fn sorted_input_builds_a_chain() {
        let sequence: Vec<u32> = (0..5000).collect();
        let tree = PartitionTree::from_sequence(&sequence);
        assert_eq!(tree.heights()[0], 5000);
    }
}
