#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::partition::PartitionTree;

/// Height, counted in nodes, of the binary search tree built by inserting
/// `sequence` in order with no rebalancing. An empty sequence has depth 0
/// and a single element has depth 1.
pub fn unbalanced_depth<T: Ord + Clone>(sequence: &[T]) -> usize {
    PartitionTree::from_sequence(sequence)
        .heights()
        .first()
        .copied()
        .unwrap_or(0)
}

/// Depth of the root's left subtree minus depth of its right subtree for
/// the tree built from `sequence`. Positive means left-heavy; an empty
/// sequence has balance 0.
pub fn balance<T: Ord + Clone>(sequence: &[T]) -> i64 {
    let tree = PartitionTree::from_sequence(sequence);
    let Some(root) = tree.root() else {
        return 0;
    };
    let heights = tree.heights();
    let side = |child: Option<usize>| child.map_or(0, |i| heights[i] as i64);
    let root = tree.node(root);
    side(root.less) - side(root.more)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_of_mixed_sequence() {
        assert_eq!(unbalanced_depth(&[5, 3, 8, 1, 4]), 3);
    }

    #[test]
    fn empty_and_single_sequences() {
        assert_eq!(unbalanced_depth::<i32>(&[]), 0);
        assert_eq!(balance::<i32>(&[]), 0);
        assert_eq!(unbalanced_depth(&[7]), 1);
        assert_eq!(balance(&[7]), 0);
    }

    #[test]
    fn balance_sign_follows_heavier_side() {
        assert_eq!(balance(&[5, 3, 8, 1, 4]), 1);
        assert_eq!(balance(&[1, 2, 3]), -2);
        assert_eq!(balance(&[3, 2, 1]), 2);
        assert_eq!(balance(&[2, 1, 3]), 0);
    }

    #[test]
    fn duplicates_do_not_add_depth() {
        assert_eq!(unbalanced_depth(&[4, 4, 4, 4]), 1);
        assert_eq!(unbalanced_depth(&["b", "a", "b", "a"]), 2);
    }
}
