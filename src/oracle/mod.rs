#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Unbalanced depth and balance factor of sequence-built trees.
pub mod depth;
/// Splitting a sequence around its first element.
pub mod partition;
/// Cheapest-path search over weighted graphs.
pub mod path;
/// Tree and graph traversal orders.
pub mod traversal;

pub use depth::{balance, unbalanced_depth};
pub use partition::{Partition, PartitionTree, partition};
pub use path::{PathResult, is_minimum_path, path_weight, shortest_path};
pub use traversal::{
    TreeLinks, breadth_first, breadth_first_links, graph_breadth_first, graph_depth_first,
    in_order, is_search_tree, post_order, pre_order,
};
