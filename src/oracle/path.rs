#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    cmp::Ordering,
    collections::{BTreeSet, BinaryHeap},
    fmt::Debug,
    rc::Rc,
};

use serde::{Deserialize, Serialize};

use crate::{
    error::{OracleError, Result},
    graph::Graph,
};

/// Outcome of a shortest-path query.
///
/// `weight` is `None` and `path` is empty when the end cannot be reached;
/// that is an ordinary answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult<N> {
    /// Total weight of the path, or `None` if the end is unreachable.
    pub weight: Option<u64>,
    /// Nodes from start to end inclusive.
    pub path:   Vec<N>,
}

impl<N> PathResult<N> {
    /// The "unreachable" answer.
    pub fn unreachable() -> Self {
        Self {
            weight: None,
            path:   Vec::new(),
        }
    }

    /// Whether the end was reached.
    pub fn is_reachable(&self) -> bool {
        self.weight.is_some()
    }
}

/// A path stored back to front, sharing its prefix with every path it was
/// extended from.
#[derive(Debug)]
struct Trail<N> {
    /// Last node of the path.
    node: N,
    /// Everything before `node`.
    prev: Option<Rc<Trail<N>>>,
}

impl<N: Clone> Trail<N> {
    /// Unwinds the trail into a start-to-end list.
    fn to_path(trail: &Rc<Trail<N>>) -> Vec<N> {
        let mut path = Vec::new();
        let mut current = Some(trail);
        while let Some(step) = current {
            path.push(step.node.clone());
            current = step.prev.as_ref();
        }
        path.reverse();
        path
    }
}

/// An entry on the search frontier.
///
/// Ordered by weight, then by insertion sequence, and reversed so that
/// `BinaryHeap` pops the cheapest, oldest entry first. The node and trail
/// never take part in the comparison.
#[derive(Debug)]
struct Frontier<N> {
    /// Cumulative weight from the start.
    weight: u64,
    /// Insertion sequence number; breaks weight ties deterministically.
    seq:    u64,
    /// Node reached by this entry.
    node:   N,
    /// Path taken to reach `node`, excluding `node` itself.
    trail:  Option<Rc<Trail<N>>>,
}

impl<N> PartialEq for Frontier<N> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl<N> Eq for Frontier<N> {}

impl<N> PartialOrd for Frontier<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Frontier<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}

/// Cheapest path from `start` to `end` by cumulative edge weight
/// (Dijkstra's algorithm).
///
/// Fails with [`OracleError::NodeNotFound`] when `start` or `end` is not a
/// node of the graph. When both exist but `end` cannot be reached the result
/// is [`PathResult::unreachable`]. When several paths share the minimum
/// weight, the one whose frontier entry was pushed first wins.
///
/// Edges whose cumulative weight would overflow a `u64` are not followed.
/// If `end` is never reached and at least one such edge was dropped, the
/// answer is [`OracleError::WeightOverflow`] rather than "unreachable".
pub fn shortest_path<N>(graph: &Graph<N>, start: &N, end: &N) -> Result<PathResult<N>>
where
    N: Ord + Clone + Debug,
{
    if !graph.contains_node(start) {
        return Err(OracleError::node_not_found(start));
    }
    if !graph.contains_node(end) {
        return Err(OracleError::node_not_found(end));
    }

    let mut seq = 0u64;
    let mut overflowed = false;
    let mut visited = BTreeSet::new();
    let mut heap = BinaryHeap::from([Frontier {
        weight: 0,
        seq,
        node: start.clone(),
        trail: None,
    }]);

    while let Some(Frontier {
        weight, node, trail, ..
    }) = heap.pop()
    {
        if visited.contains(&node) {
            continue;
        }
        let trail = Rc::new(Trail {
            node: node.clone(),
            prev: trail,
        });
        if &node == end {
            tracing::debug!("reached {:?} with weight {}", end, weight);
            return Ok(PathResult {
                weight: Some(weight),
                path:   Trail::to_path(&trail),
            });
        }

        for edge in graph.neighbors(&node)? {
            if visited.contains(&edge.to) {
                continue;
            }
            let Some(next) = weight.checked_add(edge.weight) else {
                overflowed = true;
                continue;
            };
            seq += 1;
            heap.push(Frontier {
                weight: next,
                seq,
                node: edge.to.clone(),
                trail: Some(Rc::clone(&trail)),
            });
        }
        visited.insert(node);
    }

    if overflowed {
        return Err(OracleError::WeightOverflow);
    }
    tracing::debug!("{:?} is unreachable from {:?}", end, start);
    Ok(PathResult::unreachable())
}

/// Total weight of walking `path` through `graph`, taking the cheapest edge
/// for each hop. `None` if `path` is empty or some hop is not an edge.
pub fn path_weight<N>(graph: &Graph<N>, path: &[N]) -> Option<u64>
where
    N: Ord + Clone + Debug,
{
    let first = path.first()?;
    if !graph.contains_node(first) {
        return None;
    }
    path.windows(2).try_fold(0u64, |total, hop| {
        total.checked_add(graph.edge_weight(&hop[0], &hop[1])?)
    })
}

/// Whether `path` is an acceptable answer for the cheapest route from
/// `start` to `end`: it runs from `start` to `end` over real edges and its
/// weight equals `weight`. Any such path is accepted, not only the one
/// [`shortest_path`] happens to return.
pub fn is_minimum_path<N>(graph: &Graph<N>, start: &N, end: &N, weight: u64, path: &[N]) -> bool
where
    N: Ord + Clone + Debug,
{
    path.first() == Some(start)
        && path.last() == Some(end)
        && path_weight(graph, path) == Some(weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Graph<&'static str> {
        Graph::from_edges([("a", "b", 1), ("a", "c", 4), ("b", "c", 1)])
    }

    #[test]
    fn frontier_pops_cheapest_then_oldest() {
        let mut heap = BinaryHeap::new();
        for (weight, seq) in [(5, 0), (1, 2), (1, 1), (3, 3)] {
            heap.push(Frontier {
                weight,
                seq,
                node: (),
                trail: None,
            });
        }
        let order: Vec<(u64, u64)> = std::iter::from_fn(|| heap.pop())
            .map(|f| (f.weight, f.seq))
            .collect();
        assert_eq!(order, vec![(1, 1), (1, 2), (3, 3), (5, 0)]);
    }

    #[test]
    fn takes_cheaper_two_hop_route() {
        let result = shortest_path(&abc(), &"a", &"c").expect("nodes exist");
        assert_eq!(result.weight, Some(2));
        assert_eq!(result.path, vec!["a", "b", "c"]);
    }

    #[test]
    fn start_equals_end() {
        let result = shortest_path(&abc(), &"b", &"b").expect("nodes exist");
        assert_eq!(result.weight, Some(0));
        assert_eq!(result.path, vec!["b"]);
    }

    #[test]
    fn unreachable_end_is_not_an_error() {
        let result = shortest_path(&abc(), &"c", &"a").expect("nodes exist");
        assert_eq!(result, PathResult::unreachable());
    }

    #[test]
    fn missing_nodes_are_errors() {
        assert_eq!(
            shortest_path(&abc(), &"z", &"a"),
            Err(OracleError::NodeNotFound("\"z\"".into()))
        );
        assert!(shortest_path(&abc(), &"a", &"z").is_err());
    }

    #[test]
    fn path_weight_uses_cheapest_parallel_edge() {
        let mut graph = abc();
        graph.add_edge("a", "b", 0);
        assert_eq!(path_weight(&graph, &["a", "b", "c"]), Some(1));
        assert_eq!(path_weight(&graph, &["a", "c", "b"]), None);
        assert_eq!(path_weight(&graph, &["a"]), Some(0));
        assert_eq!(path_weight::<&str>(&graph, &[]), None);
    }

    #[test]
    fn accepts_any_minimum_path() {
        let graph = Graph::from_edges([(1, 2, 1), (1, 3, 1), (2, 4, 1), (3, 4, 1)]);
        let result = shortest_path(&graph, &1, &4).expect("nodes exist");
        assert_eq!(result.weight, Some(2));
        assert!(is_minimum_path(&graph, &1, &4, 2, &[1, 2, 4]));
        assert!(is_minimum_path(&graph, &1, &4, 2, &[1, 3, 4]));
        assert!(!is_minimum_path(&graph, &1, &4, 2, &[1, 4]));
        assert!(!is_minimum_path(&graph, &1, &4, 3, &[1, 2, 4]));
    }

    #[test]
    fn overflowing_weights_are_reported() {
        let graph = Graph::from_edges([(1, 2, u64::MAX), (2, 3, 1)]);
        assert_eq!(shortest_path(&graph, &1, &3), Err(OracleError::WeightOverflow));
        assert_eq!(path_weight(&graph, &[1, 2, 3]), None);
    }

    #[test]
    fn overflowing_side_branch_does_not_hide_reachable_end() {
        let graph = Graph::from_edges([(1, 2, 10), (2, 9, u64::MAX), (1, 3, 20)]);
        let result = shortest_path(&graph, &1, &3).expect("3 is reachable");
        assert_eq!(result.weight, Some(20));
        assert_eq!(result.path, vec![1, 3]);
    }
}
