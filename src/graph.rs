#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::BTreeMap, fmt::Debug};

use serde::{Deserialize, Serialize};

use crate::{
    constants::DEFAULT_WEIGHT,
    error::{OracleError, Result},
};

/// A directed, weighted edge as stored in an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<N> {
    /// The node this edge points to.
    pub to:     N,
    /// The non-negative cost of following this edge.
    pub weight: u64,
}

/// One neighbour entry in the JSON form of a graph: either `[node, weight]`
/// or a bare `node`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NeighborSpec<N> {
    /// A neighbour with an explicit weight.
    Weighted(N, u64),
    /// A neighbour whose weight defaults to [`DEFAULT_WEIGHT`].
    Bare(N),
}

/// The JSON form of a graph: node mapped to its neighbours.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencySpec<N: Ord>(pub BTreeMap<N, Vec<NeighborSpec<N>>>);

/// A directed graph mapping each node to the edges leaving it.
///
/// Nodes are kept in their natural order; each node's edges stay in the
/// order they were added, which is the order traversals enumerate them in.
/// Parallel edges are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "AdjacencySpec<N>",
    into = "AdjacencySpec<N>",
    bound(
        serialize = "N: Ord + Clone + Serialize",
        deserialize = "N: Ord + Clone + Deserialize<'de>"
    )
)]
pub struct Graph<N: Ord> {
    /// Outgoing edges for every node.
    adjacency: BTreeMap<N, Vec<Edge<N>>>,
}

impl<N: Ord> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<N: Ord + Clone> From<AdjacencySpec<N>> for Graph<N> {
    fn from(spec: AdjacencySpec<N>) -> Self {
        let mut graph = Graph::default();
        for (node, neighbors) in spec.0 {
            graph.adjacency.entry(node.clone()).or_default();
            for neighbor in neighbors {
                let (to, weight) = match neighbor {
                    NeighborSpec::Weighted(to, weight) => (to, weight),
                    NeighborSpec::Bare(to) => (to, DEFAULT_WEIGHT),
                };
                graph.adjacency.entry(to.clone()).or_default();
                graph
                    .adjacency
                    .entry(node.clone())
                    .or_default()
                    .push(Edge { to, weight });
            }
        }
        graph
    }
}

impl<N: Ord + Clone> From<Graph<N>> for AdjacencySpec<N> {
    fn from(graph: Graph<N>) -> Self {
        AdjacencySpec(
            graph
                .adjacency
                .into_iter()
                .map(|(node, edges)| {
                    let neighbors = edges
                        .into_iter()
                        .map(|e| NeighborSpec::Weighted(e.to, e.weight))
                        .collect();
                    (node, neighbors)
                })
                .collect(),
        )
    }
}

impl<N: Ord + Clone + Debug> Graph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(from, to, weight)` triples.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, u64)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Adds a node with no edges. Returns false if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Adds a directed edge, adding either endpoint if missing.
    pub fn add_edge(&mut self, from: N, to: N, weight: u64) {
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge { to, weight });
    }

    /// Adds a directed edge with [`DEFAULT_WEIGHT`].
    pub fn add_unweighted_edge(&mut self, from: N, to: N) {
        self.add_edge(from, to, DEFAULT_WEIGHT);
    }

    /// Whether `node` is in the graph.
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + Clone {
        self.adjacency.keys()
    }

    /// Every edge as `(from, to, weight)`, grouped by source node.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, u64)> {
        self.adjacency
            .iter()
            .flat_map(|(from, edges)| edges.iter().map(move |e| (from, &e.to, e.weight)))
    }

    /// Edges leaving `node`, in insertion order.
    pub fn neighbors(&self, node: &N) -> Result<&[Edge<N>]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| OracleError::node_not_found(node))
    }

    /// Whether there is at least one edge from `from` to `to`.
    pub fn adjacent(&self, from: &N, to: &N) -> Result<bool> {
        if !self.contains_node(to) {
            return Err(OracleError::node_not_found(to));
        }
        Ok(self.neighbors(from)?.iter().any(|e| &e.to == to))
    }

    /// Cheapest weight among the edges from `from` to `to`, if any.
    pub fn edge_weight(&self, from: &N, to: &N) -> Option<u64> {
        self.adjacency
            .get(from)?
            .iter()
            .filter(|e| &e.to == to)
            .map(|e| e.weight)
            .min()
    }

    /// Removes `node` and every edge pointing at it.
    pub fn del_node(&mut self, node: &N) -> Result<()> {
        if self.adjacency.remove(node).is_none() {
            return Err(OracleError::node_not_found(node));
        }
        for edges in self.adjacency.values_mut() {
            edges.retain(|e| &e.to != node);
        }
        Ok(())
    }

    /// Removes every edge from `from` to `to`.
    pub fn del_edge(&mut self, from: &N, to: &N) -> Result<()> {
        let edges = self
            .adjacency
            .get_mut(from)
            .ok_or_else(|| OracleError::node_not_found(from))?;
        let before = edges.len();
        edges.retain(|e| &e.to != to);
        if edges.len() == before {
            return Err(OracleError::EdgeNotFound {
                from: format!("{from:?}"),
                to:   format!("{to:?}"),
            });
        }
        Ok(())
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph<String> {
        serde_json::from_str(r#"{"a": [["b", 1], ["c", 4]], "b": [["c", 1]], "c": []}"#)
            .expect("parse graph")
    }

    #[test]
    fn deserializes_weighted_and_bare_neighbors() {
        let graph: Graph<String> =
            serde_json::from_str(r#"{"a": ["b", ["c", 7]]}"#).expect("parse graph");
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_weight(&"a".into(), &"b".into()), Some(DEFAULT_WEIGHT));
        assert_eq!(graph.edge_weight(&"a".into(), &"c".into()), Some(7));
        assert!(graph.neighbors(&"c".into()).expect("c is a node").is_empty());
    }

    #[test]
    fn serializes_back_to_adjacency_lists() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(json["a"][1], serde_json::json!(["c", 4]));
        assert_eq!(json["c"], serde_json::json!([]));
    }

    #[test]
    fn adjacent_requires_both_nodes() {
        let graph = sample();
        assert!(graph.adjacent(&"a".into(), &"b".into()).expect("both present"));
        assert!(!graph.adjacent(&"c".into(), &"a".into()).expect("both present"));
        assert!(graph.adjacent(&"a".into(), &"z".into()).is_err());
        assert!(graph.adjacent(&"z".into(), &"a".into()).is_err());
    }

    #[test]
    fn del_node_removes_incoming_edges() {
        let mut graph = sample();
        graph.del_node(&"c".into()).expect("c exists");
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.del_node(&"c".into()).is_err());
    }

    #[test]
    fn del_edge_reports_missing_edge() {
        let mut graph = sample();
        graph.del_edge(&"a".into(), &"b".into()).expect("edge exists");
        assert!(matches!(
            graph.del_edge(&"a".into(), &"b".into()),
            Err(OracleError::EdgeNotFound { .. })
        ));
    }

    #[test]
    fn parallel_edges_keep_cheapest_weight() {
        let graph = Graph::from_edges([(1, 2, 5), (1, 2, 3)]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_weight(&1, &2), Some(3));
    }
}
