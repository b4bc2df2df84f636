#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    fmt::Debug,
};

use anyhow::{Result, bail};

use crate::{
    candidate::WeightedGraph,
    graph::Graph,
    oracle::PathResult,
};

/// An adjacency-list graph whose shortest-path search is Bellman-Ford.
///
/// Shares the [`Graph`] storage with the oracles but none of their search
/// code, so grading it against them is a real differential check.
#[derive(Debug, Clone)]
pub struct ListGraph<N: Ord> {
    /// Underlying adjacency lists.
    inner: Graph<N>,
}

impl<N: Ord> Default for ListGraph<N> {
    fn default() -> Self {
        Self {
            inner: Graph::default(),
        }
    }
}

impl<N: Ord + Clone + Debug> ListGraph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Distances and predecessors from `start` after relaxing every edge
    /// once per node.
    fn bellman_ford(&self, start: &N) -> (BTreeMap<N, u64>, BTreeMap<N, N>) {
        let mut dist = BTreeMap::from([(start.clone(), 0u64)]);
        let mut pred: BTreeMap<N, N> = BTreeMap::new();

        for _ in 1..self.inner.node_count().max(1) {
            let mut changed = false;
            for (from, to, weight) in self.inner.edges() {
                let Some(&base) = dist.get(from) else {
                    continue;
                };
                let candidate = base.saturating_add(weight);
                if dist.get(to).is_none_or(|&current| candidate < current) {
                    dist.insert(to.clone(), candidate);
                    pred.insert(to.clone(), from.clone());
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
        (dist, pred)
    }
}

impl<N: Ord + Clone + Debug> WeightedGraph<N> for ListGraph<N> {
    fn add_node(&mut self, node: N) {
        self.inner.add_node(node);
    }

    fn add_edge(&mut self, from: N, to: N, weight: u64) {
        self.inner.add_edge(from, to, weight);
    }

    fn has_node(&self, node: &N) -> bool {
        self.inner.contains_node(node)
    }

    fn nodes(&self) -> Vec<N> {
        self.inner.nodes().cloned().collect()
    }

    fn neighbors(&self, node: &N) -> Result<Vec<(N, u64)>> {
        Ok(self
            .inner
            .neighbors(node)?
            .iter()
            .map(|e| (e.to.clone(), e.weight))
            .collect())
    }

    fn adjacent(&self, from: &N, to: &N) -> Result<bool> {
        Ok(self.inner.adjacent(from, to)?)
    }

    fn breadth_first(&self, start: &N) -> Result<Vec<N>> {
        if !self.has_node(start) {
            bail!("{start:?} is not in the graph");
        }
        let mut seen = BTreeSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start.clone()]);
        while let Some(node) = queue.pop_front() {
            if !seen.insert(node.clone()) {
                continue;
            }
            for (next, _) in self.neighbors(&node)? {
                queue.push_back(next);
            }
            order.push(node);
        }
        Ok(order)
    }

    fn depth_first(&self, start: &N) -> Result<Vec<N>> {
        if !self.has_node(start) {
            bail!("{start:?} is not in the graph");
        }
        let mut seen = BTreeSet::new();
        let mut order = Vec::new();
        let mut stack = vec![start.clone()];
        while let Some(node) = stack.pop() {
            if seen.contains(&node) {
                continue;
            }
            seen.insert(node.clone());
            for (next, _) in self.neighbors(&node)? {
                stack.push(next);
            }
            order.push(node);
        }
        Ok(order)
    }

    fn shortest_path(&self, start: &N, end: &N) -> Result<PathResult<N>> {
        for node in [start, end] {
            if !self.has_node(node) {
                bail!("{node:?} is not in the graph");
            }
        }

        let (dist, pred) = self.bellman_ford(start);
        let Some(&weight) = dist.get(end) else {
            return Ok(PathResult::unreachable());
        };

        let mut path = vec![end.clone()];
        let mut current = end;
        while current != start {
            let Some(prev) = pred.get(current) else {
                bail!("predecessor chain broke at {current:?}");
            };
            if path.len() > self.inner.node_count() {
                bail!("predecessor chain loops through {current:?}");
            }
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();

        Ok(PathResult {
            weight: Some(weight),
            path,
        })
    }
}
