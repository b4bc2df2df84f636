#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    collections::BTreeSet,
    panic::{AssertUnwindSafe, catch_unwind},
};

use bon::Builder;
use itertools::Itertools;

use super::{
    describe,
    results::{GradeResult, Tally},
};
use crate::{
    candidate::WeightedGraph,
    graph::Graph,
    oracle::{graph_breadth_first, graph_depth_first, is_minimum_path, shortest_path},
    value::Key,
};

/// A node name no generated graph uses.
const MISSING_NODE: &str = "nodenotingraph";

#[derive(Clone, Debug, Builder)]
#[builder(on(String, into))]
/// Grades a weighted graph by rebuilding each case in a fresh instance and
/// checking traversals and shortest paths against the graph oracles.
pub struct GraphGrader {
    /// Display name for requirement to use while displaying grade result
    req_name:      String,
    /// Maximum possible grade.
    out_of:        f64,
    /// Graphs to rebuild, one fresh candidate each.
    cases:         Vec<Graph<Key>>,
    /// Compare traversals as sets of visited nodes instead of exact order,
    /// for candidates whose neighbour order legitimately differs.
    #[builder(default)]
    order_agnostic: bool,
}

impl GraphGrader {
    /// Grades a graph type that can be default-constructed.
    pub fn run<C>(&self) -> GradeResult
    where
        C: WeightedGraph<Key> + Default,
    {
        self.grade_with(C::default)
    }

    /// Grades graphs produced by `make`, one per case.
    pub fn grade_with<C, F>(&self, mut make: F) -> GradeResult
    where
        C: WeightedGraph<Key>,
        F: FnMut() -> C,
    {
        let mut tally = Tally::new();

        for (index, graph) in self.cases.iter().enumerate() {
            tracing::debug!(
                "grading graph case {index} with {} nodes and {} edges",
                graph.node_count(),
                graph.edge_count()
            );
            let before = tally.total();
            let outcome = catch_unwind(AssertUnwindSafe(|| {
                let mut candidate = make();
                for node in graph.nodes() {
                    candidate.add_node(node.clone());
                }
                for (from, to, weight) in graph.edges() {
                    candidate.add_edge(from.clone(), to.clone(), weight);
                }
                self.check_graph(&mut tally, &candidate, graph, index);
            }));
            if outcome.is_err() {
                let remaining = checks_for(graph).saturating_sub(tally.total() - before);
                tally.fail_many(remaining, format!("- graph {index}: panicked"));
            }
        }

        tally.into_result(&self.req_name, self.out_of)
    }

    /// Compares one rebuilt candidate with the oracles.
    fn check_graph<C>(&self, tally: &mut Tally, candidate: &C, graph: &Graph<Key>, index: usize)
    where
        C: WeightedGraph<Key>,
    {
        let expected: BTreeSet<Key> = graph.nodes().cloned().collect();
        let actual: BTreeSet<Key> = candidate.nodes().into_iter().collect();
        tally.check(actual == expected, || {
            format!(
                "- graph {index}: nodes were {}, expected {}",
                describe(&actual.iter().collect_vec()),
                describe(&expected.iter().collect_vec())
            )
        });

        let missing = Key::from(MISSING_NODE);
        let rejects = candidate.neighbors(&missing).is_err()
            && graph
                .nodes()
                .next()
                .is_none_or(|n| candidate.shortest_path(&missing, n).is_err());
        tally.check(rejects, || {
            format!("- graph {index}: accepted {missing}, which is not a node")
        });

        for start in graph.nodes() {
            self.check_traversals(tally, candidate, graph, start, index);
        }

        for (start, end) in graph.nodes().tuple_combinations() {
            check_path(tally, candidate, graph, start, end, index);
            check_path(tally, candidate, graph, end, start, index);
        }
    }

    /// Breadth-first and depth-first orders from `start`.
    fn check_traversals<C>(
        &self,
        tally: &mut Tally,
        candidate: &C,
        graph: &Graph<Key>,
        start: &Key,
        index: usize,
    ) where
        C: WeightedGraph<Key>,
    {
        let oracles: [(&str, Vec<Key>, anyhow::Result<Vec<Key>>); 2] = [
            (
                "breadth-first",
                graph_breadth_first(graph, start).unwrap_or_default(),
                candidate.breadth_first(start),
            ),
            (
                "depth-first",
                graph_depth_first(graph, start).unwrap_or_default(),
                candidate.depth_first(start),
            ),
        ];

        for (label, expected, actual) in oracles {
            let reason = match actual {
                Ok(actual) if self.same_order(&actual, &expected) => None,
                Ok(actual) => Some(format!(
                    "- graph {index}: {label} from {start} gave {}, expected {}",
                    describe(&actual),
                    describe(&expected)
                )),
                Err(e) => Some(format!("- graph {index}: {label} from {start} failed: {e}")),
            };
            tally.check(reason.is_none(), || reason.unwrap_or_default());
        }
    }

    /// Whether a traversal matches, exactly or as a visited set.
    fn same_order(&self, actual: &[Key], expected: &[Key]) -> bool {
        if !self.order_agnostic {
            return actual == expected;
        }
        actual.first() == expected.first()
            && actual.len() == expected.len()
            && actual.iter().collect::<BTreeSet<_>>() == expected.iter().collect::<BTreeSet<_>>()
    }
}

/// Shortest path from `start` to `end`, accepting any minimum-weight path.
/// When every route overflows, the candidate must report an error.
fn check_path<C>(
    tally: &mut Tally,
    candidate: &C,
    graph: &Graph<Key>,
    start: &Key,
    end: &Key,
    index: usize,
) where
    C: WeightedGraph<Key>,
{
    let expected = match shortest_path(graph, start, end) {
        Ok(expected) => expected,
        Err(e) => {
            tracing::warn!("no cheapest weight for graph {index}: {e}");
            let rejected = candidate.shortest_path(start, end).is_err();
            tally.check(rejected, || {
                format!(
                    "- graph {index}: path {start} -> {end} overflows a u64, but a path was \
                     returned"
                )
            });
            return;
        }
    };
    let reason = match (candidate.shortest_path(start, end), expected.weight) {
        (Err(e), _) => Some(format!("- graph {index}: path {start} -> {end} failed: {e}")),
        (Ok(actual), None) if actual.is_reachable() || !actual.path.is_empty() => Some(format!(
            "- graph {index}: found path {} from {start} to {end}, which is unreachable",
            describe(&actual.path)
        )),
        (Ok(_), None) => None,
        (Ok(actual), Some(weight)) => match actual.weight {
            Some(w) if w == weight && is_minimum_path(graph, start, end, w, &actual.path) => None,
            Some(w) => Some(format!(
                "- graph {index}: path {start} -> {end} was {} with weight {w}, expected weight \
                 {weight} via {}",
                describe(&actual.path),
                describe(&expected.path)
            )),
            None => Some(format!(
                "- graph {index}: reported {end} unreachable from {start}, expected weight \
                 {weight}"
            )),
        },
    };
    tally.check(reason.is_none(), || reason.unwrap_or_default());
}

/// Number of checks made for `graph`, used to charge a panicking case.
fn checks_for(graph: &Graph<Key>) -> usize {
    let n = graph.node_count();
    2 + 2 * n + n * n.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ListGraph;

    #[test]
    fn check_count_matches_pairs_and_starts() {
        let graph = Graph::from_edges([(Key::Int(1), Key::Int(2), 3)]);
        // nodes + missing node + 2 traversals per node + ordered pairs
        assert_eq!(checks_for(&graph), 2 + 4 + 2);
        assert_eq!(checks_for(&Graph::new()), 2);
    }

    #[test]
    fn overflowing_path_records_one_check() {
        let graph = Graph::from_edges([
            (Key::Int(1), Key::Int(2), u64::MAX),
            (Key::Int(2), Key::Int(3), 1),
        ]);
        let mut candidate = ListGraph::new();
        for (from, to, weight) in graph.edges() {
            candidate.add_edge(from.clone(), to.clone(), weight);
        }

        let mut tally = Tally::new();
        check_path(&mut tally, &candidate, &graph, &Key::Int(1), &Key::Int(3), 0);
        assert_eq!(tally.total(), 1);

        check_path(&mut tally, &candidate, &graph, &Key::Int(1), &Key::Int(2), 0);
        assert_eq!(tally.total(), 2);
    }
}
