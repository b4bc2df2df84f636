#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Seeded generation of test inputs.
//!
//! Every random draw goes through a [`CaseFactory`] built from an explicit
//! seed, so a failing case can be reproduced by rerunning with that seed.

use std::fmt::Debug;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::index::sample};

use crate::{
    constants::{
        DEFAULT_RANDOM_CASES, MAX_RANDOM_INT, MAX_RANDOM_WEIGHT, RANDOM_EDGE_SUBSETS,
        RANDOM_SEQUENCE_LEN, str_chars,
    },
    graph::Graph,
    value::Key,
};

/// Produces sequences and graphs for grading, deterministically per seed.
#[derive(Debug, Clone)]
pub struct CaseFactory {
    /// Source of every random choice.
    rng:          StdRng,
    /// How many random integer and string cases to draw.
    random_cases: usize,
}

impl CaseFactory {
    /// Creates a factory drawing from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng:          StdRng::seed_from_u64(seed),
            random_cases: DEFAULT_RANDOM_CASES,
        }
    }

    /// Sets how many random cases of each kind are drawn.
    pub fn with_random_cases(mut self, count: usize) -> Self {
        self.random_cases = count;
        self
    }

    /// Fixed integer sequences: empty, single, both orders of a pair, and a
    /// long ascending and descending run.
    pub fn int_edge_cases() -> Vec<Vec<i64>> {
        vec![
            vec![],
            vec![0],
            vec![0, 1],
            vec![1, 0],
            (0..100).collect(),
            (0..100).rev().collect(),
        ]
    }

    /// Fixed string sequences mirroring [`CaseFactory::int_edge_cases`],
    /// one character per element.
    pub fn str_edge_cases() -> Vec<Vec<String>> {
        let letters: String = ('a'..='z').chain('A'..='Z').collect();
        let reversed: String = letters.chars().rev().collect();
        ["", "a", "ab", "ba", letters.as_str(), reversed.as_str()]
            .iter()
            .map(|s| s.chars().map(String::from).collect())
            .collect()
    }

    /// A random length in the configured sequence range.
    fn sequence_len(&mut self) -> usize {
        let (low, high) = RANDOM_SEQUENCE_LEN;
        self.rng.random_range(low..high)
    }

    /// Random sequences of distinct integers below [`MAX_RANDOM_INT`].
    pub fn random_int_cases(&mut self) -> Vec<Vec<i64>> {
        (0..self.random_cases)
            .map(|_| {
                let len = self.sequence_len();
                sample(&mut self.rng, MAX_RANDOM_INT as usize, len)
                    .into_iter()
                    .map(|i| i as i64)
                    .collect()
            })
            .collect()
    }

    /// Random sequences of distinct single characters drawn from
    /// [`str_chars`].
    pub fn random_str_cases(&mut self) -> Vec<Vec<String>> {
        let chars = str_chars();
        (0..self.random_cases)
            .map(|_| {
                let len = self.sequence_len().min(chars.len());
                sample(&mut self.rng, chars.len(), len)
                    .into_iter()
                    .map(|i| chars[i].to_string())
                    .collect()
            })
            .collect()
    }

    /// Every integer and string sequence, edge cases first.
    pub fn all_sequences(&mut self) -> Vec<Vec<Key>> {
        let ints = Self::int_edge_cases()
            .into_iter()
            .chain(self.random_int_cases())
            .map(|case| case.into_iter().map(Key::Int).collect::<Vec<_>>());
        let strs = Self::str_edge_cases()
            .into_iter()
            .chain(self.random_str_cases())
            .map(|case| case.into_iter().map(Key::Str).collect::<Vec<_>>());
        ints.chain(strs).collect()
    }

    /// A random edge weight below [`MAX_RANDOM_WEIGHT`].
    pub fn weight(&mut self) -> u64 {
        self.rng.random_range(0..MAX_RANDOM_WEIGHT)
    }

    /// Graphs over `nodes`: one with no edges, one with every ordered pair
    /// connected, then up to [`RANDOM_EDGE_SUBSETS`] random non-empty,
    /// incomplete edge sets. Every edge gets a random weight.
    pub fn graph_cases<N>(&mut self, nodes: &[N]) -> Vec<Graph<N>>
    where
        N: Ord + Clone + Debug,
    {
        let mut nodes = nodes.to_vec();
        nodes.sort();
        nodes.dedup();

        let pairs: Vec<(N, N)> = nodes
            .iter()
            .flat_map(|a| {
                nodes
                    .iter()
                    .filter(move |b| *b != a)
                    .map(move |b| (a.clone(), b.clone()))
            })
            .collect();

        let mut cases = vec![self.build_graph(&nodes, &pairs, &[])];
        if pairs.is_empty() {
            return cases;
        }

        let all: Vec<usize> = (0..pairs.len()).collect();
        cases.push(self.build_graph(&nodes, &pairs, &all));
        for _ in 0..RANDOM_EDGE_SUBSETS.min(pairs.len()) {
            // at least one edge, never all of them
            let count = self.rng.random_range(1..pairs.len().max(2));
            let chosen = sample(&mut self.rng, pairs.len(), count).into_vec();
            cases.push(self.build_graph(&nodes, &pairs, &chosen));
        }
        cases
    }

    /// A graph holding `nodes` and the pairs at `chosen`, randomly weighted.
    fn build_graph<N>(&mut self, nodes: &[N], pairs: &[(N, N)], chosen: &[usize]) -> Graph<N>
    where
        N: Ord + Clone + Debug,
    {
        let mut graph = Graph::new();
        for node in nodes {
            graph.add_node(node.clone());
        }
        for &i in chosen {
            let (from, to) = pairs[i].clone();
            let weight = self.weight();
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Node sets used for graph grading: small fixed sets, then random
    /// integer and string sets of 2 to 9 nodes.
    pub fn graph_node_sets(&mut self) -> Vec<Vec<Key>> {
        let mut sets: Vec<Vec<Key>> = vec![
            vec![],
            vec![Key::Int(0)],
            vec![Key::Int(0), Key::Int(1)],
            vec![Key::from("a")],
            vec![Key::from("a"), Key::from("b")],
        ];
        let chars = str_chars();
        for _ in 0..self.random_cases {
            let len = self.rng.random_range(2..10);
            sets.push(
                sample(&mut self.rng, MAX_RANDOM_INT as usize, len)
                    .into_iter()
                    .map(|i| Key::Int(i as i64))
                    .collect(),
            );
            let len = self.rng.random_range(2..10);
            sets.push(
                sample(&mut self.rng, chars.len(), len)
                    .into_iter()
                    .map(|i| Key::from(chars[i]))
                    .collect(),
            );
        }
        sets
    }

    /// Every graph case over every node set.
    pub fn all_graphs(&mut self) -> Vec<Graph<Key>> {
        self.graph_node_sets()
            .iter()
            .flat_map(|nodes| self.graph_cases(nodes))
            .collect()
    }
}
