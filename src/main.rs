#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # dsgrade
//!
//! Command line front end for the data-structure oracles and graders.
//!
//! `dsgrade tree '[5, 3, 8, 1]'` prints what a binary search tree built from
//! that insertion order must look like, `dsgrade path` and `dsgrade traverse`
//! answer graph queries over a JSON adjacency map, and `dsgrade self-check`
//! grades the bundled reference implementations.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use bpaf::*;
use dotenvy::dotenv;
use dsgrade::{
    cases::CaseFactory,
    config,
    grade::{GraphGrader, QueueGrader, StackGrader, TreeGrader, describe, show_results},
    graph::Graph,
    oracle::{
        balance, breadth_first, graph_breadth_first, graph_depth_first, in_order, partition,
        post_order, pre_order, shortest_path, unbalanced_depth,
    },
    reference::{ListGraph, RingQueue, SearchTree, VecStack},
    value::Key,
};
use serde_json::json;
use tabled::{
    Table, Tabled,
    settings::{Panel, Style},
};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Oracle output for a tree built from a sequence
    Tree {
        /// Print JSON instead of a table
        json:     bool,
        /// JSON array of integers or strings
        sequence: String,
    },
    /// Cheapest path between two nodes
    Path {
        /// Inline JSON adjacency map or a path to one
        graph: String,
        /// Node to start from
        start: String,
        /// Node to reach
        end:   String,
    },
    /// Breadth-first and depth-first orders from a node
    Traverse {
        /// Inline JSON adjacency map or a path to one
        graph: String,
        /// Node to start from
        start: String,
    },
    /// Grade the bundled reference implementations
    SelfCheck {
        /// Seed overriding `DSGRADE_SEED`
        seed:  Option<u64>,
        /// Random case count overriding `DSGRADE_RANDOM_CASES`
        cases: Option<usize>,
    },
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses a graph argument
    fn g() -> impl Parser<String> {
        positional("GRAPH").help("JSON adjacency map, inline or as a file path")
    }

    /// parses a start node
    fn s() -> impl Parser<String> {
        positional("START").help("Node to start from")
    }

    let json = long("json").help("Print JSON instead of a table").switch();
    let sequence = positional::<String>("SEQUENCE").help("JSON array of integers or strings");
    let tree = construct!(Cmd::Tree { json, sequence })
        .to_options()
        .command("tree")
        .help("Show partitions, depth, balance and traversals for an insertion order");

    let graph = g();
    let start = s();
    let end = positional::<String>("END").help("Node to reach");
    let path = construct!(Cmd::Path { graph, start, end })
        .to_options()
        .command("path")
        .help("Find the cheapest path between two nodes");

    let graph = g();
    let start = s();
    let traverse = construct!(Cmd::Traverse { graph, start })
        .to_options()
        .command("traverse")
        .help("Show breadth-first and depth-first orders from a node");

    let seed = long("seed")
        .help("Seed for generated cases, decimal or 0x-prefixed")
        .argument::<String>("SEED")
        .parse(|s| config::parse_seed(&s).ok_or("expected a decimal or 0x-prefixed seed"))
        .optional();
    let cases = long("cases")
        .help("Random sequences generated per kind")
        .argument::<usize>("COUNT")
        .optional();
    let self_check = construct!(Cmd::SelfCheck { seed, cases })
        .to_options()
        .command("self-check")
        .help("Grade the bundled reference implementations");

    let cmd = construct!([tree, path, traverse, self_check]);

    cmd.to_options()
        .descr("Oracles and graders for data-structure assignments")
        .run()
}

/// One labelled line of oracle output.
#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Property")]
    /// What was computed
    property: &'static str,
    #[tabled(rename = "Value")]
    /// The computed value
    value:    String,
}

/// Prints the oracle answers for an insertion sequence.
fn tree(sequence: &str, as_json: bool) -> Result<()> {
    let values = Key::parse_sequence(sequence)
        .with_context(|| format!("Could not read `{sequence}` as a sequence"))?;
    let split = partition(&values);

    if as_json {
        let out = json!({
            "partition": split.as_ref().map(|p| json!({
                "pivot": p.pivot,
                "less": p.less,
                "more": p.more,
            })),
            "depth": unbalanced_depth(&values),
            "balance": balance(&values),
            "in_order": in_order(&values),
            "pre_order": pre_order(&values),
            "post_order": post_order(&values),
            "breadth_first": breadth_first(&values),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let (pivot, less, more) = match &split {
        Some(p) => (p.pivot.to_string(), describe(&p.less), describe(&p.more)),
        None => ("-".to_string(), describe::<Key>(&[]), describe::<Key>(&[])),
    };
    let rows = vec![
        Row { property: "Pivot", value: pivot },
        Row { property: "Less", value: less },
        Row { property: "More", value: more },
        Row { property: "Depth", value: unbalanced_depth(&values).to_string() },
        Row { property: "Balance", value: balance(&values).to_string() },
        Row { property: "In-order", value: describe(&in_order(&values)) },
        Row { property: "Pre-order", value: describe(&pre_order(&values)) },
        Row { property: "Post-order", value: describe(&post_order(&values)) },
        Row { property: "Breadth-first", value: describe(&breadth_first(&values)) },
    ];
    println!(
        "{}",
        Table::new(rows)
            .with(Panel::header(format!("Tree from {}", describe(&values))))
            .with(Style::modern())
    );
    Ok(())
}

/// Reads a graph given inline or as a path to a JSON file.
fn load_graph(arg: &str) -> Result<Graph<String>> {
    let text = if arg.trim_start().starts_with('{') {
        arg.to_string()
    } else {
        std::fs::read_to_string(Path::new(arg))
            .with_context(|| format!("Could not read graph file `{arg}`"))?
    };
    serde_json::from_str(&text).context("Graph must be a JSON object of node -> neighbours")
}

/// Prints the cheapest path between two nodes.
fn path(graph: &str, start: &str, end: &str) -> Result<()> {
    let graph = load_graph(graph)?;
    let result = shortest_path(&graph, &start.to_string(), &end.to_string())?;
    match result.weight {
        Some(weight) => println!("{weight}: {}", result.path.join(" -> ")),
        None => println!("unreachable"),
    }
    Ok(())
}

/// Prints both traversal orders from a node.
fn traverse(graph: &str, start: &str) -> Result<()> {
    let graph = load_graph(graph)?;
    let start = start.to_string();
    println!("breadth-first: {}", graph_breadth_first(&graph, &start)?.join(", "));
    println!("depth-first:   {}", graph_depth_first(&graph, &start)?.join(", "));
    Ok(())
}

/// Grades every reference implementation and fails unless all earn full
/// marks.
fn self_check(seed: Option<u64>, cases: Option<usize>) -> Result<()> {
    let cfg = config::get();
    if let Some(seed) = seed {
        cfg.set_seed(seed);
    }
    if let Some(cases) = cases {
        cfg.set_random_cases(cases);
    }
    tracing::info!("self-check with seed {:#x}", cfg.seed());

    let mut factory = CaseFactory::new(cfg.seed()).with_random_cases(cfg.random_cases());
    let sequences = factory.all_sequences();
    let graphs = factory.all_graphs();

    let results = vec![
        TreeGrader::builder()
            .req_name("Binary search tree")
            .out_of(40.0)
            .cases(sequences.clone())
            .build()
            .run::<SearchTree<Key>>(),
        GraphGrader::builder()
            .req_name("Weighted graph")
            .out_of(40.0)
            .cases(graphs)
            .build()
            .run::<ListGraph<Key>>(),
        StackGrader::builder()
            .req_name("Stack")
            .out_of(10.0)
            .cases(sequences.clone())
            .build()
            .run::<VecStack<Key>>(),
        QueueGrader::builder()
            .req_name("Queue")
            .out_of(10.0)
            .cases(sequences)
            .build()
            .run::<RingQueue<Key>>(),
    ];

    let total = show_results(&results);
    ensure!(
        total.grade >= total.out_of,
        "Reference implementations lost marks with seed {:#x}",
        cfg.seed()
    );
    Ok(())
}

fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = config::log_level();
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options() {
        Cmd::Tree { json, sequence } => tree(&sequence, json)?,
        Cmd::Path { graph, start, end } => path(&graph, &start, &end)?,
        Cmd::Traverse { graph, start } => traverse(&graph, &start)?,
        Cmd::SelfCheck { seed, cases } => self_check(seed, cases)?,
    };

    Ok(())
}
