use dsgrade::{
    OracleError,
    graph::Graph,
    oracle::{
        PathResult, balance, breadth_first, graph_breadth_first, graph_depth_first, in_order,
        partition, post_order, pre_order, shortest_path, unbalanced_depth,
    },
    value::Key,
};
use pretty_assertions::assert_eq;

fn sample_graph() -> Graph<&'static str> {
    Graph::from_edges([("a", "b", 1), ("a", "c", 4), ("b", "c", 1)])
}

#[test]
fn depth_of_five_element_sequence() {
    let split = partition(&[5, 3, 8, 1, 4]).expect("non-empty");
    assert_eq!(split.pivot, 5);
    assert_eq!(split.less, vec![3, 1, 4]);
    assert_eq!(split.more, vec![8]);
    assert_eq!(unbalanced_depth(&split.less), 2);
    assert_eq!(unbalanced_depth(&split.more), 1);
    assert_eq!(unbalanced_depth(&[5, 3, 8, 1, 4]), 3);
    assert_eq!(balance(&[5, 3, 8, 1, 4]), 1);
}

#[test]
fn in_order_sorts() {
    assert_eq!(in_order(&[5, 3, 8, 1, 4]), vec![1, 3, 4, 5, 8]);
}

#[test]
fn cheapest_path_goes_through_middle() {
    let result = shortest_path(&sample_graph(), &"a", &"c").expect("both nodes exist");
    assert_eq!(result, PathResult {
        weight: Some(2),
        path:   vec!["a", "b", "c"],
    });
}

#[test]
fn path_to_missing_node_is_an_error() {
    let err = shortest_path(&sample_graph(), &"a", &"z").expect_err("z is not a node");
    assert!(matches!(err, OracleError::NodeNotFound(_)));
    assert!(shortest_path(&sample_graph(), &"z", &"a").is_err());
}

#[test]
fn unreachable_end_is_not_an_error() {
    let result = shortest_path(&sample_graph(), &"c", &"a").expect("both nodes exist");
    assert_eq!(result, PathResult::unreachable());
    assert!(!result.is_reachable());
}

#[test]
fn empty_sequence() {
    let empty: [i64; 0] = [];
    assert_eq!(unbalanced_depth(&empty), 0);
    assert_eq!(in_order(&empty), Vec::<i64>::new());
    assert_eq!(balance(&empty), 0);
    assert!(pre_order(&empty).is_empty());
    assert!(post_order(&empty).is_empty());
    assert!(breadth_first(&empty).is_empty());
}

#[test]
fn string_sequences_order_lexically() {
    let words = ["m", "c", "x", "a"].map(Key::from);
    assert_eq!(in_order(&words), ["a", "c", "m", "x"].map(Key::from).to_vec());
    assert_eq!(breadth_first(&words), ["m", "c", "x", "a"].map(Key::from).to_vec());
    assert_eq!(unbalanced_depth(&words), 3);
}

#[test]
fn mixed_sequences_are_rejected() {
    let err = Key::parse_sequence(r#"[1, "a"]"#).expect_err("ints and strings mixed");
    assert!(err.to_string().contains("all be integers or all be strings"), "{err}");
    assert_eq!(Key::parse_sequence("[3, 1, 2]").expect("ints"), vec![
        Key::Int(3),
        Key::Int(1),
        Key::Int(2)
    ]);
}

/// Builds an unweighted graph from `(node, neighbours)` pairs.
fn unweighted(spec: &[(&'static str, &[&'static str])]) -> Graph<&'static str> {
    let mut graph = Graph::new();
    for (node, neighbours) in spec {
        graph.add_node(*node);
        for next in *neighbours {
            graph.add_unweighted_edge(*node, *next);
        }
    }
    graph
}

#[test]
fn traversals_of_single_node() {
    let graph = unweighted(&[("a", &[])]);
    assert_eq!(graph_breadth_first(&graph, &"a").expect("a"), vec!["a"]);
    assert_eq!(graph_depth_first(&graph, &"a").expect("a"), vec!["a"]);
}

#[test]
fn traversals_of_cycles() {
    let two = unweighted(&[("a", &["b"]), ("b", &["a"])]);
    assert_eq!(graph_breadth_first(&two, &"b").expect("b"), vec!["b", "a"]);
    assert_eq!(graph_depth_first(&two, &"a").expect("a"), vec!["a", "b"]);

    let three = unweighted(&[("a", &["b"]), ("b", &["c"]), ("c", &["a"])]);
    for (start, expected) in [("a", ["a", "b", "c"]), ("b", ["b", "c", "a"]), ("c", ["c", "a", "b"])]
    {
        assert_eq!(graph_breadth_first(&three, &start).expect("node"), expected.to_vec());
        assert_eq!(graph_depth_first(&three, &start).expect("node"), expected.to_vec());
    }
}

#[test]
fn traversals_of_diamond_differ() {
    let four = unweighted(&[("a", &["b", "c"]), ("b", &["d"]), ("c", &["d"]), ("d", &[])]);
    assert_eq!(graph_breadth_first(&four, &"a").expect("a"), vec!["a", "b", "c", "d"]);
    assert_eq!(graph_depth_first(&four, &"a").expect("a"), vec!["a", "c", "d", "b"]);
    assert_eq!(graph_depth_first(&four, &"b").expect("b"), vec!["b", "d"]);
    assert_eq!(graph_breadth_first(&four, &"d").expect("d"), vec!["d"]);
}

#[test]
fn traversal_from_missing_node_is_an_error() {
    let graph = unweighted(&[("a", &[])]);
    assert!(matches!(graph_breadth_first(&graph, &"q"), Err(OracleError::NodeNotFound(_))));
    assert!(matches!(graph_depth_first(&graph, &"q"), Err(OracleError::NodeNotFound(_))));
}

#[test]
fn graph_reads_adjacency_json() {
    let graph: Graph<String> =
        serde_json::from_str(r#"{"a": [["b", 1], ["c", 4]], "b": [["c", 1]], "c": []}"#)
            .expect("valid graph");
    let result = shortest_path(&graph, &"a".to_string(), &"c".to_string()).expect("nodes exist");
    assert_eq!(result.weight, Some(2));
    assert_eq!(result.path.join(""), "abc");
}
