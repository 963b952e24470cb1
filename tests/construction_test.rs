//! Integration tests for graph construction and validation.

mod common;

use common::g1u;
use graphein::{new_graph, Digraph, GraphError, Undigraph};

#[test]
fn test_construction_rejects_unknown_adjacency_target() {
    let result = Undigraph::new(vec![("a", vec!["z"]), ("b", vec!["a"])]);
    assert!(matches!(result, Err(GraphError::Structure { .. })));

    let result = Digraph::new(vec![("a", vec!["z"])]);
    assert!(matches!(result, Err(GraphError::Structure { .. })));
}

#[test]
fn test_undirected_construction_rejects_one_way_connection() {
    let result = Undigraph::new(vec![("a", vec!["b"]), ("b", vec![])]);
    assert!(matches!(result, Err(GraphError::Structure { .. })));
}

#[test]
fn test_undirected_construction_rejects_unbalanced_multi_edge() {
    let result = Undigraph::new(vec![("a", vec!["b", "b"]), ("b", vec!["a"])]);
    assert!(matches!(result, Err(GraphError::Structure { .. })));
}

#[test]
fn test_construction_rejects_weight_for_unknown_edge() {
    let result = Undigraph::weighted(
        vec![("a", vec!["b"]), ("b", vec!["a"])],
        vec![("a-b", 5.0), ("a-z", 5.0)],
    );
    assert!(matches!(result, Err(GraphError::EdgeNotFound { .. })));
}

#[test]
fn test_undirected_construction_folds_mirrored_listings() {
    let graph = Undigraph::new(vec![("a", vec!["b"]), ("b", vec!["a"])]).unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert!(graph.get_node_by_id("a").unwrap().has_edge_by_id("a-b", 1));
    assert!(graph.get_node_by_id("b").unwrap().has_edge_by_id("b-a", 1));
}

#[test]
fn test_undirected_multigraph_construction() {
    let graph = Undigraph::new(vec![("a", vec!["b", "b"]), ("b", vec!["a", "a"])]).unwrap();

    assert_eq!(graph.edge_count(), 2);
    let node_a = graph.get_node_by_id("a").unwrap();
    assert!(node_a.has_edge_by_id("a-b", 1));
    assert!(node_a.has_edge_by_id("a-b", 2));
    assert_eq!(graph.degree("a").unwrap(), 2);
}

#[test]
fn test_loop_construction_registers_once_and_counts_twice() {
    let graph = Undigraph::new(vec![("a", vec!["a"])]).unwrap();

    let node = graph.get_node_by_id("a").unwrap();
    assert_eq!(node.edges().len(), 1);
    assert_eq!(node.adjacent_ids(), vec!["a"]);
    assert_eq!(graph.degree("a").unwrap(), 2);
}

#[test]
fn test_weight_is_visible_from_both_endpoints() {
    let graph = Undigraph::weighted(
        vec![("a", vec!["b"]), ("b", vec!["a"])],
        vec![("b-a", 5.0)],
    )
    .unwrap();

    let from_a = graph
        .get_node_by_id("a")
        .unwrap()
        .get_edge_by_id("a-b", 1)
        .unwrap();
    let from_b = graph
        .get_node_by_id("b")
        .unwrap()
        .get_edge_by_id("b-a", 1)
        .unwrap();

    assert_eq!(from_a.weight(), Some(5.0));
    assert_eq!(from_b.weight(), Some(5.0));
}

#[test]
fn test_digraph_keeps_both_directions() {
    let graph = Digraph::new(vec![("a", vec!["b"]), ("b", vec!["a"])]).unwrap();

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.outdegree("a").unwrap(), 1);
    assert_eq!(graph.indegree("a").unwrap(), 1);
}

#[test]
fn test_new_graph_picks_the_requested_kind() {
    let structure = vec![
        ("a".to_string(), vec!["b".to_string()]),
        ("b".to_string(), vec![]),
    ];
    let graph = new_graph(true, structure, Vec::new()).unwrap();
    assert!(graph.is_directed());

    let structure = vec![
        ("a".to_string(), vec!["b".to_string()]),
        ("b".to_string(), vec!["a".to_string()]),
    ];
    let graph = new_graph(false, structure, Vec::new()).unwrap();
    assert!(!graph.is_directed());
}

#[test]
fn test_node_ids_are_trimmed() {
    let graph = Undigraph::new(vec![(" a ", vec!["b"]), ("b", vec![" a "])]).unwrap();

    assert!(graph.has_node_by_id("a"));
    assert!(graph.get_node_by_id("a").unwrap().has_edge_by_id(" a-b ", 1));
}

#[test]
fn test_nodes_keep_insertion_order() {
    let graph = g1u();
    let order: Vec<&str> = graph.nodes().iter().map(|n| n.id()).collect();
    assert_eq!(order, vec!["0", "1", "2", "3", "A"]);
}
