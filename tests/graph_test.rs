//! Integration tests for the shared graph core: walk classification,
//! adjacency queries, components, cut sets, coloring and weights.

mod common;

use common::*;

#[test]
fn test_graph_is_simple() {
    assert!(!g1u().is_simple().unwrap());

    assert!(g1d().is_simple().unwrap());
    assert!(!g2d().is_simple().unwrap());
}

#[test]
fn test_graph_is_complete() {
    assert!(!g1u().is_complete().unwrap());
    assert!(g3u().is_complete().unwrap());
}

#[test]
fn test_graph_is_walk() {
    assert!(g2u().is_walk(&["1", "2", "3", "4", "3"]).unwrap());
    assert!(!g2u().is_walk(&["1", "2", "5", "4", "3"]).unwrap());
}

#[test]
fn test_graph_is_open_walk() {
    assert!(g2u().is_open_walk(&["1", "2", "3", "4"]).unwrap());
    assert!(!g2u().is_open_walk(&["1", "2", "3", "2", "1"]).unwrap());
}

#[test]
fn test_graph_is_closed_walk() {
    assert!(g2u().is_closed_walk(&["1", "2", "3", "2", "1"]).unwrap());
    assert!(!g2u().is_closed_walk(&["1", "2", "3", "4", "3"]).unwrap());
}

#[test]
fn test_graph_is_trail() {
    assert!(g2u().is_trail(&["1", "2", "3", "4"]).unwrap());
    assert!(!g2u().is_trail(&["1", "2", "3", "4", "3"]).unwrap());
}

#[test]
fn test_graph_is_circuit() {
    assert!(g1u().is_circuit(&["0", "1", "2", "0"]).unwrap());
}

#[test]
fn test_graph_is_path() {
    assert!(g1u().is_path(&["0", "1", "2"]).unwrap());
    assert!(!g1u().is_path(&["0", "1", "2", "0"]).unwrap());
}

#[test]
fn test_graph_is_cycle() {
    assert!(g1u().is_cycle(&["0", "1", "2", "0"]).unwrap());
}

#[test]
fn test_graph_has_cycle() {
    assert!(g1u().has_cycle().unwrap());
    assert!(g2u().has_cycle().unwrap());

    assert!(!g1d().has_cycle().unwrap());
    assert!(!g2d().has_cycle().unwrap());
}

#[test]
fn test_graph_walk_shorter_than_two_nodes_is_rejected() {
    assert!(matches!(
        g2u().is_walk(&["1"]),
        Err(graphein::GraphError::InvalidArgument { .. })
    ));
}

#[test]
fn test_graph_get_node_by_id() {
    assert_eq!(g1u().get_node_by_id("A").unwrap().id(), "A");
    assert_eq!(g1u().get_node_by_id("  A ").unwrap().id(), "A");
}

#[test]
fn test_graph_has_node() {
    let graph = g1u();
    let other = g1d();

    assert!(graph.has_node(graph.get_node_by_id("A").unwrap()));
    // Same ID, different incident edges
    assert!(!graph.has_node(other.get_node_by_id("0").unwrap()));
}

#[test]
fn test_graph_has_node_by_id() {
    assert!(g1u().has_node_by_id("A"));
    assert!(g1u().has_node_by_id("0"));
    assert!(!g1u().has_node_by_id("z"));
}

#[test]
fn test_undigraph_adjacency_matrix() {
    assert_eq!(
        g1u().adjacency_matrix().unwrap(),
        vec![
            vec![1.0, 1.0, 1.0, 1.0, 0.0],
            vec![1.0, 0.0, 1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0, 0.0, 0.0],
        ]
    );

    assert_eq!(
        g4u().adjacency_matrix().unwrap(),
        vec![
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0],
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
            vec![1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0],
        ]
    );
}

#[test]
fn test_digraph_adjacency_matrix() {
    assert_eq!(
        g1d().adjacency_matrix().unwrap(),
        vec![
            vec![0.0, 1.0, 1.0],
            vec![0.0, 0.0, 1.0],
            vec![0.0, 0.0, 0.0],
        ]
    );
}

#[test]
fn test_weighted_adjacency_matrix_holds_weights() {
    let matrix = g6u().adjacency_matrix().unwrap();
    // Node order a, b, c, d, e; a-b weighs 5, a-d weighs 4.
    assert_eq!(matrix[0], vec![0.0, 5.0, 0.0, 4.0, 0.0]);
}

#[test]
fn test_undigraph_adjacency_function() {
    let g = g1u();
    assert_eq!(
        g.adjacency_function(&["1"], 1, false, false).unwrap(),
        vec!["0", "2", "A"]
    );
    assert_eq!(
        g.adjacency_function(&["1"], -1, false, false).unwrap(),
        vec!["0", "2", "A"]
    );
    assert_eq!(
        g.adjacency_function(&["A"], 2, false, false).unwrap(),
        vec!["0", "2", "A"]
    );
    assert_eq!(
        g.adjacency_function(&["A"], -2, false, false).unwrap(),
        vec!["0", "2", "A"]
    );
    assert_eq!(
        g.adjacency_function(&["A"], 3, false, false).unwrap(),
        vec!["0", "1", "2", "3"]
    );
}

#[test]
fn test_digraph_adjacency_function() {
    let g = g1d();
    assert_eq!(
        g.adjacency_function(&["1"], 1, false, false).unwrap(),
        vec!["2"]
    );
    assert_eq!(
        g.adjacency_function(&["1"], -1, false, false).unwrap(),
        vec!["0"]
    );
    assert!(g.adjacency_function(&["1"], 2, false, false).unwrap().is_empty());
    assert!(g.adjacency_function(&["1"], -2, false, false).unwrap().is_empty());

    let g = g2d();
    assert_eq!(
        g.adjacency_function(&["4"], 3, false, false).unwrap(),
        vec!["1", "3", "4"]
    );
    assert_eq!(
        g.adjacency_function(&["1"], 1, false, false).unwrap(),
        vec!["1", "4"]
    );
    assert!(g.adjacency_function(&["1"], 1, true, true).unwrap().is_empty());
    assert_eq!(
        g.adjacency_function(&["1"], -1, true, true).unwrap(),
        vec!["2"]
    );
}

#[test]
fn test_adjacency_function_rejects_zero_power() {
    assert!(matches!(
        g1u().adjacency_function(&["1"], 0, false, false),
        Err(graphein::GraphError::InvalidArgument { .. })
    ));
}

#[test]
fn test_graph_connected_components() {
    let components = g2u().connected_components().unwrap();
    assert_eq!(
        components,
        vec![
            vec!["1", "2", "3", "4"],
            vec!["5"],
            vec!["6", "7", "8"],
        ]
    );
}

#[test]
fn test_graph_is_connected() {
    assert!(!g2u().is_connected().unwrap());
    assert!(g1u().is_connected().unwrap());
}

#[test]
fn test_graph_is_cut_node() {
    assert!(g2u().is_cut_node("7").unwrap());
    assert!(!g2u().is_cut_node("4").unwrap());
}

#[test]
fn test_graph_cut_nodes() {
    assert_eq!(g2u().cut_nodes().unwrap(), vec!["2", "7"]);
}

#[test]
fn test_graph_cut_edges() {
    assert_eq!(g2u().cut_edges().unwrap(), vec!["1-2", "6-7", "7-8"]);
}

#[test]
fn test_graph_chromatic_number() {
    assert_eq!(g3u().chromatic_number(), 3);
    assert_eq!(g4u().chromatic_number(), 4);
}

#[test]
fn test_graph_remove_node() {
    let mut graph = g1u();
    graph.remove_node("1").unwrap();

    assert!(!graph.has_node_by_id("1"));
    assert!(!graph.get_node_by_id("0").unwrap().has_edge_by_id("0-1", 1));
    assert!(!graph.get_node_by_id("A").unwrap().has_edge_by_id("1-A", 1));
}

#[test]
fn test_graph_remove_edge() {
    let mut graph = g1u();
    graph.remove_edge("1-0");

    assert!(!graph.get_node_by_id("1").unwrap().has_edge_by_id("1-0", 1));
    assert!(!graph.get_node_by_id("0").unwrap().has_edge_by_id("0-1", 1));
}

#[test]
fn test_graph_remove_all_edges() {
    let mut graph = g1u();
    graph.remove_all_edges();

    assert!(graph.is_k_regular(0).unwrap());
    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_graph_add_node_rejects_duplicate_id() {
    let mut graph = g1u();
    assert!(matches!(
        graph.add_node("A"),
        Err(graphein::GraphError::InvalidArgument { .. })
    ));

    graph.add_node("9").unwrap();
    assert!(graph.has_node_by_id("9"));
}

#[test]
fn test_graph_get_minimum_weight_but_greater_than() {
    assert_eq!(g6u().minimum_weight_above(3.5).unwrap(), Some(4.0));
    assert_eq!(g6u().minimum_weight_above(7.0).unwrap(), None);
}

#[test]
fn test_graph_get_maximum_weight_but_smaller_than() {
    assert_eq!(g6u().maximum_weight_below(3.5).unwrap(), Some(3.0));
    assert_eq!(g6u().maximum_weight_below(1.0).unwrap(), None);
}

#[test]
fn test_graph_weight_extrema() {
    assert_eq!(g6u().minimum_weight().unwrap(), 1.0);
    assert_eq!(g6u().maximum_weight().unwrap(), 7.0);
}

#[test]
fn test_graph_get_edges_with_minimum_weight() {
    let edges = g6u().edges_with_minimum_weight().unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].id(), "b-d");
    assert_eq!(edges[0].weight(), Some(1.0));
}

#[test]
fn test_graph_get_edges_with_maximum_weight() {
    let edges = g6u().edges_with_maximum_weight().unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].id(), "b-c");
    assert_eq!(edges[0].weight(), Some(7.0));
}

#[test]
fn test_graph_weight_queries_reject_unweighted_graph() {
    assert!(matches!(
        g5u().edges_with_weight(2.0),
        Err(graphein::GraphError::UnweightedGraph)
    ));
    assert!(matches!(
        g5u().minimum_weight(),
        Err(graphein::GraphError::UnweightedGraph)
    ));
}

#[test]
fn test_graph_degree_on_wrong_kind_fails() {
    assert!(matches!(
        g1d().degree("0"),
        Err(graphein::GraphError::WrongGraphKind { .. })
    ));
    assert!(matches!(
        g1u().indegree("0"),
        Err(graphein::GraphError::WrongGraphKind { .. })
    ));
    assert!(matches!(
        g1u().outdegree("0"),
        Err(graphein::GraphError::WrongGraphKind { .. })
    ));
}
