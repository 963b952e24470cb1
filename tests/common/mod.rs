//! Shared test fixtures.
//!
//! Small graphs with well-known structure, used across the integration
//! tests. The `u`/`d` suffix tells undirected from directed.

#![allow(dead_code)]

use graphein::{Digraph, Undigraph};

/// Multigraph-free undirected graph with a loop at node 0.
pub fn g1u() -> Undigraph {
    Undigraph::new(vec![
        ("0", vec!["0", "1", "2", "3"]),
        ("1", vec!["0", "2", "A"]),
        ("2", vec!["0", "1"]),
        ("3", vec!["0"]),
        ("A", vec!["1"]),
    ])
    .unwrap()
}

/// Disconnected undirected graph: a looped component, an isolated node
/// and a chain.
pub fn g2u() -> Undigraph {
    Undigraph::new(vec![
        ("1", vec!["1", "2"]),
        ("2", vec!["1", "3", "4"]),
        ("3", vec!["2", "4"]),
        ("4", vec!["2", "3"]),
        ("5", vec![]),
        ("6", vec!["7"]),
        ("7", vec!["6", "8"]),
        ("8", vec!["7"]),
    ])
    .unwrap()
}

/// Complete triangle.
pub fn g3u() -> Undigraph {
    Undigraph::new(vec![
        ("1", vec!["2", "3"]),
        ("2", vec!["1", "3"]),
        ("3", vec!["1", "2"]),
    ])
    .unwrap()
}

/// Bipartite graph with parts {U1..U5} and {V1..V4}.
pub fn g4u() -> Undigraph {
    Undigraph::new(vec![
        ("U1", vec!["V1", "V4"]),
        ("U2", vec!["V3"]),
        ("U3", vec!["V1", "V2"]),
        ("U4", vec!["V3", "V4"]),
        ("U5", vec!["V4"]),
        ("V1", vec!["U1", "U3"]),
        ("V2", vec!["U3"]),
        ("V3", vec!["U2", "U4"]),
        ("V4", vec!["U1", "U4", "U5"]),
    ])
    .unwrap()
}

/// Undirected tree.
pub fn g5u() -> Undigraph {
    Undigraph::new(vec![
        ("1", vec!["4"]),
        ("2", vec!["4"]),
        ("3", vec!["4"]),
        ("4", vec!["1", "2", "3", "5"]),
        ("5", vec!["4", "6"]),
        ("6", vec!["5"]),
    ])
    .unwrap()
}

/// Weighted undirected graph; minimum spanning tree weighs 13, maximum 24.
pub fn g6u() -> Undigraph {
    Undigraph::weighted(
        vec![
            ("a", vec!["b", "d"]),
            ("b", vec!["a", "d", "c", "e"]),
            ("c", vec!["b", "d", "e"]),
            ("d", vec!["a", "b", "c", "e"]),
            ("e", vec!["b", "c", "d"]),
        ],
        vec![
            ("a-b", 5.0),
            ("a-d", 4.0),
            ("b-c", 7.0),
            ("b-d", 1.0),
            ("b-e", 2.0),
            ("c-d", 6.0),
            ("c-e", 6.0),
            ("d-e", 3.0),
        ],
    )
    .unwrap()
}

/// Undirected graph with an Eulerian trail between ll and lr.
pub fn g7u() -> Undigraph {
    Undigraph::new(vec![
        ("ll", vec!["lr", "ul", "ur"]),
        ("lr", vec!["ll", "ul", "ur"]),
        ("ul", vec!["ll", "lr", "ur", "uu"]),
        ("ur", vec!["ll", "lr", "ul", "uu"]),
        ("uu", vec!["ul", "ur"]),
    ])
    .unwrap()
}

/// Undirected graph whose closure is complete.
pub fn g8u() -> Undigraph {
    Undigraph::new(vec![
        ("1", vec!["2", "5"]),
        ("2", vec!["1", "3", "4", "5"]),
        ("3", vec!["2", "4", "6"]),
        ("4", vec!["2", "3", "5", "6"]),
        ("5", vec!["1", "2", "4"]),
        ("6", vec!["3", "4"]),
    ])
    .unwrap()
}

/// Complete graph on four nodes; Dirac's condition holds.
pub fn g9a_u() -> Undigraph {
    Undigraph::new(vec![
        ("A", vec!["B", "C", "D"]),
        ("B", vec!["A", "C", "D"]),
        ("C", vec!["A", "B", "D"]),
        ("D", vec!["A", "B", "C"]),
    ])
    .unwrap()
}

/// Hamiltonian graph Dirac's condition misses.
pub fn g9b_u() -> Undigraph {
    Undigraph::new(vec![
        ("A", vec!["B", "C", "E"]),
        ("B", vec!["A", "D", "E"]),
        ("C", vec!["A", "E"]),
        ("D", vec!["B", "E"]),
        ("E", vec!["A", "B", "C", "D"]),
    ])
    .unwrap()
}

/// Cycle of eight nodes; Dirac's condition misses it.
pub fn g9c_u() -> Undigraph {
    Undigraph::new(vec![
        ("A", vec!["B", "C"]),
        ("B", vec!["A", "D"]),
        ("C", vec!["A", "E"]),
        ("D", vec!["B", "H"]),
        ("E", vec!["C", "F"]),
        ("F", vec!["E", "G"]),
        ("G", vec!["F", "H"]),
        ("H", vec!["G", "D"]),
    ])
    .unwrap()
}

/// Dense five-node graph; Ore's condition holds.
pub fn g10a_u() -> Undigraph {
    Undigraph::new(vec![
        ("A", vec!["B", "C", "E"]),
        ("B", vec!["A", "D"]),
        ("C", vec!["A", "D", "E"]),
        ("D", vec!["B", "C", "E"]),
        ("E", vec!["A", "C", "D"]),
    ])
    .unwrap()
}

/// Five-node cycle; Ore's condition misses it.
pub fn g10b_u() -> Undigraph {
    Undigraph::new(vec![
        ("A", vec!["B", "C"]),
        ("B", vec!["A", "D"]),
        ("C", vec!["A", "E"]),
        ("D", vec!["B", "E"]),
        ("E", vec!["C", "D"]),
    ])
    .unwrap()
}

/// Acyclic triangle-shaped digraph.
pub fn g1d() -> Digraph {
    Digraph::new(vec![("0", vec!["1", "2"]), ("1", vec!["2"]), ("2", vec![])]).unwrap()
}

/// Digraph with a loop and a bilateral connection.
pub fn g2d() -> Digraph {
    Digraph::new(vec![
        ("1", vec!["1", "4"]),
        ("2", vec!["1", "3", "4"]),
        ("3", vec![]),
        ("4", vec!["1", "3"]),
    ])
    .unwrap()
}

/// Digraph with three strongly connected components.
pub fn g3d() -> Digraph {
    Digraph::new(vec![
        ("1", vec!["4", "6"]),
        ("2", vec!["1", "3"]),
        ("3", vec!["4"]),
        ("4", vec!["2", "5", "8"]),
        ("5", vec!["8"]),
        ("6", vec!["7"]),
        ("7", vec!["5"]),
        ("8", vec!["7"]),
    ])
    .unwrap()
}

/// Digraph whose underlying undirected graph is a tree.
pub fn g5d() -> Digraph {
    Digraph::new(vec![
        ("1", vec!["4"]),
        ("2", vec!["4"]),
        ("3", vec!["4"]),
        ("4", vec!["1", "2", "3", "5"]),
        ("5", vec!["4", "6"]),
        ("6", vec!["5"]),
    ])
    .unwrap()
}

/// Rooted tree hanging off node 5.
pub fn g6d() -> Digraph {
    Digraph::new(vec![
        ("5", vec!["4", "2", "1"]),
        ("4", vec!["8"]),
        ("2", vec![]),
        ("1", vec!["6"]),
        ("8", vec!["3"]),
        ("6", vec![]),
        ("3", vec![]),
    ])
    .unwrap()
}

/// Directed multigraph with a two-fold arrow and an Eulerian trail.
pub fn g7d() -> Digraph {
    Digraph::new(vec![
        ("1", vec!["3"]),
        ("2", vec!["1", "1", "4"]),
        ("3", vec!["2", "4"]),
        ("4", vec!["2", "3"]),
    ])
    .unwrap()
}
