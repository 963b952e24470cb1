//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js
//! force-directed layouts. Output order follows node insertion order, so
//! the document is deterministic for a given graph.

use serde_json::{json, Value};

use crate::graph::{Edge, Graph, Node};

/// Export a graph to D3.js-compatible JSON.
pub fn to_json(graph: &Graph) -> String {
    let nodes_array: Vec<Value> = graph.nodes().iter().map(node_to_json).collect();
    let links_array: Vec<Value> = graph
        .unique_edges()
        .iter()
        .map(|edge| edge_to_json(edge))
        .collect();

    let result = json!({
        "nodes": nodes_array,
        "links": links_array,
    });

    // serde_json::to_string_pretty should never fail for our data structures
    serde_json::to_string_pretty(&result).expect("Failed to serialize JSON")
}

/// Convert node to JSON object
fn node_to_json(node: &Node) -> Value {
    json!({
        "id": node.id(),
        "x": node.x,
        "y": node.y,
        "size": node.size,
        "faceColor": node.face_color,
        "borderColor": node.border_color,
        "style": node.style,
    })
}

/// Convert edge to JSON object
fn edge_to_json(edge: &Edge) -> Value {
    json!({
        "id": edge.id(),
        "source": edge.from(),
        "target": edge.to(),
        "s": edge.s(),
        "directed": edge.is_directed(),
        "weight": edge.weight(),
        "color": edge.color,
        "style": edge.style,
        "width": edge.width,
    })
}
