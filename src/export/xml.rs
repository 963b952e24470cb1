//! XML interchange export for <https://graphonline.ru/en/>.
//!
//! Writes the `.graphtml` document the viewer imports: one `<node>`
//! element per node and one `<edge>` element per logical edge, in node
//! insertion order.

use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, Node};

/// File extension the viewer expects.
const EXTENSION: &str = "graphtml";

/// Render a graph as a graphonline XML document.
pub fn to_xml(graph: &Graph) -> String {
    let mut out = String::new();

    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\n");
    out.push_str("<graphml>\n");
    out.push_str("\t<graph id=\"Graph\" uidGraph=\"1\" uidEdge=\"1\">\n");

    for node in graph.nodes() {
        out.push_str(&node_element(node));
    }

    for edge in graph.unique_edges() {
        out.push_str(&edge_element(edge));
    }

    out.push_str("\t</graph>\n");
    out.push_str("</graphml>\n");

    out
}

/// Write a graph as a graphonline XML file, appending the `.graphtml`
/// extension when the path lacks it.
///
/// # Errors
///
/// Returns [`GraphError::Io`] if the file cannot be written.
pub fn write_xml(graph: &Graph, path: impl AsRef<Path>) -> Result<()> {
    let mut path = path.as_ref().to_path_buf();
    if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
        let mut name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".");
        name.push(EXTENSION);
        path.set_file_name(name);
    }

    std::fs::write(&path, to_xml(graph))
        .map_err(|e| GraphError::io(format!("failed to write {}", path.display()), Some(e)))
}

// The viewer's Y axis grows downwards; positions flip against a fixed
// 1000-unit canvas.
fn node_element(node: &Node) -> String {
    format!(
        "\t\t<node positionX=\"{}\" positionY=\"{}\" id=\"{}\" mainText=\"{}\" \
         upText=\"\" size=\"{}\" ></node>\n",
        node.x,
        1000.0 - node.y,
        node.id(),
        node.id(),
        node.size / 10.0,
    )
}

fn edge_element(edge: &Edge) -> String {
    format!(
        "\t\t<edge source=\"{}\" target=\"{}\" isDirect=\"{}\" weight=\"{}\" \
         useWeight=\"{}\" id=\"{}\" text=\"\" upText=\"\" arrayStyleStart=\"\" \
         arrayStyleFinish=\"\" model_width=\"{}\" model_type=\"0\" \
         model_curvedValue=\"0.1\" ></edge>\n",
        edge.from(),
        edge.to(),
        edge.is_directed(),
        edge.weight().unwrap_or(0.0),
        edge.has_weight(),
        edge.id(),
        2.0 * edge.width,
    )
}
