//! Export formats for visualization tools.
//!
//! These surfaces consume only the core's stable iteration order and the
//! presentation fields on nodes and edges; none of the graph algorithms
//! depend on them.

mod json;
mod xml;

pub use json::to_json;
pub use xml::{to_xml, write_xml};
