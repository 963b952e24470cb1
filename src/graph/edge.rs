//! Edges: weighted, multiplicity-indexed connections between two nodes.

use serde::Serialize;

/// Default edge color.
pub const DEFAULT_EDGE_COLOR: &str = "#c7b7c7";
/// Default edge line style.
pub const DEFAULT_EDGE_STYLE: &str = "-";
/// Default edge line width.
pub const DEFAULT_EDGE_WIDTH: f64 = 2.0;

/// A connection between two nodes.
///
/// An edge references its endpoints by node ID. For undirected graphs the
/// stored orientation carries no meaning beyond the derived ID; each
/// endpoint node holds an equal copy of the logical edge, and equality
/// (not pointer identity) is the notion of sameness throughout the crate.
///
/// The multiplicity index `s` is the 1-based count of this specific
/// endpoint pair among the edges that existed when this one was created,
/// so multigraphs can tell parallel edges apart.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    from: String,
    to: String,
    directed: bool,
    s: usize,
    weight: Option<f64>,

    /// Edge color, used only by presentation collaborators.
    pub color: String,
    /// Edge line style, used only by presentation collaborators.
    pub style: String,
    /// Edge line width, used only by presentation collaborators.
    pub width: f64,
}

impl Edge {
    pub(crate) fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        directed: bool,
        s: usize,
        weight: Option<f64>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            directed,
            s,
            weight,
            color: DEFAULT_EDGE_COLOR.to_string(),
            style: DEFAULT_EDGE_STYLE.to_string(),
            width: DEFAULT_EDGE_WIDTH,
        }
    }

    /// ID of the node this edge starts from.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// ID of the node this edge leads to.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Whether the edge belongs to a directed graph.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// 1-based multiplicity index among edges with the same endpoint pair.
    pub fn s(&self) -> usize {
        self.s
    }

    /// The edge weight, if any.
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = Some(weight);
    }

    /// Edge ID derived from the endpoint IDs: `a->b` for directed edges,
    /// `a-b` for undirected ones.
    pub fn id(&self) -> String {
        format!("{}{}{}", self.from, self.connector(), self.to)
    }

    /// Edge ID with the endpoints swapped.
    pub fn id_reversed(&self) -> String {
        format!("{}{}{}", self.to, self.connector(), self.from)
    }

    fn connector(&self) -> &'static str {
        if self.directed {
            "->"
        } else {
            "-"
        }
    }

    /// True if the given ID names this edge. Undirected edges answer to
    /// both the forward and the reversed ID.
    pub fn matches_id(&self, id: &str) -> bool {
        let id = id.trim();
        if self.directed {
            self.id() == id
        } else {
            self.id() == id || self.id_reversed() == id
        }
    }

    /// True if the edge connects a node to itself.
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    /// True if the edge carries a weight. A zero weight counts as no weight.
    pub fn has_weight(&self) -> bool {
        self.weight.is_some_and(|w| w != 0.0)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())?;
        if self.s > 1 {
            write!(f, " (s={})", self.s)?;
        }
        Ok(())
    }
}

/// Two edges are equal iff they agree on direction flag, weight and
/// multiplicity index, and connect the same endpoint pair: ordered (and
/// same forward ID) for directed edges, unordered for undirected ones.
impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        if self.directed != other.directed || self.weight != other.weight || self.s != other.s {
            return false;
        }

        if self.directed {
            other.id() == self.id() && self.from == other.from && self.to == other.to
        } else {
            (other.id() == self.id() || other.id_reversed() == self.id())
                && (self.from == other.from || self.from == other.to)
                && (self.to == other.from || self.to == other.to)
        }
    }
}
