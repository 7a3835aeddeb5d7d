use crate::graph::traits::{Node, WeightedNode};

/// An edge in a weighted graph: a weight, a label identifying the edge, and
/// the node the edge points to.
#[derive(Debug, Clone)]
pub struct WeightedEdge<N: WeightedNode> {
    /// The weight of this edge. Negative weights (anything that makes a path
    /// cheaper than its prefix) are unsupported.
    pub weight: N::Weight,

    /// The label on this edge, returned to the caller as part of the path.
    pub label: N::Label,

    /// The node this edge points to.
    pub target: N,
}

impl<N: WeightedNode> WeightedEdge<N> {
    /// Creates a new weighted edge.
    pub fn new(weight: N::Weight, label: N::Label, target: N) -> Self {
        WeightedEdge {
            weight,
            label,
            target,
        }
    }
}

/// An edge in an unweighted graph: a label and the node the edge points to.
#[derive(Debug, Clone)]
pub struct Edge<N: Node> {
    /// The label on this edge, returned to the caller as part of the path.
    pub label: N::Label,

    /// The node this edge points to.
    pub target: N,
}

impl<N: Node> Edge<N> {
    /// Creates a new unweighted edge.
    pub fn new(label: N::Label, target: N) -> Self {
        Edge { label, target }
    }
}
