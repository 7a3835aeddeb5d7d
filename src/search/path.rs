use crate::graph::WeightedNode;

/// A step in the path returned by [`shortest_path`](crate::shortest_path).
#[derive(Debug, Clone)]
pub struct Step<N: WeightedNode> {
    /// The node this step originates from.
    pub node: N,

    /// The label of the edge connecting this node to the next, or `None` on
    /// the final step: the goal node has no outgoing step in the result.
    pub label: Option<N::Label>,
}

/// A path from the start node to the first goal node the search finalized,
/// together with its total accumulated weight.
#[derive(Debug, Clone)]
pub struct Route<N: WeightedNode> {
    /// The steps of the path, in start-to-goal order. Never empty: the last
    /// step is the goal node itself, with no label.
    pub steps: Vec<Step<N>>,

    /// The total weight accumulated along the path, including the initial
    /// weight the search was seeded with.
    pub total_weight: N::Weight,
}

impl<N: WeightedNode> Route<N> {
    /// Returns the labels on the edges of the path, in start-to-goal order.
    /// The goal step carries no label, so this yields one item per edge.
    pub fn labels(&self) -> impl Iterator<Item = &N::Label> {
        self.steps.iter().filter_map(|step| step.label.as_ref())
    }

    /// Returns the number of edges traversed by the path.
    pub fn len(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Returns true if the path traverses no edges, i.e. the start node was
    /// already a goal.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the goal node the path ends at.
    pub fn goal(&self) -> Option<&N> {
        self.steps.last().map(|step| &step.node)
    }
}
