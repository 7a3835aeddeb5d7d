use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::edge::{Edge, WeightedEdge};

/// Trait for nodes in a lazily expanded weighted directed graph.
///
/// Implementations are supplied by the caller and may represent anything:
/// grid coordinates, game states, city names. The search engine relies on
/// the standard [`Eq`]/[`Hash`] contract (`a == b` implies equal hashes) for
/// its visited set and parent map; an implementation that violates it makes
/// de-duplication silently unreliable. Nodes are treated as immutable values
/// and are only ever cloned, compared, and expanded.
pub trait WeightedNode: Clone + Eq + Hash + Debug {
    /// Type of the weight (or length or any other quantity to be minimized)
    /// of each edge between nodes. Any totally ordered type works; it does
    /// not have to be numeric.
    type Weight: Clone + Ord + Debug;

    /// Type used to identify the edges connecting nodes. Labels carry no
    /// meaning for the engine; they are handed back as part of the path.
    type Label: Clone + Debug;

    /// Determines whether this node is one the search is looking for. The
    /// first goal node finalized by the search ends it with success.
    fn is_goal(&self) -> bool;

    /// Returns an iterator over the outgoing edges from this node.
    ///
    /// The edges may be produced on demand, but every node must have
    /// finitely many of them. The engine consumes the iterator within one
    /// expansion step and retains nothing from it beyond the winning path.
    fn edges(&self) -> Box<dyn Iterator<Item = WeightedEdge<Self>> + '_>;
}

/// Trait for nodes in a lazily expanded unweighted directed graph, searched
/// by [`breadth_first`](crate::breadth_first).
///
/// The same caller obligations as [`WeightedNode`] apply; the only
/// difference is that edges carry no weight, so the search minimizes the
/// number of edges instead.
pub trait Node: Clone + Eq + Hash + Debug {
    /// Type used to identify the edges connecting nodes.
    type Label: Clone + Debug;

    /// Determines whether this node is one the search is looking for.
    fn is_goal(&self) -> bool;

    /// Returns an iterator over the outgoing edges from this node.
    fn edges(&self) -> Box<dyn Iterator<Item = Edge<Self>> + '_>;
}
