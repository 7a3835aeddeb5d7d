//! Pathseek - lazy shortest-path search over implicitly defined directed graphs
//!
//! This library finds shortest paths on graphs that are never materialized up
//! front. Callers implement a node capability ([`WeightedNode`], or [`Node`]
//! for unweighted search) that produces a node's outgoing edges on demand, so
//! the graph may be arbitrarily large or even infinite as long as every node
//! has finitely many outgoing edges.
//!
//! Two cost models are supported:
//!
//! - [`shortest_path`] runs Dijkstra's algorithm over a caller-supplied weight
//!   domain. Weights only need a total order and an associative combination
//!   function whose result is never smaller than its left operand.
//! - [`breadth_first`] runs breadth-first search and minimizes the number of
//!   edges, ignoring weights entirely.
//!
//! Both searches stop at the first goal node they finalize and report the
//! labels on the edges leading there.

pub mod frontier;
pub mod graph;
pub mod search;

/// Re-export main types for convenient use
pub use frontier::MinHeap;
pub use graph::{Edge, Node, WeightedEdge, WeightedNode};
pub use search::{breadth_first, shortest_path, Route, Step};

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Error returned when the frontier is exhausted before any goal node is
/// found.
///
/// Carries the set of nodes the search visited before giving up, which tells
/// the caller how much of the graph was explored.
#[derive(thiserror::Error, Debug)]
#[error("no path from the start node to any goal node ({} nodes were visited)", .visited.len())]
pub struct NoPath<N: Eq + Hash + Debug> {
    /// The nodes visited before the frontier ran dry.
    pub visited: HashSet<N>,
}
