use std::collections::{HashMap, HashSet, VecDeque};

use log::{debug, trace};

use crate::graph::Node;
use crate::NoPath;

/// Runs a breadth-first search from `start` to the nearest node whose
/// [`is_goal`](Node::is_goal) returns true, minimizing the number of edges.
///
/// Returns the labels on the edges of the path, in start-to-goal order; an
/// empty sequence means the start node was already a goal. If the whole
/// reachable graph is explored without finding one, returns [`NoPath`]
/// carrying every node that was discovered.
///
/// Unlike the weighted search, nodes enter the visited set the moment they
/// are discovered rather than when they leave the frontier: with a FIFO
/// frontier and uniform edge cost the first visit is already optimal, so no
/// stale-entry filtering is needed and the frontier holds each node at most
/// once.
pub fn breadth_first<N: Node>(start: &N) -> Result<Vec<N::Label>, NoPath<N>> {
    // Start with a queue containing just the start node.
    let mut frontier = VecDeque::new();
    frontier.push_back(start.clone());

    let mut visited: HashSet<N> = HashSet::new();
    visited.insert(start.clone());

    // The node each discovered node was reached from, and the label on the
    // edge that reached it.
    let mut parents: HashMap<N, (N, N::Label)> = HashMap::new();

    while let Some(node) = frontier.pop_front() {
        if node.is_goal() {
            debug!("goal found after discovering {} nodes", visited.len());
            return Ok(reconstruct(start, node, &parents));
        }

        for edge in node.edges() {
            // First discovery is already the fewest-edges way in.
            if visited.insert(edge.target.clone()) {
                trace!("discovered node {:?}", edge.target);
                parents.insert(edge.target.clone(), (node.clone(), edge.label));
                frontier.push_back(edge.target);
            }
        }
    }

    debug!(
        "frontier exhausted after discovering {} nodes, no goal found",
        visited.len()
    );
    Err(NoPath { visited })
}

/// Walks the parent map from the goal back to the start node, collecting
/// edge labels, then reverses them so the sequence runs start-to-goal.
fn reconstruct<N: Node>(start: &N, goal: N, parents: &HashMap<N, (N, N::Label)>) -> Vec<N::Label> {
    let mut labels = Vec::new();

    let mut node = goal;
    while node != *start {
        let Some((parent, label)) = parents.get(&node) else {
            // Every discovered node other than the start was reached over an
            // edge, so its parent entry exists.
            unreachable!("node {:?} has no parent entry during reconstruction", node);
        };
        labels.push(label.clone());
        node = parent.clone();
    }

    labels.reverse();
    labels
}
