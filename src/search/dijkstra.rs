use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::frontier::MinHeap;
use crate::graph::WeightedNode;
use crate::search::path::{Route, Step};
use crate::NoPath;

/// The best known way into a node: the node the winning edge came *from*,
/// the label on that edge, and the cumulative weight from the start node.
/// Overwritten whenever a strictly cheaper path to the node is discovered;
/// read only during path reconstruction.
#[derive(Debug)]
struct ParentEdge<N: WeightedNode> {
    weight: N::Weight,
    label: N::Label,
    node: N,
}

/// Runs Dijkstra's algorithm from `start` to the nearest node whose
/// [`is_goal`](WeightedNode::is_goal) returns true.
///
/// `initial_weight` seeds the accumulated weight (usually the weight
/// domain's zero) and `add` combines an accumulated weight with an edge
/// weight. The combination is caller-supplied so the weight domain is not
/// tied to numeric addition; tuples ordered lexicographically, durations, or
/// saturating arithmetic all work. It must be monotone: `add(w, delta)` may
/// never be smaller than `w`. That property is what lets the search finalize
/// a node the first time it pops it, and it is not checked at runtime: a
/// violating `add` (e.g. negative edge weights) silently produces wrong
/// paths or fails to terminate.
///
/// On success, returns the [`Route`] to the goal with its total weight. If
/// the frontier is exhausted first, returns [`NoPath`] carrying every node
/// that was finalized, as a hint of how far the search got.
///
/// Each invocation owns a fresh frontier, visited set, and parent map, so
/// repeated searches over an unmutated graph are deterministic up to weight
/// ties, which are broken arbitrarily.
pub fn shortest_path<N, F>(
    start: &N,
    initial_weight: N::Weight,
    add: F,
) -> Result<Route<N>, NoPath<N>>
where
    N: WeightedNode,
    F: Fn(&N::Weight, &N::Weight) -> N::Weight,
{
    // Start with a frontier containing just the start node.
    let mut frontier = MinHeap::new();
    frontier.insert(start.clone(), initial_weight);

    // Nodes whose minimum cost is settled. Popping a node already in here
    // means the entry was a stale duplicate left behind by a relaxation.
    let mut visited: HashSet<N> = HashSet::new();

    // Best known incoming edge per discovered node, for reconstructing the
    // path back to the start node once a goal is found.
    let mut parents: HashMap<N, ParentEdge<N>> = HashMap::new();

    while !frontier.is_empty() {
        let (node, weight) = frontier.extract_min();

        if !visited.insert(node.clone()) {
            continue;
        }
        trace!("finalized node {:?} at weight {:?}", node, weight);

        if node.is_goal() {
            debug!(
                "goal found at weight {:?} after finalizing {} nodes",
                weight,
                visited.len()
            );
            return Ok(reconstruct(start, node, weight, &parents));
        }

        // Expand the node and relax every outgoing edge.
        for edge in node.edges() {
            if visited.contains(&edge.target) {
                continue;
            }
            let candidate = add(&weight, &edge.weight);

            // Best-known-so-far bookkeeping for path reconstruction, kept
            // separately from the frontier contents.
            let improved = match parents.get(&edge.target) {
                Some(parent) => candidate < parent.weight,
                None => true,
            };
            if improved {
                parents.insert(
                    edge.target.clone(),
                    ParentEdge {
                        weight: candidate.clone(),
                        label: edge.label,
                        node: node.clone(),
                    },
                );
            }

            // No insert-time de-duplication: a cheaper entry for the same
            // node simply surfaces first and the later ones get skipped.
            frontier.insert(edge.target, candidate);
        }
    }

    debug!(
        "frontier exhausted after finalizing {} nodes, no goal found",
        visited.len()
    );
    Err(NoPath { visited })
}

/// Walks the parent map from the goal back to the start node, then reverses
/// the collected steps so the path runs start-to-goal.
fn reconstruct<N: WeightedNode>(
    start: &N,
    goal: N,
    total_weight: N::Weight,
    parents: &HashMap<N, ParentEdge<N>>,
) -> Route<N> {
    let mut steps = vec![Step {
        node: goal.clone(),
        label: None,
    }];

    let mut node = goal;
    while node != *start {
        let Some(parent) = parents.get(&node) else {
            // Every finalized node other than the start was reached over an
            // edge, so its parent entry exists.
            unreachable!("node {:?} has no parent entry during reconstruction", node);
        };
        steps.push(Step {
            node: parent.node.clone(),
            label: Some(parent.label.clone()),
        });
        node = parent.node.clone();
    }

    steps.reverse();
    Route {
        steps,
        total_weight,
    }
}
