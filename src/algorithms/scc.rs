//! Strongly connected component detection for directed graphs.
//!
//! This module provides [`strongly_connected_components`], a two-pass
//! (Kosaraju) decomposition: a post-order first pass over the graph records
//! node finishing order, and a second pass over the transposed graph peels off
//! one strong component per unassigned finisher, from the latest finisher
//! down. Both passes run on explicit work stacks so deep graphs cannot
//! overflow the call stack.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    graph::{Graph, NodeId},
    Error, Result,
};

/// An ordered sequence of strongly connected components, each a set of node
/// ids sorted ascending.
///
/// Components never overlap and their union is the full node set; they appear
/// in the order the second pass discovers them (latest finisher first).
pub type SccResult = Vec<Vec<NodeId>>;

/// Work item for the iterative post-order pass.
enum Visit {
    /// Discover the node and schedule its neighbors.
    Enter(NodeId),
    /// All neighbors handled; record the finish.
    Exit(NodeId),
}

/// Computes the strongly connected components of a directed graph.
///
/// Kosaraju's two-pass decomposition. The first pass runs a depth-first
/// post-order over the stored adjacency, rooted at every unvisited node in
/// ascending id order, pushing each node onto a finishing stack as its subtree
/// completes. The second pass pops finishers and floods the transposed graph
/// from each not-yet-assigned one; every flood is exactly one strong
/// component. Neighbor ids that are not adjacency keys participate as nodes
/// with no outgoing edges.
///
/// # Arguments
///
/// * `graph` - The directed graph to decompose
///
/// # Returns
///
/// The [`SccResult`]: each component sorted ascending, components ordered by
/// second-pass discovery.
///
/// # Errors
///
/// Returns [`Error::NotApplicable`] if `graph` is undirected — mirrored
/// adjacency would make every connected component trivially strong, so the
/// request is rejected rather than answered misleadingly.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E) for the transpose
///
/// # Examples
///
/// ```rust
/// use vistra::{algorithms::strongly_connected_components, graph::{Graph, NodeId}};
///
/// let mut graph = Graph::directed();
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
/// graph.add_edge(NodeId::new(1), NodeId::new(2));
/// graph.add_edge(NodeId::new(2), NodeId::new(0));
/// graph.add_edge(NodeId::new(2), NodeId::new(3));
///
/// let components = strongly_connected_components(&graph)?;
/// assert_eq!(components.len(), 2);
/// assert!(components.contains(&vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)]));
/// assert!(components.contains(&vec![NodeId::new(3)]));
/// # Ok::<(), vistra::Error>(())
/// ```
pub fn strongly_connected_components(graph: &Graph) -> Result<SccResult> {
    if !graph.is_directed() {
        return Err(Error::NotApplicable("strongly_connected_components"));
    }

    // Pass 1: post-order finishing stack over the stored adjacency.
    let mut visited: BTreeSet<NodeId> = BTreeSet::new();
    let mut finish = Vec::new();
    for root in graph.nodes() {
        if visited.contains(&root) {
            continue;
        }
        let mut work = vec![Visit::Enter(root)];
        while let Some(item) = work.pop() {
            match item {
                Visit::Enter(node) => {
                    if !visited.insert(node) {
                        continue;
                    }
                    work.push(Visit::Exit(node));
                    // Reverse push keeps descent in adjacency order.
                    for &next in graph.neighbors(node).iter().rev() {
                        if !visited.contains(&next) {
                            work.push(Visit::Enter(next));
                        }
                    }
                }
                Visit::Exit(node) => finish.push(node),
            }
        }
    }

    // Transpose; entries for neighbor-only ids keep dangling references safe.
    let mut transpose: BTreeMap<NodeId, Vec<NodeId>> = BTreeMap::new();
    for node in graph.nodes() {
        transpose.entry(node).or_default();
        for &next in graph.neighbors(node) {
            transpose.entry(next).or_default().push(node);
        }
    }

    // Pass 2: flood the transpose from each unassigned finisher, latest first.
    let mut assigned: BTreeSet<NodeId> = BTreeSet::new();
    let mut components = Vec::new();
    while let Some(seed) = finish.pop() {
        if !assigned.insert(seed) {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![seed];
        while let Some(node) = stack.pop() {
            component.push(node);
            if let Some(preds) = transpose.get(&node) {
                for &prev in preds {
                    if assigned.insert(prev) {
                        stack.push(prev);
                    }
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }

    Ok(components)
}
