//! Replayable breadth-first and depth-first traversal.
//!
//! This module provides [`breadth_first`] and [`depth_first`], each producing a
//! finite, freshly-computed sequence of [`TraversalStep`]s. A step records the
//! visited node together with an owned snapshot of the cumulative visited set
//! at the moment the node was marked, which lets a consumer replay the
//! traversal — render incremental highlighting, pause, scrub backwards —
//! without ever recomputing or observing later mutations.
//!
//! # Coverage
//!
//! A traversal covers exactly the nodes reachable from `start`. Covering a
//! disconnected graph is the caller's job: call the traversal repeatedly from
//! each not-yet-visited node (in ascending id order for deterministic output),
//! accumulating a global visited set across calls.

use std::collections::{BTreeSet, VecDeque};

use crate::{
    graph::{Graph, NodeId},
    Error, Result,
};

/// One emitted unit of a traversal.
///
/// Each step owns an immutable snapshot of the visited set taken at the moment
/// its node was marked; retaining earlier steps never exposes later mutations.
/// Since exactly one node is marked per step, the snapshot of step *k* has
/// exactly *k + 1* elements.
///
/// # Examples
///
/// ```rust
/// use vistra::{algorithms::breadth_first, graph::{Graph, NodeId}};
///
/// let mut graph = Graph::undirected();
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
///
/// let steps = breadth_first(&graph, NodeId::new(0))?;
/// assert_eq!(steps[0].node, NodeId::new(0));
/// assert_eq!(steps[0].visited.len(), 1);
/// assert_eq!(steps[1].visited.len(), 2);
/// # Ok::<(), vistra::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraversalStep {
    /// The node visited by this step.
    pub node: NodeId,
    /// Snapshot of the cumulative visited set at the moment `node` was marked,
    /// including `node` itself.
    pub visited: BTreeSet<NodeId>,
}

impl TraversalStep {
    fn mark(node: NodeId, visited: &mut BTreeSet<NodeId>) -> Self {
        visited.insert(node);
        TraversalStep {
            node,
            visited: visited.clone(),
        }
    }
}

/// Performs a breadth-first traversal from `start`, returning the step sequence.
///
/// Standard BFS with a FIFO frontier and a visited set seeded with `start`:
/// each node reachable from `start` is visited exactly once, in order of
/// increasing distance, with neighbors explored in adjacency order. Neighbor
/// ids that are not adjacency keys are treated as nodes with no outgoing edges.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The starting node
///
/// # Returns
///
/// The ordered sequence of [`TraversalStep`]s, freshly computed on every call.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` is absent from the graph.
///
/// # Complexity
///
/// O((V + E) · V) including the per-step snapshots; O(V + E) traversal work.
///
/// # Examples
///
/// ```rust
/// use vistra::{algorithms::breadth_first, graph::{Graph, NodeId}};
///
/// let mut graph = Graph::undirected();
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
/// graph.add_edge(NodeId::new(0), NodeId::new(2));
/// graph.add_edge(NodeId::new(1), NodeId::new(3));
///
/// let order: Vec<NodeId> = breadth_first(&graph, NodeId::new(0))?
///     .into_iter()
///     .map(|step| step.node)
///     .collect();
/// assert_eq!(order, vec![NodeId::new(0), NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
/// # Ok::<(), vistra::Error>(())
/// ```
pub fn breadth_first(graph: &Graph, start: NodeId) -> Result<Vec<TraversalStep>> {
    if !graph.contains(start) {
        return Err(Error::NodeNotFound(start));
    }

    let mut visited = BTreeSet::new();
    let mut steps = vec![TraversalStep::mark(start, &mut visited)];
    let mut frontier = VecDeque::from([start]);

    while let Some(node) = frontier.pop_front() {
        for &next in graph.neighbors(node) {
            if !visited.contains(&next) {
                steps.push(TraversalStep::mark(next, &mut visited));
                frontier.push_back(next);
            }
        }
    }

    Ok(steps)
}

/// Performs a pre-order depth-first traversal from `start`, returning the step sequence.
///
/// Each node is marked, emitted, and then its neighbors are descended into in
/// adjacency order — the classic mark-then-emit-then-recurse pre-order, here
/// driven by an explicit heap-allocated stack so that stack usage stays bounded
/// on graphs with long path structure. Neighbor ids that are not adjacency keys
/// are treated as nodes with no outgoing edges.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The starting node
///
/// # Returns
///
/// The ordered sequence of [`TraversalStep`]s, freshly computed on every call.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` is absent from the graph.
///
/// # Examples
///
/// ```rust
/// use vistra::{algorithms::depth_first, graph::{Graph, NodeId}};
///
/// let mut graph = Graph::directed();
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
/// graph.add_edge(NodeId::new(0), NodeId::new(2));
/// graph.add_edge(NodeId::new(1), NodeId::new(3));
///
/// let order: Vec<NodeId> = depth_first(&graph, NodeId::new(0))?
///     .into_iter()
///     .map(|step| step.node)
///     .collect();
/// // The 0 -> 1 branch is exhausted before 2 is visited.
/// assert_eq!(order, vec![NodeId::new(0), NodeId::new(1), NodeId::new(3), NodeId::new(2)]);
/// # Ok::<(), vistra::Error>(())
/// ```
pub fn depth_first(graph: &Graph, start: NodeId) -> Result<Vec<TraversalStep>> {
    if !graph.contains(start) {
        return Err(Error::NodeNotFound(start));
    }

    let mut visited = BTreeSet::new();
    let mut steps = Vec::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if visited.contains(&node) {
            continue;
        }
        steps.push(TraversalStep::mark(node, &mut visited));

        // Push unvisited neighbors in reverse so the first neighbor in
        // adjacency order is descended into first.
        for &next in graph.neighbors(node).iter().rev() {
            if !visited.contains(&next) {
                stack.push(next);
            }
        }
    }

    Ok(steps)
}
