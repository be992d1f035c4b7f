//! Articulation points and bridges via discovery/low-link DFS.
//!
//! This module provides [`articulation_points`], which finds every cut vertex
//! and cut edge of a graph using Tarjan's discovery-time/low-link technique.
//! The DFS is driven by an explicit heap-allocated frame stack rather than
//! recursion, so call-stack depth stays constant no matter how long the
//! graph's path structure is.
//!
//! The analysis operates on the adjacency relation as an undirected one; it is
//! intended for graphs built with [`Graph::undirected`](crate::graph::Graph::undirected)
//! (or equivalent mirrored adjacency).
//!
//! # Multi-Edge Correctness
//!
//! Only the *specific* edge instance back to the immediate parent is skipped,
//! not every edge to the parent's id. A second, parallel edge to the parent is
//! treated as a genuine back-edge, which is what keeps parallel edges from
//! being misclassified as bridges.

use std::collections::{BTreeSet, HashMap};

use crate::graph::{Graph, NodeId};

/// The cut vertices and cut edges of a graph.
///
/// # Examples
///
/// ```rust
/// use vistra::{algorithms::articulation_points, graph::{Graph, NodeId}};
///
/// // A path 0 - 1 - 2: the middle node is the only cut vertex,
/// // and both edges are bridges.
/// let mut graph = Graph::undirected();
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
/// graph.add_edge(NodeId::new(1), NodeId::new(2));
///
/// let result = articulation_points(&graph);
/// assert_eq!(result.points, vec![NodeId::new(1)]);
/// assert_eq!(result.bridges.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArticulationResult {
    /// The articulation points, sorted ascending for reproducible output.
    /// Set semantics: membership is what matters, the ordering is a stable
    /// presentation choice.
    pub points: Vec<NodeId>,
    /// The bridges as `(parent, child)` pairs, in the order the DFS
    /// discovered them.
    pub bridges: Vec<(NodeId, NodeId)>,
}

/// One suspended DFS position: a node, how far through its neighbor list the
/// search has advanced, and whether the single edge back to the parent has
/// been consumed yet.
struct Frame {
    node: NodeId,
    parent: Option<NodeId>,
    next_neighbor: usize,
    parent_edge_skipped: bool,
    tree_children: usize,
}

impl Frame {
    fn new(node: NodeId, parent: Option<NodeId>) -> Self {
        Frame {
            node,
            parent,
            next_neighbor: 0,
            parent_edge_skipped: false,
            tree_children: 0,
        }
    }
}

/// Internal state for the low-link DFS.
#[derive(Default)]
struct CutState {
    /// Discovery time of each visited node.
    disc: HashMap<NodeId, usize>,
    /// Smallest discovery time reachable from each node's subtree via at most
    /// one back-edge.
    low: HashMap<NodeId, usize>,
    /// Discovery counter.
    time: usize,
    /// Collected articulation points.
    points: BTreeSet<NodeId>,
    /// Collected bridges in DFS order.
    bridges: Vec<(NodeId, NodeId)>,
}

impl CutState {
    fn discover(&mut self, node: NodeId) {
        self.disc.insert(node, self.time);
        self.low.insert(node, self.time);
        self.time += 1;
    }

    fn explore(&mut self, graph: &Graph, root: NodeId) {
        self.discover(root);
        let mut stack = vec![Frame::new(root, None)];

        while !stack.is_empty() {
            let top = stack.len() - 1;
            let u = stack[top].node;
            let neighbors = graph.neighbors(u);

            if let Some(&v) = neighbors.get(stack[top].next_neighbor) {
                stack[top].next_neighbor += 1;

                if Some(v) == stack[top].parent && !stack[top].parent_edge_skipped {
                    stack[top].parent_edge_skipped = true;
                    continue;
                }

                if let Some(&disc_v) = self.disc.get(&v) {
                    // Back-edge (or the reverse view of an edge handled
                    // elsewhere): only the discovery time of v flows into low.
                    let low_u = self.low.get_mut(&u).unwrap();
                    *low_u = (*low_u).min(disc_v);
                } else {
                    self.discover(v);
                    stack[top].tree_children += 1;
                    stack.push(Frame::new(v, Some(u)));
                }
            } else if let Some(finished) = stack.pop() {
                if finished.parent.is_some() {
                    self.finish_child(&mut stack, finished.node);
                } else if finished.tree_children > 1 {
                    // A DFS-tree root cuts the graph iff it has several
                    // tree children.
                    self.points.insert(finished.node);
                }
            }
        }
    }

    /// Applies the low-link, articulation, and bridge rules at the moment a
    /// DFS child finishes under its parent (the new stack top).
    fn finish_child(&mut self, stack: &mut [Frame], child: NodeId) {
        let Some(parent_frame) = stack.last() else {
            return;
        };
        let u = parent_frame.node;
        let low_v = self.low[&child];
        let disc_u = self.disc[&u];

        let low_u = self.low.get_mut(&u).unwrap();
        *low_u = (*low_u).min(low_v);

        if parent_frame.parent.is_some() && low_v >= disc_u {
            self.points.insert(u);
        }
        if low_v > disc_u {
            self.bridges.push((u, child));
        }
    }
}

/// Computes the articulation points and bridges of a graph.
///
/// Runs a discovery-time/low-link DFS from every not-yet-visited node in
/// ascending id order, so disconnected graphs are handled. The rules, applied
/// at the moment a DFS child `v` of `u` finishes:
///
/// - `low[u] = min(low[u], low[v])`
/// - a DFS-tree root with more than one tree child is an articulation point
/// - a non-root `u` with `low[v] >= disc[u]` is an articulation point
/// - if `low[v] > disc[u]`, the edge `(u, v)` is a bridge
///
/// Self-loops and parallel edges are tolerated: a self-loop never affects the
/// outcome, and only one edge instance back to the immediate parent is skipped
/// so parallel parent edges count as back-edges.
///
/// # Arguments
///
/// * `graph` - The graph to analyze, with adjacency interpreted as an
///   undirected relation
///
/// # Returns
///
/// The [`ArticulationResult`] with points sorted ascending and bridges in DFS
/// discovery order.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use vistra::{algorithms::articulation_points, graph::{Graph, NodeId}};
///
/// // A 4-cycle with a pendant node hanging off node 1.
/// let mut graph = Graph::undirected();
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
/// graph.add_edge(NodeId::new(1), NodeId::new(2));
/// graph.add_edge(NodeId::new(2), NodeId::new(3));
/// graph.add_edge(NodeId::new(3), NodeId::new(0));
/// graph.add_edge(NodeId::new(1), NodeId::new(4));
///
/// let result = articulation_points(&graph);
/// assert_eq!(result.points, vec![NodeId::new(1)]);
/// assert_eq!(result.bridges, vec![(NodeId::new(1), NodeId::new(4))]);
/// ```
#[must_use]
pub fn articulation_points(graph: &Graph) -> ArticulationResult {
    let mut state = CutState::default();

    for root in graph.nodes() {
        if !state.disc.contains_key(&root) {
            state.explore(graph, root);
        }
    }

    ArticulationResult {
        points: state.points.into_iter().collect(),
        bridges: state.bridges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: u64) -> NodeId {
        NodeId::new(id)
    }

    fn create_cycle_with_pendant() -> Graph {
        // 0 - 1 - 2 - 3 - 0 cycle, plus pendant edge 1 - 4.
        let mut graph = Graph::undirected();
        graph.add_edge(n(0), n(1));
        graph.add_edge(n(1), n(2));
        graph.add_edge(n(2), n(3));
        graph.add_edge(n(3), n(0));
        graph.add_edge(n(1), n(4));
        graph
    }

    #[test]
    fn test_cycle_with_pendant() {
        let result = articulation_points(&create_cycle_with_pendant());
        assert_eq!(result.points, vec![n(1)]);
        assert_eq!(result.bridges, vec![(n(1), n(4))]);
    }

    #[test]
    fn test_pure_cycle_has_no_cut_vertices() {
        let mut graph = Graph::undirected();
        graph.add_edge(n(0), n(1));
        graph.add_edge(n(1), n(2));
        graph.add_edge(n(2), n(0));

        let result = articulation_points(&graph);
        assert!(result.points.is_empty());
        assert!(result.bridges.is_empty());
    }

    #[test]
    fn test_path_interior_nodes_are_cut_vertices() {
        let mut graph = Graph::undirected();
        graph.add_edge(n(0), n(1));
        graph.add_edge(n(1), n(2));
        graph.add_edge(n(2), n(3));

        let result = articulation_points(&graph);
        assert_eq!(result.points, vec![n(1), n(2)]);
        assert_eq!(result.bridges, vec![(n(2), n(3)), (n(1), n(2)), (n(0), n(1))]);
    }

    #[test]
    fn test_root_with_two_subtrees() {
        // Star center: root of the DFS tree with several children.
        let mut graph = Graph::undirected();
        graph.add_edge(n(0), n(1));
        graph.add_edge(n(0), n(2));

        let result = articulation_points(&graph);
        assert_eq!(result.points, vec![n(0)]);
    }

    #[test]
    fn test_two_triangles_sharing_a_vertex() {
        let mut graph = Graph::undirected();
        graph.add_edge(n(0), n(1));
        graph.add_edge(n(1), n(2));
        graph.add_edge(n(2), n(0));
        graph.add_edge(n(2), n(3));
        graph.add_edge(n(3), n(4));
        graph.add_edge(n(4), n(2));

        let result = articulation_points(&graph);
        assert_eq!(result.points, vec![n(2)]);
        assert!(result.bridges.is_empty());
    }

    #[test]
    fn test_disconnected_graph() {
        let mut graph = Graph::undirected();
        graph.add_edge(n(0), n(1));
        graph.add_edge(n(1), n(2));
        graph.add_edge(n(5), n(6));

        let result = articulation_points(&graph);
        assert_eq!(result.points, vec![n(1)]);
        assert_eq!(result.bridges.len(), 3);
    }

    #[test]
    fn test_self_loop_is_inert() {
        let mut graph = Graph::undirected();
        graph.add_edge(n(0), n(1));
        graph.add_edge(n(1), n(2));
        graph.add_edge(n(1), n(1));

        let result = articulation_points(&graph);
        assert_eq!(result.points, vec![n(1)]);
        assert_eq!(result.bridges.len(), 2);
    }

    #[test]
    fn test_parallel_edge_is_not_a_bridge() {
        // A doubled pendant edge: the second instance is a back-edge, so the
        // pair is not a bridge, but node 1 still cuts node 2 off from node 0.
        let mut graph = Graph::undirected();
        graph.add_edge(n(0), n(1));
        graph.add_edge(n(1), n(2));
        graph.add_edge(n(1), n(2));

        let result = articulation_points(&graph);
        assert_eq!(result.points, vec![n(1)]);
        assert_eq!(result.bridges, vec![(n(0), n(1))]);
    }

    #[test]
    fn test_doubled_edge_pair_alone() {
        let mut graph = Graph::undirected();
        graph.add_edge(n(0), n(1));
        graph.add_edge(n(0), n(1));

        let result = articulation_points(&graph);
        assert!(result.points.is_empty());
        assert!(result.bridges.is_empty());
    }

    #[test]
    fn test_single_edge_is_a_bridge() {
        let mut graph = Graph::undirected();
        graph.add_edge(n(0), n(1));

        let result = articulation_points(&graph);
        assert!(result.points.is_empty());
        assert_eq!(result.bridges, vec![(n(0), n(1))]);
    }

    #[test]
    fn test_isolated_nodes() {
        let mut graph = Graph::undirected();
        graph.add_node(n(0));
        graph.add_node(n(1));

        let result = articulation_points(&graph);
        assert!(result.points.is_empty());
        assert!(result.bridges.is_empty());
    }

    #[test]
    fn test_long_path_does_not_overflow_stack() {
        let mut graph = Graph::undirected();
        for i in 0..50_000u64 {
            graph.add_edge(n(i), n(i + 1));
        }

        let result = articulation_points(&graph);
        assert_eq!(result.points.len(), 49_999);
        assert_eq!(result.bridges.len(), 50_000);
    }

    #[test]
    fn test_idempotent() {
        let graph = create_cycle_with_pendant();
        assert_eq!(articulation_points(&graph), articulation_points(&graph));
    }
}
