//! The graph model shared by every analysis operation.
//!
//! This module provides [`Graph`], the finite directed/undirected graph
//! representation consumed by the algorithms in
//! [`crate::algorithms`], together with the [`NodeId`] and [`Edge`] value types.
//!
//! # Data Model
//!
//! A [`Graph`] holds three things:
//!
//! - a `directed` flag selecting which operations are valid and how edges are
//!   interpreted,
//! - an adjacency structure mapping each node id to its ordered neighbor list —
//!   the only structure the traversal-based operations read,
//! - an explicit edge list with per-edge capacities, consumed only by the
//!   max-flow solver.
//!
//! The graph is treated as immutable for the duration of any single analysis
//! call: operations take `&Graph`, allocate their own working state, and return
//! independent result values. Nothing in this crate mutates a graph after it has
//! been handed to an algorithm, which is what makes concurrent read-only use
//! from multiple threads sound.
//!
//! # Structural Tolerance
//!
//! No validation is performed here. Self-loops and parallel edges are permitted,
//! and a neighbor id that never appears as an adjacency key is treated by every
//! consumer as a node with no outgoing edges ([`Graph::neighbors`] returns an
//! empty slice). Structural well-formedness beyond that is the caller's
//! responsibility.

mod edge;
mod node;

pub use edge::{Edge, DEFAULT_CAPACITY};
pub use node::NodeId;

use std::collections::BTreeMap;

/// A finite graph over integer node ids.
///
/// `Graph` is built once per analysis request, handed by shared reference to one
/// or more operations, and discarded. Node ids are caller-assigned and need not
/// be contiguous; the adjacency structure is keyed, not indexed.
///
/// # Construction
///
/// Two paths exist:
///
/// - [`Graph::directed`]/[`Graph::undirected`] plus [`Graph::add_node`] and
///   [`Graph::add_edge`], which maintain the adjacency invariants for you
///   (every referenced node becomes a key; undirected edges are mirrored), or
/// - [`Graph::from_adjacency`], which accepts a prebuilt adjacency mapping
///   exactly as given, trusting the caller about mirroring and key coverage.
///
/// # Determinism
///
/// [`Graph::nodes`] iterates keys in ascending id order, and neighbor lists
/// preserve insertion order. Every algorithm in this crate derives its output
/// order from those two orders, so repeated calls on the same graph produce
/// identical results.
///
/// # Examples
///
/// ```rust
/// use vistra::graph::{Graph, NodeId};
///
/// let mut graph = Graph::undirected();
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
/// graph.add_edge(NodeId::new(1), NodeId::new(2));
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.neighbors(NodeId::new(1)), &[NodeId::new(0), NodeId::new(2)]);
/// // Unknown ids are harmless:
/// assert!(graph.neighbors(NodeId::new(99)).is_empty());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    directed: bool,
    adjacency: BTreeMap<NodeId, Vec<NodeId>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Graph {
            directed: true,
            adjacency: BTreeMap::new(),
            edges: Vec::new(),
        }
    }

    /// Creates an empty undirected graph.
    ///
    /// On an undirected graph, [`Graph::add_edge`] records the neighbor
    /// relation in both directions (once for a self-loop).
    #[must_use]
    pub fn undirected() -> Self {
        Graph {
            directed: false,
            adjacency: BTreeMap::new(),
            edges: Vec::new(),
        }
    }

    /// Creates a graph from a prebuilt adjacency mapping, taken exactly as given.
    ///
    /// No mirroring or key completion is applied: if the caller describes an
    /// undirected graph, both directions of each edge are expected to be present
    /// already, and a neighbor id missing from the keys is simply treated as a
    /// node with no outgoing edges. Each `(key, neighbor)` arc also becomes an
    /// [`Edge`] record with the default capacity, which is only meaningful if
    /// the graph is directed and later fed to the max-flow solver.
    ///
    /// # Arguments
    ///
    /// * `directed` - How the adjacency entries are to be interpreted
    /// * `adjacency` - `(node, neighbors)` pairs; later entries for the same
    ///   node replace earlier ones
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vistra::graph::{Graph, NodeId};
    ///
    /// let graph = Graph::from_adjacency(
    ///     false,
    ///     [
    ///         (NodeId::new(0), vec![NodeId::new(1)]),
    ///         (NodeId::new(1), vec![NodeId::new(0)]),
    ///     ],
    /// );
    /// assert_eq!(graph.node_count(), 2);
    /// ```
    #[must_use]
    pub fn from_adjacency<I>(directed: bool, adjacency: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, Vec<NodeId>)>,
    {
        let adjacency: BTreeMap<NodeId, Vec<NodeId>> = adjacency.into_iter().collect();
        let edges = adjacency
            .iter()
            .flat_map(|(&from, neighbors)| neighbors.iter().map(move |&to| Edge::new(from, to)))
            .collect();

        Graph {
            directed,
            adjacency,
            edges,
        }
    }

    /// Ensures `node` is present in the graph, with an empty neighbor list if new.
    ///
    /// Adding a node that already exists is a no-op; existing neighbors are kept.
    pub fn add_node(&mut self, node: NodeId) {
        self.adjacency.entry(node).or_default();
    }

    /// Adds an edge with the default capacity of [`DEFAULT_CAPACITY`].
    ///
    /// See [`Graph::add_edge_with_capacity`] for the exact semantics.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.add_edge_with_capacity(from, to, DEFAULT_CAPACITY);
    }

    /// Adds an edge with an explicit flow capacity.
    ///
    /// Both endpoints become adjacency keys if they are not already. On an
    /// undirected graph the neighbor relation is recorded in both directions;
    /// a self-loop is recorded once. Parallel edges are permitted: calling this
    /// twice for the same pair yields two adjacency entries and two edge
    /// records.
    ///
    /// The capacity only matters to [`max_flow`](crate::algorithms::max_flow),
    /// which resolves duplicate `(from, to)` records last-write-wins.
    pub fn add_edge_with_capacity(&mut self, from: NodeId, to: NodeId, capacity: u64) {
        self.adjacency.entry(to).or_default();
        self.adjacency.entry(from).or_default().push(to);
        if !self.directed && from != to {
            self.adjacency.entry(to).or_default().push(from);
        }
        self.edges.push(Edge::with_capacity(from, to, capacity));
    }

    /// Returns the ordered neighbor list of `node`.
    ///
    /// Returns an empty slice if `node` is not an adjacency key — dangling
    /// neighbor references never panic, they just have no outgoing edges.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(&node).map_or(&[], Vec::as_slice)
    }

    /// Returns an iterator over all node ids in ascending order.
    ///
    /// The ascending order is stable across calls on the same graph, which is
    /// what makes the analysis operations deterministic.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Returns `true` if `node` is present in the graph's node set.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edge records in the graph.
    ///
    /// Parallel edges are counted individually; an undirected edge counts once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` if edges are interpreted as directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the explicit edge records, in insertion order.
    ///
    /// This is the list the max-flow solver seeds its residual graph from.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = Graph::directed();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_directed());
    }

    #[test]
    fn test_add_node_idempotent() {
        let mut graph = Graph::directed();
        graph.add_node(NodeId::new(1));
        graph.add_node(NodeId::new(1));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_add_node_keeps_existing_neighbors() {
        let mut graph = Graph::directed();
        graph.add_edge(NodeId::new(0), NodeId::new(1));
        graph.add_node(NodeId::new(0));
        assert_eq!(graph.neighbors(NodeId::new(0)), &[NodeId::new(1)]);
    }

    #[test]
    fn test_directed_edge_one_way() {
        let mut graph = Graph::directed();
        graph.add_edge(NodeId::new(0), NodeId::new(1));

        assert_eq!(graph.neighbors(NodeId::new(0)), &[NodeId::new(1)]);
        assert!(graph.neighbors(NodeId::new(1)).is_empty());
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_undirected_edge_mirrored() {
        let mut graph = Graph::undirected();
        graph.add_edge(NodeId::new(0), NodeId::new(1));

        assert_eq!(graph.neighbors(NodeId::new(0)), &[NodeId::new(1)]);
        assert_eq!(graph.neighbors(NodeId::new(1)), &[NodeId::new(0)]);
        // One edge record despite the mirrored adjacency.
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_self_loop_recorded_once() {
        let mut graph = Graph::undirected();
        graph.add_edge(NodeId::new(3), NodeId::new(3));

        assert_eq!(graph.neighbors(NodeId::new(3)), &[NodeId::new(3)]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_parallel_edges_kept() {
        let mut graph = Graph::directed();
        graph.add_edge(NodeId::new(0), NodeId::new(1));
        graph.add_edge(NodeId::new(0), NodeId::new(1));

        assert_eq!(
            graph.neighbors(NodeId::new(0)),
            &[NodeId::new(1), NodeId::new(1)]
        );
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_neighbors_of_unknown_node_is_empty() {
        let graph = Graph::directed();
        assert!(graph.neighbors(NodeId::new(42)).is_empty());
    }

    #[test]
    fn test_nodes_ascending_order() {
        let mut graph = Graph::directed();
        graph.add_node(NodeId::new(30));
        graph.add_node(NodeId::new(10));
        graph.add_node(NodeId::new(20));

        let nodes: Vec<NodeId> = graph.nodes().collect();
        assert_eq!(
            nodes,
            vec![NodeId::new(10), NodeId::new(20), NodeId::new(30)]
        );
    }

    #[test]
    fn test_neighbor_insertion_order_preserved() {
        let mut graph = Graph::directed();
        graph.add_edge(NodeId::new(0), NodeId::new(5));
        graph.add_edge(NodeId::new(0), NodeId::new(2));
        graph.add_edge(NodeId::new(0), NodeId::new(9));

        assert_eq!(
            graph.neighbors(NodeId::new(0)),
            &[NodeId::new(5), NodeId::new(2), NodeId::new(9)]
        );
    }

    #[test]
    fn test_from_adjacency_as_given() {
        // Dangling neighbor 9 is deliberately not a key.
        let graph = Graph::from_adjacency(
            true,
            [
                (NodeId::new(0), vec![NodeId::new(1), NodeId::new(9)]),
                (NodeId::new(1), vec![]),
            ],
        );

        assert_eq!(graph.node_count(), 2);
        assert!(!graph.contains(NodeId::new(9)));
        assert!(graph.neighbors(NodeId::new(9)).is_empty());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_edge_capacity_recorded() {
        let mut graph = Graph::directed();
        graph.add_edge_with_capacity(NodeId::new(0), NodeId::new(1), 10);
        graph.add_edge(NodeId::new(1), NodeId::new(2));

        assert_eq!(graph.edges()[0].capacity, 10);
        assert_eq!(graph.edges()[1].capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_contains() {
        let mut graph = Graph::directed();
        graph.add_edge(NodeId::new(0), NodeId::new(1));

        assert!(graph.contains(NodeId::new(0)));
        assert!(graph.contains(NodeId::new(1)));
        assert!(!graph.contains(NodeId::new(2)));
    }
}
