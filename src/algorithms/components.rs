//! Connected component decomposition.
//!
//! This module provides [`connected_components`], which partitions the node set
//! of an undirected graph into its maximal reachable groups.

use std::collections::{BTreeSet, VecDeque};

use crate::graph::{Graph, NodeId};

/// An ordered sequence of components, each a set of node ids sorted ascending.
///
/// Components never overlap and their union is the full node set.
pub type ComponentList = Vec<Vec<NodeId>>;

/// Computes the connected components of a graph.
///
/// Nodes are scanned in ascending id order; each not-yet-visited node seeds a
/// BFS flood confined to undiscovered nodes, and the flooded set becomes one
/// component. Components therefore appear in ascending order of their smallest
/// node id, and every node lands in exactly one component.
///
/// This operation is meaningful on undirected graphs. Called on a directed
/// graph it treats the adjacency exactly as stored, i.e. it computes
/// reachability only in the direction edges point; callers wanting mutual
/// reachability should use
/// [`strongly_connected_components`](crate::algorithms::strongly_connected_components).
///
/// # Arguments
///
/// * `graph` - The graph to decompose
///
/// # Returns
///
/// The [`ComponentList`]: each component sorted ascending, components ordered
/// by seed id.
///
/// # Complexity
///
/// - Time: O(V log V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use vistra::{algorithms::connected_components, graph::{Graph, NodeId}};
///
/// let mut graph = Graph::undirected();
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
/// graph.add_edge(NodeId::new(2), NodeId::new(3));
/// graph.add_node(NodeId::new(4));
///
/// let components = connected_components(&graph);
/// assert_eq!(components.len(), 3);
/// assert_eq!(components[0], vec![NodeId::new(0), NodeId::new(1)]);
/// assert_eq!(components[2], vec![NodeId::new(4)]);
/// ```
#[must_use]
pub fn connected_components(graph: &Graph) -> ComponentList {
    let mut visited: BTreeSet<NodeId> = BTreeSet::new();
    let mut components = Vec::new();

    for seed in graph.nodes() {
        if !visited.insert(seed) {
            continue;
        }

        let mut component = Vec::new();
        let mut frontier = VecDeque::from([seed]);
        while let Some(node) = frontier.pop_front() {
            component.push(node);
            for &next in graph.neighbors(node) {
                if visited.insert(next) {
                    frontier.push_back(next);
                }
            }
        }

        component.sort_unstable();
        components.push(component);
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: u64) -> NodeId {
        NodeId::new(id)
    }

    #[test]
    fn test_empty_graph_has_no_components() {
        let graph = Graph::undirected();
        assert!(connected_components(&graph).is_empty());
    }

    #[test]
    fn test_single_node() {
        let mut graph = Graph::undirected();
        graph.add_node(n(5));
        assert_eq!(connected_components(&graph), vec![vec![n(5)]]);
    }

    #[test]
    fn test_two_components() {
        let mut graph = Graph::undirected();
        graph.add_edge(n(0), n(1));
        graph.add_edge(n(1), n(2));
        graph.add_edge(n(3), n(4));

        let components = connected_components(&graph);
        assert_eq!(components, vec![vec![n(0), n(1), n(2)], vec![n(3), n(4)]]);
    }

    #[test]
    fn test_components_partition_node_set() {
        let mut graph = Graph::undirected();
        graph.add_edge(n(0), n(1));
        graph.add_edge(n(2), n(3));
        graph.add_node(n(7));
        graph.add_edge(n(4), n(2));

        let components = connected_components(&graph);
        let mut all: Vec<NodeId> = components.into_iter().flatten().collect();
        all.sort_unstable();
        // No node appears twice and the union is the node set.
        let expected: Vec<NodeId> = graph.nodes().collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_components_sorted_ascending() {
        let mut graph = Graph::undirected();
        graph.add_edge(n(9), n(2));
        graph.add_edge(n(2), n(5));

        let components = connected_components(&graph);
        assert_eq!(components, vec![vec![n(2), n(5), n(9)]]);
    }

    #[test]
    fn test_seed_order_is_ascending() {
        let mut graph = Graph::undirected();
        graph.add_edge(n(10), n(11));
        graph.add_edge(n(0), n(1));

        let components = connected_components(&graph);
        // The component containing 0 is seeded first.
        assert_eq!(components[0], vec![n(0), n(1)]);
        assert_eq!(components[1], vec![n(10), n(11)]);
    }

    #[test]
    fn test_self_loop_component() {
        let mut graph = Graph::undirected();
        graph.add_edge(n(1), n(1));

        assert_eq!(connected_components(&graph), vec![vec![n(1)]]);
    }

    #[test]
    fn test_directed_graph_uses_adjacency_as_stored() {
        // 0 -> 1 with no reverse edge: starting from 0 reaches 1, so they
        // share a component; the reachability is purely as stored.
        let mut graph = Graph::directed();
        graph.add_edge(n(0), n(1));
        graph.add_edge(n(2), n(1));

        let components = connected_components(&graph);
        assert_eq!(components, vec![vec![n(0), n(1)], vec![n(2)]]);
    }

    #[test]
    fn test_idempotent() {
        let mut graph = Graph::undirected();
        graph.add_edge(n(0), n(1));
        graph.add_edge(n(2), n(3));

        let first = connected_components(&graph);
        let second = connected_components(&graph);
        assert_eq!(first, second);
    }
}
