//! Maximum flow computation via Edmonds–Karp augmentation.
//!
//! This module provides [`max_flow`], which computes the maximum total flow
//! between two nodes of a directed capacitated graph. The residual network is
//! a map from ordered node pairs to remaining capacity; each round a
//! breadth-first search finds a shortest augmenting path, the bottleneck
//! capacity is pushed along it, and the search repeats until the sink is no
//! longer reachable.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use crate::{
    graph::{Graph, NodeId},
    Error, Result,
};

/// The outcome of a maximum-flow computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaxFlowResult {
    /// The value of the maximum flow from source to sink.
    pub value: u64,
}

/// Computes the maximum flow from `source` to `sink` in a directed graph.
///
/// Edmonds–Karp: the residual network is seeded from the graph's edge records
/// — duplicate `(from, to)` capacities resolve last-write-wins — and every
/// forward entry is paired with a reverse entry, created at zero capacity only
/// when no real reverse edge exists. Augmenting paths are found by BFS over
/// positive-capacity residual entries (neighbors in ascending id order for
/// deterministic path selection), and each path's bottleneck is pushed until
/// the sink becomes unreachable. Zero-capacity edges are tolerated and simply
/// never augment.
///
/// # Arguments
///
/// * `graph` - The directed capacitated graph
/// * `source` - The node flow originates from
/// * `sink` - The node flow must reach
///
/// # Returns
///
/// The [`MaxFlowResult`] with the maximum flow value. A sink unreachable from
/// the source yields a flow of 0, not an error.
///
/// # Errors
///
/// Checked in order:
/// - [`Error::NotApplicable`] if `graph` is undirected
/// - [`Error::NodeNotFound`] if `source` or `sink` is absent
/// - [`Error::InvalidRequest`] if `source == sink`
///
/// # Complexity
///
/// - Time: O(V · E²)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use vistra::{algorithms::max_flow, graph::{Graph, NodeId}};
///
/// let mut graph = Graph::directed();
/// graph.add_edge_with_capacity(NodeId::new(0), NodeId::new(1), 5);
/// graph.add_edge_with_capacity(NodeId::new(1), NodeId::new(2), 3);
///
/// let result = max_flow(&graph, NodeId::new(0), NodeId::new(2))?;
/// assert_eq!(result.value, 3);
/// # Ok::<(), vistra::Error>(())
/// ```
pub fn max_flow(graph: &Graph, source: NodeId, sink: NodeId) -> Result<MaxFlowResult> {
    if !graph.is_directed() {
        return Err(Error::NotApplicable("max_flow"));
    }
    if !graph.contains(source) {
        return Err(Error::NodeNotFound(source));
    }
    if !graph.contains(sink) {
        return Err(Error::NodeNotFound(sink));
    }
    if source == sink {
        return Err(Error::InvalidRequest(format!(
            "source and sink must be distinct, got {source}"
        )));
    }

    // Seed forward capacities last-write-wins, then back-fill zero-capacity
    // reverse entries without clobbering real reverse edges.
    let mut residual: HashMap<(NodeId, NodeId), u64> = HashMap::new();
    for edge in graph.edges() {
        residual.insert((edge.from, edge.to), edge.capacity);
    }
    for edge in graph.edges() {
        residual.entry((edge.to, edge.from)).or_insert(0);
    }

    // Sorted residual adjacency keeps BFS path selection deterministic.
    let mut successors: BTreeMap<NodeId, BTreeSet<NodeId>> = BTreeMap::new();
    for &(from, to) in residual.keys() {
        successors.entry(from).or_default().insert(to);
    }

    let mut value: u64 = 0;
    while let Some(path) = shortest_augmenting_path(&residual, &successors, source, sink) {
        let bottleneck = path
            .windows(2)
            .map(|pair| residual[&(pair[0], pair[1])])
            .min()
            .unwrap_or(0);
        if bottleneck == 0 {
            break;
        }
        for pair in path.windows(2) {
            *residual.get_mut(&(pair[0], pair[1])).unwrap() -= bottleneck;
            *residual.get_mut(&(pair[1], pair[0])).unwrap() += bottleneck;
        }
        value += bottleneck;
    }

    Ok(MaxFlowResult { value })
}

/// BFS over positive-capacity residual entries; returns the node sequence of a
/// shortest source-to-sink path, or `None` once the sink is unreachable.
fn shortest_augmenting_path(
    residual: &HashMap<(NodeId, NodeId), u64>,
    successors: &BTreeMap<NodeId, BTreeSet<NodeId>>,
    source: NodeId,
    sink: NodeId,
) -> Option<Vec<NodeId>> {
    let mut parent: HashMap<NodeId, NodeId> = HashMap::new();
    let mut frontier = VecDeque::from([source]);

    'search: while let Some(node) = frontier.pop_front() {
        let Some(nexts) = successors.get(&node) else {
            continue;
        };
        for &next in nexts {
            if next == source || parent.contains_key(&next) {
                continue;
            }
            if residual[&(node, next)] == 0 {
                continue;
            }
            parent.insert(next, node);
            if next == sink {
                break 'search;
            }
            frontier.push_back(next);
        }
    }

    parent.contains_key(&sink).then(|| {
        let mut path = vec![sink];
        let mut node = sink;
        while node != source {
            node = parent[&node];
            path.push(node);
        }
        path.reverse();
        path
    })
}
