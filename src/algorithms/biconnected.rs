//! Biconnected component partitioning via an edge-stack DFS.
//!
//! This module provides [`biconnected_components`], which groups the nodes of a
//! graph into its maximal 2-connected pieces. It uses the same
//! discovery/low-link technique as
//! [`articulation_points`](crate::algorithms::articulation_points) — the two
//! analyses share the idiom, not state — extended with an edge stack: every
//! tree edge and every genuine back-edge is pushed as it is traversed, and each
//! time the articulation condition fires the stack is popped down to the
//! triggering tree edge, yielding exactly the edges of one component.

use std::collections::{BTreeSet, HashMap};

use crate::graph::{Graph, NodeId};

/// An ordered sequence of biconnected components, each a set of node ids
/// sorted ascending.
///
/// Every edge of the graph belongs to exactly one component; every node with
/// degree at least 1 appears in at least one component (in several when it is
/// an articulation point); isolated nodes appear in none.
pub type BiconnectedResult = Vec<Vec<NodeId>>;

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

/// Internal state for the edge-stack DFS.
#[derive(Default)]
struct BiconnectedState {
    disc: HashMap<NodeId, usize>,
    low: HashMap<NodeId, usize>,
    time: usize,
    edge_stack: Vec<(NodeId, NodeId)>,
    components: BiconnectedResult,
}

impl BiconnectedState {
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

                if v == u {
                    // A self-loop is its own trivial cycle; keep it on the
                    // stack so the edge lands in the surrounding component.
                    self.edge_stack.push((u, u));
                    continue;
                }

                if let Some(&disc_v) = self.disc.get(&v) {
                    let disc_u = self.disc[&u];
                    if disc_v < disc_u {
                        // Genuine back-edge; edges seen from the other end
                        // (disc[v] > disc[u]) were already recorded there.
                        self.edge_stack.push((u, v));
                        let low_u = self.low.get_mut(&u).unwrap();
                        *low_u = (*low_u).min(disc_v);
                    }
                } else {
                    self.discover(v);
                    stack[top].tree_children += 1;
                    self.edge_stack.push((u, v));
                    stack.push(Frame::new(v, Some(u)));
                }
            } else if let Some(finished) = stack.pop() {
                if finished.parent.is_some() {
                    self.finish_child(&stack, finished.node);
                }
            }
        }

        // A root whose single child never fired the condition (or edges left
        // over past the last fire) still forms one component per DFS tree.
        if !self.edge_stack.is_empty() {
            let nodes: BTreeSet<NodeId> = self
                .edge_stack
                .drain(..)
                .flat_map(|(a, b)| [a, b])
                .collect();
            self.components.push(nodes.into_iter().collect());
        }
    }

    fn finish_child(&mut self, stack: &[Frame], child: NodeId) {
        let Some(parent_frame) = stack.last() else {
            return;
        };
        let u = parent_frame.node;
        let low_v = self.low[&child];
        let disc_u = self.disc[&u];

        let low_u = self.low.get_mut(&u).unwrap();
        *low_u = (*low_u).min(low_v);

        let fired = if parent_frame.parent.is_none() {
            parent_frame.tree_children > 1
        } else {
            low_v >= disc_u
        };
        if fired {
            self.pop_component(u, child);
        }
    }

    /// Pops the edge stack down to and including the tree edge `(u, v)` and
    /// emits the distinct touched nodes as one component.
    fn pop_component(&mut self, u: NodeId, v: NodeId) {
        let mut nodes = BTreeSet::new();
        while let Some((a, b)) = self.edge_stack.pop() {
            nodes.insert(a);
            nodes.insert(b);
            if (a, b) == (u, v) {
                break;
            }
        }
        self.components.push(nodes.into_iter().collect());
    }
}

/// Computes the biconnected components of a graph.
///
/// Same low-link DFS as
/// [`articulation_points`](crate::algorithms::articulation_points), with every
/// tree edge `(u, v)` and every back-edge `(u, v)` with `disc[v] < disc[u]`
/// pushed onto an edge stack as it is traversed. Whenever the articulation
/// condition for `u` fires (root with more than one tree child, or non-root
/// with `low[v] >= disc[u]`), the stack is popped down to and including the
/// edge `(u, v)` and the popped edges' distinct nodes become one component.
/// After the DFS from each root, any remaining edges drain into one final
/// component for that tree.
///
/// # Arguments
///
/// * `graph` - The graph to partition, with adjacency interpreted as an
///   undirected relation
///
/// # Returns
///
/// The [`BiconnectedResult`]: every edge in exactly one component, every node
/// of degree ≥ 1 in at least one, isolated nodes in none.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use vistra::{algorithms::biconnected_components, graph::{Graph, NodeId}};
///
/// // A 4-cycle with a pendant edge: the cycle is one component, the
/// // pendant edge another, and node 1 sits in both.
/// let mut graph = Graph::undirected();
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
/// graph.add_edge(NodeId::new(1), NodeId::new(2));
/// graph.add_edge(NodeId::new(2), NodeId::new(3));
/// graph.add_edge(NodeId::new(3), NodeId::new(0));
/// graph.add_edge(NodeId::new(1), NodeId::new(4));
///
/// let components = biconnected_components(&graph);
/// assert_eq!(components.len(), 2);
/// assert!(components.contains(&vec![NodeId::new(1), NodeId::new(4)]));
/// ```
#[must_use]
pub fn biconnected_components(graph: &Graph) -> BiconnectedResult {
    let mut state = BiconnectedState::default();

    for root in graph.nodes() {
        if !state.disc.contains_key(&root) {
            state.explore(graph, root);
        }
    }

    state.components
}
