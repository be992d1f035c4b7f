//! Graph algorithms for structural analysis.
//!
//! This module provides the analysis operations of the engine, one file per
//! algorithm. All of them run iteratively on explicit work stacks, tolerate
//! self-loops, parallel edges, and dangling neighbor references, and produce
//! deterministic, plain-value results.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`breadth_first`] - Replayable breadth-first traversal
//! - [`depth_first`] - Replayable pre-order depth-first traversal
//!
//! ## Connectivity
//!
//! - [`connected_components`] - Connected component decomposition
//! - [`articulation_points`] - Articulation points and bridges
//! - [`biconnected_components`] - Biconnected component partitioning
//! - [`strongly_connected_components`] - Strong components of a directed graph
//!
//! ## Flow
//!
//! - [`max_flow`] - Maximum flow between two nodes (Edmonds–Karp)
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | BFS/DFS | O(V + E) steps | Step-by-step traversal playback |
//! | Components | O(V + E) | Reachability grouping |
//! | Articulation | O(V + E) | Single points of failure |
//! | Biconnected | O(V + E) | Failure-resilient regions |
//! | SCC | O(V + E) | Mutual reachability in directed graphs |
//! | Max flow | O(V · E²) | Capacity planning |
//!
//! # Examples
//!
//! ```rust
//! use vistra::{algorithms, graph::{Graph, NodeId}};
//!
//! let mut graph = Graph::undirected();
//! graph.add_edge(NodeId::new(0), NodeId::new(1));
//! graph.add_edge(NodeId::new(1), NodeId::new(2));
//!
//! let components = algorithms::connected_components(&graph);
//! assert_eq!(components.len(), 1);
//!
//! let analysis = algorithms::articulation_points(&graph);
//! assert_eq!(analysis.points, vec![NodeId::new(1)]);
//! ```

mod articulation;
mod biconnected;
mod components;
mod max_flow;
mod scc;
mod traversal;

pub use articulation::{articulation_points, ArticulationResult};
pub use biconnected::{biconnected_components, BiconnectedResult};
pub use components::{connected_components, ComponentList};
pub use max_flow::{max_flow, MaxFlowResult};
pub use scc::{strongly_connected_components, SccResult};
pub use traversal::{breadth_first, depth_first, TraversalStep};
