// Copyright 2026 The vistra contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # vistra
//!
//! A synchronous, in-process graph-analysis engine: build a graph from node
//! and edge data, then run traversals, connectivity analyses, and a maximum
//! flow computation over it. Every operation returns plain, owned values that
//! are deterministic for a given graph, making the crate a good computational
//! core for interactive frontends that parse input and render results
//! themselves.
//!
//! ## Features
//!
//! - **Tolerant graph model** - self-loops, parallel edges, and dangling
//!   neighbor references are representable and never panic
//! - **Replayable traversals** - BFS and DFS emit per-step snapshots of the
//!   visited set, so a consumer can scrub through a traversal after the fact
//! - **Connectivity suite** - connected components, articulation points and
//!   bridges, biconnected components, strongly connected components
//! - **Max flow** - Edmonds–Karp over integer capacities
//! - **Iterative algorithms** - explicit work stacks throughout; deep path
//!   graphs cannot overflow the call stack
//! - **Optional serde** - result types serialize directly with the `serde`
//!   feature enabled
//!
//! ## Quick Start
//!
//! ```rust
//! use vistra::prelude::*;
//!
//! let mut graph = Graph::undirected();
//! graph.add_edge(NodeId::new(0), NodeId::new(1));
//! graph.add_edge(NodeId::new(1), NodeId::new(2));
//! graph.add_edge(NodeId::new(2), NodeId::new(0));
//! graph.add_edge(NodeId::new(1), NodeId::new(3));
//!
//! // Replayable traversal: each step snapshots the visited set.
//! let steps = breadth_first(&graph, NodeId::new(0))?;
//! assert_eq!(steps.len(), 4);
//! assert_eq!(steps[2].visited.len(), 3);
//!
//! // Node 1 is the cut vertex holding the pendant node 3 on.
//! let cuts = articulation_points(&graph);
//! assert_eq!(cuts.points, vec![NodeId::new(1)]);
//! # Ok::<(), vistra::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - The graph container: [`graph::Graph`], [`graph::NodeId`],
//!   [`graph::Edge`]
//! - [`algorithms`] - The analysis operations, one submodule per algorithm
//! - [`analysis`] - [`analysis::AnalysisResult`], a tagged union over the
//!   operation outcomes
//! - [`prelude`] - Convenient re-exports of the common surface
//! - [`Error`] and [`Result`] - Crate-wide error handling
//!
//! All operations borrow the graph immutably and return freshly computed
//! values; nothing is cached and no result holds references into the graph.

pub(crate) mod error;

pub mod algorithms;
pub mod analysis;
pub mod graph;
pub mod prelude;

/// `vistra` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is
/// always [`Error`].
///
/// # Examples
///
/// ```rust
/// use vistra::{Result, algorithms::TraversalStep, graph::{Graph, NodeId}};
///
/// fn replay(graph: &Graph, start: NodeId) -> Result<Vec<TraversalStep>> {
///     vistra::algorithms::depth_first(graph, start)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for all fallible operations in this library.
pub use error::Error;
