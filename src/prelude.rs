//! # vistra Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! and functions from the vistra library. Import this module to get quick
//! access to the essential graph-analysis surface.
//!
//! # Examples
//!
//! ```rust
//! use vistra::prelude::*;
//!
//! let mut graph = Graph::directed();
//! graph.add_edge_with_capacity(NodeId::new(0), NodeId::new(1), 3);
//!
//! let result = max_flow(&graph, NodeId::new(0), NodeId::new(1))?;
//! assert_eq!(result.value, 3);
//! # Ok::<(), vistra::Error>(())
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all vistra operations
pub use crate::Error;

/// The result type used throughout vistra
pub use crate::Result;

// ================================================================================================
// Graph Model
// ================================================================================================

/// The graph container and its building blocks
pub use crate::graph::{Edge, Graph, NodeId, DEFAULT_CAPACITY};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Replayable traversals
pub use crate::algorithms::{breadth_first, depth_first, TraversalStep};

/// Connectivity analyses
pub use crate::algorithms::{
    articulation_points, biconnected_components, connected_components,
    strongly_connected_components, ArticulationResult, BiconnectedResult, ComponentList, SccResult,
};

/// Maximum flow
pub use crate::algorithms::{max_flow, MaxFlowResult};

// ================================================================================================
// Result Surface
// ================================================================================================

/// Tagged union over analysis outcomes
pub use crate::analysis::AnalysisResult;
