//! Edge record implementation for analysis graphs.
//!
//! This module provides the [`Edge`] type, the explicit edge record kept alongside
//! the adjacency structure of a [`Graph`](crate::graph::Graph). Edge records carry
//! the capacity information consumed by the max-flow solver; every other operation
//! reads the adjacency structure only.

use std::fmt;

use crate::graph::NodeId;

/// The capacity assigned to an edge when none is specified.
pub const DEFAULT_CAPACITY: u64 = 1;

/// An explicit edge record with an optional flow capacity.
///
/// `Edge` is a plain value: two endpoints and a capacity. The capacity defaults
/// to [`DEFAULT_CAPACITY`] and is only meaningful to
/// [`max_flow`](crate::algorithms::max_flow); traversal and connectivity
/// operations ignore it entirely.
///
/// # Duplicate Edges
///
/// The edge list may contain several records for the same `(from, to)` pair.
/// When the max-flow solver builds its residual graph, the capacity of the
/// *last* record for a pair wins. This is a documented policy, not a silent
/// overwrite — see [`max_flow`](crate::algorithms::max_flow).
///
/// # Examples
///
/// ```rust
/// use vistra::graph::{Edge, NodeId};
///
/// let plain = Edge::new(NodeId::new(0), NodeId::new(1));
/// assert_eq!(plain.capacity, 1);
///
/// let wide = Edge::with_capacity(NodeId::new(0), NodeId::new(1), 10);
/// assert_eq!(wide.capacity, 10);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// The source endpoint.
    pub from: NodeId,
    /// The target endpoint.
    pub to: NodeId,
    /// The flow capacity of this edge. A capacity of 0 is representable and
    /// simply never admits flow.
    pub capacity: u64,
}

impl Edge {
    /// Creates an edge with the default capacity of [`DEFAULT_CAPACITY`].
    #[must_use]
    #[inline]
    pub const fn new(from: NodeId, to: NodeId) -> Self {
        Edge {
            from,
            to,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Creates an edge with an explicit capacity.
    ///
    /// # Arguments
    ///
    /// * `from` - The source endpoint
    /// * `to` - The target endpoint
    /// * `capacity` - The flow capacity; expected to be positive, though 0 is
    ///   tolerated and behaves like an edge that never admits flow
    #[must_use]
    #[inline]
    pub const fn with_capacity(from: NodeId, to: NodeId, capacity: u64) -> Self {
        Edge { from, to, capacity }
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({} -> {}, cap {})", self.from, self.to, self.capacity)
    }
}
