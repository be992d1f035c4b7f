//! Node identifier implementation for analysis graphs.
//!
//! This module provides the [`NodeId`] type, a strongly-typed identifier for nodes
//! within a graph. The newtype wrapper provides type safety and prevents accidental
//! confusion between node ids and other integer values.

use std::fmt;

/// A strongly-typed identifier for nodes within a graph.
///
/// `NodeId` wraps a `u64` id, providing type safety to prevent accidental mixing
/// of node ids with other integer values. Unlike a dense index, a `NodeId` carries
/// whatever id the caller assigned when building the graph — ids do not need to be
/// contiguous and gaps are perfectly fine.
///
/// # Usage
///
/// Node ids are chosen by the caller (typically a front end that parsed them out
/// of a textual graph description) and passed to
/// [`Graph::add_node`](crate::graph::Graph::add_node) and
/// [`Graph::add_edge`](crate::graph::Graph::add_edge). They are used to:
///
/// - Reference nodes when adding edges
/// - Name traversal starting points and flow endpoints
/// - Identify nodes in analysis results
///
/// # Examples
///
/// ```rust
/// use vistra::graph::{Graph, NodeId};
///
/// let mut graph = Graph::undirected();
/// let a = NodeId::new(0);
/// let b = NodeId::new(1);
/// graph.add_edge(a, b);
///
/// // NodeIds can be compared and ordered
/// assert_ne!(a, b);
/// assert!(a < b);
///
/// // NodeIds can be used as keys in collections
/// use std::collections::HashMap;
/// let mut data: HashMap<NodeId, i32> = HashMap::new();
/// data.insert(a, 42);
/// ```
///
/// # Thread Safety
///
/// `NodeId` is [`Copy`], [`Send`], and [`Sync`], enabling efficient passing between
/// threads and use in concurrent data structures.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    /// Creates a new `NodeId` from a raw id value.
    ///
    /// # Arguments
    ///
    /// * `id` - The raw node id
    ///
    /// # Returns
    ///
    /// A new `NodeId` wrapping the provided id.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vistra::graph::NodeId;
    ///
    /// let node = NodeId::new(0);
    /// assert_eq!(node.id(), 0);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(id: u64) -> Self {
        NodeId(id)
    }

    /// Returns the raw id value of this node identifier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vistra::graph::NodeId;
    ///
    /// let node = NodeId::new(5);
    /// assert_eq!(node.id(), 5);
    /// ```
    #[must_use]
    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    /// Formats the node id for debugging output.
    ///
    /// The format shows the type name and id value for clear identification
    /// in debug output and logging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    /// Formats the node id for user display.
    ///
    /// The display format shows just a prefix and the id for compact output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<u64> for NodeId {
    /// Converts a raw `u64` id into a `NodeId`.
    #[inline]
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

impl From<NodeId> for u64 {
    /// Extracts the raw id from a `NodeId`.
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
