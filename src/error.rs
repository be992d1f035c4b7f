use thiserror::Error;

use crate::graph::NodeId;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure is reported synchronously from the call that detected it; no partial
/// results are produced alongside an error, and no operation retries internally (the
/// algorithms are deterministic, so retrying is never meaningful).
///
/// Structurally odd but consistent input — self-loops, parallel edges, disconnected
/// graphs, neighbor ids that never appear as adjacency keys — is *not* an error at this
/// layer. Those shapes are tolerated by every operation and produce well-defined,
/// documented output. Validation of graph structure beyond that is the responsibility
/// of whoever builds the [`Graph`](crate::graph::Graph).
///
/// # Examples
///
/// ```rust
/// use vistra::{algorithms, graph::{Graph, NodeId}, Error};
///
/// let graph = Graph::undirected();
///
/// match algorithms::breadth_first(&graph, NodeId::new(7)) {
///     Ok(steps) => println!("visited {} nodes", steps.len()),
///     Err(Error::NodeNotFound(node)) => println!("{node} is not in the graph"),
///     Err(e) => println!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A node referenced by the request is absent from the graph's node set.
    ///
    /// Returned by the traversal operations when `start` is unknown, and by
    /// the max-flow solver when `source` or `sink` is unknown. The associated
    /// [`NodeId`] identifies the missing node.
    #[error("node {0} is not present in the graph")]
    NodeNotFound(NodeId),

    /// The request is malformed in a way that has no meaningful answer.
    ///
    /// Currently produced by the max-flow solver when `source == sink`.
    /// The message describes what was wrong with the request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The operation requires a directedness the graph does not have.
    ///
    /// Strongly connected components and maximum flow are defined for directed
    /// graphs only; invoking either on an undirected graph yields this error
    /// rather than a silently-empty result. The associated value names the
    /// rejected operation.
    #[error("operation `{0}` requires a directed graph")]
    NotApplicable(&'static str),
}
