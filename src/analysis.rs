//! Uniform result surface for handing analysis outcomes to a consumer.
//!
//! Every algorithm returns its own plain result type; [`AnalysisResult`] wraps
//! them in one tagged enum so an embedding application can route any outcome
//! through a single channel — typically straight into a serializer when the
//! `serde` feature is enabled.

use crate::algorithms::{
    ArticulationResult, BiconnectedResult, ComponentList, MaxFlowResult, SccResult,
};

/// A tagged union over the outcomes of the analysis operations.
///
/// Variants hold owned plain values with no references back into the analyzed
/// graph, so a result stays valid however the graph is used afterwards. With
/// the `serde` feature the enum serializes externally tagged, giving a
/// self-describing payload.
///
/// # Examples
///
/// ```rust
/// use vistra::{
///     algorithms::articulation_points,
///     analysis::AnalysisResult,
///     graph::{Graph, NodeId},
/// };
///
/// let mut graph = Graph::undirected();
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
/// graph.add_edge(NodeId::new(1), NodeId::new(2));
///
/// let result = AnalysisResult::from(articulation_points(&graph));
/// assert!(matches!(result, AnalysisResult::Articulation(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnalysisResult {
    /// Connected components of an undirected graph.
    Components(ComponentList),
    /// Articulation points and bridges.
    Articulation(ArticulationResult),
    /// Biconnected components.
    Biconnected(BiconnectedResult),
    /// Strongly connected components of a directed graph.
    StronglyConnected(SccResult),
    /// Maximum flow between two nodes.
    MaxFlow(MaxFlowResult),
}

// `ComponentList`, `BiconnectedResult`, and `SccResult` are all
// `Vec<Vec<NodeId>>`, so only the structurally distinct result types get
// `From` impls; the list-shaped ones are wrapped explicitly at the call site.

impl From<ArticulationResult> for AnalysisResult {
    fn from(result: ArticulationResult) -> Self {
        AnalysisResult::Articulation(result)
    }
}

impl From<MaxFlowResult> for AnalysisResult {
    fn from(result: MaxFlowResult) -> Self {
        AnalysisResult::MaxFlow(result)
    }
}
