//! Connected components of relation graphs.
//!
//! Strongly connected components are enumerated by a resumable forward-backward generator,
//! weakly connected (and undirected) components by repeated undirected reachability.
//! [`analyze_connectivity`] combines both into the connectivity verdict of a graph.

mod component_config;
mod fwd_bwd;

#[cfg(test)]
mod tests;

use crate::matrix::{RelationMatrix, VertexSet};
use crate::reachability::{
    BackwardReachability, ForwardReachability, ReachabilityConfig, UndirectedReachability,
};
use cancel_this::Cancellable;
pub use component_config::ComponentConfig;
use computation_process::{Algorithm, Generator, Stateful};
pub use fwd_bwd::{FwdBwdState, FwdBwdStep};
use log::info;
use std::fmt::{Display, Formatter};

/// A basic algorithm for finding strongly connected components.
///
/// Basic algorithm idea:
///  - Pick a pivot vertex (the smallest vertex of the current set).
///  - Compute all forward and backward reachable vertices from pivot.
///  - SCC is the intersection of these two sets.
///  - Recursively continue in `FWD \ SCC`, `BWD \ SCC` and `ALL \ FWD \ BWD`.
///  - Every SCC is reported, including trivial single-vertex components.
pub type FwdBwdScc = Generator<
    ComponentConfig,
    FwdBwdState,
    VertexSet,
    FwdBwdStep<ForwardReachability, BackwardReachability>,
>;

/// Which kind of connectivity a graph exhibits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConnectivityStatus {
    /// An undirected graph with a single component.
    #[cfg_attr(feature = "serde", serde(rename = "connected"))]
    Connected,
    /// A directed graph where every vertex reaches every other vertex.
    #[cfg_attr(feature = "serde", serde(rename = "strongly connected"))]
    StronglyConnected,
    /// A directed graph that is not strongly connected, but whose underlying undirected
    /// graph is connected.
    #[cfg_attr(feature = "serde", serde(rename = "weakly connected"))]
    WeaklyConnected,
    #[cfg_attr(feature = "serde", serde(rename = "disconnected"))]
    Disconnected,
}

impl Display for ConnectivityStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConnectivityStatus::Connected => "connected",
            ConnectivityStatus::StronglyConnected => "strongly connected",
            ConnectivityStatus::WeaklyConnected => "weakly connected",
            ConnectivityStatus::Disconnected => "disconnected",
        };
        write!(f, "{name}")
    }
}

/// The result of a connectivity analysis.
///
/// Components are ordered by their smallest vertex.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ConnectivityReport {
    /// Connected (undirected) or strongly connected (directed).
    pub is_connected: bool,
    pub status: ConnectivityStatus,
    /// Connected components (undirected) or strongly connected components (directed).
    pub components: Vec<VertexSet>,
    /// Weakly connected components; only reported for directed graphs.
    pub weak_components: Option<Vec<VertexSet>>,
}

/// All strongly connected components of `graph`, ordered by their smallest vertex.
pub fn strongly_connected_components(graph: &RelationMatrix) -> Cancellable<Vec<VertexSet>> {
    let mut components = FwdBwdScc::configure(graph, graph).collect::<Cancellable<Vec<_>>>()?;
    components.sort_by_key(|it| it.first());
    Ok(components)
}

/// All weakly connected components of `graph`, ordered by their smallest vertex.
///
/// For a symmetric graph, these are exactly its connected components.
pub fn weak_components(graph: &RelationMatrix) -> Cancellable<Vec<VertexSet>> {
    let config = ReachabilityConfig::from(graph);
    let mut remaining = graph.vertices();
    let mut components = Vec::new();
    while let Some(pivot) = remaining.first() {
        let component = UndirectedReachability::run(config.clone(), VertexSet::singleton(pivot))?;
        remaining = remaining.minus(&component);
        components.push(component);
    }
    Ok(components)
}

/// Decide the connectivity of `graph`.
///
/// An undirected graph is analyzed with every edge taken in both directions. A directed graph
/// is strongly connected if it has a single SCC, otherwise weakly connected if the symmetrized
/// graph is connected.
pub fn analyze_connectivity(
    graph: &RelationMatrix,
    directed: bool,
) -> Cancellable<ConnectivityReport> {
    let report = if directed {
        let strong = strongly_connected_components(graph)?;
        let weak = weak_components(graph)?;
        let status = if strong.len() == 1 {
            ConnectivityStatus::StronglyConnected
        } else if weak.len() == 1 {
            ConnectivityStatus::WeaklyConnected
        } else {
            ConnectivityStatus::Disconnected
        };
        ConnectivityReport {
            is_connected: status == ConnectivityStatus::StronglyConnected,
            status,
            components: strong,
            weak_components: Some(weak),
        }
    } else {
        let components = weak_components(&graph.symmetrized())?;
        let status = if components.len() == 1 {
            ConnectivityStatus::Connected
        } else {
            ConnectivityStatus::Disconnected
        };
        ConnectivityReport {
            is_connected: status == ConnectivityStatus::Connected,
            status,
            components,
            weak_components: None,
        }
    };

    info!(
        "Graph with {} vertices is {} ({} components).",
        graph.size(),
        report.status,
        report.components.len()
    );
    Ok(report)
}
