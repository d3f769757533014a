use crate::matrix::{RelationMatrix, VertexSet};

/// A "flat" configuration object for various reachability problems.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReachabilityConfig {
    /// The graph used for reachability computation.
    pub graph: RelationMatrix,
    /// The vertices that the procedure is allowed to visit (default: all vertices). Edges
    /// leaving the universe are ignored.
    ///
    /// The initial set is expected to be a subset of the universe.
    pub universe: VertexSet,
    /// Cancel the procedure if it exceeds the specified number of iterations (default:
    /// `usize::MAX`).
    pub max_iterations: usize,
}

impl From<RelationMatrix> for ReachabilityConfig {
    fn from(value: RelationMatrix) -> Self {
        ReachabilityConfig::new(value)
    }
}

impl From<&RelationMatrix> for ReachabilityConfig {
    fn from(value: &RelationMatrix) -> Self {
        ReachabilityConfig::new(value.clone())
    }
}

impl ReachabilityConfig {
    /// Create a new instance of [`ReachabilityConfig`] over all vertices of `graph`.
    pub fn new(graph: RelationMatrix) -> ReachabilityConfig {
        ReachabilityConfig {
            universe: graph.vertices(),
            graph,
            max_iterations: usize::MAX,
        }
    }

    /// Create a new instance of [`ReachabilityConfig`] that only visits `universe`.
    pub fn restricted(graph: RelationMatrix, universe: VertexSet) -> ReachabilityConfig {
        ReachabilityConfig {
            universe: universe.intersect(&graph.vertices()),
            graph,
            max_iterations: usize::MAX,
        }
    }
}
