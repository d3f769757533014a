use crate::matrix::{RelationMatrix, VertexSet};
use crate::reachability::ReachabilityConfig;

/// A configuration object for component decomposition problems.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentConfig {
    /// The graph that is decomposed. For undirected (or weak) components, pass a graph where
    /// every edge is present in both directions, see [`RelationMatrix::symmetrized`].
    pub graph: RelationMatrix,
}

impl From<RelationMatrix> for ComponentConfig {
    fn from(value: RelationMatrix) -> Self {
        ComponentConfig::new(value)
    }
}

impl From<&RelationMatrix> for ComponentConfig {
    fn from(value: &RelationMatrix) -> Self {
        ComponentConfig::new(value.clone())
    }
}

impl ComponentConfig {
    pub fn new(graph: RelationMatrix) -> ComponentConfig {
        ComponentConfig { graph }
    }

    /// A reachability configuration that only explores `universe`.
    pub fn restrict(&self, universe: VertexSet) -> ReachabilityConfig {
        ReachabilityConfig::restricted(self.graph.clone(), universe)
    }
}
