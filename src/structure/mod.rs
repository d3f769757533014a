//! Structural analysis of relation graphs.
//!
//! A [`RelationMatrix`](crate::matrix::RelationMatrix) is read as the adjacency matrix of a
//! graph over labelled vertices. A graph is considered undirected if its matrix is
//! symmetric; in that case, every undirected edge is stored as two cells.

mod complement;
mod degree;
mod describe;
mod subgraph;

pub use complement::{ComplementComparison, GraphProperties, compare_with_complement};
pub use degree::{
    DegreeReport, DirectedDegrees, SpecialVertices, UndirectedDegrees, vertex_degrees,
};
pub use describe::{GraphDescription, describe};
pub use subgraph::{
    DEFAULT_MAX_STEPS, SubgraphConfig, SubgraphReport, SubgraphSearch, SubgraphState,
    SubgraphStep, check_subgraph,
};
