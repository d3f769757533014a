use crate::labels::labels;
use crate::matrix::RelationMatrix;

/// The graph view of a relation: labelled vertices and edges.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GraphDescription {
    pub labels: Vec<String>,
    /// Directed graphs list every pair. Undirected graphs list every edge once, as `(i, j)`
    /// with `i <= j`.
    pub edges: Vec<(usize, usize)>,
    /// True if the relation is not symmetric.
    pub is_directed: bool,
    pub num_nodes: usize,
    pub num_edges: usize,
}

/// Interpret `relation` as a graph.
pub fn describe(relation: &RelationMatrix) -> GraphDescription {
    let is_directed = !relation.is_symmetric();
    let edges: Vec<(usize, usize)> = relation
        .pairs()
        .into_iter()
        .filter(|(i, j)| is_directed || i <= j)
        .collect();
    GraphDescription {
        labels: labels(relation.size()),
        num_nodes: relation.size(),
        num_edges: edges.len(),
        edges,
        is_directed,
    }
}
