use crate::GraphError;
use crate::labels::label;
use crate::matrix::{RelationMatrix, WeightMatrix};
use log::debug;

/// A sequence of vertices where every consecutive pair is an edge of some graph.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Path(Vec<usize>);

/// An edge of a path together with its weight.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WeightedEdge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// The result of a path-length query. An invalid path carries no partial length.
#[derive(Clone, PartialEq, Debug)]
pub struct PathLength {
    pub valid: bool,
    pub total_length: Option<f64>,
    pub edges: Vec<WeightedEdge>,
    /// Why the path is invalid.
    pub reason: Option<String>,
}

impl Path {
    /// Validate `vertices` as a path of `graph`.
    ///
    /// Fails with [`GraphError::InvalidPath`] if the path is empty, references a vertex
    /// outside of the graph, or uses a missing edge.
    pub fn try_new(graph: &RelationMatrix, vertices: &[i64]) -> Result<Path, GraphError> {
        if vertices.is_empty() {
            return Err(GraphError::InvalidPath("path is empty".to_string()));
        }

        let mut path = Vec::with_capacity(vertices.len());
        for (position, vertex) in vertices.iter().enumerate() {
            let index = usize::try_from(*vertex)
                .ok()
                .filter(|it| *it < graph.size())
                .ok_or_else(|| {
                    GraphError::InvalidPath(format!(
                        "vertex {vertex} at position {position} is not in the graph"
                    ))
                })?;
            path.push(index);
        }

        if let Some((from, to)) = path
            .windows(2)
            .map(|it| (it[0], it[1]))
            .find(|(from, to)| !graph.get(*from, *to))
        {
            return Err(GraphError::InvalidPath(format!(
                "edge {} -> {} does not exist",
                label(from),
                label(to)
            )));
        }

        Ok(Path(path))
    }

    pub fn vertices(&self) -> &[usize] {
        &self.0
    }

    /// Consecutive vertex pairs of the path.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.windows(2).map(|it| (it[0], it[1]))
    }
}

/// Validate `path` against `adjacency` and sum the weights of its edges.
///
/// Only inconsistent inputs (weights that do not match the adjacency matrix) are errors.
/// A path that does not follow the graph is reported as `valid = false`.
pub fn path_length(
    adjacency: &RelationMatrix,
    weights: &WeightMatrix,
    path: &[i64],
) -> Result<PathLength, GraphError> {
    weights.ensure_pairs_with(adjacency)?;

    let path = match Path::try_new(adjacency, path) {
        Ok(path) => path,
        Err(error) => {
            debug!("Path rejected: {error}.");
            return Ok(PathLength {
                valid: false,
                total_length: None,
                edges: Vec::new(),
                reason: Some(error.to_string()),
            });
        }
    };

    let edges: Vec<WeightedEdge> = path
        .edges()
        .map(|(from, to)| WeightedEdge {
            from,
            to,
            weight: weights.get(from, to),
        })
        .collect();
    let total_length = edges.iter().map(|it| it.weight).sum();

    Ok(PathLength {
        valid: true,
        total_length: Some(total_length),
        edges,
        reason: None,
    })
}
