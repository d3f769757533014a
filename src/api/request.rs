use crate::paths::LabeledEdge;
use serde::Deserialize;

/// A request for one operation of the engine.
///
/// Requests are JSON objects tagged by their `operation` field, e.g.
/// `{"operation": "power", "matrix": [[0, 1], [0, 0]], "maxPower": 2}`. Matrices are kept as
/// raw nested arrays and validated when the request is handled, so that malformed matrices
/// are reported as [`GraphError`](crate::GraphError) values.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(
    tag = "operation",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum Request {
    /// Cell-wise `OR` and `AND` of two equally sized matrices.
    BooleanOperations {
        matrix_a: Vec<Vec<i64>>,
        matrix_b: Vec<Vec<i64>>,
    },
    Multiply {
        matrix_a: Vec<Vec<i64>>,
        matrix_b: Vec<Vec<i64>>,
    },
    Power {
        matrix: Vec<Vec<i64>>,
        /// Defaults to [`DEFAULT_MAX_POWER`](crate::algebra::DEFAULT_MAX_POWER).
        max_power: Option<i64>,
    },
    Properties {
        matrix: Vec<Vec<i64>>,
    },
    Closures {
        matrix: Vec<Vec<i64>>,
    },
    Composition {
        matrix_r: Vec<Vec<i64>>,
        matrix_s: Vec<Vec<i64>>,
    },
    VertexDegree {
        adj_matrix: Vec<Vec<i64>>,
        #[serde(default)]
        is_directed: bool,
    },
    Complement {
        adj_matrix: Vec<Vec<i64>>,
    },
    Subgraph {
        matrix_g1: Vec<Vec<i64>>,
        matrix_g2: Vec<Vec<i64>>,
    },
    Connectivity {
        adj_matrix: Vec<Vec<i64>>,
        #[serde(default)]
        is_directed: bool,
    },
    RelationToGraph {
        matrix: Vec<Vec<i64>>,
    },
    PathLength {
        adj_matrix: Vec<Vec<i64>>,
        weight_matrix: Vec<Vec<f64>>,
        path: Vec<i64>,
    },
    EulerianPath {
        adj_matrix: Vec<Vec<i64>>,
    },
    Dijkstra {
        edges: Vec<EdgeInput>,
        start_node: String,
    },
}

/// An edge of a shortest-path request, either `{"src", "dst", "weight"}` or a
/// `[src, dst, weight]` triple.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(untagged)]
pub enum EdgeInput {
    Object { src: String, dst: String, weight: f64 },
    Triple(String, String, f64),
}

impl From<EdgeInput> for LabeledEdge {
    fn from(value: EdgeInput) -> Self {
        match value {
            EdgeInput::Object { src, dst, weight } | EdgeInput::Triple(src, dst, weight) => {
                LabeledEdge { src, dst, weight }
            }
        }
    }
}

impl Request {
    /// The name of the requested operation, as used in the `operation` field.
    pub fn operation(&self) -> &'static str {
        match self {
            Request::BooleanOperations { .. } => "boolean-operations",
            Request::Multiply { .. } => "multiply",
            Request::Power { .. } => "power",
            Request::Properties { .. } => "properties",
            Request::Closures { .. } => "closures",
            Request::Composition { .. } => "composition",
            Request::VertexDegree { .. } => "vertex-degree",
            Request::Complement { .. } => "complement",
            Request::Subgraph { .. } => "subgraph",
            Request::Connectivity { .. } => "connectivity",
            Request::RelationToGraph { .. } => "relation-to-graph",
            Request::PathLength { .. } => "path-length",
            Request::EulerianPath { .. } => "eulerian-path",
            Request::Dijkstra { .. } => "dijkstra",
        }
    }
}
