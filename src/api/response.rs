use crate::closure::AddedPairs;
use crate::components::ConnectivityStatus;
use crate::labels::label;
use crate::matrix::{BooleanMatrix, RelationMatrix, VertexSet};
use crate::paths::EulerKind;
use crate::properties::{PropertyViolations, RelationProperties, RelationType};
use crate::structure::GraphProperties;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// The result of a successfully handled [`Request`](super::Request).
///
/// Every variant serializes as a plain JSON object with the fields of its payload.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    BooleanOperations(BooleanOperationsResponse),
    Multiply(MultiplyResponse),
    Power(PowerResponse),
    Properties(PropertiesResponse),
    Closures(ClosuresResponse),
    Composition(CompositionResponse),
    VertexDegree(VertexDegreeResponse),
    Complement(ComplementResponse),
    Subgraph(SubgraphResponse),
    Connectivity(ConnectivityResponse),
    RelationToGraph(RelationToGraphResponse),
    PathLength(PathLengthResponse),
    EulerianPath(EulerianPathResponse),
    Dijkstra(DijkstraResponse),
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct BooleanOperationsResponse {
    /// Cell-wise `OR`.
    pub addition: BooleanMatrix,
    pub elementwise_and: BooleanMatrix,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct MultiplyResponse {
    pub result: BooleanMatrix,
    pub result_shape: String,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct PowerResponse {
    /// `R¹ ... Rᵏ`.
    pub powers: Vec<RelationMatrix>,
    pub transitive_closure: RelationMatrix,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct PropertiesResponse {
    pub properties: RelationProperties,
    pub relation_types: Vec<RelationType>,
    pub violations: PropertyViolations,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ClosuresResponse {
    pub reflexive_closure: RelationMatrix,
    pub symmetric_closure: RelationMatrix,
    pub transitive_closure: RelationMatrix,
    pub original_properties: RelationProperties,
    pub added_pairs: AddedPairs,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CompositionResponse {
    pub composition: BooleanMatrix,
    pub dimensions: CompositionDimensions,
}

/// Shapes (`"m×n"`) of the composed matrices.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct CompositionDimensions {
    #[serde(rename = "R")]
    pub r: String,
    #[serde(rename = "S")]
    pub s: String,
    #[serde(rename = "RoS")]
    pub composition: String,
}

/// Directed graphs report `in_degrees`, `out_degrees` and `total_degrees`, undirected graphs
/// report `degrees`, `degree_sum` and `special_vertices`.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct VertexDegreeResponse {
    pub is_directed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_degrees: Option<BTreeMap<String, usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_degrees: Option<BTreeMap<String, usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_degrees: Option<BTreeMap<String, usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degrees: Option<BTreeMap<String, usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_sum: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_vertices: Option<SpecialVerticesResponse>,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct SpecialVerticesResponse {
    pub isolated: Vec<String>,
    pub pendant: Vec<String>,
    pub max_degree: usize,
    pub min_degree: usize,
    pub avg_degree: f64,
    pub max_degree_vertices: Vec<String>,
    pub min_degree_vertices: Vec<String>,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ComplementResponse {
    pub complement: RelationMatrix,
    pub original_properties: GraphProperties,
    pub complement_properties: GraphProperties,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct SubgraphResponse {
    pub is_subgraph: bool,
    pub is_induced_subgraph: bool,
    /// G1 vertex label → G2 vertex label.
    pub mapping: Option<BTreeMap<String, String>>,
    pub induced_mapping: Option<BTreeMap<String, String>>,
    pub message: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ConnectivityResponse {
    pub is_connected: bool,
    pub status: ConnectivityStatus,
    pub num_components: usize,
    pub components: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weak_components: Option<Vec<Vec<String>>>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct RelationToGraphResponse {
    pub nodes: Vec<String>,
    pub edges: Vec<GraphEdge>,
    pub is_directed: bool,
    pub num_nodes: usize,
    pub num_edges: usize,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct PathLengthResponse {
    pub valid: bool,
    pub total_length: Option<f64>,
    pub edges: Vec<PathEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct PathEdge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct EulerianPathResponse {
    pub has_eulerian_path: bool,
    pub kind: Option<EulerKind>,
    pub start_vertex: Option<String>,
    pub end_vertex: Option<String>,
    pub path: Vec<String>,
    pub in_degrees: BTreeMap<String, usize>,
    pub out_degrees: BTreeMap<String, usize>,
    pub reason: String,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DijkstraResponse {
    pub start_node: String,
    pub distances: BTreeMap<String, Distance>,
    /// Empty for unreachable vertices.
    pub paths: BTreeMap<String, Vec<String>>,
}

/// A shortest-path distance. Unreachable vertices serialize as the string `"Infinity"`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Distance {
    Finite(f64),
    Infinite,
}

impl From<Option<f64>> for Distance {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Distance::Infinite, Distance::Finite)
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(value) => serializer.serialize_f64(*value),
            Distance::Infinite => serializer.serialize_str("Infinity"),
        }
    }
}

/// Key `values` by the labels of their vertices.
pub(super) fn by_label<T>(values: impl IntoIterator<Item = T>) -> BTreeMap<String, T> {
    values
        .into_iter()
        .enumerate()
        .map(|(v, value)| (label(v), value))
        .collect()
}

pub(super) fn labelled(vertices: impl IntoIterator<Item = usize>) -> Vec<String> {
    vertices.into_iter().map(label).collect()
}

pub(super) fn labelled_sets(sets: &[VertexSet]) -> Vec<Vec<String>> {
    sets.iter().map(|it| labelled(it.iter())).collect()
}

/// Turn a vertex mapping into a label → label map.
pub(super) fn labelled_mapping(mapping: &[usize]) -> BTreeMap<String, String> {
    by_label(mapping.iter().map(|it| label(*it)))
}
