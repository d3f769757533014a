//! JSON request/response interface of the engine.
//!
//! A [`Request`] names one operation together with its raw inputs. [`handle`] validates the
//! inputs, runs the operation and produces a [`Response`]. [`Reply`] wraps either outcome into
//! the `{"success": ...}` envelope printed by the `relgraph` binary.
//!
//! Vertices are reported by their labels (`A`, `B`, ...), matrices as nested `0`/`1` arrays.

mod request;
mod response;


pub use request::{EdgeInput, Request};
pub use response::{
    BooleanOperationsResponse, ClosuresResponse, ComplementResponse, CompositionDimensions,
    CompositionResponse, ConnectivityResponse, DijkstraResponse, Distance, EulerianPathResponse,
    GraphEdge, MultiplyResponse, PathEdge, PathLengthResponse, PowerResponse, PropertiesResponse,
    RelationToGraphResponse, Response, SpecialVerticesResponse, SubgraphResponse,
    VertexDegreeResponse,
};

use crate::GraphError;
use crate::algebra::{
    DEFAULT_MAX_POWER, boolean_multiply, compose, elementwise_and, elementwise_or, power,
};
use crate::closure::{closures, transitive_closure};
use crate::components::analyze_connectivity;
use crate::labels::label;
use crate::matrix::{BooleanMatrix, RelationMatrix, WeightMatrix};
use crate::paths::{LabeledEdge, eulerian_path, path_length, shortest_paths};
use crate::properties::{RelationProperties, classify};
use crate::structure::{
    DegreeReport, check_subgraph, compare_with_complement, describe, vertex_degrees,
};
use log::debug;
use response::{by_label, labelled, labelled_mapping, labelled_sets};
use serde::Serialize;

/// A machine-readable description of a failed request.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ErrorReport {
    /// A stable error category, see [`GraphError::kind`].
    pub kind: String,
    pub message: String,
}

/// The envelope of every reply: either `success = true` with the fields of the response, or
/// `success = false` with an `error` report.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Reply {
    pub success: bool,
    #[serde(flatten)]
    pub response: Option<Response>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl From<&GraphError> for ErrorReport {
    fn from(value: &GraphError) -> Self {
        ErrorReport {
            kind: value.kind().to_string(),
            message: value.to_string(),
        }
    }
}

impl From<Result<Response, GraphError>> for Reply {
    fn from(value: Result<Response, GraphError>) -> Self {
        match value {
            Ok(response) => Reply {
                success: true,
                response: Some(response),
                error: None,
            },
            Err(error) => Reply::failure(ErrorReport::from(&error)),
        }
    }
}

impl Reply {
    pub fn failure(error: ErrorReport) -> Reply {
        Reply {
            success: false,
            response: None,
            error: Some(error),
        }
    }

    /// A reply to a request that could not be parsed.
    pub fn invalid_request(message: String) -> Reply {
        Reply::failure(ErrorReport {
            kind: "InvalidRequest".to_string(),
            message,
        })
    }
}

/// Validate the inputs of `request` and run the requested operation.
pub fn handle(request: Request) -> Result<Response, GraphError> {
    debug!("Handling `{}` request.", request.operation());
    let response = match request {
        Request::BooleanOperations { matrix_a, matrix_b } => {
            let a = BooleanMatrix::try_from(matrix_a)?;
            let b = BooleanMatrix::try_from(matrix_b)?;
            Response::BooleanOperations(BooleanOperationsResponse {
                addition: elementwise_or(&a, &b)?,
                elementwise_and: elementwise_and(&a, &b)?,
            })
        }
        Request::Multiply { matrix_a, matrix_b } => {
            let a = BooleanMatrix::try_from(matrix_a)?;
            let b = BooleanMatrix::try_from(matrix_b)?;
            let result = boolean_multiply(&a, &b)?;
            Response::Multiply(MultiplyResponse {
                result_shape: result.shape_label(),
                result,
            })
        }
        Request::Power { matrix, max_power } => {
            let r = RelationMatrix::try_from(matrix)?;
            let exponent = max_power.unwrap_or(DEFAULT_MAX_POWER as i64);
            Response::Power(PowerResponse {
                powers: power(&r, exponent)?,
                transitive_closure: transitive_closure(&r),
            })
        }
        Request::Properties { matrix } => {
            let classification = classify(&RelationMatrix::try_from(matrix)?);
            Response::Properties(PropertiesResponse {
                properties: classification.properties,
                relation_types: classification.relation_types,
                violations: classification.violations,
            })
        }
        Request::Closures { matrix } => {
            let r = RelationMatrix::try_from(matrix)?;
            let closures = closures(&r);
            Response::Closures(ClosuresResponse {
                reflexive_closure: closures.reflexive,
                symmetric_closure: closures.symmetric,
                transitive_closure: closures.transitive,
                original_properties: RelationProperties::from(&r),
                added_pairs: closures.added,
            })
        }
        Request::Composition { matrix_r, matrix_s } => {
            let r = BooleanMatrix::try_from(matrix_r)?;
            let s = BooleanMatrix::try_from(matrix_s)?;
            let composition = compose(&r, &s)?;
            Response::Composition(CompositionResponse {
                dimensions: CompositionDimensions {
                    r: r.shape_label(),
                    s: s.shape_label(),
                    composition: composition.shape_label(),
                },
                composition,
            })
        }
        Request::VertexDegree {
            adj_matrix,
            is_directed,
        } => {
            let graph = RelationMatrix::try_from(adj_matrix)?;
            Response::VertexDegree(degree_response(vertex_degrees(&graph, is_directed)))
        }
        Request::Complement { adj_matrix } => {
            let comparison = compare_with_complement(&RelationMatrix::try_from(adj_matrix)?);
            Response::Complement(ComplementResponse {
                complement: comparison.complement,
                original_properties: comparison.original,
                complement_properties: comparison.complement_properties,
            })
        }
        Request::Subgraph {
            matrix_g1,
            matrix_g2,
        } => {
            let g1 = RelationMatrix::try_from(matrix_g1)?;
            let g2 = RelationMatrix::try_from(matrix_g2)?;
            let report = check_subgraph(&g1, &g2)?;
            Response::Subgraph(SubgraphResponse {
                is_subgraph: report.is_subgraph,
                is_induced_subgraph: report.is_induced_subgraph,
                mapping: report.mapping.as_deref().map(labelled_mapping),
                induced_mapping: report.induced_mapping.as_deref().map(labelled_mapping),
                message: report.message,
            })
        }
        Request::Connectivity {
            adj_matrix,
            is_directed,
        } => {
            let graph = RelationMatrix::try_from(adj_matrix)?;
            let report = analyze_connectivity(&graph, is_directed)?;
            Response::Connectivity(ConnectivityResponse {
                is_connected: report.is_connected,
                status: report.status,
                num_components: report.components.len(),
                components: labelled_sets(&report.components),
                weak_components: report.weak_components.as_deref().map(labelled_sets),
            })
        }
        Request::RelationToGraph { matrix } => {
            let description = describe(&RelationMatrix::try_from(matrix)?);
            Response::RelationToGraph(RelationToGraphResponse {
                nodes: description.labels,
                edges: description
                    .edges
                    .iter()
                    .map(|(from, to)| GraphEdge {
                        from: label(*from),
                        to: label(*to),
                    })
                    .collect(),
                is_directed: description.is_directed,
                num_nodes: description.num_nodes,
                num_edges: description.num_edges,
            })
        }
        Request::PathLength {
            adj_matrix,
            weight_matrix,
            path,
        } => {
            let adjacency = RelationMatrix::try_from(adj_matrix)?;
            let weights = WeightMatrix::try_from(weight_matrix)?;
            let result = path_length(&adjacency, &weights, &path)?;
            Response::PathLength(PathLengthResponse {
                valid: result.valid,
                total_length: result.total_length,
                edges: result
                    .edges
                    .iter()
                    .map(|it| PathEdge {
                        from: label(it.from),
                        to: label(it.to),
                        weight: it.weight,
                    })
                    .collect(),
                reason: result.reason,
            })
        }
        Request::EulerianPath { adj_matrix } => {
            let report = eulerian_path(&RelationMatrix::try_from(adj_matrix)?)?;
            Response::EulerianPath(EulerianPathResponse {
                has_eulerian_path: report.has_eulerian_path,
                kind: report.kind,
                start_vertex: report.start_vertex.map(label),
                end_vertex: report.end_vertex.map(label),
                path: labelled(report.path),
                in_degrees: by_label(report.in_degrees),
                out_degrees: by_label(report.out_degrees),
                reason: report.reason,
            })
        }
        Request::Dijkstra { edges, start_node } => {
            let edges: Vec<LabeledEdge> = edges.into_iter().map(LabeledEdge::from).collect();
            let result = shortest_paths(&edges, &start_node)?;
            let distances = result
                .labels
                .iter()
                .zip(&result.distances)
                .map(|(name, distance)| (name.clone(), Distance::from(*distance)))
                .collect();
            let paths = result
                .labels
                .iter()
                .map(|name| {
                    let path = result.path(name).into_iter().map(String::from).collect();
                    (name.clone(), path)
                })
                .collect();
            Response::Dijkstra(DijkstraResponse {
                start_node,
                distances,
                paths,
            })
        }
    };
    Ok(response)
}

fn degree_response(report: DegreeReport) -> VertexDegreeResponse {
    match report {
        DegreeReport::Directed(degrees) => VertexDegreeResponse {
            is_directed: true,
            in_degrees: Some(by_label(degrees.in_degrees)),
            out_degrees: Some(by_label(degrees.out_degrees)),
            total_degrees: Some(by_label(degrees.total_degrees)),
            degrees: None,
            degree_sum: None,
            special_vertices: None,
        },
        DegreeReport::Undirected(degrees) => {
            let special = degrees.special;
            VertexDegreeResponse {
                is_directed: false,
                in_degrees: None,
                out_degrees: None,
                total_degrees: None,
                degrees: Some(by_label(degrees.degrees)),
                degree_sum: Some(degrees.degree_sum),
                special_vertices: Some(SpecialVerticesResponse {
                    isolated: labelled(special.isolated),
                    pendant: labelled(special.pendant),
                    max_degree: special.max_degree,
                    min_degree: special.min_degree,
                    avg_degree: special.avg_degree,
                    max_degree_vertices: labelled(special.max_degree_vertices),
                    min_degree_vertices: labelled(special.min_degree_vertices),
                }),
            }
        }
    }
}
