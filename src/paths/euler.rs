use crate::GraphError;
use crate::components::weak_components;
use crate::labels::label;
use crate::matrix::RelationMatrix;
use computation_process::Incomplete::Suspended;
use computation_process::{Algorithm, Completable, Computation, ComputationStep};
use log::{debug, info, trace};
use std::fmt::{Display, Formatter};

/// Builds an Eulerian trail using Hierholzer's algorithm.
///
/// The computation assumes that a trail from `EulerConfig::start` exists; see
/// [`eulerian_path`] for the existence check.
pub type HierholzerTrail =
    Computation<EulerConfig, EulerState, Vec<usize>, HierholzerStep>;

/// A configuration object for Eulerian trail construction.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerConfig {
    pub graph: RelationMatrix,
    /// The first vertex of the trail.
    pub start: usize,
}

/// Working state of Hierholzer's algorithm.
///
/// `remaining` holds the edges that are not used yet, `stack` is the current walk, and `trail`
/// collects finished vertices in reverse order.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerState {
    pub remaining: RelationMatrix,
    pub stack: Vec<usize>,
    pub trail: Vec<usize>,
}

/// Extends the current walk by the lowest unused outgoing edge, or retires the top of the
/// walk into the trail once it has no unused edges left.
pub struct HierholzerStep;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EulerKind {
    /// The trail ends where it started.
    Circuit,
    /// The trail starts and ends in different vertices.
    Path,
}

/// The outcome of the Eulerian analysis of a directed graph.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EulerReport {
    pub has_eulerian_path: bool,
    pub kind: Option<EulerKind>,
    pub start_vertex: Option<usize>,
    pub end_vertex: Option<usize>,
    /// The trail as a vertex sequence (empty if no trail exists).
    pub path: Vec<usize>,
    pub in_degrees: Vec<usize>,
    pub out_degrees: Vec<usize>,
    /// Which existence condition holds or fails.
    pub reason: String,
}

impl Display for EulerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EulerKind::Circuit => write!(f, "circuit"),
            EulerKind::Path => write!(f, "path"),
        }
    }
}

impl EulerConfig {
    pub fn new(graph: RelationMatrix, start: usize) -> EulerConfig {
        EulerConfig { graph, start }
    }
}

impl From<&EulerConfig> for EulerState {
    fn from(value: &EulerConfig) -> Self {
        EulerState {
            remaining: value.graph.clone(),
            stack: vec![value.start],
            trail: Vec::new(),
        }
    }
}

impl ComputationStep<EulerConfig, EulerState, Vec<usize>> for HierholzerStep {
    fn step(_context: &EulerConfig, state: &mut EulerState) -> Completable<Vec<usize>> {
        let Some(&top) = state.stack.last() else {
            return Ok(state.trail.iter().rev().copied().collect());
        };

        match state.remaining.successors(top).first() {
            Some(next) => {
                state.remaining.set(top, next, false);
                state.stack.push(next);
                trace!("Walk extended by `{}` -> `{}`.", label(top), label(next));
            }
            None => {
                state.stack.pop();
                state.trail.push(top);
                if !state.stack.is_empty() {
                    trace!(
                        "Vertex `{}` has no unused edges, retired (trail length {}).",
                        label(top),
                        state.trail.len()
                    );
                }
            }
        }
        Err(Suspended)
    }
}

impl EulerReport {
    fn rejected(graph: &RelationMatrix, reason: String) -> EulerReport {
        info!("No Eulerian trail: {reason}.");
        EulerReport {
            has_eulerian_path: false,
            kind: None,
            start_vertex: None,
            end_vertex: None,
            path: Vec::new(),
            in_degrees: (0..graph.size()).map(|v| graph.in_degree(v)).collect(),
            out_degrees: (0..graph.size()).map(|v| graph.out_degree(v)).collect(),
            reason,
        }
    }
}

/// Decide whether the directed `graph` has an Eulerian trail and construct one if it does.
///
/// A circuit exists if every vertex is balanced (`in = out`), an open path exists if exactly
/// one vertex has `out = in + 1` (the start) and one has `in = out + 1` (the end). In both
/// cases, all edges must lie in a single weakly connected component.
pub fn eulerian_path(graph: &RelationMatrix) -> Result<EulerReport, GraphError> {
    let in_degrees: Vec<usize> = (0..graph.size()).map(|v| graph.in_degree(v)).collect();
    let out_degrees: Vec<usize> = (0..graph.size()).map(|v| graph.out_degree(v)).collect();

    if graph.pair_count() == 0 {
        return Ok(EulerReport::rejected(graph, "graph has no edges".to_string()));
    }

    let has_edges = |v: usize| in_degrees[v] + out_degrees[v] > 0;
    let edge_components = weak_components(graph)?
        .into_iter()
        .filter(|component| component.iter().any(|v| has_edges(v)))
        .count();
    if edge_components > 1 {
        debug!("Edges span {edge_components} weakly connected components.");
        return Ok(EulerReport::rejected(graph, "graph not connected".to_string()));
    }

    let mut starts = Vec::new();
    let mut ends = Vec::new();
    for v in 0..graph.size() {
        let (i, o) = (in_degrees[v], out_degrees[v]);
        if i.abs_diff(o) > 1 {
            return Ok(EulerReport::rejected(
                graph,
                format!(
                    "vertex {} has in-degree {i} and out-degree {o}",
                    label(v)
                ),
            ));
        }
        if o == i + 1 {
            starts.push(v);
        } else if i == o + 1 {
            ends.push(v);
        }
    }

    let (kind, start, reason) = match (starts.as_slice(), ends.as_slice()) {
        ([], []) => {
            let Some(start) = (0..graph.size()).find(|v| out_degrees[*v] > 0) else {
                return Ok(EulerReport::rejected(graph, "graph has no edges".to_string()));
            };
            (EulerKind::Circuit, start, "all vertices are balanced")
        }
        ([start], [_]) => (
            EulerKind::Path,
            *start,
            "exactly one start vertex and one end vertex",
        ),
        _ => {
            return Ok(EulerReport::rejected(
                graph,
                "more than two unbalanced vertices".to_string(),
            ));
        }
    };

    let config = EulerConfig::new(graph.clone(), start);
    let initial = EulerState::from(&config);
    let path = HierholzerTrail::run(config, initial)?;
    let end = path.last().copied();
    info!(
        "Eulerian {kind} of {} edges from `{}`.",
        path.len() - 1,
        label(start)
    );

    Ok(EulerReport {
        has_eulerian_path: true,
        kind: Some(kind),
        start_vertex: Some(start),
        end_vertex: end,
        path,
        in_degrees,
        out_degrees,
        reason: reason.to_string(),
    })
}
