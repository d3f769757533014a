use crate::GraphError;
use crate::labels::label;
use crate::matrix::RelationMatrix;
use cancel_this::Cancelled;
use computation_process::Incomplete::Suspended;
use computation_process::{Algorithm, Completable, Computation, ComputationStep};
use log::{debug, info, trace};

/// The default bound on the number of [`SubgraphStep`] invocations of a single search.
pub const DEFAULT_MAX_STEPS: usize = 5_000_000;

/// Search for an injective mapping of the `pattern` vertices into the `host` vertices that
/// preserves every pattern edge (and, if `induced`, every pattern non-edge).
pub type SubgraphSearch =
    Computation<SubgraphConfig, SubgraphState, Option<Vec<usize>>, SubgraphStep>;

/// A configuration object for the subgraph search.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubgraphConfig {
    pub pattern: RelationMatrix,
    pub host: RelationMatrix,
    /// Require that the mapping also preserves non-edges.
    pub induced: bool,
    /// Cancel the search if it exceeds the specified number of steps (default:
    /// [`DEFAULT_MAX_STEPS`]).
    pub max_steps: usize,
}

/// The partial assignment of an ongoing search.
///
/// `mapping[i]` is the host vertex assigned to pattern vertex `i`. The next pattern vertex
/// (`mapping.len()`) tries host vertices starting from `cursor`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubgraphState {
    pub mapping: Vec<usize>,
    pub cursor: usize,
    pub steps: usize,
}

/// One step of the backtracking search: either test one candidate for the next pattern
/// vertex, or backtrack once the candidates are exhausted.
///
/// Mappings are explored in lexicographic order, so the first mapping found is the
/// lexicographically smallest one.
pub struct SubgraphStep;

/// The outcome of a subgraph check.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SubgraphReport {
    pub is_subgraph: bool,
    pub is_induced_subgraph: bool,
    /// The first mapping that preserves all edges of the pattern.
    pub mapping: Option<Vec<usize>>,
    /// The first mapping that preserves all edges and non-edges of the pattern.
    pub induced_mapping: Option<Vec<usize>>,
    pub message: String,
}

impl SubgraphConfig {
    pub fn new(pattern: RelationMatrix, host: RelationMatrix, induced: bool) -> SubgraphConfig {
        SubgraphConfig {
            pattern,
            host,
            induced,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    fn edge_matches(&self, pattern_edge: bool, host_edge: bool) -> bool {
        if self.induced {
            pattern_edge == host_edge
        } else {
            !pattern_edge || host_edge
        }
    }

    /// Check that the next pattern vertex can be assigned `candidate`, given the assignment
    /// of all previous pattern vertices.
    fn is_consistent(&self, mapping: &[usize], candidate: usize) -> bool {
        if mapping.contains(&candidate) {
            return false;
        }
        let vertex = mapping.len();
        let assigned = mapping.iter().copied().enumerate();
        assigned
            .chain(std::iter::once((vertex, candidate)))
            .all(|(other, image)| {
                self.edge_matches(
                    self.pattern.get(other, vertex),
                    self.host.get(image, candidate),
                ) && self.edge_matches(
                    self.pattern.get(vertex, other),
                    self.host.get(candidate, image),
                )
            })
    }

    /// True if the complete `mapping` satisfies this configuration.
    pub fn accepts(&self, mapping: &[usize]) -> bool {
        (0..mapping.len()).all(|i| self.is_consistent(&mapping[..i], mapping[i]))
    }
}

impl ComputationStep<SubgraphConfig, SubgraphState, Option<Vec<usize>>> for SubgraphStep {
    fn step(
        context: &SubgraphConfig,
        state: &mut SubgraphState,
    ) -> Completable<Option<Vec<usize>>> {
        if state.mapping.len() == context.pattern.size() {
            return Ok(Some(state.mapping.clone()));
        }

        if state.steps >= context.max_steps {
            debug!(
                "[steps:{}] Subgraph search canceled (exceeded step count).",
                state.steps
            );
            return Err(Cancelled::new("SubgraphConfig::max_steps").into());
        } else {
            state.steps += 1;
        }

        let candidate = state.cursor;
        if candidate >= context.host.size() {
            let Some(previous) = state.mapping.pop() else {
                debug!(
                    "[steps:{}] Subgraph search exhausted all mappings.",
                    state.steps
                );
                return Ok(None);
            };
            trace!(
                "Backtracking `{}` -> `{}`.",
                label(state.mapping.len()),
                label(previous)
            );
            state.cursor = previous + 1;
            return Err(Suspended);
        }

        state.cursor += 1;
        if context.is_consistent(&state.mapping, candidate) {
            trace!(
                "Assigned `{}` -> `{}`.",
                label(state.mapping.len()),
                label(candidate)
            );
            state.mapping.push(candidate);
            state.cursor = 0;
        }
        Err(Suspended)
    }
}

impl SubgraphReport {
    fn rejected(message: &str) -> SubgraphReport {
        SubgraphReport {
            is_subgraph: false,
            is_induced_subgraph: false,
            mapping: None,
            induced_mapping: None,
            message: message.to_string(),
        }
    }
}

/// Decide whether `pattern` (G1) is a subgraph and an induced subgraph of `host` (G2).
///
/// If the first edge-preserving mapping is not induced, a second search looks for an induced
/// mapping. Each search is bounded by [`DEFAULT_MAX_STEPS`] and fails with
/// [`GraphError::Cancelled`] when the bound is exceeded.
pub fn check_subgraph(
    pattern: &RelationMatrix,
    host: &RelationMatrix,
) -> Result<SubgraphReport, GraphError> {
    info!(
        "Matching pattern with {} vertices and {} edges in graph with {} vertices and {} edges.",
        pattern.size(),
        pattern.pair_count(),
        host.size(),
        host.pair_count()
    );

    if pattern.size() > host.size() {
        return Ok(SubgraphReport::rejected("G1 has more vertices than G2"));
    }
    if pattern.pair_count() > host.pair_count() {
        return Ok(SubgraphReport::rejected("G1 has more edges than G2"));
    }

    let config = SubgraphConfig::new(pattern.clone(), host.clone(), false);
    let mapping = SubgraphSearch::run(config, SubgraphState::default())?;

    let induced_config = SubgraphConfig::new(pattern.clone(), host.clone(), true);
    let induced_mapping = match &mapping {
        None => None,
        Some(mapping) if induced_config.accepts(mapping) => Some(mapping.clone()),
        Some(_) => SubgraphSearch::run(induced_config, SubgraphState::default())?,
    };

    let is_subgraph = mapping.is_some();
    let is_induced_subgraph = induced_mapping.is_some();
    let message = if is_induced_subgraph {
        "G1 is an induced subgraph of G2"
    } else if is_subgraph {
        "G1 is a subgraph of G2"
    } else {
        "G1 is not a subgraph of G2"
    };
    info!("{message} (mapping: {mapping:?}, induced mapping: {induced_mapping:?}).");

    Ok(SubgraphReport {
        is_subgraph,
        is_induced_subgraph,
        mapping,
        induced_mapping,
        message: message.to_string(),
    })
}
