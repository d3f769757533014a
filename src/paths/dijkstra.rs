use crate::GraphError;
use cancel_this::is_cancelled;
use computation_process::Incomplete::Suspended;
use computation_process::{Algorithm, Completable, Computation, ComputationStep};
use log::{debug, info, trace};
use ordered_float::NotNan;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Single-source shortest paths over an [`EdgeList`].
pub type DijkstraSearch =
    Computation<DijkstraConfig, DijkstraState, ShortestPaths, DijkstraStep>;

/// A directed edge between two labelled vertices.
#[derive(Clone, PartialEq, Debug)]
pub struct LabeledEdge {
    pub src: String,
    pub dst: String,
    pub weight: f64,
}

/// A weighted directed graph given by its edges.
///
/// Vertices are indexed in the order in which their labels first appear.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct EdgeList {
    labels: Vec<String>,
    successors: Vec<Vec<(usize, NotNan<f64>)>>,
}

/// A configuration object for the shortest-path search.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DijkstraConfig {
    pub graph: EdgeList,
    pub source: usize,
}

/// Tentative distances, predecessors and the priority queue of a running search.
///
/// The queue is a min-heap ordered by `(distance, vertex)`, hence ties in distance are broken
/// in favour of the lowest vertex index.
#[derive(Clone, Debug)]
pub struct DijkstraState {
    distances: Vec<Option<NotNan<f64>>>,
    predecessors: Vec<Option<usize>>,
    settled: Vec<bool>,
    queue: BinaryHeap<Reverse<(NotNan<f64>, usize)>>,
}

/// Settles the closest unsettled vertex and relaxes its outgoing edges.
pub struct DijkstraStep;

/// Distances and paths from the source to every vertex.
///
/// Unreachable vertices have no distance and an empty path.
#[derive(Clone, PartialEq, Debug)]
pub struct ShortestPaths {
    pub labels: Vec<String>,
    pub distances: Vec<Option<f64>>,
    pub paths: Vec<Vec<usize>>,
}

impl LabeledEdge {
    pub fn new(src: &str, dst: &str, weight: f64) -> LabeledEdge {
        LabeledEdge {
            src: src.to_string(),
            dst: dst.to_string(),
            weight,
        }
    }
}

impl EdgeList {
    /// Build the graph from `edges`.
    ///
    /// Fails with [`GraphError::NegativeWeight`] if any weight is negative, and with
    /// [`GraphError::InvalidValue`] if a weight is not a finite number.
    pub fn from_edges(edges: &[LabeledEdge]) -> Result<EdgeList, GraphError> {
        let mut graph = EdgeList::default();
        for (row, edge) in edges.iter().enumerate() {
            let weight = NotNan::new(edge.weight)
                .ok()
                .filter(|it| it.is_finite())
                .ok_or_else(|| GraphError::InvalidValue {
                    row,
                    column: 2,
                    reason: format!("weight {} is not a finite number", edge.weight),
                })?;
            if *weight < 0.0 {
                return Err(GraphError::NegativeWeight {
                    origin: edge.src.clone(),
                    target: edge.dst.clone(),
                    weight: edge.weight,
                });
            }
            let src = graph.insert_vertex(&edge.src);
            let dst = graph.insert_vertex(&edge.dst);
            graph.successors[src].push((dst, weight));
        }
        Ok(graph)
    }

    /// The index of `label`, adding it as a new vertex if it is not present.
    pub fn insert_vertex(&mut self, label: &str) -> usize {
        if let Some(index) = self.index_of(label) {
            return index;
        }
        self.labels.push(label.to_string());
        self.successors.push(Vec::new());
        self.labels.len() - 1
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|it| it == label)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(|it| it.len()).sum()
    }
}

impl DijkstraConfig {
    /// Create a search from `start`. The start vertex is added to the graph if no edge
    /// mentions it.
    pub fn new(mut graph: EdgeList, start: &str) -> DijkstraConfig {
        let source = graph.insert_vertex(start);
        DijkstraConfig { graph, source }
    }
}

impl From<&DijkstraConfig> for DijkstraState {
    fn from(value: &DijkstraConfig) -> Self {
        let count = value.graph.vertex_count();
        let mut state = DijkstraState {
            distances: vec![None; count],
            predecessors: vec![None; count],
            settled: vec![false; count],
            queue: BinaryHeap::new(),
        };
        let zero = NotNan::default();
        state.distances[value.source] = Some(zero);
        state.queue.push(Reverse((zero, value.source)));
        state
    }
}

impl ComputationStep<DijkstraConfig, DijkstraState, ShortestPaths> for DijkstraStep {
    fn step(context: &DijkstraConfig, state: &mut DijkstraState) -> Completable<ShortestPaths> {
        let Some(Reverse((distance, vertex))) = state.queue.pop() else {
            return Ok(state.shortest_paths(context));
        };
        if state.settled[vertex] {
            return Err(Suspended);
        }
        state.settled[vertex] = true;
        debug!(
            "Settled `{}` at distance {}.",
            context.graph.labels[vertex], distance
        );

        for &(target, weight) in &context.graph.successors[vertex] {
            is_cancelled!()?;
            let candidate = distance + weight;
            let improves = state.distances[target].is_none_or(|current| candidate < current);
            if !state.settled[target] && improves {
                trace!(
                    "Relaxed `{}` to {} via `{}`.",
                    context.graph.labels[target], candidate, context.graph.labels[vertex]
                );
                state.distances[target] = Some(candidate);
                state.predecessors[target] = Some(vertex);
                state.queue.push(Reverse((candidate, target)));
            }
        }
        Err(Suspended)
    }
}

impl DijkstraState {
    fn path_to(&self, target: usize) -> Vec<usize> {
        if self.distances[target].is_none() {
            return Vec::new();
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessors[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        path
    }

    fn shortest_paths(&self, context: &DijkstraConfig) -> ShortestPaths {
        ShortestPaths {
            labels: context.graph.labels.clone(),
            distances: self.distances.iter().map(|it| it.map(NotNan::into_inner)).collect(),
            paths: (0..self.distances.len()).map(|v| self.path_to(v)).collect(),
        }
    }
}

impl ShortestPaths {
    /// The distance to the vertex with the given `label`, if it is reachable.
    pub fn distance(&self, label: &str) -> Option<f64> {
        let index = self.labels.iter().position(|it| it == label)?;
        self.distances[index]
    }

    /// The shortest path to the vertex with the given `label`, as a sequence of labels.
    pub fn path(&self, label: &str) -> Vec<&str> {
        let Some(index) = self.labels.iter().position(|it| it == label) else {
            return Vec::new();
        };
        self.paths[index]
            .iter()
            .map(|v| self.labels[*v].as_str())
            .collect()
    }
}

/// Compute shortest distances and paths from `start` over `edges`.
pub fn shortest_paths(edges: &[LabeledEdge], start: &str) -> Result<ShortestPaths, GraphError> {
    let config = DijkstraConfig::new(EdgeList::from_edges(edges)?, start);
    info!(
        "Searching shortest paths from `{start}` over {} vertices and {} edges.",
        config.graph.vertex_count(),
        config.graph.edge_count()
    );
    let initial = DijkstraState::from(&config);
    Ok(DijkstraSearch::run(config, initial)?)
}
