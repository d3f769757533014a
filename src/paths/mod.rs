//! Path algorithms: path validation, Eulerian trails and shortest paths.
//!
//! Eulerian trails are built by [`HierholzerTrail`] and shortest paths by [`DijkstraSearch`];
//! both are resumable computations over a working state that is owned by a single
//! invocation.

mod dijkstra;
mod euler;
mod path_length;

#[cfg(test)]
mod tests;

pub use dijkstra::{
    DijkstraConfig, DijkstraSearch, DijkstraState, DijkstraStep, EdgeList, LabeledEdge,
    ShortestPaths, shortest_paths,
};
pub use euler::{
    EulerConfig, EulerKind, EulerReport, EulerState, HierholzerStep, HierholzerTrail,
    eulerian_path,
};
pub use path_length::{Path, PathLength, WeightedEdge, path_length};
