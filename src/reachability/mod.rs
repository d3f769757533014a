//! Reachability over the graph of a relation matrix.
//!
//! This module provides resumable computations of forward, backward and undirected reachable
//! sets. Every computation repeatedly applies a [`ReachabilityStep`] operator, growing the
//! reachable set one BFS layer at a time, until a fixed point is reached.
//!
//! # Type Aliases
//!
//! - [`ForwardReachability`]: vertices reachable along edge direction.
//! - [`BackwardReachability`]: vertices that can reach the initial set.
//! - [`UndirectedReachability`]: vertices reachable when edge direction is ignored.
//!
//! # Example
//!
//! ```
//! use relgraph::matrix::{RelationMatrix, VertexSet};
//! use relgraph::reachability::ForwardReachability;
//! use computation_process::Algorithm;
//!
//! let graph = RelationMatrix::from_rows(&[[0, 1, 0], [0, 0, 1], [0, 0, 0]]).unwrap();
//! let reachable = ForwardReachability::run(&graph, VertexSet::singleton(1)).unwrap();
//! assert_eq!(reachable.to_vec(), vec![1, 2]);
//! ```

use crate::matrix::VertexSet;
use cancel_this::Cancellable;
use computation_process::{Algorithm, Computation};

#[cfg(test)]
mod tests;

mod iterative_union;
mod reachability_config;
mod reachability_state;
mod step_operators;

pub use iterative_union::IterativeUnion;
pub use reachability_config::ReachabilityConfig;
pub use reachability_state::ReachabilityState;
pub use step_operators::{BfsNeighbors, BfsPredecessors, BfsSuccessors};

/// A helper alias which allows us to use [`ReachabilityComputation`] as shorthand for
/// `Computation<Context = ReachabilityConfig, State = ReachabilityState>`.
pub type ReachabilityComputation<STEP> =
    Computation<ReachabilityConfig, ReachabilityState, VertexSet, STEP>;

/// A helper trait which allows us to use [`ReachabilityAlgorithm`] as shorthand for
/// `Algorithm<Context = ReachabilityConfig, State = ReachabilityState>`.
pub trait ReachabilityAlgorithm:
    Algorithm<ReachabilityConfig, ReachabilityState, VertexSet> + 'static
{
}
impl<T: Algorithm<ReachabilityConfig, ReachabilityState, VertexSet> + 'static>
    ReachabilityAlgorithm for T
{
}

/// Forward reachability: every vertex reachable from the initial set along directed edges.
pub type ForwardReachability = ReachabilityComputation<IterativeUnion<BfsSuccessors>>;

/// Backward reachability: every vertex from which the initial set is reachable.
pub type BackwardReachability = ReachabilityComputation<IterativeUnion<BfsPredecessors>>;

/// Reachability in the underlying undirected graph (edge direction is ignored).
///
/// The fixed point is the union of the weakly connected components that intersect the
/// initial set.
pub type UndirectedReachability = ReachabilityComputation<IterativeUnion<BfsNeighbors>>;

/// Used to reduce code repetition in various reachability-like algorithms.
///
/// Implementors define a single step of a reachability procedure, which is then
/// iterated by higher-level algorithms like [`IterativeUnion`].
pub trait ReachabilityStep {
    /// Perform a single step of reachability computation.
    ///
    /// Returns the set of newly discovered vertices (not already in `state`, but inside
    /// the universe of `context`), or an empty set if no more vertices can be reached.
    fn step(context: &ReachabilityConfig, state: &VertexSet) -> Cancellable<VertexSet>;
}
