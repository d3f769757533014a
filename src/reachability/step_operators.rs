use crate::labels::label;
use crate::log_set;
use crate::matrix::VertexSet;
use crate::reachability::{ReachabilityConfig, ReachabilityStep};
use cancel_this::{Cancellable, is_cancelled};
use log::trace;

/// Computes the direct successors of the current reachable set, excluding values that are
/// already in the reachable set.
pub struct BfsSuccessors;

/// Computes the direct predecessors of the current reachable set, excluding values that are
/// already in the reachable set.
pub struct BfsPredecessors;

/// Computes the direct successors and predecessors of the current reachable set, excluding
/// values that are already in the reachable set.
pub struct BfsNeighbors;

impl ReachabilityStep for BfsSuccessors {
    fn step(context: &ReachabilityConfig, state: &VertexSet) -> Cancellable<VertexSet> {
        let mut post = VertexSet::empty();
        for vertex in state.iter() {
            is_cancelled!()?;
            let successors = context
                .graph
                .successors(vertex)
                .intersect(&context.universe)
                .minus(state);
            if !successors.is_empty() {
                post = post.union(&successors);

                trace!("Successors updated using `{}` ({}).", label(vertex), log_set(&post));
            }
        }
        Ok(post)
    }
}

impl ReachabilityStep for BfsPredecessors {
    fn step(context: &ReachabilityConfig, state: &VertexSet) -> Cancellable<VertexSet> {
        let mut pre = VertexSet::empty();
        for vertex in state.iter() {
            is_cancelled!()?;
            let predecessors = context
                .graph
                .predecessors(vertex)
                .intersect(&context.universe)
                .minus(state);
            if !predecessors.is_empty() {
                pre = pre.union(&predecessors);

                trace!("Predecessors updated using `{}` ({}).", label(vertex), log_set(&pre));
            }
        }
        Ok(pre)
    }
}

impl ReachabilityStep for BfsNeighbors {
    fn step(context: &ReachabilityConfig, state: &VertexSet) -> Cancellable<VertexSet> {
        let post = BfsSuccessors::step(context, state)?;
        let pre = BfsPredecessors::step(context, state)?;
        Ok(post.union(&pre))
    }
}
