use crate::components::ComponentConfig;
use crate::log_set;
use crate::matrix::{RelationMatrix, VertexSet};
use crate::reachability::ReachabilityAlgorithm;
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, DynComputable, GeneratorStep};
use log::{debug, info};
use std::marker::PhantomData;

/// Internal state for the forward-backward SCC algorithm.
///
/// This struct tracks the current computation phase and pending work items.
pub struct FwdBwdState {
    computing: Step,
    to_process: Vec<VertexSet>,
}

/// Step implementation for the forward-backward SCC algorithm.
///
/// This type is parameterized by forward and backward reachability algorithms
/// and implements the [`GeneratorStep`] trait for SCC enumeration.
pub struct FwdBwdStep<FWD: ReachabilityAlgorithm, BWD: ReachabilityAlgorithm> {
    _phantom: PhantomData<(FWD, BWD)>,
}

impl From<&RelationMatrix> for FwdBwdState {
    fn from(value: &RelationMatrix) -> Self {
        FwdBwdState::from(value.vertices())
    }
}

impl From<VertexSet> for FwdBwdState {
    fn from(value: VertexSet) -> Self {
        FwdBwdState {
            computing: Step::Idle,
            to_process: if value.is_empty() {
                Vec::new()
            } else {
                vec![value]
            },
        }
    }
}

impl<FWD: ReachabilityAlgorithm, BWD: ReachabilityAlgorithm>
    GeneratorStep<ComponentConfig, FwdBwdState, VertexSet> for FwdBwdStep<FWD, BWD>
{
    fn step(context: &ComponentConfig, state: &mut FwdBwdState) -> Completable<Option<VertexSet>> {
        match &mut state.computing {
            Step::Idle => {
                // Pick a new set for processing.

                let Some(universe) = state.to_process.pop() else {
                    // If there is nothing to process, we are done.
                    return Ok(None);
                };

                let Some(pivot) = universe.first() else {
                    debug!("Candidate set is empty.");
                    return Err(Suspended);
                };

                info!(
                    "Start processing ({}); {} sets remaining.",
                    log_set(&universe),
                    state.to_process.len(),
                );

                state.computing = Step::Backward(Step1::new::<BWD>(context, universe, pivot));
                Err(Suspended)
            }
            Step::Backward(step) => {
                state.computing = Step::Forward(step.try_advance::<FWD>(context)?);
                Err(Suspended)
            }
            Step::Forward(step) => {
                let result = step.try_advance()?;

                // Enqueue the remaining vertices for further processing.
                let remaining_backward = result.backward.minus(&result.forward);
                let remaining_forward = result.forward.minus(&result.backward);
                let remaining_rest = result
                    .universe
                    .minus(&result.backward)
                    .minus(&result.forward);

                debug!(
                    "Adding remaining FWD ({}), BWD ({}), and REST ({}) sets.",
                    log_set(&remaining_forward),
                    log_set(&remaining_backward),
                    log_set(&remaining_rest),
                );

                for remaining in [remaining_backward, remaining_forward, remaining_rest] {
                    if !remaining.is_empty() {
                        state.to_process.push(remaining);
                    }
                }

                state.computing = Step::Idle;
                Ok(Some(result.scc))
            }
        }
    }
}

enum Step {
    Idle,
    Backward(Step1),
    Forward(Step2),
}

struct Step1 {
    pivot: VertexSet,
    universe: VertexSet,
    backward: DynComputable<VertexSet>,
}

struct Step2 {
    universe: VertexSet,
    backward: VertexSet,
    forward: DynComputable<VertexSet>,
}

struct IterationResult {
    universe: VertexSet,
    forward: VertexSet,
    backward: VertexSet,
    scc: VertexSet,
}

impl Step1 {
    pub fn new<BWD: ReachabilityAlgorithm>(
        context: &ComponentConfig,
        universe: VertexSet,
        pivot: usize,
    ) -> Step1 {
        let pivot = VertexSet::singleton(pivot);
        Step1 {
            backward: BWD::configure(context.restrict(universe), pivot).dyn_computable(),
            universe,
            pivot,
        }
    }

    pub fn try_advance<FWD: ReachabilityAlgorithm>(
        &mut self,
        context: &ComponentConfig,
    ) -> Completable<Step2> {
        let backward = self.backward.try_compute()?;
        Ok(Step2 {
            forward: FWD::configure(context.restrict(self.universe), self.pivot).dyn_computable(),
            universe: self.universe,
            backward,
        })
    }
}

impl Step2 {
    pub fn try_advance(&mut self) -> Completable<IterationResult> {
        let forward = self.forward.try_compute()?;
        let scc = forward.intersect(&self.backward);
        debug!("Extracted SCC ({})", log_set(&scc));

        Ok(IterationResult {
            universe: self.universe,
            backward: self.backward,
            forward,
            scc,
        })
    }
}
