//! Reachability computations can be serialized mid-execution and resumed afterwards.

use crate::matrix::{RelationMatrix, VertexSet};
use crate::reachability::{
    BfsNeighbors, BfsPredecessors, BfsSuccessors, IterativeUnion, ReachabilityComputation,
    ReachabilityConfig, ReachabilityState,
};
use crate::test_utils::{init_logger, mk_set};
use computation_process::{Algorithm, Computable, ComputationStep, Stateful};

/// A directed cycle `A → B → ... → G → A`, which needs many iterations to saturate.
fn cycle() -> RelationMatrix {
    let mut graph = RelationMatrix::empty(7).unwrap();
    for i in 0..7 {
        graph.set(i, (i + 1) % 7, true);
    }
    graph
}

fn serialization_roundtrip_impl<STEP>()
where
    STEP: ComputationStep<ReachabilityConfig, ReachabilityState, VertexSet> + 'static,
    ReachabilityComputation<STEP>: Algorithm<ReachabilityConfig, ReachabilityState, VertexSet>
        + Stateful<ReachabilityConfig, ReachabilityState>,
{
    init_logger();
    let config = ReachabilityConfig::new(cycle());
    let initial = mk_set(&[3]);

    let mut computation = <ReachabilityComputation<STEP> as Stateful<
        ReachabilityConfig,
        ReachabilityState,
    >>::configure(config.clone(), initial);

    // Advance the computation a little, but not to completion.
    for _ in 0..2 {
        let _ = computation.try_compute();
    }

    let json = serde_json::to_string(&computation).unwrap();
    let mut resumed: ReachabilityComputation<STEP> = serde_json::from_str(&json).unwrap();
    let resumed_result = loop {
        if let Ok(result) = resumed.try_compute() {
            break result.clone();
        }
    };

    let fresh_result = <ReachabilityComputation<STEP> as Algorithm<
        ReachabilityConfig,
        ReachabilityState,
        VertexSet,
    >>::run(config, initial)
    .unwrap();

    assert_eq!(resumed_result, fresh_result);
    assert_eq!(fresh_result, VertexSet::full(7));
}

#[test]
fn forward_serialization_roundtrip() {
    serialization_roundtrip_impl::<IterativeUnion<BfsSuccessors>>();
}

#[test]
fn backward_serialization_roundtrip() {
    serialization_roundtrip_impl::<IterativeUnion<BfsPredecessors>>();
}

#[test]
fn undirected_serialization_roundtrip() {
    serialization_roundtrip_impl::<IterativeUnion<BfsNeighbors>>();
}

#[test]
fn config_serializes_matrix_as_rows() {
    let config = ReachabilityConfig::new(RelationMatrix::from_rows(&[[0, 1], [0, 0]]).unwrap());
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["graph"], serde_json::json!([[0, 1], [0, 0]]));

    let parsed: ReachabilityConfig = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, config);
}
