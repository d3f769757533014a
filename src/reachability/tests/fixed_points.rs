//! Tests of the reachability fixed points on small hand-made graphs.

use crate::matrix::{RelationMatrix, VertexSet};
use crate::reachability::{
    BackwardReachability, ForwardReachability, ReachabilityConfig, UndirectedReachability,
};
use crate::test_utils::{init_logger, mk_set};
use cancel_this::Cancellable;
use computation_process::Algorithm;

/// `A → B → C`, `C → B`, `D → C` and an isolated `E`.
fn example_graph() -> RelationMatrix {
    RelationMatrix::from_rows(&[
        [0, 1, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 1, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 0, 0, 0],
    ])
    .unwrap()
}

#[test]
fn forward_reachability() -> Cancellable<()> {
    init_logger();
    let graph = example_graph();
    let reachable = ForwardReachability::run(&graph, mk_set(&[0]))?;
    assert_eq!(reachable, mk_set(&[0, 1, 2]));

    let reachable = ForwardReachability::run(&graph, mk_set(&[4]))?;
    assert_eq!(reachable, mk_set(&[4]));
    Ok(())
}

#[test]
fn backward_reachability() -> Cancellable<()> {
    init_logger();
    let graph = example_graph();
    let reachable = BackwardReachability::run(&graph, mk_set(&[2]))?;
    assert_eq!(reachable, mk_set(&[0, 1, 2, 3]));

    let reachable = BackwardReachability::run(&graph, mk_set(&[0]))?;
    assert_eq!(reachable, mk_set(&[0]));
    Ok(())
}

#[test]
fn undirected_reachability() -> Cancellable<()> {
    init_logger();
    let graph = example_graph();
    let reachable = UndirectedReachability::run(&graph, mk_set(&[3]))?;
    assert_eq!(reachable, mk_set(&[0, 1, 2, 3]));

    let reachable = UndirectedReachability::run(&graph, VertexSet::empty())?;
    assert!(reachable.is_empty());
    Ok(())
}

#[test]
fn universe_restricts_exploration() -> Cancellable<()> {
    init_logger();
    let config = ReachabilityConfig::restricted(example_graph(), mk_set(&[0, 1, 3]));
    let reachable = ForwardReachability::run(config, mk_set(&[0]))?;
    assert_eq!(reachable, mk_set(&[0, 1]));
    Ok(())
}

#[test]
fn iteration_limit_cancels() {
    init_logger();
    let mut config = ReachabilityConfig::from(&example_graph());
    config.max_iterations = 1;
    let result = ForwardReachability::run(config, mk_set(&[0]));
    assert!(result.is_err());
}
