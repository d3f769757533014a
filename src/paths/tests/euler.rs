use crate::paths::{EulerKind, eulerian_path};
use crate::test_utils::{arb_relation, init_logger, mk_relation};
use proptest::prelude::*;

#[test]
fn balanced_graph_has_circuit() {
    init_logger();
    // Two cycles sharing `A`: A <-> B and A <-> C.
    let graph = mk_relation(&[[0, 1, 1], [1, 0, 0], [1, 0, 0]]);
    let report = eulerian_path(&graph).unwrap();
    assert!(report.has_eulerian_path);
    assert_eq!(report.kind, Some(EulerKind::Circuit));
    assert_eq!(report.start_vertex, Some(0));
    assert_eq!(report.end_vertex, Some(0));
    assert_eq!(report.path, vec![0, 1, 0, 2, 0]);
    assert_eq!(report.in_degrees, vec![2, 1, 1]);
    assert_eq!(report.out_degrees, vec![2, 1, 1]);
}

#[test]
fn removing_one_edge_opens_the_circuit() {
    init_logger();
    // As above, without C -> A.
    let graph = mk_relation(&[[0, 1, 1], [1, 0, 0], [0, 0, 0]]);
    let report = eulerian_path(&graph).unwrap();
    assert!(report.has_eulerian_path);
    assert_eq!(report.kind, Some(EulerKind::Path));
    assert_eq!(report.start_vertex, Some(0));
    assert_eq!(report.end_vertex, Some(2));
    assert_eq!(report.path, vec![0, 1, 0, 2]);
    assert_eq!(EulerKind::Path.to_string(), "path");
}

#[test]
fn self_loops_are_traversed() {
    let graph = mk_relation(&[[1, 1], [1, 0]]);
    let report = eulerian_path(&graph).unwrap();
    assert_eq!(report.kind, Some(EulerKind::Circuit));
    assert_eq!(report.path, vec![0, 0, 1, 0]);
}

#[test]
fn isolated_vertices_are_ignored() {
    let graph = mk_relation(&[[0, 0, 0], [0, 0, 1], [0, 1, 0]]);
    let report = eulerian_path(&graph).unwrap();
    assert!(report.has_eulerian_path);
    assert_eq!(report.start_vertex, Some(1));
    assert_eq!(report.path, vec![1, 2, 1]);
}

#[test]
fn failed_conditions_are_reported() {
    init_logger();
    let report = eulerian_path(&mk_relation(&[[0, 0], [0, 0]])).unwrap();
    assert!(!report.has_eulerian_path);
    assert_eq!(report.reason, "graph has no edges");

    let disconnected = mk_relation(&[[0, 1, 0, 0], [1, 0, 0, 0], [0, 0, 0, 1], [0, 0, 1, 0]]);
    let report = eulerian_path(&disconnected).unwrap();
    assert!(!report.has_eulerian_path);
    assert_eq!(report.reason, "graph not connected");
    assert!(report.path.is_empty());
    assert_eq!(report.in_degrees, vec![1, 1, 1, 1]);

    let fork = mk_relation(&[[0, 1, 1], [0, 0, 0], [0, 0, 0]]);
    let report = eulerian_path(&fork).unwrap();
    assert_eq!(report.reason, "vertex A has in-degree 0 and out-degree 2");

    // A: +1, B: -1, C: -1, D: +1.
    let unbalanced = mk_relation(&[[0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0], [1, 0, 0, 0]]);
    let report = eulerian_path(&unbalanced).unwrap();
    assert_eq!(report.reason, "more than two unbalanced vertices");
    assert_eq!(report.kind, None);
}

proptest! {
    #[test]
    fn trails_use_every_edge_once(graph in arb_relation()) {
        let report = eulerian_path(&graph).unwrap();
        if report.has_eulerian_path {
            prop_assert_eq!(report.path.len(), graph.pair_count() + 1);
            let mut used = graph.clone();
            for pair in report.path.windows(2) {
                prop_assert!(used.get(pair[0], pair[1]));
                used.set(pair[0], pair[1], false);
            }
            prop_assert_eq!(used.pair_count(), 0);
            let closed = report.path.first() == report.path.last();
            prop_assert_eq!(closed, report.kind == Some(EulerKind::Circuit));
        } else {
            prop_assert!(report.path.is_empty());
        }
    }
}
