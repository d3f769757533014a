//! Tests of the connectivity verdicts.

use crate::components::{ConnectivityStatus, analyze_connectivity, weak_components};
use crate::matrix::RelationMatrix;
use crate::test_utils::{arb_relation, init_logger, mk_set};
use proptest::prelude::*;

#[test]
fn undirected_connected_path() {
    init_logger();
    let graph = RelationMatrix::from_rows(&[[0, 1, 0], [1, 0, 1], [0, 1, 0]]).unwrap();
    let report = analyze_connectivity(&graph, false).unwrap();
    assert!(report.is_connected);
    assert_eq!(report.status, ConnectivityStatus::Connected);
    assert_eq!(report.components, vec![mk_set(&[0, 1, 2])]);
    assert_eq!(report.weak_components, None);
}

#[test]
fn undirected_with_isolated_vertex() {
    init_logger();
    let graph = RelationMatrix::from_rows(&[
        [0, 1, 0, 0],
        [1, 0, 0, 0],
        [0, 0, 0, 1],
        [0, 0, 1, 0],
    ])
    .unwrap();
    let report = analyze_connectivity(&graph, false).unwrap();
    assert!(!report.is_connected);
    assert_eq!(report.status, ConnectivityStatus::Disconnected);
    assert_eq!(report.components, vec![mk_set(&[0, 1]), mk_set(&[2, 3])]);
}

#[test]
fn undirected_analysis_ignores_edge_direction() {
    let graph = RelationMatrix::from_rows(&[[0, 1, 0], [0, 0, 0], [0, 1, 0]]).unwrap();
    let report = analyze_connectivity(&graph, false).unwrap();
    assert_eq!(report.status, ConnectivityStatus::Connected);
}

#[test]
fn directed_cycle_is_strongly_connected() {
    init_logger();
    let graph = RelationMatrix::from_rows(&[[0, 1, 0], [0, 0, 1], [1, 0, 0]]).unwrap();
    let report = analyze_connectivity(&graph, true).unwrap();
    assert!(report.is_connected);
    assert_eq!(report.status, ConnectivityStatus::StronglyConnected);
    assert_eq!(report.components, vec![mk_set(&[0, 1, 2])]);
    assert_eq!(report.weak_components, Some(vec![mk_set(&[0, 1, 2])]));
}

#[test]
fn directed_chain_is_weakly_connected() {
    init_logger();
    let graph = RelationMatrix::from_rows(&[[0, 1, 0], [0, 0, 1], [0, 0, 0]]).unwrap();
    let report = analyze_connectivity(&graph, true).unwrap();
    assert!(!report.is_connected);
    assert_eq!(report.status, ConnectivityStatus::WeaklyConnected);
    assert_eq!(report.components.len(), 3);
    assert_eq!(report.weak_components, Some(vec![mk_set(&[0, 1, 2])]));
}

#[test]
fn directed_disconnected() {
    init_logger();
    let graph = RelationMatrix::from_rows(&[[0, 1, 0], [1, 0, 0], [0, 0, 0]]).unwrap();
    let report = analyze_connectivity(&graph, true).unwrap();
    assert_eq!(report.status, ConnectivityStatus::Disconnected);
    assert_eq!(report.components, vec![mk_set(&[0, 1]), mk_set(&[2])]);
    assert_eq!(ConnectivityStatus::Disconnected.to_string(), "disconnected");
}

proptest! {
    #[test]
    fn weak_components_of_symmetric_closure_agree(graph in arb_relation()) {
        let direct = weak_components(&graph).unwrap();
        let symmetric = weak_components(&graph.symmetrized()).unwrap();
        prop_assert_eq!(direct, symmetric);
    }

    #[test]
    fn strong_connectivity_implies_weak(graph in arb_relation()) {
        let report = analyze_connectivity(&graph, true).unwrap();
        let weak = report.weak_components.unwrap();
        prop_assert!(report.components.len() >= weak.len());
        if report.is_connected {
            prop_assert_eq!(weak.len(), 1);
        }
    }
}
