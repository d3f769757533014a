use crate::GraphError;
use crate::matrix::WeightMatrix;
use crate::paths::{Path, path_length};
use crate::test_utils::{init_logger, mk_relation};

fn weights(rows: &[[f64; 3]]) -> WeightMatrix {
    WeightMatrix::from_rows(rows).unwrap()
}

#[test]
fn valid_path_sums_weights() {
    init_logger();
    let adjacency = mk_relation(&[[0, 1, 0], [0, 0, 1], [1, 0, 0]]);
    let weights = weights(&[[0.0, 2.5, 0.0], [0.0, 0.0, 1.5], [4.0, 0.0, 0.0]]);
    let result = path_length(&adjacency, &weights, &[0, 1, 2, 0]).unwrap();
    assert!(result.valid);
    assert_eq!(result.total_length, Some(8.0));
    let edges: Vec<_> = result.edges.iter().map(|it| (it.from, it.to, it.weight)).collect();
    assert_eq!(edges, vec![(0, 1, 2.5), (1, 2, 1.5), (2, 0, 4.0)]);
    assert_eq!(result.reason, None);
}

#[test]
fn single_vertex_path_has_zero_length() {
    let adjacency = mk_relation(&[[0, 1, 0], [0, 0, 1], [1, 0, 0]]);
    let weights = weights(&[[0.0; 3]; 3]);
    let result = path_length(&adjacency, &weights, &[2]).unwrap();
    assert!(result.valid);
    assert_eq!(result.total_length, Some(0.0));
    assert!(result.edges.is_empty());
}

#[test]
fn invalid_paths_have_no_partial_result() {
    init_logger();
    let adjacency = mk_relation(&[[0, 1, 0], [0, 0, 1], [1, 0, 0]]);
    let weights = weights(&[[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]]);

    for path in [vec![0, 1, 0], vec![0, 5], vec![-1, 0], vec![]] {
        let result = path_length(&adjacency, &weights, &path).unwrap();
        assert!(!result.valid, "{path:?} should be invalid");
        assert_eq!(result.total_length, None);
        assert!(result.edges.is_empty());
        assert!(result.reason.is_some());
    }

    let result = path_length(&adjacency, &weights, &[0, 1, 0]).unwrap();
    assert_eq!(result.reason.as_deref(), Some("invalid path: edge B -> A does not exist"));
}

#[test]
fn path_validation_errors() {
    let adjacency = mk_relation(&[[0, 1], [1, 0]]);
    assert_eq!(Path::try_new(&adjacency, &[0, 1, 0]).unwrap().vertices(), &[0, 1, 0]);
    assert!(matches!(
        Path::try_new(&adjacency, &[0, 0]),
        Err(GraphError::InvalidPath(_))
    ));
    assert!(matches!(
        Path::try_new(&adjacency, &[]),
        Err(GraphError::InvalidPath(_))
    ));
}

#[test]
fn weight_matrix_must_match_adjacency() {
    let adjacency = mk_relation(&[[0, 1], [1, 0]]);
    let weights = weights(&[[0.0; 3]; 3]);
    assert!(matches!(
        path_length(&adjacency, &weights, &[0, 1]),
        Err(GraphError::DimensionMismatch(_))
    ));
}
