use crate::matrix::{RelationMatrix, VertexSet};
use proptest::prelude::*;

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Creates a vertex set from a list of vertex indices.
///
/// # Example
///
/// `mk_set(&[0, 2])` creates the set `{A, C}`.
pub fn mk_set(vertices: &[usize]) -> VertexSet {
    vertices.iter().copied().collect()
}

/// Creates a relation from `0`/`1` rows, panicking on malformed input.
pub fn mk_relation<R: AsRef<[i64]>>(rows: &[R]) -> RelationMatrix {
    RelationMatrix::from_rows(rows).unwrap()
}

fn arb_rows(size: usize) -> impl Strategy<Value = Vec<Vec<i64>>> {
    prop::collection::vec(prop::collection::vec(0i64..=1, size), size)
}

/// A strategy producing arbitrary relations over 2 to 7 vertices.
pub fn arb_relation() -> impl Strategy<Value = RelationMatrix> {
    (2usize..=7)
        .prop_flat_map(arb_rows)
        .prop_map(|rows| mk_relation(&rows))
}

/// A strategy producing two arbitrary relations over the same vertices.
pub fn arb_relation_pair() -> impl Strategy<Value = (RelationMatrix, RelationMatrix)> {
    (2usize..=7)
        .prop_flat_map(|size| (arb_rows(size), arb_rows(size)))
        .prop_map(|(a, b)| (mk_relation(&a), mk_relation(&b)))
}
