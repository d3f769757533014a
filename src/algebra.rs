//! Boolean algebra on relation matrices.
//!
//! All operations work in the idempotent boolean semiring (`OR` in place of `+`, `AND` in
//! place of `×`), so no cell ever exceeds `1`. Operations never mutate their arguments.

use crate::GraphError;
use crate::matrix::{BooleanMatrix, RelationMatrix};
use log::trace;

/// The largest supported exponent of [`power`].
pub const MAX_EXPONENT: usize = 10;
/// The exponent used when a power request does not specify one.
pub const DEFAULT_MAX_POWER: usize = 3;

/// Cell-wise `A OR B`. Requires equal shapes.
pub fn elementwise_or(a: &BooleanMatrix, b: &BooleanMatrix) -> Result<BooleanMatrix, GraphError> {
    ensure_same_shape(a, b)?;
    Ok(cellwise(a, b, |x, y| x || y))
}

/// Cell-wise `A AND B`. Requires equal shapes.
pub fn elementwise_and(a: &BooleanMatrix, b: &BooleanMatrix) -> Result<BooleanMatrix, GraphError> {
    ensure_same_shape(a, b)?;
    Ok(cellwise(a, b, |x, y| x && y))
}

/// Boolean matrix product: `result[i][j] = OR_k (A[i][k] AND B[k][j])`.
///
/// Requires `columns(A) = rows(B)`.
pub fn boolean_multiply(
    a: &BooleanMatrix,
    b: &BooleanMatrix,
) -> Result<BooleanMatrix, GraphError> {
    if a.columns() != b.rows() {
        return Err(GraphError::DimensionMismatch(format!(
            "cannot multiply {} by {}, columns of A must equal rows of B",
            a.shape_label(),
            b.shape_label()
        )));
    }
    Ok(product(a, b))
}

/// Relation composition `R∘S`: `(a, c) ∈ R∘S` iff there is `b` with `(a, b) ∈ S` and
/// `(b, c) ∈ R`. The relation `S` is applied first, so the result is the product `S·R`.
///
/// Requires `columns(R) = rows(S)`, and the product `S·R` must be defined as well
/// (`columns(S) = rows(R)`).
pub fn compose(r: &BooleanMatrix, s: &BooleanMatrix) -> Result<BooleanMatrix, GraphError> {
    if r.columns() != s.rows() || s.columns() != r.rows() {
        return Err(GraphError::DimensionMismatch(format!(
            "cannot compose R ({}) with S ({}), columns of each must equal rows of the other",
            r.shape_label(),
            s.shape_label()
        )));
    }
    Ok(product(s, r))
}

/// The powers `R¹ ... Rᵏ` of a relation, where `R¹ = R` and `Rⁱ⁺¹ = Rⁱ·R`.
///
/// Fails with [`GraphError::InvalidExponent`] unless `1 <= k <= MAX_EXPONENT`.
pub fn power(r: &RelationMatrix, k: i64) -> Result<Vec<RelationMatrix>, GraphError> {
    let exponent = usize::try_from(k)
        .ok()
        .filter(|it| (1..=MAX_EXPONENT).contains(it))
        .ok_or(GraphError::InvalidExponent(k))?;

    let mut powers = Vec::with_capacity(exponent);
    powers.push(r.clone());
    for i in 2..=exponent {
        let next = powers[powers.len() - 1].product(r);
        trace!("R^{i} has {} pairs.", next.pair_count());
        powers.push(next);
    }
    Ok(powers)
}

/// The complement of a relation (graph): every off-diagonal cell is flipped, while
/// self-loops on the diagonal are preserved unchanged.
pub fn complement(r: &RelationMatrix) -> RelationMatrix {
    let mut result = r.clone();
    for i in 0..r.size() {
        for j in 0..r.size() {
            if i != j {
                result.set(i, j, !r.get(i, j));
            }
        }
    }
    result
}

impl RelationMatrix {
    /// `R ∪ S` over the same set of elements.
    ///
    /// # Panics
    ///
    /// Panics when the two relations have a different number of elements.
    pub fn union(&self, other: &RelationMatrix) -> RelationMatrix {
        RelationMatrix::from_square(cellwise(self.as_matrix(), other.as_matrix(), |x, y| {
            x || y
        }))
    }

    /// `R ∩ S` over the same set of elements.
    ///
    /// # Panics
    ///
    /// Panics when the two relations have a different number of elements.
    pub fn intersection(&self, other: &RelationMatrix) -> RelationMatrix {
        RelationMatrix::from_square(cellwise(self.as_matrix(), other.as_matrix(), |x, y| {
            x && y
        }))
    }

    /// The boolean product `self · other`.
    ///
    /// # Panics
    ///
    /// Panics when the two relations have a different number of elements.
    pub fn product(&self, other: &RelationMatrix) -> RelationMatrix {
        RelationMatrix::from_square(product(self.as_matrix(), other.as_matrix()))
    }

    /// True if every pair of `self` is also a pair of `other`.
    pub fn is_subset_of(&self, other: &RelationMatrix) -> bool {
        self.intersection(other) == *self
    }
}

fn ensure_same_shape(a: &BooleanMatrix, b: &BooleanMatrix) -> Result<(), GraphError> {
    if a.rows() != b.rows() || a.columns() != b.columns() {
        Err(GraphError::DimensionMismatch(format!(
            "matrices must have the same dimensions, found {} and {}",
            a.shape_label(),
            b.shape_label()
        )))
    } else {
        Ok(())
    }
}

fn cellwise(a: &BooleanMatrix, b: &BooleanMatrix, op: impl Fn(bool, bool) -> bool) -> BooleanMatrix {
    assert_eq!((a.rows(), a.columns()), (b.rows(), b.columns()));
    BooleanMatrix::from_fn(a.rows(), a.columns(), |i, j| op(a.get(i, j), b.get(i, j)))
}

fn product(a: &BooleanMatrix, b: &BooleanMatrix) -> BooleanMatrix {
    assert_eq!(a.columns(), b.rows());
    BooleanMatrix::from_fn(a.rows(), b.columns(), |i, j| {
        (0..a.columns()).any(|k| a.get(i, k) && b.get(k, j))
    })
}
