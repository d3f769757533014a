//! Reflexive, symmetric and transitive closures of a relation.

use crate::matrix::RelationMatrix;
use log::{debug, trace};

/// All three closures of one relation, together with the number of pairs each of them added.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Closures {
    pub reflexive: RelationMatrix,
    pub symmetric: RelationMatrix,
    pub transitive: RelationMatrix,
    pub added: AddedPairs,
}

/// The number of pairs that each closure added to the original relation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddedPairs {
    pub reflexive: usize,
    pub symmetric: usize,
    pub transitive: usize,
}

/// Compute every closure of `r`.
pub fn closures(r: &RelationMatrix) -> Closures {
    let reflexive = reflexive_closure(r);
    let symmetric = symmetric_closure(r);
    let transitive = transitive_closure(r);
    let added = AddedPairs {
        reflexive: added_pairs(r, &reflexive),
        symmetric: added_pairs(r, &symmetric),
        transitive: added_pairs(r, &transitive),
    };
    debug!(
        "Closures added {} reflexive, {} symmetric and {} transitive pairs.",
        added.reflexive, added.symmetric, added.transitive
    );
    Closures {
        reflexive,
        symmetric,
        transitive,
        added,
    }
}

/// `R ∪ I`: every diagonal cell is set, off-diagonal cells are unchanged.
pub fn reflexive_closure(r: &RelationMatrix) -> RelationMatrix {
    let mut result = r.clone();
    for i in 0..r.size() {
        result.set(i, i, true);
    }
    result
}

/// `R ∪ Rᵀ`.
pub fn symmetric_closure(r: &RelationMatrix) -> RelationMatrix {
    r.union(&r.transpose())
}

/// Transitive closure using Warshall's algorithm.
///
/// After processing intermediate element `k`, cell `(i, j)` is set iff there is a path from
/// `i` to `j` whose inner vertices are all in `0..=k`.
pub fn transitive_closure(r: &RelationMatrix) -> RelationMatrix {
    let n = r.size();
    let mut result = r.clone();
    for k in 0..n {
        for i in 0..n {
            if !result.get(i, k) {
                continue;
            }
            for j in 0..n {
                if result.get(k, j) {
                    result.set(i, j, true);
                }
            }
        }
        trace!(
            "[intermediate:{k}] Warshall reached {} pairs.",
            result.pair_count()
        );
    }
    result
}

/// Transitive closure as the union `R¹ ∪ ... ∪ Rⁿ` of relation powers.
///
/// Always equal to [`transitive_closure`]; a path of length greater than `n` repeats a
/// vertex and can be shortened.
pub fn transitive_closure_by_powers(r: &RelationMatrix) -> RelationMatrix {
    let mut current = r.clone();
    let mut union = r.clone();
    for _ in 1..r.size() {
        current = current.product(r);
        union = union.union(&current);
    }
    union
}

/// The number of pairs present in `closure` but not in `original`.
pub fn added_pairs(original: &RelationMatrix, closure: &RelationMatrix) -> usize {
    closure.pair_count() - closure.intersection(original).pair_count()
}
