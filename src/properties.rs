//! Classification of binary relations.
//!
//! The six basic properties are decided with relation algebra (transpose, intersection,
//! union, product). The derived relation types are reported as the full applicable set, since
//! they are not mutually exclusive. When a property fails, [`PropertyViolations`] lists the
//! pairs (or triples) of elements responsible for it.

use crate::matrix::RelationMatrix;
use log::debug;
use std::fmt::{Display, Formatter};

/// The maximal number of transitivity counter-examples reported in [`PropertyViolations`].
pub const MAX_TRANSITIVITY_WITNESSES: usize = 5;

/// Outcome of the six basic property checks.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationProperties {
    pub reflexive: bool,
    pub irreflexive: bool,
    pub symmetric: bool,
    pub antisymmetric: bool,
    pub transitive: bool,
    pub total: bool,
}

/// A classical relation type derived from [`RelationProperties`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelationType {
    /// Reflexive, symmetric and transitive.
    #[cfg_attr(feature = "serde", serde(rename = "Equivalence Relation"))]
    Equivalence,
    /// Reflexive, antisymmetric and transitive.
    #[cfg_attr(feature = "serde", serde(rename = "Partial Order"))]
    PartialOrder,
    /// Irreflexive, antisymmetric and transitive.
    #[cfg_attr(feature = "serde", serde(rename = "Strict Partial Order"))]
    StrictPartialOrder,
}

impl Display for RelationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RelationType::Equivalence => "Equivalence Relation",
            RelationType::PartialOrder => "Partial Order",
            RelationType::StrictPartialOrder => "Strict Partial Order",
        };
        write!(f, "{name}")
    }
}

/// Elements responsible for failed properties. Every list is empty when the corresponding
/// property holds.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyViolations {
    /// Elements `x` with `(x, x) ∉ R`.
    pub missing_reflexive: Vec<usize>,
    /// Elements `x` with `(x, x) ∈ R`.
    pub present_reflexive: Vec<usize>,
    /// Pairs `(x, y) ∈ R` with `(y, x) ∉ R`.
    pub asymmetric_pairs: Vec<(usize, usize)>,
    /// Pairs `x < y` with both `(x, y)` and `(y, x)` in `R`.
    pub antisymmetry_violations: Vec<(usize, usize)>,
    /// Triples `(x, y, z)` with `(x, y), (y, z) ∈ R` and `(x, z) ∉ R`, at most
    /// [`MAX_TRANSITIVITY_WITNESSES`] of them.
    pub transitivity_violations: Vec<(usize, usize, usize)>,
    /// Pairs `x < y` with neither `(x, y)` nor `(y, x)` in `R`.
    pub incomparable_pairs: Vec<(usize, usize)>,
}

/// Full classification report of a relation.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Classification {
    pub properties: RelationProperties,
    pub relation_types: Vec<RelationType>,
    pub violations: PropertyViolations,
}

impl From<&RelationMatrix> for RelationProperties {
    fn from(r: &RelationMatrix) -> Self {
        let identity = identity_like(r);
        let inverse = r.transpose();
        RelationProperties {
            reflexive: identity.is_subset_of(r),
            irreflexive: r.intersection(&identity).pair_count() == 0,
            symmetric: *r == inverse,
            antisymmetric: r.intersection(&inverse).is_subset_of(&identity),
            transitive: r.product(r).is_subset_of(r),
            total: r.union(&inverse).union(&identity).pair_count() == r.size() * r.size(),
        }
    }
}

impl RelationProperties {
    /// All relation types implied by these properties.
    pub fn relation_types(&self) -> Vec<RelationType> {
        let mut result = Vec::new();
        if self.reflexive && self.symmetric && self.transitive {
            result.push(RelationType::Equivalence);
        }
        if self.reflexive && self.antisymmetric && self.transitive {
            result.push(RelationType::PartialOrder);
        }
        if self.irreflexive && self.antisymmetric && self.transitive {
            result.push(RelationType::StrictPartialOrder);
        }
        result
    }
}

impl From<&RelationMatrix> for PropertyViolations {
    fn from(r: &RelationMatrix) -> Self {
        let n = r.size();
        let mut result = PropertyViolations::default();
        for x in 0..n {
            if r.get(x, x) {
                result.present_reflexive.push(x);
            } else {
                result.missing_reflexive.push(x);
            }
        }
        for (x, y) in r.pairs() {
            if !r.get(y, x) {
                result.asymmetric_pairs.push((x, y));
            }
        }
        for x in 0..n {
            for y in (x + 1)..n {
                match (r.get(x, y), r.get(y, x)) {
                    (true, true) => result.antisymmetry_violations.push((x, y)),
                    (false, false) => result.incomparable_pairs.push((x, y)),
                    _ => {}
                }
            }
        }
        'search: for (x, y) in r.pairs() {
            for z in r.successors(y).iter() {
                if !r.get(x, z) {
                    result.transitivity_violations.push((x, y, z));
                    if result.transitivity_violations.len() == MAX_TRANSITIVITY_WITNESSES {
                        break 'search;
                    }
                }
            }
        }
        result
    }
}

/// Check all properties of `r`, derive its relation types and collect violation witnesses.
pub fn classify(r: &RelationMatrix) -> Classification {
    let properties = RelationProperties::from(r);
    let relation_types = properties.relation_types();
    let violations = PropertyViolations::from(r);
    debug!("Relation over {} elements classified as {properties:?}.", r.size());
    Classification {
        properties,
        relation_types,
        violations,
    }
}

fn identity_like(r: &RelationMatrix) -> RelationMatrix {
    let mut identity = r.clone();
    for i in 0..r.size() {
        for j in 0..r.size() {
            identity.set(i, j, i == j);
        }
    }
    identity
}

#[cfg(test)]
mod tests {
    use super::{PropertyViolations, RelationProperties, RelationType, classify};
    use crate::closure::{reflexive_closure, symmetric_closure, transitive_closure};
    use crate::matrix::RelationMatrix;
    use crate::test_utils::{arb_relation, init_logger};
    use proptest::prelude::*;

    #[test]
    fn chain_is_only_antisymmetric_and_irreflexive() {
        init_logger();
        let r = RelationMatrix::from_rows(&[[0, 1, 0], [0, 0, 1], [0, 0, 0]]).unwrap();
        let report = classify(&r);
        let properties = report.properties;
        assert!(!properties.reflexive);
        assert!(properties.irreflexive);
        assert!(!properties.symmetric);
        assert!(properties.antisymmetric);
        // (0, 1) and (1, 2) are in R, but (0, 2) is not.
        assert!(!properties.transitive);
        assert!(!properties.total);
        assert!(report.relation_types.is_empty());
        assert_eq!(report.violations.transitivity_violations, vec![(0, 1, 2)]);
        assert_eq!(report.violations.incomparable_pairs, vec![(0, 2)]);
        assert_eq!(report.violations.missing_reflexive, vec![0, 1, 2]);
    }

    #[test]
    fn equivalence_relation() {
        let r = RelationMatrix::from_rows(&[[1, 1, 0], [1, 1, 0], [0, 0, 1]]).unwrap();
        let report = classify(&r);
        assert_eq!(report.relation_types, vec![RelationType::Equivalence]);
        assert_eq!(report.violations.antisymmetry_violations, vec![(0, 1)]);
        assert!(report.violations.asymmetric_pairs.is_empty());
    }

    #[test]
    fn total_order_is_partial_order() {
        let r = RelationMatrix::from_rows(&[[1, 1, 1], [0, 1, 1], [0, 0, 1]]).unwrap();
        let report = classify(&r);
        assert!(report.properties.total);
        assert_eq!(report.relation_types, vec![RelationType::PartialOrder]);
        assert_eq!(
            report.violations.asymmetric_pairs,
            vec![(0, 1), (0, 2), (1, 2)]
        );
        assert!(report.violations.incomparable_pairs.is_empty());
    }

    #[test]
    fn strict_order() {
        let r = RelationMatrix::from_rows(&[[0, 1, 1], [0, 0, 1], [0, 0, 0]]).unwrap();
        let report = classify(&r);
        assert_eq!(report.relation_types, vec![RelationType::StrictPartialOrder]);
        assert_eq!(RelationType::StrictPartialOrder.to_string(), "Strict Partial Order");
    }

    #[test]
    fn transitivity_witnesses_are_bounded() {
        // A cycle over seven elements misses many transitive pairs.
        let mut r = RelationMatrix::empty(7).unwrap();
        for i in 0..7 {
            r.set(i, (i + 1) % 7, true);
        }
        let violations = PropertyViolations::from(&r);
        assert_eq!(violations.transitivity_violations.len(), 5);
    }

    fn brute_force(r: &RelationMatrix) -> RelationProperties {
        let n = r.size();
        let all = |f: &dyn Fn(usize, usize) -> bool| (0..n).all(|i| (0..n).all(|j| f(i, j)));
        RelationProperties {
            reflexive: (0..n).all(|i| r.get(i, i)),
            irreflexive: (0..n).all(|i| !r.get(i, i)),
            symmetric: all(&|i, j| r.get(i, j) == r.get(j, i)),
            antisymmetric: all(&|i, j| i == j || !(r.get(i, j) && r.get(j, i))),
            transitive: all(&|i, j| (0..n).all(|k| !(r.get(i, j) && r.get(j, k)) || r.get(i, k))),
            total: all(&|i, j| i == j || r.get(i, j) || r.get(j, i)),
        }
    }

    proptest! {
        #[test]
        fn algebraic_checks_match_definitions(r in arb_relation()) {
            prop_assert_eq!(RelationProperties::from(&r), brute_force(&r));
        }

        #[test]
        fn closures_establish_their_property(r in arb_relation()) {
            prop_assert!(RelationProperties::from(&reflexive_closure(&r)).reflexive);
            prop_assert!(RelationProperties::from(&symmetric_closure(&r)).symmetric);
            prop_assert!(RelationProperties::from(&transitive_closure(&r)).transitive);
        }
    }
}
