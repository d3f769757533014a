//! Validated matrix types shared by all algorithms.
//!
//! Inputs arrive as untyped nested arrays. They are checked exactly once, when they are
//! converted into one of the types of this module, and every algorithm afterwards relies on
//! the invariants established here:
//!
//!  - [`BooleanMatrix`]: a rectangular `rows × columns` grid of `0`/`1` values, both sides in
//!    `1..=MAX_MATRIX_DIMENSION`.
//!  - [`RelationMatrix`]: a square boolean matrix with `MIN_VERTICES..=MAX_VERTICES` rows. It
//!    encodes a binary relation or, equivalently, the adjacency of a directed graph.
//!  - [`WeightMatrix`]: a square grid of finite, non-negative weights.
//!  - [`VertexSet`]: a small bitset of vertex indices of one [`RelationMatrix`].

use crate::GraphError;
use std::fmt::{Display, Formatter};

/// The smallest number of vertices (elements) of a relation or graph.
pub const MIN_VERTICES: usize = 2;
/// The largest number of vertices (elements) of a relation or graph.
///
/// This also bounds the factorial search of the subgraph matcher.
pub const MAX_VERTICES: usize = 7;
/// The largest side of a rectangular boolean matrix.
pub const MAX_MATRIX_DIMENSION: usize = 10;

/// A rectangular matrix over `{0, 1}`.
///
/// Serialized as nested rows of `0`/`1` values and validated again when deserialized.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<u8>>")
)]
pub struct BooleanMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl BooleanMatrix {
    /// Create a zero matrix of the given shape.
    pub fn zeros(rows: usize, columns: usize) -> Result<BooleanMatrix, GraphError> {
        check_range(rows, 1, MAX_MATRIX_DIMENSION)?;
        check_range(columns, 1, MAX_MATRIX_DIMENSION)?;
        Ok(BooleanMatrix {
            rows,
            columns,
            cells: vec![false; rows * columns],
        })
    }

    /// Build a matrix of a shape taken from other, already validated, matrices.
    pub(crate) fn from_fn(
        rows: usize,
        columns: usize,
        cell: impl Fn(usize, usize) -> bool,
    ) -> BooleanMatrix {
        let cells = (0..rows)
            .flat_map(|i| (0..columns).map(move |j| (i, j)))
            .map(|(i, j)| cell(i, j))
            .collect();
        BooleanMatrix {
            rows,
            columns,
            cells,
        }
    }

    /// Validate a nested array of integers into a [`BooleanMatrix`].
    ///
    /// Fails with [`GraphError::DimensionMismatch`] for empty or ragged input,
    /// [`GraphError::UnsupportedSize`] for oversized input and [`GraphError::InvalidValue`]
    /// for any cell that is not `0` or `1`.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<BooleanMatrix, GraphError> {
        let Some(first) = rows.first() else {
            return Err(GraphError::DimensionMismatch(
                "matrix has no rows".to_string(),
            ));
        };
        let columns = first.as_ref().len();
        if columns == 0 {
            return Err(GraphError::DimensionMismatch(
                "matrix has no columns".to_string(),
            ));
        }

        let mut matrix = BooleanMatrix::zeros(rows.len(), columns)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(GraphError::DimensionMismatch(format!(
                    "row {i} has {} values, expected {columns}",
                    row.len()
                )));
            }
            for (j, value) in row.iter().enumerate() {
                match value {
                    0 => {}
                    1 => matrix.set(i, j, true),
                    other => {
                        return Err(GraphError::InvalidValue {
                            row: i,
                            column: j,
                            reason: format!("expected 0 or 1, found {other}"),
                        });
                    }
                }
            }
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// # Panics
    ///
    /// Panics when `(row, column)` is outside of the matrix.
    pub fn get(&self, row: usize, column: usize) -> bool {
        assert!(row < self.rows && column < self.columns);
        self.cells[row * self.columns + column]
    }

    /// # Panics
    ///
    /// Panics when `(row, column)` is outside of the matrix.
    pub fn set(&mut self, row: usize, column: usize, value: bool) {
        assert!(row < self.rows && column < self.columns);
        self.cells[row * self.columns + column] = value;
    }

    /// The number of `1` cells.
    pub fn count_ones(&self) -> usize {
        self.cells.iter().filter(|it| **it).count()
    }

    pub fn transpose(&self) -> BooleanMatrix {
        let mut result = BooleanMatrix {
            rows: self.columns,
            columns: self.rows,
            cells: vec![false; self.cells.len()],
        };
        for i in 0..self.rows {
            for j in 0..self.columns {
                result.set(j, i, self.get(i, j));
            }
        }
        result
    }

    /// The shape formatted as `rows×columns`.
    pub fn shape_label(&self) -> String {
        format!("{}×{}", self.rows, self.columns)
    }

    /// Export the matrix back into nested `0`/`1` rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|i| (0..self.columns).map(|j| u8::from(self.get(i, j))).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<i64>>> for BooleanMatrix {
    type Error = GraphError;

    fn try_from(value: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        BooleanMatrix::from_rows(&value)
    }
}

impl From<BooleanMatrix> for Vec<Vec<u8>> {
    fn from(value: BooleanMatrix) -> Self {
        value.to_rows()
    }
}

impl Display for BooleanMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|it| it.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// A square boolean matrix of a binary relation over `n` elements (or adjacency of a
/// directed graph over `n` vertices), with `MIN_VERTICES <= n <= MAX_VERTICES`.
///
/// Cell `(i, j)` is set iff element `i` relates to element `j` (there is an edge `i → j`).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<u8>>")
)]
pub struct RelationMatrix(BooleanMatrix);

impl TryFrom<Vec<Vec<i64>>> for RelationMatrix {
    type Error = GraphError;

    fn try_from(value: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        RelationMatrix::from_rows(&value)
    }
}

impl From<RelationMatrix> for Vec<Vec<u8>> {
    fn from(value: RelationMatrix) -> Self {
        value.to_rows()
    }
}

impl TryFrom<BooleanMatrix> for RelationMatrix {
    type Error = GraphError;

    fn try_from(value: BooleanMatrix) -> Result<Self, Self::Error> {
        if !value.is_square() {
            return Err(GraphError::DimensionMismatch(format!(
                "matrix must be square, found {}",
                value.shape_label()
            )));
        }
        check_range(value.rows(), MIN_VERTICES, MAX_VERTICES)?;
        Ok(RelationMatrix(value))
    }
}

impl From<RelationMatrix> for BooleanMatrix {
    fn from(value: RelationMatrix) -> Self {
        value.0
    }
}

impl RelationMatrix {
    /// Validate a nested array of integers into a [`RelationMatrix`].
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<RelationMatrix, GraphError> {
        RelationMatrix::try_from(BooleanMatrix::from_rows(rows)?)
    }

    /// The empty relation over `size` elements.
    pub fn empty(size: usize) -> Result<RelationMatrix, GraphError> {
        RelationMatrix::try_from(BooleanMatrix::zeros(size, size)?)
    }

    /// The identity relation over `size` elements.
    pub fn identity(size: usize) -> Result<RelationMatrix, GraphError> {
        let mut result = RelationMatrix::empty(size)?;
        for i in 0..size {
            result.set(i, i, true);
        }
        Ok(result)
    }

    /// Wrap a matrix that is known to be square and of a supported size.
    pub(crate) fn from_square(matrix: BooleanMatrix) -> RelationMatrix {
        debug_assert!(matrix.is_square());
        debug_assert!((MIN_VERTICES..=MAX_VERTICES).contains(&matrix.rows()));
        RelationMatrix(matrix)
    }

    /// The number of elements (vertices).
    pub fn size(&self) -> usize {
        self.0.rows()
    }

    pub fn as_matrix(&self) -> &BooleanMatrix {
        &self.0
    }

    pub fn get(&self, from: usize, to: usize) -> bool {
        self.0.get(from, to)
    }

    pub fn set(&mut self, from: usize, to: usize, value: bool) {
        self.0.set(from, to, value)
    }

    /// All vertices of this relation.
    pub fn vertices(&self) -> VertexSet {
        VertexSet::full(self.size())
    }

    /// The direct successors of `vertex` (the non-zero cells of its row).
    pub fn successors(&self, vertex: usize) -> VertexSet {
        (0..self.size()).filter(|j| self.get(vertex, *j)).collect()
    }

    /// The direct predecessors of `vertex` (the non-zero cells of its column).
    pub fn predecessors(&self, vertex: usize) -> VertexSet {
        (0..self.size()).filter(|i| self.get(*i, vertex)).collect()
    }

    pub fn out_degree(&self, vertex: usize) -> usize {
        self.successors(vertex).len()
    }

    pub fn in_degree(&self, vertex: usize) -> usize {
        self.predecessors(vertex).len()
    }

    /// The number of ordered pairs in the relation (directed edges, self-loops included).
    pub fn pair_count(&self) -> usize {
        self.0.count_ones()
    }

    /// All ordered pairs `(i, j)` of the relation in row-major order.
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        let n = self.size();
        (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .filter(|(i, j)| self.get(*i, *j))
            .collect()
    }

    pub fn is_symmetric(&self) -> bool {
        self.0 == self.0.transpose()
    }

    pub fn has_self_loops(&self) -> bool {
        (0..self.size()).any(|i| self.get(i, i))
    }

    /// The inverse relation.
    pub fn transpose(&self) -> RelationMatrix {
        RelationMatrix(self.0.transpose())
    }

    /// The underlying undirected graph: `(i, j)` is set iff `(i, j)` or `(j, i)` is set.
    pub fn symmetrized(&self) -> RelationMatrix {
        let mut result = self.clone();
        for (i, j) in self.pairs() {
            result.set(j, i, true);
        }
        result
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.0.to_rows()
    }
}

impl Display for RelationMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A square matrix of finite, non-negative edge weights.
///
/// A weight is only meaningful where the paired [`RelationMatrix`] has an edge.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct WeightMatrix {
    size: usize,
    weights: Vec<f64>,
}

impl TryFrom<Vec<Vec<f64>>> for WeightMatrix {
    type Error = GraphError;

    fn try_from(value: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        WeightMatrix::from_rows(&value)
    }
}

impl From<WeightMatrix> for Vec<Vec<f64>> {
    fn from(value: WeightMatrix) -> Self {
        value.weights.chunks(value.size).map(|row| row.to_vec()).collect()
    }
}

impl WeightMatrix {
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<WeightMatrix, GraphError> {
        let size = rows.len();
        check_range(size, MIN_VERTICES, MAX_VERTICES)?;
        let mut weights = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(GraphError::DimensionMismatch(format!(
                    "weight matrix must be square, row {i} has {} values, expected {size}",
                    row.len()
                )));
            }
            for (j, weight) in row.iter().enumerate() {
                if !weight.is_finite() || *weight < 0.0 {
                    return Err(GraphError::InvalidValue {
                        row: i,
                        column: j,
                        reason: format!("weight must be a finite non-negative number, found {weight}"),
                    });
                }
                weights.push(*weight);
            }
        }
        Ok(WeightMatrix { size, weights })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(from < self.size && to < self.size);
        self.weights[from * self.size + to]
    }

    /// Check that this weight matrix can be paired with `adjacency`.
    pub fn ensure_pairs_with(&self, adjacency: &RelationMatrix) -> Result<(), GraphError> {
        if self.size != adjacency.size() {
            return Err(GraphError::DimensionMismatch(format!(
                "weight matrix is {0}×{0}, adjacency matrix is {1}×{1}",
                self.size,
                adjacency.size()
            )));
        }
        Ok(())
    }
}

/// A set of vertex indices of a single [`RelationMatrix`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexSet(u32);

impl VertexSet {
    pub fn empty() -> VertexSet {
        VertexSet(0)
    }

    /// The set `{0, ..., size - 1}`.
    pub fn full(size: usize) -> VertexSet {
        assert!(size < 32);
        VertexSet((1u32 << size) - 1)
    }

    pub fn singleton(vertex: usize) -> VertexSet {
        let mut result = VertexSet::empty();
        result.insert(vertex);
        result
    }

    pub fn contains(&self, vertex: usize) -> bool {
        vertex < 32 && self.0 & (1 << vertex) != 0
    }

    pub fn insert(&mut self, vertex: usize) {
        assert!(vertex < 32);
        self.0 |= 1 << vertex;
    }

    pub fn remove(&mut self, vertex: usize) {
        if vertex < 32 {
            self.0 &= !(1 << vertex);
        }
    }

    pub fn union(&self, other: &VertexSet) -> VertexSet {
        VertexSet(self.0 | other.0)
    }

    pub fn intersect(&self, other: &VertexSet) -> VertexSet {
        VertexSet(self.0 & other.0)
    }

    pub fn minus(&self, other: &VertexSet) -> VertexSet {
        VertexSet(self.0 & !other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// The smallest vertex of the set.
    pub fn first(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }

    /// Vertices in increasing order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        let bits = self.0;
        (0..32usize).filter(move |v| bits & (1 << v) != 0)
    }

    pub fn to_vec(self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl FromIterator<usize> for VertexSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut result = VertexSet::empty();
        for vertex in iter {
            result.insert(vertex);
        }
        result
    }
}

fn check_range(size: usize, min: usize, max: usize) -> Result<(), GraphError> {
    if size < min || size > max {
        Err(GraphError::UnsupportedSize { size, min, max })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BooleanMatrix, RelationMatrix, VertexSet, WeightMatrix};
    use crate::GraphError;

    #[test]
    fn boolean_matrix_validation() {
        let matrix = BooleanMatrix::from_rows(&[vec![0, 1, 1], vec![1, 0, 0]]).unwrap();
        assert_eq!((matrix.rows(), matrix.columns()), (2, 3));
        assert!(matrix.get(0, 2));
        assert_eq!(matrix.count_ones(), 3);
        assert_eq!(matrix.shape_label(), "2×3");
        assert_eq!(matrix.to_string(), "0 1 1\n1 0 0");

        let ragged = BooleanMatrix::from_rows(&[vec![0, 1], vec![1]]);
        assert!(matches!(ragged, Err(GraphError::DimensionMismatch(_))));

        let empty: [Vec<i64>; 0] = [];
        assert!(matches!(
            BooleanMatrix::from_rows(&empty),
            Err(GraphError::DimensionMismatch(_))
        ));

        let invalid = BooleanMatrix::from_rows(&[[0, 2], [1, 0]]);
        assert!(matches!(
            invalid,
            Err(GraphError::InvalidValue {
                row: 0,
                column: 1,
                ..
            })
        ));

        let too_wide = BooleanMatrix::from_rows(&[vec![0; 11]]);
        assert!(matches!(too_wide, Err(GraphError::UnsupportedSize { size: 11, .. })));
    }

    #[test]
    fn relation_matrix_must_be_square_and_bounded() {
        let not_square = RelationMatrix::from_rows(&[[0, 1, 0], [1, 0, 0]]);
        assert!(matches!(not_square, Err(GraphError::DimensionMismatch(_))));

        let too_small = RelationMatrix::from_rows(&[[1]]);
        assert!(matches!(
            too_small,
            Err(GraphError::UnsupportedSize { size: 1, min: 2, max: 7 })
        ));

        let too_large = RelationMatrix::empty(8);
        assert!(matches!(too_large, Err(GraphError::UnsupportedSize { size: 8, .. })));

        assert!(RelationMatrix::empty(7).is_ok());
    }

    #[test]
    fn relation_matrix_queries() {
        let r = RelationMatrix::from_rows(&[[0, 1, 1], [0, 1, 0], [1, 0, 0]]).unwrap();
        assert_eq!(r.successors(0).to_vec(), vec![1, 2]);
        assert_eq!(r.predecessors(0).to_vec(), vec![2]);
        assert_eq!(r.out_degree(0), 2);
        assert_eq!(r.in_degree(1), 2);
        assert_eq!(r.pairs(), vec![(0, 1), (0, 2), (1, 1), (2, 0)]);
        assert!(r.has_self_loops());
        assert!(!r.is_symmetric());
        assert!(r.symmetrized().is_symmetric());
        assert_eq!(r.transpose().transpose(), r);
    }

    #[test]
    fn weight_matrix_validation() {
        let weights = WeightMatrix::from_rows(&[[0.0, 2.5], [1.0, 0.0]]).unwrap();
        assert_eq!(weights.get(0, 1), 2.5);

        let negative = WeightMatrix::from_rows(&[[0.0, -1.0], [1.0, 0.0]]);
        assert!(matches!(negative, Err(GraphError::InvalidValue { row: 0, column: 1, .. })));

        let infinite = WeightMatrix::from_rows(&[[0.0, f64::INFINITY], [1.0, 0.0]]);
        assert!(matches!(infinite, Err(GraphError::InvalidValue { .. })));

        let adjacency = RelationMatrix::empty(3).unwrap();
        assert!(matches!(
            weights.ensure_pairs_with(&adjacency),
            Err(GraphError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn vertex_set_operations() {
        let a: VertexSet = [0, 2, 3].into_iter().collect();
        let b: VertexSet = [2, 4].into_iter().collect();
        assert_eq!(a.union(&b).to_vec(), vec![0, 2, 3, 4]);
        assert_eq!(a.intersect(&b).to_vec(), vec![2]);
        assert_eq!(a.minus(&b).to_vec(), vec![0, 3]);
        assert_eq!(a.first(), Some(0));
        assert_eq!(VertexSet::empty().first(), None);
        assert_eq!(VertexSet::full(3).len(), 3);
        assert!(VertexSet::singleton(5).contains(5));
    }
}
