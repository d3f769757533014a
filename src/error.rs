use cancel_this::Cancelled;
use thiserror::Error;

/// Every way an input can violate the contract of an operation.
///
/// Structural outcomes (a graph without an Eulerian trail, an unreachable vertex, a path that
/// uses a missing edge) are never reported through this type. They are part of the regular
/// result of the corresponding analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A matrix is not square/rectangular, or two matrices cannot be combined.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    /// The matrix is well-formed, but its size is outside of the supported range.
    #[error("unsupported size: {size} (supported range is {min}..={max})")]
    UnsupportedSize { size: usize, min: usize, max: usize },
    /// A cell of a binary matrix is not `0`/`1`, or a weight is not a finite number.
    #[error("invalid value at ({row}, {column}): {reason}")]
    InvalidValue {
        row: usize,
        column: usize,
        reason: String,
    },
    /// The exponent of a relation power is outside of `1..=MAX_EXPONENT`.
    #[error("invalid exponent {0} (expected 1..={max})", max = crate::algebra::MAX_EXPONENT)]
    InvalidExponent(i64),
    /// A shortest-path query was given an edge with a negative weight.
    #[error("edge {origin} -> {target} has negative weight {weight}")]
    NegativeWeight {
        origin: String,
        target: String,
        weight: f64,
    },
    /// A path references an unknown vertex or uses an edge that does not exist.
    #[error("invalid path: {0}")]
    InvalidPath(String),
    /// A computation was stopped before completion (step limit or external cancellation).
    #[error("computation cancelled: {0}")]
    Cancelled(Cancelled),
}

impl From<Cancelled> for GraphError {
    fn from(value: Cancelled) -> Self {
        GraphError::Cancelled(value)
    }
}

impl GraphError {
    /// A stable identifier of the error category, used in structured error reports.
    pub fn kind(&self) -> &'static str {
        match self {
            GraphError::DimensionMismatch(_) => "DimensionMismatch",
            GraphError::UnsupportedSize { .. } => "UnsupportedSize",
            GraphError::InvalidValue { .. } => "InvalidValue",
            GraphError::InvalidExponent(_) => "InvalidExponent",
            GraphError::NegativeWeight { .. } => "NegativeWeight",
            GraphError::InvalidPath(_) => "InvalidPath",
            GraphError::Cancelled(_) => "Cancelled",
        }
    }
}
