use thiserror::Error;

/// Errors that can occur when evaluating an [`Evaluable`](crate::Evaluable).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("dimension mismatch: expected {expected} coordinates, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Errors that can occur when constructing a transform.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    #[error("{what} has length {got}, but the wrapped function has dimension {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("matrix is singular: no pivot found in column {column}")]
    SingularMatrix { column: usize },

    #[error("invalid permutation: {reason}")]
    InvalidPermutation { reason: String },

    #[error("invalid block structure: {reason}")]
    InvalidBlocks { reason: &'static str },
}
