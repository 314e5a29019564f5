use std::fmt;

use landscape_core::{EvalError, TransformError};
use landscape_random::GenerationError;
use thiserror::Error;

use crate::Variant;

/// Assembly of one problem failed.
///
/// Identifies the variant being assembled and the stage that failed. The
/// failure only affects this problem.
#[derive(Debug, Error)]
#[error("assembling {variant} problem failed at {stage}")]
pub struct AssemblyError {
    pub variant: Variant,
    pub stage: Stage,
    #[source]
    pub kind: ErrorKind,
}

/// What went wrong during assembly.
#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("construction error")]
    Construction(#[from] ConstructionError),

    #[error("allocation error")]
    Allocation(#[from] GenerationError),

    #[error("evaluated {evaluated} at the declared optimum, expected {expected}")]
    Consistency { evaluated: f64, expected: f64 },
}

/// Errors that can occur when building the kernel or a transform.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("{parameter} must be positive")]
    NonPositive { parameter: &'static str },

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Evaluation(#[from] EvalError),
}

/// A step of problem assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Validate,
    Optimum,
    Rotation,
    BlockRotation,
    FirstPermutation,
    SecondPermutation,
    Kernel,
    Affine,
    PermBlockDiag,
    ShiftDomain,
    SelfCheck,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Validate => "validate",
            Self::Optimum => "optimum",
            Self::Rotation => "rotation",
            Self::BlockRotation => "block rotation",
            Self::FirstPermutation => "first permutation",
            Self::SecondPermutation => "second permutation",
            Self::Kernel => "kernel",
            Self::Affine => "affine transform",
            Self::PermBlockDiag => "permuted block transform",
            Self::ShiftDomain => "domain shift",
            Self::SelfCheck => "self-check",
        })
    }
}

impl AssemblyError {
    pub(crate) fn new(variant: Variant, stage: Stage, kind: impl Into<ErrorKind>) -> Self {
        Self {
            variant,
            stage,
            kind: kind.into(),
        }
    }

    /// Returns a closure that tags an error with its variant and stage.
    pub(crate) fn at<E>(variant: Variant, stage: Stage) -> impl FnOnce(E) -> Self
    where
        E: Into<ErrorKind>,
    {
        move |err| Self::new(variant, stage, err)
    }
}

impl From<TransformError> for ErrorKind {
    fn from(err: TransformError) -> Self {
        Self::Construction(err.into())
    }
}

impl From<EvalError> for ErrorKind {
    fn from(err: EvalError) -> Self {
        Self::Construction(err.into())
    }
}
