use thiserror::Error;

/// Errors that can occur when generating seeded structures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("cannot allocate {structure} for dimension {dimension}")]
    Allocation {
        structure: &'static str,
        dimension: usize,
    },

    #[error("block sizes {sizes:?} do not partition dimension {dimension}")]
    InvalidBlockSizes { sizes: Vec<usize>, dimension: usize },
}

/// Checks that a structure of side `dimension` can be allocated.
pub(crate) fn require_dimension(
    structure: &'static str,
    dimension: usize,
) -> Result<(), GenerationError> {
    if dimension == 0 {
        Err(GenerationError::Allocation {
            structure,
            dimension,
        })
    } else {
        Ok(())
    }
}
