use thiserror::Error;

use crate::error::{GenerationError, require_dimension};

/// Decides how a large-scale problem is split into blocks and how far its
/// permutations reach.
///
/// Implementations must be deterministic functions of the dimension.
pub trait BlockPolicy {
    /// Returns the ordered block sizes; they must be non-zero and sum to
    /// `dimension`.
    fn block_sizes(&self, dimension: usize) -> Vec<usize>;

    /// Returns the maximum index distance of a single swap.
    fn swap_range(&self, dimension: usize) -> usize;

    /// Returns the number of swaps used to build each permutation.
    fn swap_count(&self, dimension: usize) -> usize;
}

/// The standard large-scale policy.
///
/// Blocks have size `min(dimension / block_divisor, max_block_size)` (at least
/// one), with the last block taking the remainder. Swaps reach
/// `dimension / swap_range_divisor` positions and there is one swap per
/// coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LargeScalePolicy {
    max_block_size: usize,
    block_divisor: usize,
    swap_range_divisor: usize,
}

/// Errors that can occur when validating a [`LargeScalePolicy`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PolicyError {
    #[error("max_block_size must be positive")]
    MaxBlockSize,

    #[error("block_divisor must be positive")]
    BlockDivisor,

    #[error("swap_range_divisor must be positive")]
    SwapRangeDivisor,
}

impl Default for LargeScalePolicy {
    fn default() -> Self {
        Self {
            max_block_size: 40,
            block_divisor: 4,
            swap_range_divisor: 3,
        }
    }
}

impl LargeScalePolicy {
    /// Creates a validated policy.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is zero.
    pub fn new(
        max_block_size: usize,
        block_divisor: usize,
        swap_range_divisor: usize,
    ) -> Result<Self, PolicyError> {
        if max_block_size == 0 {
            return Err(PolicyError::MaxBlockSize);
        }
        if block_divisor == 0 {
            return Err(PolicyError::BlockDivisor);
        }
        if swap_range_divisor == 0 {
            return Err(PolicyError::SwapRangeDivisor);
        }

        Ok(Self {
            max_block_size,
            block_divisor,
            swap_range_divisor,
        })
    }

    #[must_use]
    pub fn max_block_size(&self) -> usize {
        self.max_block_size
    }

    #[must_use]
    pub fn block_divisor(&self) -> usize {
        self.block_divisor
    }

    #[must_use]
    pub fn swap_range_divisor(&self) -> usize {
        self.swap_range_divisor
    }
}

impl BlockPolicy for LargeScalePolicy {
    fn block_sizes(&self, dimension: usize) -> Vec<usize> {
        if dimension == 0 {
            return Vec::new();
        }

        let size = (dimension / self.block_divisor)
            .min(self.max_block_size)
            .max(1);
        let count = dimension.div_ceil(size);

        let mut sizes = vec![size; count];
        sizes[count - 1] = dimension - (count - 1) * size;
        sizes
    }

    fn swap_range(&self, dimension: usize) -> usize {
        dimension / self.swap_range_divisor
    }

    fn swap_count(&self, dimension: usize) -> usize {
        dimension
    }
}

/// Returns the block sizes of the default [`LargeScalePolicy`].
///
/// # Errors
///
/// Returns [`GenerationError::Allocation`] if `dimension` is zero.
pub fn compute_block_sizes(dimension: usize) -> Result<Vec<usize>, GenerationError> {
    require_dimension("block sizes", dimension)?;
    Ok(LargeScalePolicy::default().block_sizes(dimension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_block_sizes() {
        assert_eq!(compute_block_sizes(1).unwrap(), vec![1]);
        assert_eq!(compute_block_sizes(3).unwrap(), vec![1, 1, 1]);
        assert_eq!(compute_block_sizes(10).unwrap(), vec![2, 2, 2, 2, 2]);
        assert_eq!(compute_block_sizes(20).unwrap(), vec![5, 5, 5, 5]);
        assert_eq!(compute_block_sizes(100).unwrap(), vec![25, 25, 25, 25]);
        assert_eq!(compute_block_sizes(170).unwrap(), vec![40, 40, 40, 40, 10]);
    }

    #[test]
    fn block_sizes_partition_and_stay_bounded() {
        let policy = LargeScalePolicy::default();
        for n in 1..=700 {
            let sizes = policy.block_sizes(n);
            assert_eq!(sizes.iter().sum::<usize>(), n, "dimension {n}");
            assert!(sizes.iter().all(|&s| (1..=40).contains(&s)), "dimension {n}");
        }
    }

    #[test]
    fn swap_parameters() {
        let policy = LargeScalePolicy::default();
        assert_eq!(policy.swap_range(80), 26);
        assert_eq!(policy.swap_count(80), 80);
        assert_eq!(policy.swap_range(2), 0);
    }

    #[test]
    fn custom_policy_is_validated() {
        assert_eq!(LargeScalePolicy::new(0, 4, 3), Err(PolicyError::MaxBlockSize));
        assert_eq!(LargeScalePolicy::new(40, 0, 3), Err(PolicyError::BlockDivisor));
        assert_eq!(
            LargeScalePolicy::new(40, 4, 0),
            Err(PolicyError::SwapRangeDivisor)
        );

        let policy = LargeScalePolicy::new(8, 2, 3).unwrap();
        assert_eq!(policy.max_block_size(), 8);
        assert_eq!(policy.block_sizes(20), vec![8, 8, 4]);
    }

    #[test]
    fn zero_dimension_is_an_allocation_error() {
        assert!(compute_block_sizes(0).is_err());
    }
}
