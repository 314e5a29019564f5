use landscape_core::BlockDiagonal;
use ndarray::Array2;

use crate::{
    error::{GenerationError, require_dimension},
    seed::BLOCK_SEED_STRIDE,
    stream::gaussian,
};

/// Computes a dense orthogonal `dimension × dimension` matrix for `seed`.
///
/// A matrix of Gaussian draws (filled column by column) is orthonormalized
/// column by column with modified Gram–Schmidt. Sums run in index order so
/// the result is bit-for-bit reproducible.
///
/// # Errors
///
/// Returns [`GenerationError::Allocation`] if `dimension` is zero or if
/// `dimension²` overflows.
pub fn compute_rotation(seed: i64, dimension: usize) -> Result<Array2<f64>, GenerationError> {
    require_dimension("rotation", dimension)?;
    let n = dimension;
    let entries = n.checked_mul(n).ok_or(GenerationError::Allocation {
        structure: "rotation",
        dimension,
    })?;

    let draws = gaussian(entries, seed);
    let mut b = Array2::from_shape_fn((n, n), |(row, col)| draws[col * n + row]);

    for i in 0..n {
        for j in 0..i {
            let prod: f64 = (0..n).map(|k| b[[k, i]] * b[[k, j]]).sum();
            for k in 0..n {
                b[[k, i]] -= prod * b[[k, j]];
            }
        }
        let norm = (0..n).map(|k| b[[k, i]] * b[[k, i]]).sum::<f64>().sqrt();
        for k in 0..n {
            b[[k, i]] /= norm;
        }
    }

    Ok(b)
}

/// Computes a block-diagonal orthogonal matrix with the given block sizes.
///
/// Block `k` is [`compute_rotation`] of its size, seeded with
/// `seed + k · BLOCK_SEED_STRIDE`. Only the blocks are stored, so the cost is
/// `Σ size_k²` rather than `dimension²`.
///
/// # Errors
///
/// Returns [`GenerationError::Allocation`] if `dimension` is zero and
/// [`GenerationError::InvalidBlockSizes`] if `block_sizes` contains a zero or
/// does not sum to `dimension`.
pub fn compute_block_rotation(
    seed: i64,
    dimension: usize,
    block_sizes: &[usize],
) -> Result<BlockDiagonal, GenerationError> {
    require_dimension("block rotation", dimension)?;
    let invalid = || GenerationError::InvalidBlockSizes {
        sizes: block_sizes.to_vec(),
        dimension,
    };
    if block_sizes.contains(&0) || block_sizes.iter().sum::<usize>() != dimension {
        return Err(invalid());
    }

    let blocks = block_sizes
        .iter()
        .zip(0_i64..)
        .map(|(&size, k)| compute_rotation(seed + k * BLOCK_SEED_STRIDE, size))
        .collect::<Result<Vec<_>, _>>()?;

    BlockDiagonal::new(blocks).map_err(|_| invalid())
}
