use landscape_core::Permutation;

use crate::{
    error::{GenerationError, require_dimension},
    stream::LehmerStream,
};

/// A permutation together with the transpositions that built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapPermutation {
    pub permutation: Permutation,
    /// The `(first, second)` index pairs swapped, in order.
    pub swaps: Vec<(usize, usize)>,
}

/// Computes a truncated uniform swap permutation.
///
/// Starting from the identity, the variables are put in a random order and
/// the first `swap_count` of them are each swapped with a partner drawn
/// uniformly from the indices at most `swap_range` away (excluding itself).
/// The result is a local reordering: no transposition moves an entry further
/// than `swap_range`.
///
/// `swap_range` is clamped to `dimension - 1` and `swap_count` to
/// `dimension`. A range of zero, or a single dimension, gives the identity.
///
/// # Errors
///
/// Returns [`GenerationError::Allocation`] if `dimension` is zero.
pub fn compute_swap_permutation(
    seed: i64,
    dimension: usize,
    swap_count: usize,
    swap_range: usize,
) -> Result<SwapPermutation, GenerationError> {
    require_dimension("swap permutation", dimension)?;
    let n = dimension;
    let range = swap_range.min(n - 1);
    let count = swap_count.min(n);

    let mut permutation = Permutation::identity(n);
    let mut swaps = Vec::new();
    if range == 0 {
        return Ok(SwapPermutation { permutation, swaps });
    }

    let mut stream = LehmerStream::new(seed);
    let keys: Vec<f64> = stream.by_ref().take(n).collect();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| keys[a].total_cmp(&keys[b]));

    swaps.reserve(count);
    for &first in order.iter().take(count) {
        let lower = first.saturating_sub(range);
        let upper = (first + range).min(n - 1);
        let second = loop {
            let candidate = draw_index(&mut stream, lower, upper);
            if candidate != first {
                break candidate;
            }
        };
        permutation.swap(first, second);
        swaps.push((first, second));
    }

    Ok(SwapPermutation { permutation, swaps })
}

/// Draws an index uniformly from `lower..=upper`.
fn draw_index(stream: &mut LehmerStream, lower: usize, upper: usize) -> usize {
    let width = upper - lower + 1;
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    let offset = (stream.next_uniform() * width as f64).floor() as usize;
    (lower + offset).min(upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_a_bijection_built_from_local_swaps() {
        for (n, range) in [(2, 1), (10, 3), (80, 26), (500, 166)] {
            let result = compute_swap_permutation(2_010_010, n, n, range).unwrap();

            assert!(Permutation::new(result.permutation.as_slice().to_vec()).is_ok());
            assert_eq!(result.swaps.len(), n);
            for &(a, b) in &result.swaps {
                assert_ne!(a, b);
                assert!(a.abs_diff(b) <= range, "swap ({a}, {b}) exceeds {range}");
            }
        }
    }

    #[test]
    fn replaying_the_swaps_rebuilds_the_permutation() {
        let result = compute_swap_permutation(3_010_010, 40, 40, 13).unwrap();
        let mut replay = Permutation::identity(40);
        for &(a, b) in &result.swaps {
            replay.swap(a, b);
        }
        assert_eq!(replay, result.permutation);
    }

    #[test]
    fn is_reproducible() {
        let a = compute_swap_permutation(2_000_123, 64, 64, 21).unwrap();
        let b = compute_swap_permutation(2_000_123, 64, 64, 21).unwrap();
        assert_eq!(a, b);
        assert_ne!(
            a.permutation,
            compute_swap_permutation(3_000_123, 64, 64, 21)
                .unwrap()
                .permutation
        );
    }

    #[test]
    fn out_of_range_parameters_are_clamped() {
        let result = compute_swap_permutation(5, 6, 100, 100).unwrap();
        assert_eq!(result.swaps.len(), 6);
        assert!(result.swaps.iter().all(|&(a, b)| a < 6 && b < 6));
    }

    #[test]
    fn degenerate_cases_give_the_identity() {
        let single = compute_swap_permutation(5, 1, 1, 10).unwrap();
        assert_eq!(single.permutation, Permutation::identity(1));
        assert!(single.swaps.is_empty());

        let no_range = compute_swap_permutation(5, 8, 8, 0).unwrap();
        assert_eq!(no_range.permutation, Permutation::identity(8));

        assert!(compute_swap_permutation(5, 0, 0, 0).is_err());
    }
}
