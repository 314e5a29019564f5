use crate::{
    BlockDiagonal, Bounds, EvalError, Evaluable, Optimum, Permutation, TransformError,
    evaluable::check_dimension,
};

use super::affine::solve;

/// Evaluates the wrapped function at `P2 · B · (P1 · x)`.
///
/// `B` is block diagonal, so each coordinate range is rotated independently
/// at a cost of `Σ size_k²` rather than `n²`. The permutations `P1` and `P2`
/// scatter the block boundaries so that no fixed coordinate grouping is
/// separable.
#[derive(Debug, Clone)]
pub struct PermBlockDiag<E> {
    inner: E,
    blocks: BlockDiagonal,
    p1: Permutation,
    p2: Permutation,
    optimum: Optimum,
}

impl<E: Evaluable> PermBlockDiag<E> {
    /// Wraps `inner` with the permuted block-diagonal map.
    ///
    /// # Errors
    ///
    /// Returns an error if `blocks`, `p1`, or `p2` does not match
    /// `inner.dimension()`, or if a block is singular.
    pub fn new(
        inner: E,
        blocks: BlockDiagonal,
        p1: Permutation,
        p2: Permutation,
    ) -> Result<Self, TransformError> {
        let n = inner.dimension();
        for (what, got) in [
            ("block matrix side", blocks.dimension()),
            ("first permutation", p1.len()),
            ("second permutation", p2.len()),
        ] {
            if got != n {
                return Err(TransformError::DimensionMismatch {
                    what,
                    expected: n,
                    got,
                });
            }
        }

        let inner_optimum = inner.optimum();
        let rotated = p2.invert(&inner_optimum.parameter);
        let mut permuted = Vec::with_capacity(n);
        let mut start = 0;
        for block in blocks.blocks() {
            let end = start + block.nrows();
            permuted.extend(solve(block, rotated[start..end].to_vec())?);
            start = end;
        }
        let optimum = Optimum::new(p1.invert(&permuted), inner_optimum.value);

        Ok(Self {
            inner,
            blocks,
            p1,
            p2,
            optimum,
        })
    }

    #[must_use]
    pub fn blocks(&self) -> &BlockDiagonal {
        &self.blocks
    }

    /// Returns the permutations applied before and after the blocks.
    #[must_use]
    pub fn permutations(&self) -> (&Permutation, &Permutation) {
        (&self.p1, &self.p2)
    }

    #[must_use]
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: Evaluable> Evaluable for PermBlockDiag<E> {
    fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    fn number_of_objectives(&self) -> usize {
        self.inner.number_of_objectives()
    }

    fn optimum(&self) -> &Optimum {
        &self.optimum
    }

    fn bounds(&self) -> Bounds {
        self.inner.bounds()
    }

    fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError> {
        check_dimension(self.dimension(), x)?;
        let permuted = self.p1.apply(x);
        let mut rotated = vec![0.0; x.len()];
        self.blocks.apply(&permuted, &mut rotated);
        self.inner.evaluate(&self.p2.apply(&rotated))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;
    use crate::{evaluable::test_utils::WeightedSphere, transform::ShiftDomain};

    fn blocks() -> BlockDiagonal {
        let (s, c) = 0.7_f64.sin_cos();
        BlockDiagonal::new(vec![array![[c, -s], [s, c]], array![[1.0]]]).unwrap()
    }

    #[test]
    fn applies_permutation_then_blocks_then_permutation() {
        let p1 = Permutation::new(vec![2, 0, 1]).unwrap();
        let p2 = Permutation::new(vec![1, 2, 0]).unwrap();
        let scaling =
            BlockDiagonal::new(vec![array![[2.0, 0.0], [0.0, 3.0]], array![[5.0]]]).unwrap();
        let wrapped = WeightedSphere::new(3)
            .perm_block_diag(scaling, p1, p2)
            .unwrap();

        // P1·[1, 2, 4] = [4, 1, 2]; B·that = [8, 3, 10]; P2·that = [3, 10, 8]
        // 1·9 + 2·100 + 3·64 = 401
        assert_relative_eq!(wrapped.evaluate(&[1.0, 2.0, 4.0]).unwrap(), 401.0);
    }

    #[test]
    fn optimum_is_mapped_back_exactly() {
        let p1 = Permutation::new(vec![1, 2, 0]).unwrap();
        let p2 = Permutation::new(vec![0, 2, 1]).unwrap();
        let shifted = ShiftDomain::new(WeightedSphere::new(3), vec![0.5, -1.0, 2.0]).unwrap();
        let wrapped = shifted.perm_block_diag(blocks(), p1, p2).unwrap();

        let optimum = wrapped.optimum().clone();
        assert_relative_eq!(
            wrapped.evaluate(&optimum.parameter).unwrap(),
            0.0,
            epsilon = 1e-24
        );
    }

    #[test]
    fn rejects_mismatched_structures() {
        let result = WeightedSphere::new(4).perm_block_diag(
            blocks(),
            Permutation::identity(4),
            Permutation::identity(4),
        );
        assert!(matches!(
            result,
            Err(TransformError::DimensionMismatch {
                what: "block matrix side",
                expected: 4,
                got: 3,
            })
        ));

        let result = WeightedSphere::new(3).perm_block_diag(
            blocks(),
            Permutation::identity(3),
            Permutation::identity(2),
        );
        assert!(matches!(
            result,
            Err(TransformError::DimensionMismatch { got: 2, .. })
        ));
    }
}
