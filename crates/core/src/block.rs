use ndarray::{Array2, ArrayView1, ArrayViewMut1};

use crate::TransformError;

/// A block-diagonal matrix stored as its dense diagonal blocks.
///
/// Block `k` acts on the coordinate range that starts after the first `k`
/// blocks. The full `n × n` matrix is never built, so storage and application
/// cost `Σ size_k²` instead of `n²`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockDiagonal {
    blocks: Vec<Array2<f64>>,
    block_sizes: Vec<usize>,
}

impl BlockDiagonal {
    /// Creates a block-diagonal matrix from its diagonal blocks, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if `blocks` is empty or if any block is empty or not
    /// square.
    pub fn new(blocks: Vec<Array2<f64>>) -> Result<Self, TransformError> {
        if blocks.is_empty() {
            return Err(TransformError::InvalidBlocks {
                reason: "at least one block is required",
            });
        }

        let mut block_sizes = Vec::with_capacity(blocks.len());
        for block in &blocks {
            let (rows, cols) = block.dim();
            if rows != cols {
                return Err(TransformError::InvalidBlocks {
                    reason: "every block must be square",
                });
            }
            if rows == 0 {
                return Err(TransformError::InvalidBlocks {
                    reason: "blocks must not be empty",
                });
            }
            block_sizes.push(rows);
        }

        Ok(Self {
            blocks,
            block_sizes,
        })
    }

    /// Returns the side length of the (conceptual) full matrix.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.block_sizes.iter().sum()
    }

    #[must_use]
    pub fn block_sizes(&self) -> &[usize] {
        &self.block_sizes
    }

    #[must_use]
    pub fn blocks(&self) -> &[Array2<f64>] {
        &self.blocks
    }

    /// Returns the number of stored matrix entries, `Σ size_k²`.
    #[must_use]
    pub fn stored_entries(&self) -> usize {
        self.block_sizes.iter().map(|size| size * size).sum()
    }

    /// Writes `out = B · x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `out` does not have length [`BlockDiagonal::dimension`].
    pub fn apply(&self, x: &[f64], out: &mut [f64]) {
        self.for_each_block(x, out, |block, x, mut out| {
            out.assign(&block.dot(&x));
        });
    }

    fn for_each_block<F>(&self, x: &[f64], out: &mut [f64], mut f: F)
    where
        F: FnMut(&Array2<f64>, ArrayView1<'_, f64>, ArrayViewMut1<'_, f64>),
    {
        assert_eq!(x.len(), self.dimension(), "input length");
        assert_eq!(out.len(), self.dimension(), "output length");

        let mut start = 0;
        for block in &self.blocks {
            let end = start + block.nrows();
            f(
                block,
                ArrayView1::from(&x[start..end]),
                ArrayViewMut1::from(&mut out[start..end]),
            );
            start = end;
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    fn rotation_and_swap() -> BlockDiagonal {
        let (s, c) = std::f64::consts::FRAC_PI_6.sin_cos();
        BlockDiagonal::new(vec![
            array![[c, -s], [s, c]],
            array![[3.0]],
            array![[0.0, 1.0], [1.0, 0.0]],
        ])
        .unwrap()
    }

    #[test]
    fn reports_structure() {
        let blocks = rotation_and_swap();
        assert_eq!(blocks.dimension(), 5);
        assert_eq!(blocks.block_sizes(), &[2, 1, 2]);
        assert_eq!(blocks.stored_entries(), 9);
        assert_eq!(blocks.blocks().len(), 3);
    }

    #[test]
    fn applies_each_block_to_its_own_range() {
        let blocks = rotation_and_swap();
        let (s, c) = std::f64::consts::FRAC_PI_6.sin_cos();

        let mut out = [0.0; 5];
        blocks.apply(&[1.0, 0.0, 2.0, 4.0, 5.0], &mut out);

        assert_relative_eq!(out[0], c);
        assert_relative_eq!(out[1], s);
        assert_relative_eq!(out[2], 6.0);
        assert_relative_eq!(out[3], 5.0);
        assert_relative_eq!(out[4], 4.0);
    }

    #[test]
    fn rejects_bad_blocks() {
        assert!(BlockDiagonal::new(vec![]).is_err());
        assert!(BlockDiagonal::new(vec![Array2::zeros((2, 3))]).is_err());
        assert!(BlockDiagonal::new(vec![Array2::zeros((0, 0))]).is_err());
    }
}
