use crate::TransformError;

/// A bijection on `{0, …, n-1}`.
///
/// Applying a permutation `p` to `x` gathers coordinates: `out[i] = x[p[i]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// Creates a permutation from its image.
    ///
    /// # Errors
    ///
    /// Returns an error if `indices` is not a bijection on `{0, …, n-1}`.
    pub fn new(indices: Vec<usize>) -> Result<Self, TransformError> {
        let n = indices.len();
        let mut seen = vec![false; n];
        for &index in &indices {
            if index >= n {
                return Err(TransformError::InvalidPermutation {
                    reason: format!("index {index} is out of range for length {n}"),
                });
            }
            if seen[index] {
                return Err(TransformError::InvalidPermutation {
                    reason: format!("index {index} appears more than once"),
                });
            }
            seen[index] = true;
        }
        Ok(Self(indices))
    }

    /// Returns the identity permutation of length `n`.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Exchanges the images of positions `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// Writes `out[i] = x[self[i]]`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `out` is shorter than the permutation.
    pub fn apply_into(&self, x: &[f64], out: &mut [f64]) {
        for (o, &index) in out.iter_mut().zip(&self.0) {
            *o = x[index];
        }
    }

    /// Returns `x` with its coordinates gathered through the permutation.
    ///
    /// # Panics
    ///
    /// Panics if `x` is shorter than the permutation.
    #[must_use]
    pub fn apply(&self, x: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; self.len()];
        self.apply_into(x, &mut out);
        out
    }

    /// Undoes [`Permutation::apply`]: writes `out[self[i]] = y[i]`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is shorter than the permutation.
    #[must_use]
    pub fn invert(&self, y: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; self.len()];
        for (&yi, &index) in y.iter().zip(&self.0) {
            out[index] = yi;
        }
        out
    }
}
