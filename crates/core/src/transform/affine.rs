use ndarray::{Array2, ArrayView1};

use crate::{Bounds, EvalError, Evaluable, Optimum, TransformError, evaluable::check_dimension};

/// Evaluates the wrapped function at `M·x + b`.
///
/// With an orthogonal `M` this turns a separable landscape into a rotated,
/// non-separable one.
#[derive(Debug, Clone)]
pub struct Affine<E> {
    inner: E,
    matrix: Array2<f64>,
    offset: Vec<f64>,
    optimum: Optimum,
}

impl<E: Evaluable> Affine<E> {
    /// Wraps `inner` with the affine map `x ↦ matrix · x + offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if `matrix` is not square with side `inner.dimension()`,
    /// if `offset` has the wrong length, or if `matrix` is singular (the
    /// declared optimum could not be mapped back).
    pub fn new(inner: E, matrix: Array2<f64>, offset: Vec<f64>) -> Result<Self, TransformError> {
        let n = inner.dimension();
        let (rows, cols) = matrix.dim();
        if rows != n || cols != n {
            return Err(TransformError::DimensionMismatch {
                what: "affine matrix side",
                expected: n,
                got: if rows == n { cols } else { rows },
            });
        }
        if offset.len() != n {
            return Err(TransformError::DimensionMismatch {
                what: "affine offset",
                expected: n,
                got: offset.len(),
            });
        }

        let inner_optimum = inner.optimum();
        let rhs: Vec<f64> = inner_optimum
            .parameter
            .iter()
            .zip(&offset)
            .map(|(x, b)| x - b)
            .collect();
        let parameter = solve(&matrix, rhs)?;
        let optimum = Optimum::new(parameter, inner_optimum.value);

        Ok(Self {
            inner,
            matrix,
            offset,
            optimum,
        })
    }

    #[must_use]
    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    #[must_use]
    pub fn offset(&self) -> &[f64] {
        &self.offset
    }

    #[must_use]
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: Evaluable> Evaluable for Affine<E> {
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
        let x = ArrayView1::from(x);
        let mapped: Vec<f64> = self
            .matrix
            .rows()
            .into_iter()
            .zip(&self.offset)
            .map(|(row, b)| row.dot(&x) + b)
            .collect();
        self.inner.evaluate(&mapped)
    }
}

/// Solves `matrix · x = rhs` by Gaussian elimination with partial pivoting.
pub(super) fn solve(matrix: &Array2<f64>, mut rhs: Vec<f64>) -> Result<Vec<f64>, TransformError> {
    let n = rhs.len();
    let mut a = matrix.clone();

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| a[[i, col]].abs().total_cmp(&a[[j, col]].abs()))
            .unwrap_or(col);
        if a[[pivot, col]] == 0.0 || !a[[pivot, col]].is_finite() {
            return Err(TransformError::SingularMatrix { column: col });
        }
        if pivot != col {
            for k in 0..n {
                a.swap([pivot, k], [col, k]);
            }
            rhs.swap(pivot, col);
        }

        for row in col + 1..n {
            let factor = a[[row, col]] / a[[col, col]];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[[row, k]] * x[k]).sum();
        x[row] = (rhs[row] - tail) / a[[row, row]];
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;
    use crate::evaluable::test_utils::WeightedSphere;

    #[test]
    fn evaluates_at_the_mapped_point() {
        // Swap the coordinates and shift the first one.
        let affine = WeightedSphere::new(2)
            .affine(array![[0.0, 1.0], [1.0, 0.0]], vec![1.0, 0.0])
            .unwrap();

        // M·[2, 3] + b = [4, 2] → 1·16 + 2·4 = 24
        assert_relative_eq!(affine.evaluate(&[2.0, 3.0]).unwrap(), 24.0);
    }

    #[test]
    fn optimum_is_mapped_back_through_the_matrix() {
        let (s, c) = 0.4_f64.sin_cos();
        let affine = WeightedSphere::new(2)
            .affine(array![[c, -s], [s, c]], vec![0.5, -1.5])
            .unwrap();

        let optimum = affine.optimum().clone();
        assert_relative_eq!(affine.evaluate(&optimum.parameter).unwrap(), 0.0, epsilon = 1e-24);

        // The rotation transpose gives the same answer.
        let expected = [c * -0.5 + s * 1.5, -s * -0.5 + c * 1.5];
        assert_relative_eq!(optimum.parameter[0], expected[0], epsilon = 1e-14);
        assert_relative_eq!(optimum.parameter[1], expected[1], epsilon = 1e-14);
    }

    #[test]
    fn solve_handles_pivoting() {
        let m = array![[0.0, 2.0, 1.0], [1.0, 1.0, 0.0], [3.0, 0.0, 1.0]];
        let x = solve(&m, vec![5.0, 3.0, 6.0]).unwrap();
        let back: Vec<f64> = m.rows().into_iter().map(|r| r.dot(&ArrayView1::from(&x))).collect();
        for (b, e) in back.iter().zip(&[5.0, 3.0, 6.0]) {
            assert_relative_eq!(b, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn rejects_singular_and_misshaped_matrices() {
        let singular = WeightedSphere::new(2).affine(array![[1.0, 2.0], [2.0, 4.0]], vec![0.0; 2]);
        assert!(matches!(
            singular,
            Err(TransformError::SingularMatrix { column: 1 })
        ));

        let misshaped = WeightedSphere::new(2).affine(Array2::eye(3), vec![0.0; 2]);
        assert!(matches!(
            misshaped,
            Err(TransformError::DimensionMismatch { expected: 2, .. })
        ));
    }
}
