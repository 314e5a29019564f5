use ndarray::Array2;

use crate::{
    BlockDiagonal, Bounds, EvalError, Optimum, Permutation, TransformError,
    transform::{Affine, Oscillate, PermBlockDiag, ShiftDomain, ShiftObjective},
};

/// The core trait for functions that can be benchmarked.
///
/// An `Evaluable` maps a coordinate vector of fixed length to a single
/// objective value and carries the metadata a benchmark harness needs: its
/// dimension, its declared optimum, and its domain bounds.
///
/// ## Implementing `Evaluable`
///
/// Implement [`dimension()`], [`optimum()`], and [`evaluate()`].
/// Evaluation must be deterministic and must not mutate shared state, so an
/// evaluable can be called concurrently from many threads.
///
/// ## Composing evaluables
///
/// Transforms wrap an evaluable by value and return a new one:
/// - [`Evaluable::oscillate()`] – Warp each coordinate nonlinearly.
/// - [`Evaluable::affine()`] – Apply `M·x + b` to the input.
/// - [`Evaluable::perm_block_diag()`] – Apply a permuted block rotation.
/// - [`Evaluable::shift_domain()`] – Move the optimum location.
/// - [`Evaluable::shift_objective()`] – Move the optimum value.
///
/// Each wrapper computes its own declared optimum from the one it wraps, so
/// the outermost evaluable always knows where its optimum is.
///
/// [`dimension()`]: Evaluable::dimension
/// [`optimum()`]: Evaluable::optimum
/// [`evaluate()`]: Evaluable::evaluate
pub trait Evaluable {
    /// Returns the number of coordinates `evaluate` expects.
    fn dimension(&self) -> usize;

    /// Returns the number of objective values produced per evaluation.
    fn number_of_objectives(&self) -> usize {
        1
    }

    /// Returns the declared optimum location and value.
    fn optimum(&self) -> &Optimum;

    /// Returns the per-coordinate domain bounds.
    fn bounds(&self) -> Bounds {
        Bounds::default()
    }

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DimensionMismatch`] if `x.len()` differs from
    /// [`Evaluable::dimension`].
    fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError>;

    /// Wraps this evaluable so each input coordinate is oscillated first.
    ///
    /// # Example
    ///
    /// ```
    /// use landscape_core::{Evaluable, EvalError, Optimum};
    ///
    /// struct Sphere(Optimum);
    ///
    /// impl Evaluable for Sphere {
    ///     fn dimension(&self) -> usize {
    ///         self.0.parameter.len()
    ///     }
    ///
    ///     fn optimum(&self) -> &Optimum {
    ///         &self.0
    ///     }
    ///
    ///     fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError> {
    ///         Ok(x.iter().map(|xi| xi * xi).sum())
    ///     }
    /// }
    ///
    /// let sphere = Sphere(Optimum::at_origin(2, 0.0)).oscillate();
    /// assert_eq!(sphere.evaluate(&[0.0, 0.0]).unwrap(), 0.0);
    /// ```
    fn oscillate(self) -> Oscillate<Self>
    where
        Self: Sized,
    {
        Oscillate::new(self)
    }

    /// Wraps this evaluable so it is evaluated at `x - offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if `offset` does not match the dimension.
    fn shift_domain(self, offset: Vec<f64>) -> Result<ShiftDomain<Self>, TransformError>
    where
        Self: Sized,
    {
        ShiftDomain::new(self, offset)
    }

    /// Wraps this evaluable so `offset` is added to every objective value.
    fn shift_objective(self, offset: f64) -> ShiftObjective<Self>
    where
        Self: Sized,
    {
        ShiftObjective::new(self, offset)
    }

    /// Wraps this evaluable so it is evaluated at `matrix · x + offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes do not match the dimension or if the
    /// matrix is singular.
    fn affine(self, matrix: Array2<f64>, offset: Vec<f64>) -> Result<Affine<Self>, TransformError>
    where
        Self: Sized,
    {
        Affine::new(self, matrix, offset)
    }

    /// Wraps this evaluable so it is evaluated at `p2 · blocks · (p1 · x)`.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three structures has a size other than
    /// the dimension.
    fn perm_block_diag(
        self,
        blocks: BlockDiagonal,
        p1: Permutation,
        p2: Permutation,
    ) -> Result<PermBlockDiag<Self>, TransformError>
    where
        Self: Sized,
    {
        PermBlockDiag::new(self, blocks, p1, p2)
    }
}

impl<E: Evaluable + ?Sized> Evaluable for Box<E> {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn number_of_objectives(&self) -> usize {
        (**self).number_of_objectives()
    }

    fn optimum(&self) -> &Optimum {
        (**self).optimum()
    }

    fn bounds(&self) -> Bounds {
        (**self).bounds()
    }

    fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError> {
        (**self).evaluate(x)
    }
}

/// Checks that `x` has the expected number of coordinates.
pub(crate) fn check_dimension(expected: usize, x: &[f64]) -> Result<(), EvalError> {
    if x.len() == expected {
        Ok(())
    } else {
        Err(EvalError::DimensionMismatch {
            expected,
            got: x.len(),
        })
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;

    /// `f(x) = Σ (i + 1) · x_i²`, optimum at the origin with value zero.
    pub(crate) struct WeightedSphere {
        optimum: Optimum,
    }

    impl WeightedSphere {
        pub(crate) fn new(dimension: usize) -> Self {
            Self {
                optimum: Optimum::at_origin(dimension, 0.0),
            }
        }
    }

    impl Evaluable for WeightedSphere {
        fn dimension(&self) -> usize {
            self.optimum.parameter.len()
        }

        fn optimum(&self) -> &Optimum {
            &self.optimum
        }

        #[allow(clippy::cast_precision_loss)]
        fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError> {
            check_dimension(self.dimension(), x)?;
            Ok(x.iter()
                .enumerate()
                .map(|(i, xi)| (i + 1) as f64 * xi * xi)
                .sum())
        }
    }
}
