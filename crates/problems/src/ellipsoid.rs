use landscape_core::{EvalError, Evaluable, Optimum};

use crate::ConstructionError;

/// Ratio between the largest and smallest curvature of the ellipsoid.
pub const CONDITION: f64 = 1.0e6;

/// The ill-conditioned, separable ellipsoid kernel.
///
/// `f(x) = x₀² + Σᵢ CONDITION^(i / (n - 1)) · xᵢ²`
///
/// The curvature grows exponentially along the coordinates. In one dimension
/// the sum is empty and `f(x) = x₀²`.
#[derive(Debug, Clone)]
pub struct Ellipsoid {
    weights: Vec<f64>,
    optimum: Optimum,
}

impl Ellipsoid {
    /// Creates the kernel for `dimension` coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if `dimension` is zero.
    pub fn new(dimension: usize) -> Result<Self, ConstructionError> {
        if dimension == 0 {
            return Err(ConstructionError::NonPositive {
                parameter: "dimension",
            });
        }

        #[allow(clippy::cast_precision_loss)]
        let weights = (0..dimension)
            .map(|i| {
                if i == 0 {
                    1.0
                } else {
                    CONDITION.powf(i as f64 / (dimension as f64 - 1.0))
                }
            })
            .collect();

        Ok(Self {
            weights,
            optimum: Optimum::at_origin(dimension, 0.0),
        })
    }
}

impl Evaluable for Ellipsoid {
    fn dimension(&self) -> usize {
        self.weights.len()
    }

    fn optimum(&self) -> &Optimum {
        &self.optimum
    }

    fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError> {
        if x.len() != self.dimension() {
            return Err(EvalError::DimensionMismatch {
                expected: self.dimension(),
                got: x.len(),
            });
        }
        Ok(self.weights.iter().zip(x).map(|(w, xi)| w * xi * xi).sum())
    }
}
