use crate::{Bounds, EvalError, Evaluable, Optimum};

/// Adds a constant to every value of the wrapped function.
#[derive(Debug, Clone)]
pub struct ShiftObjective<E> {
    inner: E,
    offset: f64,
    optimum: Optimum,
}

impl<E: Evaluable> ShiftObjective<E> {
    /// Wraps `inner` so its optimum value moves by `offset`.
    pub fn new(inner: E, offset: f64) -> Self {
        let inner_optimum = inner.optimum();
        let optimum = Optimum::new(inner_optimum.parameter.clone(), inner_optimum.value + offset);
        Self {
            inner,
            offset,
            optimum,
        }
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: Evaluable> Evaluable for ShiftObjective<E> {
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
        Ok(self.inner.evaluate(x)? + self.offset)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::evaluable::test_utils::WeightedSphere;

    #[test]
    fn adds_offset_to_value_and_optimum() {
        let shifted = WeightedSphere::new(2).shift_objective(-209.88);

        assert_relative_eq!(shifted.optimum().value, -209.88);
        assert_eq!(shifted.optimum().parameter, vec![0.0, 0.0]);
        assert_relative_eq!(shifted.evaluate(&[1.0, 1.0]).unwrap(), 3.0 - 209.88);
    }

    #[test]
    fn inner_errors_propagate() {
        let shifted = WeightedSphere::new(2).shift_objective(1.0);
        assert!(shifted.evaluate(&[1.0]).is_err());
    }
}
