use crate::{
    Bounds, EvalError, Evaluable, Optimum, TransformError, evaluable::check_dimension,
};

/// Evaluates the wrapped function at `x - offset`.
///
/// Moves the optimum by `offset` without changing the shape of the landscape.
#[derive(Debug, Clone)]
pub struct ShiftDomain<E> {
    inner: E,
    offset: Vec<f64>,
    optimum: Optimum,
}

impl<E: Evaluable> ShiftDomain<E> {
    /// Wraps `inner` so its optimum moves by `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if `offset` does not have one entry per coordinate.
    pub fn new(inner: E, offset: Vec<f64>) -> Result<Self, TransformError> {
        if offset.len() != inner.dimension() {
            return Err(TransformError::DimensionMismatch {
                what: "domain shift",
                expected: inner.dimension(),
                got: offset.len(),
            });
        }

        let inner_optimum = inner.optimum();
        let parameter = inner_optimum
            .parameter
            .iter()
            .zip(&offset)
            .map(|(x, shift)| x + shift)
            .collect();
        let optimum = Optimum::new(parameter, inner_optimum.value);

        Ok(Self {
            inner,
            offset,
            optimum,
        })
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

impl<E: Evaluable> Evaluable for ShiftDomain<E> {
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
        let shifted: Vec<f64> = x.iter().zip(&self.offset).map(|(x, s)| x - s).collect();
        self.inner.evaluate(&shifted)
    }
}
