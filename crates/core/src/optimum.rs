/// The declared optimum of an evaluable: where it lies and what it is worth.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimum {
    pub parameter: Vec<f64>,
    pub value: f64,
}

impl Optimum {
    /// Creates an optimum from its location and value.
    #[must_use]
    pub fn new(parameter: Vec<f64>, value: f64) -> Self {
        Self { parameter, value }
    }

    /// Returns the optimum at the origin of a `dimension`-dimensional space.
    #[must_use]
    pub fn at_origin(dimension: usize, value: f64) -> Self {
        Self::new(vec![0.0; dimension], value)
    }
}

/// Per-coordinate domain bounds shared by all coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Returns `true` if every coordinate of `x` lies within the bounds.
    #[must_use]
    pub fn contains(&self, x: &[f64]) -> bool {
        x.iter().all(|&xi| xi >= self.lower && xi <= self.upper)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(-5.0, 5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_are_the_benchmark_box() {
        let bounds = Bounds::default();
        assert_eq!(bounds, Bounds::new(-5.0, 5.0));
        assert!(bounds.contains(&[-5.0, 0.0, 5.0]));
        assert!(!bounds.contains(&[5.000_001]));
    }

    #[test]
    fn optimum_at_origin() {
        let optimum = Optimum::at_origin(3, 1.5);
        assert_eq!(optimum.parameter, vec![0.0; 3]);
        assert_eq!(optimum.value, 1.5);
    }
}
