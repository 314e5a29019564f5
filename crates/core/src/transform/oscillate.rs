use crate::{Bounds, EvalError, Evaluable, Optimum, evaluable::check_dimension};

const ALPHA: f64 = 0.1;

/// The warp changes `|x|` by at most this factor (`exp(0.049 · 2)`), which
/// brackets the preimage of any value.
const MAX_STRETCH: f64 = 1.103;

const MAX_BISECTION_ITERS: usize = 200;

/// Evaluates the wrapped function at the oscillated input.
///
/// Each coordinate goes through a smooth, sign-preserving, strictly monotone
/// warp that breaks the symmetry of quadratic landscapes: positive and
/// negative half-axes are distorted with different frequencies, and zero maps
/// to zero.
#[derive(Debug, Clone)]
pub struct Oscillate<E> {
    inner: E,
    optimum: Optimum,
}

impl<E: Evaluable> Oscillate<E> {
    pub fn new(inner: E) -> Self {
        let inner_optimum = inner.optimum();
        let parameter = inner_optimum
            .parameter
            .iter()
            .map(|&y| invert_coordinate(y))
            .collect();
        let optimum = Optimum::new(parameter, inner_optimum.value);
        Self { inner, optimum }
    }

    #[must_use]
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: Evaluable> Evaluable for Oscillate<E> {
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
        let oscillated: Vec<f64> = x.iter().map(|&xi| oscillate_coordinate(xi)).collect();
        self.inner.evaluate(&oscillated)
    }
}

/// Applies the oscillation warp to a single coordinate.
#[must_use]
pub fn oscillate_coordinate(x: f64) -> f64 {
    if x > 0.0 {
        let t = x.ln() / ALPHA;
        let base = (t + 0.49 * (t.sin() + (0.79 * t).sin())).exp();
        base.powf(ALPHA)
    } else if x < 0.0 {
        let t = (-x).ln() / ALPHA;
        let base = (t + 0.49 * ((0.55 * t).sin() + (0.31 * t).sin())).exp();
        -base.powf(ALPHA)
    } else {
        0.0
    }
}

/// Finds `x` with `oscillate_coordinate(x) == y` by bisection.
fn invert_coordinate(y: f64) -> f64 {
    if y == 0.0 || !y.is_finite() {
        return y;
    }

    let (mut lo, mut hi) = if y > 0.0 {
        (y / MAX_STRETCH, y * MAX_STRETCH)
    } else {
        (y * MAX_STRETCH, y / MAX_STRETCH)
    };

    for _ in 0..MAX_BISECTION_ITERS {
        let mid = 0.5 * (lo + hi);
        if mid <= lo || mid >= hi {
            break;
        }
        if oscillate_coordinate(mid) < y {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    if (oscillate_coordinate(lo) - y).abs() <= (oscillate_coordinate(hi) - y).abs() {
        lo
    } else {
        hi
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::evaluable::test_utils::WeightedSphere;

    #[test]
    fn zero_is_a_fixed_point() {
        assert_eq!(oscillate_coordinate(0.0), 0.0);
        assert_eq!(invert_coordinate(0.0), 0.0);
    }

    #[test]
    fn one_is_a_fixed_point() {
        // ln(1) = 0 kills every sine term on the positive branch.
        assert_relative_eq!(oscillate_coordinate(1.0), 1.0, epsilon = 1e-15);
        assert_relative_eq!(oscillate_coordinate(-1.0), -1.0, epsilon = 1e-15);
    }

    #[test]
    fn warp_is_sign_preserving_and_monotone() {
        let xs: Vec<f64> = (-400..=400).map(|i| f64::from(i) * 0.0125).collect();
        for pair in xs.windows(2) {
            let (a, b) = (oscillate_coordinate(pair[0]), oscillate_coordinate(pair[1]));
            assert!(a < b, "not increasing between {} and {}", pair[0], pair[1]);
        }
        for &x in &xs {
            assert_eq!(oscillate_coordinate(x).signum(), x.signum());
            let ratio = oscillate_coordinate(x) / x;
            if x != 0.0 {
                assert!((1.0 / MAX_STRETCH..=MAX_STRETCH).contains(&ratio));
            }
        }
    }

    #[test]
    fn inverse_recovers_the_coordinate() {
        for &x in &[-4.2, -0.7, -1e-3, 2.5e-4, 0.3, 3.9] {
            let y = oscillate_coordinate(x);
            assert_relative_eq!(invert_coordinate(y), x, max_relative = 1e-12);
        }
    }

    #[test]
    fn wrapped_origin_stays_the_optimum() {
        let oscillated = WeightedSphere::new(3).oscillate();

        assert_eq!(oscillated.optimum().parameter, vec![0.0; 3]);
        assert_eq!(oscillated.evaluate(&[0.0, 0.0, 0.0]).unwrap(), 0.0);
        assert!(oscillated.evaluate(&[0.5, -0.5, 0.1]).unwrap() > 0.0);
    }
}
