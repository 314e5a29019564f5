use crate::{
    error::{GenerationError, require_dimension},
    seed::INSTANCE_SEED_STRIDE,
    stream::{gaussian, uniform},
};

/// Coordinates of the hidden optimum lie in `[-OPTIMUM_RADIUS, OPTIMUM_RADIUS]`.
const OPTIMUM_RADIUS: f64 = 4.0;

/// Optimum coordinates are quantized to multiples of `1 / OPTIMUM_GRID`
/// before scaling.
const OPTIMUM_GRID: f64 = 1e4;

/// Replaces a coordinate that lands exactly on zero.
const ZERO_REPLACEMENT: f64 = -1e-5;

const OPTIMUM_VALUE_LIMIT: f64 = 1000.0;

/// Computes the hidden optimum location for `seed`.
///
/// Each coordinate is `8 · floor(1e4 · u) / 1e4 - 4` for a uniform draw `u`,
/// so the optimum lies in `[-4, 4]ⁿ`, inside the `[-5, 5]ⁿ` domain. A
/// coordinate that is exactly zero is moved to `-1e-5`.
///
/// # Errors
///
/// Returns [`GenerationError::Allocation`] if `dimension` is zero.
pub fn compute_optimum(seed: i64, dimension: usize) -> Result<Vec<f64>, GenerationError> {
    require_dimension("optimum", dimension)?;

    Ok(uniform(dimension, seed)
        .into_iter()
        .map(|u| {
            let x = 2.0 * OPTIMUM_RADIUS * (OPTIMUM_GRID * u).floor() / OPTIMUM_GRID
                - OPTIMUM_RADIUS;
            if x == 0.0 { ZERO_REPLACEMENT } else { x }
        })
        .collect())
}

/// Computes the hidden optimum value of a function instance.
///
/// The value is the ratio of two Gaussian draws, rounded to two decimals and
/// clamped to `[-1000, 1000]`. It does not depend on the dimension.
#[must_use]
pub fn compute_optimum_value(function: u32, instance: u32) -> f64 {
    let seed = i64::from(value_seed(function)) + INSTANCE_SEED_STRIDE * i64::from(instance);
    let numerator = gaussian(1, seed)[0];
    let denominator = gaussian(1, seed + 1)[0];
    let rounded = (100.0 * 100.0 * numerator / denominator + 0.5).floor() / 100.0;
    rounded.clamp(-OPTIMUM_VALUE_LIMIT, OPTIMUM_VALUE_LIMIT)
}

/// Functions that share an optimum value with an earlier function.
fn value_seed(function: u32) -> u32 {
    match function {
        4 => 3,
        18 | 122..=124 => 17,
        101..=103 | 107..=109 => 1,
        104..=106 | 110..=112 => 8,
        113..=115 => 7,
        116..=118 => 10,
        119..=121 => 14,
        125..=127 => 19,
        128..=130 => 21,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::seed::problem_seed;

    #[test]
    fn optimum_values_match_published_instances() {
        assert_relative_eq!(compute_optimum_value(1, 1), 79.48, epsilon = 1e-12);
        assert_relative_eq!(compute_optimum_value(2, 1), -209.88, epsilon = 1e-12);
        assert_relative_eq!(compute_optimum_value(10, 1), -54.94, epsilon = 1e-12);
    }

    #[test]
    fn aliased_functions_share_optimum_values() {
        assert_eq!(compute_optimum_value(4, 3), compute_optimum_value(3, 3));
        assert_eq!(compute_optimum_value(18, 2), compute_optimum_value(17, 2));
        assert_eq!(compute_optimum_value(124, 5), compute_optimum_value(17, 5));
    }

    #[test]
    fn optimum_matches_reference_draws() {
        let optimum = compute_optimum(problem_seed(2, 1), 2).unwrap();
        assert_relative_eq!(optimum[0], 1.2072, epsilon = 1e-12);
        assert_relative_eq!(optimum[1], 0.448, epsilon = 1e-12);
    }

    #[test]
    fn optimum_lies_inside_the_inner_box() {
        let optimum = compute_optimum(problem_seed(10, 7), 500).unwrap();
        assert_eq!(optimum.len(), 500);
        assert!(optimum.iter().all(|x| (-4.0..=4.0).contains(x) && *x != 0.0));
    }

    #[test]
    fn zero_dimension_is_an_allocation_error() {
        assert_eq!(
            compute_optimum(1, 0),
            Err(GenerationError::Allocation {
                structure: "optimum",
                dimension: 0
            })
        );
    }
}
