use landscape_core::{Evaluable, transform::Oscillate};
use landscape_random::{
    BlockPolicy, LargeScalePolicy, compute_block_rotation, compute_optimum,
    compute_optimum_value, compute_rotation, compute_swap_permutation,
    seed::{
        FIRST_PERMUTATION_SEED_OFFSET, ROTATION_SEED_OFFSET, SECOND_PERMUTATION_SEED_OFFSET,
    },
};
use tracing::{debug, info, info_span, warn};

use crate::{AssemblyError, Config, Ellipsoid, ErrorKind, Problem, ProblemSpec, Stage, Variant};

type BoxedEvaluable = Box<dyn Evaluable + Send + Sync>;

/// Assembles a problem with the default [`Config`] and [`LargeScalePolicy`].
///
/// # Errors
///
/// Returns an [`AssemblyError`] naming the variant and the stage that failed.
pub fn assemble(spec: &ProblemSpec) -> Result<Problem, AssemblyError> {
    Assembler::default().assemble(spec)
}

/// Builds problems from their specs.
///
/// The block policy decides block sizes and swap parameters of
/// [`Variant::BlockRotated`] problems and is ignored by the other variants.
#[derive(Debug, Clone)]
pub struct Assembler<P = LargeScalePolicy> {
    config: Config,
    policy: P,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Assembler {
    /// Creates an assembler with the default block policy.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            policy: LargeScalePolicy::default(),
        }
    }
}

impl<P: BlockPolicy> Assembler<P> {
    /// Replaces the block policy.
    #[must_use]
    pub fn with_policy<Q: BlockPolicy>(self, policy: Q) -> Assembler<Q> {
        Assembler {
            config: self.config,
            policy,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Generates the hidden structures for `spec`, chains the transforms
    /// around the ellipsoid kernel, and checks the result at its optimum.
    ///
    /// Oscillation is applied in the kernel's own coordinates, before any
    /// linear map. The domain shift follows all linear maps and the objective
    /// shift is always outermost.
    ///
    /// # Errors
    ///
    /// Returns an [`AssemblyError`] naming the variant and the stage that
    /// failed. An error only affects this problem.
    pub fn assemble(&self, spec: &ProblemSpec) -> Result<Problem, AssemblyError> {
        let variant = spec.variant;
        let _span = info_span!(
            "assemble",
            function = spec.function,
            dimension = spec.dimension,
            instance = spec.instance,
            %variant,
        )
        .entered();

        spec.validate()
            .map_err(AssemblyError::at(variant, Stage::Validate))?;

        let seed = spec.seed();
        let n = spec.dimension;

        let xopt =
            compute_optimum(seed, n).map_err(AssemblyError::at(variant, Stage::Optimum))?;
        let fopt = compute_optimum_value(spec.function, spec.instance);
        debug!(seed, fopt, "generated optimum");

        let kernel = Ellipsoid::new(n)
            .map_err(AssemblyError::at(variant, Stage::Kernel))?
            .oscillate();

        let transformed: BoxedEvaluable = match variant {
            Variant::Separable => Box::new(kernel),
            Variant::Rotated => Self::rotated(kernel, seed)?,
            Variant::BlockRotated => self.block_rotated(kernel, seed)?,
        };
        let evaluable: BoxedEvaluable = Box::new(
            transformed
                .shift_domain(xopt)
                .map_err(AssemblyError::at(variant, Stage::ShiftDomain))?
                .shift_objective(fopt),
        );

        self.check_consistency(variant, &*evaluable, fopt)?;

        let problem = Problem::new(*spec, evaluable);
        info!(id = problem.id(), "problem assembled");
        Ok(problem)
    }

    fn rotated(kernel: Oscillate<Ellipsoid>, seed: i64) -> Result<BoxedEvaluable, AssemblyError> {
        let variant = Variant::Rotated;
        let n = kernel.dimension();

        let rotation = compute_rotation(seed + ROTATION_SEED_OFFSET, n)
            .map_err(AssemblyError::at(variant, Stage::Rotation))?;
        debug!(dimension = n, "built rotation");

        let affine = kernel
            .affine(rotation, vec![0.0; n])
            .map_err(AssemblyError::at(variant, Stage::Affine))?;
        Ok(Box::new(affine))
    }

    fn block_rotated(
        &self,
        kernel: Oscillate<Ellipsoid>,
        seed: i64,
    ) -> Result<BoxedEvaluable, AssemblyError> {
        let variant = Variant::BlockRotated;
        let n = kernel.dimension();

        let block_sizes = self.policy.block_sizes(n);
        let swap_range = self.policy.swap_range(n);
        let swap_count = self.policy.swap_count(n);

        let blocks = compute_block_rotation(seed + ROTATION_SEED_OFFSET, n, &block_sizes)
            .map_err(AssemblyError::at(variant, Stage::BlockRotation))?;
        debug!(
            blocks = block_sizes.len(),
            stored_entries = blocks.stored_entries(),
            "built block rotation"
        );

        let p1 = compute_swap_permutation(
            seed + FIRST_PERMUTATION_SEED_OFFSET,
            n,
            swap_count,
            swap_range,
        )
        .map_err(AssemblyError::at(variant, Stage::FirstPermutation))?;
        let p2 = compute_swap_permutation(
            seed + SECOND_PERMUTATION_SEED_OFFSET,
            n,
            swap_count,
            swap_range,
        )
        .map_err(AssemblyError::at(variant, Stage::SecondPermutation))?;
        debug!(swap_count, swap_range, "built swap permutations");

        let permuted = kernel
            .perm_block_diag(blocks, p1.permutation, p2.permutation)
            .map_err(AssemblyError::at(variant, Stage::PermBlockDiag))?;
        Ok(Box::new(permuted))
    }

    /// Evaluates the chain at its declared optimum and compares the result
    /// with the generated optimum value.
    fn check_consistency(
        &self,
        variant: Variant,
        evaluable: &(dyn Evaluable + Send + Sync),
        expected: f64,
    ) -> Result<(), AssemblyError> {
        let evaluated = evaluable
            .evaluate(&evaluable.optimum().parameter)
            .map_err(AssemblyError::at(variant, Stage::SelfCheck))?;

        if self.config.is_consistent(evaluated, expected) {
            Ok(())
        } else {
            warn!(evaluated, expected, "optimum value mismatch");
            Err(AssemblyError::new(
                variant,
                Stage::SelfCheck,
                ErrorKind::Consistency {
                    evaluated,
                    expected,
                },
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use landscape_core::{EvalError, Optimum};

    use super::*;

    /// Declares an optimum value it never attains.
    struct Misdeclared(Optimum);

    impl Evaluable for Misdeclared {
        fn dimension(&self) -> usize {
            self.0.parameter.len()
        }

        fn optimum(&self) -> &Optimum {
            &self.0
        }

        fn evaluate(&self, _x: &[f64]) -> Result<f64, EvalError> {
            Ok(self.0.value + 1.0)
        }
    }

    #[test]
    fn mismatched_optimum_is_a_consistency_error() {
        let assembler = Assembler::default();
        let evaluable = Misdeclared(Optimum::at_origin(2, 5.0));

        let err = assembler
            .check_consistency(Variant::Rotated, &evaluable, 5.0)
            .unwrap_err();

        assert_eq!(err.variant, Variant::Rotated);
        assert_eq!(err.stage, Stage::SelfCheck);
        match err.kind {
            ErrorKind::Consistency {
                evaluated,
                expected,
            } => {
                assert_eq!(evaluated, 6.0);
                assert_eq!(expected, 5.0);
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn matching_optimum_passes() {
        let assembler = Assembler::default();
        let kernel = Ellipsoid::new(3).unwrap();
        assert!(
            assembler
                .check_consistency(Variant::Separable, &kernel, 0.0)
                .is_ok()
        );
    }

    #[test]
    fn error_messages_name_variant_and_stage() {
        let spec = ProblemSpec::new(10, 0, 1, Variant::BlockRotated);
        let err = assemble(&spec).unwrap_err();

        assert_eq!(
            err.to_string(),
            "assembling block-rotated problem failed at validate"
        );
        assert_eq!(
            std::error::Error::source(&err).map(ToString::to_string),
            Some("construction error".to_string())
        );
    }
}
