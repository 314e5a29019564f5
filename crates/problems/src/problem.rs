use std::fmt;

use landscape_core::{Bounds, EvalError, Evaluable, Optimum};
use landscape_random::seed::problem_seed;

use crate::{ConstructionError, Variant};

/// Identifies a benchmark problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProblemSpec {
    pub function: u32,
    pub dimension: usize,
    pub instance: u32,
    pub variant: Variant,
}

impl ProblemSpec {
    #[must_use]
    pub fn new(function: u32, dimension: usize, instance: u32, variant: Variant) -> Self {
        Self {
            function,
            dimension,
            instance,
            variant,
        }
    }

    /// Returns the base seed all of the problem's structures derive from.
    #[must_use]
    pub fn seed(&self) -> i64 {
        problem_seed(self.function, self.instance)
    }

    /// Checks that the function id, dimension, and instance are positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::NonPositive`] naming the first offending
    /// parameter.
    pub fn validate(&self) -> Result<(), ConstructionError> {
        let checks = [
            ("function", self.function == 0),
            ("dimension", self.dimension == 0),
            ("instance", self.instance == 0),
        ];
        match checks.iter().find(|(_, is_zero)| *is_zero) {
            Some(&(parameter, _)) => Err(ConstructionError::NonPositive { parameter }),
            None => Ok(()),
        }
    }

    /// Returns the problem id, e.g. `bbob_f002_i01_d10`.
    #[must_use]
    pub fn id(&self) -> String {
        let suite = self.variant.suite();
        match self.variant {
            Variant::Separable | Variant::Rotated => format!(
                "{suite}_f{:03}_i{:02}_d{:02}",
                self.function, self.instance, self.dimension
            ),
            Variant::BlockRotated => format!(
                "{suite}_f{:03}_i{:02}_d{:04}",
                self.function, self.instance, self.dimension
            ),
        }
    }

    /// Returns a human-readable problem name.
    #[must_use]
    pub fn name(&self) -> String {
        let suite = match self.variant {
            Variant::Separable | Variant::Rotated => "BBOB",
            Variant::BlockRotated => "BBOB large-scale",
        };
        format!(
            "{suite} suite problem f{} instance {} in {}D",
            self.function, self.instance, self.dimension
        )
    }
}

/// An assembled benchmark problem.
///
/// Wraps the full transform chain behind a single [`Evaluable`] and carries
/// the reporting metadata of its [`ProblemSpec`].
pub struct Problem {
    spec: ProblemSpec,
    id: String,
    name: String,
    evaluable: Box<dyn Evaluable + Send + Sync>,
}

impl Problem {
    pub(crate) fn new(spec: ProblemSpec, evaluable: Box<dyn Evaluable + Send + Sync>) -> Self {
        Self {
            id: spec.id(),
            name: spec.name(),
            spec,
            evaluable,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn structural_tag(&self) -> &'static str {
        self.spec.variant.structural_tag()
    }

    #[must_use]
    pub fn spec(&self) -> &ProblemSpec {
        &self.spec
    }
}

impl Evaluable for Problem {
    fn dimension(&self) -> usize {
        self.evaluable.dimension()
    }

    fn number_of_objectives(&self) -> usize {
        self.evaluable.number_of_objectives()
    }

    fn optimum(&self) -> &Optimum {
        self.evaluable.optimum()
    }

    fn bounds(&self) -> Bounds {
        self.evaluable.bounds()
    }

    fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError> {
        self.evaluable.evaluate(x)
    }
}

impl fmt::Debug for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Problem")
            .field("id", &self.id)
            .field("structural_tag", &self.structural_tag())
            .field("dimension", &self.dimension())
            .field("optimum_value", &self.optimum().value)
            .finish_non_exhaustive()
    }
}
