use thiserror::Error;

/// Configuration for problem assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    consistency_tol: f64,
}

/// Errors that can occur when validating an assembly config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("consistency_tol must be finite and non-negative")]
    ConsistencyTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            consistency_tol: 1e-10,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `consistency_tol` is negative or non-finite.
    pub fn new(consistency_tol: f64) -> Result<Self, ConfigError> {
        if !consistency_tol.is_finite() || consistency_tol < 0.0 {
            return Err(ConfigError::ConsistencyTol);
        }
        Ok(Self { consistency_tol })
    }

    /// Returns the relative tolerance of the post-assembly check.
    ///
    /// The tolerance is scaled by `max(1, |expected|)`, so it acts as an
    /// absolute tolerance for optimum values near zero.
    #[must_use]
    pub fn consistency_tol(&self) -> f64 {
        self.consistency_tol
    }

    /// Returns `true` if `evaluated` matches `expected` within tolerance.
    #[must_use]
    pub fn is_consistent(&self, evaluated: f64, expected: f64) -> bool {
        (evaluated - expected).abs() <= self.consistency_tol * expected.abs().max(1.0)
    }
}
