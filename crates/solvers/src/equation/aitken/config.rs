use thiserror::Error;

use crate::equation::Exhaustion;

/// Tolerance used by [`Config::default`].
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Iteration budget used by [`Config::default`].
///
/// Aitken acceleration converges quickly when it converges at all, so the
/// budget is smaller than Newton's.
pub const DEFAULT_MAX_ITERS: usize = 32;

/// Configuration for the Aitken solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
    exhaustion: Exhaustion,
}

/// Errors that can occur when validating an Aitken solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iters: DEFAULT_MAX_ITERS,
            exhaustion: Exhaustion::default(),
        }
    }
}

impl Config {
    /// Creates a config with the default exhaustion policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is non-finite or not positive.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            tolerance,
            max_iters,
            exhaustion: Exhaustion::default(),
        })
    }

    /// Sets what happens when the budget runs out.
    #[must_use]
    pub fn with_exhaustion(self, exhaustion: Exhaustion) -> Self {
        Self { exhaustion, ..self }
    }

    /// Returns the absolute tolerance on `|g(x) - x|`.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the non-convergence policy.
    #[must_use]
    pub fn exhaustion(&self) -> Exhaustion {
        self.exhaustion
    }
}
