use steptrace_core::DEFAULT_STEP_SIZE;
use thiserror::Error;

use crate::equation::Exhaustion;

/// Tolerance used by [`Config::default`].
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Iteration budget used by [`Config::default`].
pub const DEFAULT_MAX_ITERS: usize = 128;

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
    step_size: f64,
    exhaustion: Exhaustion,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("derivative step size must be finite and positive")]
    StepSize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iters: DEFAULT_MAX_ITERS,
            step_size: DEFAULT_STEP_SIZE,
            exhaustion: Exhaustion::default(),
        }
    }
}

impl Config {
    /// Creates a config with the default step size and exhaustion policy.
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
            ..Self::default()
        })
    }

    /// Sets the central-difference step size for the estimated derivative.
    ///
    /// # Errors
    ///
    /// Returns an error if the step size is non-finite or not positive.
    pub fn with_step_size(self, step_size: f64) -> Result<Self, ConfigError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(ConfigError::StepSize);
        }

        Ok(Self { step_size, ..self })
    }

    /// Sets what happens when the solver stops without converging.
    #[must_use]
    pub fn with_exhaustion(self, exhaustion: Exhaustion) -> Self {
        Self { exhaustion, ..self }
    }

    /// Returns the absolute residual and step tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the central-difference step size.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the non-convergence policy.
    #[must_use]
    pub fn exhaustion(&self) -> Exhaustion {
        self.exhaustion
    }
}
