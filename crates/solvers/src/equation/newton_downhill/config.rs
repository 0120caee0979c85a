use steptrace_core::DEFAULT_STEP_SIZE;
use thiserror::Error;

use crate::equation::Exhaustion;

/// Tolerance used by [`Config::default`].
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Iteration budget used by [`Config::default`].
pub const DEFAULT_MAX_ITERS: usize = 128;

/// Largest allowed damping exponent; `2^63` is the largest power of two in a `u64`.
pub const MAX_DAMPING_EXPONENT: u32 = 63;

/// Configuration for the damped Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
    step_size: f64,
    exhaustion: Exhaustion,
    max_damping_exponent: u32,
}

/// Errors that can occur when validating a damped Newton config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("derivative step size must be finite and positive")]
    StepSize,

    #[error("damping exponent must be at most {MAX_DAMPING_EXPONENT}, got {0}")]
    DampingExponent(u32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iters: DEFAULT_MAX_ITERS,
            step_size: DEFAULT_STEP_SIZE,
            exhaustion: Exhaustion::default(),
            max_damping_exponent: MAX_DAMPING_EXPONENT,
        }
    }
}

impl Config {
    /// Creates a config with default step size, damping cap and exhaustion policy.
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

    /// Caps the damping denominator at `2^exponent`.
    ///
    /// # Errors
    ///
    /// Returns an error if `exponent` exceeds [`MAX_DAMPING_EXPONENT`].
    pub fn with_max_damping_exponent(self, exponent: u32) -> Result<Self, ConfigError> {
        if exponent > MAX_DAMPING_EXPONENT {
            return Err(ConfigError::DampingExponent(exponent));
        }

        Ok(Self {
            max_damping_exponent: exponent,
            ..self
        })
    }

    /// Sets what happens when the solver stops without converging.
    #[must_use]
    pub fn with_exhaustion(self, exhaustion: Exhaustion) -> Self {
        Self { exhaustion, ..self }
    }

    /// Returns the absolute residual tolerance.
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

    /// Returns the exponent of the largest allowed damping denominator.
    #[must_use]
    pub fn max_damping_exponent(&self) -> u32 {
        self.max_damping_exponent
    }
}
