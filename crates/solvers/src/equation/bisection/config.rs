use thiserror::Error;

/// Tolerance used by [`Config::default`].
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Configuration for the bisection solver.
///
/// The tolerance bounds both the bracket width and the residual: iteration
/// stops when `|f(middle)| <= tolerance` or `right - left <= tolerance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is non-finite or not positive.
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self { tolerance })
    }

    /// Returns the absolute tolerance for bracket width and residual.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}
