use thiserror::Error;

/// Pivot tolerance used by [`Config::default`].
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-8;

/// Configuration for Gaussian elimination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pivot_tol: f64,
}

/// Errors that can occur when validating a Gauss solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("pivot tolerance must be finite and non-negative")]
    PivotTolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pivot_tol: DEFAULT_PIVOT_TOLERANCE,
        }
    }
}

impl Config {
    /// Creates a config with the given pivot tolerance.
    ///
    /// Entries with magnitude at or below `pivot_tol` are treated as zero,
    /// both when choosing a pivot and when deciding whether a row needs
    /// elimination.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn new(pivot_tol: f64) -> Result<Self, ConfigError> {
        if !pivot_tol.is_finite() || pivot_tol < 0.0 {
            return Err(ConfigError::PivotTolerance);
        }

        Ok(Self { pivot_tol })
    }

    #[must_use]
    pub fn pivot_tol(&self) -> f64 {
        self.pivot_tol
    }
}
