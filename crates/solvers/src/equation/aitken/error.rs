use thiserror::Error;

use super::config::ConfigError;

/// Errors that can occur during Aitken iteration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("no function assigned to the aitken solver")]
    MissingFunction,

    #[error("initial guess must be finite, got {guess}")]
    InvalidGuess { guess: f64 },

    #[error("aitken solver did not converge after {iters} iterations (last estimate {estimate})")]
    NonConvergence { iters: usize, estimate: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
