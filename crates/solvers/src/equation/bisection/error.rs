use thiserror::Error;

use super::config::ConfigError;

/// Errors that can occur during bisection solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("no function assigned to the bisection solver")]
    MissingFunction,

    #[error("bisection requires a finite interval: got left={left}, right={right}")]
    InvalidInterval { left: f64, right: f64 },

    #[error(
        "function values at interval endpoints must have opposite signs: \
         f({left})={left_value}, f({right})={right_value}"
    )]
    SignConflict {
        left: f64,
        right: f64,
        left_value: f64,
        right_value: f64,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
