use thiserror::Error;

use super::config::ConfigError;

/// Errors that can occur during Gaussian elimination.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("coefficient matrix must be 2-dimensional, got {ndim} dimensions")]
    NotAMatrix { ndim: usize },

    #[error("bias must be 1- or 2-dimensional, got {ndim} dimensions")]
    InvalidBias { ndim: usize },

    #[error("coefficient matrix has {coefficient_rows} rows but bias has {bias_rows}")]
    DimensionMismatch {
        coefficient_rows: usize,
        bias_rows: usize,
    },

    #[error("matrix is singular: no usable pivot in column {column}")]
    SingularMatrix { column: usize },

    #[error("elimination stopped by observer at step {iteration}")]
    Stopped { iteration: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
