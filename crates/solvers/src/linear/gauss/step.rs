use std::fmt;

use ndarray::Array2;
use steptrace_core::Step;

/// The row operation that produced a [`GaussStep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// The augmented matrix before any elimination.
    Initial,

    /// Row `from` was swapped with pivot row `to`.
    Swap { from: usize, to: usize },

    /// Entries below the pivot in `column` were cleared.
    Eliminate { column: usize },
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Initial => write!(f, "Initial augmented matrix"),
            Operation::Swap { from, to } => {
                write!(f, "Pivoting: swapped row {from} and row {to}")
            }
            Operation::Eliminate { column } => {
                write!(f, "Elimination: cleared column {column} below pivot")
            }
        }
    }
}

/// A snapshot of the augmented matrix after one row operation.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussStep {
    pub iteration: usize,
    pub operation: Operation,
    pub matrix: Array2<f64>,
}

impl Step for GaussStep {
    fn iteration(&self) -> usize {
        self.iteration
    }
}

impl fmt::Display for GaussStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Step {}: {}", self.iteration, self.operation)?;
        write!(f, "{:.2}", self.matrix)
    }
}
