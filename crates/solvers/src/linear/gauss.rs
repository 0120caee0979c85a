//! Gaussian elimination with partial pivoting.
//!
//! The coefficient matrix and one or more right-hand-side columns are joined
//! into an augmented matrix and reduced to upper-triangular form. For each
//! column the row with the largest remaining magnitude becomes the pivot;
//! every row below it with a non-negligible entry is then eliminated. Back
//! substitution solves all right-hand sides at once.
//!
//! The trace records a snapshot of the augmented matrix for the initial
//! state, every row swap, and every column elimination. Elimination is exact
//! or fails, so a successful solve always finishes the trace as converged.
//! Failed solves leave the trace unfinished with the steps recorded so far.

mod bias;
mod config;
mod error;
mod step;

#[cfg(test)]
mod tests;

pub use bias::Bias;
pub use config::{Config, ConfigError, DEFAULT_PIVOT_TOLERANCE};
pub use error::Error;
pub use step::{GaussStep, Operation};

use ndarray::{Array2, ArrayView2, ArrayViewD, Axis, Ix1, Ix2, concatenate, s};
use steptrace_core::{Observer, Trace};
use tracing::{debug, trace, warn};

use crate::Action;

/// Gaussian elimination solver with an owned trace.
#[derive(Debug, Default)]
pub struct GaussSolver {
    config: Config,
    trace: Trace<GaussStep, Array2<f64>>,
}

impl GaussSolver {
    /// Creates a solver with the default pivot tolerance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with the given pivot tolerance config.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            trace: Trace::new(),
        }
    }

    /// Returns the solver's config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the trace of the most recent solve.
    #[must_use]
    pub fn trace(&self) -> &Trace<GaussStep, Array2<f64>> {
        &self.trace
    }

    /// Consumes the solver and returns its trace.
    #[must_use]
    pub fn into_trace(self) -> Trace<GaussStep, Array2<f64>> {
        self.trace
    }

    /// Solves `coefficients · x = bias` for `x`.
    ///
    /// The result has one row per unknown and one column per right-hand
    /// side; a vector bias yields a single column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the row counts differ and
    /// [`Error::SingularMatrix`] if some column has no usable pivot.
    pub fn solve<'b>(
        &mut self,
        coefficients: ArrayView2<'_, f64>,
        bias: impl Into<Bias<'b>>,
    ) -> Result<Array2<f64>, Error> {
        self.solve_observed(coefficients, bias, ())
    }

    /// Solves with arrays of runtime dimensionality.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAMatrix`] unless `coefficients` is 2-D,
    /// [`Error::InvalidBias`] unless `bias` is 1-D or 2-D, and otherwise the
    /// same errors as [`solve`](Self::solve).
    pub fn solve_dyn(
        &mut self,
        coefficients: ArrayViewD<'_, f64>,
        bias: ArrayViewD<'_, f64>,
    ) -> Result<Array2<f64>, Error> {
        self.trace.clear();

        let ndim = coefficients.ndim();
        let coefficients = coefficients
            .into_dimensionality::<Ix2>()
            .map_err(|_| Error::NotAMatrix { ndim })?;

        let ndim = bias.ndim();
        let bias = match ndim {
            1 => bias.into_dimensionality::<Ix1>().map(Bias::Vector),
            2 => bias.into_dimensionality::<Ix2>().map(Bias::Matrix),
            _ => return Err(Error::InvalidBias { ndim }),
        }
        .map_err(|_| Error::InvalidBias { ndim })?;

        self.solve(coefficients, bias)
    }

    /// Solves, passing every recorded step to `observer`.
    ///
    /// Returning [`Action::StopEarly`] aborts the solve with
    /// [`Error::Stopped`], since a partially eliminated system has no
    /// meaningful answer.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve), plus [`Error::Stopped`].
    pub fn solve_observed<'b, Obs>(
        &mut self,
        coefficients: ArrayView2<'_, f64>,
        bias: impl Into<Bias<'b>>,
        mut observer: Obs,
    ) -> Result<Array2<f64>, Error>
    where
        Obs: Observer<GaussStep, Action>,
    {
        self.trace.clear();

        let bias = bias.into();
        let (rows, unknowns) = coefficients.dim();
        let mismatch = Error::DimensionMismatch {
            coefficient_rows: rows,
            bias_rows: bias.rows(),
        };
        if bias.rows() != rows {
            return Err(mismatch);
        }

        let bias = bias.into_columns();
        let rhs_count = bias.ncols();
        let mut augmented = concatenate(Axis(1), &[coefficients.view(), bias.view()])
            .map_err(|_| mismatch)?;
        debug!(rows, unknowns, rhs_count, "starting gauss elimination");

        self.record(Operation::Initial, &augmented, &mut observer)?;

        let pivot_tol = self.config.pivot_tol();
        for column in 0..unknowns {
            let pivot = (column..rows)
                .map(|row| (row, augmented[[row, column]].abs()))
                .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best });

            let Some((pivot_row, magnitude)) = pivot else {
                warn!(column, rows, "gauss: more unknowns than equations");
                return Err(Error::SingularMatrix { column });
            };
            if magnitude.is_nan() || magnitude <= pivot_tol {
                warn!(column, magnitude, pivot_tol, "gauss: no usable pivot");
                return Err(Error::SingularMatrix { column });
            }

            if pivot_row != column {
                for j in 0..augmented.ncols() {
                    augmented.swap([column, j], [pivot_row, j]);
                }
                self.record(
                    Operation::Swap {
                        from: column,
                        to: pivot_row,
                    },
                    &augmented,
                    &mut observer,
                )?;
            }

            let pivot_values = augmented.row(column).to_owned();
            let pivot_value = pivot_values[column];
            let mut eliminated = false;
            for row in column + 1..rows {
                let entry = augmented[[row, column]];
                if entry.abs() > pivot_tol {
                    augmented
                        .row_mut(row)
                        .scaled_add(-entry / pivot_value, &pivot_values);
                    eliminated = true;
                }
            }

            if eliminated {
                self.record(Operation::Eliminate { column }, &augmented, &mut observer)?;
            }
        }

        let mut solution = Array2::<f64>::zeros((unknowns, rhs_count));
        for i in (0..unknowns).rev() {
            let known = augmented
                .slice(s![i, i + 1..unknowns])
                .dot(&solution.slice(s![i + 1..unknowns, ..]));
            let values = (&augmented.slice(s![i, unknowns..]) - &known) / augmented[[i, i]];
            solution.row_mut(i).assign(&values);
        }

        debug!(steps = self.trace.len(), "gauss elimination finished");
        self.trace.finish(solution.clone(), true);
        Ok(solution)
    }

    /// Appends a snapshot of `matrix` and consults the observer.
    fn record<Obs>(
        &mut self,
        operation: Operation,
        matrix: &Array2<f64>,
        observer: &mut Obs,
    ) -> Result<(), Error>
    where
        Obs: Observer<GaussStep, Action>,
    {
        let iteration = self.trace.next_iteration();
        let step = self.trace.append(GaussStep {
            iteration,
            operation,
            matrix: matrix.clone(),
        });
        trace!(iteration, %operation, "gauss step");

        match observer.observe(step) {
            Some(Action::StopEarly) => {
                debug!(iteration, "gauss stopped by observer");
                Err(Error::Stopped { iteration })
            }
            None => Ok(()),
        }
    }
}
