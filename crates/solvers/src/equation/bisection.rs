//! Bisection for a single equation `f(x) = 0` on a bracketing [`Interval`].
//!
//! # Algorithm
//!
//! Bisection keeps an interval whose endpoint values have opposite signs and
//! repeatedly halves it, keeping the half that still contains the sign
//! change. Each halving is recorded as a [`BisectionStep`].
//!
//! # Termination
//!
//! The loop ends when the midpoint value is within the tolerance of zero, the
//! bracket is no wider than the tolerance, or the bracket can no longer be
//! split in floating point. All three report convergence: the bracket width
//! shrinks geometrically, so no iteration cap is needed.
//!
//! # Endpoint roots
//!
//! If an included endpoint is an exact root, it is returned immediately
//! with no steps recorded.

mod config;
mod error;
mod sign;
mod step;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use sign::Sign;
pub use step::BisectionStep;

use steptrace_core::{Interval, Observer, Trace, UnaryFunction};
use tracing::{debug, trace, warn};

use crate::Action;

/// Bisection solver with an owned trace.
#[derive(Default)]
pub struct BisectionSolver {
    function: Option<UnaryFunction>,
    trace: Trace<BisectionStep>,
}

impl BisectionSolver {
    /// Creates a solver for `function`.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            function: Some(Box::new(function)),
            trace: Trace::new(),
        }
    }

    /// Replaces the function to solve.
    pub fn set_function<F>(&mut self, function: F)
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.function = Some(Box::new(function));
    }

    /// Returns true if a function has been assigned.
    #[must_use]
    pub fn has_function(&self) -> bool {
        self.function.is_some()
    }

    /// Returns the trace of the most recent solve.
    #[must_use]
    pub fn trace(&self) -> &Trace<BisectionStep> {
        &self.trace
    }

    /// Consumes the solver and returns its trace.
    #[must_use]
    pub fn into_trace(self) -> Trace<BisectionStep> {
        self.trace
    }

    /// Finds a root of the function inside `interval`.
    ///
    /// # Errors
    ///
    /// Returns an error if no function is assigned, the interval is not
    /// finite, or the endpoint values do not differ in sign.
    pub fn solve(&mut self, interval: Interval, config: &Config) -> Result<f64, Error> {
        self.solve_observed(interval, config, ())
    }

    /// Finds a root, passing every recorded step to `observer`.
    ///
    /// Returning [`Action::StopEarly`] ends the solve with the step's midpoint
    /// as an unconverged result. A step whose midpoint already meets the
    /// tolerance still finishes as converged.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn solve_observed<Obs>(
        &mut self,
        interval: Interval,
        config: &Config,
        mut observer: Obs,
    ) -> Result<f64, Error>
    where
        Obs: Observer<BisectionStep, Action>,
    {
        self.trace.clear();

        let function = self.function.as_deref().ok_or(Error::MissingFunction)?;

        let Interval {
            mut left,
            mut right,
            include_left,
            include_right,
        } = interval;

        if !interval.is_finite() {
            return Err(Error::InvalidInterval { left, right });
        }

        let tolerance = config.tolerance();
        let left_value = function(left);
        let right_value = function(right);
        debug!(%interval, left_value, right_value, tolerance, "starting bisection");

        #[allow(clippy::float_cmp)]
        if include_left && left_value == 0.0 {
            self.trace.finish(left, true);
            return Ok(left);
        }

        #[allow(clippy::float_cmp)]
        if include_right && right_value == 0.0 {
            self.trace.finish(right, true);
            return Ok(right);
        }

        let left_sign = Sign::of(left_value);
        if left_sign == Sign::of(right_value) {
            return Err(Error::SignConflict {
                left,
                right,
                left_value,
                right_value,
            });
        }

        while right - left > tolerance {
            let middle = 0.5 * (left + right);
            if middle <= left || middle >= right {
                warn!(left, right, "bracket reached floating-point resolution");
                break;
            }

            let middle_value = function(middle);
            let iteration = self.trace.next_iteration();
            let step = self.trace.append(BisectionStep {
                iteration,
                left,
                right,
                middle,
                middle_value,
            });
            trace!(iteration, left, right, middle, middle_value, "bisection step");

            let action = observer.observe(step);

            if middle_value.abs() <= tolerance {
                debug!(iterations = iteration + 1, root = middle, "bisection converged");
                self.trace.finish(middle, true);
                return Ok(middle);
            }

            if let Some(Action::StopEarly) = action {
                debug!(iteration, middle, "bisection stopped by observer");
                self.trace.finish(middle, false);
                return Ok(middle);
            }

            if Sign::of(middle_value) == left_sign {
                left = middle;
            } else {
                right = middle;
            }
        }

        let root = 0.5 * (left + right);
        debug!(iterations = self.trace.len(), root, "bisection bracket within tolerance");
        self.trace.finish(root, true);
        Ok(root)
    }
}
