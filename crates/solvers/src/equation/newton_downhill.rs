//! Damped ("downhill") Newton's method.
//!
//! Each iteration computes the ordinary Newton step and then halves it until
//! the residual magnitude decreases: the accepted update is
//! `x ← x - f(x) / (d·f'(x))` with `d` the smallest power of two for which
//! `|f(x_new)| < |f(x)|`. A damped step already within tolerance is also
//! accepted, so flat regions cannot stall the search. The search is capped
//! at `2^max_damping_exponent`; hitting the cap ends the solve unconverged.
//!
//! The derivative is always estimated with a central difference.

mod config;
mod error;
mod step;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError, MAX_DAMPING_EXPONENT};
pub use error::Error;
pub use step::NewtonDownhillStep;

use steptrace_core::{Observer, Trace, UnaryFunction, derivative_of};
use tracing::{debug, trace, warn};

use crate::{Action, equation::MIN_SLOPE};

/// Damped Newton solver with an owned trace.
#[derive(Default)]
pub struct NewtonDownhillSolver {
    function: Option<UnaryFunction>,
    trace: Trace<NewtonDownhillStep>,
}

impl NewtonDownhillSolver {
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
    pub fn trace(&self) -> &Trace<NewtonDownhillStep> {
        &self.trace
    }

    /// Consumes the solver and returns its trace.
    #[must_use]
    pub fn into_trace(self) -> Trace<NewtonDownhillStep> {
        self.trace
    }

    /// Finds a root starting from `guess`.
    ///
    /// # Errors
    ///
    /// Returns an error if no function is assigned or the guess is not
    /// finite, or [`Error::NonConvergence`] when the solver stops without
    /// converging and the config asks for [`Exhaustion::Fail`].
    ///
    /// [`Exhaustion::Fail`]: crate::equation::Exhaustion::Fail
    pub fn solve(&mut self, guess: f64, config: &Config) -> Result<f64, Error> {
        self.solve_observed(guess, config, ())
    }

    /// Finds a root, passing every recorded step to `observer`.
    ///
    /// Returning [`Action::StopEarly`] ends the solve with the step's `x` as an
    /// unconverged result. Convergence is detected before a step is recorded,
    /// so the observer only sees steps that still need another iteration.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn solve_observed<Obs>(
        &mut self,
        guess: f64,
        config: &Config,
        mut observer: Obs,
    ) -> Result<f64, Error>
    where
        Obs: Observer<NewtonDownhillStep, Action>,
    {
        self.trace.clear();

        let function = self.function.as_deref().ok_or(Error::MissingFunction)?;
        if !guess.is_finite() {
            return Err(Error::InvalidGuess { guess });
        }

        let derivative = derivative_of(function, config.step_size());
        let tolerance = config.tolerance();
        debug!(
            guess,
            tolerance,
            max_iters = config.max_iters(),
            max_damping_exponent = config.max_damping_exponent(),
            "starting newton-downhill"
        );

        let mut x = guess;
        for iteration in 0..config.max_iters() {
            let value = function(x);
            if value.abs() <= tolerance {
                debug!(iterations = iteration, root = x, "newton-downhill converged");
                self.trace.finish(x, true);
                return Ok(x);
            }

            let slope = derivative(x);
            let error = Error::NonConvergence {
                iters: iteration,
                estimate: x,
            };

            if slope.abs() < MIN_SLOPE {
                warn!(iteration, x, slope, "newton-downhill derivative vanished");
                return config.exhaustion().resolve(&mut self.trace, x, error);
            }

            let Some(damping) = find_damping(
                function,
                x,
                value,
                slope,
                tolerance,
                config.max_damping_exponent(),
            ) else {
                warn!(
                    iteration,
                    x,
                    value,
                    max_damping_exponent = config.max_damping_exponent(),
                    "newton-downhill damping search hit its cap"
                );
                return config.exhaustion().resolve(&mut self.trace, x, error);
            };

            let step = self.trace.append(NewtonDownhillStep {
                iteration,
                x,
                value,
                derivative: slope,
                damping,
            });
            trace!(iteration, x, value, slope, damping, "newton-downhill step");

            if let Some(Action::StopEarly) = observer.observe(step) {
                debug!(iteration, x, "newton-downhill stopped by observer");
                self.trace.finish(x, false);
                return Ok(x);
            }

            x += step.correction();
        }

        debug!(
            iters = config.max_iters(),
            estimate = x,
            "newton-downhill budget exhausted"
        );
        let error = Error::NonConvergence {
            iters: config.max_iters(),
            estimate: x,
        };
        config.exhaustion().resolve(&mut self.trace, x, error)
    }
}

/// Returns the smallest power-of-two divisor that makes the damped step
/// reduce `|f|` or fall within `tolerance`, or `None` past `2^max_exponent`.
fn find_damping(
    function: &dyn Fn(f64) -> f64,
    x: f64,
    value: f64,
    slope: f64,
    tolerance: f64,
    max_exponent: u32,
) -> Option<u64> {
    (0..=max_exponent).map(|exponent| 1_u64 << exponent).find(|&damping| {
        let step = value / (damping as f64 * slope);
        function(x - step).abs() < value.abs() || step.abs() <= tolerance
    })
}
