//! Newton's method for a single equation `f(x) = 0`.
//!
//! # Algorithm
//!
//! Starting from a guess, each iteration follows the tangent line to its
//! zero crossing: `x ← x - f(x)/f'(x)`. The derivative is either supplied
//! by the caller or estimated with a central difference.
//!
//! # Termination
//!
//! - Converged when `|f(x)| <= tolerance`, or when the Newton correction
//!   itself is smaller than the tolerance (the corrected point is returned).
//! - Not converged when `|f'(x)|` drops below [`MIN_SLOPE`], or when the
//!   iteration budget runs out. The configured [`Exhaustion`] policy decides
//!   whether that is an error.
//!
//! [`MIN_SLOPE`]: crate::equation::MIN_SLOPE
//! [`Exhaustion`]: crate::equation::Exhaustion

mod config;
mod error;
mod step;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use step::NewtonStep;

use steptrace_core::{Observer, Trace, UnaryFunction, derivative_of};
use tracing::{debug, trace, warn};

use crate::{Action, equation::MIN_SLOPE};

/// Newton solver with an owned trace.
#[derive(Default)]
pub struct NewtonSolver {
    function: Option<UnaryFunction>,
    derivative: Option<UnaryFunction>,
    trace: Trace<NewtonStep>,
}

impl NewtonSolver {
    /// Creates a solver for `function` using an estimated derivative.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            function: Some(Box::new(function)),
            ..Self::default()
        }
    }

    /// Uses `derivative` instead of the central-difference estimate.
    #[must_use]
    pub fn with_derivative<D>(mut self, derivative: D) -> Self
    where
        D: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.set_derivative(derivative);
        self
    }

    /// Replaces the function to solve.
    ///
    /// A previously supplied derivative belongs to the old function and is
    /// discarded.
    pub fn set_function<F>(&mut self, function: F)
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.function = Some(Box::new(function));
        self.derivative = None;
    }

    /// Supplies an analytic derivative for the current function.
    pub fn set_derivative<D>(&mut self, derivative: D)
    where
        D: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.derivative = Some(Box::new(derivative));
    }

    /// Returns true if a function has been assigned.
    #[must_use]
    pub fn has_function(&self) -> bool {
        self.function.is_some()
    }

    /// Returns the trace of the most recent solve.
    #[must_use]
    pub fn trace(&self) -> &Trace<NewtonStep> {
        &self.trace
    }

    /// Consumes the solver and returns its trace.
    #[must_use]
    pub fn into_trace(self) -> Trace<NewtonStep> {
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
    /// Returning [`Action::StopEarly`] ends the solve with the step's guess as
    /// an unconverged result. A step whose correction is already within the
    /// tolerance still finishes as converged.
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
        Obs: Observer<NewtonStep, Action>,
    {
        self.trace.clear();

        let function = self.function.as_deref().ok_or(Error::MissingFunction)?;
        if !guess.is_finite() {
            return Err(Error::InvalidGuess { guess });
        }

        let estimated = derivative_of(function, config.step_size());
        let derivative: &dyn Fn(f64) -> f64 = match self.derivative.as_deref() {
            Some(derivative) => derivative,
            None => &estimated,
        };

        let tolerance = config.tolerance();
        debug!(
            guess,
            tolerance,
            max_iters = config.max_iters(),
            analytic_derivative = self.derivative.is_some(),
            "starting newton"
        );

        let mut guess = guess;
        for iteration in 0..config.max_iters() {
            let value = function(guess);
            let slope = derivative(guess);

            if value.abs() <= tolerance {
                debug!(iterations = iteration, root = guess, "newton converged");
                self.trace.finish(guess, true);
                return Ok(guess);
            }

            if slope.abs() < MIN_SLOPE {
                warn!(iteration, guess, slope, "newton derivative vanished");
                let error = Error::NonConvergence {
                    iters: iteration,
                    estimate: guess,
                };
                return config
                    .exhaustion()
                    .resolve(&mut self.trace, guess, error);
            }

            let step = self.trace.append(NewtonStep {
                iteration,
                guess,
                value,
                derivative: slope,
            });
            trace!(iteration, guess, value, slope, "newton step");

            let action = observer.observe(step);

            let difference = -value / slope;
            if difference.abs() < tolerance {
                let root = guess + difference;
                debug!(iterations = iteration + 1, root, "newton converged");
                self.trace.finish(root, true);
                return Ok(root);
            }

            if let Some(Action::StopEarly) = action {
                debug!(iteration, guess, "newton stopped by observer");
                self.trace.finish(guess, false);
                return Ok(guess);
            }

            guess += difference;
        }

        debug!(iters = config.max_iters(), estimate = guess, "newton budget exhausted");
        let error = Error::NonConvergence {
            iters: config.max_iters(),
            estimate: guess,
        };
        config.exhaustion().resolve(&mut self.trace, guess, error)
    }
}
