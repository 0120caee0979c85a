//! Aitken Δ²-accelerated fixed-point iteration.
//!
//! Each iteration applies the map twice, `y = g(x)` and `z = g(y)`, and
//! extrapolates the limit of the sequence with
//! `x ← x - (y - x)² / (x - 2y + z)`, the cancellation-free form of
//! `(x·z - y²) / (x - 2y + z)`.
//!
//! The solver works on a fixed-point map directly or on a root function `f`
//! through `g(x) = x + f(x)`; see [`Framing`].
//!
//! When the Δ² denominator is exactly zero the extrapolation is undefined and
//! the iteration continues from the unaccelerated `z`. The step records this
//! with `accelerated == false`.

mod config;
mod error;
mod framing;
mod step;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use framing::Framing;
pub use step::AitkenStep;

use steptrace_core::{Observer, Trace, UnaryFunction};
use tracing::{debug, trace, warn};

use crate::Action;

/// Aitken solver with an owned trace.
#[derive(Default)]
pub struct AitkenSolver {
    function: Option<UnaryFunction>,
    framing: Framing,
    trace: Trace<AitkenStep>,
}

impl AitkenSolver {
    /// Creates a solver for `function` interpreted according to `framing`.
    pub fn new<F>(function: F, framing: Framing) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            function: Some(Box::new(function)),
            framing,
            trace: Trace::new(),
        }
    }

    /// Creates a solver that finds `x` with `map(x) = x`.
    pub fn fixed_point<G>(map: G) -> Self
    where
        G: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::new(map, Framing::FixedPoint)
    }

    /// Creates a solver that finds `x` with `function(x) = 0`.
    pub fn from_root_function<F>(function: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::new(function, Framing::Root)
    }

    /// Replaces the function, keeping the current framing.
    pub fn set_function<F>(&mut self, function: F)
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.function = Some(Box::new(function));
    }

    /// Changes how the function is interpreted on the next solve.
    pub fn set_framing(&mut self, framing: Framing) {
        self.framing = framing;
    }

    /// Returns how the function is interpreted.
    #[must_use]
    pub fn framing(&self) -> Framing {
        self.framing
    }

    /// Returns true if a function has been assigned.
    #[must_use]
    pub fn has_function(&self) -> bool {
        self.function.is_some()
    }

    /// Returns the trace of the most recent solve.
    #[must_use]
    pub fn trace(&self) -> &Trace<AitkenStep> {
        &self.trace
    }

    /// Consumes the solver and returns its trace.
    #[must_use]
    pub fn into_trace(self) -> Trace<AitkenStep> {
        self.trace
    }

    /// Iterates from `guess` until the map's fixed point is reached.
    ///
    /// # Errors
    ///
    /// Returns an error if no function is assigned or the guess is not
    /// finite, or [`Error::NonConvergence`] when the budget runs out and the
    /// config asks for [`Exhaustion::Fail`].
    ///
    /// [`Exhaustion::Fail`]: crate::equation::Exhaustion::Fail
    pub fn solve(&mut self, guess: f64, config: &Config) -> Result<f64, Error> {
        self.solve_observed(guess, config, ())
    }

    /// Iterates from `guess`, passing every recorded step to `observer`.
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
        Obs: Observer<AitkenStep, Action>,
    {
        self.trace.clear();

        let function = self.function.as_deref().ok_or(Error::MissingFunction)?;
        if !guess.is_finite() {
            return Err(Error::InvalidGuess { guess });
        }

        let framing = self.framing;
        let map = |x: f64| framing.map(function, x);
        let tolerance = config.tolerance();
        debug!(
            guess,
            tolerance,
            max_iters = config.max_iters(),
            ?framing,
            "starting aitken"
        );

        let mut x = guess;
        for iteration in 0..config.max_iters() {
            let y = map(x);
            if (y - x).abs() <= tolerance {
                debug!(iterations = iteration, fixed_point = x, "aitken converged");
                self.trace.finish(x, true);
                return Ok(x);
            }

            let z = map(y);
            let slope = (z - y) / (y - x);
            let denominator = x - 2.0 * y + z;

            #[allow(clippy::float_cmp)]
            let (next, accelerated) = if denominator == 0.0 {
                warn!(iteration, x, y, z, "aitken denominator vanished, using g(g(x))");
                (z, false)
            } else {
                let difference = y - x;
                (x - difference * difference / denominator, true)
            };

            let step = self.trace.append(AitkenStep {
                iteration,
                x,
                y,
                z,
                slope,
                accelerated,
            });
            trace!(iteration, x, y, z, slope, next, "aitken step");

            if let Some(Action::StopEarly) = observer.observe(step) {
                debug!(iteration, x, "aitken stopped by observer");
                self.trace.finish(x, false);
                return Ok(x);
            }

            x = next;
        }

        debug!(iters = config.max_iters(), estimate = x, "aitken budget exhausted");
        let error = Error::NonConvergence {
            iters: config.max_iters(),
            estimate: x,
        };
        config.exhaustion().resolve(&mut self.trace, x, error)
    }
}
