//! Solvers for a single equation `f(x) = 0` (or `g(x) = x` for Aitken).
//!
//! All four solvers share one shape: they are constructed with an optional
//! [`UnaryFunction`], `solve` takes a starting point and a validated
//! `Config`, and the solver's trace is readable afterwards.
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on a sign-changing bracket
//! - [`newton`] — quadratic convergence near simple roots
//! - [`newton_downhill`] — Newton with halving steps for global robustness
//! - [`aitken`] — accelerated fixed-point iteration
//!
//! [`UnaryFunction`]: steptrace_core::UnaryFunction

mod exhaustion;

pub use exhaustion::Exhaustion;

pub mod aitken;
pub mod bisection;
pub mod newton;
pub mod newton_downhill;

/// Slopes with smaller magnitude stop the Newton family of solvers.
pub const MIN_SLOPE: f64 = 1e-15;
