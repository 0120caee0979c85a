//! Core types shared by steptrace solvers.
//!
//! This crate defines the solver-agnostic pieces every solver builds on:
//!
//! - [`Trace`] — the ordered record of [`Step`]s and final outcome of one solve
//! - [`Observer`] — receives steps as they are recorded and optionally returns
//!   control actions
//! - [`Interval`] — a real range with optional open or closed endpoints
//! - [`derivative_of`] — a central-difference derivative estimator
//! - [`UnaryFunction`] — the boxed `f64 -> f64` function solvers operate on

mod differentiate;
mod function;
mod interval;
mod observer;
mod trace;

pub use differentiate::{DEFAULT_STEP_SIZE, central_difference, derivative_of};
pub use function::{UnaryFunction, boxed};
pub use interval::Interval;
pub use observer::Observer;
pub use trace::{Step, Trace};
