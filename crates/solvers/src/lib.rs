//! Root-finding and linear system solvers that record every step they take.
//!
//! Each solver owns a [`Trace`](steptrace_core::Trace) that is reset at the
//! start of every solve, so after a call returns (or fails) the caller can
//! read back exactly how the algorithm reached its answer.
//!
//! # Solvers
//!
//! - [`equation::bisection`] — bracketing bisection on an [`Interval`]
//! - [`equation::newton`] — tangent-line Newton iteration
//! - [`equation::newton_downhill`] — Newton with step damping
//! - [`equation::aitken`] — fixed-point iteration with Aitken Δ² acceleration
//! - [`linear::gauss`] — Gaussian elimination with partial pivoting
//!
//! [`AnySolver`] wraps any of them behind a single enum so that consumers can
//! dispatch on [`SolverKind`] with an exhaustive `match`.
//!
//! [`Interval`]: steptrace_core::Interval

mod action;

pub mod equation;
pub mod kind;
pub mod linear;

pub use action::Action;
pub use kind::{AnySolver, SolverKind, TraceView};
