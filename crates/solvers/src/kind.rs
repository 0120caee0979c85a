//! Uniform access to every solver in the crate.
//!
//! Consumers that display or animate traces work with whichever solver the
//! user picked. [`AnySolver`] holds any of them, and [`TraceView`] exposes its
//! trace so a renderer can `match` on the concrete step type.

use std::fmt;

use ndarray::Array2;
use steptrace_core::Trace;

use crate::{
    equation::{
        aitken::{AitkenSolver, AitkenStep},
        bisection::{BisectionSolver, BisectionStep},
        newton::{NewtonSolver, NewtonStep},
        newton_downhill::{NewtonDownhillSolver, NewtonDownhillStep},
    },
    linear::gauss::{GaussSolver, GaussStep},
};

/// Identifies one of the available solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverKind {
    Bisection,
    Newton,
    NewtonDownhill,
    Aitken,
    Gauss,
}

impl SolverKind {
    /// Every kind, in a stable order.
    pub const ALL: [SolverKind; 5] = [
        SolverKind::Bisection,
        SolverKind::Newton,
        SolverKind::NewtonDownhill,
        SolverKind::Aitken,
        SolverKind::Gauss,
    ];

    /// Returns a short, human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SolverKind::Bisection => "bisection",
            SolverKind::Newton => "newton",
            SolverKind::NewtonDownhill => "newton-downhill",
            SolverKind::Aitken => "aitken",
            SolverKind::Gauss => "gauss",
        }
    }

    /// Returns true for the scalar root-finders that take a function.
    #[must_use]
    pub fn is_iterative(self) -> bool {
        !matches!(self, SolverKind::Gauss)
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any solver, tagged by kind.
pub enum AnySolver {
    Bisection(BisectionSolver),
    Newton(NewtonSolver),
    NewtonDownhill(NewtonDownhillSolver),
    Aitken(AitkenSolver),
    Gauss(GaussSolver),
}

impl AnySolver {
    /// Creates a solver of the given kind with no function assigned.
    #[must_use]
    pub fn new(kind: SolverKind) -> Self {
        match kind {
            SolverKind::Bisection => AnySolver::Bisection(BisectionSolver::default()),
            SolverKind::Newton => AnySolver::Newton(NewtonSolver::default()),
            SolverKind::NewtonDownhill => {
                AnySolver::NewtonDownhill(NewtonDownhillSolver::default())
            }
            SolverKind::Aitken => AnySolver::Aitken(AitkenSolver::default()),
            SolverKind::Gauss => AnySolver::Gauss(GaussSolver::default()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> SolverKind {
        match self {
            AnySolver::Bisection(_) => SolverKind::Bisection,
            AnySolver::Newton(_) => SolverKind::Newton,
            AnySolver::NewtonDownhill(_) => SolverKind::NewtonDownhill,
            AnySolver::Aitken(_) => SolverKind::Aitken,
            AnySolver::Gauss(_) => SolverKind::Gauss,
        }
    }

    /// Assigns the function of an iterative solver.
    ///
    /// Returns false, leaving the solver unchanged, for [`SolverKind::Gauss`].
    pub fn set_function<F>(&mut self, function: F) -> bool
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        match self {
            AnySolver::Bisection(solver) => solver.set_function(function),
            AnySolver::Newton(solver) => solver.set_function(function),
            AnySolver::NewtonDownhill(solver) => solver.set_function(function),
            AnySolver::Aitken(solver) => solver.set_function(function),
            AnySolver::Gauss(_) => return false,
        }
        true
    }

    /// Borrows the trace of the most recent solve.
    #[must_use]
    pub fn trace_view(&self) -> TraceView<'_> {
        match self {
            AnySolver::Bisection(solver) => TraceView::Bisection(solver.trace()),
            AnySolver::Newton(solver) => TraceView::Newton(solver.trace()),
            AnySolver::NewtonDownhill(solver) => TraceView::NewtonDownhill(solver.trace()),
            AnySolver::Aitken(solver) => TraceView::Aitken(solver.trace()),
            AnySolver::Gauss(solver) => TraceView::Gauss(solver.trace()),
        }
    }
}

impl From<BisectionSolver> for AnySolver {
    fn from(solver: BisectionSolver) -> Self {
        AnySolver::Bisection(solver)
    }
}

impl From<NewtonSolver> for AnySolver {
    fn from(solver: NewtonSolver) -> Self {
        AnySolver::Newton(solver)
    }
}

impl From<NewtonDownhillSolver> for AnySolver {
    fn from(solver: NewtonDownhillSolver) -> Self {
        AnySolver::NewtonDownhill(solver)
    }
}

impl From<AitkenSolver> for AnySolver {
    fn from(solver: AitkenSolver) -> Self {
        AnySolver::Aitken(solver)
    }
}

impl From<GaussSolver> for AnySolver {
    fn from(solver: GaussSolver) -> Self {
        AnySolver::Gauss(solver)
    }
}

/// A borrowed trace with its concrete step type.
#[derive(Debug, Clone, Copy)]
pub enum TraceView<'a> {
    Bisection(&'a Trace<BisectionStep>),
    Newton(&'a Trace<NewtonStep>),
    NewtonDownhill(&'a Trace<NewtonDownhillStep>),
    Aitken(&'a Trace<AitkenStep>),
    Gauss(&'a Trace<GaussStep, Array2<f64>>),
}

impl TraceView<'_> {
    #[must_use]
    pub fn kind(&self) -> SolverKind {
        match self {
            TraceView::Bisection(_) => SolverKind::Bisection,
            TraceView::Newton(_) => SolverKind::Newton,
            TraceView::NewtonDownhill(_) => SolverKind::NewtonDownhill,
            TraceView::Aitken(_) => SolverKind::Aitken,
            TraceView::Gauss(_) => SolverKind::Gauss,
        }
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            TraceView::Bisection(trace) => trace.len(),
            TraceView::Newton(trace) => trace.len(),
            TraceView::NewtonDownhill(trace) => trace.len(),
            TraceView::Aitken(trace) => trace.len(),
            TraceView::Gauss(trace) => trace.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn has_converged(&self) -> bool {
        match self {
            TraceView::Bisection(trace) => trace.has_converged(),
            TraceView::Newton(trace) => trace.has_converged(),
            TraceView::NewtonDownhill(trace) => trace.has_converged(),
            TraceView::Aitken(trace) => trace.has_converged(),
            TraceView::Gauss(trace) => trace.has_converged(),
        }
    }

    /// Returns the scalar result of a root-finder, or `None` for Gauss and
    /// for unfinished traces.
    #[must_use]
    pub fn scalar_result(&self) -> Option<f64> {
        match self {
            TraceView::Bisection(trace) => trace.final_result().copied(),
            TraceView::Newton(trace) => trace.final_result().copied(),
            TraceView::NewtonDownhill(trace) => trace.final_result().copied(),
            TraceView::Aitken(trace) => trace.final_result().copied(),
            TraceView::Gauss(_) => None,
        }
    }
}
