//! Solvers for systems of linear equations.

pub mod gauss;
