/// Control actions an observer may return from a solver step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver after the step just recorded.
    ///
    /// Iterative solvers finish their trace as not converged and return the
    /// current estimate. Gaussian elimination has no partial answer and
    /// returns an error instead.
    StopEarly,
}
