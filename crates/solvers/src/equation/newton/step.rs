use steptrace_core::Step;

/// One tangent-line update of the Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonStep {
    pub iteration: usize,
    pub guess: f64,
    pub value: f64,
    pub derivative: f64,
}

impl NewtonStep {
    /// Returns the Newton correction `-f(x)/f'(x)` taken from this step.
    #[must_use]
    pub fn correction(&self) -> f64 {
        -self.value / self.derivative
    }
}

impl Step for NewtonStep {
    fn iteration(&self) -> usize {
        self.iteration
    }
}
