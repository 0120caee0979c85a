use steptrace_core::Step;

/// One damped Newton update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonDownhillStep {
    pub iteration: usize,
    pub x: f64,
    pub value: f64,
    pub derivative: f64,
    /// Power-of-two divisor applied to the tangent step.
    pub damping: u64,
}

impl NewtonDownhillStep {
    /// Returns the damped correction `-f(x) / (damping * f'(x))`.
    #[must_use]
    pub fn correction(&self) -> f64 {
        -self.value / (self.damping as f64 * self.derivative)
    }
}

impl Step for NewtonDownhillStep {
    fn iteration(&self) -> usize {
        self.iteration
    }
}
