use steptrace_core::Step;

/// One midpoint evaluation of the bisection loop.
///
/// `left` and `right` are the bracket before it is narrowed around `middle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionStep {
    pub iteration: usize,
    pub left: f64,
    pub right: f64,
    pub middle: f64,
    pub middle_value: f64,
}

impl BisectionStep {
    /// Returns the bracket width at this step.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

impl Step for BisectionStep {
    fn iteration(&self) -> usize {
        self.iteration
    }
}
