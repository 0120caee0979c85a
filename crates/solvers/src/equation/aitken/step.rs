use steptrace_core::Step;

/// One Δ² extrapolation from the iterates `x`, `y = g(x)`, `z = g(y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AitkenStep {
    pub iteration: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Ratio of successive differences `(z - y) / (y - x)`.
    pub slope: f64,
    /// False when the Δ² denominator vanished and `z` was used unaccelerated.
    pub accelerated: bool,
}

impl Step for AitkenStep {
    fn iteration(&self) -> usize {
        self.iteration
    }
}
