/// The sign of a function value for bracket logic.
///
/// Zero counts as positive: only strictly negative values are `Negative`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Value is positive (or zero, or NaN).
    Positive,
    /// Value is strictly negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a function value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}
