use std::fmt;

/// A bounded real range with independently open or closed endpoints.
///
/// `left <= right` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub left: f64,
    pub right: f64,
    pub include_left: bool,
    pub include_right: bool,
}

impl Interval {
    /// Creates an interval with explicit endpoint inclusion.
    #[must_use]
    pub fn new(left: f64, right: f64, include_left: bool, include_right: bool) -> Self {
        Self {
            left,
            right,
            include_left,
            include_right,
        }
    }

    /// Creates the closed interval `[left, right]`.
    #[must_use]
    pub fn closed(left: f64, right: f64) -> Self {
        Self::new(left, right, true, true)
    }

    /// Creates the open interval `(left, right)`.
    #[must_use]
    pub fn open(left: f64, right: f64) -> Self {
        Self::new(left, right, false, false)
    }

    /// Returns true if both bounds are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.left.is_finite() && self.right.is_finite()
    }

    /// Returns true if `value` lies in the interval.
    ///
    /// Interior points are tested with strict inequality; an endpoint is
    /// contained only if its inclusion flag is set.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn contains(&self, value: f64) -> bool {
        (self.left < value && value < self.right)
            || (self.include_left && value == self.left)
            || (self.include_right && value == self.right)
    }

    /// Returns the distance between the bounds.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Converts `[left, right]` into a closed interval.
impl From<[f64; 2]> for Interval {
    fn from([left, right]: [f64; 2]) -> Self {
        Self::closed(left, right)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.include_left { '[' } else { '(' };
        let close = if self.include_right { ']' } else { ')' };
        write!(f, "{open}{}, {}{close}", self.left, self.right)
    }
}
