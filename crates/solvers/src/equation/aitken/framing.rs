/// How the solver's function is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Framing {
    /// The function is a fixed-point map `g`; the solver finds `g(x) = x`.
    FixedPoint,

    /// The function is `f` in `f(x) = 0`, iterated as `g(x) = x + f(x)`.
    #[default]
    Root,
}

impl Framing {
    /// Evaluates the fixed-point map built from `function`.
    pub(crate) fn map(self, function: &dyn Fn(f64) -> f64, x: f64) -> f64 {
        match self {
            Framing::FixedPoint => function(x),
            Framing::Root => x + function(x),
        }
    }
}
