/// Default step size for central differences.
///
/// Close to the square root of `f64::EPSILON`, which balances truncation
/// error against rounding error for the symmetric difference quotient.
pub const DEFAULT_STEP_SIZE: f64 = 1e-5;

/// Estimates `f'(x)` with the symmetric difference `(f(x+h) - f(x-h)) / 2h`.
///
/// Non-finite inputs propagate to a non-finite result.
pub fn central_difference<F>(function: F, x: f64, step_size: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (function(x + step_size) - function(x - step_size)) / (2.0 * step_size)
}

/// Returns a function approximating the derivative of `function`.
///
/// See [`central_difference`] for the formula and [`DEFAULT_STEP_SIZE`] for
/// a reasonable choice of `step_size`.
pub fn derivative_of<F>(function: F, step_size: f64) -> impl Fn(f64) -> f64
where
    F: Fn(f64) -> f64,
{
    move |x| central_difference(&function, x, step_size)
}
