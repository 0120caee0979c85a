/// A boxed real-valued function of one real variable.
///
/// Solvers store their target function behind this alias so it can be
/// assigned after construction and swapped between solves.
pub type UnaryFunction = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// Boxes a closure or function item as a [`UnaryFunction`].
pub fn boxed<F>(function: F) -> UnaryFunction
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    Box::new(function)
}
