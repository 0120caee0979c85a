//! Execution traces recorded by solvers.

/// One recorded iteration of a solver.
///
/// Implementors expose the zero-based position of the step within its trace.
pub trait Step {
    /// Returns the zero-based iteration index of this step.
    fn iteration(&self) -> usize;
}

/// The ordered record of one solve: its steps and its final outcome.
///
/// A trace is owned by exactly one solver. The solver clears it at the start
/// of every solve, appends steps in iteration order, and finishes it once
/// when the solve terminates. Consumers only ever see `&Trace` or an owned
/// [`snapshot`](Trace::snapshot), so recorded history cannot be edited from
/// outside the solver.
///
/// `R` is the type of the final result, `f64` for scalar root-finders.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<S, R = f64> {
    steps: Vec<S>,
    final_result: Option<R>,
    has_converged: bool,
}

impl<S, R> Default for Trace<S, R> {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            final_result: None,
            has_converged: false,
        }
    }
}

impl<S: Step, R> Trace<S, R> {
    /// Creates an empty, unfinished trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the trace to its empty, unfinished state.
    pub fn clear(&mut self) {
        self.steps.clear();
        self.final_result = None;
        self.has_converged = false;
    }

    /// Returns the iteration index the next appended step must carry.
    #[must_use]
    pub fn next_iteration(&self) -> usize {
        self.steps.len()
    }

    /// Appends a step and returns a reference to it.
    ///
    /// The step's iteration must equal the number of steps already recorded,
    /// and the trace must not be finished.
    pub fn append(&mut self, step: S) -> &S {
        debug_assert_eq!(
            step.iteration(),
            self.steps.len(),
            "steps must be appended in iteration order"
        );
        debug_assert!(!self.is_finished(), "cannot append to a finished trace");

        let index = self.steps.len();
        self.steps.push(step);
        &self.steps[index]
    }

    /// Records the terminal outcome of the solve.
    ///
    /// A trace is finished exactly once per solve.
    pub fn finish(&mut self, result: R, converged: bool) {
        debug_assert!(!self.is_finished(), "trace finished twice");

        self.final_result = Some(result);
        self.has_converged = converged;
    }

    /// Returns the recorded steps in iteration order.
    #[must_use]
    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    /// Returns the most recently recorded step, if any.
    #[must_use]
    pub fn last_step(&self) -> Option<&S> {
        self.steps.last()
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if no steps have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the final result, or `None` if the solve has not terminated
    /// (or ended with an error).
    #[must_use]
    pub fn final_result(&self) -> Option<&R> {
        self.final_result.as_ref()
    }

    /// Returns true if the solve finished and met its convergence criterion.
    #[must_use]
    pub fn has_converged(&self) -> bool {
        self.has_converged
    }

    /// Returns true once the terminal outcome has been recorded.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.final_result.is_some()
    }
}

impl<S: Clone, R: Clone> Trace<S, R> {
    /// Returns an owned copy that is independent of later solves.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}

impl<'a, S, R> IntoIterator for &'a Trace<S, R> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
