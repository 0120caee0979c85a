use steptrace_core::{Step, Trace};

/// What an iterative solver does when it stops without converging.
///
/// Applies to a spent iteration budget and to stalls such as a near-zero
/// derivative. Validation failures are always errors regardless of this
/// setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Exhaustion {
    /// Return the latest estimate as `Ok`; the trace reports not converged.
    #[default]
    ReturnEstimate,

    /// Return a non-convergence error.
    Fail,
}

impl Exhaustion {
    /// Finishes `trace` as not converged and applies the policy.
    pub(crate) fn resolve<S: Step, E>(
        self,
        trace: &mut Trace<S>,
        estimate: f64,
        error: E,
    ) -> Result<f64, E> {
        trace.finish(estimate, false);
        match self {
            Exhaustion::ReturnEstimate => Ok(estimate),
            Exhaustion::Fail => Err(error),
        }
    }
}
