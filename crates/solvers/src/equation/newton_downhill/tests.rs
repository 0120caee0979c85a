use approx::assert_abs_diff_eq;
use steptrace_core::Step;

use crate::equation::{Exhaustion, newton};

use super::{Action, Config, Error, NewtonDownhillSolver, NewtonDownhillStep};

fn config(tolerance: f64, max_iters: usize) -> Config {
    Config::new(tolerance, max_iters).expect("valid config")
}

#[test]
fn converges_to_sqrt_two_with_power_of_two_damping() {
    let mut solver = NewtonDownhillSolver::new(|x| x * x - 2.0);

    let root = solver.solve(1.5, &config(1e-10, 128)).expect("should solve");

    assert_abs_diff_eq!(root, 2.0_f64.sqrt(), epsilon = 1e-10);
    assert!(solver.trace().has_converged());
    assert!(!solver.trace().is_empty());
    for step in solver.trace() {
        assert!(step.damping >= 1);
        assert!(step.damping.is_power_of_two());
    }
}

#[test]
fn damping_rescues_overshooting_tangent() {
    // Plain Newton on atan diverges from 1.5; the damped variant halves the
    // first step once and then converges.
    let mut plain = newton::NewtonSolver::new(f64::atan);
    let plain_config = newton::Config::new(1e-10, 20).expect("valid config");
    plain.solve(1.5, &plain_config).expect("returns estimate");
    assert!(!plain.trace().has_converged());

    let mut solver = NewtonDownhillSolver::new(f64::atan);
    let root = solver.solve(1.5, &config(1e-10, 128)).expect("should solve");

    assert_abs_diff_eq!(root, 0.0, epsilon = 1e-10);
    assert!(solver.trace().has_converged());
    assert_eq!(solver.trace().steps()[0].damping, 2);
}

#[test]
fn updates_follow_damped_correction() {
    let mut solver = NewtonDownhillSolver::new(f64::atan);
    solver.solve(1.5, &config(1e-10, 128)).expect("should solve");

    let steps = solver.trace().steps();
    for pair in steps.windows(2) {
        assert_eq!(pair[1].x, pair[0].x + pair[0].correction());
        assert!(pair[1].value.abs() < pair[0].value.abs());
    }
}

#[test]
fn damping_cap_stops_unconverged() {
    // No real root: every damped step from near the minimum overshoots.
    let mut solver = NewtonDownhillSolver::new(|x| x * x + 1.0);
    let capped = config(1e-12, 128)
        .with_max_damping_exponent(2)
        .expect("valid exponent");

    let estimate = solver.solve(1e-3, &capped).expect("returns estimate");

    assert_eq!(estimate, 1e-3);
    assert!(solver.trace().is_empty());
    assert!(!solver.trace().has_converged());

    let failing = capped.with_exhaustion(Exhaustion::Fail);
    assert_eq!(
        solver.solve(1e-3, &failing),
        Err(Error::NonConvergence {
            iters: 0,
            estimate: 1e-3
        })
    );
}

#[test]
fn flat_function_stops_on_vanishing_slope() {
    let mut solver = NewtonDownhillSolver::new(|_| 1.0);
    let failing = config(1e-8, 128).with_exhaustion(Exhaustion::Fail);

    let result = solver.solve(3.0, &failing);

    assert_eq!(
        result,
        Err(Error::NonConvergence {
            iters: 0,
            estimate: 3.0
        })
    );
    assert_eq!(solver.trace().final_result(), Some(&3.0));
}

#[test]
fn exhausted_budget_reports_iterations() {
    let mut solver = NewtonDownhillSolver::new(|x| x * x - 2.0);
    let failing = config(1e-14, 1).with_exhaustion(Exhaustion::Fail);

    let result = solver.solve(10.0, &failing);

    assert!(matches!(result, Err(Error::NonConvergence { iters: 1, .. })));
    assert_eq!(solver.trace().len(), 1);
}

#[test]
fn rejects_invalid_inputs() {
    let mut solver = NewtonDownhillSolver::default();
    assert!(!solver.has_function());
    assert_eq!(solver.solve(1.0, &Config::default()), Err(Error::MissingFunction));

    solver.set_function(|x| x - 1.0);
    assert_eq!(
        solver.solve(f64::NAN, &Config::default()).map_err(|error| error.to_string()),
        Err("initial guess must be finite, got NaN".to_string())
    );
}

#[test]
fn iterations_are_sequential() {
    let mut solver = NewtonDownhillSolver::new(|x| x.powi(3) - x - 2.0);
    solver.solve(3.0, &config(1e-10, 128)).expect("should solve");

    for (index, step) in solver.trace().steps().iter().enumerate() {
        assert_eq!(step.iteration(), index);
    }
}

#[test]
fn observer_can_stop_iteration() {
    let mut solver = NewtonDownhillSolver::new(f64::atan);

    let observer = |step: &NewtonDownhillStep| (step.damping > 1).then_some(Action::StopEarly);
    let estimate = solver
        .solve_observed(1.5, &config(1e-10, 128), observer)
        .expect("should stop cleanly");

    assert_eq!(estimate, 1.5);
    assert_eq!(solver.trace().len(), 1);
    assert!(!solver.trace().has_converged());
}

#[test]
fn repeated_solves_do_not_leak_steps() {
    let mut solver = NewtonDownhillSolver::new(f64::atan);
    solver.solve(1.5, &config(1e-10, 128)).expect("first solve");
    let first_len = solver.trace().len();
    assert!(first_len > 1);

    solver.solve(0.0, &config(1e-10, 128)).expect("second solve");
    assert!(solver.trace().is_empty());
    assert_eq!(solver.trace().final_result(), Some(&0.0));
}
