use approx::assert_relative_eq;
use ndarray::{Array2, ArrayD, IxDyn, array};
use steptrace_core::Step;

use super::{Action, Config, Error, GaussSolver, GaussStep, Operation};

#[test]
fn solves_three_by_three_system() {
    let coefficients = array![[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
    let bias = array![8.0, -11.0, -3.0];
    let mut solver = GaussSolver::new();

    let solution = solver.solve(coefficients.view(), &bias).expect("should solve");

    assert_eq!(solution.dim(), (3, 1));
    assert_relative_eq!(solution[[0, 0]], 2.0, epsilon = 1e-12);
    assert_relative_eq!(solution[[1, 0]], 3.0, epsilon = 1e-12);
    assert_relative_eq!(solution[[2, 0]], -1.0, epsilon = 1e-12);
    assert!(solver.trace().has_converged());
    assert_eq!(solver.trace().final_result(), Some(&solution));
}

#[test]
fn records_pivoting_and_elimination() {
    let coefficients = array![[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
    let bias = array![8.0, -11.0, -3.0];
    let mut solver = GaussSolver::new();

    solver.solve(coefficients.view(), &bias).expect("should solve");

    let operations: Vec<Operation> = solver
        .trace()
        .steps()
        .iter()
        .map(|step| step.operation)
        .collect();
    assert_eq!(
        operations,
        vec![
            Operation::Initial,
            Operation::Swap { from: 0, to: 1 },
            Operation::Eliminate { column: 0 },
            Operation::Swap { from: 1, to: 2 },
            Operation::Eliminate { column: 1 },
        ]
    );

    let initial = &solver.trace().steps()[0].matrix;
    assert_eq!(initial.dim(), (3, 4));
    assert_eq!(initial.column(3), bias);

    let swapped = &solver.trace().steps()[1].matrix;
    assert_eq!(swapped.row(0), array![-3.0, -1.0, 2.0, -11.0]);
    assert_eq!(swapped.row(1), array![2.0, 1.0, -1.0, 8.0]);

    let eliminated = &solver.trace().steps()[2].matrix;
    assert_relative_eq!(eliminated[[1, 0]], 0.0, epsilon = 1e-12);
    assert_relative_eq!(eliminated[[2, 0]], 0.0, epsilon = 1e-12);
}

#[test]
fn accepts_inputs_with_different_lifetimes() {
    let bias = array![3.0, 5.0];
    let mut solver = GaussSolver::new();

    let solution = {
        let coefficients = array![[1.0, 1.0], [1.0, 2.0]];
        solver.solve(coefficients.view(), bias.view())
    }
    .expect("should solve");

    assert_eq!(solution, array![[1.0], [2.0]]);
}

#[test]
fn diagonal_system_records_only_initial_step() {
    let coefficients = array![[2.0, 0.0], [0.0, 4.0]];
    let bias = array![1.0, 2.0];
    let mut solver = GaussSolver::new();

    let solution = solver.solve(coefficients.view(), &bias).expect("should solve");

    assert_eq!(solution, array![[0.5], [0.5]]);
    assert_eq!(solver.trace().len(), 1);
    assert_eq!(solver.trace().steps()[0].operation, Operation::Initial);
}

#[test]
fn solves_several_right_hand_sides() {
    let coefficients = array![[4.0, -2.0, 1.0], [-2.0, 4.0, -2.0], [1.0, -2.0, 4.0]];
    let bias = array![[11.0, 1.0], [-16.0, 0.0], [17.0, 0.0]];
    let mut solver = GaussSolver::new();

    let solution = solver.solve(coefficients.view(), &bias).expect("should solve");

    assert_eq!(solution.dim(), (3, 2));
    let reconstructed = coefficients.dot(&solution);
    for (actual, expected) in reconstructed.iter().zip(bias.iter()) {
        assert_relative_eq!(actual, expected, epsilon = 1e-12);
    }
}

#[test]
fn multi_column_matches_separate_solves() {
    let coefficients = array![[1.0, 2.0], [3.0, 4.0]];
    let mut solver = GaussSolver::new();

    let both = solver
        .solve(coefficients.view(), &array![[5.0, 1.0], [6.0, 0.0]])
        .expect("should solve");
    let first = solver
        .solve(coefficients.view(), &array![5.0, 6.0])
        .expect("should solve");
    let second = solver
        .solve(coefficients.view(), &array![1.0, 0.0])
        .expect("should solve");

    assert_relative_eq!(both[[0, 0]], first[[0, 0]]);
    assert_relative_eq!(both[[1, 0]], first[[1, 0]]);
    assert_relative_eq!(both[[0, 1]], second[[0, 0]]);
    assert_relative_eq!(both[[1, 1]], second[[1, 0]]);
}

#[test]
fn zero_row_is_singular() {
    let coefficients = array![[1.0, 2.0], [0.0, 0.0]];
    let mut solver = GaussSolver::new();

    let result = solver.solve(coefficients.view(), &array![1.0, 1.0]);

    assert_eq!(result, Err(Error::SingularMatrix { column: 1 }));
    assert!(!solver.trace().is_finished());
    assert!(!solver.trace().has_converged());
    assert_eq!(solver.trace().len(), 1);
}

#[test]
fn dependent_rows_are_singular() {
    let coefficients = array![[1.0, 2.0], [2.0, 4.0]];
    let mut solver = GaussSolver::new();

    let result = solver.solve(coefficients.view(), &array![3.0, 6.0]);

    assert_eq!(result, Err(Error::SingularMatrix { column: 1 }));
}

#[test]
fn more_unknowns_than_equations_is_singular() {
    let coefficients = array![[1.0, 2.0, 3.0]];
    let mut solver = GaussSolver::new();

    let result = solver.solve(coefficients.view(), &array![1.0]);

    assert_eq!(result, Err(Error::SingularMatrix { column: 1 }));
}

#[test]
fn pivot_tolerance_is_configurable() {
    let coefficients = array![[1e-9, 0.0], [0.0, 1.0]];
    let bias = array![1e-9, 2.0];

    let mut strict = GaussSolver::new();
    assert_eq!(
        strict.solve(coefficients.view(), &bias),
        Err(Error::SingularMatrix { column: 0 })
    );

    let mut loose = GaussSolver::with_config(Config::new(1e-12).expect("valid config"));
    let solution = loose.solve(coefficients.view(), &bias).expect("should solve");
    assert_relative_eq!(solution[[0, 0]], 1.0, epsilon = 1e-12);
    assert_relative_eq!(solution[[1, 0]], 2.0);
}

#[test]
fn rejects_mismatched_rows() {
    let coefficients = array![[1.0, 0.0], [0.0, 1.0]];
    let mut solver = GaussSolver::new();

    let result = solver.solve(coefficients.view(), &array![1.0, 2.0, 3.0]);

    assert_eq!(
        result,
        Err(Error::DimensionMismatch {
            coefficient_rows: 2,
            bias_rows: 3
        })
    );
    assert!(solver.trace().is_empty());
}

#[test]
fn dynamic_inputs_are_validated() {
    let mut solver = GaussSolver::new();
    let cube = ArrayD::<f64>::zeros(IxDyn(&[2, 2, 2]));
    let scalar = ArrayD::from_elem(IxDyn(&[]), 1.0);
    let matrix = array![[2.0, 0.0], [0.0, 2.0]].into_dyn();
    let vector = array![4.0, 6.0].into_dyn();

    assert_eq!(
        solver.solve_dyn(cube.view(), vector.view()),
        Err(Error::NotAMatrix { ndim: 3 })
    );
    assert_eq!(
        solver.solve_dyn(matrix.view(), scalar.view()),
        Err(Error::InvalidBias { ndim: 0 })
    );
    assert_eq!(
        solver.solve_dyn(matrix.view(), cube.view()),
        Err(Error::InvalidBias { ndim: 3 })
    );

    let solution = solver
        .solve_dyn(matrix.view(), vector.view())
        .expect("should solve");
    assert_eq!(solution, array![[2.0], [3.0]]);
}

#[test]
fn observer_can_abort_elimination() {
    let coefficients = array![[0.0, 1.0], [1.0, 0.0]];
    let mut solver = GaussSolver::new();

    let observer = |step: &GaussStep| {
        matches!(step.operation, Operation::Swap { .. }).then_some(Action::StopEarly)
    };
    let result = solver.solve_observed(coefficients.view(), &array![1.0, 2.0], observer);

    assert_eq!(result, Err(Error::Stopped { iteration: 1 }));
    assert_eq!(solver.trace().len(), 2);
    assert!(!solver.trace().is_finished());
}

#[test]
fn repeated_solves_do_not_leak_steps() {
    let mut solver = GaussSolver::new();
    let permuted = array![[0.0, 1.0], [1.0, 1.0]];
    solver.solve(permuted.view(), &array![1.0, 2.0]).expect("first solve");
    assert!(solver.trace().len() > 1);

    let identity: Array2<f64> = Array2::eye(2);
    solver.solve(identity.view(), &array![1.0, 2.0]).expect("second solve");
    assert_eq!(solver.trace().len(), 1);
    for (index, step) in solver.trace().steps().iter().enumerate() {
        assert_eq!(step.iteration(), index);
    }
}
