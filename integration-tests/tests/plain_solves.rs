use approx::assert_relative_eq;
use integration_tests::{ProportionalRows, max_residual};
use newt_solve::newton::{self, Config, Error, Status};
use newt_solve::{Solver, SolverStatus};
use newt_systems::{CircleLine, ParabolaExponential, TrigExponential};

fn config(max_iters: usize, eps: f64) -> Config<f64> {
    Config { max_iters, eps }
}

#[test]
fn circle_line_round_trip() {
    let mut x = [0.0, 1.0];
    let solution = newton::solve(&CircleLine, &mut x, &config(100, 1e-6)).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters < 10);
    assert_relative_eq!(x[0], 2.414213562, epsilon = 1e-6);
    assert_relative_eq!(x[1], 1.414213562, epsilon = 1e-6);
}

#[test]
fn trig_exponential_reaches_textbook_root() {
    let mut x = [0.1, 0.1, -0.1];
    let solution =
        newton::solve(&TrigExponential, &mut x, &config(100, 1e-10)).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(x[0], 0.5, epsilon = 1e-8);
    assert_relative_eq!(x[1], 0.0, epsilon = 1e-8);
    assert_relative_eq!(x[2], -std::f64::consts::FRAC_PI_6, epsilon = 1e-8);
}

#[test]
fn reported_roots_satisfy_the_original_equations() {
    // Whatever pivot order elimination chose, the reordered solution must
    // drive every original (non-linearized) equation to zero.
    let mut x = [0.0, 1.0];
    newton::solve(&CircleLine, &mut x, &config(100, 1e-9)).expect("should converge");
    assert!(max_residual(&CircleLine, &x) < 1e-6);

    let mut x = [2.8, 1.0];
    newton::solve(&ParabolaExponential, &mut x, &config(100, 1e-9)).expect("should converge");
    assert!(max_residual(&ParabolaExponential, &x) < 1e-6);

    let mut x = [0.1, 0.1, -0.1];
    newton::solve(&TrigExponential, &mut x, &config(100, 1e-9)).expect("should converge");
    assert!(max_residual(&TrigExponential, &x) < 1e-6);
}

#[test]
fn proportional_jacobian_rows_are_singular_on_iteration_one() {
    let mut x = [1.0, 2.0];
    let result = newton::solve(&ProportionalRows, &mut x, &config(50, 1e-6));
    assert!(matches!(result, Err(Error::Singular { iteration: 1 })));
}

#[test]
fn iteration_cap_is_reported_exactly() {
    // Two iterations are nowhere near enough for 1e-12 from this guess.
    let mut x = [0.0, 1.0];
    let solution =
        newton::solve(&CircleLine, &mut x, &config(2, 1e-12)).expect("cap is not an error");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 2);
}

#[test]
fn facade_reports_success_with_metadata() {
    let system = CircleLine;
    let mut solver = Solver::new();
    solver.attach(&system);

    assert!(solver.is_ready());
    assert_eq!(solver.system_name(), "Quadratic System");
    assert_eq!(solver.equation_count(), 2);

    let mut x = [0.0, 1.0];
    let outcome = solver.solve(&mut x, 100, 1e-6);

    assert_eq!(outcome.status, SolverStatus::Success);
    assert!(outcome.iterations < 10);
    assert_eq!(outcome.solution, x.to_vec());
    assert!(outcome.message.is_empty());
}

#[test]
fn facade_maps_singular_and_cap_statuses() {
    let singular = ProportionalRows;
    let mut solver = Solver::new();
    solver.attach(&singular);
    let mut x = [1.0, 2.0];
    let outcome = solver.solve(&mut x, 50, 1e-6);
    assert_eq!(outcome.status, SolverStatus::SingularMatrix);
    assert_eq!(outcome.iterations, 1);
    assert!(!outcome.message.is_empty());

    let capped = CircleLine;
    let mut solver = Solver::new();
    solver.attach(&capped);
    let mut x = [0.0, 1.0];
    let outcome = solver.solve(&mut x, 2, 1e-12);
    assert_eq!(outcome.status, SolverStatus::MaxIterationsExceeded);
    assert_eq!(outcome.iterations, 2);
}

#[test]
fn facade_rejects_bad_inputs_without_iterating() {
    let system = CircleLine;
    let mut solver = Solver::new();
    solver.attach(&system);

    let mut x = [0.0, 1.0];
    let outcome = solver.solve(&mut x, 0, 1e-6);
    assert_eq!(outcome.status, SolverStatus::InvalidInput);
    assert_eq!(outcome.iterations, 0);

    let outcome = solver.solve(&mut x, 10, -1.0);
    assert_eq!(outcome.status, SolverStatus::InvalidInput);
    assert_eq!(outcome.iterations, 0);
}
