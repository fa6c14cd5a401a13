use newt_core::{EquationSystem, Interval};
use newt_solve::newton::{self, Config, Status};
use newt_solve::{Solver, SolverStatus};
use newt_systems::{CircleLine, ParabolaExponential, TrigExponential};

fn boxed(values: &[f64], half_width: f64) -> Vec<Interval> {
    values
        .iter()
        .map(|&v| Interval::new(v - half_width, v + half_width).expect("finite box"))
        .collect()
}

fn interval_config(eps: f64) -> Config<Interval> {
    Config {
        max_iters: 100,
        eps: Interval::point(eps),
    }
}

#[test]
fn circle_line_enclosure_tracks_the_root() {
    let r = [1.0 + std::f64::consts::SQRT_2, std::f64::consts::SQRT_2];
    let mut x = boxed(&r, 1e-10);

    let solution =
        newton::solve(&CircleLine, &mut x, &interval_config(1e-6)).expect("nondegenerate Jacobian");

    // The true root starts inside the box, so every iterate must keep
    // enclosing it; a singular report here would be a soundness bug.
    assert_eq!(solution.status, Status::Converged);
    assert!(x[0].contains(r[0]));
    assert!(x[1].contains(r[1]));
    assert!(x[0].width() < 1e-7);
    assert!(x[1].width() < 1e-7);
}

#[test]
fn trig_exponential_enclosure_tracks_the_root() {
    let r = [0.5, 0.0, -std::f64::consts::FRAC_PI_6];
    let mut x = boxed(&r, 1e-10);

    let solution = newton::solve(&TrigExponential, &mut x, &interval_config(1e-6))
        .expect("nondegenerate Jacobian");

    assert_eq!(solution.status, Status::Converged);
    for (enclosure, root) in x.iter().zip(&r) {
        assert!(enclosure.contains(*root));
        assert!(enclosure.width() < 1e-6);
    }
}

#[test]
fn interval_evaluation_encloses_plain_evaluation() {
    let point = [2.5_f64, 0.9];
    let as_intervals: Vec<Interval> = point.iter().map(|&v| Interval::point(v)).collect();

    for i in 0..2 {
        let plain = ParabolaExponential.eval(i, &point);
        let enclosed: Interval = ParabolaExponential.eval(i, &as_intervals);
        assert!(enclosed.contains(plain));
    }
}

#[test]
fn facade_runs_the_interval_instantiation() {
    let system = CircleLine;
    let mut solver = Solver::new();
    solver.attach(&system);

    let r = [1.0 + std::f64::consts::SQRT_2, std::f64::consts::SQRT_2];
    let mut x = boxed(&r, 1e-10);
    let outcome = solver.solve(&mut x, 100, Interval::point(1e-6));

    assert_eq!(outcome.status, SolverStatus::Success);
    assert!(outcome.solution[0].contains(r[0]));
    assert!(outcome.solution[1].contains(r[1]));
}

#[test]
fn wide_jacobian_enclosure_reports_singular_not_garbage() {
    // A box this wide makes every derivative enclosure in the first
    // equation straddle zero, which is a genuine sign ambiguity.
    let mut x = vec![
        Interval::new(-1.0, 1.0).expect("finite box"),
        Interval::new(-1.0, 1.0).expect("finite box"),
    ];

    let result = newton::solve(&CircleLine, &mut x, &interval_config(1e-6));
    assert!(matches!(
        result,
        Err(newton::Error::Singular { iteration: 1 })
    ));
}
