use approx::assert_abs_diff_eq;

use super::{minimize, Config, Error, Status};

fn quadratic(x: f64) -> f64 {
    (x - 0.3) * (x - 0.3)
}

#[test]
fn finds_the_quadratic_minimum() {
    let solution =
        minimize(quadratic, [0.0, 1.0], &Config::default()).expect("search should succeed");

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.x, 0.3, epsilon = 0.02);
    assert!(solution.objective <= quadratic(0.0).min(quadratic(1.0)));
}

#[test]
fn finds_an_asymmetric_minimum() {
    // exp(x) − 2x has its minimum at ln 2.
    let objective = |x: f64| x.exp() - 2.0 * x;
    let solution =
        minimize(objective, [0.0, 1.0], &Config::default()).expect("search should succeed");

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.x, std::f64::consts::LN_2, epsilon = 0.02);
    assert!(solution.objective <= objective(0.0).min(objective(1.0)));
}

#[test]
fn tighter_tolerance_never_widens_the_final_bracket() {
    let mut last_width = f64::INFINITY;
    for value_tol in [1e-2, 1e-4, 1e-6, 1e-8] {
        let config = Config {
            value_tol,
            ..Config::default()
        };
        let solution = minimize(quadratic, [0.0, 1.0], &config).expect("search should succeed");
        assert_eq!(solution.status, Status::Converged);

        let width = solution.bracket[1] - solution.bracket[0];
        assert!(width <= last_width);
        last_width = width;
    }
}

#[test]
fn reversed_bounds_are_reordered() {
    let solution =
        minimize(quadratic, [1.0, 0.0], &Config::default()).expect("search should succeed");

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.x, 0.3, epsilon = 0.02);
}

#[test]
fn flat_objective_converges_on_the_first_pass() {
    let solution = minimize(|_| 1.0, [0.0, 1.0], &Config::default()).expect("search should succeed");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 1);
    assert_abs_diff_eq!(solution.x, 0.5, epsilon = 1e-12);
}

#[test]
fn pass_cap_is_reported() {
    let config = Config {
        max_iters: 3,
        value_tol: 0.0,
    };
    let solution = minimize(quadratic, [0.0, 1.0], &config).expect("cap should not be an error");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 3);
}

#[test]
fn zero_width_bracket_is_rejected() {
    let err = minimize(quadratic, [0.25, 0.25], &Config::default())
        .expect_err("zero-width bracket should be rejected");
    assert_eq!(err, Error::ZeroWidthBracket { value: 0.25 });
}

#[test]
fn non_finite_bound_is_rejected() {
    let err = minimize(quadratic, [0.0, f64::INFINITY], &Config::default())
        .expect_err("non-finite bound should be rejected");
    assert_eq!(
        err,
        Error::NonFiniteBracket {
            value: f64::INFINITY
        }
    );
}

#[test]
fn non_finite_objective_is_rejected() {
    let err = minimize(|_| f64::NAN, [0.0, 1.0], &Config::default())
        .expect_err("NaN objective should be rejected");
    assert!(matches!(err, Error::NonFiniteObjective { .. }));
}

#[test]
fn negative_tolerance_is_rejected() {
    let config = Config {
        value_tol: -1e-3,
        ..Config::default()
    };
    let err = minimize(quadratic, [0.0, 1.0], &config).expect_err("config should be rejected");
    assert_eq!(
        err,
        Error::InvalidConfig("value_tol must be finite and non-negative")
    );
}

#[test]
fn defaults_match_the_documented_values() {
    let config = Config::default();
    assert_eq!(config.max_iters, 100);
    assert_eq!(config.value_tol, 1e-4);
}
