//! Failure-path checks: every bad input surfaces as an `Err` from `solve`,
//! never as a hang or a partial trajectory.

use dipole_components::dipole::{self, Dipole, Input};
use dipole_solve::ode::{self, Config};
use integration_tests::linspace;

#[test]
fn stiff_damping_with_a_coarse_step_floor_stalls() {
    let input = Input::default()
        .angular_velocity_si(1.0)
        .damping_si(1e9);
    let config = Config {
        min_step: 1e-3,
        ..Config::default()
    };

    let result = ode::solve_unobserved(&Dipole, &input, [0.0, 10.0], &[0.0, 10.0], &config);

    assert!(matches!(result, Err(ode::Error::Stalled { .. })));
}

#[test]
fn non_positive_inertia_surfaces_as_a_model_error() {
    let input = Input::default().inertia_si(0.0);

    let result = ode::solve_unobserved(
        &Dipole,
        &input,
        [0.0, 1.0],
        &[0.0, 1.0],
        &Config::default(),
    );

    match result {
        Err(ode::Error::Model(source)) => {
            assert!(source.downcast_ref::<dipole::Error>().is_some());
        }
        other => panic!("expected a model error, got {other:?}"),
    }
}

#[test]
fn non_finite_initial_state_is_rejected() {
    let input = Input::default().angle_si(f64::NAN);

    let result = ode::solve_unobserved(
        &Dipole,
        &input,
        [0.0, 1.0],
        &[0.0, 1.0],
        &Config::default(),
    );

    assert!(matches!(result, Err(ode::Error::NonFiniteState { .. })));
}

#[test]
fn grid_reaching_past_the_span_is_rejected() {
    let grid = linspace(0.0, 25.0, 100);

    let result = ode::solve_unobserved(
        &Dipole,
        &Input::default(),
        [0.0, 20.0],
        &grid,
        &Config::default(),
    );

    assert!(matches!(result, Err(ode::Error::GridPointOutOfSpan { .. })));
}

#[test]
fn decreasing_grid_is_rejected() {
    let result = ode::solve_unobserved(
        &Dipole,
        &Input::default(),
        [0.0, 20.0],
        &[0.0, 10.0, 5.0],
        &Config::default(),
    );

    assert!(matches!(result, Err(ode::Error::NonMonotonicGrid { .. })));
}
