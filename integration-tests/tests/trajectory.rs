//! End-to-end checks of the reference scenario: a dipole displaced to
//! 0.5 rad in a unit-amplitude field at 1 rad/s with light damping, sampled
//! at 1000 uniform times over 20 seconds.

use std::f64::consts::PI;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use dipole_components::dipole::{Dipole, Input};
use dipole_solve::ode::{self, Config, Status};
use integration_tests::linspace;

const SIM_TIME: f64 = 20.0;
const SAMPLES: usize = 1000;

fn reference_grid() -> Vec<f64> {
    linspace(0.0, SIM_TIME, SAMPLES)
}

#[test]
fn produces_a_bounded_damped_oscillation() {
    let grid = reference_grid();

    let solution = ode::solve_unobserved(
        &Dipole,
        &Input::default(),
        [0.0, SIM_TIME],
        &grid,
        &Config::default(),
    )
    .expect("reference scenario should solve");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.trajectory.len(), SAMPLES);

    let first = &solution.trajectory[0];
    assert_relative_eq!(first.y[0], 0.5);
    assert_abs_diff_eq!(first.y[1], 0.0);

    // Weak driving and positive damping keep the swing well inside a half
    // turn; the amplitude must not grow.
    for sample in &solution.trajectory {
        assert!(
            sample.y[0].abs() < PI,
            "angle {} diverged at t = {}",
            sample.y[0],
            sample.t
        );
    }
}

#[test]
fn reproduces_every_grid_time_exactly() {
    let grid = reference_grid();

    let solution = ode::solve_unobserved(
        &Dipole,
        &Input::default(),
        [0.0, SIM_TIME],
        &grid,
        &Config::default(),
    )
    .expect("reference scenario should solve");

    assert_eq!(solution.trajectory.len(), grid.len());
    for (sample, &tq) in solution.trajectory.iter().zip(&grid) {
        assert_eq!(sample.t.to_bits(), tq.to_bits());
    }
}

#[test]
fn repeated_solves_match_bit_for_bit() {
    let grid = reference_grid();
    let config = Config::default();

    let first = ode::solve_unobserved(&Dipole, &Input::default(), [0.0, SIM_TIME], &grid, &config)
        .expect("should solve");
    let second = ode::solve_unobserved(&Dipole, &Input::default(), [0.0, SIM_TIME], &grid, &config)
        .expect("should solve");

    assert_eq!(first.accepted_steps, second.accepted_steps);
    assert_eq!(first.rejected_steps, second.rejected_steps);
    for (a, b) in first.trajectory.iter().zip(&second.trajectory) {
        assert_eq!(a.t.to_bits(), b.t.to_bits());
        assert_eq!(a.y[0].to_bits(), b.y[0].to_bits());
        assert_eq!(a.y[1].to_bits(), b.y[1].to_bits());
    }
}
