//! # Damped Rotor
//!
//! Solves the reference scenario — a dipole displaced to 0.5 rad in a
//! unit-amplitude oscillating field — and plots the resulting angle history.
//!
//! To run this example:
//!
//! ```sh
//! cargo run --example damped_rotor --release
//! ```

use dipole_components::dipole::{Dipole, Input};
use dipole_plot::PlotApp;
use dipole_solve::ode::{self, Config};

/// Length of the simulated window, in seconds.
const SIM_TIME: f64 = 20.0;

/// Number of evaluation grid points.
const SAMPLES: usize = 1000;

fn main() {
    let initial = Input::default();
    let grid: Vec<f64> = (0..SAMPLES)
        .map(|i| SIM_TIME * (i as f64) / ((SAMPLES - 1) as f64))
        .collect();

    let solution = ode::solve_unobserved(
        &Dipole,
        &initial,
        [0.0, SIM_TIME],
        &grid,
        &Config::default(),
    )
    .expect("reference scenario should solve");

    println!(
        "accepted {} steps ({} rejected), {} model calls",
        solution.accepted_steps, solution.rejected_steps, solution.model_calls
    );

    let angles: Vec<[f64; 2]> = solution
        .trajectory
        .iter()
        .map(|sample| [sample.t, sample.y[0]])
        .collect();

    PlotApp::new()
        .axis_labels("time (s)", "angle (rad)")
        .add_series("θ", &angles)
        .run("Damped Rotor")
        .unwrap();
}
