//! Adaptive initial value problem solver.
//!
//! This module integrates an [`Integratable`] model over a time span using
//! the Dormand–Prince 5(4) embedded Runge–Kutta pair. Each step propagates
//! the fifth-order solution while the embedded fourth-order estimate drives
//! step-size control, and a continuous extension of every accepted step
//! reports the solution at the caller's evaluation grid times.
//!
//! ```ignore
//! use dipole_solve::ode;
//!
//! let solution = ode::solve_unobserved(&model, &initial, [0.0, 20.0], &grid, &config)?;
//!
//! for sample in &solution.trajectory {
//!     println!("t = {}: {:?}", sample.t, sample.y);
//! }
//! ```

mod config;
mod dense;
mod error;
mod solution;
mod tableau;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

use dipole_core::{
    Model,
    ode::{Integratable, State},
};

use crate::Observer;
use dense::Interpolant;
use tableau::{A, C, E, STAGES};

/// Step-factor safety margin.
const SAFETY: f64 = 0.9;

/// Smallest allowed ratio between consecutive step sizes.
const MIN_FACTOR: f64 = 0.1;

/// Largest allowed ratio between consecutive step sizes.
const MAX_FACTOR: f64 = 10.0;

/// Control actions supported by the solver.
pub enum Action {
    /// Stop the solver early, keeping the samples produced so far.
    StopEarly,
}

/// Step event emitted after each accepted step.
#[derive(Debug, Clone, Copy)]
pub struct Event<const N: usize> {
    /// Accepted step counter (1-based).
    pub step: usize,
    /// Size of the accepted step.
    pub h: f64,
    /// Committed state at the end of the step.
    pub state: State<N>,
}

/// Integrates the model from `span[0]` to `span[1]`, sampling the solution
/// at every grid time.
///
/// The grid must be non-decreasing and lie within the span; it is
/// independent of the internal adaptive steps, which are chosen purely by
/// local error control. Observers see each accepted step and may stop the
/// solve early.
///
/// The same model, initial conditions, span, grid, and config always produce
/// the same trajectory.
///
/// # Errors
///
/// Returns an error if the config, span, or grid is invalid, if the state
/// becomes non-finite, if the step size collapses below `config.min_step`
/// or the attempt count exceeds `config.max_steps` before reaching the end
/// of the span, or if the model fails.
pub fn solve<M, Obs, const N: usize>(
    model: &M,
    initial_conditions: &M::Input,
    span: [f64; 2],
    grid: &[f64],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    M: Integratable<N>,
    Obs: Observer<Event<N>, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let (t_start, t_end) = validate_span(span)?;
    validate_grid(grid, t_start, t_end)?;

    let y0 = M::extract_state(initial_conditions).y;
    if !y0.iter().all(|v| v.is_finite()) {
        return Err(Error::NonFiniteState { t: t_start });
    }

    let mut trajectory = Vec::with_capacity(grid.len());
    let mut grid_idx = 0;

    // Grid times at (or clamped to) the start of the span sample the
    // initial state directly.
    while grid_idx < grid.len() && grid[grid_idx] <= t_start {
        trajectory.push(State { t: t_start, y: y0 });
        grid_idx += 1;
    }

    let span_width = t_end - t_start;
    let mut h = config
        .initial_step
        .unwrap_or(span_width / 100.0)
        .min(config.max_step)
        .min(span_width);

    let mut t = t_start;
    let mut y = y0;
    let mut accepted_steps = 0;
    let mut rejected_steps = 0;
    let mut model_calls: u32 = 0;
    let mut status = Status::Complete;

    let mut k = [[0.0; N]; STAGES];
    k[0] = derivative(model, initial_conditions, t, y)?;
    model_calls += 1;

    while t < t_end {
        if accepted_steps + rejected_steps >= config.max_steps {
            return Err(Error::StepLimitExceeded {
                max_steps: config.max_steps,
            });
        }

        let remaining = t_end - t;
        let last = h >= remaining;
        let h_step = if last { remaining } else { h };

        // Stage sweep. The final stage lands on the fifth-order solution,
        // so its derivative doubles as the next step's first stage.
        let mut y_new = [0.0; N];
        for s in 1..STAGES {
            for i in 0..N {
                let mut acc = 0.0;
                for j in 0..s {
                    acc += A[s][j] * k[j][i];
                }
                y_new[i] = y[i] + h_step * acc;
            }
            k[s] = derivative(model, initial_conditions, t + C[s] * h_step, y_new)?;
            model_calls += 1;
        }

        if !y_new.iter().all(|v| v.is_finite()) {
            return Err(Error::NonFiniteState { t: t + h_step });
        }

        let mut err_norm: f64 = 0.0;
        for i in 0..N {
            let mut e = 0.0;
            for s in 0..STAGES {
                e += E[s] * k[s][i];
            }
            let scale = config.abs_tol + config.rel_tol * y[i].abs().max(y_new[i].abs());
            err_norm = err_norm.max((h_step * e / scale).abs());
        }

        if err_norm <= 1.0 {
            let interpolant = Interpolant::new(t, h_step, &y, &y_new, &k);
            let t_new = if last { t_end } else { t + h_step };

            while grid_idx < grid.len() {
                let tq = grid[grid_idx].clamp(t_start, t_end);
                if tq > t_new {
                    break;
                }
                let yq = if tq >= t_new {
                    y_new
                } else {
                    interpolant.eval(tq)
                };
                trajectory.push(State { t: tq, y: yq });
                grid_idx += 1;
            }

            accepted_steps += 1;
            t = t_new;
            y = y_new;
            k[0] = k[STAGES - 1];

            let event = Event {
                step: accepted_steps,
                h: h_step,
                state: State { t, y },
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                status = Status::StoppedByObserver;
                break;
            }

            h = (h_step * step_factor(err_norm))
                .min(config.max_step)
                .max(config.min_step);
        } else {
            rejected_steps += 1;
            h = h_step * step_factor(err_norm).min(1.0);
            if h < config.min_step {
                return Err(Error::Stalled { t, step_size: h });
            }
        }
    }

    Ok(Solution {
        status,
        trajectory,
        accepted_steps,
        rejected_steps,
        model_calls,
    })
}

/// Integrates the model without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<M, const N: usize>(
    model: &M,
    initial_conditions: &M::Input,
    span: [f64; 2],
    grid: &[f64],
    config: &Config,
) -> Result<Solution<N>, Error>
where
    M: Integratable<N>,
{
    solve(model, initial_conditions, span, grid, config, ())
}

/// Evaluates the model's state derivative at `(t, y)`.
fn derivative<M, const N: usize>(
    model: &M,
    initial_conditions: &M::Input,
    t: f64,
    y: [f64; N],
) -> Result<[f64; N], Error>
where
    M: Integratable<N>,
{
    let input = M::apply_state(initial_conditions, State { t, y });
    let output = model
        .call(&input)
        .map_err(|e| Error::Model(Box::new(e)))?;
    Ok(M::extract_derivative(&output))
}

/// Computes the step-size ratio for the next attempt from the scaled error
/// norm, clamped to a safe range.
fn step_factor(err_norm: f64) -> f64 {
    if !err_norm.is_finite() {
        return MIN_FACTOR;
    }
    (SAFETY * err_norm.max(1e-16).powf(-0.2)).clamp(MIN_FACTOR, MAX_FACTOR)
}

/// Validates span endpoints and returns them as `(start, end)`.
fn validate_span(span: [f64; 2]) -> Result<(f64, f64), Error> {
    let [start, end] = span;

    if !start.is_finite() {
        return Err(Error::NonFiniteSpan { value: start });
    }
    if !end.is_finite() {
        return Err(Error::NonFiniteSpan { value: end });
    }
    if end <= start {
        return Err(Error::NonForwardSpan { start, end });
    }

    Ok((start, end))
}

/// Validates that the grid is finite, non-decreasing, and inside the span.
///
/// A sliver of floating-point fuzz is tolerated at both span endpoints;
/// such grid times are clamped onto the span during sampling.
fn validate_grid(grid: &[f64], t_start: f64, t_end: f64) -> Result<(), Error> {
    let fuzz = (t_end - t_start) * 1e-12;
    let mut prev = f64::NEG_INFINITY;

    for (index, &value) in grid.iter().enumerate() {
        if !value.is_finite() {
            return Err(Error::NonFiniteGrid { index, value });
        }
        if value < t_start - fuzz || value > t_end + fuzz {
            return Err(Error::GridPointOutOfSpan {
                index,
                value,
                start: t_start,
                end: t_end,
            });
        }
        if value < prev {
            return Err(Error::NonMonotonicGrid { index, prev, value });
        }
        prev = value;
    }

    Ok(())
}
