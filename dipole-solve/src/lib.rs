//! Numerical solvers for the dipole simulation framework.
//!
//! The [`ode`] module integrates any [`dipole_core::ode::Integratable`]
//! model over a time span with an adaptive-step embedded Runge–Kutta pair,
//! reporting the solution on a caller-supplied evaluation grid.

mod observe;

pub mod ode;

pub use observe::Observer;
