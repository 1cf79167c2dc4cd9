//! Core traits and types for the dipole simulation framework.
//!
//! A [`Model`] maps an input to an output. A model whose output contains the
//! time derivatives of state carried in its input can additionally implement
//! [`ode::Integratable`], which lets a numerical integrator advance it in
//! time without knowing anything about its domain.

mod model;
pub mod ode;

pub use model::{Model, Snapshot};
