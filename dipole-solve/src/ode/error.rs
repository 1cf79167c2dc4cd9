use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur while solving an initial value problem.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("span contains non-finite value: {value}")]
    NonFiniteSpan { value: f64 },

    #[error("span must satisfy start < end, got [{start}, {end}]")]
    NonForwardSpan { start: f64, end: f64 },

    #[error("grid contains non-finite value at index {index}: {value}")]
    NonFiniteGrid { index: usize, value: f64 },

    #[error("grid must be non-decreasing: grid[{index}] = {value} follows {prev}")]
    NonMonotonicGrid { index: usize, prev: f64, value: f64 },

    #[error("grid[{index}] = {value} lies outside the span [{start}, {end}]")]
    GridPointOutOfSpan {
        index: usize,
        value: f64,
        start: f64,
        end: f64,
    },

    #[error("step size collapsed to {step_size} at t = {t} before reaching the end of the span")]
    Stalled { t: f64, step_size: f64 },

    #[error("attempted steps exceeded the limit of {max_steps}")]
    StepLimitExceeded { max_steps: usize },

    #[error("state became non-finite at t = {t}")]
    NonFiniteState { t: f64 },

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}
