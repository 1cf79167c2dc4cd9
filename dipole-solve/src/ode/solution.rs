use dipole_core::ode::State;

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the end of the span with every grid point sampled.
    Complete,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an initial value problem solve.
///
/// The trajectory holds exactly one entry per evaluation grid point, in grid
/// order, unless an observer stopped the solve early, in which case it holds
/// the samples produced up to that point.
#[derive(Debug, Clone)]
pub struct Solution<const N: usize> {
    /// Final solver status.
    pub status: Status,
    /// Sampled states, one per evaluation grid point.
    pub trajectory: Vec<State<N>>,
    /// Number of accepted steps.
    pub accepted_steps: usize,
    /// Number of rejected step attempts.
    pub rejected_steps: usize,
    /// Number of times the model was called.
    pub model_calls: u32,
}
