use crate::Model;

/// A trait for models that represent systems of ordinary differential
/// equations (ODEs) with `N` state variables.
///
/// This trait enables a [`Model`] to be advanced in time by a numerical
/// integrator by converting between the integrator's [`State<N>`]
/// representation and the model's input/output types.
///
/// Everything in the model input that is not part of the integrated state
/// (physical parameters, configuration) is carried through `apply_state`
/// unchanged, so parameters are threaded explicitly through every derivative
/// evaluation rather than captured ambiently.
pub trait Integratable<const N: usize>: Model {
    /// Constructs the model's input by applying the given integrator state to
    /// the provided initial conditions.
    ///
    /// Called at each derivative evaluation to update the model input.
    fn apply_state(initial_conditions: &Self::Input, state: State<N>) -> Self::Input;

    /// Extracts the integrator state from the model's input.
    ///
    /// Called once at the start of integration to determine initial state
    /// values.
    fn extract_state(input: &Self::Input) -> State<N>;

    /// Extracts the state derivatives from the model's output.
    ///
    /// The returned array must align with the order of `y` in [`State`].
    fn extract_derivative(output: &Self::Output) -> [f64; N];
}

/// The state of an ODE system at a given point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<const N: usize> {
    /// The independent variable, in seconds.
    pub t: f64,

    /// The dependent variables at time `t`.
    ///
    /// The order of values must match the derivative array returned by
    /// [`Integratable::extract_derivative`].
    pub y: [f64; N],
}
