/// Configuration for the adaptive ODE solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Relative error tolerance.
    pub rel_tol: f64,
    /// Absolute error tolerance.
    pub abs_tol: f64,
    /// Size of the first attempted step, or `None` to derive one from the
    /// span width.
    pub initial_step: Option<f64>,
    /// Floor below which a rejected step is reported as stalled.
    pub min_step: f64,
    /// Ceiling on the size of any attempted step.
    pub max_step: f64,
    /// Hard cap on attempted steps (accepted plus rejected).
    pub max_steps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rel_tol: 1e-6,
            abs_tol: 1e-8,
            initial_step: None,
            min_step: 1e-12,
            max_step: f64::INFINITY,
            max_steps: 1_000_000,
        }
    }
}

impl Config {
    /// Validates the tolerance and step-size settings.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance or step bound is out of range.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.rel_tol.is_finite() || self.rel_tol < 0.0 {
            return Err("rel_tol must be finite and non-negative");
        }
        if !self.abs_tol.is_finite() || self.abs_tol < 0.0 {
            return Err("abs_tol must be finite and non-negative");
        }
        if self.rel_tol == 0.0 && self.abs_tol == 0.0 {
            return Err("rel_tol and abs_tol must not both be zero");
        }
        if let Some(h) = self.initial_step {
            if !h.is_finite() || h <= 0.0 {
                return Err("initial_step must be finite and positive");
            }
        }
        if !self.min_step.is_finite() || self.min_step < 0.0 {
            return Err("min_step must be finite and non-negative");
        }
        if self.max_step <= 0.0 || self.max_step.is_nan() {
            return Err("max_step must be positive");
        }
        if self.max_step < self.min_step {
            return Err("max_step must not be smaller than min_step");
        }
        if self.max_steps == 0 {
            return Err("max_steps must be at least one");
        }
        Ok(())
    }
}
