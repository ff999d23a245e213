/// Golden-section search settings.
///
/// By default the search stops once the interior objective values agree
/// within `1e-4` and never runs more than 100 passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Hard cap on search passes. Exhausting it is reported as
    /// [`Status::MaxIters`](super::Status::MaxIters), not as an error.
    pub max_iters: usize,
    /// Objective-value agreement below which the search stops. A zero
    /// tolerance disables the value test and always runs to the cap.
    pub value_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            value_tol: 1e-4,
        }
    }
}

impl Config {
    /// Validates that the tolerance is usable.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.value_tol.is_finite() || self.value_tol < 0.0 {
            return Err("value_tol must be finite and non-negative");
        }
        Ok(())
    }
}
