use wardrop_network::CostModel;

use crate::line_search;

/// Assignment solver settings.
///
/// By default the solver stops once the relative change in link flows
/// drops below `0.01` and never runs more than 500 iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Hard cap on solver iterations. Exhausting it is reported as
    /// [`Status::MaxIters`](super::Status::MaxIters), not as an error.
    pub max_iters: usize,
    /// Relative link-flow change below which the assignment counts as
    /// converged. A zero tolerance disables the test and always runs to
    /// the cap.
    pub flow_tol: f64,
    /// Link cost model the assignment equilibrates against.
    pub cost_model: CostModel,
    /// Settings for the step-size search along each descent direction.
    pub line_search: line_search::Config,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 500,
            flow_tol: 0.01,
            cost_model: CostModel::default(),
            line_search: line_search::Config::default(),
        }
    }
}

impl Config {
    /// Validates the tolerances, including the nested line-search config.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.flow_tol.is_finite() || self.flow_tol < 0.0 {
            return Err("flow_tol must be finite and non-negative");
        }
        self.line_search.validate()
    }
}
