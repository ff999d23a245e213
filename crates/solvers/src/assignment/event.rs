use ndarray::Array1;

use crate::line_search;

/// Event emitted by the assignment solver after each iteration.
///
/// Iteration 1 is the first convex-combination update after the free-flow
/// loading.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The iteration number, starting at 1.
    pub iter: usize,

    /// Step size taken toward the all-or-nothing target.
    pub step_size: f64,

    /// Relative change in link flows produced by this iteration.
    pub flow_change: f64,

    /// Outcome of the step-size search for this iteration.
    pub line_search: line_search::Solution,

    /// Path flows after this iteration.
    pub path_flows: &'a Array1<f64>,
}
