use ndarray::Array1;

/// How an assignment ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The relative change in link flows dropped below the tolerance.
    Converged,

    /// The iteration cap was reached first.
    MaxIters,

    /// An observer stopped the solver early.
    StoppedByObserver,
}

/// The result of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver ended.
    pub status: Status,

    /// Flow on each candidate path, in listing order.
    pub path_flows: Array1<f64>,

    /// Cost of each candidate path at the final flows, priced by the
    /// configured cost model.
    pub path_costs: Array1<f64>,

    /// Total cost `Σ path_flow · path_cost` at the final flows.
    pub total_cost: f64,

    /// Iterations performed.
    pub iters: usize,

    /// Relative change in link flows over the last iteration.
    pub flow_change: f64,
}
