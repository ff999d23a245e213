//! Equilibrium traffic assignment by convex combinations.
//!
//! The solver alternates between pricing paths at the current flows and
//! shifting flow toward the resulting cheapest paths:
//!
//! ```text
//! flows_{n+1} = (1 − α)·flows_n + α·target_n
//! ```
//!
//! where `target_n` puts every demand entirely on its cheapest path and the
//! step size `α ∈ [0, 1]` minimizes the cost-model potential along the
//! blend. Under
//! [`CostModel::UserEquilibrium`](wardrop_network::CostModel::UserEquilibrium)
//! the fixed points of this scheme are Wardrop equilibria: no traveler can
//! lower their cost by switching paths.
//!
//! # Example
//!
//! ```ignore
//! use wardrop_solvers::assignment;
//!
//! let solution = assignment::solve_unobserved(&network, &Config::default())?;
//!
//! for (flow, cost) in solution.path_flows.iter().zip(&solution.path_costs) {
//!     println!("{flow:.3} vehicles at cost {cost:.3}");
//! }
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use ndarray::Array1;
use wardrop_network::{CostModel, Network};

use crate::line_search;
use crate::observe::Observer;

/// Step sizes are convex-combination weights.
const STEP_BRACKET: [f64; 2] = [0.0, 1.0];

/// Assigns every OD pair's demand to its candidate paths.
///
/// # Algorithm
///
/// 1. Load every OD pair's whole demand onto its cheapest path at
///    free-flow costs.
/// 2. For each iteration:
///    - Price all paths at the current flows and build the all-or-nothing
///      target from the resulting cheapest paths.
///    - Search the step size `α ∈ [0, 1]` minimizing the potential of the
///      blend `(1 − α)·flows + α·target`.
///    - Replace the flows with that blend.
///    - Emit an [`Event`] to the observer.
///    - Stop once the relative change in link flows drops below
///      [`Config::flow_tol`].
/// 3. Price the final flows and return the [`Solution`].
///
/// # Observer
///
/// The observer receives an [`Event`] after each iteration and may return
/// [`Action::StopEarly`] to terminate the assignment early. Convergence on
/// the same iteration takes precedence over stopping early.
///
/// # Errors
///
/// Returns an error if the config fails validation or a step-size search
/// fails.
pub fn solve<Obs>(network: &Network, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate().map_err(Error::InvalidConfig)?;

    // Free-flow loading seeds the iteration.
    let empty = Array1::zeros(network.num_paths());
    let free_flow_costs = network.path_costs_with(&empty, config.cost_model);
    let mut path_flows = network.all_or_nothing(&free_flow_costs);
    let mut link_flows = network.link_flows(&path_flows);

    let mut flow_change = f64::INFINITY;
    for iter in 1..=config.max_iters {
        let costs = network.path_costs_with(&path_flows, config.cost_model);
        let target = network.all_or_nothing(&costs);

        let search = line_search::minimize(
            |alpha| {
                network.potential(
                    &(&path_flows * (1.0 - alpha) + &target * alpha),
                    config.cost_model,
                )
            },
            STEP_BRACKET,
            &config.line_search,
        )?;
        let alpha = search.x;

        // Convex blend of two non-negative vectors; flows stay non-negative
        // in floating point.
        path_flows = &path_flows * (1.0 - alpha) + &target * alpha;
        debug_assert!(path_flows.iter().all(|&flow| flow >= 0.0));

        let new_link_flows = network.link_flows(&path_flows);
        flow_change = relative_change(&link_flows, &new_link_flows);
        link_flows = new_link_flows;

        let event = Event {
            iter,
            step_size: alpha,
            flow_change,
            line_search: search,
            path_flows: &path_flows,
        };
        let action = observer.observe(&event);

        if flow_change < config.flow_tol {
            return Ok(finish(
                network,
                config.cost_model,
                path_flows,
                Status::Converged,
                iter,
                flow_change,
            ));
        }
        if let Some(Action::StopEarly) = action {
            return Ok(finish(
                network,
                config.cost_model,
                path_flows,
                Status::StoppedByObserver,
                iter,
                flow_change,
            ));
        }
    }

    Ok(finish(
        network,
        config.cost_model,
        path_flows,
        Status::MaxIters,
        config.max_iters,
        flow_change,
    ))
}

/// Assigns demands without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the config fails validation or a step-size search
/// fails.
pub fn solve_unobserved(network: &Network, config: &Config) -> Result<Solution, Error> {
    solve(network, config, ())
}

/// Relative L2 change between consecutive link-flow vectors.
///
/// The change is `‖new − old‖₂ / Σ old`; an unchanged all-zero loading
/// settles the `0/0` case to zero change.
fn relative_change(old: &Array1<f64>, new: &Array1<f64>) -> f64 {
    let diff = new - old;
    let change = diff.dot(&diff).sqrt();
    if change == 0.0 {
        0.0
    } else {
        change / old.sum()
    }
}

fn finish(
    network: &Network,
    model: CostModel,
    path_flows: Array1<f64>,
    status: Status,
    iters: usize,
    flow_change: f64,
) -> Solution {
    let path_costs = network.path_costs_with(&path_flows, model);
    let total_cost = network.total_cost(&path_flows, &path_costs);
    Solution {
        status,
        path_flows,
        path_costs,
        total_cost,
        iters,
        flow_change,
    }
}
