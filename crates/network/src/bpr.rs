//! Bureau of Public Roads (BPR) congestion functions.
//!
//! Travel time on a link grows with the ratio of its flow to its capacity:
//!
//! ```text
//! t(f) = t0 · (1 + 0.15 · (f / cap)^4)
//! ```
//!
//! [`potential`] is the exact antiderivative of [`travel_time`] in `f`;
//! summed over all links it is the Beckmann objective whose minimizer is the
//! user equilibrium. [`marginal_cost`] is the derivative of [`travel_time`]
//! in `f`, the building block of marginal social cost pricing.
//!
//! All functions assume a positive capacity. [`Network::new`] enforces that
//! before any evaluation happens; a zero capacity here produces a non-finite
//! result rather than a panic.
//!
//! [`Network::new`]: crate::Network::new

/// BPR congestion coefficient.
const ALPHA: f64 = 0.15;

/// BPR congestion exponent.
const BETA: i32 = 4;

/// Travel time on a link carrying `flow`.
///
/// `free_flow_time` is the empty-road travel time and `capacity` the
/// practical capacity of the link. At zero flow this is exactly
/// `free_flow_time`, and it increases strictly with `flow`.
#[must_use]
pub fn travel_time(flow: f64, free_flow_time: f64, capacity: f64) -> f64 {
    free_flow_time * (1.0 + ALPHA * (flow / capacity).powi(BETA))
}

/// Antiderivative of [`travel_time`] with respect to `flow`.
#[must_use]
pub fn potential(flow: f64, free_flow_time: f64, capacity: f64) -> f64 {
    free_flow_time * flow
        + ALPHA / f64::from(BETA + 1) * free_flow_time * flow.powi(BETA + 1) / capacity.powi(BETA)
}

/// Derivative of [`travel_time`] with respect to `flow`.
///
/// Not used by the user-equilibrium loop itself; it prices the congestion a
/// traveler imposes on others in the system-optimum mode.
#[must_use]
pub fn marginal_cost(flow: f64, free_flow_time: f64, capacity: f64) -> f64 {
    f64::from(BETA) * ALPHA * free_flow_time * flow.powi(BETA - 1) / capacity.powi(BETA)
}

/// Selects the link cost driving an assignment.
///
/// Under [`CostModel::UserEquilibrium`] each traveler pays the travel time
/// they experience, and equilibria satisfy Wardrop's first principle. Under
/// [`CostModel::SystemOptimum`] travelers are charged the marginal social
/// cost `t(f) + f · t′(f)` instead, steering the assignment toward low total
/// travel time; no global-optimality guarantee is attached to that mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum CostModel {
    /// Price links at the travel time travelers experience.
    #[default]
    UserEquilibrium,
    /// Price links at the marginal social cost `t(f) + f · t′(f)`.
    SystemOptimum,
}

impl CostModel {
    /// Cost of one unit of flow on a link carrying `flow`.
    #[must_use]
    pub fn link_cost(self, flow: f64, free_flow_time: f64, capacity: f64) -> f64 {
        match self {
            Self::UserEquilibrium => travel_time(flow, free_flow_time, capacity),
            Self::SystemOptimum => {
                travel_time(flow, free_flow_time, capacity)
                    + flow * marginal_cost(flow, free_flow_time, capacity)
            }
        }
    }

    /// Antiderivative of [`Self::link_cost`] with respect to `flow`.
    ///
    /// Summed over all links this is the objective the step-size search
    /// minimizes: the Beckmann potential under user equilibrium, the total
    /// link travel time `f · t(f)` under system optimum.
    #[must_use]
    pub fn link_potential(self, flow: f64, free_flow_time: f64, capacity: f64) -> f64 {
        match self {
            Self::UserEquilibrium => potential(flow, free_flow_time, capacity),
            Self::SystemOptimum => flow * travel_time(flow, free_flow_time, capacity),
        }
    }
}
