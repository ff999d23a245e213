//! The read-only assignment context: links, OD pairs, and candidate paths.
//!
//! A [`Network`] is validated once at construction and never mutated.
//! Everything downstream (link flows, path costs, cheapest paths) is a
//! pure function of the network and a path-flow vector, so re-evaluating
//! without a flow change is bit-identical.

use ndarray::{Array1, Zip};

use crate::{CostModel, Link, NetworkError, OdPair, Path};

/// The cheapest candidate path found for one OD pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheapestPath {
    /// 0-based position of the path in [`Network::paths`].
    pub path: usize,
    /// The path's cost at the evaluated flows.
    pub cost: f64,
}

/// An immutable road network together with its travel demands and candidate
/// paths.
///
/// Construction is the single validation point: a value of this type always
/// satisfies the data contract (finite positive capacities, in-range
/// references, at least one candidate path per OD pair), and evaluation
/// relies on that without re-checking.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    links: Vec<Link>,
    od_pairs: Vec<OdPair>,
    paths: Vec<Path>,
    free_flow_times: Array1<f64>,
    capacities: Array1<f64>,
}

impl Network {
    /// Assembles and validates a network.
    ///
    /// # Errors
    ///
    /// Returns the first [`NetworkError`] found: a non-finite or
    /// non-positive capacity, a non-finite or negative free-flow time or
    /// demand, a path referencing a link or OD pair beyond the tables, or
    /// an OD pair with no candidate path.
    pub fn new(
        links: Vec<Link>,
        od_pairs: Vec<OdPair>,
        paths: Vec<Path>,
    ) -> Result<Self, NetworkError> {
        for (row, link) in (1..).zip(&links) {
            if !link.capacity.is_finite() || link.capacity <= 0.0 {
                return Err(NetworkError::InvalidCapacity {
                    link: row,
                    capacity: link.capacity,
                });
            }
            if !link.free_flow_time.is_finite() || link.free_flow_time < 0.0 {
                return Err(NetworkError::InvalidFreeFlowTime {
                    link: row,
                    value: link.free_flow_time,
                });
            }
        }

        for (row, od) in (1..).zip(&od_pairs) {
            if !od.demand.is_finite() || od.demand < 0.0 {
                return Err(NetworkError::InvalidDemand {
                    od: row,
                    demand: od.demand,
                });
            }
        }

        let mut has_path = vec![false; od_pairs.len()];
        for (row, path) in (1..).zip(&paths) {
            if path.od.get() > od_pairs.len() {
                return Err(NetworkError::UnknownOdPair {
                    path: row,
                    od: path.od,
                    od_pairs: od_pairs.len(),
                });
            }
            has_path[path.od.index()] = true;

            for &link in &path.links {
                if link.get() > links.len() {
                    return Err(NetworkError::UnknownLink {
                        path: row,
                        link,
                        links: links.len(),
                    });
                }
            }
        }
        if let Some(od) = has_path.iter().position(|&routed| !routed) {
            return Err(NetworkError::NoCandidatePaths { od: od + 1 });
        }

        let free_flow_times = links.iter().map(|link| link.free_flow_time).collect();
        let capacities = links.iter().map(|link| link.capacity).collect();

        Ok(Self {
            links,
            od_pairs,
            paths,
            free_flow_times,
            capacities,
        })
    }

    /// The link table.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// The OD table.
    #[must_use]
    pub fn od_pairs(&self) -> &[OdPair] {
        &self.od_pairs
    }

    /// The candidate paths.
    #[must_use]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Number of links.
    #[must_use]
    pub fn num_links(&self) -> usize {
        self.links.len()
    }

    /// Number of OD pairs.
    #[must_use]
    pub fn num_od_pairs(&self) -> usize {
        self.od_pairs.len()
    }

    /// Number of candidate paths.
    #[must_use]
    pub fn num_paths(&self) -> usize {
        self.paths.len()
    }

    /// Projects a path-flow vector onto link flows.
    ///
    /// Each path adds its flow to every link it lists, once per listing.
    ///
    /// # Panics
    ///
    /// Panics if `path_flows` does not have one entry per path.
    #[must_use]
    pub fn link_flows(&self, path_flows: &Array1<f64>) -> Array1<f64> {
        assert_eq!(path_flows.len(), self.paths.len(), "one flow per path");

        let mut flows = Array1::zeros(self.links.len());
        for (path, &flow) in self.paths.iter().zip(path_flows) {
            for link in &path.links {
                flows[link.index()] += flow;
            }
        }
        flows
    }

    /// Per-path user-equilibrium costs at the given flows.
    ///
    /// Shorthand for [`Self::path_costs_with`] under
    /// [`CostModel::UserEquilibrium`].
    ///
    /// # Panics
    ///
    /// Panics if `path_flows` does not have one entry per path.
    #[must_use]
    pub fn path_costs(&self, path_flows: &Array1<f64>) -> Array1<f64> {
        self.path_costs_with(path_flows, CostModel::UserEquilibrium)
    }

    /// Per-path costs at the given flows under `model`.
    ///
    /// Projects to link flows, prices every link once, then sums each
    /// path's link costs. A path with no links costs 0.
    ///
    /// # Panics
    ///
    /// Panics if `path_flows` does not have one entry per path.
    #[must_use]
    pub fn path_costs_with(&self, path_flows: &Array1<f64>, model: CostModel) -> Array1<f64> {
        let link_flows = self.link_flows(path_flows);
        let link_costs = Zip::from(&link_flows)
            .and(&self.free_flow_times)
            .and(&self.capacities)
            .map_collect(|&flow, &t0, &cap| model.link_cost(flow, t0, cap));

        self.paths
            .iter()
            .map(|path| path.links.iter().map(|link| link_costs[link.index()]).sum())
            .collect()
    }

    /// Total potential at the given flows: the objective the step-size
    /// search minimizes, summed over links at the projected flows.
    ///
    /// # Panics
    ///
    /// Panics if `path_flows` does not have one entry per path.
    #[must_use]
    pub fn potential(&self, path_flows: &Array1<f64>, model: CostModel) -> f64 {
        let link_flows = self.link_flows(path_flows);

        let mut total = 0.0;
        Zip::from(&link_flows)
            .and(&self.free_flow_times)
            .and(&self.capacities)
            .for_each(|&flow, &t0, &cap| total += model.link_potential(flow, t0, cap));
        total
    }

    /// The cheapest candidate path of every OD pair, in OD order.
    ///
    /// Paths are scanned in increasing index and the incumbent is replaced
    /// whenever a candidate costs no more than it, so among equal-cost
    /// candidates the last one scanned wins. The scan is deterministic for
    /// identical inputs.
    ///
    /// # Panics
    ///
    /// Panics if `path_costs` does not have one entry per path.
    #[must_use]
    pub fn cheapest_paths(&self, path_costs: &Array1<f64>) -> Vec<CheapestPath> {
        assert_eq!(path_costs.len(), self.paths.len(), "one cost per path");

        let mut best: Vec<Option<CheapestPath>> = vec![None; self.od_pairs.len()];
        for (index, (path, &cost)) in self.paths.iter().zip(path_costs).enumerate() {
            let incumbent = &mut best[path.od.index()];
            let replace = match incumbent {
                None => true,
                Some(pick) => cost <= pick.cost,
            };
            if replace {
                *incumbent = Some(CheapestPath { path: index, cost });
            }
        }

        best.into_iter()
            .map(|pick| pick.expect("validated network: every OD pair has a candidate path"))
            .collect()
    }

    /// All-or-nothing assignment: each OD pair's whole demand on its
    /// cheapest path, nothing anywhere else.
    ///
    /// # Panics
    ///
    /// Panics if `path_costs` does not have one entry per path.
    #[must_use]
    pub fn all_or_nothing(&self, path_costs: &Array1<f64>) -> Array1<f64> {
        let mut flows = Array1::zeros(self.paths.len());
        for (od, pick) in self.od_pairs.iter().zip(self.cheapest_paths(path_costs)) {
            flows[pick.path] = od.demand;
        }
        flows
    }

    /// Total network cost `Σ path_flow · path_cost`.
    ///
    /// # Panics
    ///
    /// Panics if either vector does not have one entry per path.
    #[must_use]
    pub fn total_cost(&self, path_flows: &Array1<f64>, path_costs: &Array1<f64>) -> f64 {
        assert_eq!(path_flows.len(), self.paths.len(), "one flow per path");
        assert_eq!(path_costs.len(), self.paths.len(), "one cost per path");

        path_flows.dot(path_costs)
    }

    /// Largest absolute deviation from demand conservation.
    ///
    /// For each OD pair, its summed path flows are compared against its
    /// demand; the worst difference is returned. Zero (up to rounding) on
    /// any flow vector produced by the assignment solver.
    ///
    /// # Panics
    ///
    /// Panics if `path_flows` does not have one entry per path.
    #[must_use]
    pub fn demand_mismatch(&self, path_flows: &Array1<f64>) -> f64 {
        assert_eq!(path_flows.len(), self.paths.len(), "one flow per path");

        let mut sums = vec![0.0; self.od_pairs.len()];
        for (path, &flow) in self.paths.iter().zip(path_flows) {
            sums[path.od.index()] += flow;
        }
        self.od_pairs
            .iter()
            .zip(sums)
            .map(|(od, sum)| (sum - od.demand).abs())
            .fold(0.0, f64::max)
    }
}
