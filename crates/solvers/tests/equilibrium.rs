use approx::assert_abs_diff_eq;
use ndarray::{arr1, Array1};
use wardrop_network::{Link, Network, OdPair, Path};
use wardrop_solvers::assignment::{self, Action, Config, Event, Status};
use wardrop_solvers::line_search;

fn path(od: usize, links: &[usize]) -> Path {
    Path::from_padded_row(od, links).expect("test path row should parse")
}

/// Three parallel routes from the same origin to the same destination. At
/// demand 10 the user equilibrium loads them about (2.98, 2.98, 4.05) at a
/// common cost near 17.36.
fn three_route_network() -> Network {
    let links = vec![
        Link::new(1, 2, 10.0, 2.0),
        Link::new(1, 2, 10.0, 2.0),
        Link::new(1, 2, 15.0, 4.0),
    ];
    let od_pairs = vec![OdPair::new(1, 2, 10.0)];
    let paths = vec![path(1, &[1]), path(1, &[2]), path(1, &[3])];
    Network::new(links, od_pairs, paths).expect("network should validate")
}

/// Two OD pairs sharing link 3: the first pair's via-node-2 route and the
/// second pair's main route congest it together.
fn two_od_network() -> Network {
    let links = vec![
        Link::new(1, 2, 5.0, 3.0),
        Link::new(1, 3, 7.0, 2.0),
        Link::new(2, 3, 2.0, 4.0),
        Link::new(1, 3, 6.0, 3.0),
        Link::new(2, 3, 9.0, 2.0),
    ];
    let od_pairs = vec![OdPair::new(1, 3, 8.0), OdPair::new(2, 3, 6.0)];
    let paths = vec![
        path(1, &[1, 3]),
        path(1, &[2]),
        path(1, &[4]),
        path(2, &[3]),
        path(2, &[5]),
    ];
    Network::new(links, od_pairs, paths).expect("network should validate")
}

/// Largest cost spread among flow-carrying paths of any one OD pair. Zero
/// spread everywhere is Wardrop's equilibrium condition.
fn used_cost_spread(network: &Network, path_flows: &Array1<f64>) -> f64 {
    let costs = network.path_costs(path_flows);
    let mut lo = vec![f64::INFINITY; network.num_od_pairs()];
    let mut hi = vec![f64::NEG_INFINITY; network.num_od_pairs()];
    for (index, (path, &flow)) in network.paths().iter().zip(path_flows).enumerate() {
        if flow > 1e-6 {
            let od = path.od.index();
            lo[od] = lo[od].min(costs[index]);
            hi[od] = hi[od].max(costs[index]);
        }
    }
    lo.iter()
        .zip(&hi)
        .map(|(&lo, &hi)| (hi - lo).max(0.0))
        .fold(0.0, f64::max)
}

/// Long-run config: the flow test is disabled so the cost-spread observer
/// alone decides when a run is done.
fn equilibrium_config() -> Config {
    Config {
        max_iters: 200_000,
        flow_tol: 0.0,
        line_search: line_search::Config {
            value_tol: 1e-9,
            ..line_search::Config::default()
        },
        ..Config::default()
    }
}

#[test]
fn three_parallel_routes_reach_wardrop_equilibrium() {
    let network = three_route_network();

    let solution = assignment::solve(&network, &equilibrium_config(), |event: &Event<'_>| {
        if used_cost_spread(&network, event.path_flows) < 1e-3 {
            Some(Action::StopEarly)
        } else {
            None
        }
    })
    .expect("assignment should succeed");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert!(used_cost_spread(&network, &solution.path_flows) < 1e-3);
    assert_abs_diff_eq!(solution.path_flows[0], 2.976, epsilon = 0.05);
    assert_abs_diff_eq!(solution.path_flows[1], 2.976, epsilon = 0.05);
    assert_abs_diff_eq!(solution.path_flows[2], 4.047, epsilon = 0.05);
    assert_abs_diff_eq!(solution.path_costs[0], 17.358, epsilon = 0.05);
    assert!(network.demand_mismatch(&solution.path_flows) <= 1e-8);
}

#[test]
fn shared_link_couples_the_od_pairs() {
    let network = two_od_network();
    let config = Config {
        max_iters: 300_000,
        ..equilibrium_config()
    };

    let solution = assignment::solve(&network, &config, |event: &Event<'_>| {
        if used_cost_spread(&network, event.path_flows) < 5e-3 {
            Some(Action::StopEarly)
        } else {
            None
        }
    })
    .expect("assignment should succeed");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_abs_diff_eq!(solution.path_flows[0], 1.07, epsilon = 0.06);
    assert_abs_diff_eq!(solution.path_flows[1], 2.59, epsilon = 0.06);
    assert_abs_diff_eq!(solution.path_flows[2], 4.34, epsilon = 0.06);
    assert_abs_diff_eq!(solution.path_flows[3], 6.0, epsilon = 1e-8);
    // The backup route for the second pair is never cheaper, so it never
    // receives flow at all.
    assert_eq!(solution.path_flows[4], 0.0);
    assert!(solution.path_costs[4] > solution.path_costs[3]);
    assert!(network.demand_mismatch(&solution.path_flows) <= 1e-8);
}

#[test]
fn dominated_route_stays_empty() {
    let links = vec![Link::new(1, 2, 1.0, 1.0), Link::new(1, 2, 10.0, 1.0)];
    let od_pairs = vec![OdPair::new(1, 2, 1.0)];
    let paths = vec![path(1, &[1]), path(1, &[2])];
    let network = Network::new(links, od_pairs, paths).expect("network should validate");

    let solution = assignment::solve_unobserved(&network, &Config::default())
        .expect("assignment should succeed");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 1);
    assert_eq!(solution.path_flows, arr1(&[1.0, 0.0]));
    assert!(solution.path_costs[1] > solution.path_costs[0]);
}

#[test]
fn identical_runs_are_bit_identical() {
    let network = three_route_network();
    let config = Config::default();

    let first = assignment::solve_unobserved(&network, &config).expect("should solve");
    let second = assignment::solve_unobserved(&network, &config).expect("should solve");

    assert_eq!(first, second);
}
