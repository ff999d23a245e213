use thiserror::Error;

use crate::{LinkId, OdIndex};

/// Problems detected while assembling a [`Network`](crate::Network).
///
/// Every check runs once, at construction, so downstream evaluation never
/// re-validates. Links, OD pairs, and paths are identified by their 1-based
/// row numbers, matching the external tables.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NetworkError {
    /// A link's capacity is not a finite, positive number.
    #[error("link {link} has invalid capacity {capacity}; it must be finite and positive")]
    InvalidCapacity { link: usize, capacity: f64 },

    /// A link's free-flow time is not a finite, non-negative number.
    #[error("link {link} has invalid free-flow time {value}; it must be finite and non-negative")]
    InvalidFreeFlowTime { link: usize, value: f64 },

    /// An OD pair's demand is not a finite, non-negative number.
    #[error("OD pair {od} has invalid demand {demand}; it must be finite and non-negative")]
    InvalidDemand { od: usize, demand: f64 },

    /// A path references a link id beyond the link table.
    #[error("path {path} references link {link}, but the network has {links} links")]
    UnknownLink {
        path: usize,
        link: LinkId,
        links: usize,
    },

    /// A path references an OD index beyond the OD table.
    #[error("path {path} serves OD pair {od}, but the network has {od_pairs} OD pairs")]
    UnknownOdPair {
        path: usize,
        od: OdIndex,
        od_pairs: usize,
    },

    /// An OD pair has no candidate path to carry its demand.
    #[error("OD pair {od} has no candidate paths")]
    NoCandidatePaths { od: usize },
}
