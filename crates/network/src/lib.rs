//! Road-network data model for static traffic assignment.
//!
//! This crate holds the problem side of a traffic assignment: the link, OD,
//! and path tables behind typed ids, the BPR congestion functions, and the
//! pure evaluation queries (flow projection, path costs, cheapest candidate
//! paths, all-or-nothing loading) that equilibrium solvers are built from.
//!
//! External tables use 1-based ids and pad path rows with `0`. Both
//! conventions stop at the constructors ([`LinkId`], [`OdIndex`],
//! [`Path::from_padded_row`]); a [`Network`] validates everything once at
//! assembly, so evaluation always works on a well-formed problem.

pub mod bpr;

mod error;
mod link;
mod network;
mod od;
mod path;

pub use bpr::CostModel;
pub use error::NetworkError;
pub use link::{Link, LinkId};
pub use network::{CheapestPath, Network};
pub use od::{OdIndex, OdPair};
pub use path::Path;
