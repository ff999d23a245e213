//! Equilibrium solvers for static traffic assignment.
//!
//! [`assignment`] iterates all-or-nothing loadings toward an equilibrium by
//! convex combinations, with [`line_search`] picking each step size along
//! the way. Progress reporting and cancellation go through the [`Observer`]
//! seam rather than a logger.

pub mod assignment;
pub mod line_search;

mod observe;

pub use observe::Observer;
