//! Golden-section line search over a bounded interval.
//!
//! # Algorithm
//!
//! Each pass evaluates the objective at two interior points placed a golden
//! section in from either end of the bracket:
//!
//! ```text
//! x1 = upper − s·(upper − lower)      s = (√5 − 1) / 2
//! x2 = lower + s·(upper − lower)
//! ```
//!
//! and discards the sub-interval beside the worse value: when `f(x1) < f(x2)`
//! the upper bound moves down to `x2`, otherwise the lower bound moves up to
//! `x1`. The search stops once the two interior objective values agree to
//! within [`Config::value_tol`] and returns the midpoint of the final
//! interior points, which always lies strictly inside the original bracket.
//! Both interior points are evaluated afresh on every pass, and at least one
//! pass always runs.
//!
//! The objective is assumed unimodal on the bracket; the convex potentials
//! minimized by the assignment solver qualify. [`Config::max_iters`] guards
//! against objectives whose interior values never settle: exhausting it
//! returns the current midpoint tagged [`Status::MaxIters`] instead of
//! looping forever.
//!
//! # Errors
//!
//! A degenerate bracket or a non-finite objective value is an error; see
//! [`Error`].

mod config;
mod error;
mod solution;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

/// The golden section `(√5 − 1) / 2`.
const SECTION: f64 = 0.618_033_988_749_895;

/// Minimizes `objective` over the closed `bracket`.
///
/// The bounds may be given in either order. The returned step is the
/// midpoint of the final interior points, and the reported objective is
/// evaluated at that step.
///
/// # Errors
///
/// Returns an error if the config fails validation, a bracket bound is not
/// finite, the bracket has zero width, or the objective produces a
/// non-finite value.
pub fn minimize<F>(mut objective: F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: FnMut(f64) -> f64,
{
    config.validate().map_err(Error::InvalidConfig)?;

    for bound in bracket {
        if !bound.is_finite() {
            return Err(Error::NonFiniteBracket { value: bound });
        }
    }
    let (mut lower, mut upper) = if bracket[0] <= bracket[1] {
        (bracket[0], bracket[1])
    } else {
        (bracket[1], bracket[0])
    };
    if lower == upper {
        return Err(Error::ZeroWidthBracket { value: lower });
    }

    let mut mid = 0.5 * (lower + upper);
    for pass in 1..=config.max_iters {
        let width = upper - lower;
        let inner_lower = upper - SECTION * width;
        let inner_upper = lower + SECTION * width;
        let at_lower = probe(&mut objective, inner_lower)?;
        let at_upper = probe(&mut objective, inner_upper)?;

        if at_lower < at_upper {
            upper = inner_upper;
        } else {
            lower = inner_lower;
        }

        mid = 0.5 * (inner_lower + inner_upper);
        if (at_lower - at_upper).abs() < config.value_tol {
            return Ok(Solution {
                status: Status::Converged,
                x: mid,
                objective: probe(&mut objective, mid)?,
                bracket: [lower, upper],
                iters: pass,
            });
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        x: mid,
        objective: probe(&mut objective, mid)?,
        bracket: [lower, upper],
        iters: config.max_iters,
    })
}

fn probe<F>(objective: &mut F, x: f64) -> Result<f64, Error>
where
    F: FnMut(f64) -> f64,
{
    let value = objective(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteObjective { x, value })
    }
}
