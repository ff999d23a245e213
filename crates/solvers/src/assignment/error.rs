use thiserror::Error;

use crate::line_search;

/// Ways an assignment can fail.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// The config failed validation.
    #[error("invalid assignment config: {0}")]
    InvalidConfig(&'static str),

    /// A step-size search failed.
    #[error("step-size search failed: {0}")]
    LineSearch(#[from] line_search::Error),
}
