use thiserror::Error;

/// Ways a line search can fail.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// The config failed validation.
    #[error("invalid line-search config: {0}")]
    InvalidConfig(&'static str),

    /// A bracket bound was NaN or infinite.
    #[error("bracket bound {value} is not finite")]
    NonFiniteBracket { value: f64 },

    /// Both bracket bounds coincide, leaving nothing to search.
    #[error("bracket has zero width at {value}")]
    ZeroWidthBracket { value: f64 },

    /// The objective produced a NaN or infinite value.
    #[error("objective value {value} at step {x} is not finite")]
    NonFiniteObjective { x: f64, value: f64 },
}
