/// How a line search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The interior objective values agreed within the tolerance.
    Converged,
    /// The pass cap was reached first; the result is the midpoint of the
    /// best bracket found.
    MaxIters,
}

/// The step chosen by a line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How the search ended.
    pub status: Status,
    /// The chosen step: the midpoint of the final interior points.
    pub x: f64,
    /// The objective evaluated at `x`.
    pub objective: f64,
    /// The final bracket enclosing `x`.
    pub bracket: [f64; 2],
    /// Search passes performed.
    pub iters: usize,
}
