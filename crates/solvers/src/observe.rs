/// Watches a running solver and can steer it.
///
/// An observer receives one event per solver step and answers with
/// `Option<A>`: `Some(action)` asks the solver for a solver-specific action
/// (for the assignment solver, stopping early), `None` lets it continue.
/// This is the crate's progress-reporting seam; convergence traces,
/// deadlines, and cancellation all hang off it rather than off a logger.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never intervenes.
pub trait Observer<E, A> {
    /// Handles one solver event, optionally requesting an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
