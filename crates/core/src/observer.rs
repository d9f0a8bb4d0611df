/// Receives solver events and optionally returns control actions.
///
/// Solvers emit an event after each unit of work and pass it to their
/// observer. Returning `None` lets the solver proceed normally; returning
/// an action influences what the solver does next. Event and action types
/// are solver-specific.
///
/// The unit type `()` is the no-op observer, and any
/// `FnMut(&E) -> Option<A>` closure is an observer, so callers can pass
/// `()` when they don't care and a closure when they do.
pub trait Observer<E, A> {
    /// Handles an event, optionally returning a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}
