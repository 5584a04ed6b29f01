/// Receives per-iteration events from an iterative routine.
///
/// An observer can watch a solver without changing its API: record a trace,
/// print progress, or end the search early. `observe` returns `Option<A>`,
/// where `Some(action)` asks the solver for a solver-specific action and
/// `None` lets it continue.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and `()` is a
/// no-op observer.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
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
