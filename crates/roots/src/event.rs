/// Iteration event emitted by every root-finding method.
///
/// One event is emitted per iteration, after the new estimate has been
/// evaluated and the bracket (if any) updated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The estimate produced by this iteration.
    pub x: f64,

    /// Residual `f(x)` at the estimate.
    pub residual: f64,

    /// Bracket after the update, for bracketing methods.
    ///
    /// Always `None` for the secant method.
    pub bracket: Option<[f64; 2]>,
}

/// Control actions an observer can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the current estimate.
    StopEarly,
}
