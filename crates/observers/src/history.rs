use quadroot_core::Observer;

use crate::traits::{HasEstimate, HasResidual};

/// An observer that records the estimate and residual of every event.
///
/// Pass `&mut History` as the observer to keep the record after the solve
/// returns. It never asks the solver to act.
///
/// # Example
///
/// ```
/// use quadroot_observers::History;
/// use quadroot_roots::{Config, bisection};
///
/// let mut history = History::new();
/// let config = Config::new(100, 1e-10).unwrap();
/// let solution = bisection::solve(|x: f64| x * x - 2.0, [0.0, 2.0], &config, &mut history)
///     .unwrap();
///
/// assert_eq!(history.len(), solution.iters);
/// assert_eq!(history.last(), Some((solution.x, solution.residual)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    points: Vec<(f64, f64)>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an `(x, residual)` pair.
    pub fn record(&mut self, x: f64, residual: f64) {
        self.points.push((x, residual));
    }

    /// Returns the recorded `(x, residual)` pairs in event order.
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the most recent pair.
    #[must_use]
    pub fn last(&self) -> Option<(f64, f64)> {
        self.points.last().copied()
    }

    /// Returns the pair with the smallest residual magnitude.
    ///
    /// NaN residuals are never selected.
    #[must_use]
    pub fn best(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .filter(|(_, residual)| !residual.is_nan())
            .min_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
            .copied()
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasEstimate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.estimate(), event.residual());
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the record can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut History
where
    E: HasEstimate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
