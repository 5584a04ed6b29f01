use quadroot_core::Observer;

use crate::traits::{CanStopEarly, HasResidual};

/// An observer that stops a search once its residual stops improving.
///
/// Tracks the smallest residual magnitude seen so far. When `patience`
/// consecutive events fail to beat it, the observer returns the stop-early
/// action. A NaN residual never counts as an improvement.
///
/// Useful with methods that can stagnate, such as regula falsi on a strongly
/// convex function or the secant method far from a root.
#[derive(Debug, Clone, PartialEq)]
pub struct Stall {
    patience: usize,
    best: f64,
    misses: usize,
}

impl Stall {
    /// Creates a stall detector that tolerates `patience` non-improving events.
    ///
    /// A patience of zero stops on the first event that does not improve.
    #[must_use]
    pub fn new(patience: usize) -> Self {
        Self {
            patience,
            best: f64::INFINITY,
            misses: 0,
        }
    }

    /// Returns the smallest residual magnitude seen so far.
    ///
    /// Infinite until the first finite residual is observed.
    #[must_use]
    pub fn best(&self) -> f64 {
        self.best
    }
}

impl<E, A> Observer<E, A> for Stall
where
    E: HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let magnitude = event.residual().abs();
        if magnitude < self.best {
            self.best = magnitude;
            self.misses = 0;
            return None;
        }

        self.misses += 1;
        (self.misses > self.patience).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quadroot_roots::{Action, Config, Event, Status, regula_falsi};

    fn event(iter: usize, residual: f64) -> Event {
        Event {
            iter,
            x: 0.0,
            residual,
            bracket: None,
        }
    }

    #[test]
    fn stops_after_patience_is_spent() {
        let mut stall = Stall::new(2);
        let residuals = [1.0, 0.5, 0.6, 0.7, 0.8];

        let actions: Vec<Option<Action>> = residuals
            .iter()
            .enumerate()
            .map(|(i, &r)| stall.observe(&event(i + 1, r)))
            .collect();

        assert_eq!(actions, vec![None, None, None, None, Some(Action::StopEarly)]);
        assert_eq!(stall.best(), 0.5);
    }

    #[test]
    fn improvement_resets_the_count() {
        let mut stall = Stall::new(1);
        let observe = |stall: &mut Stall, r: f64| -> Option<Action> { stall.observe(&event(1, r)) };

        assert_eq!(observe(&mut stall, -2.0), None);
        assert_eq!(observe(&mut stall, 3.0), None);
        assert_eq!(observe(&mut stall, -1.0), None);
        assert_eq!(observe(&mut stall, f64::NAN), None);
        assert_eq!(observe(&mut stall, 1.0), Some(Action::StopEarly));
    }

    #[test]
    fn ends_a_search_that_cannot_reach_tolerance() {
        // Residuals of this step function never drop below 1.
        let f = |x: f64| if x < 0.3 { -1.0 } else { 1.0 };
        let config = Config::new(10_000, 1e-6).unwrap();

        let solution = regula_falsi::solve(f, [0.0, 1.0], &config, Stall::new(5)).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 7);
    }
}
