//! Capability traits for cross-method observers.
//!
//! These traits abstract over event and action types, so an observer can be
//! written once and used with any solver whose types implement them.
//!
//! # Event traits
//!
//! - [`HasResidual`]: events that carry a residual value
//! - [`HasEstimate`]: events that carry the current estimate
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use quadroot_core::Observer;
//! use quadroot_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use quadroot_roots::{Action, Event};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event that carries the current estimate of the solution.
pub trait HasEstimate {
    /// Returns the estimate for this event.
    fn estimate(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasResidual for Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasEstimate for Event {
    fn estimate(&self) -> f64 {
        self.x
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
