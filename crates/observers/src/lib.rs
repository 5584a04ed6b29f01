//! Reusable observers for the quadroot root finders.
//!
//! This crate provides [`Observer`] implementations and the capability traits
//! they are written against, so the same observer works with every method.
//!
//! - [`traits`]: capability traits ([`HasResidual`], [`HasEstimate`],
//!   [`CanStopEarly`])
//! - [`History`]: records every `(x, residual)` pair
//! - [`Stall`]: stops a search whose residual has stopped improving
//!
//! [`Observer`]: quadroot_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasEstimate`]: traits::HasEstimate
//! [`CanStopEarly`]: traits::CanStopEarly

mod history;
mod stall;

pub mod traits;

pub use history::History;
pub use stall::Stall;
