//! Root finders for scalar functions of one variable.
//!
//! Each method lives in its own module with a `solve` and a
//! `solve_unobserved` entry point. [`solve`] at the crate root dispatches on a
//! [`Method`] chosen at runtime.
//!
//! # Methods
//!
//! - [`regula_falsi`]: false position on a sign-changing bracket
//! - [`bisection`]: midpoint halving on a sign-changing bracket
//! - [`secant`]: secant steps from two starting points, no bracket required
//!
//! All methods share a [`Config`], report iterations to an
//! [`Observer`](quadroot_core::Observer) as [`Event`]s, and return a
//! [`Solution`]. Running out of iterations is not an error: the solution
//! carries [`Status::MaxIters`] and the last estimate.
//!
//! # Example
//!
//! ```
//! use quadroot_roots::{Config, Method, solve_unobserved};
//!
//! let f = |x: f64| 2.0 * x.exp() + x - 4.0;
//! let config = Config::new(1_000, 1e-8).unwrap();
//!
//! for method in Method::ALL {
//!     let solution = solve_unobserved(method, f, [0.0, 1.0], &config).unwrap();
//!     assert!(solution.is_converged());
//!     assert!((solution.x - 0.5463).abs() < 1e-4);
//! }
//! ```

mod bracket;
mod config;
mod error;
mod evaluate;
mod event;
mod solution;

pub mod bisection;
pub mod regula_falsi;
pub mod secant;


use quadroot_core::Observer;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event};
pub use solution::{Solution, Status};

/// A root-finding method that can be selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub enum Method {
    RegulaFalsi,
    Bisection,
    Secant,
}

impl Method {
    /// All methods, in declaration order.
    pub const ALL: [Method; 3] = [Method::RegulaFalsi, Method::Bisection, Method::Secant];

    /// Returns true if the method requires a sign-changing bracket.
    #[must_use]
    pub fn is_bracketing(self) -> bool {
        matches!(self, Method::RegulaFalsi | Method::Bisection)
    }
}

/// Finds a root of `f` with the given method.
///
/// For the bracketing methods `bracket` must straddle a sign change; for the
/// secant method it is just the two starting points.
///
/// # Errors
///
/// Returns the error of the selected method; see [`regula_falsi::solve`],
/// [`bisection::solve`], and [`secant::solve`].
pub fn solve<F, Obs>(
    method: Method,
    f: F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    match method {
        Method::RegulaFalsi => regula_falsi::solve(f, bracket, config, observer),
        Method::Bisection => bisection::solve(f, bracket, config, observer),
        Method::Secant => secant::solve(f, bracket, config, observer),
    }
}

/// Finds a root of `f` with the given method, without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F>(
    method: Method,
    f: F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    solve(method, f, bracket, config, ())
}
