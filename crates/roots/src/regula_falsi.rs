//! Regula falsi (false position) method.
//!
//! Like bisection, but each new point is where the straight line through the
//! two bracket endpoints crosses zero. One endpoint can stay fixed for many
//! iterations, so convergence may be slow on strongly curved functions.

use quadroot_core::Observer;

use crate::{Action, Config, Error, Event, Solution, bracket::search};

/// Finds a root of `f` in `bracket` by false position.
///
/// Each iteration evaluates `x = (a f(b) - b f(a)) / (f(b) - f(a))`, replaces
/// the endpoint whose residual has the same sign as `f(x)`, and emits an
/// [`Event`]. Termination follows the same rules as
/// [`bisection::solve`](crate::bisection::solve).
///
/// # Errors
///
/// Returns an error if an endpoint is non-finite, if `f(a)` and `f(b)` do not
/// have strictly opposite signs, or if `f` returns a non-finite value.
pub fn solve<F, Obs>(
    f: F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    search(&f, bracket, config, observer, |b| b.false_position())
}

/// Runs regula falsi without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F>(f: F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    solve(f, bracket, config, ())
}
