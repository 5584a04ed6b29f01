//! Secant method.
//!
//! Steps to where the line through the two most recent estimates crosses
//! zero. No bracket is kept, so the iterates may leave the starting interval
//! and convergence is not guaranteed, but near a simple root it is
//! superlinear.

use quadroot_core::Observer;

use crate::{
    Action, Config, Error, Event, Solution, Status, bracket::finite_endpoints, evaluate::evaluate,
};

/// Finds a root of `f` using the secant method, starting from `a` and `b`.
///
/// The starting points need not bracket a root. Each iteration computes
/// `x_new = x - f(x) (x - x_prev) / (f(x) - f(x_prev))`, shifts the pair of
/// estimates, and emits an [`Event`] (with no bracket). The search ends when
/// the residual at the newest estimate is within [`Config::residual_tol`]
/// (even if the observer also asked to stop), when the observer returns
/// [`Action::StopEarly`], or after
/// [`Config::max_iters`] iterations (status [`Status::MaxIters`], holding the
/// newest estimate). With a zero iteration budget the solution is `b`.
///
/// # Errors
///
/// Returns an error if a starting point is non-finite, if `f` returns a
/// non-finite value, or if the two most recent residuals are equal, which
/// makes the secant line flat ([`Error::FlatSecant`]).
pub fn solve<F, Obs>(
    f: F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let [mut x_prev, mut x] = finite_endpoints(bracket)?;
    let mut f_prev = evaluate(&f, x_prev)?;
    let mut f_x = evaluate(&f, x)?;

    for iter in 1..=config.max_iters() {
        let slope_rise = f_x - f_prev;
        #[allow(clippy::float_cmp)]
        if slope_rise == 0.0 {
            return Err(Error::FlatSecant {
                x_prev,
                x,
                residual: f_x,
            });
        }

        let x_new = x - f_x * (x - x_prev) / slope_rise;
        x_prev = x;
        f_prev = f_x;
        x = x_new;
        f_x = evaluate(&f, x)?;

        let event = Event {
            iter,
            x,
            residual: f_x,
            bracket: None,
        };
        let action = observer.observe(&event);

        if config.is_converged(f_x) {
            return Ok(Solution::new(Status::Converged, x, f_x, iter));
        }

        if let Some(action) = action {
            match action {
                Action::StopEarly => {
                    return Ok(Solution::new(Status::StoppedByObserver, x, f_x, iter));
                }
            }
        }
    }

    Ok(Solution::new(Status::MaxIters, x, f_x, config.max_iters()))
}

/// Runs the secant method without observation.
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
