//! Bisection method.
//!
//! Halves the bracket each iteration, keeping the half whose endpoints still
//! straddle a sign change. Convergence is linear but guaranteed for a
//! continuous function with a valid bracket.

use quadroot_core::Observer;

use crate::{Action, Config, Error, Event, Solution, bracket::search};

/// Finds a root of `f` in `bracket` by repeated bisection.
///
/// Each iteration evaluates the midpoint and emits an [`Event`]. The search
/// ends when the midpoint residual is exactly zero or within
/// [`Config::residual_tol`], when the observer returns
/// [`Action::StopEarly`], or after [`Config::max_iters`] iterations (status
/// [`Status::MaxIters`](crate::Status::MaxIters), holding the last midpoint).
///
/// # Errors
///
/// Returns an error if an endpoint is non-finite, if `f(a)` and `f(b)` do not
/// have strictly opposite signs (a zero endpoint residual is rejected), or if
/// `f` returns a non-finite value.
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
    search(&f, bracket, config, observer, |b| b.midpoint())
}

/// Runs bisection without observation.
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

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::Status;

    #[test]
    fn finds_square_root() {
        let config = Config::new(200, 1e-12).unwrap();
        let solution = solve_unobserved(|x: f64| x * x - 9.0, [0.0, 10.0], &config)
            .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn reversed_bracket_is_accepted() {
        let config = Config::new(200, 1e-12).unwrap();
        let solution = solve_unobserved(|x: f64| x * x - 36.0, [10.0, 0.0], &config)
            .expect("should solve");

        assert!(solution.is_converged());
        assert_relative_eq!(solution.x, 6.0, epsilon = 1e-10);
    }

    #[test]
    fn exact_midpoint_root_stops_immediately() {
        let solution =
            solve_unobserved(|x: f64| x - 2.0, [0.0, 4.0], &Config::default()).unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_eq!(solution.x, 2.0);
        assert_eq!(solution.residual, 0.0);
    }

    #[test]
    fn midpoints_follow_the_sign_change() {
        let mut xs = Vec::new();
        let observer = |event: &Event| -> Option<Action> {
            xs.push(event.x);
            None
        };
        let config = Config::new(4, 0.0).unwrap();
        let solution = solve(|x: f64| x - 0.3, [0.0, 1.0], &config, observer).unwrap();

        assert_eq!(xs, vec![0.5, 0.25, 0.375, 0.3125]);
        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 4);
        assert_eq!(solution.x, 0.3125);
    }

    #[test]
    fn iteration_count_halves_width() {
        // Width 1 shrinks to 2^-n; residual slope is 1.
        let config = Config::new(100, 1e-6).unwrap();
        let solution = solve_unobserved(|x: f64| x - 1.0 / 3.0, [0.0, 1.0], &config).unwrap();

        assert!(solution.is_converged());
        assert!(solution.residual.abs() <= 1e-6);
        assert!(solution.iters <= 20);
    }

    #[test]
    fn errors_on_no_bracket() {
        let result = solve_unobserved(|x: f64| x * x - 9.0, [5.0, 10.0], &Config::default());
        assert!(matches!(result, Err(Error::NoBracket { .. })));
    }

    #[test]
    fn zero_iters_returns_best_endpoint() {
        let config = Config::new(0, 1e-4).unwrap();
        let solution = solve_unobserved(|x: f64| x * x - 9.0, [2.0, 10.0], &config)
            .expect("should return best endpoint");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 0);
        // x=2 gives residual |4-9|=5, x=10 gives |100-9|=91
        assert_relative_eq!(solution.x, 2.0);
        assert_relative_eq!(solution.residual, -5.0);
    }
}
