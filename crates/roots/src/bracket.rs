use quadroot_core::Observer;

use crate::{Action, Config, Error, Event, Solution, Status, evaluate::evaluate};

/// The sign of a residual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Returns the sign of a residual value.
    ///
    /// Signed zeros are both [`Sign::Zero`].
    pub(crate) fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }
}

/// Which endpoint a new point replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shrink {
    A,
    B,
    /// The residual was exactly zero, so the point is a root.
    Root,
}

/// Endpoints `a` and `b` whose residuals have strictly opposite signs.
///
/// The endpoints keep the order the caller gave; `a` may exceed `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bracket {
    a: f64,
    b: f64,
    f_a: f64,
    f_b: f64,
}

impl Bracket {
    /// Evaluates both endpoints and checks for a sign change.
    ///
    /// A zero residual at either endpoint does not count as a sign change.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint or its residual is non-finite, or if
    /// the residuals do not have strictly opposite signs.
    pub(crate) fn new<F>(f: &F, bracket: [f64; 2]) -> Result<Self, Error>
    where
        F: Fn(f64) -> f64,
    {
        let [a, b] = finite_endpoints(bracket)?;
        let f_a = evaluate(f, a)?;
        let f_b = evaluate(f, b)?;

        let sign_change = matches!(
            (Sign::of(f_a), Sign::of(f_b)),
            (Sign::Negative, Sign::Positive) | (Sign::Positive, Sign::Negative)
        );
        if !sign_change {
            return Err(Error::NoBracket {
                left: a,
                right: b,
                left_residual: f_a,
                right_residual: f_b,
            });
        }

        Ok(Self { a, b, f_a, f_b })
    }

    /// Returns the endpoints as an array.
    pub(crate) fn as_array(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    /// Returns the midpoint `(a + b) / 2`.
    pub(crate) fn midpoint(&self) -> f64 {
        0.5 * (self.a + self.b)
    }

    /// Returns where the line through both endpoints crosses zero.
    pub(crate) fn false_position(&self) -> f64 {
        (self.a * self.f_b - self.b * self.f_a) / (self.f_b - self.f_a)
    }

    /// Returns the endpoint with the smaller residual magnitude.
    pub(crate) fn best_endpoint(&self) -> (f64, f64) {
        if self.f_a.abs() <= self.f_b.abs() {
            (self.a, self.f_a)
        } else {
            (self.b, self.f_b)
        }
    }

    /// Replaces the endpoint whose residual shares the sign of `residual`.
    pub(crate) fn shrink(&mut self, x: f64, residual: f64) -> Shrink {
        let sign = Sign::of(residual);
        if sign == Sign::Zero {
            Shrink::Root
        } else if sign == Sign::of(self.f_a) {
            self.a = x;
            self.f_a = residual;
            Shrink::A
        } else {
            self.b = x;
            self.f_b = residual;
            Shrink::B
        }
    }
}

/// Checks that both endpoints are finite.
pub(crate) fn finite_endpoints(bracket: [f64; 2]) -> Result<[f64; 2], Error> {
    for value in bracket {
        if !value.is_finite() {
            return Err(Error::NonFiniteBracket { value });
        }
    }
    Ok(bracket)
}

/// Shared loop for bracketing methods.
///
/// Each iteration picks a point with `next`, evaluates it, and shrinks the
/// bracket. The loop ends on an exact zero, on a residual within tolerance,
/// on an observer request, or after `max_iters` iterations. Convergence takes
/// precedence over an observer request made on the same iteration.
pub(crate) fn search<F, Obs, N>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
    next: N,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
    N: Fn(&Bracket) -> f64,
{
    let mut bracket = Bracket::new(f, bracket)?;
    let (mut x, mut residual) = bracket.best_endpoint();

    for iter in 1..=config.max_iters() {
        x = next(&bracket);
        residual = evaluate(f, x)?;
        let shrink = bracket.shrink(x, residual);

        let event = Event {
            iter,
            x,
            residual,
            bracket: Some(bracket.as_array()),
        };
        let action = observer.observe(&event);

        // A converged estimate is reported as such even if the observer asked to stop.
        if shrink == Shrink::Root || config.is_converged(residual) {
            return Ok(Solution::new(Status::Converged, x, residual, iter));
        }

        if let Some(action) = action {
            match action {
                Action::StopEarly => {
                    return Ok(Solution::new(
                        Status::StoppedByObserver,
                        x,
                        residual,
                        iter,
                    ));
                }
            }
        }
    }

    Ok(Solution::new(
        Status::MaxIters,
        x,
        residual,
        config.max_iters(),
    ))
}
