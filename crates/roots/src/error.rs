use thiserror::Error;

use crate::ConfigError;

/// Errors that can occur while finding a root.
///
/// Reaching the iteration limit is not an error; it is reported through
/// [`Status::MaxIters`](crate::Status::MaxIters) on the returned solution.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("no root in bracket: f({left})={left_residual}, f({right})={right_residual}")]
    NoBracket {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("secant is flat: f({x_prev}) and f({x}) are both {residual}")]
    FlatSecant { x_prev: f64, x: f64, residual: f64 },
}
