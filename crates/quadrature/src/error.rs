use thiserror::Error;

/// Errors that can occur when validating samples or applying a rule.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("samples must be one-dimensional: x has {x_ndim} dimension(s), y has {y_ndim}")]
    Shape { x_ndim: usize, y_ndim: usize },

    #[error("x and y must have the same length: x has {x_len} samples, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("at least two samples are required, got {len}")]
    TooFewSamples { len: usize },

    #[error("{subintervals} subinterval(s) is not divisible by {divisor}")]
    Partition { subintervals: usize, divisor: usize },
}
