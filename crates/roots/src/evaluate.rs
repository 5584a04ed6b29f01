use crate::Error;

/// Evaluates `f` at `x`, rejecting non-finite residuals.
pub(crate) fn evaluate<F>(f: &F, x: f64) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    let residual = f(x);
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(Error::NonFiniteResidual { x, residual })
    }
}
