//! Shared helpers for the end-to-end tests.

/// Samples `f` at `n + 1` evenly spaced points from `a` to `b`.
///
/// Returns the x and y values as separate vectors, ready for integration.
pub fn sample<F>(f: F, a: f64, b: f64, n: usize) -> (Vec<f64>, Vec<f64>)
where
    F: Fn(f64) -> f64,
{
    #[allow(clippy::cast_precision_loss)]
    let x: Vec<f64> = (0..=n)
        .map(|i| a + (b - a) * i as f64 / n as f64)
        .collect();
    let y = x.iter().map(|&x| f(x)).collect();
    (x, y)
}
