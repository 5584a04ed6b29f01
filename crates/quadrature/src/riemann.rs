use crate::SampleSeries;

/// Integrates using the left endpoint of each subinterval.
///
/// Computes `Σ (x[i+1] - x[i]) * y[i]`.
#[must_use]
pub fn left_riemann(series: &SampleSeries<'_>) -> f64 {
    series
        .subinterval_iter()
        .map(|(width, y_left, _)| width * y_left)
        .sum()
}

/// Integrates using the right endpoint of each subinterval.
///
/// Computes `Σ (x[i+1] - x[i]) * y[i+1]`.
#[must_use]
pub fn right_riemann(series: &SampleSeries<'_>) -> f64 {
    series
        .subinterval_iter()
        .map(|(width, _, y_right)| width * y_right)
        .sum()
}
