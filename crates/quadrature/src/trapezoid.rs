#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::SampleSeries;

/// Trapezoid area split by sign.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct SplitArea {
    /// Sum of the strictly positive subinterval areas.
    pub upper: f64,
    /// Sum of the strictly negative subinterval areas.
    pub lower: f64,
}

impl SplitArea {
    /// Returns the net area, equal to [`trapezoidal`] on the same series.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.upper + self.lower
    }
}

/// Integrates using the trapezoid rule.
///
/// Computes `Σ 0.5 * (x[i+1] - x[i]) * (y[i] + y[i+1])`.
#[must_use]
pub fn trapezoidal(series: &SampleSeries<'_>) -> f64 {
    areas(series).sum()
}

/// Integrates using the trapezoid rule, keeping positive and negative area apart.
///
/// Subintervals with exactly zero area contribute to neither side.
#[must_use]
pub fn trapezoidal_split(series: &SampleSeries<'_>) -> SplitArea {
    areas(series).fold(
        SplitArea {
            upper: 0.0,
            lower: 0.0,
        },
        |mut split, area| {
            if area > 0.0 {
                split.upper += area;
            } else if area < 0.0 {
                split.lower += area;
            }
            split
        },
    )
}

/// Signed trapezoid area of each subinterval.
fn areas<'s>(series: &'s SampleSeries<'_>) -> impl Iterator<Item = f64> + 's {
    series
        .subinterval_iter()
        .map(|(width, y_left, y_right)| 0.5 * width * (y_left + y_right))
}
