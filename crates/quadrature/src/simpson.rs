//! Simpson's rules.
//!
//! Both rules use a single step `h = (x[last] - x[first]) / n`, which is only
//! correct for evenly spaced samples. Spacing is not checked, so irregular
//! samples silently produce a biased result.

use crate::{Error, SampleSeries};

/// Integrates using Simpson's 1/3 rule.
///
/// Interior samples at odd indices are weighted 4, those at even indices 2,
/// and the endpoints 1. The weighted sum is scaled by `h / 3`.
///
/// # Errors
///
/// Returns [`Error::Partition`] if the number of subintervals is odd.
pub fn simpson13(series: &SampleSeries<'_>) -> Result<f64, Error> {
    let n = require_divisible(series, 2)?;
    let h = series.span() / n as f64;

    let sum = weighted_sum(series, |i| if i % 2 == 1 { 4.0 } else { 2.0 });
    Ok(h * sum / 3.0)
}

/// Integrates using Simpson's 3/8 rule.
///
/// Interior samples at indices divisible by 3 are weighted 2, all other
/// interior samples 3, and the endpoints 1. The weighted sum is scaled by
/// `3h / 8`.
///
/// # Errors
///
/// Returns [`Error::Partition`] if the number of subintervals is not divisible
/// by 3.
pub fn simpson38(series: &SampleSeries<'_>) -> Result<f64, Error> {
    let n = require_divisible(series, 3)?;
    let h = series.span() / n as f64;

    let sum = weighted_sum(series, |i| if i % 3 == 0 { 2.0 } else { 3.0 });
    Ok(3.0 * h * sum / 8.0)
}

/// Integrates with whichever Simpson rule fits the subinterval count.
///
/// - Even count: Simpson's 1/3 rule over the whole series.
/// - Count divisible by 3: Simpson's 3/8 rule over the whole series.
/// - Otherwise: Simpson's 1/3 rule over all but the last three subintervals,
///   plus Simpson's 3/8 rule over those last three. The count is odd here, so
///   the leading part always has an even count.
///
/// # Errors
///
/// Returns [`Error::Partition`] for a single subinterval, which neither rule
/// nor their combination can cover.
pub fn auto_simpson(series: &SampleSeries<'_>) -> Result<f64, Error> {
    let n = series.subintervals();

    if n % 2 == 0 {
        return simpson13(series);
    }
    if n % 3 == 0 {
        return simpson38(series);
    }
    if n < 5 {
        return Err(Error::Partition {
            subintervals: n,
            divisor: 2,
        });
    }

    let len = series.len();
    let head = series.sub_series(0..len - 3);
    let tail = series.sub_series(len - 4..len);
    Ok(simpson13(&head)? + simpson38(&tail)?)
}

/// Returns the subinterval count if it is divisible by `divisor`.
fn require_divisible(series: &SampleSeries<'_>, divisor: usize) -> Result<usize, Error> {
    let n = series.subintervals();
    if n % divisor == 0 {
        Ok(n)
    } else {
        Err(Error::Partition {
            subintervals: n,
            divisor,
        })
    }
}

/// Sums `y` with weight 1 at both endpoints and `interior(i)` elsewhere.
fn weighted_sum(series: &SampleSeries<'_>, interior: impl Fn(usize) -> f64) -> f64 {
    let y = series.y();
    let last = y.len() - 1;
    y.iter()
        .enumerate()
        .map(|(i, y)| {
            if i == 0 || i == last {
                *y
            } else {
                interior(i) * y
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn grid(n: usize, a: f64, b: f64) -> Vec<f64> {
        (0..=n).map(|i| a + (b - a) * i as f64 / n as f64).collect()
    }

    #[test]
    fn simpson13_counts_zero_through_twelve() {
        let x: Vec<f64> = (0..=12).map(f64::from).collect();
        let series = SampleSeries::new(&x, &x).unwrap();
        assert_relative_eq!(simpson13(&series).unwrap(), 72.0, epsilon = 1e-12);
    }

    #[test]
    fn simpson13_rejects_odd_count() {
        let x = grid(5, 0.0, 1.0);
        let series = SampleSeries::new(&x, &x).unwrap();
        assert_eq!(
            simpson13(&series),
            Err(Error::Partition {
                subintervals: 5,
                divisor: 2
            })
        );
    }

    #[test]
    fn simpson13_is_exact_for_cubics() {
        let x = grid(4, -1.0, 2.0);
        let y: Vec<f64> = x.iter().map(|x| x.powi(3) - 2.0 * x).collect();
        let series = SampleSeries::new(&x, &y).unwrap();

        // [x^4/4 - x^2] from -1 to 2
        let exact = (4.0 - 4.0) - (0.25 - 1.0);
        assert_relative_eq!(simpson13(&series).unwrap(), exact, epsilon = 1e-12);
    }

    #[test]
    fn simpson38_weights() {
        // n = 6: weights 1 3 3 2 3 3 1
        let x = grid(6, 0.0, 6.0);
        let y = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
        let series = SampleSeries::new(&x, &y).unwrap();

        assert_relative_eq!(simpson38(&series).unwrap(), 3.0 / 8.0 * 4.0);
    }

    #[test]
    fn simpson38_rejects_count_not_divisible_by_three() {
        let x = grid(4, 0.0, 1.0);
        let series = SampleSeries::new(&x, &x).unwrap();
        assert_eq!(
            simpson38(&series),
            Err(Error::Partition {
                subintervals: 4,
                divisor: 3
            })
        );
    }

    #[test]
    fn simpson38_is_exact_for_cubics() {
        let x = grid(3, 0.0, 3.0);
        let y: Vec<f64> = x.iter().map(|x| x.powi(3)).collect();
        let series = SampleSeries::new(&x, &y).unwrap();
        assert_relative_eq!(simpson38(&series).unwrap(), 81.0 / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn irregular_spacing_is_not_detected() {
        let x = [0.0, 0.1, 2.0];
        let y = [0.0, 0.1, 2.0];
        let series = SampleSeries::new(&x, &y).unwrap();

        // h = 1, so the result is (0 + 4 * 0.1 + 2) / 3 instead of 2.
        let biased = simpson13(&series).unwrap();
        assert_relative_eq!(biased, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn auto_matches_simpson13_for_even_count() {
        let x: Vec<f64> = (1..=13).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|x| x.sqrt()).collect();
        let series = SampleSeries::new(&x, &y).unwrap();

        assert_eq!(auto_simpson(&series), simpson13(&series));
    }

    #[test]
    fn auto_matches_simpson38_for_count_of_nine() {
        let x = grid(9, 0.0, 2.0);
        let y: Vec<f64> = x.iter().map(|x| x.exp()).collect();
        let series = SampleSeries::new(&x, &y).unwrap();

        assert_eq!(auto_simpson(&series), simpson38(&series));
    }

    #[test]
    fn auto_combines_rules_for_count_of_seven() {
        let x = grid(7, 0.0, 7.0);
        let y: Vec<f64> = x.iter().map(|x| x * x).collect();
        let series = SampleSeries::new(&x, &y).unwrap();

        let head = SampleSeries::new(&x[..5], &y[..5]).unwrap();
        let tail = SampleSeries::new(&x[4..], &y[4..]).unwrap();
        let expected = simpson13(&head).unwrap() + simpson38(&tail).unwrap();

        let area = auto_simpson(&series).unwrap();
        assert_relative_eq!(area, expected);
        assert_relative_eq!(area, 343.0 / 3.0, epsilon = 1e-10);
    }

    #[test]
    fn auto_combines_rules_for_count_of_five() {
        let x = grid(5, 1.0, 2.0);
        let y: Vec<f64> = x.iter().map(|x| 4.0 * x.powi(3)).collect();
        let series = SampleSeries::new(&x, &y).unwrap();

        assert_relative_eq!(auto_simpson(&series).unwrap(), 15.0, epsilon = 1e-12);
    }

    #[test]
    fn auto_rejects_single_subinterval() {
        let series = SampleSeries::new(&[0.0, 1.0], &[1.0, 1.0]).unwrap();
        assert_eq!(
            auto_simpson(&series),
            Err(Error::Partition {
                subintervals: 1,
                divisor: 2
            })
        );
    }
}
