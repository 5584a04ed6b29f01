use std::ops::Range;

use ndarray::{ArrayView, ArrayView1, Dimension, Ix1, s};

use crate::Error;

/// Validated `(x, y)` samples of a function.
///
/// Both sequences are one-dimensional, equally long, and hold at least two
/// samples. The series borrows the caller's data and never modifies it.
///
/// The x values are expected to be strictly monotonic (either direction), but
/// this is not checked: a descending series integrates to the negated area.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries<'a> {
    x: ArrayView1<'a, f64>,
    y: ArrayView1<'a, f64>,
}

impl<'a> SampleSeries<'a> {
    /// Validates samples and wraps them as a series.
    ///
    /// Accepts anything that converts into an `ndarray` view: slices, `Vec`s,
    /// fixed-size arrays, and `ndarray` arrays or views of any dimension.
    ///
    /// # Errors
    ///
    /// - [`Error::Shape`] if either input is not one-dimensional.
    /// - [`Error::LengthMismatch`] if `x` and `y` differ in length.
    /// - [`Error::TooFewSamples`] if there are fewer than two samples.
    pub fn new<X, Y, Dx, Dy>(x: X, y: Y) -> Result<Self, Error>
    where
        X: Into<ArrayView<'a, f64, Dx>>,
        Y: Into<ArrayView<'a, f64, Dy>>,
        Dx: Dimension,
        Dy: Dimension,
    {
        let x = x.into();
        let y = y.into();

        let shape_error = Error::Shape {
            x_ndim: x.ndim(),
            y_ndim: y.ndim(),
        };
        let x = x.into_dimensionality::<Ix1>().map_err(|_| shape_error)?;
        let y = y.into_dimensionality::<Ix1>().map_err(|_| shape_error)?;

        if x.len() != y.len() {
            return Err(Error::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        if x.len() < 2 {
            return Err(Error::TooFewSamples { len: x.len() });
        }

        Ok(Self { x, y })
    }

    /// Returns the x samples.
    #[must_use]
    pub fn x(&self) -> ArrayView1<'a, f64> {
        self.x.clone()
    }

    /// Returns the y samples.
    #[must_use]
    pub fn y(&self) -> ArrayView1<'a, f64> {
        self.y.clone()
    }

    /// Returns the number of samples.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns the number of subintervals, one less than the sample count.
    #[must_use]
    pub fn subintervals(&self) -> usize {
        self.len() - 1
    }

    /// Returns the signed distance from the first to the last x sample.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.x[self.len() - 1] - self.x[0]
    }

    /// Iterates over subintervals as `(width, y_left, y_right)`.
    ///
    /// Widths are signed: descending x yields negative widths.
    pub fn subinterval_iter(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.x
            .windows(2)
            .into_iter()
            .zip(self.y.windows(2))
            .map(|(x, y)| (x[1] - x[0], y[0], y[1]))
    }

    /// Returns the sub-series covering the given sample indices.
    ///
    /// The caller guarantees that `range` is in bounds and spans at least
    /// two samples.
    pub(crate) fn sub_series(&self, range: Range<usize>) -> Self {
        debug_assert!(range.end <= self.len() && range.len() >= 2);
        Self {
            x: self.x.clone().slice_move(s![range.clone()]),
            y: self.y.clone().slice_move(s![range]),
        }
    }
}
