use ndarray::{ArrayView, Dimension};

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, SampleSeries, SplitArea, auto_simpson, left_riemann, right_riemann, simpson13,
    simpson38, trapezoidal, trapezoidal_split,
};

/// A quadrature rule that can be selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub enum Rule {
    LeftRiemann,
    RightRiemann,
    Trapezoidal,
    /// Trapezoid rule reporting positive and negative area separately.
    TrapezoidalSplit,
    Simpson13,
    Simpson38,
    AutoSimpson,
}

impl Rule {
    /// All rules, in declaration order.
    pub const ALL: [Rule; 7] = [
        Rule::LeftRiemann,
        Rule::RightRiemann,
        Rule::Trapezoidal,
        Rule::TrapezoidalSplit,
        Rule::Simpson13,
        Rule::Simpson38,
        Rule::AutoSimpson,
    ];

    /// Applies the rule to a validated series.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Partition`] if a Simpson rule cannot cover the
    /// subinterval count.
    pub fn apply(self, series: &SampleSeries<'_>) -> Result<Area, Error> {
        let area = match self {
            Rule::LeftRiemann => Area::Total(left_riemann(series)),
            Rule::RightRiemann => Area::Total(right_riemann(series)),
            Rule::Trapezoidal => Area::Total(trapezoidal(series)),
            Rule::TrapezoidalSplit => Area::Split(trapezoidal_split(series)),
            Rule::Simpson13 => Area::Total(simpson13(series)?),
            Rule::Simpson38 => Area::Total(simpson38(series)?),
            Rule::AutoSimpson => Area::Total(auto_simpson(series)?),
        };
        Ok(area)
    }
}

/// The result of applying a [`Rule`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub enum Area {
    /// Net signed area.
    Total(f64),
    /// Positive and negative area kept apart.
    Split(SplitArea),
}

impl Area {
    /// Returns the net signed area.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Area::Total(value) => *value,
            Area::Split(split) => split.total(),
        }
    }
}

/// Validates the samples and integrates them with the given rule.
///
/// # Errors
///
/// Returns an error if the samples fail validation (see
/// [`SampleSeries::new`]) or the rule rejects the subinterval count.
pub fn integrate<'a, X, Y, Dx, Dy>(rule: Rule, x: X, y: Y) -> Result<Area, Error>
where
    X: Into<ArrayView<'a, f64, Dx>>,
    Y: Into<ArrayView<'a, f64, Dy>>,
    Dx: Dimension,
    Dy: Dimension,
{
    let series = SampleSeries::new(x, y)?;
    rule.apply(&series)
}
