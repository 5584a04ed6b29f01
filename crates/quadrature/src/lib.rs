//! Quadrature rules for integrating sampled data.
//!
//! Every rule operates on a [`SampleSeries`], an ordered set of `(x, y)`
//! samples that has already passed shape and length validation. Build one with
//! [`SampleSeries::new`] and call a rule directly, or pick a rule at runtime
//! with [`integrate`].
//!
//! # Rules
//!
//! - [`left_riemann`], [`right_riemann`]: rectangle sums
//! - [`trapezoidal`]: trapezoid sum
//! - [`trapezoidal_split`]: trapezoid sum split into positive and negative area
//! - [`simpson13`]: Simpson's 1/3 rule (even subinterval count)
//! - [`simpson38`]: Simpson's 3/8 rule (subinterval count divisible by 3)
//! - [`auto_simpson`]: picks or combines the two Simpson rules
//!
//! # Example
//!
//! ```
//! use quadroot_quadrature::{Rule, integrate};
//!
//! let x: Vec<f64> = (0..=12).map(f64::from).collect();
//! let area = integrate(Rule::Simpson13, &x, &x).unwrap();
//!
//! assert!((area.value() - 72.0).abs() < 1e-12);
//! ```

mod error;
mod riemann;
mod rule;
mod series;
mod simpson;
mod trapezoid;

pub use error::Error;
pub use riemann::{left_riemann, right_riemann};
pub use rule::{Area, Rule, integrate};
pub use series::SampleSeries;
pub use simpson::{auto_simpson, simpson13, simpson38};
pub use trapezoid::{SplitArea, trapezoidal, trapezoidal_split};
