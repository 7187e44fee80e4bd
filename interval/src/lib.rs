pub mod dyadic;
pub mod endpoint;
pub mod interval;
pub mod scalar;

pub use dyadic::Dyadic;
pub use endpoint::endpoint_lt;
pub use interval::{Interval, IntervalView};
pub use scalar::Scalar;

pub use rug::Rational;

/// Interval with arbitrary-precision rational endpoints.
pub type RationalInterval = Interval<Rational>;

/// Interval with dyadic rational endpoints, used where exact bisection is needed.
pub type DyadicInterval = Interval<Dyadic>;
