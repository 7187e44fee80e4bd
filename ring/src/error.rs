use rug::Integer;
use thiserror::Error;

/// Error returned when a coefficient ring cannot be built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    /// The modulus is zero or negative.
    #[error("invalid modulus: {0} is not positive")]
    NonPositiveModulus(Integer),
    /// The modulus is not a decimal integer.
    #[error("invalid modulus: cannot parse {0:?}")]
    Unparseable(String),
}
