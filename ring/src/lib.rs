//! Coefficient rings: the integers, or the integers modulo `M`.
//!
//! A ring is a configuration value handed to algorithms working on polynomial
//! coefficients. Modular rings test the primality of `M` once, when built, and pick
//! their reduction strategy from it.

mod error;
mod modular;

pub use error::RingError;
pub use modular::{ModularRing, Reduction};

use rug::Integer;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CoefficientRing {
    #[default]
    Integers,
    Modular(ModularRing),
}

impl CoefficientRing {
    pub fn integers() -> Self {
        CoefficientRing::Integers
    }

    /// Returns the ring of integers modulo `m`.
    pub fn modular<M: Into<Integer>>(m: M) -> Result<Self, RingError> {
        Ok(CoefficientRing::Modular(ModularRing::new(m.into())?))
    }

    pub fn is_integers(&self) -> bool {
        matches!(self, CoefficientRing::Integers)
    }

    /// Returns `M` for a modular ring, `None` for the integers.
    pub fn modulus(&self) -> Option<&Integer> {
        match self {
            CoefficientRing::Integers => None,
            CoefficientRing::Modular(ring) => Some(ring.modulus()),
        }
    }

    /// Maps `x` to its canonical representative in this ring.
    pub fn normalize(&self, x: &Integer) -> Integer {
        match self {
            CoefficientRing::Integers => x.clone(),
            CoefficientRing::Modular(ring) => ring.normalize(x),
        }
    }
}

/// The integers compare greater than every modular ring; modular rings compare by modulus.
impl Ord for CoefficientRing {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CoefficientRing::Integers, CoefficientRing::Integers) => Ordering::Equal,
            (CoefficientRing::Integers, CoefficientRing::Modular(_)) => Ordering::Greater,
            (CoefficientRing::Modular(_), CoefficientRing::Integers) => Ordering::Less,
            (CoefficientRing::Modular(k1), CoefficientRing::Modular(k2)) => {
                k1.modulus().cmp(k2.modulus())
            }
        }
    }
}

impl PartialOrd for CoefficientRing {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CoefficientRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoefficientRing::Integers => write!(f, "Z"),
            CoefficientRing::Modular(ring) => write!(f, "{}", ring),
        }
    }
}

/// Parses `Z` (or an empty string) as the integers and a decimal `M` as the integers modulo `M`.
impl FromStr for CoefficientRing {
    type Err = RingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s: &str = s.trim();
        if s.is_empty() || s == "Z" {
            return Ok(CoefficientRing::Integers);
        }
        let m: Integer = s
            .parse::<Integer>()
            .map_err(|_| RingError::Unparseable(s.to_string()))?;
        CoefficientRing::modular(m)
    }
}
