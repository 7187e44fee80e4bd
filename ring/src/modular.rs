use crate::error::RingError;
use rug::Integer;
use rug::integer::IsPrime;
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// Miller-Rabin rounds used when classifying a modulus.
const PRIMALITY_REPS: u32 = 30;

/// How a modular ring inverts its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reduction {
    /// `M` is prime: every non-zero element is a unit, inverted with Fermat's little theorem.
    Field,
    /// `M` is composite (or 1): inversion goes through the extended gcd and may fail.
    Ring,
}

/// The integers modulo `M`, with elements kept in the symmetric range
/// `[-(M-1)/2, M/2]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModularRing {
    modulus: Integer,
    reduction: Reduction,
    lb: Integer,
    ub: Integer,
}

impl ModularRing {
    pub fn new(modulus: Integer) -> Result<Self, RingError> {
        if modulus.cmp0() != Ordering::Greater {
            return Err(RingError::NonPositiveModulus(modulus));
        }

        let reduction: Reduction = match modulus.is_probably_prime(PRIMALITY_REPS) {
            IsPrime::No => Reduction::Ring,
            IsPrime::Probably | IsPrime::Yes => Reduction::Field,
        };

        let ub: Integer = Integer::from(&modulus >> 1u32);
        let lb: Integer = -Integer::from(Integer::from(&modulus - 1u32) >> 1u32);

        debug!(modulus = %modulus, ?reduction, "created modular coefficient ring");

        Ok(Self {
            modulus,
            reduction,
            lb,
            ub,
        })
    }

    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    pub fn is_field(&self) -> bool {
        self.reduction == Reduction::Field
    }

    /// Smallest representative, `-(M-1)/2`.
    pub fn lb(&self) -> &Integer {
        &self.lb
    }

    /// Largest representative, `M/2`.
    pub fn ub(&self) -> &Integer {
        &self.ub
    }

    /// Returns the representative of `x` in `[lb, ub]`.
    pub fn normalize(&self, x: &Integer) -> Integer {
        let mut r: Integer = Integer::from(x % &self.modulus);
        if r.cmp0() == Ordering::Less {
            r += &self.modulus;
        }
        if r > self.ub {
            r -= &self.modulus;
        }
        r
    }

    pub fn add(&self, a: &Integer, b: &Integer) -> Integer {
        self.normalize(&Integer::from(a + b))
    }

    pub fn neg(&self, a: &Integer) -> Integer {
        self.normalize(&Integer::from(-a))
    }

    pub fn mul(&self, a: &Integer, b: &Integer) -> Integer {
        self.normalize(&Integer::from(a * b))
    }

    /// Returns the inverse of `a`, or `None` when `a` is not a unit.
    pub fn inv(&self, a: &Integer) -> Option<Integer> {
        let a: Integer = self.normalize(a);
        if a.cmp0() == Ordering::Equal {
            return None;
        }
        let inv: Integer = match self.reduction {
            Reduction::Field => {
                let e: Integer = Integer::from(&self.modulus - 2u32);
                a.pow_mod(&e, &self.modulus).ok()?
            }
            Reduction::Ring => a.invert(&self.modulus).ok()?,
        };
        Some(self.normalize(&inv))
    }
}

impl fmt::Display for ModularRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z_{}", self.modulus)
    }
}
