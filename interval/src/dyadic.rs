use crate::scalar::Scalar;
use rug::ops::Pow;
use rug::{Assign, Integer, Rational};
use std::cmp::Ordering;
use std::fmt;

/// Dyadic rational `mantissa / 2^exp`.
///
/// Values are kept normalized: the mantissa is odd, or `exp` is zero. Equal values
/// therefore have equal representations, and the midpoint of two dyadic values is
/// again dyadic, which is what makes exact bisection possible.
///
/// The exponent is bounded by `u32::MAX`. Operations whose exact result would need a
/// larger exponent panic rather than wrap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dyadic {
    mantissa: Integer,
    exp: u32,
}

impl Dyadic {
    pub fn new<M: Into<Integer>>(mantissa: M, exp: u32) -> Self {
        let mut x: Dyadic = Self {
            mantissa: mantissa.into(),
            exp,
        };
        x.normalize();
        x
    }

    pub fn mantissa(&self) -> &Integer {
        &self.mantissa
    }

    pub fn exp(&self) -> u32 {
        self.exp
    }

    /// Returns (self + other) / 2.
    pub fn midpoint(&self, other: &Self) -> Self {
        let mut m: Dyadic = Dyadic::zero();
        self.add_into(other, &mut m);
        if m.mantissa.cmp0() != Ordering::Equal {
            m.exp = checked_exp(m.exp.checked_add(1));
            m.normalize();
        }
        m
    }

    pub fn to_rational(&self) -> Rational {
        Rational::from((self.mantissa.clone(), Integer::from(1) << self.exp))
    }

    fn normalize(&mut self) {
        if self.mantissa.cmp0() == Ordering::Equal {
            self.exp = 0;
            return;
        }
        if let Some(tz) = self.mantissa.find_one(0) {
            let shift: u32 = tz.min(self.exp);
            self.mantissa >>= shift;
            self.exp -= shift;
        }
    }
}

#[inline(always)]
fn checked_exp(exp: Option<u32>) -> u32 {
    match exp {
        Some(exp) => exp,
        None => panic!("dyadic exponent overflow: exponent exceeds {}", u32::MAX),
    }
}

impl From<&Dyadic> for Rational {
    fn from(x: &Dyadic) -> Self {
        x.to_rational()
    }
}

impl Ord for Dyadic {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.exp.cmp(&other.exp) {
            Ordering::Equal => self.mantissa.cmp(&other.mantissa),
            Ordering::Less => {
                let mut lhs: Integer = self.mantissa.clone();
                lhs <<= other.exp - self.exp;
                lhs.cmp(&other.mantissa)
            }
            Ordering::Greater => {
                let mut rhs: Integer = other.mantissa.clone();
                rhs <<= self.exp - other.exp;
                self.mantissa.cmp(&rhs)
            }
        }
    }
}

impl PartialOrd for Dyadic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Dyadic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exp == 0 {
            write!(f, "{}", self.mantissa)
        } else {
            write!(f, "{}/{}", self.mantissa, Integer::from(1) << self.exp)
        }
    }
}

impl Scalar for Dyadic {
    #[inline(always)]
    fn zero() -> Self {
        Dyadic::from_i64(0)
    }

    #[inline(always)]
    fn one() -> Self {
        Dyadic::from_i64(1)
    }

    #[inline(always)]
    fn from_i64(x: i64) -> Self {
        Self {
            mantissa: Integer::from(x),
            exp: 0,
        }
    }

    #[inline(always)]
    fn sgn(&self) -> Ordering {
        self.mantissa.cmp0()
    }

    fn add_into(&self, b: &Self, c: &mut Self) {
        let (hi, lo) = if self.exp >= b.exp { (self, b) } else { (b, self) };
        c.mantissa.clone_from(&lo.mantissa);
        c.mantissa <<= hi.exp - lo.exp;
        c.mantissa += &hi.mantissa;
        c.exp = hi.exp;
        c.normalize();
    }

    fn mul_into(&self, b: &Self, c: &mut Self) {
        c.mantissa.assign(&self.mantissa * &b.mantissa);
        c.exp = checked_exp(self.exp.checked_add(b.exp));
        c.normalize();
    }

    fn pow_into(&self, n: u32, c: &mut Self) {
        c.exp = checked_exp(self.exp.checked_mul(n));
        c.mantissa = self.mantissa.clone().pow(n);
        c.normalize();
    }
}
