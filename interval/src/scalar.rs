use rug::ops::Pow;
use rug::{Assign, Rational};
use std::cmp::Ordering;
use std::fmt;

/// Exact ordered scalar the interval engine is generic over.
///
/// Copy, swap and release are provided by `Clone`, `std::mem::swap` and `Drop`.
/// The `*_into` operations write their result into `c`, reusing its storage.
pub trait Scalar: Clone + Ord + fmt::Debug + fmt::Display {
    fn zero() -> Self;

    fn one() -> Self;

    fn from_i64(x: i64) -> Self;

    /// Returns the sign of self as an ordering against zero.
    fn sgn(&self) -> Ordering;

    /// Assigns self + b to c.
    fn add_into(&self, b: &Self, c: &mut Self);

    /// Assigns self * b to c.
    fn mul_into(&self, b: &Self, c: &mut Self);

    /// Assigns self^n to c.
    fn pow_into(&self, n: u32, c: &mut Self);
}

impl Scalar for Rational {
    #[inline(always)]
    fn zero() -> Self {
        Rational::new()
    }

    #[inline(always)]
    fn one() -> Self {
        Rational::from(1)
    }

    #[inline(always)]
    fn from_i64(x: i64) -> Self {
        Rational::from(x)
    }

    #[inline(always)]
    fn sgn(&self) -> Ordering {
        self.cmp0()
    }

    #[inline(always)]
    fn add_into(&self, b: &Self, c: &mut Self) {
        c.assign(self + b);
    }

    #[inline(always)]
    fn mul_into(&self, b: &Self, c: &mut Self) {
        c.assign(self * b);
    }

    #[inline(always)]
    fn pow_into(&self, n: u32, c: &mut Self) {
        *c = self.clone().pow(n);
    }
}
