use super::Interval;
use crate::endpoint::endpoint_lt;
use crate::scalar::Scalar;
use std::cmp::Ordering;
use std::ops::{Mul, MulAssign};

impl<S: Scalar> Interval<S> {
    /// Assigns self * rhs to out, reusing the storage of out.
    ///
    /// A point operand is handled first: zero annihilates, a positive value scales
    /// the other operand and a negative one scales and mirrors it. Two ranges are
    /// bounded by their four corner products.
    pub fn mul_into(&self, rhs: &Self, out: &mut Self) {
        self.debug_assert_well_formed();
        rhs.debug_assert_well_formed();

        match (&self.b, &rhs.b) {
            (None, None) => {
                let a: &mut S = out.point_slot();
                self.a.mul_into(&rhs.a, a);
            }
            (None, Some(_)) => rhs.scale_into(&self.a, out),
            (Some(_), None) => self.scale_into(&rhs.a, out),
            (Some(_), Some(_)) => self.corners_into(rhs, out),
        }
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        let mut out: Self = Self::zero();
        self.mul_into(rhs, &mut out);
        out
    }

    /// Assigns x * self to out, self being a range.
    fn scale_into(&self, x: &S, out: &mut Self) {
        match x.sgn() {
            Ordering::Equal => *out.point_slot() = S::zero(),
            Ordering::Greater => {
                let (a, b) = out.range_slots();
                x.mul_into(&self.a, a);
                x.mul_into(self.hi(), b);
                out.a_open = self.a_open;
                out.b_open = self.b_open;
            }
            Ordering::Less => {
                let (a, b) = out.range_slots();
                x.mul_into(self.hi(), a);
                x.mul_into(&self.a, b);
                out.a_open = self.b_open;
                out.b_open = self.a_open;
            }
        }
    }

    /// Assigns self * rhs to out, both being ranges.
    ///
    /// Multiplication is bilinear, so the extremes over the box are attained at its
    /// corners whatever the signs. All four corners are evaluated; each corner is
    /// open if either of its endpoints is. On equal values the closed candidate wins
    /// on both sides, since the bound is attained as soon as one corner attains it.
    fn corners_into(&self, rhs: &Self, out: &mut Self) {
        let (a1, b1) = (&self.a, self.hi());
        let (a2, b2) = (&rhs.a, rhs.hi());

        let (lo, hi) = out.range_slots();
        a1.mul_into(a2, lo);
        hi.clone_from(lo);
        let mut lo_open: bool = self.a_open || rhs.a_open;
        let mut hi_open: bool = lo_open;

        let mut tmp: S = S::zero();
        for (x, x_open, y, y_open) in [
            (a1, self.a_open, b2, rhs.b_open),
            (b1, self.b_open, a2, rhs.a_open),
            (b1, self.b_open, b2, rhs.b_open),
        ] {
            let tmp_open: bool = x_open || y_open;
            x.mul_into(y, &mut tmp);
            let below: bool = endpoint_lt(&tmp, tmp_open, &*lo, lo_open);
            let above: bool = endpoint_lt(&*hi, !hi_open, &tmp, !tmp_open);
            if below && above {
                hi.clone_from(&tmp);
                hi_open = tmp_open;
            }
            if below {
                std::mem::swap(&mut tmp, &mut *lo);
                lo_open = tmp_open;
            } else if above {
                std::mem::swap(&mut tmp, &mut *hi);
                hi_open = tmp_open;
            }
        }

        out.a_open = lo_open;
        out.b_open = hi_open;
    }
}

impl<S: Scalar> Mul<&Interval<S>> for &Interval<S> {
    type Output = Interval<S>;

    fn mul(self, rhs: &Interval<S>) -> Interval<S> {
        Interval::mul(self, rhs)
    }
}

impl<S: Scalar> MulAssign<&Interval<S>> for Interval<S> {
    fn mul_assign(&mut self, rhs: &Interval<S>) {
        let mut result: Interval<S> = Interval::zero();
        self.mul_into(rhs, &mut result);
        self.swap(&mut result);
    }
}
