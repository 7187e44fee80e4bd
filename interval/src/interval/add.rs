use super::Interval;
use crate::scalar::Scalar;
use std::ops::{Add, AddAssign};

impl<S: Scalar> Interval<S> {
    /// Assigns self + rhs to out, reusing the storage of out.
    ///
    /// A sum bound is attained only if both contributing bounds are, so the
    /// openness of each side is the OR of the operands' openness on that side.
    /// Adding a point shifts the other operand and keeps its openness.
    pub fn add_into(&self, rhs: &Self, out: &mut Self) {
        self.debug_assert_well_formed();
        rhs.debug_assert_well_formed();

        match (&self.b, &rhs.b) {
            (None, None) => {
                let a: &mut S = out.point_slot();
                self.a.add_into(&rhs.a, a);
            }
            (None, Some(_)) => rhs.shift_into(&self.a, out),
            (Some(_), None) => self.shift_into(&rhs.a, out),
            (Some(b1), Some(b2)) => {
                let (a, b) = out.range_slots();
                self.a.add_into(&rhs.a, a);
                b1.add_into(b2, b);
                out.a_open = self.a_open || rhs.a_open;
                out.b_open = self.b_open || rhs.b_open;
            }
        }
    }

    pub fn add(&self, rhs: &Self) -> Self {
        let mut out: Self = Self::zero();
        self.add_into(rhs, &mut out);
        out
    }

    /// Assigns self + x to out, self being a range.
    fn shift_into(&self, x: &S, out: &mut Self) {
        let (a, b) = out.range_slots();
        self.a.add_into(x, a);
        self.hi().add_into(x, b);
        out.a_open = self.a_open;
        out.b_open = self.b_open;
    }
}

impl<S: Scalar> Add<&Interval<S>> for &Interval<S> {
    type Output = Interval<S>;

    fn add(self, rhs: &Interval<S>) -> Interval<S> {
        Interval::add(self, rhs)
    }
}

impl<S: Scalar> AddAssign<&Interval<S>> for Interval<S> {
    /// Computes into a temporary and swaps it in, so self is never read half-written.
    fn add_assign(&mut self, rhs: &Interval<S>) {
        let mut result: Interval<S> = Interval::zero();
        self.add_into(rhs, &mut result);
        self.swap(&mut result);
    }
}
