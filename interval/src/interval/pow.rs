use super::Interval;
use crate::scalar::Scalar;
use std::cmp::Ordering;

impl<S: Scalar> Interval<S> {
    /// Assigns self^n to out, reusing the storage of out. `x^0` is the point 1
    /// for every x, including 0.
    ///
    /// Odd powers are monotonic and keep both sides. Even powers depend on the signs
    /// of the endpoint values: `a > 0` behaves like an odd power, `b < 0` swaps the
    /// sides, and `a <= 0 <= b` maps to `[0, max(|a|, |b|)^n]`. In that last case the
    /// lower bound is always closed, also when zero is only an open endpoint.
    pub fn pow_into(&self, n: u32, out: &mut Self) {
        self.debug_assert_well_formed();

        if n == 0 {
            *out.point_slot() = S::one();
            return;
        }

        let Some(b) = &self.b else {
            let a: &mut S = out.point_slot();
            self.a.pow_into(n, a);
            return;
        };

        let sgn: Ordering = if n & 1 == 1 || self.a.sgn() == Ordering::Greater {
            Ordering::Greater
        } else if b.sgn() == Ordering::Less {
            Ordering::Less
        } else {
            Ordering::Equal
        };

        let (pa, pb) = out.range_slots();
        match sgn {
            Ordering::Greater => {
                self.a.pow_into(n, pa);
                b.pow_into(n, pb);
                out.a_open = self.a_open;
                out.b_open = self.b_open;
            }
            Ordering::Less => {
                b.pow_into(n, pa);
                self.a.pow_into(n, pb);
                out.a_open = self.b_open;
                out.b_open = self.a_open;
            }
            Ordering::Equal => {
                self.a.pow_into(n, pa);
                b.pow_into(n, pb);
                let b_open: bool = match (*pa).cmp(&*pb) {
                    Ordering::Greater => {
                        std::mem::swap(&mut *pa, &mut *pb);
                        self.a_open
                    }
                    Ordering::Less => self.b_open,
                    Ordering::Equal => self.a_open && self.b_open,
                };
                *pa = S::zero();
                out.a_open = false;
                out.b_open = b_open;
            }
        }
    }

    pub fn pow(&self, n: u32) -> Self {
        let mut out: Self = Self::zero();
        self.pow_into(n, &mut out);
        out
    }
}
