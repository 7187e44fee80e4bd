mod add;
mod mul;
mod pow;

use crate::dyadic::Dyadic;
use crate::scalar::Scalar;
use rug::Rational;
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

/// Interval with exact endpoints.
///
/// A point interval stores a single value and no upper endpoint; it is always closed.
/// A range stores both endpoints with `a <= b` and one openness flag per side.
/// Callers maintain `a <= b`: debug builds assert it on construction and on every
/// arithmetic input, release builds treat a violation as a broken precondition.
#[derive(Debug, PartialEq, Eq)]
pub struct Interval<S: Scalar> {
    a: S,
    b: Option<S>,
    a_open: bool,
    b_open: bool,
}

/// Read-only tagged view of an [Interval].
#[derive(Debug, PartialEq, Eq)]
pub enum IntervalView<'a, S: Scalar> {
    Point(&'a S),
    Range {
        a: &'a S,
        a_open: bool,
        b: &'a S,
        b_open: bool,
    },
}

impl<S: Scalar> Clone for IntervalView<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Scalar> Copy for IntervalView<'_, S> {}

impl<S: Scalar> Interval<S> {
    /// Returns the point interval at zero.
    pub fn zero() -> Self {
        Self::point(S::zero())
    }

    pub fn point(a: S) -> Self {
        Self {
            a,
            b: None,
            a_open: false,
            b_open: false,
        }
    }

    /// Returns the interval between `a` and `b`.
    ///
    /// Collapses to a point when `a == b`, in which case both sides must be closed.
    pub fn new(a: S, a_open: bool, b: S, b_open: bool) -> Self {
        debug_assert!(a <= b, "invalid interval: a = {} > b = {}", a, b);
        if a == b {
            debug_assert!(
                !a_open && !b_open,
                "invalid interval: point {} with an open side",
                a
            );
            return Self::point(a);
        }
        Self {
            a,
            b: Some(b),
            a_open,
            b_open,
        }
    }

    pub fn b(&self) -> Option<&S> {
        self.b.as_ref()
    }

    pub fn a_open(&self) -> bool {
        self.a_open
    }

    pub fn b_open(&self) -> bool {
        self.b_open
    }

    pub fn is_point(&self) -> bool {
        self.b.is_none()
    }

    /// Lower endpoint value.
    pub fn lo(&self) -> &S {
        &self.a
    }

    /// Upper endpoint value, the point value itself for point intervals.
    pub fn hi(&self) -> &S {
        self.b.as_ref().unwrap_or(&self.a)
    }

    pub fn view(&self) -> IntervalView<'_, S> {
        match &self.b {
            None => IntervalView::Point(&self.a),
            Some(b) => IntervalView::Range {
                a: &self.a,
                a_open: self.a_open,
                b,
                b_open: self.b_open,
            },
        }
    }

    /// Exchanges the content of self and other without copying any endpoint.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other)
    }

    /// Returns the sign of the interval.
    ///
    /// `Greater` when every element is positive, `Less` when every element is
    /// negative and `Equal` when the interval contains zero.
    pub fn sgn(&self) -> Ordering {
        let a_sgn: Ordering = self.a.sgn();
        let Some(b) = &self.b else {
            return a_sgn;
        };
        if a_sgn == Ordering::Greater || (a_sgn == Ordering::Equal && self.a_open) {
            return Ordering::Greater;
        }
        let b_sgn: Ordering = b.sgn();
        if b_sgn == Ordering::Less || (b_sgn == Ordering::Equal && self.b_open) {
            return Ordering::Less;
        }
        Ordering::Equal
    }

    pub fn contains(&self, x: &S) -> bool {
        let Some(b) = &self.b else {
            return self.a == *x;
        };
        let above_a: bool = match self.a.cmp(x) {
            Ordering::Less => true,
            Ordering::Equal => !self.a_open,
            Ordering::Greater => false,
        };
        let below_b: bool = match x.cmp(b) {
            Ordering::Less => true,
            Ordering::Equal => !self.b_open,
            Ordering::Greater => false,
        };
        above_a && below_b
    }

    /// Turns self into a point, releasing the upper endpoint, and returns its value slot.
    fn point_slot(&mut self) -> &mut S {
        self.b = None;
        self.a_open = false;
        self.b_open = false;
        &mut self.a
    }

    /// Turns self into a range, acquiring the upper endpoint if needed, and returns
    /// both endpoint slots. Openness flags are left to the caller.
    fn range_slots(&mut self) -> (&mut S, &mut S) {
        let b: &mut S = self.b.get_or_insert_with(S::zero);
        (&mut self.a, b)
    }

    #[inline(always)]
    fn debug_assert_well_formed(&self) {
        #[cfg(debug_assertions)]
        {
            match &self.b {
                Some(b) => assert!(self.a <= *b, "invalid interval: a = {} > b = {}", self.a, b),
                None => assert!(
                    !self.a_open && !self.b_open,
                    "invalid interval: point {} with an open side",
                    self.a
                ),
            }
        }
    }
}

impl<S: Scalar> Default for Interval<S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Scalar> Clone for Interval<S> {
    fn clone(&self) -> Self {
        Self {
            a: self.a.clone(),
            b: self.b.clone(),
            a_open: self.a_open,
            b_open: self.b_open,
        }
    }

    /// Deep copy reusing the endpoint storage of self.
    fn clone_from(&mut self, source: &Self) {
        self.a.clone_from(&source.a);
        match (&mut self.b, &source.b) {
            (Some(b), Some(source_b)) => b.clone_from(source_b),
            (b, source_b) => *b = source_b.clone(),
        }
        self.a_open = source.a_open;
        self.b_open = source.b_open;
    }
}

impl<S: Scalar> From<S> for Interval<S> {
    fn from(a: S) -> Self {
        Self::point(a)
    }
}

impl<S: Scalar> fmt::Display for Interval<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.b {
            None => write!(f, "[{}]", self.a),
            Some(b) => write!(
                f,
                "{}{}, {}{}",
                if self.a_open { '(' } else { '[' },
                self.a,
                b,
                if self.b_open { ')' } else { ']' }
            ),
        }
    }
}

impl From<&Interval<Dyadic>> for Interval<Rational> {
    fn from(x: &Interval<Dyadic>) -> Self {
        Self {
            a: x.a.to_rational(),
            b: x.b.as_ref().map(Dyadic::to_rational),
            a_open: x.a_open,
            b_open: x.b_open,
        }
    }
}

impl Interval<Dyadic> {
    /// Splits the interval at its midpoint `m`.
    ///
    /// Returns the halves from `a` to `m` and from `m` to `b`, keeping the outer
    /// openness; `left_open` and `right_open` give the openness of each half at `m`.
    /// A point interval is returned unchanged as both halves.
    pub fn split(&self, left_open: bool, right_open: bool) -> (Self, Self) {
        let Some(b) = &self.b else {
            return (self.clone(), self.clone());
        };
        let m: Dyadic = self.a.midpoint(b);
        trace!(interval = %self, mid = %m, "split");
        let left: Self = Self {
            a: self.a.clone(),
            b: Some(m.clone()),
            a_open: self.a_open,
            b_open: left_open,
        };
        let right: Self = Self {
            a: m,
            b: Some(b.clone()),
            a_open: right_open,
            b_open: self.b_open,
        };
        (left, right)
    }
}
