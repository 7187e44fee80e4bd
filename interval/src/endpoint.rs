use crate::scalar::Scalar;
use std::cmp::Ordering;

/// Strict order on endpoints `(value, open)`.
///
/// Smaller values come first; on equal values a closed endpoint precedes an open one.
/// Used to pick the tightest bound among candidate endpoints, never for membership.
#[inline(always)]
pub fn endpoint_lt<S: Scalar>(a: &S, a_open: bool, b: &S, b_open: bool) -> bool {
    match a.cmp(b) {
        Ordering::Less => true,
        Ordering::Equal => !a_open && b_open,
        Ordering::Greater => false,
    }
}
