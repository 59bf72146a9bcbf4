//! Point comparators: eps-tolerant equality, lexicographic order, dominance.
//!
//! Points are `DVector<f64>` values; every comparator takes its epsilon
//! explicitly. The lexicographic order treats coordinates equal within eps
//! as ties and breaks on the first decisive coordinate, which gives the
//! deterministic ordering the pending queue relies on.

use std::cmp::Ordering;

use nalgebra::DVector;

/// Componentwise epsilon equality.
#[inline]
pub fn eq_eps(a: &DVector<f64>, b: &DVector<f64>, eps: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
}

/// Epsilon-tolerant lexicographic total order.
///
/// Coordinates within eps compare equal; the first coordinate outside the
/// band decides. Equal-length inputs are assumed.
pub fn lex_cmp(a: &DVector<f64>, b: &DVector<f64>, eps: f64) -> Ordering {
    debug_assert_eq!(a.len(), b.len(), "lex_cmp on mismatched dimensions");
    for (x, y) in a.iter().zip(b.iter()) {
        if x - y < -eps {
            return Ordering::Less;
        }
        if x - y > eps {
            return Ordering::Greater;
        }
    }
    Ordering::Equal
}

/// Weak Pareto dominance: `a` dominates `b` iff every coordinate of `a` is
/// at most the corresponding coordinate of `b` (within eps) and at least
/// one is strictly smaller by more than eps.
pub fn dominates(a: &DVector<f64>, b: &DVector<f64>, eps: f64) -> bool {
    debug_assert_eq!(a.len(), b.len(), "dominates on mismatched dimensions");
    let mut strict = false;
    for (x, y) in a.iter().zip(b.iter()) {
        if x - y > eps {
            return false;
        }
        if y - x > eps {
            strict = true;
        }
    }
    strict
}
