// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Simplest Slope Between Two Slopes
//!
//! Given the two extreme admissible slopes of a merge across a gap, finds
//! the rational slope of smallest denominator lying between them.
//!
//! Both bounds are expanded into continued fractions and walked in
//! lock-step, which amounts to descending the Stern-Brocot tree along their
//! common ancestor path. At the first quotient where the expansions part
//! ways the walk decides:
//!
//! - with both expansions continuing past the divergence, appending
//!   `min + 1` closes the simplest rational strictly inside the interval;
//! - with both expansions ending there and quotients one apart, the
//!   interval contains nothing simpler than the mediant;
//! - with one expansion a strict prefix of the other (an ancestor in the
//!   tree), the depth difference decides between an appended unit arc, an
//!   adjusted copy of the deeper expansion's next quotient, and the mediant
//!   fallback.
//!
//! Whenever the walk signals "nothing simpler" or reproduces a bound, the
//! mediant of the bounds is the answer.

use segmerge_core::LatticeVariable;
use segmerge_core::arith::gcd;
use segmerge_core::fraction::ContinuedFraction;
use segmerge_core::lattice::Vector;
use tracing::trace;

/// Finds the slope of smallest denominator between `vlow` and `vup`.
///
/// The bounds are direction vectors `(x, y)` encoding the slopes
/// `vlow.y / vlow.x <= vup.y / vup.x`; both must point into increasing `x`.
/// The result is the reduced vector `(b, a)` of the simplest slope `a / b`
/// in between.
///
/// # Panics
///
/// Panics if either vector has a non-positive `x` component.
pub fn simplest_slope_between<T: LatticeVariable>(vlow: Vector<T>, vup: Vector<T>) -> Vector<T> {
    assert!(
        vlow.x() > T::zero() && vup.x() > T::zero(),
        "simplest_slope_between: bounds must advance in x"
    );
    // Naive slopes are never negative; a bound dipping below zero through
    // the one-row shift clamps to the zero slope.
    let f = ContinuedFraction::from_ratio(vlow.y().max(T::zero()), vlow.x());
    let g = ContinuedFraction::from_ratio(vup.y().max(T::zero()), vup.x());

    if f == g {
        let (p, q) = f.value();
        return reduced(q, p);
    }

    let one = T::one();
    let two = one + one;
    let kf = f.depth();
    let kg = g.depth();
    let fq = f.quotients();
    let gq = g.quotients();

    let mut res = ContinuedFraction::new();
    let mut found = false;
    let mut no_result = false;

    let mut i = 0usize;
    while i < fq.len() && i < gq.len() && !found && !no_result {
        let uf = fq[i];
        let ug = gq[i];
        if uf == ug {
            res.push(uf);
        } else {
            let coeff = uf.min(ug);
            if i == kf && i == kg {
                // Both expansions end here: quotients one apart enclose an
                // empty tree interval.
                if (uf - ug).abs() <= one {
                    no_result = true;
                } else {
                    res.push(coeff + one);
                    found = true;
                }
            } else if (i != kf && i != kg)
                || (i == kf && uf > two)
                || (i == kg && ug > two)
            {
                res.push(coeff + one);
                found = true;
            } else {
                // One expansion ends here with a small quotient; keep the
                // shared ancestor and let the prefix handling below finish.
                res.push(coeff);
            }
        }
        i += 1;
    }

    if !found && !no_result {
        // One expansion is a strict prefix of the other: its rational is an
        // ancestor of the other bound in the tree.
        if i >= fq.len() {
            if kg == kf + 1 {
                res.push(two);
            } else {
                res.push(one);
            }
            if kf + 2 <= kg {
                if kg == kf + 2 {
                    no_result = true;
                } else {
                    res.push(gq[kf + 2] + one);
                }
            }
        } else {
            if kf == kg + 1 {
                res.push(two);
            } else {
                res.push(one);
            }
            if kg + 2 <= kf {
                if kf == kg + 2 {
                    no_result = true;
                } else {
                    res.push(fq[kg + 2] + one);
                }
            }
        }
    }

    if no_result || res == f || res == g {
        trace!("no simpler separating slope, falling back to the mediant");
        let (p, q) = f.mediant(&g);
        return reduced(q, p);
    }

    let (p, q) = res.value();
    reduced(q, p)
}

#[inline]
fn reduced<T: LatticeVariable>(q: T, p: T) -> Vector<T> {
    let g = gcd(p, q);
    if g > T::one() {
        Vector::new(q / g, p / g)
    } else {
        Vector::new(q, p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: i64, y: i64) -> Vector<i64> {
        Vector::new(x, y)
    }

    fn between(lo: (i64, i64), up: (i64, i64)) -> (i64, i64) {
        let r = simplest_slope_between(v(lo.0, lo.1), v(up.0, up.1));
        (r.y(), r.x())
    }

    #[test]
    fn test_mediant_between_one_third_and_one_half() {
        // No denominator below 5 separates 1/3 and 1/2.
        assert_eq!(between((3, 1), (2, 1)), (2, 5));
    }

    #[test]
    fn test_simple_separator_found_at_divergence() {
        // 1/2 sits between 1/3 and 2/3.
        assert_eq!(between((3, 1), (3, 2)), (1, 2));
        // 1/3 sits between 1/4 and 1/2.
        assert_eq!(between((4, 1), (2, 1)), (1, 3));
        // 3/7 sits between 5/12 and 4/9.
        assert_eq!(between((12, 5), (9, 4)), (3, 7));
        // 1/2 sits between 3/8 and 4/7.
        assert_eq!(between((8, 3), (7, 4)), (1, 2));
    }

    #[test]
    fn test_mediant_for_tree_neighbours() {
        // 2/5 and 1/2 enclose only their mediant 3/7.
        assert_eq!(between((5, 2), (2, 1)), (3, 7));
        // 1/2 and 3/5 enclose only 4/7.
        assert_eq!(between((2, 1), (5, 3)), (4, 7));
        // 1/4 and 1/3 enclose only 2/7.
        assert_eq!(between((4, 1), (3, 1)), (2, 7));
        // 3/10 and 1/3 enclose only 4/13.
        assert_eq!(between((10, 3), (3, 1)), (4, 13));
    }

    #[test]
    fn test_ancestor_cases() {
        // 1/2 is an ancestor of 5/8; the simplest slope in between is 3/5.
        assert_eq!(between((2, 1), (8, 5)), (3, 5));
        // 1/2 below its descendant 1 on the right spine: 2/3 in between.
        assert_eq!(between((2, 1), (1, 1)), (2, 3));
        // 2/3 right below 1: only the mediant 3/4 fits.
        assert_eq!(between((3, 2), (1, 1)), (3, 4));
    }

    #[test]
    fn test_zero_lower_bound() {
        // Between 0 and 1/4 only 1/5 is simpler than both... nothing is;
        // the mediant 1/5 it is.
        assert_eq!(between((1, 0), (4, 1)), (1, 5));
        // Between 0 and 2/3 the simplest interior slope is 1/2.
        assert_eq!(between((1, 0), (3, 2)), (1, 2));
        // Degenerate: the one-row shift can push the lower bound negative;
        // it clamps to zero.
        assert_eq!(between((3, -1), (3, 2)), (1, 2));
    }

    #[test]
    fn test_equal_bounds_return_that_slope() {
        assert_eq!(between((3, 1), (6, 2)), (1, 3));
    }

    #[test]
    fn test_non_reduced_bounds_are_handled() {
        // 2/6 and 3/6 are 1/3 and 1/2 in disguise.
        assert_eq!(between((6, 2), (6, 3)), (2, 5));
    }

    #[test]
    fn test_minimality_by_exhaustive_search() {
        // Cross-check against brute force: the returned slope lies in the
        // closed slope interval, and no fraction with a smaller denominator
        // lies strictly inside it.
        let cases = [
            ((3i64, 1i64), (2i64, 1i64)),
            ((3, 1), (3, 2)),
            ((4, 1), (2, 1)),
            ((12, 5), (9, 4)),
            ((8, 3), (7, 4)),
            ((5, 2), (2, 1)),
            ((2, 1), (5, 3)),
            ((4, 1), (3, 1)),
            ((10, 3), (3, 1)),
            ((2, 1), (8, 5)),
            ((2, 1), (1, 1)),
            ((3, 2), (1, 1)),
            ((1, 0), (4, 1)),
            ((1, 0), (3, 2)),
        ];
        for ((q1, p1), (q2, p2)) in cases {
            let r = simplest_slope_between(v(q1, p1), v(q2, p2));
            let (a, b) = (r.y(), r.x());
            assert!(
                a * q1 >= p1 * b && a * q2 <= p2 * b,
                "{}/{} outside [{}/{}, {}/{}]",
                a,
                b,
                p1,
                q1,
                p2,
                q2
            );
            for db in 1..b {
                for da in 0..=db {
                    assert!(
                        !(da * q1 > p1 * db && da * q2 < p2 * db),
                        "{}/{} lies strictly between {}/{} and {}/{} yet {}/{} was returned",
                        da,
                        db,
                        p1,
                        q1,
                        p2,
                        q2,
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_result_is_reduced_and_denominator_not_above_mediant() {
        // The mediant is always available, so the result never needs a
        // larger denominator than it.
        let cases = [
            ((3i64, 1i64), (2i64, 1i64)),
            ((5, 2), (2, 1)),
            ((7, 3), (2, 1)),
            ((12, 5), (9, 4)),
            ((1000, 41), (1000, 547)),
            ((9, 2), (7, 2)),
            ((11, 4), (5, 2)),
        ];
        for ((q1, p1), (q2, p2)) in cases {
            let r = simplest_slope_between(v(q1, p1), v(q2, p2));
            assert_eq!(gcd(r.y(), r.x()), 1, "{}/{} not reduced", r.y(), r.x());
            assert!(
                r.x() <= q1 + q2,
                "{}/{} has a larger denominator than the mediant of {}/{} and {}/{}",
                r.y(),
                r.x(),
                p1,
                q1,
                p2,
                q2
            );
        }
    }
}
