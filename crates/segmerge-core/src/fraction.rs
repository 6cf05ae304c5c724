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

//! # Continued Fractions
//!
//! A non-negative rational represented by the sequence of its partial
//! quotients `[u0; u1, ..., uk]`. The sequence locates the rational in the
//! Stern-Brocot tree: two rationals share a tree ancestor path exactly as far
//! as their quotient sequences agree, which is what the simplest-slope search
//! walks over.
//!
//! A [`ContinuedFraction`] is either built from a ratio via the Euclidean
//! algorithm or grown quotient by quotient while synthesizing a new rational.
//! It is never mutated after the walk that builds it; numerator and
//! denominator are recovered by folding the convergent recurrence.

use crate::LatticeVariable;

/// Partial-quotient expansion of a non-negative rational.
#[derive(Debug, Clone, Eq)]
pub struct ContinuedFraction<T: LatticeVariable> {
    quotients: Vec<T>,
}

impl<T: LatticeVariable> ContinuedFraction<T> {
    /// An empty expansion, ready to be grown with [`push`](Self::push).
    #[inline]
    pub fn new() -> Self {
        Self {
            quotients: Vec::new(),
        }
    }

    /// Expands `p / q` with the Euclidean algorithm, then normalizes to the
    /// representation whose last partial quotient is `1` (`[..., u, 1]`
    /// instead of `[..., u + 1]`).
    ///
    /// Every positive rational has the two equivalent expansions; the
    /// unit-terminated one mirrors the arc runs of the Stern-Brocot path, so
    /// two expansions diverge exactly where the tree paths do. The lock-step
    /// comparison of two expansions relies on this form. `0 / q` expands to
    /// `[0]`.
    ///
    /// The ratio does not have to be reduced; the expansion always denotes
    /// the reduced value.
    ///
    /// # Panics
    ///
    /// Panics if `p < 0` or `q <= 0`.
    pub fn from_ratio(p: T, q: T) -> Self {
        assert!(p >= T::zero(), "ContinuedFraction::from_ratio: p must be >= 0");
        assert!(q > T::zero(), "ContinuedFraction::from_ratio: q must be > 0");
        let mut quotients = Vec::new();
        let mut p = p;
        let mut q = q;
        loop {
            quotients.push(p / q);
            let r = p % q;
            if r.is_zero() {
                break;
            }
            p = q;
            q = r;
        }
        // Normalize [..., u] to [..., u-1, 1]; only the zero expansion [0]
        // keeps its single term.
        let last = *quotients.last().expect("euclidean expansion is non-empty");
        if last >= T::one() {
            *quotients.last_mut().expect("non-empty") = last - T::one();
            quotients.push(T::one());
        }
        Self { quotients }
    }

    /// Appends the next partial quotient.
    #[inline]
    pub fn push(&mut self, quotient: T) {
        self.quotients.push(quotient);
    }

    /// Number of partial quotients.
    #[inline]
    pub fn len(&self) -> usize {
        self.quotients.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quotients.is_empty()
    }

    /// Index of the last partial quotient (the depth of the rational in the
    /// Stern-Brocot tree walk).
    ///
    /// # Panics
    ///
    /// Panics on an empty expansion.
    #[inline]
    pub fn depth(&self) -> usize {
        assert!(!self.quotients.is_empty(), "depth of empty expansion");
        self.quotients.len() - 1
    }

    /// The partial quotients, shallowest first.
    #[inline]
    pub fn quotients(&self) -> &[T] {
        &self.quotients
    }

    /// Recovers `(p, q)` by folding the convergent recurrence. The result is
    /// always reduced.
    ///
    /// # Panics
    ///
    /// Panics on an empty expansion.
    pub fn value(&self) -> (T, T) {
        assert!(!self.quotients.is_empty(), "value of empty expansion");
        let mut p = T::one();
        let mut q = T::zero();
        for &u in self.quotients.iter().rev() {
            let next = u
                .checked_mul(&p)
                .and_then(|up| up.checked_add(&q))
                .expect("overflow in continued-fraction convergent");
            q = p;
            p = next;
        }
        (p, q)
    }

    /// Numerator of the represented rational.
    #[inline]
    pub fn p(&self) -> T {
        self.value().0
    }

    /// Denominator of the represented rational.
    #[inline]
    pub fn q(&self) -> T {
        self.value().1
    }

    /// The mediant `(p1 + p2) / (q1 + q2)` of two rationals, the child of
    /// their interval in the Stern-Brocot tree.
    pub fn mediant(&self, other: &Self) -> (T, T) {
        let (p1, q1) = self.value();
        let (p2, q2) = other.value();
        (
            p1.checked_add(&p2).expect("overflow in mediant numerator"),
            q1.checked_add(&q2)
                .expect("overflow in mediant denominator"),
        )
    }
}

impl<T: LatticeVariable> Default for ContinuedFraction<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Value equality: two expansions are equal when they denote the same
/// rational, regardless of the representation chosen (`[0; 2]` equals
/// `[0; 1, 1]`).
impl<T: LatticeVariable> PartialEq for ContinuedFraction<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => true,
            (false, false) => self.value() == other.value(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ratio_unit_terminated_expansion() {
        let f = ContinuedFraction::from_ratio(5i64, 8);
        assert_eq!(f.quotients(), &[0, 1, 1, 1, 1, 1]);
        assert_eq!(f.depth(), 5);

        let g = ContinuedFraction::from_ratio(1i64, 3);
        assert_eq!(g.quotients(), &[0, 2, 1]);

        let h = ContinuedFraction::from_ratio(7i64, 2);
        assert_eq!(h.quotients(), &[3, 1, 1]);

        let half = ContinuedFraction::from_ratio(1i64, 2);
        assert_eq!(half.quotients(), &[0, 1, 1]);
    }

    #[test]
    fn test_from_ratio_zero_numerator() {
        let f = ContinuedFraction::from_ratio(0i64, 4);
        assert_eq!(f.quotients(), &[0]);
        assert_eq!(f.value(), (0, 1));
    }

    #[test]
    fn test_from_ratio_integer() {
        let f = ContinuedFraction::from_ratio(6i64, 1);
        assert_eq!(f.quotients(), &[5, 1]);
        assert_eq!(f.value(), (6, 1));

        let one = ContinuedFraction::from_ratio(1i64, 1);
        assert_eq!(one.quotients(), &[0, 1]);
        assert_eq!(one.value(), (1, 1));
    }

    #[test]
    fn test_value_roundtrip() {
        for (p, q) in [(5i64, 8), (1, 3), (2, 5), (41, 1000), (547, 1000)] {
            let f = ContinuedFraction::from_ratio(p, q);
            assert_eq!(f.value(), (p, q), "roundtrip of {}/{}", p, q);
        }
    }

    #[test]
    fn test_from_ratio_reduces() {
        let f = ContinuedFraction::from_ratio(4i64, 6);
        assert_eq!(f.value(), (2, 3));
        assert_eq!(f, ContinuedFraction::from_ratio(2, 3));
    }

    #[test]
    fn test_push_and_value() {
        let mut f = ContinuedFraction::new();
        assert!(f.is_empty());
        f.push(0i64);
        f.push(2);
        f.push(2);
        // [0; 2, 2] = 2/5
        assert_eq!(f.value(), (2, 5));
        assert_eq!(f.len(), 3);
        assert_eq!(f.depth(), 2);
    }

    #[test]
    fn test_value_equality_across_representations() {
        let mut a = ContinuedFraction::new();
        a.push(0i64);
        a.push(1);
        a.push(1);
        let b = ContinuedFraction::from_ratio(1i64, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_mediant() {
        let f = ContinuedFraction::from_ratio(1i64, 3);
        let g = ContinuedFraction::from_ratio(1i64, 2);
        assert_eq!(f.mediant(&g), (2, 5));
    }

    #[test]
    #[should_panic(expected = "value of empty expansion")]
    fn test_value_panics_on_empty() {
        let f: ContinuedFraction<i64> = ContinuedFraction::new();
        let _ = f.value();
    }

    #[test]
    #[should_panic(expected = "p must be >= 0")]
    fn test_from_ratio_rejects_negative_numerator() {
        let _ = ContinuedFraction::from_ratio(-1i64, 2);
    }

    #[test]
    #[should_panic(expected = "q must be > 0")]
    fn test_from_ratio_rejects_non_positive_denominator() {
        let _ = ContinuedFraction::from_ratio(1i64, 0);
    }
}
