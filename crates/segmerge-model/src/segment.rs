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

//! # Digital Straight Segments
//!
//! A [`DigitalSegment`] is a finite run of a digital straight line together
//! with the minimal characteristics `(a, b, mu)` describing it and the four
//! leaning points that witness their minimality: the first and last points
//! touching the upper bounding line (`remainder == mu`) and the first and
//! last points touching the lower one (`remainder == mu + b - 1`).
//!
//! Segments are immutable values. Merging two segments never mutates either;
//! it produces a new one.

use crate::err::{InvalidSegmentError, MisplacedLeaningPointError};
use crate::line::DigitalLine;
use segmerge_core::LatticeVariable;
use segmerge_core::arith::{gcd, remainder};
use segmerge_core::lattice::Point;
use std::fmt;

/// A naive digital straight segment in the first octant, with its minimal
/// characteristics and leaning points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitalSegment<T: LatticeVariable> {
    a: T,
    b: T,
    mu: T,
    front: Point<T>,
    back: Point<T>,
    uf: Point<T>,
    ul: Point<T>,
    lf: Point<T>,
    ll: Point<T>,
}

impl<T: LatticeVariable> DigitalSegment<T> {
    /// Builds a segment from its slope, endpoints and leaning points.
    ///
    /// The intercept is derived from the first upper leaning point
    /// (`mu = a*Uf.x - b*Uf.y`); the remaining inputs are validated against
    /// it. `front` is the first point in scan order, `back` the last.
    #[allow(clippy::too_many_arguments)]
    pub fn from_support(
        a: T,
        b: T,
        front: Point<T>,
        back: Point<T>,
        uf: Point<T>,
        ul: Point<T>,
        lf: Point<T>,
        ll: Point<T>,
    ) -> Result<Self, InvalidSegmentError<T>> {
        Self::check_slope(a, b)?;
        if front.x() > back.x() {
            return Err(InvalidSegmentError::EndpointsOutOfOrder { front, back });
        }
        let mu = remainder(a, b, uf);
        let lower = mu + b - T::one();
        let r_ul = remainder(a, b, ul);
        if r_ul != mu {
            return Err(MisplacedLeaningPointError::new(ul, r_ul, mu).into());
        }
        for lower_point in [lf, ll] {
            let r = remainder(a, b, lower_point);
            if r != lower {
                return Err(MisplacedLeaningPointError::new(lower_point, r, lower).into());
            }
        }
        for endpoint in [front, back] {
            let r = remainder(a, b, endpoint) - mu;
            if r < T::zero() || r >= b {
                return Err(InvalidSegmentError::EndpointOutsideLine {
                    point: endpoint,
                    remainder: r,
                });
            }
        }
        Ok(Self {
            a,
            b,
            mu,
            front,
            back,
            uf,
            ul,
            lf,
            ll,
        })
    }

    /// Builds a segment from a slope and a single upper leaning point.
    ///
    /// This is the shape produced by merging across a gap: the minimal slope
    /// and one witness on the upper bounding line are known, but the lower
    /// support of the covered run is not recovered. All four leaning-point
    /// slots hold the anchor; the lower pair is a stand-in, not a point of
    /// the lower bounding line. Callers that need exact lower support must
    /// rescan the run.
    pub fn from_minimal_slope(
        a: T,
        b: T,
        front: Point<T>,
        back: Point<T>,
        anchor: Point<T>,
    ) -> Result<Self, InvalidSegmentError<T>> {
        Self::check_slope(a, b)?;
        if front.x() > back.x() {
            return Err(InvalidSegmentError::EndpointsOutOfOrder { front, back });
        }
        let mu = remainder(a, b, anchor);
        Ok(Self {
            a,
            b,
            mu,
            front,
            back,
            uf: anchor,
            ul: anchor,
            lf: anchor,
            ll: anchor,
        })
    }

    fn check_slope(a: T, b: T) -> Result<(), InvalidSegmentError<T>> {
        if b <= T::zero() {
            return Err(InvalidSegmentError::NonPositiveDenominator { b });
        }
        if a < T::zero() || a > b {
            return Err(InvalidSegmentError::SlopeOutsideOctant { a, b });
        }
        if gcd(a, b) != T::one() {
            return Err(InvalidSegmentError::NonCoprimeSlope { a, b });
        }
        Ok(())
    }

    /// Construction path for the recognizer, whose update rules maintain the
    /// invariants by themselves.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts_unchecked(
        a: T,
        b: T,
        mu: T,
        front: Point<T>,
        back: Point<T>,
        uf: Point<T>,
        ul: Point<T>,
        lf: Point<T>,
        ll: Point<T>,
    ) -> Self {
        debug_assert!(b > T::zero() && gcd(a, b) == T::one());
        debug_assert!(remainder(a, b, uf) == mu);
        Self {
            a,
            b,
            mu,
            front,
            back,
            uf,
            ul,
            lf,
            ll,
        }
    }

    /// The remainder `a*x - b*y` of an arbitrary point with respect to this
    /// segment's slope. Pure; does not touch the segment.
    #[inline]
    pub fn remainder(&self, p: Point<T>) -> T {
        remainder(self.a, self.b, p)
    }

    /// Whether `p` lies in the digital straight line this segment is a run
    /// of, i.e. `0 <= remainder(p) - mu < b`.
    #[inline]
    pub fn in_dsl(&self, p: Point<T>) -> bool {
        let r = self.remainder(p) - self.mu;
        r >= T::zero() && r < self.b
    }

    /// The supporting line of this segment.
    #[inline]
    pub fn line(&self) -> DigitalLine<T> {
        DigitalLine::new_unchecked(self.a, self.b, self.mu)
    }

    #[inline]
    pub fn a(&self) -> T {
        self.a
    }

    #[inline]
    pub fn b(&self) -> T {
        self.b
    }

    #[inline]
    pub fn mu(&self) -> T {
        self.mu
    }

    /// First point of the segment in scan order.
    #[inline]
    pub fn front(&self) -> Point<T> {
        self.front
    }

    /// Last point of the segment in scan order.
    #[inline]
    pub fn back(&self) -> Point<T> {
        self.back
    }

    /// First upper leaning point.
    #[inline]
    pub fn uf(&self) -> Point<T> {
        self.uf
    }

    /// Last upper leaning point.
    #[inline]
    pub fn ul(&self) -> Point<T> {
        self.ul
    }

    /// First lower leaning point.
    #[inline]
    pub fn lf(&self) -> Point<T> {
        self.lf
    }

    /// Last lower leaning point.
    #[inline]
    pub fn ll(&self) -> Point<T> {
        self.ll
    }
}

impl<T: LatticeVariable> fmt::Display for DigitalSegment<T> {
    /// Diagnostic rendering; not a stable machine format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DSS(a={}, b={}, mu={}, front={}, back={}, Uf={}, Ul={}, Lf={}, Ll={})",
            self.a, self.b, self.mu, self.front, self.back, self.uf, self.ul, self.lf, self.ll
        )
    }
}
