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

//! # Incremental Segment Recognition
//!
//! Point-by-point recognition of naive digital straight segments in the
//! first octant. Feeding the builder the points of a run in scan order keeps
//! the minimal characteristics current under the classic leaning-point
//! update rules:
//!
//! - a point with remainder inside `[mu, mu + b)` refreshes the trailing
//!   leaning points when it touches a bounding line;
//! - a point one step above the upper line tilts the slope up around the
//!   first upper leaning point;
//! - a point one step below the lower line tilts it down around the first
//!   lower leaning point;
//! - anything further out is not extensible.
//!
//! One point at a time this is the slow path; the merge engine exists to
//! avoid it. It stays the reference answer everything else is checked
//! against.

use crate::err::{ExtendError, RecognitionError};
use crate::segment::DigitalSegment;
use segmerge_core::LatticeVariable;
use segmerge_core::arith::remainder;
use segmerge_core::lattice::Point;

/// Incremental recognizer for first-octant naive segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentBuilder<T: LatticeVariable> {
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

impl<T: LatticeVariable> SegmentBuilder<T> {
    /// Starts recognition from a single point. The one-point segment is
    /// horizontal (`a = 0, b = 1`) and the point is every leaning point.
    pub fn start(p: Point<T>) -> Self {
        Self {
            a: T::zero(),
            b: T::one(),
            mu: -p.y(),
            front: p,
            back: p,
            uf: p,
            ul: p,
            lf: p,
            ll: p,
        }
    }

    /// Resumes recognition from an already recognized segment.
    pub fn from_segment(seg: &DigitalSegment<T>) -> Self {
        Self {
            a: seg.a(),
            b: seg.b(),
            mu: seg.mu(),
            front: seg.front(),
            back: seg.back(),
            uf: seg.uf(),
            ul: seg.ul(),
            lf: seg.lf(),
            ll: seg.ll(),
        }
    }

    /// Recognizes a whole point sequence in scan order.
    pub fn from_points<I>(points: I) -> Result<DigitalSegment<T>, RecognitionError<T>>
    where
        I: IntoIterator<Item = Point<T>>,
    {
        let mut it = points.into_iter();
        let first = it.next().ok_or(RecognitionError::EmptySequence)?;
        let mut builder = Self::start(first);
        for p in it {
            builder.extend(p)?;
        }
        Ok(builder.segment())
    }

    /// Extends the run with the next point in scan order.
    ///
    /// The point must sit in the next column (`p.x == back.x + 1`); the
    /// update rules decide whether the current characteristics survive, tilt,
    /// or fail.
    pub fn extend(&mut self, p: Point<T>) -> Result<(), ExtendError<T>> {
        if p.x() != self.back.x() + T::one() {
            return Err(ExtendError::NonAdjacentAbscissa {
                back: self.back,
                point: p,
            });
        }

        let r = remainder(self.a, self.b, p);
        let upper = self.mu;
        let lower = self.mu + self.b - T::one();

        if r >= upper && r <= lower {
            // Interior: the characteristics stand, only trailing leaning
            // points may move. For b == 1 both lines coincide and both move.
            if r == upper {
                self.ul = p;
            }
            if r == lower {
                self.ll = p;
            }
            self.back = p;
            return Ok(());
        }

        if r == upper - T::one() {
            // Weakly exterior above: tilt up around the first upper leaning
            // point. The old last lower leaning point is the only lower
            // support that survives.
            let v = p - self.uf;
            if v.y() < T::zero() || v.y() > v.x() {
                return Err(ExtendError::SlopeOutsideOctant { point: p });
            }
            self.a = v.y();
            self.b = v.x();
            self.mu = remainder(self.a, self.b, p);
            self.ul = p;
            self.lf = self.ll;
            self.back = p;
            return Ok(());
        }

        if r == lower + T::one() {
            // Weakly exterior below: tilt down around the first lower
            // leaning point.
            let v = p - self.lf;
            if v.y() < T::zero() || v.y() > v.x() {
                return Err(ExtendError::SlopeOutsideOctant { point: p });
            }
            self.a = v.y();
            self.b = v.x();
            self.mu = remainder(self.a, self.b, p) - self.b + T::one();
            self.ll = p;
            self.uf = self.ul;
            self.back = p;
            return Ok(());
        }

        Err(ExtendError::StronglyExterior {
            point: p,
            remainder: r - self.mu,
        })
    }

    /// The segment recognized so far.
    pub fn segment(&self) -> DigitalSegment<T> {
        DigitalSegment::from_parts_unchecked(
            self.a, self.b, self.mu, self.front, self.back, self.uf, self.ul, self.lf, self.ll,
        )
    }
}
