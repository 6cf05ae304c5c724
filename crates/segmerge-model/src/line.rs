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

//! # Digital Straight Lines
//!
//! A naive digital straight line of characteristics `(a, b, mu)` is the set
//! of lattice points `P` with `mu <= a*P.x - b*P.y < mu + b`. For slopes in
//! the first octant (`0 <= a <= b`) the line has exactly one point per
//! column, which makes it enumerable by abscissa.

use crate::err::InvalidLineError;
use segmerge_core::LatticeVariable;
use segmerge_core::arith::{floor_div, gcd, remainder};
use segmerge_core::lattice::Point;
use std::fmt;
use std::iter::FusedIterator;

/// An infinite digital straight line `mu <= a*x - b*y < mu + b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitalLine<T: LatticeVariable> {
    a: T,
    b: T,
    mu: T,
}

impl<T: LatticeVariable> DigitalLine<T> {
    /// Creates a line from its characteristics.
    ///
    /// Requires `b > 0` and `gcd(a, b) == 1` so that the characteristics are
    /// canonical.
    pub fn new(a: T, b: T, mu: T) -> Result<Self, InvalidLineError<T>> {
        if b <= T::zero() {
            return Err(InvalidLineError::NonPositiveDenominator { b });
        }
        if gcd(a, b) != T::one() {
            return Err(InvalidLineError::NonCoprimeSlope { a, b });
        }
        Ok(Self { a, b, mu })
    }

    pub(crate) fn new_unchecked(a: T, b: T, mu: T) -> Self {
        debug_assert!(b > T::zero());
        debug_assert!(gcd(a, b) == T::one());
        Self { a, b, mu }
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

    /// The remainder `a*x - b*y` of a point with respect to this line's
    /// slope.
    #[inline]
    pub fn remainder(&self, p: Point<T>) -> T {
        remainder(self.a, self.b, p)
    }

    /// Whether the point satisfies the line's double inequality.
    #[inline]
    pub fn contains(&self, p: Point<T>) -> bool {
        let r = self
            .remainder(p)
            .checked_sub(&self.mu)
            .expect("overflow in DigitalLine::contains");
        r >= T::zero() && r < self.b
    }

    /// The unique ordinate of the line's point in column `x`.
    #[inline]
    pub fn y_at(&self, x: T) -> T {
        let ax = self
            .a
            .checked_mul(&x)
            .expect("overflow in DigitalLine::y_at");
        floor_div(
            ax.checked_sub(&self.mu)
                .expect("overflow in DigitalLine::y_at"),
            self.b,
        )
    }

    /// The line's point in column `x`.
    #[inline]
    pub fn point_at(&self, x: T) -> Point<T> {
        Point::new(x, self.y_at(x))
    }

    /// Iterates the line's points for `x` in `[x_first, x_last]`.
    #[inline]
    pub fn points(&self, x_first: T, x_last: T) -> LinePoints<T> {
        LinePoints {
            line: *self,
            x: x_first,
            x_last,
        }
    }
}

impl<T: LatticeVariable> fmt::Display for DigitalLine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DSL(a={}, b={}, mu={})", self.a, self.b, self.mu)
    }
}

/// Iterator over the points of a [`DigitalLine`] for an inclusive abscissa
/// range.
#[derive(Debug, Clone)]
pub struct LinePoints<T: LatticeVariable> {
    line: DigitalLine<T>,
    x: T,
    x_last: T,
}

impl<T: LatticeVariable> Iterator for LinePoints<T> {
    type Item = Point<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.x > self.x_last {
            return None;
        }
        let p = self.line.point_at(self.x);
        self.x = self.x + T::one();
        Some(p)
    }
}

impl<T: LatticeVariable> FusedIterator for LinePoints<T> {}
