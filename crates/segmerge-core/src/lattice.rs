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

//! # Lattice Points and Vectors
//!
//! Typed 2D integer coordinates. A [`Point`] is a position on the lattice, a
//! [`Vector`] is a displacement between positions. Keeping the two apart
//! prevents the usual slip of adding two positions; subtraction of points
//! yields a vector, and a vector can be added to or subtracted from a point.
//!
//! All operator impls use checked arithmetic and panic with a descriptive
//! message on overflow.

use num_traits::{PrimInt, Signed};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A position on the 2D integer lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point<T: PrimInt + Signed> {
    x: T,
    y: T,
}

/// A displacement between two lattice positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector<T: PrimInt + Signed> {
    x: T,
    y: T,
}

impl<T: PrimInt + Signed> Point<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    #[inline]
    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    #[inline]
    pub const fn x(self) -> T {
        self.x
    }

    #[inline]
    pub const fn y(self) -> T {
        self.y
    }
}

impl<T: PrimInt + Signed> Vector<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    #[inline]
    pub const fn x(self) -> T {
        self.x
    }

    #[inline]
    pub const fn y(self) -> T {
        self.y
    }

    /// The Chebyshev norm `max(|x|, |y|)`.
    #[inline]
    pub fn norm_infinity(self) -> T {
        self.x.abs().max(self.y.abs())
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl<T: PrimInt + Signed> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Point::new(x, y)
    }
}

impl<T: PrimInt + Signed> From<(T, T)> for Vector<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Vector::new(x, y)
    }
}

impl<T: PrimInt + Signed + fmt::Display> fmt::Display for Point<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: PrimInt + Signed + fmt::Display> fmt::Display for Vector<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl<T: PrimInt + Signed> Sub for Point<T> {
    type Output = Vector<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Vector::new(
            self.x
                .checked_sub(&rhs.x)
                .expect("overflow in Point - Point (x)"),
            self.y
                .checked_sub(&rhs.y)
                .expect("overflow in Point - Point (y)"),
        )
    }
}

impl<T: PrimInt + Signed> Add<Vector<T>> for Point<T> {
    type Output = Point<T>;

    #[inline]
    fn add(self, rhs: Vector<T>) -> Self::Output {
        Point::new(
            self.x
                .checked_add(&rhs.x)
                .expect("overflow in Point + Vector (x)"),
            self.y
                .checked_add(&rhs.y)
                .expect("overflow in Point + Vector (y)"),
        )
    }
}

impl<T: PrimInt + Signed> Sub<Vector<T>> for Point<T> {
    type Output = Point<T>;

    #[inline]
    fn sub(self, rhs: Vector<T>) -> Self::Output {
        Point::new(
            self.x
                .checked_sub(&rhs.x)
                .expect("overflow in Point - Vector (x)"),
            self.y
                .checked_sub(&rhs.y)
                .expect("overflow in Point - Vector (y)"),
        )
    }
}

impl<T: PrimInt + Signed> AddAssign<Vector<T>> for Point<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Vector<T>) {
        *self = *self + rhs;
    }
}

impl<T: PrimInt + Signed> SubAssign<Vector<T>> for Point<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector<T>) {
        *self = *self - rhs;
    }
}

impl<T: PrimInt + Signed> Add for Vector<T> {
    type Output = Vector<T>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Vector::new(
            self.x
                .checked_add(&rhs.x)
                .expect("overflow in Vector + Vector (x)"),
            self.y
                .checked_add(&rhs.y)
                .expect("overflow in Vector + Vector (y)"),
        )
    }
}

impl<T: PrimInt + Signed> Sub for Vector<T> {
    type Output = Vector<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Vector::new(
            self.x
                .checked_sub(&rhs.x)
                .expect("overflow in Vector - Vector (x)"),
            self.y
                .checked_sub(&rhs.y)
                .expect("overflow in Vector - Vector (y)"),
        )
    }
}

impl<T: PrimInt + Signed> Neg for Vector<T> {
    type Output = Vector<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        Vector::new(
            T::zero()
                .checked_sub(&self.x)
                .expect("overflow in -Vector (x)"),
            T::zero()
                .checked_sub(&self.y)
                .expect("overflow in -Vector (y)"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_accessors() {
        let p = Point::new(3i64, -2);
        assert_eq!(p.x(), 3);
        assert_eq!(p.y(), -2);
    }

    #[test]
    fn test_point_sub_point_is_vector() {
        let a = Point::new(5i64, 7);
        let b = Point::new(2i64, 3);
        assert_eq!(a - b, Vector::new(3, 4));
        assert_eq!(b - a, Vector::new(-3, -4));
    }

    #[test]
    fn test_point_plus_vector() {
        let p = Point::new(1i64, 1);
        let v = Vector::new(4i64, -1);
        assert_eq!(p + v, Point::new(5, 0));
        assert_eq!((p + v) - v, p);
    }

    #[test]
    fn test_point_add_assign() {
        let mut p = Point::new(0i64, 0);
        p += Vector::new(2, 5);
        assert_eq!(p, Point::new(2, 5));
        p -= Vector::new(2, 5);
        assert_eq!(p, Point::origin());
    }

    #[test]
    fn test_vector_ops() {
        let u = Vector::new(1i64, 2);
        let v = Vector::new(3i64, -4);
        assert_eq!(u + v, Vector::new(4, -2));
        assert_eq!(u - v, Vector::new(-2, 6));
        assert_eq!(-v, Vector::new(-3, 4));
    }

    #[test]
    fn test_norm_infinity() {
        assert_eq!(Vector::new(-3i64, 2).norm_infinity(), 3);
        assert_eq!(Vector::new(1i64, -7).norm_infinity(), 7);
        assert_eq!(Vector::<i64>::zero().norm_infinity(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Point::new(3i64, 4)), "(3, 4)");
        assert_eq!(format!("{}", Vector::new(-1i64, 0)), "[-1, 0]");
    }

    #[test]
    #[should_panic(expected = "overflow in Point + Vector (x)")]
    fn test_add_panics_on_overflow() {
        let p = Point::new(i64::MAX, 0);
        let _ = p + Vector::new(1, 0);
    }

    #[test]
    fn test_from_tuple() {
        let p: Point<i64> = (2, 3).into();
        let v: Vector<i64> = (4, 5).into();
        assert_eq!(p, Point::new(2, 3));
        assert_eq!(v, Vector::new(4, 5));
    }
}
