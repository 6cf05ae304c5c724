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

//! # Exact Integer Helpers
//!
//! Stateless arithmetic used throughout the workspace: greatest common
//! divisor, floor division, and the 2D cross product (determinant). These are
//! free functions on purpose; they carry no configuration and no state.

use crate::LatticeVariable;
use crate::lattice::{Point, Vector};

/// Greatest common divisor, always non-negative. `gcd(0, 0) == 0`.
#[inline]
pub fn gcd<T: LatticeVariable>(a: T, b: T) -> T {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Floor division: the largest integer `q` with `q * d <= n`.
///
/// Differs from Rust's truncating `/` for negative operands:
/// `floor_div(-1, 2) == -1` while `-1 / 2 == 0`.
///
/// # Panics
///
/// Panics if `d` is zero.
#[inline]
pub fn floor_div<T: LatticeVariable>(n: T, d: T) -> T {
    assert!(!d.is_zero(), "floor_div: division by zero");
    let q = n / d;
    let r = n % d;
    if !r.is_zero() && (r < T::zero()) != (d < T::zero()) {
        q - T::one()
    } else {
        q
    }
}

/// 2D cross product `u.x * v.y - u.y * v.x`.
///
/// Antisymmetric; zero exactly when `u` and `v` are collinear. The sign tells
/// on which side of `u` the vector `v` lies (positive: counter-clockwise).
#[inline]
pub fn determinant<T: LatticeVariable>(u: Vector<T>, v: Vector<T>) -> T {
    let lhs = u
        .x()
        .checked_mul(&v.y())
        .expect("overflow in determinant (u.x * v.y)");
    let rhs = u
        .y()
        .checked_mul(&v.x())
        .expect("overflow in determinant (u.y * v.x)");
    lhs.checked_sub(&rhs).expect("overflow in determinant")
}

/// The digital-line remainder `a * p.x - b * p.y`.
///
/// A point belongs to the digital line of characteristics `(a, b, mu)`
/// exactly when this value lies in `[mu, mu + b)`.
#[inline]
pub fn remainder<T: LatticeVariable>(a: T, b: T, p: Point<T>) -> T {
    let ax = a
        .checked_mul(&p.x())
        .expect("overflow in remainder (a * x)");
    let by = b
        .checked_mul(&p.y())
        .expect("overflow in remainder (b * y)");
    ax.checked_sub(&by).expect("overflow in remainder")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd(12i64, 18), 6);
        assert_eq!(gcd(18i64, 12), 6);
        assert_eq!(gcd(7i64, 13), 1);
        assert_eq!(gcd(1000i64, 41), 1);
    }

    #[test]
    fn test_gcd_zero_and_negative() {
        assert_eq!(gcd(0i64, 5), 5);
        assert_eq!(gcd(5i64, 0), 5);
        assert_eq!(gcd(0i64, 0), 0);
        assert_eq!(gcd(-12i64, 18), 6);
        assert_eq!(gcd(12i64, -18), 6);
        assert_eq!(gcd(-12i64, -18), 6);
    }

    #[test]
    fn test_floor_div_rounds_toward_negative_infinity() {
        assert_eq!(floor_div(7i64, 2), 3);
        assert_eq!(floor_div(-7i64, 2), -4);
        assert_eq!(floor_div(7i64, -2), -4);
        assert_eq!(floor_div(-7i64, -2), 3);
        assert_eq!(floor_div(-1i64, 2), -1);
        assert_eq!(floor_div(6i64, 3), 2);
        assert_eq!(floor_div(-6i64, 3), -2);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_floor_div_panics_on_zero_divisor() {
        let _ = floor_div(1i64, 0);
    }

    #[test]
    fn test_determinant_sign_convention() {
        let u = Vector::new(1i64, 0);
        let v = Vector::new(0i64, 1);
        assert_eq!(determinant(u, v), 1);
        assert_eq!(determinant(v, u), -1);
    }

    #[test]
    fn test_determinant_antisymmetric() {
        let u = Vector::new(3i64, 7);
        let v = Vector::new(-2i64, 5);
        assert_eq!(determinant(u, v), -determinant(v, u));
    }

    #[test]
    fn test_determinant_zero_iff_collinear() {
        let u = Vector::new(2i64, 3);
        assert_eq!(determinant(u, Vector::new(4, 6)), 0);
        assert_eq!(determinant(u, Vector::new(-2, -3)), 0);
        assert_ne!(determinant(u, Vector::new(4, 7)), 0);
    }

    #[test]
    fn test_remainder() {
        // On the line 2x - 5y = 0.
        assert_eq!(remainder(2i64, 5, Point::new(5, 2)), 0);
        assert_eq!(remainder(2i64, 5, Point::new(3, 1)), 1);
        assert_eq!(remainder(2i64, 5, Point::new(0, 1)), -5);
    }
}
