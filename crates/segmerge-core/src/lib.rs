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

//! # Core Lattice Primitives
//!
//! Foundational value types and exact integer arithmetic for working with
//! digital straight lines: 2D lattice points and displacement vectors,
//! stateless arithmetic helpers (gcd, floor division, determinant), and a
//! continued-fraction representation of non-negative rationals.
//!
//! All computations are exact. Arithmetic is generic over [`LatticeVariable`]
//! and uses checked operations so that an overflow of the coordinate domain
//! surfaces as a panic with a descriptive message instead of silent
//! wraparound. Callers that need headroom for products like `a * x` should
//! instantiate with a wider primitive (`i128` covers every realistic
//! coordinate range).

use num_traits::{PrimInt, Signed};
use std::fmt::{Debug, Display};

pub mod arith;
pub mod fraction;
pub mod lattice;

/// The integer primitive every lattice computation is generic over.
///
/// Blanket-implemented for all signed primitive integers. The trait only
/// exists to spell the bound once.
pub trait LatticeVariable: PrimInt + Signed + Send + Sync + Debug + Display {}
impl<T> LatticeVariable for T where T: PrimInt + Signed + Send + Sync + Debug + Display {}
