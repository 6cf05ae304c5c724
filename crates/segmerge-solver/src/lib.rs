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

//! # Digital Segment Union (`segmerge-solver`)
//!
//! Computes the digital straight segment of minimal arithmetic complexity
//! covering the union of two adjacent segments, in (near) constant time,
//! without re-scanning their points.
//!
//! The computation has three layers:
//!
//! - [`merge`]: the leaning-point case analysis. Decides whether one
//!   segment's line already covers the other (easy union), and otherwise
//!   narrows the eight leaning points down to four critical support
//!   candidates and tests the two lines they span.
//! - [`simplest`]: when the segments do not touch, the admissible slopes
//!   form an interval and the result takes the slope of smallest
//!   denominator inside it, found by walking two continued-fraction
//!   expansions in lock-step through the Stern-Brocot tree.
//! - [`union`]: the entry point composing the two.
//!
//! Everything here is purely functional over immutable segments; a failed
//! union is an arithmetic fact reported as [`err::UnionError`], never a
//! panic.

pub mod err;
pub mod merge;
pub mod simplest;
pub mod union;

pub use err::{NotRepresentableError, UnionError};
pub use union::merge_segments;
