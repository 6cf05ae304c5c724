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

//! # Digital Segment Model (`segmerge-model`)
//!
//! Data model for naive digital straight segments in the first octant,
//! built on the lattice primitives of `segmerge-core`.
//!
//! ## Key Data Structures
//!
//! - **`DigitalLine<T>`**: an infinite digital straight line of
//!   characteristics `(a, b, mu)`; the set of lattice points whose remainder
//!   `a*x - b*y` lies in `[mu, mu + b)`. Knows how to enumerate its points
//!   column by column.
//!
//! - **`DigitalSegment<T>`**: an immutable run of such a line between two
//!   endpoints, carrying its minimal characteristics and the four leaning
//!   points (first/last upper, first/last lower) that pin those
//!   characteristics down.
//!
//! - **`SegmentBuilder<T>`**: incremental point-by-point recognition. Feeds
//!   on a stream of 8-connected points of increasing abscissa and maintains
//!   the minimal characteristics under the classic leaning-point update
//!   rules. This is the reference answer every merge result is compared
//!   against.
//!
//! - **`PairGenerator<T>`**: seeded random construction of adjacent (or
//!   gapped) segment pairs sampled from a common random digital line, for
//!   drivers, benchmarks and property tests.
//!
//! Malformed inputs (zero denominators, non-coprime slopes, points off their
//! bounding lines) are rejected at construction with dedicated error types;
//! nothing downstream ever has to re-validate a `DigitalSegment`.

pub mod err;
pub mod generator;
pub mod line;
pub mod recognizer;
pub mod segment;

pub mod prelude {
    pub use crate::err::{ExtendError, InvalidLineError, InvalidSegmentError, RecognitionError};
    pub use crate::generator::{GapPolicy, GeneratedPair, PairGenConfig, PairGenerator};
    pub use crate::line::DigitalLine;
    pub use crate::recognizer::SegmentBuilder;
    pub use crate::segment::DigitalSegment;
}
