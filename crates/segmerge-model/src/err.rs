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

use segmerge_core::LatticeVariable;
use segmerge_core::lattice::Point;
use std::fmt::Display;

/// Rejection reasons for digital line characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidLineError<T: LatticeVariable> {
    NonPositiveDenominator { b: T },
    NonCoprimeSlope { a: T, b: T },
}

impl<T: LatticeVariable> Display for InvalidLineError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidLineError::NonPositiveDenominator { b } => {
                write!(f, "Line denominator must be positive, got b = {}", b)
            }
            InvalidLineError::NonCoprimeSlope { a, b } => {
                write!(f, "Line slope {}/{} is not in lowest terms", a, b)
            }
        }
    }
}

impl<T: LatticeVariable> std::error::Error for InvalidLineError<T> {}

/// A leaning point handed to a segment constructor that does not touch the
/// bounding line it was declared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MisplacedLeaningPointError<T: LatticeVariable> {
    point: Point<T>,
    remainder: T,
    expected: T,
}

impl<T: LatticeVariable> MisplacedLeaningPointError<T> {
    #[inline]
    pub fn new(point: Point<T>, remainder: T, expected: T) -> Self {
        Self {
            point,
            remainder,
            expected,
        }
    }

    #[inline]
    pub fn point(&self) -> Point<T> {
        self.point
    }

    #[inline]
    pub fn remainder(&self) -> T {
        self.remainder
    }

    #[inline]
    pub fn expected(&self) -> T {
        self.expected
    }
}

impl<T: LatticeVariable> Display for MisplacedLeaningPointError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Leaning point {} has remainder {} but its bounding line requires {}",
            self.point, self.remainder, self.expected
        )
    }
}

impl<T: LatticeVariable> std::error::Error for MisplacedLeaningPointError<T> {}

/// Rejection reasons for digital segment construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidSegmentError<T: LatticeVariable> {
    NonPositiveDenominator { b: T },
    NonCoprimeSlope { a: T, b: T },
    SlopeOutsideOctant { a: T, b: T },
    MisplacedLeaningPoint(MisplacedLeaningPointError<T>),
    EndpointOutsideLine { point: Point<T>, remainder: T },
    EndpointsOutOfOrder { front: Point<T>, back: Point<T> },
}

impl<T: LatticeVariable> From<MisplacedLeaningPointError<T>> for InvalidSegmentError<T> {
    #[inline]
    fn from(e: MisplacedLeaningPointError<T>) -> Self {
        InvalidSegmentError::MisplacedLeaningPoint(e)
    }
}

impl<T: LatticeVariable> From<InvalidLineError<T>> for InvalidSegmentError<T> {
    #[inline]
    fn from(e: InvalidLineError<T>) -> Self {
        match e {
            InvalidLineError::NonPositiveDenominator { b } => {
                InvalidSegmentError::NonPositiveDenominator { b }
            }
            InvalidLineError::NonCoprimeSlope { a, b } => {
                InvalidSegmentError::NonCoprimeSlope { a, b }
            }
        }
    }
}

impl<T: LatticeVariable> Display for InvalidSegmentError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidSegmentError::NonPositiveDenominator { b } => {
                write!(f, "Segment denominator must be positive, got b = {}", b)
            }
            InvalidSegmentError::NonCoprimeSlope { a, b } => {
                write!(f, "Segment slope {}/{} is not in lowest terms", a, b)
            }
            InvalidSegmentError::SlopeOutsideOctant { a, b } => {
                write!(f, "Segment slope {}/{} is outside the first octant", a, b)
            }
            InvalidSegmentError::MisplacedLeaningPoint(e) => write!(f, "{e}"),
            InvalidSegmentError::EndpointOutsideLine { point, remainder } => {
                write!(
                    f,
                    "Endpoint {} (relative remainder {}) is outside the segment's line",
                    point, remainder
                )
            }
            InvalidSegmentError::EndpointsOutOfOrder { front, back } => {
                write!(
                    f,
                    "Endpoints out of scan order: front {} is right of back {}",
                    front, back
                )
            }
        }
    }
}

impl<T: LatticeVariable> std::error::Error for InvalidSegmentError<T> {}

/// Rejection reasons when extending a segment under recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtendError<T: LatticeVariable> {
    /// The candidate's abscissa is not the successor of the current back.
    NonAdjacentAbscissa { back: Point<T>, point: Point<T> },
    /// The candidate is more than one remainder step outside the line; no
    /// segment of any characteristics contains the extended run.
    StronglyExterior { point: Point<T>, remainder: T },
    /// Accepting the candidate would leave the first octant.
    SlopeOutsideOctant { point: Point<T> },
}

impl<T: LatticeVariable> Display for ExtendError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtendError::NonAdjacentAbscissa { back, point } => {
                write!(
                    f,
                    "Point {} does not follow back point {} in scan order",
                    point, back
                )
            }
            ExtendError::StronglyExterior { point, remainder } => {
                write!(
                    f,
                    "Point {} (relative remainder {}) is strongly exterior",
                    point, remainder
                )
            }
            ExtendError::SlopeOutsideOctant { point } => {
                write!(f, "Extending with {} leaves the first octant", point)
            }
        }
    }
}

impl<T: LatticeVariable> std::error::Error for ExtendError<T> {}

/// Failure of whole-sequence recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecognitionError<T: LatticeVariable> {
    EmptySequence,
    Extend(ExtendError<T>),
}

impl<T: LatticeVariable> From<ExtendError<T>> for RecognitionError<T> {
    #[inline]
    fn from(e: ExtendError<T>) -> Self {
        RecognitionError::Extend(e)
    }
}

impl<T: LatticeVariable> Display for RecognitionError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecognitionError::EmptySequence => {
                write!(f, "Cannot recognize a segment from an empty sequence")
            }
            RecognitionError::Extend(e) => write!(f, "{e}"),
        }
    }
}

impl<T: LatticeVariable> std::error::Error for RecognitionError<T> {}
