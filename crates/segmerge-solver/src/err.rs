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

use crate::merge::SupportCandidates;
use segmerge_core::LatticeVariable;
use segmerge_model::err::InvalidSegmentError;
use std::fmt::Display;

/// The union of two connected segments is not a digital straight segment:
/// neither the line through the lower support candidates nor the one through
/// the upper candidates covers all four.
///
/// This is an arithmetic fact about the inputs, not a transient condition;
/// retrying cannot succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotRepresentableError<T: LatticeVariable> {
    candidates: SupportCandidates<T>,
}

impl<T: LatticeVariable> NotRepresentableError<T> {
    #[inline]
    pub fn new(candidates: SupportCandidates<T>) -> Self {
        Self { candidates }
    }

    /// The four critical support candidates that failed both line tests.
    #[inline]
    pub fn candidates(&self) -> SupportCandidates<T> {
        self.candidates
    }
}

impl<T: LatticeVariable> Display for NotRepresentableError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Union is not a digital straight segment: no supporting line covers Uf={}, Ul={}, Lf={}, Ll={}",
            self.candidates.uf, self.candidates.ul, self.candidates.lf, self.candidates.ll
        )
    }
}

impl<T: LatticeVariable> std::error::Error for NotRepresentableError<T> {}

/// Failure of a segment union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnionError<T: LatticeVariable> {
    /// Connected inputs whose union is provably not a single segment.
    NotRepresentable(NotRepresentableError<T>),
    /// The computed characteristics do not assemble into a valid segment.
    Construction(InvalidSegmentError<T>),
}

impl<T: LatticeVariable> From<NotRepresentableError<T>> for UnionError<T> {
    #[inline]
    fn from(e: NotRepresentableError<T>) -> Self {
        UnionError::NotRepresentable(e)
    }
}

impl<T: LatticeVariable> From<InvalidSegmentError<T>> for UnionError<T> {
    #[inline]
    fn from(e: InvalidSegmentError<T>) -> Self {
        UnionError::Construction(e)
    }
}

impl<T: LatticeVariable> Display for UnionError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnionError::NotRepresentable(e) => write!(f, "{e}"),
            UnionError::Construction(e) => write!(f, "{e}"),
        }
    }
}

impl<T: LatticeVariable> std::error::Error for UnionError<T> {}
