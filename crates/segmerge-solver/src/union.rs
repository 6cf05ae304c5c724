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

//! # Union Orchestrator
//!
//! Composes the leaning-point merge engine and the simplest-slope solver
//! into the single entry point [`merge_segments`].

use crate::err::{NotRepresentableError, UnionError};
use crate::merge::{self, MergeAnalysis, SupportFit};
use crate::simplest::simplest_slope_between;
use segmerge_core::LatticeVariable;
use segmerge_core::arith::determinant;
use segmerge_core::lattice::Vector;
use segmerge_model::segment::DigitalSegment;
use tracing::{debug, instrument};

/// Merges two segments into the segment of minimal characteristics covering
/// both, where `s1` precedes `s2` in scan order.
///
/// Connected pairs (facing endpoints 8-adjacent or on the same row) resolve
/// entirely through the leaning-point case analysis; a connected pair whose
/// union is not a digital straight segment yields
/// [`UnionError::NotRepresentable`]. Pairs separated by a gap always have a
/// solution: the simplest slope threading the gap, anchored at one retained
/// upper leaning point (the produced segment then carries no exact lower
/// support, see [`DigitalSegment::from_minimal_slope`]).
#[instrument(level = "trace", skip_all)]
pub fn merge_segments<T: LatticeVariable>(
    s1: &DigitalSegment<T>,
    s2: &DigitalSegment<T>,
) -> Result<DigitalSegment<T>, UnionError<T>> {
    match merge::analyze(s1, s2)? {
        MergeAnalysis::Easy(seg) => Ok(seg),
        MergeAnalysis::Critical {
            connected: true,
            fit: SupportFit::Fitted { a, b, support },
            ..
        } => {
            debug!(%a, %b, "connected union resolved by critical support");
            let seg = DigitalSegment::from_support(
                a,
                b,
                s1.front(),
                s2.back(),
                support.uf,
                support.ul,
                support.lf,
                support.ll,
            )?;
            Ok(seg)
        }
        MergeAnalysis::Critical {
            connected: true,
            fit: SupportFit::Incompatible,
            candidates,
        } => Err(NotRepresentableError::new(candidates).into()),
        MergeAnalysis::Critical {
            connected: false,
            fit,
            candidates,
        } => {
            // Across a gap a covering line always exists: free rows may be
            // skipped. The support candidates (collapsed by the two-line
            // test when it fitted) bound the admissible slope cone.
            let support = match fit {
                SupportFit::Fitted { support, .. } => support,
                SupportFit::Incompatible => candidates,
            };
            let one_up = Vector::new(T::zero(), T::one());
            let vlow = support.ul - (support.lf + one_up);
            let vup = (support.ll + one_up) - support.uf;
            let slope = simplest_slope_between(vlow, vup);
            debug!(a = %slope.y(), b = %slope.x(), "gap union takes simplest slope");

            let anchor = if support.uf == support.ul {
                support.uf
            } else if determinant(slope, support.ul - support.uf) > T::zero() {
                support.ul
            } else {
                support.uf
            };
            let seg = DigitalSegment::from_minimal_slope(
                slope.y(),
                slope.x(),
                s1.front(),
                s2.back(),
                anchor,
            )?;
            Ok(seg)
        }
    }
}
