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

//! # Leaning-Point Merge Engine
//!
//! Case analysis for merging two segments `s1` (earlier in scan order) and
//! `s2` (later). The engine never looks at individual run points; the eight
//! leaning points carry all the information:
//!
//! 1. If every leaning point of one segment lies in the other's line, that
//!    line covers the whole union (easy union).
//! 2. Otherwise the side on which the first exterior leaning point falls
//!    selects two critical support candidates per segment.
//! 3. The line through the lower candidates and the line through the upper
//!    candidates are tested against the opposite pair. The surviving line
//!    gives the merged characteristics; if both survive they agree, if
//!    neither does the union is not a segment.
//!
//! Every step is a pure function returning a tagged value so each branch is
//! testable on its own; [`crate::union`] strings them together.

use segmerge_core::LatticeVariable;
use segmerge_core::arith::{determinant, gcd, remainder};
use segmerge_core::lattice::Point;
use segmerge_model::err::InvalidSegmentError;
use segmerge_model::segment::DigitalSegment;
use tracing::trace;

/// Side of the host line on which an exterior leaning point falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExteriorSide {
    /// Relative remainder below zero: the probe is above the upper bounding
    /// line, so the merged slope must increase.
    Above,
    /// Relative remainder at least `b`: the probe is below the lower
    /// bounding line, so the merged slope must decrease.
    Below,
}

/// Outcome of probing one segment's leaning points against the other's line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverScan<T: LatticeVariable> {
    /// All probes are inside; `upper`/`lower` are the probed points that
    /// extend the host's leaning points, or the given defaults.
    Inside { upper: Point<T>, lower: Point<T> },
    /// A probe fell outside, on the given side.
    Exterior(ExteriorSide),
}

/// The four critical support candidates of a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SupportCandidates<T: LatticeVariable> {
    pub uf: Point<T>,
    pub ul: Point<T>,
    pub lf: Point<T>,
    pub ll: Point<T>,
}

/// Result of the two-support-line test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportFit<T: LatticeVariable> {
    /// A supporting line covers all four candidates; `support` has the
    /// non-critical pair collapsed onto the critical point.
    Fitted {
        a: T,
        b: T,
        support: SupportCandidates<T>,
    },
    /// Neither candidate line covers the opposite pair.
    Incompatible,
}

/// Full analysis of a segment pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeAnalysis<T: LatticeVariable> {
    /// One segment's line covers the other; the merged segment is built.
    Easy(DigitalSegment<T>),
    /// Neither line covers; the critical-candidate machinery ran.
    Critical {
        connected: bool,
        candidates: SupportCandidates<T>,
        fit: SupportFit<T>,
    },
}

/// Whether the segments touch: their facing endpoints are 8-neighbours or
/// share an ordinate.
#[inline]
pub fn connected<T: LatticeVariable>(s1: &DigitalSegment<T>, s2: &DigitalSegment<T>) -> bool {
    let v = s2.front() - s1.back();
    v.norm_infinity() <= T::one() || s1.back().y() == s2.front().y()
}

/// Probes four leaning points of one segment against the host's line, in
/// scan order `[Lf, Uf, Ll, Ul]`.
///
/// While probes stay inside, a probe on the upper (resp. lower) bounding
/// line replaces `upper` (resp. `lower`); the last match wins, so passing
/// the host's own trailing (or leading) leaning points as defaults yields
/// the merged leaning points of the easy union. The scan stops at the first
/// exterior probe.
pub fn scan_leaning_points<T: LatticeVariable>(
    host: &DigitalSegment<T>,
    probes: [Point<T>; 4],
    upper_default: Point<T>,
    lower_default: Point<T>,
) -> CoverScan<T> {
    let mut upper = upper_default;
    let mut lower = lower_default;
    for p in probes {
        let r = host.remainder(p) - host.mu();
        if r < T::zero() {
            return CoverScan::Exterior(ExteriorSide::Above);
        }
        if r >= host.b() {
            return CoverScan::Exterior(ExteriorSide::Below);
        }
        // Not exclusive: for b == 1 both bounding lines coincide.
        if r.is_zero() {
            upper = p;
        }
        if r == host.b() - T::one() {
            lower = p;
        }
    }
    CoverScan::Inside { upper, lower }
}

/// Tests the two candidate supporting lines and collapses the non-critical
/// pair when only one survives.
pub fn resolve_support<T: LatticeVariable>(c: SupportCandidates<T>) -> SupportFit<T> {
    // Line through the lower candidates; lower leaning points sit at
    // relative remainder b - 1, so the anchor places Lf there.
    let b_low = c.ll.x() - c.lf.x();
    let a_low = c.ll.y() - c.lf.y();
    let m_low = b_low - T::one() - remainder(a_low, b_low, c.lf);
    let r1 = remainder(a_low, b_low, c.uf) + m_low;
    let r2 = remainder(a_low, b_low, c.ul) + m_low;
    let lower_ok = r1 >= T::zero() && r1 < b_low && r2 >= T::zero() && r2 < b_low;

    // Line through the upper candidates; upper leaning points sit at
    // relative remainder 0.
    let b_up = c.ul.x() - c.uf.x();
    let a_up = c.ul.y() - c.uf.y();
    let m_up = -remainder(a_up, b_up, c.uf);
    let r3 = remainder(a_up, b_up, c.lf) + m_up;
    let r4 = remainder(a_up, b_up, c.ll) + m_up;
    let upper_ok = r3 >= T::zero() && r3 < b_up && r4 >= T::zero() && r4 < b_up;

    match (lower_ok, upper_ok) {
        (true, true) => reduce_fit(a_low, b_low, c),
        (true, false) => {
            // Only the lower pair is critical; one upper candidate survives.
            let mut c = c;
            if determinant(c.ul - c.uf, c.ll - c.lf) > T::zero() {
                c.ul = c.uf;
            } else {
                c.uf = c.ul;
            }
            reduce_fit(a_low, b_low, c)
        }
        (false, true) => {
            let mut c = c;
            if determinant(c.ul - c.uf, c.ll - c.lf) > T::zero() {
                c.ll = c.lf;
            } else {
                c.lf = c.ll;
            }
            reduce_fit(a_up, b_up, c)
        }
        (false, false) => SupportFit::Incompatible,
    }
}

#[inline]
fn reduce_fit<T: LatticeVariable>(a: T, b: T, support: SupportCandidates<T>) -> SupportFit<T> {
    let g = gcd(a, b);
    SupportFit::Fitted {
        a: a / g,
        b: b / g,
        support,
    }
}

/// Runs the full case analysis on a segment pair.
pub fn analyze<T: LatticeVariable>(
    s1: &DigitalSegment<T>,
    s2: &DigitalSegment<T>,
) -> Result<MergeAnalysis<T>, InvalidSegmentError<T>> {
    let connected = connected(s1, s2);

    // Do the leaning points of s2 fit in the line of s1?
    let scan_second = scan_leaning_points(
        s1,
        [s2.lf(), s2.uf(), s2.ll(), s2.ul()],
        s1.ul(),
        s1.ll(),
    );
    let side_first = match scan_second {
        CoverScan::Inside { upper, lower } => {
            trace!(a = %s1.a(), b = %s1.b(), "easy union: first segment's line covers");
            let seg = DigitalSegment::from_support(
                s1.a(),
                s1.b(),
                s1.front(),
                s2.back(),
                s1.uf(),
                upper,
                s1.lf(),
                lower,
            )?;
            return Ok(MergeAnalysis::Easy(seg));
        }
        CoverScan::Exterior(side) => side,
    };

    // The other way round: do the leaning points of s1 fit in s2's line?
    let scan_first = scan_leaning_points(
        s2,
        [s1.ul(), s1.ll(), s1.uf(), s1.lf()],
        s2.uf(),
        s2.lf(),
    );
    let side_second = match scan_first {
        CoverScan::Inside { upper, lower } => {
            trace!(a = %s2.a(), b = %s2.b(), "easy union: second segment's line covers");
            let seg = DigitalSegment::from_support(
                s2.a(),
                s2.b(),
                s1.front(),
                s2.back(),
                upper,
                s2.ul(),
                lower,
                s2.ll(),
            )?;
            return Ok(MergeAnalysis::Easy(seg));
        }
        CoverScan::Exterior(side) => side,
    };

    // Exterior on both scans: pick the critical support candidates. An
    // exterior point below the line means the merged slope decreases, so the
    // first segment contributes its last upper and first lower leaning
    // points, and symmetrically for the other cases.
    let (uf, lf) = match side_first {
        ExteriorSide::Below => (s1.ul(), s1.lf()),
        ExteriorSide::Above => (s1.uf(), s1.ll()),
    };
    let (ul, ll) = match side_second {
        ExteriorSide::Below => (s2.uf(), s2.ll()),
        ExteriorSide::Above => (s2.ul(), s2.lf()),
    };
    let candidates = SupportCandidates { uf, ul, lf, ll };
    let fit = resolve_support(candidates);
    trace!(?side_first, ?side_second, connected, "critical support analysis");

    Ok(MergeAnalysis::Critical {
        connected,
        candidates,
        fit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use segmerge_model::line::DigitalLine;
    use segmerge_model::recognizer::SegmentBuilder;

    fn p(x: i64, y: i64) -> Point<i64> {
        Point::new(x, y)
    }

    // The 2/5 staircase from the origin: U = (0,0),(5,2), L = (2,0),(7,2).
    fn staircase(x_last: i64) -> DigitalSegment<i64> {
        let line = DigitalLine::new(2i64, 5, 0).unwrap();
        SegmentBuilder::from_points(line.points(0, x_last)).unwrap()
    }

    #[test]
    fn test_connected_touching_and_gapped() {
        let line = DigitalLine::new(1i64, 3, 0).unwrap();
        let s1 = SegmentBuilder::from_points(line.points(0, 5)).unwrap();
        let s2 = SegmentBuilder::from_points(line.points(6, 10)).unwrap();
        let s3 = SegmentBuilder::from_points(line.points(9, 14)).unwrap();
        assert!(connected(&s1, &s2));
        assert!(!connected(&s1, &s3));
    }

    #[test]
    fn test_connected_by_shared_ordinate_despite_gap() {
        // Flat segments on the same row are connected no matter the gap.
        let line = DigitalLine::new(0i64, 1, -4).unwrap();
        let s1 = SegmentBuilder::from_points(line.points(0, 3)).unwrap();
        let s2 = SegmentBuilder::from_points(line.points(10, 13)).unwrap();
        assert!(connected(&s1, &s2));
    }

    #[test]
    fn test_scan_inside_updates_trailing_support() {
        let s1 = staircase(8);
        let line = DigitalLine::new(2i64, 5, 0).unwrap();
        let s2 = SegmentBuilder::from_points(line.points(9, 17)).unwrap();
        let scan = scan_leaning_points(
            &s1,
            [s2.lf(), s2.uf(), s2.ll(), s2.ul()],
            s1.ul(),
            s1.ll(),
        );
        match scan {
            CoverScan::Inside { upper, lower } => {
                // The later segment's leaning points extend the support.
                assert_eq!(upper, s2.ul());
                assert_eq!(lower, s2.ll());
            }
            other => panic!("expected Inside, got {:?}", other),
        }
    }

    #[test]
    fn test_scan_reports_exterior_side() {
        let s1 = staircase(8);
        // A point two rows above the line is exterior above.
        let scan = scan_leaning_points(&s1, [p(3, 3), p(3, 3), p(3, 3), p(3, 3)], s1.ul(), s1.ll());
        assert_eq!(scan, CoverScan::Exterior(ExteriorSide::Above));
        // A point below the lower line is exterior below.
        let scan = scan_leaning_points(&s1, [p(3, 0), p(3, 3), p(3, 3), p(3, 3)], s1.ul(), s1.ll());
        assert_eq!(scan, CoverScan::Exterior(ExteriorSide::Below));
    }

    #[test]
    fn test_easy_union_keeps_first_characteristics() {
        let s1 = staircase(8);
        let line = DigitalLine::new(2i64, 5, 0).unwrap();
        let s2 = SegmentBuilder::from_points(line.points(9, 17)).unwrap();
        match analyze(&s1, &s2).unwrap() {
            MergeAnalysis::Easy(seg) => {
                assert_eq!((seg.a(), seg.b(), seg.mu()), (2, 5, 0));
                assert_eq!(seg.front(), p(0, 0));
                assert_eq!(seg.back(), p(17, 6));
                assert_eq!(seg.uf(), s1.uf());
                assert_eq!(seg.lf(), s1.lf());
                assert_eq!(seg.ul(), s2.ul());
                assert_eq!(seg.ll(), s2.ll());
            }
            other => panic!("expected easy union, got {:?}", other),
        }
    }

    #[test]
    fn test_easy_union_symmetric_keeps_second_characteristics() {
        // A short flat first segment inside the line of a long second one.
        let line = DigitalLine::new(1i64, 6, 0).unwrap();
        let s1 = SegmentBuilder::from_points(line.points(0, 3)).unwrap();
        let s2 = SegmentBuilder::from_points(line.points(4, 17)).unwrap();
        assert_eq!((s1.a(), s1.b()), (0, 1), "short window flattens");
        match analyze(&s1, &s2).unwrap() {
            MergeAnalysis::Easy(seg) => {
                assert_eq!((seg.a(), seg.b()), (s2.a(), s2.b()));
                assert_eq!(seg.front(), p(0, 0));
                assert_eq!(seg.back(), s2.back());
            }
            other => panic!("expected easy union, got {:?}", other),
        }
    }

    #[test]
    fn test_critical_candidates_and_two_line_fit() {
        // Hand-made pair: the 2/5 staircase up to (9,3), then a 1/2 run.
        // The merged support is the (3,8) line through (5,2)/(13,5) above
        // and (2,0)/(10,3) below.
        let s1 = DigitalSegment::from_support(
            2i64,
            5,
            p(0, 0),
            p(9, 3),
            p(0, 0),
            p(5, 2),
            p(2, 0),
            p(7, 2),
        )
        .unwrap();
        let s2 = DigitalSegment::from_support(
            1i64,
            2,
            p(9, 3),
            p(14, 5),
            p(11, 4),
            p(13, 5),
            p(10, 3),
            p(12, 4),
        )
        .unwrap();
        match analyze(&s1, &s2).unwrap() {
            MergeAnalysis::Critical {
                connected,
                candidates,
                fit,
            } => {
                assert!(connected);
                assert_eq!(candidates.uf, p(5, 2));
                assert_eq!(candidates.ul, p(13, 5));
                assert_eq!(candidates.lf, p(2, 0));
                assert_eq!(candidates.ll, p(10, 3));
                match fit {
                    SupportFit::Fitted { a, b, support } => {
                        assert_eq!((a, b), (3, 8));
                        assert_eq!(support, candidates);
                    }
                    SupportFit::Incompatible => panic!("expected a fit"),
                }
            }
            other => panic!("expected critical analysis, got {:?}", other),
        }
    }

    #[test]
    fn test_incompatible_support_of_diagonal_then_flat() {
        // Five diagonal steps followed by five flat ones bend too sharply.
        let s1 = SegmentBuilder::from_points((0..5).map(|i| p(i, i))).unwrap();
        let s2 = SegmentBuilder::from_points((5..10).map(|i| p(i, 4))).unwrap();
        match analyze(&s1, &s2).unwrap() {
            MergeAnalysis::Critical { connected, fit, .. } => {
                assert!(connected);
                assert_eq!(fit, SupportFit::Incompatible);
            }
            other => panic!("expected critical analysis, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_support_collapses_upper_pair_when_only_lower_fits() {
        // The lower line (slope 2/6) covers both upper candidates, but the
        // upper line (slope 1/2) loses Ll. The upper pair must collapse onto
        // a single point picked by the determinant sign; here it is negative,
        // so the later candidate survives.
        let c = SupportCandidates {
            uf: p(0, 0),
            ul: p(2, 1),
            lf: p(1, 0),
            ll: p(7, 2),
        };
        assert!(determinant(c.ul - c.uf, c.ll - c.lf) < 0);
        match resolve_support(c) {
            SupportFit::Fitted { a, b, support } => {
                assert_eq!((a, b), (1, 3));
                assert_eq!(support.uf, p(2, 1));
                assert_eq!(support.ul, p(2, 1));
                assert_eq!(support.lf, c.lf);
                assert_eq!(support.ll, c.ll);
            }
            SupportFit::Incompatible => panic!("expected a fit"),
        }
    }

    #[test]
    fn test_resolve_support_collapses_lower_pair_when_only_upper_fits() {
        // Mirror case: the upper line (slope 2/7) covers both lower
        // candidates while the lower line rejects Uf. Positive determinant,
        // so the earlier lower candidate survives.
        let c = SupportCandidates {
            uf: p(0, 0),
            ul: p(7, 2),
            lf: p(3, 0),
            ll: p(6, 1),
        };
        assert!(determinant(c.ul - c.uf, c.ll - c.lf) > 0);
        match resolve_support(c) {
            SupportFit::Fitted { a, b, support } => {
                assert_eq!((a, b), (2, 7));
                assert_eq!(support.uf, c.uf);
                assert_eq!(support.ul, c.ul);
                assert_eq!(support.lf, p(3, 0));
                assert_eq!(support.ll, p(3, 0));
            }
            SupportFit::Incompatible => panic!("expected a fit"),
        }
    }

    #[test]
    fn test_resolve_support_reduces_slope() {
        // Candidates two periods apart on the 1/2 line: the raw spans are
        // (4,2) and must come out as the reduced slope 1/2.
        let c = SupportCandidates {
            uf: p(0, 0),
            ul: p(4, 2),
            lf: p(1, 0),
            ll: p(5, 2),
        };
        match resolve_support(c) {
            SupportFit::Fitted { a, b, support } => {
                assert_eq!((a, b), (1, 2));
                assert_eq!(support, c);
            }
            SupportFit::Incompatible => panic!("expected a fit"),
        }
    }
}
