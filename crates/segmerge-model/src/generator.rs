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

//! # Segment Pair Generation
//!
//! Seeded random construction of segment pairs for drivers, benchmarks and
//! property tests. Each pair consists of two subsegments of one random
//! digital straight line: a random coprime slope `a/b`, a random intercept,
//! and two column windows that either touch (adjacent pairs, the connected
//! merge case) or leave a gap (the disconnected case).

use crate::line::DigitalLine;
use crate::recognizer::SegmentBuilder;
use crate::segment::DigitalSegment;
use num_traits::NumCast;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use segmerge_core::LatticeVariable;
use segmerge_core::arith::gcd;
use segmerge_core::lattice::Point;
use std::marker::PhantomData;

/// How the second window relates to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapPolicy {
    /// The second window starts in the column right after the first: the
    /// pair is connected.
    Adjacent,
    /// The second window skips at least one column; up to `max_extra`
    /// further columns are skipped at random.
    Separated { max_extra: i64 },
}

/// Configuration for [`PairGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairGenConfig {
    /// Slope denominators are sampled from `[1, denominator_bound]`.
    pub denominator_bound: i64,
    /// Each window spans between `length_bound` and `2 * length_bound`
    /// columns.
    pub length_bound: i64,
    pub gap: GapPolicy,
    pub seed: u64,
}

impl Default for PairGenConfig {
    fn default() -> Self {
        Self {
            denominator_bound: 300,
            length_bound: 40,
            gap: GapPolicy::Adjacent,
            seed: 42,
        }
    }
}

/// One generated instance: the common line, the two point runs and their
/// recognized segments.
#[derive(Debug, Clone)]
pub struct GeneratedPair<T: LatticeVariable> {
    pub line: DigitalLine<T>,
    pub first_points: Vec<Point<T>>,
    pub second_points: Vec<Point<T>>,
    pub first: DigitalSegment<T>,
    pub second: DigitalSegment<T>,
}

impl<T: LatticeVariable> GeneratedPair<T> {
    /// Whether the two windows touch.
    #[inline]
    pub fn is_adjacent(&self) -> bool {
        self.second.front().x() == self.first.back().x() + T::one()
    }
}

/// Seeded generator of segment pairs on a common random line.
#[derive(Debug, Clone)]
pub struct PairGenerator<T: LatticeVariable + NumCast> {
    config: PairGenConfig,
    rng: SmallRng,
    length_dist: Uniform<i64>,
    _phantom: PhantomData<T>,
}

impl<T: LatticeVariable + NumCast> PairGenerator<T> {
    /// Creates a generator from a configuration.
    ///
    /// # Panics
    ///
    /// Panics if `denominator_bound < 1` or `length_bound < 1`.
    pub fn new(config: PairGenConfig) -> Self {
        assert!(
            config.denominator_bound >= 1,
            "PairGenerator: denominator_bound must be >= 1"
        );
        assert!(
            config.length_bound >= 1,
            "PairGenerator: length_bound must be >= 1"
        );
        let length_dist = Uniform::new(0, config.length_bound)
            .expect("PairGenerator: degenerate length distribution");
        Self {
            config,
            rng: SmallRng::seed_from_u64(config.seed),
            length_dist,
            _phantom: PhantomData,
        }
    }

    #[inline]
    pub fn config(&self) -> &PairGenConfig {
        &self.config
    }

    /// Draws the next pair.
    pub fn next_pair(&mut self) -> GeneratedPair<T> {
        let modb = self.config.denominator_bound;
        let modx = self.config.length_bound;

        let b = self.rng.random_range(1..=modb);
        let mut a = self.rng.random_range(1..=b);
        while gcd(a, b) != 1 {
            a = self.rng.random_range(1..=b);
        }
        let mu = self.rng.random_range(0..2 * modb);

        let x1 = self.rng.random_range(0..modx);
        let x2 = x1 + modx + self.length_dist.sample(&mut self.rng);
        let x3 = match self.config.gap {
            GapPolicy::Adjacent => x2 + 1,
            GapPolicy::Separated { max_extra } => x2 + 2 + self.rng.random_range(0..=max_extra),
        };
        let x4 = x3 + modx;

        let line = DigitalLine::new(Self::to_t(a), Self::to_t(b), Self::to_t(mu))
            .expect("sampled characteristics are canonical");

        let first_points: Vec<Point<T>> =
            line.points(Self::to_t(x1), Self::to_t(x2)).collect();
        let second_points: Vec<Point<T>> =
            line.points(Self::to_t(x3), Self::to_t(x4)).collect();

        let first = SegmentBuilder::from_points(first_points.iter().copied())
            .expect("points of a digital line form a segment");
        let second = SegmentBuilder::from_points(second_points.iter().copied())
            .expect("points of a digital line form a segment");

        GeneratedPair {
            line,
            first_points,
            second_points,
            first,
            second,
        }
    }

    #[inline]
    fn to_t(v: i64) -> T {
        NumCast::from(v).expect("lattice variable cannot hold generator value")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_pairs_touch() {
        let mut g: PairGenerator<i64> = PairGenerator::new(PairGenConfig {
            denominator_bound: 50,
            length_bound: 10,
            gap: GapPolicy::Adjacent,
            seed: 7,
        });
        for _ in 0..50 {
            let pair = g.next_pair();
            assert!(pair.is_adjacent());
            assert_eq!(
                pair.second.front().x(),
                pair.first.back().x() + 1,
                "windows must touch"
            );
        }
    }

    #[test]
    fn test_separated_pairs_leave_a_gap() {
        let mut g: PairGenerator<i64> = PairGenerator::new(PairGenConfig {
            denominator_bound: 50,
            length_bound: 10,
            gap: GapPolicy::Separated { max_extra: 8 },
            seed: 7,
        });
        for _ in 0..50 {
            let pair = g.next_pair();
            let gap = pair.second.front().x() - pair.first.back().x();
            assert!(gap >= 2, "expected a gap, got {}", gap);
        }
    }

    #[test]
    fn test_all_points_lie_on_the_common_line() {
        let mut g: PairGenerator<i64> = PairGenerator::new(PairGenConfig::default());
        for _ in 0..20 {
            let pair = g.next_pair();
            for p in pair.first_points.iter().chain(&pair.second_points) {
                assert!(pair.line.contains(*p));
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let cfg = PairGenConfig {
            seed: 123,
            ..PairGenConfig::default()
        };
        let mut g1: PairGenerator<i64> = PairGenerator::new(cfg);
        let mut g2: PairGenerator<i64> = PairGenerator::new(cfg);
        for _ in 0..10 {
            let p1 = g1.next_pair();
            let p2 = g2.next_pair();
            assert_eq!(p1.first, p2.first);
            assert_eq!(p1.second, p2.second);
        }
    }

    #[test]
    fn test_segment_slopes_stay_in_octant() {
        let mut g: PairGenerator<i64> = PairGenerator::new(PairGenConfig {
            denominator_bound: 20,
            length_bound: 5,
            gap: GapPolicy::Adjacent,
            seed: 99,
        });
        for _ in 0..100 {
            let pair = g.next_pair();
            for s in [&pair.first, &pair.second] {
                assert!(s.b() > 0);
                assert!(s.a() >= 0 && s.a() <= s.b());
            }
        }
    }
}
