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

use rayon::prelude::*;
use segmerge_core::lattice::Point;
use segmerge_model::generator::{GapPolicy, PairGenConfig, PairGenerator};
use segmerge_model::recognizer::SegmentBuilder;
use segmerge_model::segment::DigitalSegment;
use segmerge_solver::merge_segments;
use serde::Serialize;
use std::{fs::File, io::BufWriter, time::Duration, time::Instant};
use tracing::{info, warn};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct ScaleResult {
    denominator_bound: i64,
    length_bound: i64,
    seed: u64,
    trials: usize,
    mismatches: usize,
    failures: usize,
    merge_ns_per_pair: f64,
    recognition_ns_per_pair: f64,
}

#[derive(Debug, Clone, Serialize)]
struct Report {
    description: String,
    scales: Vec<ScaleResult>,
    sweep_trials: usize,
    sweep_mismatches: usize,
}

/// Reference result: extend the first segment with the second run, one
/// point at a time.
fn recognize_union(
    first: &DigitalSegment<i64>,
    second_points: &[Point<i64>],
) -> Option<DigitalSegment<i64>> {
    let mut builder = SegmentBuilder::from_segment(first);
    for &p in second_points {
        builder.extend(p).ok()?;
    }
    Some(builder.segment())
}

fn run_scale(denominator_bound: i64, length_bound: i64, trials: usize, seed: u64) -> ScaleResult {
    let mut gen: PairGenerator<i64> = PairGenerator::new(PairGenConfig {
        denominator_bound,
        length_bound,
        gap: GapPolicy::Adjacent,
        seed,
    });

    let mut merge_time = Duration::ZERO;
    let mut recognition_time = Duration::ZERO;
    let mut mismatches = 0usize;
    let mut failures = 0usize;

    for _ in 0..trials {
        let pair = gen.next_pair();

        let t0 = Instant::now();
        let merged = merge_segments(&pair.first, &pair.second);
        merge_time += t0.elapsed();

        let t1 = Instant::now();
        let expected = recognize_union(&pair.first, &pair.second_points);
        recognition_time += t1.elapsed();

        match (merged, expected) {
            (Ok(m), Some(e)) => {
                if m != e {
                    mismatches += 1;
                    warn!(%m, %e, "merge disagrees with point-by-point recognition");
                }
            }
            (m, e) => {
                failures += 1;
                warn!(?m, ?e, "union or recognition failed on a common-line pair");
            }
        }
    }

    ScaleResult {
        denominator_bound,
        length_bound,
        seed,
        trials,
        mismatches,
        failures,
        merge_ns_per_pair: merge_time.as_nanos() as f64 / trials as f64,
        recognition_ns_per_pair: recognition_time.as_nanos() as f64 / trials as f64,
    }
}

fn main() {
    enable_tracing();

    let denominator_bound = 300i64;
    let trials = 200usize;

    // Window lengths ramp from a handful of columns to twice the
    // denominator bound, so both the simple-characteristics regime and the
    // saturated regime get exercised.
    let mut scales = Vec::new();
    let mut length_bound = 10f64;
    let mut seed = 1u64;
    while (length_bound as i64) < 2 * denominator_bound {
        let result = run_scale(denominator_bound, length_bound as i64, trials, seed);
        info!(
            modb = result.denominator_bound,
            modx = result.length_bound,
            mismatches = result.mismatches,
            merge_ns = result.merge_ns_per_pair,
            recognition_ns = result.recognition_ns_per_pair,
            "scale done"
        );
        scales.push(result);
        length_bound *= 1.2;
        seed += 1;
    }

    // Wide correctness sweep over independent seeds, in parallel; every
    // pair is a fresh random line.
    let sweep_seeds: Vec<u64> = (1000..1256).collect();
    let sweep_trials_per_seed = 50usize;
    let sweep_mismatches: usize = sweep_seeds
        .par_iter()
        .map(|&seed| {
            let mut gen: PairGenerator<i64> = PairGenerator::new(PairGenConfig {
                denominator_bound: 1000,
                length_bound: 60,
                gap: GapPolicy::Adjacent,
                seed,
            });
            let mut bad = 0usize;
            for _ in 0..sweep_trials_per_seed {
                let pair = gen.next_pair();
                let merged = merge_segments(&pair.first, &pair.second);
                let expected = recognize_union(&pair.first, &pair.second_points);
                match (merged, expected) {
                    (Ok(m), Some(e)) if m == e => {}
                    _ => bad += 1,
                }
            }
            bad
        })
        .sum();

    let report = Report {
        description: format!(
            "union vs point-by-point recognition, modb={}, {} trials per scale",
            denominator_bound, trials
        ),
        scales,
        sweep_trials: sweep_seeds.len() * sweep_trials_per_seed,
        sweep_mismatches,
    };

    info!(
        sweep_trials = report.sweep_trials,
        sweep_mismatches = report.sweep_mismatches,
        "parallel sweep done"
    );

    let file = File::create("segmerge-report.json").expect("create report file");
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report).expect("write json report");
    info!("report written to segmerge-report.json");
}
