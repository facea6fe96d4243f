// ABOUTME: Shared test utilities and fixtures for pulsefoot integration tests
// ABOUTME: Provides quiet test logging, deterministic waveforms, and seeded random buffers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_precision_loss
)]
//! Shared test utilities for `pulsefoot`

use pulsefoot::synthetic::PulseTrain;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Sample rate of the fixture waveforms
pub const FIXTURE_SAMPLE_RATE: f64 = 100.0;

/// Feet of the five-beat fixture at 30 bpm
pub const FIVE_BEAT_FEET: [usize; 5] = [50, 250, 450, 650, 850];

/// 1000 samples at 100 Hz with clean pulses at [`FIVE_BEAT_FEET`]
pub fn five_beat_train() -> Vec<f64> {
    PulseTrain::new(1000)
        .feet(FIVE_BEAT_FEET.to_vec())
        .samples()
}

/// Linear ramp that turns quadratic at sample 99
///
/// The ramp has a zero second derivative, so energy is flat before the
/// bend. With 250 samples at 100 Hz a 300 or 200 sample threshold window
/// never sees energy strictly above its 0.7 quantile; only the 100 sample
/// window of the last relaxation step finds the zone around the bend.
pub fn weak_rise_buffer() -> Vec<f64> {
    (0..250_i32)
        .map(|i| {
            if i < 99 {
                f64::from(i)
            } else {
                let t = f64::from(i - 99);
                99.0 + t + t * t
            }
        })
        .collect()
}

/// Uniform noise around a baseline, optionally with a few pulses mixed in
pub fn random_buffer(rng: &mut ChaCha8Rng, len: usize) -> Vec<f64> {
    let mut samples: Vec<f64> = (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect();
    if rng.gen_bool(0.5) && len > 10 {
        let period = rng.gen_range(5..=len / 2);
        let train = PulseTrain::regular(len, rng.gen_range(0..period), period)
            .amplitude(rng.gen_range(1.0..50.0))
            .rise_samples(rng.gen_range(1..8))
            .decay_samples(rng.gen_range(2.0..40.0))
            .samples();
        for (sample, pulse) in samples.iter_mut().zip(train) {
            *sample += pulse;
        }
    }
    samples
}

/// Deterministic generator for randomized batteries
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
