// ABOUTME: Deterministic synthetic arterial pressure pulse trains for tests and benchmarks
// ABOUTME: Raised-cosine upstroke, exponential runoff, and optional seeded uniform noise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

/// Default diastolic baseline (mmHg)
const DEFAULT_BASELINE: f64 = 80.0;
/// Default pulse pressure (mmHg)
const DEFAULT_AMPLITUDE: f64 = 40.0;
/// Default upstroke duration in samples
const DEFAULT_RISE_SAMPLES: usize = 10;
/// Default exponential runoff time constant in samples
const DEFAULT_DECAY_SAMPLES: f64 = 40.0;

/// Builder for a pressure waveform made of overlapping pulses
///
/// Each pulse starts at its foot, rises along a raised cosine to the full
/// amplitude over `rise_samples`, then decays exponentially. Contributions of
/// all pulses are summed onto the baseline.
///
/// ```
/// use pulsefoot_analysis::synthetic::PulseTrain;
///
/// let train = PulseTrain::regular(1000, 50, 200).noise(0.5, 42);
/// assert_eq!(train.foot_positions(), &[50, 250, 450, 650, 850]);
/// assert_eq!(train.samples().len(), 1000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PulseTrain {
    length: usize,
    feet: Vec<usize>,
    baseline: f64,
    amplitude: f64,
    rise_samples: usize,
    decay_samples: f64,
    noise: Option<(f64, u64)>,
}

impl PulseTrain {
    /// Flat baseline of `length` samples with no pulses
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self {
            length,
            feet: Vec::new(),
            baseline: DEFAULT_BASELINE,
            amplitude: DEFAULT_AMPLITUDE,
            rise_samples: DEFAULT_RISE_SAMPLES,
            decay_samples: DEFAULT_DECAY_SAMPLES,
            noise: None,
        }
    }

    /// Pulses every `period` samples starting at `first`
    #[must_use]
    pub fn regular(length: usize, first: usize, period: usize) -> Self {
        let feet = (first..length).step_by(period.max(1)).collect();
        Self::new(length).feet(feet)
    }

    /// Explicit foot positions
    #[must_use]
    pub fn feet(mut self, mut feet: Vec<usize>) -> Self {
        feet.sort_unstable();
        feet.dedup();
        self.feet = feet;
        self
    }

    /// Baseline pressure
    #[must_use]
    pub const fn baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    /// Peak pulse height above baseline
    #[must_use]
    pub const fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Upstroke duration
    #[must_use]
    pub const fn rise_samples(mut self, rise_samples: usize) -> Self {
        self.rise_samples = rise_samples;
        self
    }

    /// Runoff time constant
    #[must_use]
    pub const fn decay_samples(mut self, decay_samples: f64) -> Self {
        self.decay_samples = decay_samples;
        self
    }

    /// Add uniform noise in `[-amplitude, amplitude]` drawn from a seeded generator
    #[must_use]
    pub fn noise(mut self, amplitude: f64, seed: u64) -> Self {
        self.noise = (amplitude.is_finite() && amplitude > 0.0).then_some((amplitude, seed));
        self
    }

    /// Foot positions the train was built with
    #[must_use]
    pub fn foot_positions(&self) -> &[usize] {
        &self.feet
    }

    /// Render the waveform
    #[must_use]
    pub fn samples(&self) -> Vec<f64> {
        let mut samples: Vec<f64> = (0..self.length)
            .map(|i| {
                self.feet
                    .iter()
                    .take_while(|&&foot| foot <= i)
                    .map(|&foot| self.pulse(i - foot))
                    .sum::<f64>()
                    + self.baseline
            })
            .collect();

        if let Some((amplitude, seed)) = self.noise {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for sample in &mut samples {
                *sample += rng.gen_range(-amplitude..=amplitude);
            }
        }
        samples
    }

    fn pulse(&self, t: usize) -> f64 {
        if t < self.rise_samples {
            let phase = PI * t as f64 / self.rise_samples as f64;
            self.amplitude * (1.0 - phase.cos()) / 2.0
        } else {
            let runoff = (t - self.rise_samples) as f64;
            self.amplitude * (-runoff / self.decay_samples).exp()
        }
    }
}
