// ABOUTME: Straightforward explicit-loop implementation of the full foot detection pipeline
// ABOUTME: Serves as the correctness oracle for the data-parallel production path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reference pipeline.
//!
//! Written with plain index loops and full sorts, sharing no stage code with
//! the production path so that the two can be checked against each other.
#![allow(clippy::needless_range_loop)] // Safe: index loops are the point of the oracle

use super::DetectionRun;
use crate::config::DetectionConfig;
use crate::models::Zone;

/// Run every stage with explicit loops
///
/// Callers validate the buffer length and sample rate beforehand.
#[must_use]
pub fn run(samples: &[f64], sample_rate: f64, config: &DetectionConfig) -> DetectionRun {
    let filtered = filtered_second_derivative(samples);
    let energies = energy(&filtered, config.energy_window(sample_rate));

    for &quant_coef in &config.quant_coefs {
        let window = DetectionConfig::threshold_window(sample_rate, quant_coef);
        let thresholds = threshold(&energies, window, config.quantile);
        let found = zones(&energies, &thresholds);
        let located = feet(&filtered, &found);
        if !located.is_empty() {
            return DetectionRun {
                feet: located,
                zones: found,
                quant_coef: Some(quant_coef),
            };
        }
    }

    let whole = vec![Zone {
        start: 0,
        stop: samples.len() - 1,
    }];
    let mut located = feet(&filtered, &whole);
    if located.is_empty() {
        located.push(0);
    }
    DetectionRun {
        feet: located,
        zones: whole,
        quant_coef: None,
    }
}

/// Forward second difference, zeroed where the first difference is not positive
#[must_use]
pub fn filtered_second_derivative(samples: &[f64]) -> Vec<f64> {
    let n = samples.len();
    let mut first = vec![f64::NAN; n];
    for i in 0..n.saturating_sub(1) {
        first[i] = samples[i + 1] - samples[i];
    }

    let mut second = vec![f64::NAN; n];
    for i in 0..n.saturating_sub(1) {
        second[i] = first[i + 1] - first[i];
    }

    for i in 0..n {
        if first[i] <= 0.0 {
            second[i] = 0.0;
        }
    }
    second
}

/// Centered window sum of squares, skipping non-finite entries
#[must_use]
pub fn energy(filtered: &[f64], window: usize) -> Vec<f64> {
    let n = filtered.len();
    let window = window.max(1);
    let half = window / 2;
    let mut energy = vec![0.0; n];
    for (i, slot) in energy.iter_mut().enumerate() {
        let start = i.saturating_sub(half);
        let end = (i + window - half).min(n);
        let mut acc = 0.0;
        for &value in &filtered[start..end] {
            if value.is_finite() {
                let square = value * value;
                acc += square;
            }
        }
        *slot = acc;
    }
    energy
}

/// Trailing window quantile with backward fill of incomplete history
#[must_use]
pub fn threshold(energy: &[f64], window: usize, quantile: f64) -> Vec<f64> {
    let n = energy.len();
    let mut threshold = vec![0.0; n];
    if n == 0 {
        return threshold;
    }
    let width = window.clamp(1, n);
    let first = width - 1;

    for i in first..n {
        let mut sorted = energy[i + 1 - width..=i].to_vec();
        sorted.sort_by(f64::total_cmp);

        let last = sorted.len() - 1;
        let position = quantile * last as f64;
        let lo = (position.floor() as usize).min(last);
        let hi = (position.ceil() as usize).min(last);
        threshold[i] = if hi == lo {
            sorted[lo]
        } else {
            (sorted[hi] - sorted[lo]).mul_add(position - lo as f64, sorted[lo])
        };
    }

    for i in 0..first {
        threshold[i] = threshold[first];
    }
    threshold
}

/// Rising edges paired with the first falling edge after them
#[must_use]
pub fn zones(energy: &[f64], threshold: &[f64]) -> Vec<Zone> {
    let n = energy.len().min(threshold.len());
    let mut rising = vec![false; n];
    for i in 0..n {
        rising[i] = energy[i] > threshold[i];
    }

    let mut starts = Vec::new();
    let mut stops = Vec::new();
    for i in 1..n {
        let step = i8::from(rising[i]) - i8::from(rising[i - 1]);
        if step == 1 {
            starts.push(i);
        } else if step == -1 {
            stops.push(i);
        }
    }

    let mut zones = Vec::new();
    let mut next_stop = 0;
    for &start in &starts {
        while next_stop < stops.len() && stops[next_stop] <= start {
            next_stop += 1;
        }
        if next_stop == stops.len() {
            break;
        }
        zones.push(Zone {
            start,
            stop: stops[next_stop],
        });
        next_stop += 1;
    }
    zones
}

/// First finite maximum of each zone slice, offset by the zone start
#[must_use]
pub fn feet(filtered: &[f64], zones: &[Zone]) -> Vec<usize> {
    let mut feet = Vec::with_capacity(zones.len());
    for zone in zones {
        let stop = zone.stop.min(filtered.len());
        let mut best: Option<usize> = None;
        for i in zone.start..stop {
            if !filtered[i].is_finite() {
                continue;
            }
            match best {
                Some(b) if filtered[i] <= filtered[b] => {}
                _ => best = Some(i),
            }
        }
        if let Some(foot) = best {
            feet.push(foot);
        }
    }
    feet
}
