// ABOUTME: Sliding-window energy and adaptive quantile threshold computation
// ABOUTME: Data-parallel per-position windows with order-independent, reproducible results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy windowing stage.
//!
//! Every output position is a pure function of its own input window and is
//! summed left to right, so the result does not depend on how rayon splits
//! the work. No prefix sums or running accumulators are shared between
//! positions.

use rayon::prelude::*;

/// Energy and threshold stage of the pipeline
#[derive(Debug, Clone, Copy)]
pub struct EnergyWindower {
    energy_window: usize,
    quantile: f64,
}

impl EnergyWindower {
    /// Create a windower with energy window width `energy_window` (at least one)
    #[must_use]
    pub fn new(energy_window: usize, quantile: f64) -> Self {
        Self {
            energy_window: energy_window.max(1),
            quantile,
        }
    }

    /// Energy window width in samples
    #[must_use]
    pub const fn energy_window(&self) -> usize {
        self.energy_window
    }

    /// Centered sliding sum of squared filtered values
    ///
    /// The window for position `i` is `[i - w/2, i - w/2 + w)` clipped to the
    /// buffer. Non-finite entries contribute nothing.
    #[must_use]
    pub fn energy(&self, filtered: &[f64]) -> Vec<f64> {
        let squares: Vec<f64> = filtered
            .par_iter()
            .map(|&v| if v.is_finite() { v * v } else { 0.0 })
            .collect();

        let n = squares.len();
        let half = self.energy_window / 2;
        let width = self.energy_window;
        (0..n)
            .into_par_iter()
            .map(|i| {
                let start = i.saturating_sub(half);
                let end = (i + width - half).min(n);
                squares[start..end].iter().fold(0.0, |acc, &sq| acc + sq)
            })
            .collect()
    }

    /// Trailing-window quantile of `energy` over `window` samples
    ///
    /// Positions before the first complete window receive the value of the
    /// first complete window. When the buffer is shorter than `window` the
    /// whole buffer forms the single available window.
    ///
    /// Each position copies and partially selects its own window, so a call
    /// costs `O(n * window)` just like the reference path. Only the constant
    /// differs: `select_nth_unstable_by` instead of a full sort, spread over
    /// the rayon pool. No sliding order-statistic structure is kept.
    #[must_use]
    pub fn threshold(&self, energy: &[f64], window: usize) -> Vec<f64> {
        let n = energy.len();
        if n == 0 {
            return Vec::new();
        }
        let width = window.clamp(1, n);
        let first = width - 1;
        let quantile = self.quantile;

        let complete: Vec<f64> = (first..n)
            .into_par_iter()
            .map_init(
                || Vec::with_capacity(width),
                |scratch, i| {
                    scratch.clear();
                    scratch.extend_from_slice(&energy[i + 1 - width..=i]);
                    select_quantile(scratch, quantile)
                },
            )
            .collect();

        let fill = complete.first().copied().unwrap_or(0.0);
        let mut thresholds = vec![fill; first];
        thresholds.extend(complete);
        thresholds
    }
}

/// Linear-interpolated quantile using partial selection instead of a full sort
///
/// Order statistics are unique values, so this returns exactly what
/// interpolating over a fully sorted copy returns.
pub(crate) fn select_quantile(values: &mut [f64], quantile: f64) -> f64 {
    let Some(last) = values.len().checked_sub(1) else {
        return f64::NAN;
    };
    let position = quantile * last as f64;
    let lo = (position.floor() as usize).min(last);
    let hi = (position.ceil() as usize).min(last);

    let (_, lo_value, upper) = values.select_nth_unstable_by(lo, f64::total_cmp);
    let lo_value = *lo_value;
    if hi == lo {
        return lo_value;
    }
    let hi_value = upper
        .iter()
        .copied()
        .min_by(f64::total_cmp)
        .unwrap_or(lo_value);
    interpolate(lo_value, hi_value, position - lo as f64)
}

#[inline]
fn interpolate(lo_value: f64, hi_value: f64, fraction: f64) -> f64 {
    (hi_value - lo_value).mul_add(fraction, lo_value)
}
