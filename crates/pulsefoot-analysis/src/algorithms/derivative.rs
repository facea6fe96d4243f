// ABOUTME: Forward-difference derivative filter with deceleration suppression
// ABOUTME: Produces the filtered second derivative that drives energy and foot localization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rayon::prelude::*;

/// First and second forward differences of a sample buffer
///
/// Both buffers have the input length. Entries that a forward difference
/// cannot define (`first[n-1]`, `second[n-2]`, `second[n-1]`) hold `NaN`.
#[derive(Debug, Clone)]
pub struct Derivatives {
    /// `first[i] = x[i+1] - x[i]`
    pub first: Vec<f64>,
    /// `second[i] = first[i+1] - first[i]`
    pub second: Vec<f64>,
}

/// Derivative stage of the pipeline
pub struct DerivativeFilter;

impl DerivativeFilter {
    /// Compute both forward differences in parallel
    ///
    /// Callers guarantee at least three samples.
    #[must_use]
    pub fn derivatives(samples: &[f64]) -> Derivatives {
        let first = forward_difference(samples);
        let second = forward_difference(&first);
        Derivatives { first, second }
    }

    /// Second derivative with every position where the signal is not rising zeroed
    ///
    /// Only the systolic upstroke contributes; deceleration (`first <= 0`)
    /// is suppressed. Sentinel positions whose first derivative is itself
    /// undefined stay `NaN`.
    #[must_use]
    pub fn filtered_second_derivative(samples: &[f64]) -> Vec<f64> {
        let Derivatives { first, mut second } = Self::derivatives(samples);
        second
            .par_iter_mut()
            .zip(first.par_iter())
            .for_each(|(d2, &d1)| {
                if d1 <= 0.0 {
                    *d2 = 0.0;
                }
            });
        second
    }
}

fn forward_difference(values: &[f64]) -> Vec<f64> {
    let mut diff: Vec<f64> = values.par_windows(2).map(|w| w[1] - w[0]).collect();
    diff.push(f64::NAN);
    diff
}
