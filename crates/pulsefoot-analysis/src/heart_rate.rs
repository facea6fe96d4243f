// ABOUTME: Instantaneous heart rate from consecutive pulse foot indices
// ABOUTME: Converts inter-foot sample intervals to beats per minute
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::physiology::SECONDS_PER_MINUTE;
use crate::errors::{AppError, AppResult};

/// Beats per minute for every pair of consecutive feet
///
/// `bpm[i] = 60 * sample_rate / (feet[i + 1] - feet[i])`. Fewer than two feet
/// give an empty result.
///
/// # Errors
///
/// Returns `ErrorCode::InvalidSampleRate` unless `sample_rate` is a positive
/// finite number, and `ErrorCode::InvalidInput` if the indices are not
/// strictly increasing
pub fn heart_rate(foot_indices: &[usize], sample_rate: f64) -> AppResult<Vec<f64>> {
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(AppError::invalid_sample_rate(sample_rate));
    }

    foot_indices
        .windows(2)
        .map(|pair| {
            let interval = pair[1].checked_sub(pair[0]).filter(|&d| d > 0).ok_or_else(|| {
                AppError::invalid_input(format!(
                    "foot indices must be strictly increasing, got {} then {}",
                    pair[0], pair[1]
                ))
            })?;
            Ok(SECONDS_PER_MINUTE * sample_rate / interval as f64)
        })
        .collect()
}
