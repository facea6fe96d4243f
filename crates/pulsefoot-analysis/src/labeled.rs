// ABOUTME: Adapter mapping foot indices back to caller-owned labels such as timestamps
// ABOUTME: Keeps label handling outside the numeric pipeline, which only sees sample offsets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::detector::FootDetector;
use crate::errors::{AppError, AppResult};
use crate::heart_rate::heart_rate;
use crate::models::FootDetection;
use chrono::{DateTime, Duration, Utc};

/// Nanoseconds per second for timestamp spacing
const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Sample values paired one-to-one with labels
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSeries<L> {
    labels: Vec<L>,
    values: Vec<f64>,
}

impl<L: Clone> LabeledSeries<L> {
    /// Pair labels with values
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if the two lengths differ
    pub fn new(labels: Vec<L>, values: Vec<f64>) -> AppResult<Self> {
        if labels.len() != values.len() {
            return Err(AppError::invalid_input(format!(
                "{} labels for {} values",
                labels.len(),
                values.len()
            ))
            .with_channel("labeled_series"));
        }
        Ok(Self { labels, values })
    }

    /// Labels in sample order
    #[must_use]
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Sample values
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the series holds no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Run `detector` over the values
    ///
    /// # Errors
    ///
    /// Propagates the detector's input validation errors
    pub fn detect(&self, detector: &FootDetector, sample_rate: f64) -> AppResult<FootDetection> {
        detector.detect(&self.values, sample_rate)
    }

    /// `(label, value)` at every foot
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if a foot lies outside the series
    pub fn feet_values(&self, feet: &[usize]) -> AppResult<Vec<(L, f64)>> {
        feet.iter()
            .map(|&foot| self.at(foot).map(|label| (label, self.values[foot])))
            .collect()
    }

    /// Heart rate keyed by the label of the later foot of each pair
    ///
    /// # Errors
    ///
    /// Propagates [`heart_rate`] errors and returns `ErrorCode::ValueOutOfRange`
    /// if a foot lies outside the series
    pub fn heart_rate_series(&self, feet: &[usize], sample_rate: f64) -> AppResult<Vec<(L, f64)>> {
        let bpm = heart_rate(feet, sample_rate)?;
        feet.iter()
            .skip(1)
            .zip(bpm)
            .map(|(&foot, rate)| self.at(foot).map(|label| (label, rate)))
            .collect()
    }

    fn at(&self, index: usize) -> AppResult<L> {
        self.labels.get(index).cloned().ok_or_else(|| {
            AppError::out_of_range(format!(
                "index {index} outside series of {} samples",
                self.labels.len()
            ))
        })
    }
}

impl LabeledSeries<DateTime<Utc>> {
    /// Timestamps `start + i / sample_rate` for every value
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidSampleRate` unless the sample rate is a
    /// positive finite number
    pub fn uniform(start: DateTime<Utc>, sample_rate: f64, values: Vec<f64>) -> AppResult<Self> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(AppError::invalid_sample_rate(sample_rate));
        }
        let labels = (0..values.len())
            .map(|i| {
                let offset = (i as f64 * NANOS_PER_SECOND / sample_rate).round() as i64;
                start + Duration::nanoseconds(offset)
            })
            .collect();
        Ok(Self { labels, values })
    }
}
