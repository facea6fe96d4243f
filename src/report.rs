// ABOUTME: JSON report combining a detection run with its derived heart rate
// ABOUTME: Used by the command-line binary and by consumers that archive detection outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::algorithms::FootDetectionAlgorithm;
use crate::errors::AppResult;
use crate::heart_rate;
use crate::models::{DetectionConfidence, FootDetection, Zone};
use serde::{Deserialize, Serialize};

/// Heart rate statistics over one detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateSummary {
    /// Beats per minute for each consecutive foot pair
    pub bpm: Vec<f64>,
    /// Mean of `bpm`, absent with fewer than two feet
    pub mean_bpm: Option<f64>,
    /// Smallest value of `bpm`
    pub min_bpm: Option<f64>,
    /// Largest value of `bpm`
    pub max_bpm: Option<f64>,
}

impl HeartRateSummary {
    fn from_bpm(bpm: Vec<f64>) -> Self {
        let mean_bpm = (!bpm.is_empty()).then(|| bpm.iter().sum::<f64>() / bpm.len() as f64);
        let min_bpm = bpm.iter().copied().reduce(f64::min);
        let max_bpm = bpm.iter().copied().reduce(f64::max);
        Self {
            bpm,
            mean_bpm,
            min_bpm,
            max_bpm,
        }
    }
}

/// Serializable outcome of one analysed buffer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Implementation that produced the result
    pub algorithm: FootDetectionAlgorithm,
    /// Sample rate in Hz
    pub sample_rate: f64,
    /// Buffer length
    pub sample_count: usize,
    /// Whether the adaptive threshold or the fallback produced the zones
    pub confidence: DetectionConfidence,
    /// Winning relaxation coefficient
    pub quant_coef: Option<f64>,
    /// Foot sample offsets
    pub feet: Vec<usize>,
    /// Zones the feet were searched in
    pub zones: Vec<Zone>,
    /// Foot offsets the input was generated with, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_feet: Option<Vec<usize>>,
    /// Derived heart rate
    pub heart_rate: HeartRateSummary,
}

impl DetectionReport {
    /// Build a report, deriving heart rate from the detected feet
    ///
    /// # Errors
    ///
    /// Propagates heart rate errors, which only occur for invalid sample rates
    pub fn new(detection: FootDetection, algorithm: FootDetectionAlgorithm) -> AppResult<Self> {
        let bpm = heart_rate(&detection.feet, detection.sample_rate)?;
        Ok(Self {
            algorithm,
            sample_rate: detection.sample_rate,
            sample_count: detection.sample_count,
            confidence: detection.confidence,
            quant_coef: detection.quant_coef,
            feet: detection.feet,
            zones: detection.zones,
            expected_feet: None,
            heart_rate: HeartRateSummary::from_bpm(bpm),
        })
    }

    /// Attach the ground-truth feet of a synthetic input
    #[must_use]
    pub fn with_expected_feet(mut self, expected: Vec<usize>) -> Self {
        self.expected_feet = Some(expected);
        self
    }

    /// Largest distance between an expected foot and its nearest detection
    #[must_use]
    pub fn max_foot_error(&self) -> Option<usize> {
        let expected = self.expected_feet.as_ref()?;
        expected
            .iter()
            .map(|&e| self.feet.iter().map(|&f| f.abs_diff(e)).min())
            .collect::<Option<Vec<_>>>()?
            .into_iter()
            .max()
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::SerializationError` if serialization fails
    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
