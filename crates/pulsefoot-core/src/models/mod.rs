// ABOUTME: Core data models for pulse foot detection results
// ABOUTME: Defines Zone intervals, detection confidence, and the FootDetection outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! All positions are sample offsets into the analysed buffer. Mapping them
//! to timestamps or labels is left to adapters built on top of these types.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Half-open candidate onset interval `[start, stop)` into a sample buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Zone {
    /// First sample of the zone
    pub start: usize,
    /// One past the last sample of the zone
    pub stop: usize,
}

impl Zone {
    /// Create a zone, returning `None` unless `stop > start`
    #[must_use]
    pub const fn new(start: usize, stop: usize) -> Option<Self> {
        if stop > start {
            Some(Self { start, stop })
        } else {
            None
        }
    }

    /// Number of samples covered
    #[must_use]
    pub const fn len(&self) -> usize {
        self.stop - self.start
    }

    /// Zones are never empty; provided for API symmetry with `len`
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stop <= self.start
    }

    /// Sample range covered by the zone
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.stop
    }
}

/// How the zones of a detection run were obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionConfidence {
    /// Zones came from the adaptive threshold at some relaxation step
    Adaptive,
    /// No relaxation step produced a zone; the whole buffer was used
    Fallback,
}

/// Outcome of one foot detection run over a single buffer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootDetection {
    /// Strictly increasing foot sample offsets
    pub feet: Vec<usize>,
    /// Zones the feet were searched in, in increasing order
    pub zones: Vec<Zone>,
    /// Relaxation coefficient that produced the zones, `None` on fallback
    pub quant_coef: Option<f64>,
    /// Confidence marker for consumers
    pub confidence: DetectionConfidence,
    /// Sample rate the buffer was analysed at (Hz)
    pub sample_rate: f64,
    /// Length of the analysed buffer
    pub sample_count: usize,
}

impl FootDetection {
    /// True when the result came from the whole-buffer fallback
    #[must_use]
    pub fn is_low_confidence(&self) -> bool {
        self.confidence == DetectionConfidence::Fallback
    }

    /// Number of detected feet
    #[must_use]
    pub fn foot_count(&self) -> usize {
        self.feet.len()
    }
}
