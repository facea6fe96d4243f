// ABOUTME: Foot detector entry points validating inputs and wrapping pipeline runs
// ABOUTME: Single-buffer detection, free-function convenience API, and rayon batch detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::DetectionConfig;
use crate::constants::detection::MIN_SAMPLES;
use crate::errors::{AppError, AppResult};
use crate::models::{DetectionConfidence, FootDetection};
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Pulse foot detector bound to one validated configuration
#[derive(Debug, Clone, Default)]
pub struct FootDetector {
    config: DetectionConfig,
}

impl FootDetector {
    /// Detector with default parameters and the parallel implementation
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Detector with explicit parameters
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if the configuration fails validation
    pub fn with_config(config: DetectionConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Detector configured from `PULSEFOOT_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if the loaded values fail validation
    pub fn from_env() -> AppResult<Self> {
        Self::with_config(DetectionConfig::from_env())
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Run detection on one buffer
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InsufficientSamples` for buffers shorter than three
    /// samples and `ErrorCode::InvalidSampleRate` unless the sample rate is a
    /// positive finite number. Degenerate signals are not errors; they yield
    /// a `DetectionConfidence::Fallback` result.
    #[instrument(skip(self, samples), fields(samples = samples.len(), algorithm = self.config.algorithm.name()))]
    pub fn detect(&self, samples: &[f64], sample_rate: f64) -> AppResult<FootDetection> {
        validate_input(samples, sample_rate)?;

        let run = self.config.algorithm.run(samples, sample_rate, &self.config);
        let confidence = if run.quant_coef.is_some() {
            DetectionConfidence::Adaptive
        } else {
            DetectionConfidence::Fallback
        };
        debug!(feet = run.feet.len(), ?confidence, "Foot detection complete");

        Ok(FootDetection {
            feet: run.feet,
            zones: run.zones,
            quant_coef: run.quant_coef,
            confidence,
            sample_rate,
            sample_count: samples.len(),
        })
    }

    /// Foot indices only
    ///
    /// # Errors
    ///
    /// Same preconditions as [`FootDetector::detect`]
    pub fn detect_feet(&self, samples: &[f64], sample_rate: f64) -> AppResult<Vec<usize>> {
        self.detect(samples, sample_rate).map(|d| d.feet)
    }

    /// Detect feet in many independent buffers concurrently
    ///
    /// Results keep the order of `buffers`; one failing buffer does not
    /// affect the others.
    #[must_use]
    pub fn detect_batch<B>(&self, buffers: &[B], sample_rate: f64) -> Vec<AppResult<FootDetection>>
    where
        B: AsRef<[f64]> + Sync,
    {
        buffers
            .par_iter()
            .map(|buffer| self.detect(buffer.as_ref(), sample_rate))
            .collect()
    }
}

/// Detect pulse feet with the default configuration
///
/// # Errors
///
/// Returns an error if the buffer holds fewer than three samples or the
/// sample rate is not a positive finite number
pub fn detect_feet(samples: &[f64], sample_rate: f64) -> AppResult<Vec<usize>> {
    FootDetector::new().detect_feet(samples, sample_rate)
}

fn validate_input(samples: &[f64], sample_rate: f64) -> AppResult<()> {
    if samples.len() < MIN_SAMPLES {
        return Err(AppError::insufficient_samples(samples.len(), MIN_SAMPLES));
    }
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(AppError::invalid_sample_rate(sample_rate));
    }
    Ok(())
}
