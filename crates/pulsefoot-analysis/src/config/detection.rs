// ABOUTME: Foot detection parameter configuration types
// ABOUTME: Window coefficients, threshold quantile, relaxation sequence, and algorithm choice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use crate::algorithms::FootDetectionAlgorithm;
use crate::constants::detection::{DEFAULT_QUANTILE, DEFAULT_QUANT_COEFS, DEFAULT_SUM_COEF};
use crate::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Parameters of the foot detection pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Energy window width is `round(sample_rate / sum_coef)` samples
    pub sum_coef: f64,
    /// Quantile of the trailing energy window used as threshold
    pub quantile: f64,
    /// Threshold window multipliers tried in order, `round(sample_rate * coef)` samples each
    pub quant_coefs: Vec<f64>,
    /// Implementation used to evaluate the pipeline
    pub algorithm: FootDetectionAlgorithm,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            sum_coef: DEFAULT_SUM_COEF,
            quantile: DEFAULT_QUANTILE,
            quant_coefs: DEFAULT_QUANT_COEFS.to_vec(),
            algorithm: FootDetectionAlgorithm::default(),
        }
    }
}

impl DetectionConfig {
    /// Load detection configuration from environment
    ///
    /// Unset or unparseable variables fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            sum_coef: env::var(env_config::SUM_COEF)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SUM_COEF),
            quantile: env::var(env_config::QUANTILE)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_QUANTILE),
            quant_coefs: env::var(env_config::QUANT_COEFS)
                .ok()
                .and_then(|s| match parse_coef_list(&s) {
                    Ok(coefs) => Some(coefs),
                    Err(e) => {
                        warn!(
                            variable = env_config::QUANT_COEFS,
                            value = %s,
                            error = %e,
                            "Ignoring unparseable relaxation sequence"
                        );
                        None
                    }
                })
                .unwrap_or_else(|| DEFAULT_QUANT_COEFS.to_vec()),
            algorithm: env::var(env_config::ALGORITHM)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Replace the relaxation sequence
    #[must_use]
    pub fn with_quant_coefs(mut self, quant_coefs: impl Into<Vec<f64>>) -> Self {
        self.quant_coefs = quant_coefs.into();
        self
    }

    /// Replace the energy window divisor
    #[must_use]
    pub const fn with_sum_coef(mut self, sum_coef: f64) -> Self {
        self.sum_coef = sum_coef;
        self
    }

    /// Select the implementation
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: FootDetectionAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Validate parameter ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `sum_coef` is not a positive finite number, the
    /// quantile lies outside `[0, 1]`, or the relaxation sequence is empty or
    /// holds a non-positive coefficient.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sum_coef.is_finite() && self.sum_coef > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "sum_coef must be a positive finite number",
            ));
        }
        if !(0.0..=1.0).contains(&self.quantile) {
            return Err(ConfigError::InvalidRange("quantile must be between 0 and 1"));
        }
        if self.quant_coefs.is_empty() {
            return Err(ConfigError::MissingField("quant_coefs"));
        }
        if self
            .quant_coefs
            .iter()
            .any(|coef| !(coef.is_finite() && *coef > 0.0))
        {
            return Err(ConfigError::ValueOutOfRange(
                "quant_coefs entries must be positive finite numbers",
            ));
        }
        Ok(())
    }

    /// Energy window width (`W1`) in samples for the given sample rate
    #[must_use]
    pub fn energy_window(&self, sample_rate: f64) -> usize {
        window_width(sample_rate / self.sum_coef)
    }

    /// Threshold window width (`W2`) in samples for one relaxation step
    #[must_use]
    pub fn threshold_window(sample_rate: f64, quant_coef: f64) -> usize {
        window_width(sample_rate * quant_coef)
    }
}

/// Round half away from zero, then clamp to at least one sample
fn window_width(samples: f64) -> usize {
    let rounded = samples.round();
    if rounded >= 1.0 {
        rounded as usize
    } else {
        1
    }
}

/// Parse a comma separated list of relaxation coefficients
///
/// # Errors
///
/// Returns `ConfigError::Parse` if any entry is not a number, or
/// `ConfigError::MissingField` if the list is empty
pub fn parse_coef_list(raw: &str) -> Result<Vec<f64>, ConfigError> {
    let coefs = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|e| ConfigError::Parse(format!("'{s}': {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if coefs.is_empty() {
        return Err(ConfigError::MissingField("quant_coefs"));
    }
    Ok(coefs)
}
