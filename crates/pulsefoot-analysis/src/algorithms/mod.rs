// ABOUTME: Pipeline stages for pulse foot detection and the selectable execution paths
// ABOUTME: Provides enum-based dispatch between the reference loops and the rayon-parallel pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Foot Detection Algorithms
//!
//! The pipeline runs four stages: derivative filtering, energy windowing,
//! zone detection with threshold relaxation, and foot localization. Two
//! execution paths implement it:
//!
//! - **Reference**: explicit index loops and full sorts, the correctness oracle
//! - **Parallel**: rayon data-parallel stages with partial selection, no
//!   asymptotic change
//!
//! Both paths return identical feet, zones and relaxation coefficient for
//! every input.
//!
//! # Example
//!
//! ```rust,no_run
//! use pulsefoot_analysis::algorithms::FootDetectionAlgorithm;
//! use pulsefoot_analysis::config::DetectionConfig;
//!
//! let samples = vec![80.0; 500];
//! let run = FootDetectionAlgorithm::Parallel.run(&samples, 100.0, &DetectionConfig::default());
//! println!("{} feet", run.feet.len());
//! ```

pub mod derivative;
pub mod energy;
pub mod feet;
pub mod parallel;
pub mod reference;
pub mod zones;

pub use derivative::{DerivativeFilter, Derivatives};
pub use energy::EnergyWindower;
pub use feet::{argmax_finite, FootLocalizer};
pub use zones::{Edge, ZoneDetector};

use crate::config::DetectionConfig;
use crate::errors::AppError;
use crate::models::Zone;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw outcome of one pipeline run, before it is wrapped with input metadata
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionRun {
    /// Foot indices in increasing order
    pub feet: Vec<usize>,
    /// Zones the feet were taken from
    pub zones: Vec<Zone>,
    /// Relaxation coefficient that produced the zones, `None` for the fallback
    pub quant_coef: Option<f64>,
}

/// Execution path of the detection pipeline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FootDetectionAlgorithm {
    /// Plain loops over every window
    ///
    /// Quadratic in the threshold window but easy to audit.
    Reference,

    /// Rayon-parallel windowing with per-position reductions
    ///
    /// Same asymptotic cost as the reference; partial selection and the
    /// thread pool shrink the constant.
    #[default]
    Parallel,
}

impl FootDetectionAlgorithm {
    /// Run the full pipeline on an already validated buffer
    #[must_use]
    pub fn run(&self, samples: &[f64], sample_rate: f64, config: &DetectionConfig) -> DetectionRun {
        match self {
            Self::Reference => reference::run(samples, sample_rate, config),
            Self::Parallel => parallel::run(samples, sample_rate, config),
        }
    }

    /// Get algorithm name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Parallel => "parallel",
        }
    }

    /// Get algorithm description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Reference => "Reference: explicit loops with full sorts (oracle)",
            Self::Parallel => "Parallel: rayon windows with partial quantile selection",
        }
    }
}

impl FromStr for FootDetectionAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reference" => Ok(Self::Reference),
            "parallel" => Ok(Self::Parallel),
            other => Err(AppError::invalid_input(format!(
                "Unknown foot detection algorithm: '{other}'. Valid options: reference, parallel"
            ))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_names_round_trip() {
        for algorithm in [
            FootDetectionAlgorithm::Reference,
            FootDetectionAlgorithm::Parallel,
        ] {
            assert_eq!(algorithm.name().parse::<FootDetectionAlgorithm>().ok(), Some(algorithm));
        }
        assert_eq!(
            "  Parallel ".parse::<FootDetectionAlgorithm>().ok(),
            Some(FootDetectionAlgorithm::Parallel)
        );
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let err = "fastest".parse::<FootDetectionAlgorithm>().unwrap_err();
        assert!(err.message.contains("fastest"));
    }

    #[test]
    fn test_default_is_parallel() {
        assert_eq!(
            FootDetectionAlgorithm::default(),
            FootDetectionAlgorithm::Parallel
        );
    }
}
