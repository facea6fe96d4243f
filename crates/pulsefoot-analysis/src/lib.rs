// ABOUTME: Pulse foot detection engine for arterial blood-pressure waveforms
// ABOUTME: Derivative filtering, adaptive energy thresholding, zone search, and heart rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pulsefoot Analysis
//!
//! Locates the foot (onset) of every pulse in a uniformly sampled pressure
//! waveform and derives instantaneous heart rate from consecutive feet.
//!
//! The pipeline runs leaf first: derivative filtering, energy windowing,
//! zone detection with bounded relaxation, then per-zone foot localization.
//! Two interchangeable implementations exist behind
//! [`FootDetectionAlgorithm`]: an explicit-loop reference and a rayon
//! data-parallel production path producing bit-identical results.
//!
//! ```rust,no_run
//! use pulsefoot_analysis::{detect_feet, heart_rate};
//!
//! # fn example(samples: &[f64]) -> pulsefoot_analysis::errors::AppResult<()> {
//! let feet = detect_feet(samples, 125.0)?;
//! let bpm = heart_rate(&feet, 125.0)?;
//! # Ok(())
//! # }
//! ```

/// Pipeline stages and algorithm selection
pub mod algorithms;

/// Detection configuration loaded from defaults or environment
pub mod config;

/// Pipeline orchestration and public entry points
pub mod detector;

/// Beats-per-minute derivation from foot indices
pub mod heart_rate;

/// Label and timestamp mapping over detection results
pub mod labeled;

/// Deterministic synthetic pulse trains for tests and benchmarks
pub mod synthetic;

// Re-export core crate modules so that `crate::errors` etc. resolve here
pub use pulsefoot_core::{constants, errors, models};

pub use algorithms::FootDetectionAlgorithm;
pub use config::{ConfigError, DetectionConfig};
pub use detector::{detect_feet, FootDetector};
pub use heart_rate::heart_rate;
pub use labeled::LabeledSeries;
