// ABOUTME: Main library entry point for the pulsefoot detection toolkit
// ABOUTME: Re-exports the detection engine and adds logging setup and JSON reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pulsefoot
//!
//! Pulse foot detection for arterial blood-pressure waveforms. The numeric
//! engine lives in `pulsefoot-analysis`; this crate wires it to structured
//! logging, report serialization and the `pulsefoot-cli` binary.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pulsefoot::{heart_rate, FootDetector};
//! use pulsefoot::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let samples = vec![80.0; 1000];
//!     let detection = FootDetector::from_env()?.detect(&samples, 100.0)?;
//!     let bpm = heart_rate(&detection.feet, detection.sample_rate)?;
//!     println!("{} feet, {} heart rate values", detection.foot_count(), bpm.len());
//!     Ok(())
//! }
//! ```

/// Structured logging configuration and detection log helpers
pub mod logging;

/// Serializable detection reports
pub mod report;

pub use pulsefoot_analysis::{
    algorithms, config, detect_feet, heart_rate, synthetic, ConfigError, DetectionConfig,
    FootDetectionAlgorithm, FootDetector, LabeledSeries,
};
pub use pulsefoot_core::{constants, errors, models};
