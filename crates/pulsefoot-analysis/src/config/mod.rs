// ABOUTME: Configuration module for the pulsefoot-analysis crate
// ABOUTME: Re-exports detection configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Detection parameters (window coefficients, quantile, relaxation sequence)
pub mod detection;

/// Configuration validation errors
pub mod error;

pub use detection::{parse_coef_list, DetectionConfig};
pub use error::ConfigError;
