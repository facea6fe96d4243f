// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default detection parameters, environment keys, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file.

/// Default parameters of the foot detection pipeline
pub mod detection {
    /// Minimum buffer length able to produce a second derivative
    pub const MIN_SAMPLES: usize = 3;

    /// Divisor of the sample rate giving the energy window width (`W1`)
    pub const DEFAULT_SUM_COEF: f64 = 4.0;

    /// Quantile of the trailing energy window used as threshold
    pub const DEFAULT_QUANTILE: f64 = 0.7;

    /// Relaxation sequence of the adaptive threshold window multiplier (`W2`)
    ///
    /// Tried in order; the first coefficient producing a zone wins.
    pub const DEFAULT_QUANT_COEFS: [f64; 3] = [3.0, 2.0, 1.0];
}

/// Physiological unit conversions
pub mod physiology {
    /// Seconds per minute, for beats-per-minute conversion
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
}

/// Environment variable names read by configuration loaders
pub mod env_config {
    /// Energy window divisor
    pub const SUM_COEF: &str = "PULSEFOOT_SUM_COEF";
    /// Threshold quantile
    pub const QUANTILE: &str = "PULSEFOOT_QUANTILE";
    /// Comma separated relaxation sequence
    pub const QUANT_COEFS: &str = "PULSEFOOT_QUANT_COEFS";
    /// Detection implementation (`reference` or `parallel`)
    pub const ALGORITHM: &str = "PULSEFOOT_ALGORITHM";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Command-line service name
    pub const PULSEFOOT_CLI: &str = "pulsefoot-cli";
}
