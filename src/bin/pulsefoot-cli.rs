// ABOUTME: Command-line runner for pulse foot detection on synthetic pressure waveforms
// ABOUTME: Generates a pulse train, detects feet with the selected algorithm, and prints a JSON report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pulse foot detection runner.
//!
//! Usage:
//! ```bash
//! # Five beats at 30 bpm sampled at 100 Hz
//! cargo run --bin pulsefoot-cli
//!
//! # Noisy train analysed by the reference implementation
//! cargo run --bin pulsefoot-cli -- --noise 0.5 --seed 7 --algorithm reference
//!
//! # Custom relaxation sequence and verbose logs
//! cargo run --bin pulsefoot-cli -- --quant-coefs 3,1 -v
//! ```

use anyhow::{bail, Result};
use clap::Parser;
use pulsefoot::config::parse_coef_list;
use pulsefoot::logging::{DetectionLogger, LoggingConfig};
use pulsefoot::report::DetectionReport;
use pulsefoot::synthetic::PulseTrain;
use pulsefoot::{DetectionConfig, FootDetectionAlgorithm, FootDetector};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "pulsefoot-cli",
    about = "Pulse foot detection runner",
    long_about = "Detect pulse feet in a synthetic arterial pressure waveform and print a JSON report"
)]
struct CliArgs {
    /// Sample rate in Hz
    #[arg(long, default_value = "100")]
    sample_rate: f64,

    /// Number of generated beats
    #[arg(long, default_value = "5")]
    beats: usize,

    /// Samples between consecutive feet
    #[arg(long, default_value = "200")]
    period: usize,

    /// Offset of the first foot in samples
    #[arg(long, default_value = "50")]
    first_foot: usize,

    /// Pulse pressure above baseline
    #[arg(long, default_value = "40")]
    amplitude: f64,

    /// Uniform noise amplitude (0 disables noise)
    #[arg(long, default_value = "0")]
    noise: f64,

    /// Noise generator seed
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Detection implementation (reference or parallel); overrides PULSEFOOT_ALGORITHM
    #[arg(long)]
    algorithm: Option<FootDetectionAlgorithm>,

    /// Comma separated relaxation sequence; overrides PULSEFOOT_QUANT_COEFS
    #[arg(long)]
    quant_coefs: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let logging = LoggingConfig::from_env();
    let logging = if args.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    if args.beats == 0 || args.period == 0 {
        bail!("--beats and --period must both be positive");
    }

    let mut config = DetectionConfig::from_env();
    if let Some(algorithm) = args.algorithm {
        config = config.with_algorithm(algorithm);
    }
    if let Some(raw) = args.quant_coefs.as_deref() {
        config = config.with_quant_coefs(parse_coef_list(raw)?);
    }
    let algorithm = config.algorithm;
    let detector = FootDetector::with_config(config)?;

    let length = args.first_foot + args.beats * args.period;
    let train = PulseTrain::regular(length, args.first_foot, args.period)
        .amplitude(args.amplitude)
        .noise(args.noise, args.seed);
    let samples = train.samples();

    info!(
        samples = samples.len(),
        sample_rate = args.sample_rate,
        beats = train.foot_positions().len(),
        algorithm = algorithm.name(),
        "Generated synthetic pulse train"
    );

    let detection = detector.detect(&samples, args.sample_rate)?;
    DetectionLogger::log_detection(&detection, algorithm.name());

    let report = DetectionReport::new(detection, algorithm)?
        .with_expected_feet(train.foot_positions().to_vec());
    DetectionLogger::log_heart_rate(&report.heart_rate.bpm);
    if let Some(error) = report.max_foot_error() {
        info!(max_foot_error = error, "Compared against generated feet");
    }

    println!("{}", report.to_json_pretty()?);
    Ok(())
}
