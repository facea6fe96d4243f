// ABOUTME: Integration tests for structural guarantees of detected foot sequences
// ABOUTME: Covers ordering, bounds, non-emptiness, idempotence, and the five-beat scenario
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    five_beat_train, init_test_logging, random_buffer, seeded_rng, FIVE_BEAT_FEET,
    FIXTURE_SAMPLE_RATE,
};
use pulsefoot::models::{DetectionConfidence, Zone};
use pulsefoot::synthetic::PulseTrain;
use pulsefoot::{detect_feet, heart_rate, DetectionConfig, FootDetectionAlgorithm, FootDetector};
use rand::Rng;

// === Five-beat scenario ===

#[test]
fn test_five_beat_feet_are_found() {
    init_test_logging();
    let samples = five_beat_train();

    let detection = FootDetector::new()
        .detect(&samples, FIXTURE_SAMPLE_RATE)
        .unwrap();

    assert_eq!(detection.feet, FIVE_BEAT_FEET.to_vec());
    assert_eq!(detection.confidence, DetectionConfidence::Adaptive);
    assert_eq!(detection.quant_coef, Some(3.0));
    assert_eq!(detection.zones.len(), 5);
    assert_eq!(detection.zones[0], Zone { start: 38, stop: 72 });
}

#[test]
fn test_five_beat_heart_rate() {
    let feet = detect_feet(&five_beat_train(), FIXTURE_SAMPLE_RATE).unwrap();
    let bpm = heart_rate(&feet, FIXTURE_SAMPLE_RATE).unwrap();

    assert_eq!(bpm.len(), 4);
    for value in bpm {
        assert!((value - 30.0).abs() < 1e-9, "got {value}");
    }
}

#[test]
fn test_faster_rhythm_at_higher_rate() {
    // 10 beats at 60 bpm sampled at 125 Hz
    let samples = PulseTrain::regular(1250, 20, 125)
        .rise_samples(12)
        .decay_samples(50.0)
        .samples();

    let feet = detect_feet(&samples, 125.0).unwrap();
    let expected: Vec<usize> = (20..1250).step_by(125).collect();
    assert_eq!(feet, expected);

    let bpm = heart_rate(&feet, 125.0).unwrap();
    assert!(bpm.iter().all(|&b| (b - 60.0).abs() < 1e-9));
}

#[test]
fn test_single_pulse_in_flat_buffer() {
    let samples = PulseTrain::new(1000).feet(vec![500]).samples();
    let detection = FootDetector::new().detect(&samples, 100.0).unwrap();

    assert_eq!(detection.feet, vec![500]);
    assert_eq!(detection.zones, vec![Zone { start: 488, stop: 522 }]);
}

// === Structural properties on randomized buffers ===

#[test]
fn test_feet_are_increasing_bounded_and_inside_zones() {
    init_test_logging();
    let mut rng = seeded_rng(0x5eed);
    let detector = FootDetector::new();

    for _ in 0..200 {
        let len = rng.gen_range(3..600);
        let sample_rate = rng.gen_range(5.0..250.0);
        let samples = random_buffer(&mut rng, len);

        let detection = detector.detect(&samples, sample_rate).unwrap();

        assert!(!detection.feet.is_empty(), "len {len} fs {sample_rate}");
        assert!(detection.feet.windows(2).all(|w| w[0] < w[1]));
        assert!(detection.feet.iter().all(|&f| f < len));
        assert!(detection.zones.windows(2).all(|w| w[0].stop <= w[1].start));
        for &foot in &detection.feet {
            assert!(detection.zones.iter().any(|z| z.range().contains(&foot)));
        }
        if detection.confidence == DetectionConfidence::Fallback {
            assert_eq!(detection.quant_coef, None);
            assert_eq!(detection.zones, vec![Zone { start: 0, stop: len - 1 }]);
        }
    }
}

#[test]
fn test_short_and_flat_buffers_still_yield_a_foot() {
    for len in 3..=10 {
        assert_eq!(detect_feet(&vec![0.0; len], 100.0).unwrap(), vec![0]);
    }
    assert_eq!(detect_feet(&[1.0, 2.0, 3.0], 100.0).unwrap(), vec![0]);

    let mut spike = vec![0.0; 50];
    spike[25] = 10.0;
    let detection = FootDetector::new().detect(&spike, 100.0).unwrap();
    assert!(detection.is_low_confidence());
    assert_eq!(detection.feet, vec![0]);
}

#[test]
fn test_detection_is_idempotent() {
    let mut rng = seeded_rng(99);
    let detector = FootDetector::new();

    for _ in 0..20 {
        let samples = random_buffer(&mut rng, 400);
        let first = detector.detect(&samples, 80.0).unwrap();
        let second = detector.detect(&samples, 80.0).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_nan_samples_do_not_abort_detection() {
    let mut samples = five_beat_train();
    samples[600] = f64::NAN;

    let detection = FootDetector::new().detect(&samples, 100.0).unwrap();
    assert!(!detection.feet.is_empty());
    assert!(detection.feet.windows(2).all(|w| w[0] < w[1]));
    assert!(detection.feet.iter().all(|&f| f < samples.len()));
}

#[test]
fn test_non_finite_buffers_still_yield_a_foot() {
    let buffers = [
        vec![1.0, f64::NAN, 3.0],
        vec![f64::NAN; 50],
        vec![f64::INFINITY, 2.0, f64::NAN, 4.0],
    ];

    for algorithm in [
        FootDetectionAlgorithm::Reference,
        FootDetectionAlgorithm::Parallel,
    ] {
        let detector =
            FootDetector::with_config(DetectionConfig::default().with_algorithm(algorithm))
                .unwrap();
        for samples in &buffers {
            let detection = detector.detect(samples, 100.0).unwrap();

            assert_eq!(detection.feet, vec![0], "{} on {samples:?}", algorithm.name());
            assert_eq!(detection.confidence, DetectionConfidence::Fallback);
            assert_eq!(
                detection.zones,
                vec![Zone {
                    start: 0,
                    stop: samples.len() - 1
                }]
            );
        }
    }
}
