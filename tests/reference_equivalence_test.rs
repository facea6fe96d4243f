// ABOUTME: Integration tests checking the parallel pipeline against the reference oracle
// ABOUTME: Seeded randomized battery plus degenerate buffers, compared stage by stage and end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::{five_beat_train, init_test_logging, random_buffer, seeded_rng, weak_rise_buffer};
use pulsefoot::algorithms::{
    reference, DerivativeFilter, EnergyWindower, FootDetectionAlgorithm, FootLocalizer,
    ZoneDetector,
};
use pulsefoot::DetectionConfig;
use rand::Rng;

fn assert_same_bits(expected: &[f64], actual: &[f64], stage: &str) {
    assert_eq!(expected.len(), actual.len(), "{stage} length");
    for (i, (e, a)) in expected.iter().zip(actual).enumerate() {
        assert!(
            e.to_bits() == a.to_bits() || (e.is_nan() && a.is_nan()),
            "{stage} differs at {i}: {e} vs {a}"
        );
    }
}

fn assert_equivalent(samples: &[f64], sample_rate: f64, config: &DetectionConfig) {
    let oracle = FootDetectionAlgorithm::Reference.run(samples, sample_rate, config);
    let parallel = FootDetectionAlgorithm::Parallel.run(samples, sample_rate, config);
    assert_eq!(
        oracle,
        parallel,
        "len {} fs {sample_rate} coefs {:?}",
        samples.len(),
        config.quant_coefs
    );
}

// === Stage-level equivalence ===

#[test]
fn test_stages_match_bit_for_bit() {
    init_test_logging();
    let mut rng = seeded_rng(7);

    for _ in 0..100 {
        let len = rng.gen_range(3..800);
        let samples = random_buffer(&mut rng, len);
        let energy_window = rng.gen_range(1..60);
        let threshold_window = rng.gen_range(1..400);
        let quantile = rng.gen_range(0.0..=1.0);

        let filtered = reference::filtered_second_derivative(&samples);
        assert_same_bits(
            &filtered,
            &DerivativeFilter::filtered_second_derivative(&samples),
            "filtered",
        );

        let windower = EnergyWindower::new(energy_window, quantile);
        let energy = reference::energy(&filtered, energy_window);
        assert_same_bits(&energy, &windower.energy(&filtered), "energy");

        let threshold = reference::threshold(&energy, threshold_window, quantile);
        assert_same_bits(
            &threshold,
            &windower.threshold(&energy, threshold_window),
            "threshold",
        );

        let zones = reference::zones(&energy, &threshold);
        assert_eq!(zones, ZoneDetector::zones(&energy, &threshold));
        assert_eq!(
            reference::feet(&filtered, &zones),
            FootLocalizer::locate(&filtered, &zones)
        );
    }
}

// === End-to-end equivalence ===

#[test]
fn test_randomized_battery() {
    init_test_logging();
    let mut rng = seeded_rng(2024);
    let config = DetectionConfig::default();

    for _ in 0..150 {
        let len = rng.gen_range(3..500);
        let sample_rate = rng.gen_range(1.0..500.0);
        let samples = random_buffer(&mut rng, len);
        assert_equivalent(&samples, sample_rate, &config);
    }
}

#[test]
fn test_randomized_configurations() {
    let mut rng = seeded_rng(31);

    for _ in 0..100 {
        let coefs: Vec<f64> = (0..rng.gen_range(1..5))
            .map(|_| rng.gen_range(0.05..4.0))
            .collect();
        let config = DetectionConfig {
            quantile: rng.gen_range(0.0..=1.0),
            ..DetectionConfig::default()
        }
        .with_sum_coef(rng.gen_range(0.5..10.0))
        .with_quant_coefs(coefs);
        assert!(config.validate().is_ok());

        let len = rng.gen_range(3..400);
        let samples = random_buffer(&mut rng, len);
        assert_equivalent(&samples, rng.gen_range(5.0..200.0), &config);
    }
}

#[test]
fn test_degenerate_buffers() {
    let config = DetectionConfig::default();

    for len in 3..=10 {
        assert_equivalent(&vec![0.0; len], 100.0, &config);
        assert_equivalent(&vec![42.5; len], 100.0, &config);
    }

    let mut spike = vec![0.0; 50];
    spike[25] = 10.0;
    assert_equivalent(&spike, 100.0, &config);

    let descending: Vec<f64> = (0..200).map(|i| -f64::from(i)).collect();
    assert_equivalent(&descending, 100.0, &config);

    let mut with_nan = five_beat_train();
    with_nan[300] = f64::NAN;
    with_nan[301] = f64::INFINITY;
    assert_equivalent(&with_nan, 100.0, &config);
}

#[test]
fn test_fixtures() {
    let config = DetectionConfig::default();
    assert_equivalent(&five_beat_train(), 100.0, &config);
    assert_equivalent(&weak_rise_buffer(), 100.0, &config);
    assert_equivalent(
        &weak_rise_buffer(),
        100.0,
        &config.clone().with_quant_coefs(vec![3.0]),
    );
}
