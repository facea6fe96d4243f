// ABOUTME: Integration tests for JSON detection reports built from synthetic trains
// ABOUTME: Checks report contents, ground-truth comparison, and serialized field names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{five_beat_train, FIVE_BEAT_FEET, FIXTURE_SAMPLE_RATE};
use pulsefoot::report::DetectionReport;
use pulsefoot::synthetic::PulseTrain;
use pulsefoot::{FootDetectionAlgorithm, FootDetector};

#[test]
fn test_five_beat_report() {
    let detection = FootDetector::new()
        .detect(&five_beat_train(), FIXTURE_SAMPLE_RATE)
        .unwrap();
    let report = DetectionReport::new(detection, FootDetectionAlgorithm::Parallel)
        .unwrap()
        .with_expected_feet(FIVE_BEAT_FEET.to_vec());

    assert_eq!(report.max_foot_error(), Some(0));
    assert!((report.heart_rate.mean_bpm.unwrap() - 30.0).abs() < 1e-9);

    let json: serde_json::Value = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
    assert_eq!(json["algorithm"], "parallel");
    assert_eq!(json["confidence"], "adaptive");
    assert_eq!(json["quant_coef"], 3.0);
    assert_eq!(json["feet"], serde_json::json!(FIVE_BEAT_FEET));
    assert_eq!(json["zones"][0]["start"], 38);
    assert_eq!(json["expected_feet"][4], 850);
}

#[test]
fn test_fallback_report_round_trips() {
    let detection = FootDetector::new()
        .detect(&PulseTrain::new(40).samples(), FIXTURE_SAMPLE_RATE)
        .unwrap();
    let report = DetectionReport::new(detection, FootDetectionAlgorithm::Reference).unwrap();

    let json = report.to_json_pretty().unwrap();
    let parsed: DetectionReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
    assert!(parsed.heart_rate.bpm.is_empty());
    assert_eq!(parsed.max_foot_error(), None);
}
