// ABOUTME: Production foot detection path composing the data-parallel pipeline stages
// ABOUTME: Runs the bounded relaxation sequence sequentially and falls back to the whole buffer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::derivative::DerivativeFilter;
use super::energy::EnergyWindower;
use super::feet::FootLocalizer;
use super::zones::ZoneDetector;
use super::DetectionRun;
use crate::config::DetectionConfig;
use tracing::{debug, info, warn};

/// Run the pipeline with rayon-parallel windowing stages
///
/// Callers validate the buffer length and sample rate beforehand. The
/// relaxation coefficients are tried one after another; only the thresholding
/// and zone stages are repeated since energy does not depend on them. A step
/// succeeds once its zones yield at least one foot.
#[must_use]
pub fn run(samples: &[f64], sample_rate: f64, config: &DetectionConfig) -> DetectionRun {
    let filtered = DerivativeFilter::filtered_second_derivative(samples);
    let windower = EnergyWindower::new(config.energy_window(sample_rate), config.quantile);
    let energy = windower.energy(&filtered);

    debug!(
        samples = samples.len(),
        sample_rate,
        energy_window = windower.energy_window(),
        "Computed filtered derivative energy"
    );

    for &quant_coef in &config.quant_coefs {
        let window = DetectionConfig::threshold_window(sample_rate, quant_coef);
        let threshold = windower.threshold(&energy, window);
        let zones = ZoneDetector::zones(&energy, &threshold);

        if zones.is_empty() {
            debug!(
                quant_coef,
                threshold_window = window,
                "No zones of interest, relaxing threshold window"
            );
            continue;
        }

        let feet = FootLocalizer::locate(&filtered, &zones);
        if feet.is_empty() {
            debug!(
                quant_coef,
                zones = zones.len(),
                "Zones hold no finite second derivative, relaxing threshold window"
            );
            continue;
        }

        info!(
            quant_coef,
            threshold_window = window,
            zones = zones.len(),
            "Zones of interest found"
        );
        return DetectionRun {
            feet,
            zones,
            quant_coef: Some(quant_coef),
        };
    }

    warn!(
        samples = samples.len(),
        tried = config.quant_coefs.len(),
        "No zones at any relaxation step, using whole buffer as a single low-confidence zone"
    );
    let zones: Vec<_> = ZoneDetector::fallback(samples.len()).into_iter().collect();
    let mut feet = FootLocalizer::locate(&filtered, &zones);
    if feet.is_empty() {
        // whole buffer non-finite: the zone start is the only defined choice
        debug!("Fallback zone holds no finite second derivative, using zone start");
        feet = zones.iter().map(|zone| zone.start).collect();
    }
    DetectionRun {
        feet,
        zones,
        quant_coef: None,
    }
}
