// ABOUTME: Foot localization at the steepest rising edge within each candidate zone
// ABOUTME: Picks the first maximum of the filtered second derivative, skipping non-finite slices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::Zone;
use rayon::prelude::*;
use tracing::debug;

/// Foot localization stage of the pipeline
pub struct FootLocalizer;

impl FootLocalizer {
    /// One foot per zone at `start + argmax(filtered[start..stop])`
    ///
    /// Zones whose slice is empty or holds no finite value are dropped.
    #[must_use]
    pub fn locate(filtered: &[f64], zones: &[Zone]) -> Vec<usize> {
        zones
            .par_iter()
            .filter_map(|zone| {
                let stop = zone.stop.min(filtered.len());
                let slice = filtered.get(zone.start..stop).unwrap_or_default();
                let foot = argmax_finite(slice).map(|offset| zone.start + offset);
                if foot.is_none() {
                    debug!(
                        zone.start = zone.start,
                        zone.stop = zone.stop,
                        "Dropping zone without a finite second derivative"
                    );
                }
                foot
            })
            .collect()
    }
}

/// Index of the first maximum among finite values
#[must_use]
pub fn argmax_finite(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
            Some((_, best_value)) if v <= best_value => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}
