// ABOUTME: Zone-of-interest detection from energy crossing its adaptive threshold
// ABOUTME: Finds rising and falling edges and pairs them into half-open candidate zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::Zone;
use rayon::prelude::*;

/// Transition of the rising flag between two consecutive samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Flag went from false to true: zone start
    Rising,
    /// Flag went from true to false: zone stop
    Falling,
}

/// Zone detection stage of the pipeline
pub struct ZoneDetector;

impl ZoneDetector {
    /// Zones where `energy` strictly exceeds `threshold`
    ///
    /// Zones already open at sample 0 (a leading stop) and zones still open
    /// at the last sample (a trailing start) are discarded.
    #[must_use]
    pub fn zones(energy: &[f64], threshold: &[f64]) -> Vec<Zone> {
        let flags: Vec<bool> = energy
            .par_iter()
            .zip(threshold.par_iter())
            .map(|(e, t)| e > t)
            .collect();
        Self::pair_edges(&Self::edges(&flags))
    }

    /// Positions of every flag transition, in increasing order
    #[must_use]
    pub fn edges(flags: &[bool]) -> Vec<(usize, Edge)> {
        flags
            .par_windows(2)
            .enumerate()
            .filter_map(|(i, pair)| match (pair[0], pair[1]) {
                (false, true) => Some((i + 1, Edge::Rising)),
                (true, false) => Some((i + 1, Edge::Falling)),
                _ => None,
            })
            .collect()
    }

    /// Pair each start with the first stop after it
    #[must_use]
    pub fn pair_edges(edges: &[(usize, Edge)]) -> Vec<Zone> {
        let mut zones = Vec::new();
        let mut open = None;
        for &(position, edge) in edges {
            match edge {
                Edge::Rising => open = Some(position),
                Edge::Falling => {
                    if let Some(zone) = open.take().and_then(|start| Zone::new(start, position)) {
                        zones.push(zone);
                    }
                }
            }
        }
        zones
    }

    /// The whole-buffer zone `[0, len - 1)` used when no threshold finds a zone
    #[must_use]
    pub fn fallback(len: usize) -> Option<Zone> {
        Zone::new(0, len.saturating_sub(1))
    }
}
