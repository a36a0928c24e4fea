//! Rejection-sampling scatter over a silhouette
//!
//! Placement draws uniform candidates from the silhouette's bounding box and
//! keeps the ones that land inside the region with enough clearance from
//! every position already accepted. Each slot gets a bounded attempt budget;
//! a slot that exhausts it falls back to the silhouette's anchor so a round
//! always starts with the full item count, just visibly bunched when the
//! tuning asks for the impossible.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::sim::shape::Silhouette;
use crate::tuning::Tuning;

/// Knobs for one placement batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementParams {
    /// How many positions to produce.
    pub count: usize,
    /// Minimum center-to-center distance between sampled positions.
    pub min_spacing: f32,
    /// Candidate draws allowed per slot before falling back to the anchor.
    pub max_attempts: u32,
    /// Height of the band above the bounds' bottom edge to exclude from
    /// sampling. Keeps items off the trunk and floor line.
    pub keep_out_bottom: f32,
}

impl PlacementParams {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            count: tuning.item_count,
            min_spacing: tuning.min_spacing,
            max_attempts: tuning.max_attempts,
            keep_out_bottom: tuning.spawn_bottom_margin,
        }
    }
}

/// Result of one batch: always exactly `params.count` positions.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementBatch {
    pub positions: Vec<Vec2>,
    /// How many slots gave up and landed on the anchor.
    pub fallback_count: usize,
}

/// Scatter `params.count` positions across the silhouette.
///
/// Sampled positions satisfy containment and pairwise spacing; anchor
/// fallbacks are exempt from spacing and may stack. Fallbacks are reported
/// in the batch and summarized in a single warning.
pub fn place_batch(
    silhouette: &dyn Silhouette,
    params: &PlacementParams,
    rng: &mut Pcg32,
) -> PlacementBatch {
    let bounds = silhouette.bounds();
    let y_lo = bounds.min.y + params.keep_out_bottom;
    let anchor = silhouette.anchor();

    // A keep-out taller than the region leaves nothing to sample from
    if bounds.min.x >= bounds.max.x || y_lo >= bounds.max.y {
        log::warn!(
            "placement area is empty, anchoring all {} items",
            params.count
        );
        return PlacementBatch {
            positions: vec![anchor; params.count],
            fallback_count: params.count,
        };
    }

    let spacing_sq = params.min_spacing * params.min_spacing;
    let mut positions: Vec<Vec2> = Vec::with_capacity(params.count);
    let mut fallback_count = 0;

    for _ in 0..params.count {
        let mut placed = None;
        for _ in 0..params.max_attempts {
            let candidate = Vec2::new(
                rng.random_range(bounds.min.x..bounds.max.x),
                rng.random_range(y_lo..bounds.max.y),
            );
            if !silhouette.contains(candidate) {
                continue;
            }
            let clear = positions
                .iter()
                .all(|p| p.distance_squared(candidate) >= spacing_sq);
            if clear {
                placed = Some(candidate);
                break;
            }
        }
        match placed {
            Some(pos) => positions.push(pos),
            None => {
                positions.push(anchor);
                fallback_count += 1;
            }
        }
    }

    if fallback_count > 0 {
        log::warn!(
            "placement exhausted {} attempts for {} of {} items, anchored them",
            params.max_attempts,
            fallback_count,
            params.count
        );
    }

    PlacementBatch {
        positions,
        fallback_count,
    }
}
