//! LOD Policy Operations - Pure DOP Functions
//!
//! All functions are pure: take data, return results, no side effects.

use super::lod_data::{LodLevel, LodPolicyData};
use crate::config::LodParams;

/// Resolve LOD params against a chunk size
pub fn create_lod_policy(params: &LodParams, chunk_size: f32) -> LodPolicyData {
    LodPolicyData {
        band_edges: params
            .band_multiples
            .iter()
            .map(|multiple| multiple * chunk_size)
            .collect(),
        base_segments: params.base_segments,
        min_segments: params.min_segments,
        hysteresis: params.hysteresis,
    }
}

/// Map a camera-to-chunk-center distance to a detail level.
/// Non-decreasing in `distance`.
pub fn lod_for(policy: &LodPolicyData, distance: f32) -> LodLevel {
    policy
        .band_edges
        .iter()
        .position(|&edge| distance < edge)
        .unwrap_or(policy.band_edges.len()) as LodLevel
}

/// Segments per chunk edge: `max(floor(base · 0.5^lod), min)`.
/// Non-increasing in `lod` and never below `min_segments`.
pub fn segments_for(policy: &LodPolicyData, lod: LodLevel) -> u32 {
    let halved = policy.base_segments.checked_shr(lod).unwrap_or(0);
    let segments = halved.max(policy.min_segments);
    debug_assert!(segments > 0, "LOD {} mapped to zero segments", lod);
    segments
}

/// LOD selection with a dead zone around band edges.
///
/// Coarsening requires `distance - hysteresis` to cross the edge, refining
/// requires `distance + hysteresis` to cross it. A zero margin is exactly
/// [`lod_for`].
pub fn lod_with_hysteresis(
    policy: &LodPolicyData,
    distance: f32,
    current: Option<LodLevel>,
) -> LodLevel {
    let raw = lod_for(policy, distance);
    let Some(current) = current else {
        return raw;
    };

    if raw > current {
        lod_for(policy, distance - policy.hysteresis).max(current)
    } else if raw < current {
        lod_for(policy, distance + policy.hysteresis).min(current)
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(hysteresis: f32) -> LodPolicyData {
        create_lod_policy(
            &LodParams {
                hysteresis,
                ..Default::default()
            },
            120.0,
        )
    }

    #[test]
    fn test_default_bands() {
        let p = policy(0.0);
        assert_eq!(p.band_edges, vec![240.0, 480.0]);
        assert_eq!(lod_for(&p, 0.0), 0);
        assert_eq!(lod_for(&p, 239.9), 0);
        assert_eq!(lod_for(&p, 240.0), 1);
        assert_eq!(lod_for(&p, 479.0), 1);
        assert_eq!(lod_for(&p, 480.0), 2);
        assert_eq!(lod_for(&p, 10_000.0), 2);
    }

    #[test]
    fn test_lod_monotonic() {
        let p = policy(0.0);
        let mut previous = 0;
        for i in 0..2000 {
            let lod = lod_for(&p, i as f32 * 0.5);
            assert!(lod >= previous);
            previous = lod;
        }
    }

    #[test]
    fn test_segments_halve_and_clamp() {
        let p = policy(0.0);
        assert_eq!(segments_for(&p, 0), 120);
        assert_eq!(segments_for(&p, 1), 60);
        assert_eq!(segments_for(&p, 2), 30);
        assert_eq!(segments_for(&p, 4), 8);
        assert_eq!(segments_for(&p, 40), 8);

        for lod in 0..40 {
            assert!(segments_for(&p, lod + 1) <= segments_for(&p, lod));
        }
    }

    #[test]
    fn test_zero_hysteresis_matches_lod_for() {
        let p = policy(0.0);
        for i in 0..600 {
            let d = i as f32;
            for current in [None, Some(0), Some(1), Some(2)] {
                assert_eq!(lod_with_hysteresis(&p, d, current), lod_for(&p, d));
            }
        }
    }

    #[test]
    fn test_hysteresis_holds_near_edge() {
        let p = policy(10.0);

        // Just past the 240 edge: stays fine until 250
        assert_eq!(lod_with_hysteresis(&p, 245.0, Some(0)), 0);
        assert_eq!(lod_with_hysteresis(&p, 250.0, Some(0)), 1);

        // Just inside the edge: stays coarse until below 230
        assert_eq!(lod_with_hysteresis(&p, 235.0, Some(1)), 1);
        assert_eq!(lod_with_hysteresis(&p, 229.0, Some(1)), 0);

        // Fresh chunks take the raw level
        assert_eq!(lod_with_hysteresis(&p, 245.0, None), 1);
    }

    #[test]
    fn test_hysteresis_allows_large_jumps() {
        let p = policy(10.0);
        assert_eq!(lod_with_hysteresis(&p, 1000.0, Some(0)), 2);
        assert_eq!(lod_with_hysteresis(&p, 0.0, Some(2)), 0);
    }
}
