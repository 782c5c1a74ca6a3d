//! Placement Operations
//!
//! Decorations are scattered in a band just outside the road corridor.
//! Every chunk gets its own RNG stream derived from the world seed and its
//! grid cell, so a region that streams out and back in is decorated the
//! same way again.

use super::placement_data::{
    ObjectCategory, ObjectInstance, PlacementPlannerData, PoolState, WeightedTable,
};
use crate::config::{PlacementParams, RoadParams};
use crate::world::core::{GridCoord, OccupancyKey};
use crate::world::generation::{HeightSampler, RoadMask};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use std::f32::consts::{PI, TAU};

// ============================================================================
// WEIGHTED SAMPLING
// ============================================================================

/// Build a weight table. Negative weights are treated as zero.
pub fn create_weighted_table<T>(entries: Vec<(T, f32)>) -> WeightedTable<T> {
    let entries: Vec<(T, f32)> = entries
        .into_iter()
        .map(|(value, weight)| (value, weight.max(0.0)))
        .collect();
    let total_weight = entries.iter().map(|(_, w)| w).sum();
    WeightedTable {
        entries,
        total_weight,
    }
}

/// Single weighted draw; `None` when the table has no positive weight
pub fn weighted_sample<'a, T, R: Rng + ?Sized>(
    table: &'a WeightedTable<T>,
    rng: &mut R,
) -> Option<&'a T> {
    if table.total_weight <= 0.0 {
        return None;
    }

    let mut roll = rng.gen::<f32>() * table.total_weight;
    let mut last_positive = None;
    for (value, weight) in &table.entries {
        if *weight <= 0.0 {
            continue;
        }
        if roll < *weight {
            return Some(value);
        }
        roll -= weight;
        last_positive = Some(value);
    }

    // Float rounding can leave a sliver past the final entry
    last_positive
}

// ============================================================================
// PLANNER STATE
// ============================================================================

/// Create a planner with no asset pools and an empty occupancy set
pub fn create_planner(params: PlacementParams, road: RoadParams, seed: u64) -> PlacementPlannerData {
    let categories = create_weighted_table(vec![
        (ObjectCategory::Common, params.common_weight),
        (ObjectCategory::Rare, params.rare_weight),
    ]);

    PlacementPlannerData {
        params,
        road,
        seed,
        categories,
        pools: PoolState::NotReady,
        occupied: FxHashSet::default(),
    }
}

/// Install asset pools; placement starts on the next planned chunk
pub fn set_pools(planner: &mut PlacementPlannerData, common: Vec<String>, rare: Vec<String>) {
    if common.is_empty() && rare.is_empty() {
        log::warn!("[set_pools] Both decoration pools are empty, placement stays off");
        planner.pools = PoolState::NotReady;
        return;
    }
    log::info!(
        "[set_pools] Decoration pools ready: {} common, {} rare",
        common.len(),
        rare.len()
    );
    planner.pools = PoolState::Ready { common, rare };
}

/// Ready once at least one pool has an asset to hand out
pub fn pools_ready(planner: &PlacementPlannerData) -> bool {
    match &planner.pools {
        PoolState::NotReady => false,
        PoolState::Ready { common, rare } => !common.is_empty() || !rare.is_empty(),
    }
}

/// Free the slots of disposed objects
pub fn release_slots(planner: &mut PlacementPlannerData, keys: &[OccupancyKey]) {
    for key in keys {
        if !planner.occupied.remove(key) {
            log::warn!("[release_slots] Slot {} was not claimed", key);
        }
    }
}

pub fn occupancy_key_for(object: &ObjectInstance) -> OccupancyKey {
    OccupancyKey::from_world(object.position.x, object.position.z)
}

// ============================================================================
// ELIGIBILITY AND PLACEMENT
// ============================================================================

/// Whether a chunk's center lies in the band straddling the road corridor
pub fn is_chunk_eligible(planner: &PlacementPlannerData, coord: GridCoord, size: f32) -> bool {
    let distance = coord.center(size).length();
    let low = planner.road.inner_edge() - planner.params.inner_margin;
    let high = planner.road.outer_edge() + planner.params.outer_margin;
    distance >= low && distance <= high
}

/// Seed for one chunk's placement stream.
///
/// splitmix64-style mixing over fixed-width integers, so the same world seed
/// and cell give the same stream on every platform.
pub fn chunk_seed(world_seed: u64, coord: GridCoord) -> u64 {
    let mut hash = world_seed;

    hash = hash.wrapping_add(coord.x as u32 as u64);
    hash ^= hash >> 30;
    hash = hash.wrapping_mul(0xbf58476d1ce4e5b9);

    hash = hash.wrapping_add(coord.z as u32 as u64);
    hash ^= hash >> 27;
    hash = hash.wrapping_mul(0x94d049bb133111eb);

    hash ^ (hash >> 31)
}

/// Deterministic RNG stream for one chunk
pub fn chunk_rng(seed: u64, coord: GridCoord) -> StdRng {
    StdRng::seed_from_u64(chunk_seed(seed, coord))
}

/// Place decorations for one chunk and claim their slots.
///
/// Runs at most `max_objects_per_chunk` slots, each with at most
/// `retries_per_slot` candidates. Returns nothing for ineligible chunks or
/// while the pools are not ready.
pub fn plan_for_chunk(
    planner: &mut PlacementPlannerData,
    coord: GridCoord,
    size: f32,
    heights: &dyn HeightSampler,
    road: &RoadMask,
) -> Vec<ObjectInstance> {
    if !pools_ready(planner) || !is_chunk_eligible(planner, coord, size) {
        return Vec::new();
    }

    let (common, rare) = match &planner.pools {
        PoolState::NotReady => return Vec::new(),
        PoolState::Ready { common, rare } => (common.clone(), rare.clone()),
    };

    let mut rng = chunk_rng(planner.seed, coord);
    let origin = coord.origin(size);
    let (center_angle, span_lo, span_hi) = angular_span(origin, size);
    let params = planner.params.clone();
    let mut placed = Vec::new();

    for slot in 0..params.max_objects_per_chunk {
        for attempt in 0..params.retries_per_slot {
            let angle = center_angle + span_lo + rng.gen::<f32>() * (span_hi - span_lo);
            let side = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            let offset = params.min_spawn_distance
                + rng.gen::<f32>() * (params.max_spawn_distance - params.min_spawn_distance);
            let radius = planner.road.road_radius + side * offset;
            let x = angle.cos() * radius;
            let z = angle.sin() * radius;

            if !in_footprint(origin, size, x, z) {
                log::trace!("[plan_for_chunk] {} slot {} attempt {}: outside footprint", coord, slot, attempt);
                continue;
            }
            if road.is_on_road(x, z) {
                log::trace!("[plan_for_chunk] {} slot {} attempt {}: on road", coord, slot, attempt);
                continue;
            }
            let key = OccupancyKey::from_world(x, z);
            if planner.occupied.contains(&key) {
                log::trace!("[plan_for_chunk] {} slot {} attempt {}: slot {} taken", coord, slot, attempt, key);
                continue;
            }

            // Accepted position: the slot resolves here whether or not the
            // chosen category has assets to offer
            let Some(&category) = weighted_sample(&planner.categories, &mut rng) else {
                break;
            };
            let pool = match category {
                ObjectCategory::Common => &common,
                ObjectCategory::Rare => &rare,
            };
            if pool.is_empty() {
                break;
            }

            let asset = pool[rng.gen_range(0..pool.len())].clone();
            let yaw = rng.gen::<f32>() * TAU;
            let y = heights.sample(x, z) + params.ground_offset;

            planner.occupied.insert(key);
            placed.push(ObjectInstance {
                category,
                asset,
                position: Vec3::new(x, y, z),
                yaw,
                owner: coord,
            });
            break;
        }
    }

    if !placed.is_empty() {
        log::debug!("[plan_for_chunk] Placed {} objects in chunk {}", placed.len(), coord);
    }
    placed
}

/// Angular extent of a footprint seen from the world origin, as
/// `(center_angle, lo, hi)` with `lo..hi` relative to the center angle
fn angular_span(origin: Vec2, size: f32) -> (f32, f32, f32) {
    let contains_origin =
        origin.x <= 0.0 && origin.x + size >= 0.0 && origin.y <= 0.0 && origin.y + size >= 0.0;
    if contains_origin {
        return (0.0, -PI, PI);
    }

    let center = origin + Vec2::splat(size * 0.5);
    let center_angle = center.y.atan2(center.x);
    let corners = [
        origin,
        origin + Vec2::new(size, 0.0),
        origin + Vec2::new(0.0, size),
        origin + Vec2::splat(size),
    ];

    let mut lo = 0.0f32;
    let mut hi = 0.0f32;
    for corner in corners {
        let delta = wrap_angle(corner.y.atan2(corner.x) - center_angle);
        lo = lo.min(delta);
        hi = hi.max(delta);
    }
    (center_angle, lo, hi)
}

fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

fn in_footprint(origin: Vec2, size: f32, x: f32, z: f32) -> bool {
    x >= origin.x && x < origin.x + size && z >= origin.y && z < origin.y + size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::generation::FlatField;

    const SIZE: f32 = 120.0;

    fn planner() -> PlacementPlannerData {
        create_planner(PlacementParams::default(), RoadParams::default(), 7)
    }

    fn ready_planner() -> PlacementPlannerData {
        let mut p = planner();
        set_pools(
            &mut p,
            vec!["cactus_a".to_string(), "cactus_b".to_string()],
            vec!["skull".to_string()],
        );
        p
    }

    fn road() -> RoadMask {
        RoadMask::new(&RoadParams::default())
    }

    /// Cells whose footprint touches the outer spawn band on the +X axis
    fn band_cells() -> Vec<GridCoord> {
        (-8..8)
            .flat_map(|x| (-8..8).map(move |z| GridCoord::new(x, z)))
            .collect()
    }

    #[test]
    fn test_weighted_sample_distribution() {
        let table = create_weighted_table(vec![
            (ObjectCategory::Common, 0.9),
            (ObjectCategory::Rare, 0.1),
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 20_000;
        let rare = (0..draws)
            .filter(|_| weighted_sample(&table, &mut rng) == Some(&ObjectCategory::Rare))
            .count();
        let fraction = rare as f32 / draws as f32;
        assert!((fraction - 0.1).abs() < 0.02, "rare fraction {}", fraction);
    }

    #[test]
    fn test_weighted_sample_skips_zero_weight() {
        let table = create_weighted_table(vec![("never", 0.0), ("always", 2.0), ("neg", -1.0)]);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            assert_eq!(weighted_sample(&table, &mut rng), Some(&"always"));
        }
    }

    #[test]
    fn test_weighted_sample_empty_table() {
        let table: WeightedTable<u8> = create_weighted_table(vec![]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(weighted_sample(&table, &mut rng), None);
    }

    #[test]
    fn test_eligibility_band() {
        let p = planner();
        // Center (60, 60) is near the origin, far inside the ring
        assert!(!is_chunk_eligible(&p, GridCoord::new(0, 0), SIZE));
        // Center (540, 60): distance ~543, inside [452.5, 747.5]
        assert!(is_chunk_eligible(&p, GridCoord::new(4, 0), SIZE));
        // Center (660, 60): ~663
        assert!(is_chunk_eligible(&p, GridCoord::new(5, 0), SIZE));
        // Center (1020, 60): far outside
        assert!(!is_chunk_eligible(&p, GridCoord::new(8, 0), SIZE));
    }

    #[test]
    fn test_not_ready_places_nothing() {
        let mut p = planner();
        let placed = plan_for_chunk(&mut p, GridCoord::new(4, 0), SIZE, &FlatField::default(), &road());
        assert!(placed.is_empty());
        assert!(p.occupied.is_empty());
    }

    #[test]
    fn test_empty_pools_place_nothing() {
        let mut p = planner();
        set_pools(&mut p, Vec::new(), Vec::new());
        assert!(!pools_ready(&p));
        assert_eq!(p.pools, PoolState::NotReady);
        for coord in band_cells() {
            assert!(plan_for_chunk(&mut p, coord, SIZE, &FlatField::default(), &road()).is_empty());
        }
        assert!(p.occupied.is_empty());
    }

    #[test]
    fn test_one_filled_pool_is_ready() {
        let mut p = planner();
        set_pools(&mut p, vec!["cactus".to_string()], Vec::new());
        assert!(pools_ready(&p));

        p.pools = PoolState::Ready {
            common: Vec::new(),
            rare: Vec::new(),
        };
        assert!(!pools_ready(&p));
    }

    #[test]
    fn test_chunk_seed_is_fixed_width() {
        // Pinned so decorations match across pointer widths
        assert_eq!(chunk_seed(0, GridCoord::new(0, 0)), 0);
        let a = chunk_seed(7, GridCoord::new(5, -3));
        assert_eq!(a, 0x0a97_7c7d_9fe0_100d);
        assert_ne!(a, chunk_seed(7, GridCoord::new(-3, 5)));
        assert_ne!(a, chunk_seed(8, GridCoord::new(5, -3)));
        assert_ne!(chunk_seed(7, GridCoord::new(-1, 0)), chunk_seed(7, GridCoord::new(0, -1)));
    }

    #[test]
    fn test_ineligible_chunk_places_nothing() {
        let mut p = ready_planner();
        let placed = plan_for_chunk(&mut p, GridCoord::new(0, 0), SIZE, &FlatField::default(), &road());
        assert!(placed.is_empty());
    }

    #[test]
    fn test_placed_objects_respect_constraints() {
        let mut p = ready_planner();
        let mask = road();
        let field = FlatField { elevation: 1.5 };
        let mut all = Vec::new();

        for coord in band_cells() {
            let placed = plan_for_chunk(&mut p, coord, SIZE, &field, &mask);
            assert!(placed.len() <= p.params.max_objects_per_chunk as usize);
            let origin = coord.origin(SIZE);
            for object in &placed {
                let (x, z) = (object.position.x, object.position.z);
                assert!(!mask.is_on_road(x, z));
                assert!(in_footprint(origin, SIZE, x, z));
                assert_eq!(object.owner, coord);
                assert_eq!(object.position.y, 2.0);

                let from_centerline = ((x * x + z * z).sqrt() - 600.0).abs();
                assert!(from_centerline >= p.params.min_spawn_distance - 1e-2);
                assert!(from_centerline <= p.params.max_spawn_distance + 1e-2);
            }
            all.extend(placed);
        }

        assert!(!all.is_empty());
        let keys: FxHashSet<OccupancyKey> = all.iter().map(occupancy_key_for).collect();
        assert_eq!(keys.len(), all.len());
        assert_eq!(p.occupied.len(), all.len());
    }

    #[test]
    fn test_release_slots_frees_keys() {
        let mut p = ready_planner();
        let mut placed = Vec::new();
        for coord in band_cells() {
            placed.extend(plan_for_chunk(&mut p, coord, SIZE, &FlatField::default(), &road()));
        }
        let keys: Vec<OccupancyKey> = placed.iter().map(occupancy_key_for).collect();
        release_slots(&mut p, &keys);
        assert!(p.occupied.is_empty());
    }

    #[test]
    fn test_replanning_is_reproducible() {
        let coord = band_cells()
            .into_iter()
            .find(|&c| {
                let mut p = ready_planner();
                !plan_for_chunk(&mut p, c, SIZE, &FlatField::default(), &road()).is_empty()
            })
            .unwrap();

        let mut p = ready_planner();
        let first = plan_for_chunk(&mut p, coord, SIZE, &FlatField::default(), &road());
        let keys: Vec<OccupancyKey> = first.iter().map(occupancy_key_for).collect();
        release_slots(&mut p, &keys);
        let second = plan_for_chunk(&mut p, coord, SIZE, &FlatField::default(), &road());
        assert_eq!(first, second);
    }

    #[test]
    fn test_claimed_slots_are_not_reused() {
        let coord = GridCoord::new(5, 0);
        let mut p = ready_planner();
        let first = plan_for_chunk(&mut p, coord, SIZE, &FlatField::default(), &road());

        // Same RNG stream against an occupied set: none of the first batch's
        // slots can be handed out again
        let second = plan_for_chunk(&mut p, coord, SIZE, &FlatField::default(), &road());
        for object in &second {
            assert!(!first.iter().any(|o| occupancy_key_for(o) == occupancy_key_for(object)));
        }
    }

    #[test]
    fn test_angular_span_covers_footprint() {
        let (center, lo, hi) = angular_span(Vec2::new(480.0, 0.0), SIZE);
        assert!(lo < 0.0 && hi > 0.0);
        let min_corner = 0.0f32;
        let max_corner = 120.0f32.atan2(480.0);
        assert!((center + lo - min_corner).abs() < 1e-4);
        assert!((center + hi - max_corner).abs() < 1e-4);

        // Footprint straddling the -X axis wraps through ±π
        let (center, lo, hi) = angular_span(Vec2::new(-600.0, -60.0), SIZE);
        assert!(hi - lo < PI);
        assert!(center.abs() > 3.0);

        assert_eq!(angular_span(Vec2::new(-60.0, -60.0), SIZE), (0.0, -PI, PI));
    }
}
