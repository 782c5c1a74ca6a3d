//! Chunk Manager
//!
//! Owns the active chunk set and reconciles it with the viewpoint once per
//! tick. Per grid cell the lifecycle is `Absent -> Active(lod)`, with a LOD
//! change handled as dispose + recreate, and `Active -> Absent` when the
//! cell leaves the render square.
//!
//! The active set is always the `(2r + 1)^2` Chebyshev square of cells
//! around `floor(viewpoint / chunk_size)`. LOD distances are measured from
//! the center of the viewpoint's cell, so the whole outcome of `update` is
//! a function of that cell: repeating it, or moving inside the cell, does
//! no work.

use crate::config::StreamConfig;
use crate::error::{OptionExt, StreamError, StreamResult};
use crate::world::chunk::{create_chunk, dispose_chunk, Chunk};
use crate::world::core::GridCoord;
use crate::world::generation::{HeightField, HeightSampler, RoadMask};
use crate::world::lod::{create_lod_policy, lod_with_hysteresis, LodLevel, LodPolicyData};
use crate::world::placement::{
    create_planner, plan_for_chunk, pools_ready, release_slots, set_pools, PlacementPlannerData,
};
use glam::{Vec2, Vec3};
use rustc_hash::FxHashMap;

/// Chunk statistics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChunkStats {
    pub active_chunks: usize,
    pub total_created: u64,
    pub total_disposed: u64,
    pub placed_objects: usize,
    pub claimed_slots: usize,
}

/// What one `update` call changed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub center: GridCoord,
    /// Cells that went `Absent -> Active`
    pub created: Vec<GridCoord>,
    /// Cells that went `Active -> Absent`
    pub disposed: Vec<GridCoord>,
    /// Cells rebuilt for a LOD change (disposed and recreated)
    pub rebuilt: Vec<GridCoord>,
    /// Active cells that received decorations once pools became ready
    pub decorated: Vec<GridCoord>,
    /// Builds pushed to a later tick by `max_builds_per_tick`
    pub deferred: Vec<GridCoord>,
}

impl UpdateReport {
    /// Number of chunk creations plus disposals; a rebuild counts as both
    pub fn lifecycle_ops(&self) -> usize {
        self.created.len() + self.disposed.len() + self.rebuilt.len() * 2
    }

    pub fn is_noop(&self) -> bool {
        self.lifecycle_ops() == 0 && self.decorated.is_empty() && self.deferred.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
enum BuildKind {
    Create,
    Rebuild,
}

#[derive(Debug, Clone, Copy)]
struct BuildJob {
    coord: GridCoord,
    lod: LodLevel,
    kind: BuildKind,
    distance: f32,
}

/// Streams chunks around a moving viewpoint
pub struct ChunkManager {
    config: StreamConfig,
    heights: Box<dyn HeightSampler>,
    road: RoadMask,
    lod_policy: LodPolicyData,
    planner: PlacementPlannerData,
    active: FxHashMap<GridCoord, Chunk>,
    center: Option<GridCoord>,
    total_created: u64,
    total_disposed: u64,
}

impl ChunkManager {
    /// Create a manager over the seeded height field from `config.noise`
    pub fn new(config: StreamConfig) -> StreamResult<Self> {
        let heights = Box::new(HeightField::new(config.noise.clone()));
        Self::with_height_sampler(config, heights)
    }

    /// Create a manager over any elevation source
    pub fn with_height_sampler(
        config: StreamConfig,
        heights: Box<dyn HeightSampler>,
    ) -> StreamResult<Self> {
        config.validate()?;

        let road = RoadMask::new(&config.road);
        let lod_policy = create_lod_policy(&config.lod, config.chunk_size);
        let planner = create_planner(
            config.placement.clone(),
            config.road,
            placement_seed(config.noise.seed),
        );

        log::info!(
            "[ChunkManager::new] chunk_size={}, render_distance={}, LOD edges={:?}, build cap={:?}",
            config.chunk_size,
            config.render_distance,
            lod_policy.band_edges,
            config.max_builds_per_tick
        );

        Ok(Self {
            config,
            heights,
            road,
            lod_policy,
            planner,
            active: FxHashMap::default(),
            center: None,
            total_created: 0,
            total_disposed: 0,
        })
    }

    /// Reconcile the active set with the viewpoint. Call once per tick.
    pub fn update(&mut self, viewpoint: Vec3) -> UpdateReport {
        let size = self.config.chunk_size;
        let center = GridCoord::from_world(viewpoint, size);
        let anchor = center.center(size);
        let mut report = UpdateReport {
            center,
            ..Default::default()
        };

        if self.center != Some(center) {
            log::debug!("[ChunkManager::update] Center moved to {}", center);
            self.center = Some(center);
        }

        let desired = self.desired_cells(center);
        let r = self.config.render_distance as u32;

        // Retire everything that left the render square
        let mut stale: Vec<GridCoord> = self
            .active
            .keys()
            .filter(|coord| coord.chebyshev(center) > r)
            .copied()
            .collect();
        stale.sort();
        for coord in stale {
            if let Err(e) = self.dispose_chunk_at(coord) {
                log::warn!("[ChunkManager::update] {}", e);
                continue;
            }
            report.disposed.push(coord);
        }

        // Work out which cells need a (re)build, nearest first
        let viewpoint_xz = Vec2::new(viewpoint.x, viewpoint.z);
        let mut jobs: Vec<BuildJob> = desired
            .iter()
            .filter_map(|&coord| {
                let chunk_center = coord.center(size);
                let current = self.active.get(&coord).map(|chunk| chunk.lod);
                let lod = lod_with_hysteresis(&self.lod_policy, anchor.distance(chunk_center), current);
                let kind = match current {
                    None => BuildKind::Create,
                    Some(existing) if existing != lod => BuildKind::Rebuild,
                    Some(_) => return None,
                };
                Some(BuildJob {
                    coord,
                    lod,
                    kind,
                    distance: viewpoint_xz.distance(chunk_center),
                })
            })
            .collect();
        jobs.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.coord.cmp(&b.coord))
        });

        let cap = self.config.max_builds_per_tick.unwrap_or(usize::MAX);
        for (i, job) in jobs.into_iter().enumerate() {
            if i >= cap {
                report.deferred.push(job.coord);
                continue;
            }

            if let BuildKind::Rebuild = job.kind {
                if let Err(e) = self.dispose_chunk_at(job.coord) {
                    log::warn!("[ChunkManager::update] {}", e);
                    continue;
                }
            }
            if let Err(e) = self.create_chunk_at(job.coord, job.lod) {
                log::warn!("[ChunkManager::update] {}", e);
                continue;
            }

            match job.kind {
                BuildKind::Create => report.created.push(job.coord),
                BuildKind::Rebuild => report.rebuilt.push(job.coord),
            }
        }

        if !report.deferred.is_empty() {
            log::warn!(
                "[ChunkManager::update] Build cap {} reached, deferred {} chunks",
                cap,
                report.deferred.len()
            );
        }

        report.decorated = self.decorate_pending();

        if !report.is_noop() {
            log::debug!(
                "[ChunkManager::update] center={} created={} disposed={} rebuilt={} decorated={} deferred={}",
                center,
                report.created.len(),
                report.disposed.len(),
                report.rebuilt.len(),
                report.decorated.len(),
                report.deferred.len()
            );
        }
        report
    }

    /// Install decorative asset pools. Chunks already on screen are
    /// decorated on the next `update`.
    pub fn set_object_pools(&mut self, common: Vec<String>, rare: Vec<String>) {
        set_pools(&mut self.planner, common, rare);
    }

    pub fn pools_ready(&self) -> bool {
        pools_ready(&self.planner)
    }

    /// Cells of the render square around `center`, row by row
    fn desired_cells(&self, center: GridCoord) -> Vec<GridCoord> {
        let r = self.config.render_distance;
        let side = 2 * r as usize + 1;
        let mut cells = Vec::with_capacity(side * side);
        for dz in -r..=r {
            for dx in -r..=r {
                cells.push(center.offset(dx, dz));
            }
        }
        cells
    }

    /// Build a chunk and register it. An already-active cell is left alone.
    pub(crate) fn create_chunk_at(&mut self, coord: GridCoord, lod: LodLevel) -> StreamResult<()> {
        if self.active.contains_key(&coord) {
            log::warn!(
                "[ChunkManager::create_chunk_at] Chunk {} already active, keeping existing",
                coord
            );
            return Err(StreamError::DuplicateChunk(coord));
        }

        let size = self.config.chunk_size;
        let mut chunk = create_chunk(
            coord,
            size,
            lod,
            &self.lod_policy,
            self.heights.as_ref(),
            &self.road,
        );
        self.decorate(&mut chunk);

        self.active.insert(coord, chunk);
        self.total_created += 1;
        Ok(())
    }

    /// Dispose a chunk's geometry and objects, free its slots, then drop
    /// it from the active map
    pub(crate) fn dispose_chunk_at(&mut self, coord: GridCoord) -> StreamResult<()> {
        let chunk = self
            .active
            .get_mut(&coord)
            .ok_or_stream(|| StreamError::ChunkNotActive(coord))?;

        let released = dispose_chunk(chunk);
        release_slots(&mut self.planner, &released);
        self.active.remove(&coord);
        self.total_disposed += 1;
        Ok(())
    }

    /// Run placement for a chunk if it can be settled now
    fn decorate(&mut self, chunk: &mut Chunk) {
        if !self.pools_ready() {
            return;
        }
        chunk.objects = plan_for_chunk(
            &mut self.planner,
            chunk.coord,
            chunk.size,
            self.heights.as_ref(),
            &self.road,
        );
        chunk.decorated = true;
    }

    /// Decorate chunks that were built before the pools were ready
    fn decorate_pending(&mut self) -> Vec<GridCoord> {
        if !self.pools_ready() {
            return Vec::new();
        }

        let mut pending: Vec<GridCoord> = self
            .active
            .values()
            .filter(|chunk| !chunk.decorated)
            .map(|chunk| chunk.coord)
            .collect();
        pending.sort();

        for coord in &pending {
            if let Some(mut chunk) = self.active.remove(coord) {
                self.decorate(&mut chunk);
                self.active.insert(*coord, chunk);
            }
        }
        pending
    }

    // ------------------------------------------------------------------
    // Accessors for the render collaborator
    // ------------------------------------------------------------------

    pub fn chunk(&self, coord: GridCoord) -> Option<&Chunk> {
        self.active.get(&coord)
    }

    pub fn chunk_checked(&self, coord: GridCoord) -> StreamResult<&Chunk> {
        self.chunk(coord)
            .ok_or_stream(|| StreamError::ChunkNotActive(coord))
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.active.values()
    }

    /// Active cells in sorted order
    pub fn active_coords(&self) -> Vec<GridCoord> {
        let mut coords: Vec<GridCoord> = self.active.keys().copied().collect();
        coords.sort();
        coords
    }

    pub fn is_active(&self, coord: GridCoord) -> bool {
        self.active.contains_key(&coord)
    }

    pub fn occupancy_len(&self) -> usize {
        self.planner.occupied.len()
    }

    /// Cell the last `update` was centered on
    pub fn center(&self) -> Option<GridCoord> {
        self.center
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    pub fn road_mask(&self) -> &RoadMask {
        &self.road
    }

    pub fn stats(&self) -> ChunkStats {
        ChunkStats {
            active_chunks: self.active.len(),
            total_created: self.total_created,
            total_disposed: self.total_disposed,
            placed_objects: self.active.values().map(|c| c.objects.len()).sum(),
            claimed_slots: self.planner.occupied.len(),
        }
    }
}

/// Placement stream seed, kept apart from the terrain noise seed
fn placement_seed(noise_seed: u32) -> u64 {
    let mut hash = (noise_seed as u64).wrapping_add(0x9e37_79b9_7f4a_7c15);
    hash = (hash ^ (hash >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    hash = (hash ^ (hash >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    hash ^ (hash >> 31)
}
