//! Chunk Operations - Pure DOP Functions
//!
//! Geometry construction is deterministic: identical coordinate, size, LOD
//! and height field always produce bit-identical buffers, which is what
//! makes rebuild-on-LOD-change safe.

use super::chunk_data::{Chunk, ChunkGeometry};
use crate::world::core::{GridCoord, OccupancyKey};
use crate::world::generation::{HeightSampler, RoadMask};
use crate::world::lod::{segments_for, LodLevel, LodPolicyData};
use crate::world::placement::occupancy_key_for;
use glam::Vec3;

/// Build a fresh, undecorated chunk
pub fn create_chunk(
    coord: GridCoord,
    size: f32,
    lod: LodLevel,
    policy: &LodPolicyData,
    heights: &dyn HeightSampler,
    road: &RoadMask,
) -> Chunk {
    let geometry = build_chunk_geometry(coord, size, lod, policy, heights, road);
    log::debug!(
        "[create_chunk] Built chunk {} at LOD {} ({} segments, {} vertices)",
        coord,
        lod,
        geometry.segments,
        geometry.positions.len()
    );

    Chunk {
        coord,
        origin: coord.origin(size),
        size,
        lod,
        geometry,
        objects: Vec::new(),
        decorated: false,
        disposed: false,
    }
}

/// Sample the height grid over a chunk footprint, flatten the road, then
/// derive normals from the final heights
pub fn build_chunk_geometry(
    coord: GridCoord,
    size: f32,
    lod: LodLevel,
    policy: &LodPolicyData,
    heights: &dyn HeightSampler,
    road: &RoadMask,
) -> ChunkGeometry {
    let segments = segments_for(policy, lod);
    let row = segments as usize + 1;
    let step = size / segments as f32;
    let origin = coord.origin(size);

    let mut positions = Vec::with_capacity(row * row);
    for i in 0..row {
        let local_z = i as f32 * step;
        for j in 0..row {
            let local_x = j as f32 * step;
            let world_x = origin.x + local_x;
            let world_z = origin.y + local_z;

            let y = if road.is_on_road(world_x, world_z) {
                0.0
            } else {
                heights.sample(world_x, world_z)
            };
            positions.push([local_x, y, local_z]);
        }
    }

    let indices = grid_indices(segments);
    let normals = compute_vertex_normals(&positions, &indices);

    ChunkGeometry {
        segments,
        positions,
        normals,
        indices,
    }
}

/// Triangle list for a `segments x segments` quad grid
pub fn grid_indices(segments: u32) -> Vec<u32> {
    let row = segments + 1;
    let mut indices = Vec::with_capacity((segments * segments * 6) as usize);

    for i in 0..segments {
        for j in 0..segments {
            let a = i * row + j;
            let b = a + row;
            let c = b + 1;
            let d = a + 1;

            indices.extend_from_slice(&[a, b, d]);
            indices.extend_from_slice(&[b, c, d]);
        }
    }

    indices
}

/// Area-weighted vertex normals from a triangle list
pub fn compute_vertex_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut accumulated = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let a = Vec3::from(positions[ia]);
        let b = Vec3::from(positions[ib]);
        let c = Vec3::from(positions[ic]);

        // Unnormalized cross product weights each face by its area
        let face = (b - a).cross(c - a);
        accumulated[ia] += face;
        accumulated[ib] += face;
        accumulated[ic] += face;
    }

    accumulated
        .into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y).to_array())
        .collect()
}

/// Release a chunk's geometry and decorations.
///
/// Returns the occupancy slots its objects held so the caller can free them.
/// A second call is a no-op that returns nothing.
pub fn dispose_chunk(chunk: &mut Chunk) -> Vec<OccupancyKey> {
    if chunk.disposed {
        log::warn!("[dispose_chunk] Chunk {} already disposed", chunk.coord);
        return Vec::new();
    }

    let released: Vec<OccupancyKey> = chunk
        .objects
        .drain(..)
        .map(|object| occupancy_key_for(&object))
        .collect();

    chunk.geometry = ChunkGeometry::default();
    chunk.disposed = true;

    log::debug!(
        "[dispose_chunk] Disposed chunk {} with {} objects",
        chunk.coord,
        released.len()
    );
    released
}
