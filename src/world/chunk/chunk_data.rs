//! Chunk Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in chunk_operations.rs

use crate::world::core::GridCoord;
use crate::world::lod::LodLevel;
use crate::world::placement::ObjectInstance;
use glam::Vec2;

/// Height-sampled grid mesh for one chunk.
///
/// `(segments + 1)^2` vertices laid out row by row along +Z, each row
/// running along +X. Positions are relative to the chunk origin.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChunkGeometry {
    pub segments: u32,
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    /// Two counter-clockwise (+Y facing) triangles per grid quad
    pub indices: Vec<u32>,
}

/// One streamed terrain tile and the decorations it owns
#[derive(Debug, Clone)]
pub struct Chunk {
    pub coord: GridCoord,
    /// Minimum corner of the footprint in world units
    pub origin: Vec2,
    pub size: f32,
    pub lod: LodLevel,
    pub geometry: ChunkGeometry,
    pub objects: Vec<ObjectInstance>,
    /// Set once placement has run (or been ruled out) for this chunk
    pub decorated: bool,
    pub disposed: bool,
}
