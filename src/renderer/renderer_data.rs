//! Renderer Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in renderer_operations.rs

use crate::renderer::mesh_utils::ChunkMesh;
use crate::world::core::GridCoord;
use crate::world::placement::ObjectInstance;
use rustc_hash::FxHashMap;

/// In-memory scene that records what a real renderer would hold
#[derive(Debug, Default)]
pub struct RecordingScene {
    pub meshes: FxHashMap<GridCoord, ChunkMesh>,
    pub objects: FxHashMap<GridCoord, Vec<ObjectInstance>>,
    pub total_attached: u64,
    pub total_detached: u64,
}
