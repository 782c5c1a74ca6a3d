//! Scene adapter
//!
//! The streaming core never talks to a graphics API. A renderer implements
//! [`SceneAdapter`] and is driven by [`sync_scene`](super::sync_scene)
//! after every `ChunkManager::update`.

use crate::renderer::mesh_utils::ChunkMesh;
use crate::renderer::renderer_data::RecordingScene;
use crate::world::core::GridCoord;
use crate::world::placement::ObjectInstance;

pub trait SceneAdapter {
    /// Add a chunk's mesh and decorations to the scene
    fn attach_chunk(&mut self, mesh: ChunkMesh, objects: &[ObjectInstance]);

    /// Remove everything previously attached for `coord`
    fn detach_chunk(&mut self, coord: GridCoord);
}

impl SceneAdapter for RecordingScene {
    fn attach_chunk(&mut self, mesh: ChunkMesh, objects: &[ObjectInstance]) {
        let coord = mesh.coord;
        if self.meshes.insert(coord, mesh).is_some() {
            log::warn!(
                "[RecordingScene::attach_chunk] Chunk {} was already attached, replacing",
                coord
            );
        }
        self.objects.insert(coord, objects.to_vec());
        self.total_attached += 1;
    }

    fn detach_chunk(&mut self, coord: GridCoord) {
        if self.meshes.remove(&coord).is_none() {
            log::warn!(
                "[RecordingScene::detach_chunk] Chunk {} was not attached",
                coord
            );
            return;
        }
        self.objects.remove(&coord);
        self.total_detached += 1;
    }
}
