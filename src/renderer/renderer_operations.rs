//! Renderer Operations - Pure DOP Functions
//!
//! Functions that push chunk lifecycle changes into a scene.

use crate::renderer::mesh_utils::{chunk_mesh, triangle_count};
use crate::renderer::renderer_data::RecordingScene;
use crate::renderer::scene_adapter::SceneAdapter;
use crate::world::core::GridCoord;
use crate::world::management::{ChunkManager, UpdateReport};

/// Apply one tick's lifecycle changes to a scene.
///
/// Disposed and rebuilt chunks are detached first, then created and
/// rebuilt chunks are attached. Chunks decorated after the fact are
/// detached and attached again so their objects appear.
pub fn sync_scene(manager: &ChunkManager, report: &UpdateReport, scene: &mut dyn SceneAdapter) {
    for &coord in report.disposed.iter().chain(&report.rebuilt) {
        scene.detach_chunk(coord);
    }

    for &coord in report.created.iter().chain(&report.rebuilt) {
        attach(manager, coord, scene);
    }

    for &coord in &report.decorated {
        scene.detach_chunk(coord);
        attach(manager, coord, scene);
    }
}

fn attach(manager: &ChunkManager, coord: GridCoord, scene: &mut dyn SceneAdapter) {
    match manager.chunk_checked(coord) {
        Ok(chunk) => scene.attach_chunk(chunk_mesh(chunk), &chunk.objects),
        Err(e) => log::warn!("[sync_scene] {}", e),
    }
}

pub fn create_recording_scene() -> RecordingScene {
    RecordingScene::default()
}

/// Attached chunk coordinates, sorted
pub fn scene_coords(scene: &RecordingScene) -> Vec<GridCoord> {
    let mut coords: Vec<GridCoord> = scene.meshes.keys().copied().collect();
    coords.sort();
    coords
}

pub fn scene_object_count(scene: &RecordingScene) -> usize {
    scene.objects.values().map(Vec::len).sum()
}

pub fn scene_vertex_count(scene: &RecordingScene) -> usize {
    scene.meshes.values().map(|mesh| mesh.vertices.len()).sum()
}

pub fn scene_triangle_count(scene: &RecordingScene) -> usize {
    scene.meshes.values().map(triangle_count).sum()
}
