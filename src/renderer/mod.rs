/// Renderer Module - Data-Oriented Programming (DOP) style
///
/// Converts streamed chunks into upload-ready meshes and mirrors the
/// active set into a host scene through [`SceneAdapter`].
///
/// - renderer_data.rs: in-memory scene record
/// - renderer_operations.rs: scene synchronisation

pub mod mesh_utils;
pub mod renderer_data;
pub mod renderer_operations;
pub mod scene_adapter;
pub mod vertex;

pub use mesh_utils::{chunk_mesh, triangle_count, ChunkMesh};
pub use renderer_data::RecordingScene;
pub use renderer_operations::{
    create_recording_scene, scene_coords, scene_object_count, scene_triangle_count, scene_vertex_count,
    sync_scene,
};
pub use scene_adapter::SceneAdapter;
pub use vertex::Vertex;
