// Dune Stream - Data-Oriented Programming (DOP) Architecture
//
// Procedural terrain streaming around a moving viewpoint:
// - world::management::ChunkManager owns the active chunk set
// - world::*_operations modules hold the pure transformations
// - renderer mirrors lifecycle changes into a host scene

// Constants module
pub mod constants;

// Core modules
pub mod config;
pub mod error;

// Essential systems
pub mod camera;
pub mod renderer;
pub mod world;

pub use config::{
    load_config, LodParams, NoiseParams, PlacementParams, RoadParams, StreamConfig,
};
pub use error::{OptionExt, StreamError, StreamResult};

// === Core World Types ===
pub use world::{
    Chunk, ChunkGeometry, ChunkManager, ChunkStats, FlatField, GridCoord, HeightField,
    HeightSampler, LodLevel, LodPolicyData, ObjectCategory, ObjectInstance, OccupancyKey,
    PoolState, RoadMask, UpdateReport,
};

pub use camera::RingFlyoverData;
pub use renderer::{chunk_mesh, sync_scene, ChunkMesh, RecordingScene, SceneAdapter, Vertex};
