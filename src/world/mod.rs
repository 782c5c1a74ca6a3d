//! Streamed Desert World
//!
//! This module holds the logical world: chunks, their geometry and the
//! decorations placed on them. Nothing here knows how it is drawn.
//!
//! # Architecture Overview
//!
//! - **Core**: Grid cells and placement slots
//! - **Generation**: Height field and road corridor mask
//! - **Lod**: Distance-to-detail policy
//! - **Chunk**: Chunk records, geometry building and disposal
//! - **Placement**: Decoration planner and global occupancy set
//! - **Management**: Per-tick streaming of the active chunk set

pub mod chunk;
pub mod core;
pub mod generation;
pub mod lod;
pub mod management;
pub mod placement;

// Re-export core types for convenience
pub use self::core::{GridCoord, OccupancyKey};

pub use chunk::{Chunk, ChunkGeometry};
pub use generation::{FlatField, HeightField, HeightSampler, RoadMask};
pub use lod::{LodLevel, LodPolicyData};
pub use management::{ChunkManager, ChunkStats, UpdateReport};
pub use placement::{ObjectCategory, ObjectInstance, PoolState};
