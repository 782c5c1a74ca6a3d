//! World management: the chunk streaming manager

mod chunk_manager;

pub use chunk_manager::{ChunkManager, ChunkStats, UpdateReport};
