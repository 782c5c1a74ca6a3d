/// Chunk Module - Data-Oriented Programming (DOP) style
///
/// - chunk_data.rs: the chunk record and its geometry buffer
/// - chunk_operations.rs: geometry building and disposal

pub mod chunk_data;
pub mod chunk_operations;

pub use chunk_data::{Chunk, ChunkGeometry};
pub use chunk_operations::{
    build_chunk_geometry, compute_vertex_normals, create_chunk, dispose_chunk,
    grid_indices,
};
