//! Mesh conversion utilities for CPU-side chunk meshes
//! Following DOP principles - pure functions that generate mesh data

use crate::renderer::vertex::Vertex;
use crate::world::chunk::Chunk;
use crate::world::core::GridCoord;
use glam::Vec3;

/// Render-ready copy of a chunk's geometry
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkMesh {
    pub coord: GridCoord,
    /// World-space translation to apply to the local vertices
    pub translation: Vec3,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// Interleave a chunk's geometry into upload-ready vertices
pub fn chunk_mesh(chunk: &Chunk) -> ChunkMesh {
    let geometry = &chunk.geometry;
    let vertices = geometry
        .positions
        .iter()
        .zip(&geometry.normals)
        .map(|(&position, &normal)| Vertex { position, normal })
        .collect();

    ChunkMesh {
        coord: chunk.coord,
        translation: Vec3::new(chunk.origin.x, 0.0, chunk.origin.y),
        vertices,
        indices: geometry.indices.clone(),
    }
}

/// Total triangles in a mesh
pub fn triangle_count(mesh: &ChunkMesh) -> usize {
    mesh.indices.len() / 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LodParams, RoadParams};
    use crate::world::chunk::create_chunk;
    use crate::world::generation::{FlatField, RoadMask};
    use crate::world::lod::create_lod_policy;

    #[test]
    fn test_chunk_mesh_matches_geometry() {
        let policy = create_lod_policy(&LodParams::default(), 120.0);
        let road = RoadMask::new(&RoadParams::default());
        let chunk = create_chunk(
            GridCoord::new(-1, 2),
            120.0,
            2,
            &policy,
            &FlatField { elevation: 3.0 },
            &road,
        );

        let mesh = chunk_mesh(&chunk);
        assert_eq!(mesh.coord, GridCoord::new(-1, 2));
        assert_eq!(mesh.translation, Vec3::new(-120.0, 0.0, 240.0));
        assert_eq!(mesh.vertices.len(), chunk.geometry.positions.len());
        assert_eq!(mesh.indices, chunk.geometry.indices);
        assert_eq!(triangle_count(&mesh), 30 * 30 * 2);
        assert_eq!(mesh.vertices[0].position, chunk.geometry.positions[0]);
        assert_eq!(mesh.vertices[0].normal, chunk.geometry.normals[0]);
    }
}
