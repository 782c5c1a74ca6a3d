//! LOD Policy Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in lod_operations.rs

/// Discrete detail tier; 0 is the finest mesh
pub type LodLevel = u32;

/// Distance-to-detail policy resolved against a concrete chunk size
#[derive(Debug, Clone, PartialEq)]
pub struct LodPolicyData {
    /// Upper distance edge of each band in world units, strictly increasing
    pub band_edges: Vec<f32>,
    pub base_segments: u32,
    pub min_segments: u32,
    /// Distance a chunk must travel past an edge before its LOD changes
    pub hysteresis: f32,
}
