/// LOD Module - Data-Oriented Programming (DOP) style
///
/// - lod_data.rs: Pure data structures with NO methods
/// - lod_operations.rs: Pure functions that operate on data

pub mod lod_data;
pub mod lod_operations;

pub use lod_data::{LodLevel, LodPolicyData};
pub use lod_operations::{create_lod_policy, lod_for, lod_with_hysteresis, segments_for};
