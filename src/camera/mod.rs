/// Camera Module - Data-Oriented Programming (DOP) style
///
/// This module follows pure DOP principles:
/// - camera_data.rs: Pure data structures with NO methods
/// - camera_operations.rs: Pure functions that operate on data
///

pub mod camera_data;
pub mod camera_operations;

// Re-export data structures
pub use camera_data::RingFlyoverData;

// Re-export all operations
pub use camera_operations::{
    // Flyover path
    flyover_angle,
    flyover_look_target,
    flyover_position,
    flyover_radius,

    // Diagnostics
    camera_chunk_position,
    log_camera_context,
};
