//! Camera operations - Pure DOP functions
//!
//! All functions are pure: they take data, return new data, no side effects.

use super::camera_data::RingFlyoverData;
use crate::world::core::GridCoord;
use glam::Vec3;

/// Radius of the circle the camera actually flies
pub fn flyover_radius(data: &RingFlyoverData) -> f32 {
    (data.ring_inner_radius + data.ring_outer_radius) * 0.5 + data.distance_from_ring
}

/// Angle along the ring after `time_ms` milliseconds
pub fn flyover_angle(data: &RingFlyoverData, time_ms: f64) -> f32 {
    (time_ms * data.speed as f64) as f32
}

/// Camera position after `time_ms` milliseconds
pub fn flyover_position(data: &RingFlyoverData, time_ms: f64) -> Vec3 {
    let radius = flyover_radius(data);
    let angle = flyover_angle(data, time_ms);
    Vec3::new(radius * angle.cos(), data.height, radius * angle.sin())
}

/// Point the camera looks at: further along the ring and slightly lower
pub fn flyover_look_target(data: &RingFlyoverData, time_ms: f64) -> Vec3 {
    let radius = flyover_radius(data);
    let angle = flyover_angle(data, time_ms) + data.look_ahead;
    Vec3::new(
        radius * angle.cos(),
        data.height - data.look_drop,
        radius * angle.sin(),
    )
}

/// Grid cell under the camera
pub fn camera_chunk_position(position: Vec3, chunk_size: f32) -> GridCoord {
    GridCoord::from_world(position, chunk_size)
}

/// Log camera state for debugging
pub fn log_camera_context(position: Vec3, chunk_size: f32) {
    log::debug!(
        "[Camera] position=({:.1}, {:.1}, {:.1}) chunk={}",
        position.x,
        position.y,
        position.z,
        camera_chunk_position(position, chunk_size)
    );
}
