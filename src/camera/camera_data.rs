//! Camera data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in camera_operations.rs

use serde::{Deserialize, Serialize};

/// Scripted flight along the ring road, used to drive the viewpoint
/// without user input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingFlyoverData {
    /// Inner radius of the ring being followed
    pub ring_inner_radius: f32,

    /// Outer radius of the ring being followed
    pub ring_outer_radius: f32,

    /// Radial offset from the ring's mid radius (negative = inside)
    pub distance_from_ring: f32,

    /// Camera height above the ground plane
    pub height: f32,

    /// Angular speed in radians per millisecond (negative = clockwise)
    pub speed: f32,

    /// How far ahead along the ring the camera looks, in radians
    pub look_ahead: f32,

    /// How far below the camera the look target sits
    pub look_drop: f32,
}

impl Default for RingFlyoverData {
    fn default() -> Self {
        Self {
            ring_inner_radius: 550.0,
            ring_outer_radius: 600.0,
            distance_from_ring: -20.0,
            height: 6.0,
            speed: -0.00005,
            look_ahead: 0.5,
            look_drop: 5.0,
        }
    }
}
