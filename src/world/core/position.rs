use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer cell on the chunk grid.
///
/// A chunk's footprint spans `[origin, origin + chunk_size]` on both
/// horizontal axes, where `origin = (x, z) * chunk_size`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    pub x: i32,
    pub z: i32,
}

impl GridCoord {
    /// Largest cell index on either axis; far-away positions clamp here
    pub const MAX_CELL: i32 = 1 << 30;

    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Cell containing a world position; only the horizontal plane is used.
    /// Indices are clamped to `±MAX_CELL` and a NaN axis maps to 0.
    pub fn from_world(position: Vec3, chunk_size: f32) -> Self {
        Self {
            x: cell_index(position.x / chunk_size),
            z: cell_index(position.z / chunk_size),
        }
    }

    /// Minimum corner of the footprint in world units
    pub fn origin(&self, chunk_size: f32) -> Vec2 {
        Vec2::new(self.x as f32 * chunk_size, self.z as f32 * chunk_size)
    }

    pub fn center(&self, chunk_size: f32) -> Vec2 {
        self.origin(chunk_size) + Vec2::splat(chunk_size * 0.5)
    }

    pub fn offset(&self, dx: i32, dz: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.z.saturating_add(dz))
    }

    /// Chebyshev distance in cells
    pub fn chebyshev(&self, other: GridCoord) -> u32 {
        self.x.abs_diff(other.x).max(self.z.abs_diff(other.z))
    }
}

fn cell_index(cells: f32) -> i32 {
    let limit = GridCoord::MAX_CELL as f32;
    cells.floor().clamp(-limit, limit) as i32
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Discretized placement slot, `(floor(x), floor(z))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OccupancyKey {
    pub x: i64,
    pub z: i64,
}

impl OccupancyKey {
    pub fn from_world(x: f32, z: f32) -> Self {
        Self {
            x: x.floor() as i64,
            z: z.floor() as i64,
        }
    }
}

impl fmt::Display for OccupancyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_world_floors_negative() {
        assert_eq!(GridCoord::from_world(Vec3::new(0.0, 50.0, 0.0), 120.0), GridCoord::new(0, 0));
        assert_eq!(GridCoord::from_world(Vec3::new(119.9, 0.0, 0.1), 120.0), GridCoord::new(0, 0));
        assert_eq!(GridCoord::from_world(Vec3::new(-0.1, 0.0, -120.0), 120.0), GridCoord::new(-1, -1));
        assert_eq!(GridCoord::from_world(Vec3::new(240.0, 0.0, -121.0), 120.0), GridCoord::new(2, -2));
    }

    #[test]
    fn test_from_world_clamps_far_positions() {
        let far = GridCoord::from_world(Vec3::new(1.0e12, 0.0, -1.0e12), 120.0);
        assert_eq!(far, GridCoord::new(GridCoord::MAX_CELL, -GridCoord::MAX_CELL));

        let inf = GridCoord::from_world(Vec3::new(f32::INFINITY, 0.0, f32::NEG_INFINITY), 120.0);
        assert_eq!(inf, far);

        let nan = GridCoord::from_world(Vec3::new(f32::NAN, 0.0, 5.0), 120.0);
        assert_eq!(nan, GridCoord::new(0, 0));
    }

    #[test]
    fn test_offset_and_chebyshev_do_not_overflow() {
        let edge = GridCoord::new(i32::MAX, i32::MIN);
        assert_eq!(edge.offset(1, -1), edge);
        assert_eq!(edge.chebyshev(GridCoord::new(i32::MIN, i32::MAX)), u32::MAX);
    }

    #[test]
    fn test_origin_and_center() {
        let coord = GridCoord::new(-2, 1);
        assert_eq!(coord.origin(120.0), Vec2::new(-240.0, 120.0));
        assert_eq!(coord.center(120.0), Vec2::new(-180.0, 180.0));
    }

    #[test]
    fn test_chebyshev() {
        let a = GridCoord::new(0, 0);
        assert_eq!(a.chebyshev(GridCoord::new(2, -1)), 2);
        assert_eq!(a.chebyshev(GridCoord::new(-3, 3)), 3);
    }

    #[test]
    fn test_occupancy_key() {
        assert_eq!(OccupancyKey::from_world(3.7, -0.2), OccupancyKey { x: 3, z: -1 });
        assert_eq!(OccupancyKey::from_world(3.7, -0.2).to_string(), "3,-1");
    }
}
