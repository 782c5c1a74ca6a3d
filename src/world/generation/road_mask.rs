//! Ring road corridor predicate

use crate::config::RoadParams;

/// Tests planar positions against the road annulus around the origin
#[derive(Debug, Clone, Copy)]
pub struct RoadMask {
    inner_edge: f32,
    outer_edge: f32,
}

impl RoadMask {
    pub fn new(road: &RoadParams) -> Self {
        Self {
            inner_edge: road.inner_edge(),
            outer_edge: road.outer_edge(),
        }
    }

    /// True iff the distance from the origin lies in `[inner_edge, outer_edge]`
    pub fn is_on_road(&self, x: f32, z: f32) -> bool {
        let distance = (x * x + z * z).sqrt();
        distance >= self.inner_edge && distance <= self.outer_edge
    }

    pub fn inner_edge(&self) -> f32 {
        self.inner_edge
    }

    pub fn outer_edge(&self) -> f32 {
        self.outer_edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask() -> RoadMask {
        RoadMask::new(&RoadParams {
            road_radius: 600.0,
            road_width: 55.0,
        })
    }

    #[test]
    fn test_centerline_is_on_road() {
        let mask = mask();
        assert!(mask.is_on_road(600.0, 0.0));
        assert!(mask.is_on_road(0.0, -600.0));
        let d = 600.0 / 2f32.sqrt();
        assert!(mask.is_on_road(d, d));
    }

    #[test]
    fn test_origin_is_off_road() {
        assert!(!mask().is_on_road(0.0, 0.0));
    }

    #[test]
    fn test_edges_inclusive() {
        let mask = mask();
        assert!(mask.is_on_road(572.5, 0.0));
        assert!(mask.is_on_road(0.0, 627.5));
        assert!(!mask.is_on_road(572.0, 0.0));
        assert!(!mask.is_on_road(628.0, 0.0));
    }
}
