//! Terrain generation: the height field and the road corridor mask

mod height_field;
mod road_mask;

pub use height_field::{FlatField, HeightField, HeightSampler};
pub use road_mask::RoadMask;
