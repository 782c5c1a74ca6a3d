//! Core world data types
//!
//! Grid cells and placement slots shared by every other world module.

mod position;

pub use position::{GridCoord, OccupancyKey};
