//! Placement Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in placement_operations.rs

use crate::config::{PlacementParams, RoadParams};
use crate::world::core::{GridCoord, OccupancyKey};
use glam::Vec3;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Decoration tier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectCategory {
    Common,
    Rare,
}

/// One placed decoration, owned by the chunk whose footprint contains it
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectInstance {
    pub category: ObjectCategory,
    /// Asset identifier drawn from the category's pool
    pub asset: String,
    pub position: Vec3,
    /// Rotation around +Y in radians
    pub yaw: f32,
    pub owner: GridCoord,
}

/// Explicit weight table for a single weighted draw
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedTable<T> {
    pub entries: Vec<(T, f32)>,
    pub total_weight: f32,
}

/// Decorative asset pools; `NotReady` until the host has loaded assets
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PoolState {
    #[default]
    NotReady,
    Ready {
        common: Vec<String>,
        rare: Vec<String>,
    },
}

/// Planner state: static params plus the global occupancy set
#[derive(Debug, Clone)]
pub struct PlacementPlannerData {
    pub params: PlacementParams,
    pub road: RoadParams,
    pub seed: u64,
    pub categories: WeightedTable<ObjectCategory>,
    pub pools: PoolState,
    /// Every slot currently held by a live object
    pub occupied: FxHashSet<OccupancyKey>,
}
