/// Placement Module - Data-Oriented Programming (DOP) style
///
/// - placement_data.rs: object records, weight tables, planner state
/// - placement_operations.rs: eligibility, weighted draws, slot claiming

pub mod placement_data;
pub mod placement_operations;

pub use placement_data::{
    ObjectCategory, ObjectInstance, PlacementPlannerData, PoolState, WeightedTable,
};
pub use placement_operations::{
    chunk_rng, chunk_seed, create_planner, create_weighted_table, is_chunk_eligible,
    occupancy_key_for, plan_for_chunk, pools_ready, release_slots, set_pools, weighted_sample,
};
