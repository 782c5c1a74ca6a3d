//! Default tuning values for the streamed desert.
//!
//! Grouped by concern so config defaults and tests can refer to them by name,
//! e.g. `constants::road::ROAD_RADIUS`.

/// Chunk grid and streaming defaults
pub mod core {
    /// Edge length of one square chunk in world units
    pub const CHUNK_SIZE: f32 = 120.0;

    /// Chebyshev radius (in chunks) kept active around the viewpoint
    pub const RENDER_DISTANCE: i32 = 2;

    /// Largest accepted render distance
    pub const MAX_RENDER_DISTANCE: i32 = 64;

    /// Fixed world seed used when none is configured
    pub const DEFAULT_SEED: u32 = 1337;
}

/// Height-field defaults
pub mod terrain {
    pub const NOISE_FREQUENCY: f32 = 0.03;
    pub const NOISE_AMPLITUDE: f32 = 4.0;
    pub const NOISE_OCTAVES: u32 = 1;
    pub const NOISE_PERSISTENCE: f32 = 0.5;
    pub const NOISE_LACUNARITY: f32 = 2.0;
}

/// Ring road around the world origin
pub mod road {
    /// Distance from the origin to the road centerline
    pub const ROAD_RADIUS: f32 = 600.0;

    /// Full width of the road corridor
    pub const ROAD_WIDTH: f32 = 55.0;
}

/// Level-of-detail defaults
pub mod lod {
    /// Subdivisions per chunk edge at LOD 0 (one per world unit)
    pub const BASE_SEGMENTS: u32 = 120;

    /// Lower bound so coarse chunks never degenerate
    pub const MIN_SEGMENTS: u32 = 8;

    /// Band edges in multiples of the chunk size: LOD 0 below 2x, LOD 1 below 4x
    pub const BAND_MULTIPLES: [f32; 2] = [2.0, 4.0];
}

/// Decoration placement defaults
pub mod placement {
    pub const MAX_OBJECTS_PER_CHUNK: u32 = 6;
    pub const RETRIES_PER_SLOT: u32 = 10;

    /// Spawn band measured from the road centerline, past the half width
    pub const MIN_SPAWN_PAST_EDGE: f32 = 2.0;
    pub const MAX_SPAWN_PAST_EDGE: f32 = 10.0;

    /// Objects sit slightly above the sampled ground
    pub const GROUND_OFFSET: f32 = 0.5;

    pub const COMMON_WEIGHT: f32 = 0.9;
    pub const RARE_WEIGHT: f32 = 0.1;
}
