//! Static configuration for the streaming core
//!
//! Everything here is fixed at construction. `RoadParams` in particular is
//! shared read-only by the road mask, the chunk builder and the placement
//! planner; nothing mutates it after validation.

use crate::constants;
use crate::error::{StreamError, StreamResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Layered noise parameters for the height field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams {
    pub seed: u32,
    /// Base frequency (lower = broader dunes)
    pub frequency: f32,
    /// Elevation scale of the first octave
    pub amplitude: f32,
    pub octaves: u32,
    /// Amplitude decay per octave
    pub persistence: f32,
    /// Frequency multiplier per octave
    pub lacunarity: f32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            seed: constants::core::DEFAULT_SEED,
            frequency: constants::terrain::NOISE_FREQUENCY,
            amplitude: constants::terrain::NOISE_AMPLITUDE,
            octaves: constants::terrain::NOISE_OCTAVES,
            persistence: constants::terrain::NOISE_PERSISTENCE,
            lacunarity: constants::terrain::NOISE_LACUNARITY,
        }
    }
}

/// The ring road: an annulus of `road_width` centered on `road_radius`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadParams {
    pub road_radius: f32,
    pub road_width: f32,
}

impl RoadParams {
    pub fn half_width(&self) -> f32 {
        self.road_width * 0.5
    }

    /// Inner edge of the corridor
    pub fn inner_edge(&self) -> f32 {
        self.road_radius - self.half_width()
    }

    /// Outer edge of the corridor
    pub fn outer_edge(&self) -> f32 {
        self.road_radius + self.half_width()
    }
}

impl Default for RoadParams {
    fn default() -> Self {
        Self {
            road_radius: constants::road::ROAD_RADIUS,
            road_width: constants::road::ROAD_WIDTH,
        }
    }
}

/// Distance bands and mesh resolution per LOD
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LodParams {
    pub base_segments: u32,
    pub min_segments: u32,
    /// Upper edge of each LOD band, in multiples of the chunk size.
    /// Distances past the last edge map to `band_multiples.len()`.
    pub band_multiples: Vec<f32>,
    /// Extra distance required before switching LOD; 0 disables hysteresis
    pub hysteresis: f32,
}

impl Default for LodParams {
    fn default() -> Self {
        Self {
            base_segments: constants::lod::BASE_SEGMENTS,
            min_segments: constants::lod::MIN_SEGMENTS,
            band_multiples: constants::lod::BAND_MULTIPLES.to_vec(),
            hysteresis: 0.0,
        }
    }
}

/// Decorative object placement around the road
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementParams {
    pub max_objects_per_chunk: u32,
    pub retries_per_slot: u32,
    /// Radial offset range measured from the road centerline
    pub min_spawn_distance: f32,
    pub max_spawn_distance: f32,
    /// Eligibility band widening inside the corridor's inner edge
    pub inner_margin: f32,
    /// Eligibility band widening outside the corridor's outer edge
    pub outer_margin: f32,
    pub ground_offset: f32,
    pub common_weight: f32,
    pub rare_weight: f32,
}

impl Default for PlacementParams {
    fn default() -> Self {
        let half_width = constants::road::ROAD_WIDTH * 0.5;
        Self {
            max_objects_per_chunk: constants::placement::MAX_OBJECTS_PER_CHUNK,
            retries_per_slot: constants::placement::RETRIES_PER_SLOT,
            min_spawn_distance: half_width + constants::placement::MIN_SPAWN_PAST_EDGE,
            max_spawn_distance: half_width + constants::placement::MAX_SPAWN_PAST_EDGE,
            inner_margin: constants::core::CHUNK_SIZE,
            outer_margin: constants::core::CHUNK_SIZE,
            ground_offset: constants::placement::GROUND_OFFSET,
            common_weight: constants::placement::COMMON_WEIGHT,
            rare_weight: constants::placement::RARE_WEIGHT,
        }
    }
}

/// Main configuration for the chunk streaming core
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub chunk_size: f32,
    /// Chebyshev radius in chunks; a signed type so bad input is caught by
    /// validation instead of wrapping
    pub render_distance: i32,
    /// Cap on chunk (re)builds per `update`; `None` builds everything at once
    pub max_builds_per_tick: Option<usize>,
    pub noise: NoiseParams,
    pub road: RoadParams,
    pub lod: LodParams,
    pub placement: PlacementParams,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            chunk_size: constants::core::CHUNK_SIZE,
            render_distance: constants::core::RENDER_DISTANCE,
            max_builds_per_tick: None,
            noise: NoiseParams::default(),
            road: RoadParams::default(),
            lod: LodParams::default(),
            placement: PlacementParams::default(),
        }
    }
}

impl StreamConfig {
    /// Parse a config from TOML text. Missing fields take their defaults.
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let config: StreamConfig = toml::from_str(text).context("Failed to parse stream config")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> StreamResult<()> {
        if !self.chunk_size.is_finite() || self.chunk_size <= 0.0 {
            return Err(StreamError::invalid_config(
                "chunk_size",
                self.chunk_size,
                "must be a positive finite number",
            ));
        }

        if self.render_distance < 0 {
            return Err(StreamError::invalid_config(
                "render_distance",
                self.render_distance,
                "cannot be negative",
            ));
        }

        if self.render_distance > constants::core::MAX_RENDER_DISTANCE {
            return Err(StreamError::invalid_config(
                "render_distance",
                self.render_distance,
                &format!("exceeds the maximum of {}", constants::core::MAX_RENDER_DISTANCE),
            ));
        }

        if self.max_builds_per_tick == Some(0) {
            return Err(StreamError::invalid_config(
                "max_builds_per_tick",
                0,
                "use None to disable the cap",
            ));
        }

        self.validate_noise()?;
        self.validate_road()?;
        self.validate_lod()?;
        self.validate_placement()?;

        log::info!(
            "[StreamConfig] Validated: chunk_size={}, render_distance={}, road={}±{}",
            self.chunk_size,
            self.render_distance,
            self.road.road_radius,
            self.road.half_width()
        );
        Ok(())
    }

    fn validate_noise(&self) -> StreamResult<()> {
        let noise = &self.noise;
        if noise.octaves == 0 {
            return Err(StreamError::invalid_config("noise.octaves", 0, "need at least one octave"));
        }
        for (field, value) in [
            ("noise.frequency", noise.frequency),
            ("noise.amplitude", noise.amplitude),
            ("noise.persistence", noise.persistence),
            ("noise.lacunarity", noise.lacunarity),
        ] {
            if !value.is_finite() {
                return Err(StreamError::invalid_config(field, value, "must be finite"));
            }
        }
        Ok(())
    }

    fn validate_road(&self) -> StreamResult<()> {
        let road = &self.road;
        if !road.road_width.is_finite() || road.road_width <= 0.0 {
            return Err(StreamError::invalid_config(
                "road.road_width",
                road.road_width,
                "must be positive",
            ));
        }
        if !road.road_radius.is_finite() || road.road_radius < 0.0 {
            return Err(StreamError::invalid_config(
                "road.road_radius",
                road.road_radius,
                "cannot be negative",
            ));
        }
        Ok(())
    }

    fn validate_lod(&self) -> StreamResult<()> {
        let lod = &self.lod;
        if lod.min_segments == 0 {
            return Err(StreamError::invalid_config("lod.min_segments", 0, "must be at least 1"));
        }
        if lod.base_segments == 0 {
            return Err(StreamError::invalid_config("lod.base_segments", 0, "must be at least 1"));
        }

        let mut previous = 0.0f32;
        for (i, &edge) in lod.band_multiples.iter().enumerate() {
            if !edge.is_finite() || edge <= previous {
                return Err(StreamError::invalid_config(
                    &format!("lod.band_multiples[{}]", i),
                    edge,
                    "bands must be positive and strictly increasing",
                ));
            }
            previous = edge;
        }

        if !lod.hysteresis.is_finite() || lod.hysteresis < 0.0 {
            return Err(StreamError::invalid_config(
                "lod.hysteresis",
                lod.hysteresis,
                "cannot be negative",
            ));
        }
        Ok(())
    }

    fn validate_placement(&self) -> StreamResult<()> {
        let p = &self.placement;
        if !p.min_spawn_distance.is_finite()
            || !p.max_spawn_distance.is_finite()
            || p.min_spawn_distance < 0.0
            || p.min_spawn_distance > p.max_spawn_distance
        {
            return Err(StreamError::invalid_config(
                "placement.min_spawn_distance",
                p.min_spawn_distance,
                "must satisfy 0 <= min <= max_spawn_distance",
            ));
        }
        if p.inner_margin < 0.0 || p.outer_margin < 0.0 {
            return Err(StreamError::invalid_config(
                "placement.inner_margin",
                p.inner_margin.min(p.outer_margin),
                "margins cannot be negative",
            ));
        }
        if p.common_weight < 0.0 || p.rare_weight < 0.0 || p.common_weight + p.rare_weight <= 0.0 {
            return Err(StreamError::invalid_config(
                "placement.common_weight",
                p.common_weight,
                "weights must be non-negative and not all zero",
            ));
        }
        Ok(())
    }
}

/// Load and validate a TOML config file
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<StreamConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    StreamConfig::from_toml_str(&text)
        .with_context(|| format!("Invalid config file {}", path.display()))
}
