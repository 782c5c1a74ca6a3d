//! Procedural height field
//!
//! Elevation is a pure function of planar position:
//! `Σ_j noise(p · f · lacunarity^j) · amplitude · persistence^j`.

use crate::config::NoiseParams;
use noise::{NoiseFn, OpenSimplex};

/// Universal elevation interface
pub trait HeightSampler: Send + Sync {
    /// Elevation at world coordinates
    fn sample(&self, x: f32, z: f32) -> f32;
}

/// Seeded multi-octave simplex terrain
pub struct HeightField {
    noise: OpenSimplex,
    params: NoiseParams,
}

impl HeightField {
    pub fn new(params: NoiseParams) -> Self {
        Self {
            noise: OpenSimplex::new(params.seed),
            params,
        }
    }
}

impl HeightSampler for HeightField {
    fn sample(&self, x: f32, z: f32) -> f32 {
        let mut frequency = self.params.frequency as f64;
        let mut amplitude = self.params.amplitude as f64;
        let mut elevation = 0.0f64;

        for _ in 0..self.params.octaves {
            elevation += self.noise.get([x as f64 * frequency, z as f64 * frequency]) * amplitude;
            frequency *= self.params.lacunarity as f64;
            amplitude *= self.params.persistence as f64;
        }

        elevation as f32
    }
}

/// Constant elevation, handy for tooling and tests that need predictable ground
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatField {
    pub elevation: f32,
}

impl HeightSampler for FlatField {
    fn sample(&self, _x: f32, _z: f32) -> f32 {
        self.elevation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_seed() {
        let a = HeightField::new(NoiseParams::default());
        let b = HeightField::new(NoiseParams::default());

        for i in 0..50 {
            let x = i as f32 * 13.7 - 300.0;
            let z = i as f32 * -7.3 + 41.0;
            assert_eq!(a.sample(x, z).to_bits(), b.sample(x, z).to_bits());
        }
    }

    #[test]
    fn test_seed_changes_terrain() {
        let a = HeightField::new(NoiseParams::default());
        let b = HeightField::new(NoiseParams {
            seed: 99,
            ..Default::default()
        });

        let differs = (0..50).any(|i| {
            let x = i as f32 * 17.1 + 3.3;
            a.sample(x, x * 0.5) != b.sample(x, x * 0.5)
        });
        assert!(differs);
    }

    #[test]
    fn test_bounded_by_octave_amplitudes() {
        let params = NoiseParams {
            octaves: 3,
            ..Default::default()
        };
        // 4 + 2 + 1, plus slack for the simplex output range
        let bound = 7.0 * 1.25;
        let field = HeightField::new(params);

        for i in 0..200 {
            let x = i as f32 * 5.9 - 500.0;
            let z = i as f32 * 3.1 - 200.0;
            assert!(field.sample(x, z).abs() <= bound);
        }
    }

    #[test]
    fn test_continuity() {
        let field = HeightField::new(NoiseParams {
            octaves: 4,
            ..Default::default()
        });

        for i in 0..100 {
            let x = i as f32 * 11.3 - 400.0;
            let z = i as f32 * 2.9 + 120.0;
            let delta = (field.sample(x, z) - field.sample(x + 0.01, z + 0.01)).abs();
            assert!(delta < 0.05, "jump of {} at ({}, {})", delta, x, z);
        }
    }

    #[test]
    fn test_flat_field() {
        let flat = FlatField { elevation: 2.5 };
        assert_eq!(flat.sample(-1000.0, 31.0), 2.5);
    }
}
