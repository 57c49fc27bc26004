//! Coherent 2D gradient noise for the terrain model

use ::noise::{NoiseFn, Perlin};
use glam::Vec2;
use std::fmt;

/// Perlin noise sampled in two dimensions.
///
/// Continuous, deterministic for a given seed and input, and roughly in
/// the range `[-1, 1]`.
#[derive(Clone)]
pub struct CoherentNoise {
    noise: Perlin,
    seed: u32,
}

impl CoherentNoise {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
            seed,
        }
    }

    /// Seed the permutation table was built from
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Sample the noise at a 2D point
    pub fn sample(&self, p: Vec2) -> f32 {
        self.noise.get([p.x as f64, p.y as f64]) as f32
    }
}

impl Default for CoherentNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CoherentNoise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoherentNoise")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
