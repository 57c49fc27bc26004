//! Population control
//!
//! Keeps the live orbiter count at a target between ticks. New orbiters
//! appear at rest somewhere inside the spawn sphere; surplus orbiters are
//! retired oldest first.

use crate::orbiter::{Orbiter, OrbiterBuffers};
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Radius of the sphere new orbiters are scattered in
pub const SPAWN_RADIUS: f32 = 50.0;

/// What a resize did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulationChange {
    pub spawned: usize,
    pub removed: usize,
}

impl PopulationChange {
    pub fn is_empty(&self) -> bool {
        self.spawned == 0 && self.removed == 0
    }
}

/// Spawns and retires orbiters
#[derive(Debug, Clone)]
pub struct PopulationController {
    rng: Pcg32,
    spawn_radius: f32,
}

impl PopulationController {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            spawn_radius: SPAWN_RADIUS,
        }
    }

    pub fn with_spawn_radius(mut self, radius: f32) -> Self {
        self.spawn_radius = radius;
        self
    }

    pub fn spawn_radius(&self) -> f32 {
        self.spawn_radius
    }

    /// Uniform point inside the spawn sphere
    pub fn sample_spawn_point(&mut self) -> Vec3 {
        loop {
            let p = Vec3::new(
                self.rng.random_range(-1.0..1.0),
                self.rng.random_range(-1.0..1.0),
                self.rng.random_range(-1.0..1.0),
            );
            if p.length_squared() <= 1.0 {
                return p * self.spawn_radius;
            }
        }
    }

    /// Grow or shrink `buffers` to exactly `target` orbiters
    pub fn resize(&mut self, buffers: &mut OrbiterBuffers, target: usize) -> PopulationChange {
        let current = buffers.len();
        let change = if target > current {
            let spawned = target - current;
            buffers.extend((0..spawned).map(|_| Orbiter::new(self.sample_spawn_point())));
            PopulationChange {
                spawned,
                removed: 0,
            }
        } else {
            PopulationChange {
                spawned: 0,
                removed: buffers.remove_oldest(current - target),
            }
        };

        if !change.is_empty() {
            tracing::info!(
                "Resized population to {} (+{} -{})",
                buffers.len(),
                change.spawned,
                change.removed
            );
        }
        change
    }
}

impl Default for PopulationController {
    fn default() -> Self {
        Self::new(0)
    }
}
