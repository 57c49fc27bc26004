//! Orbiter state, stored as struct-of-arrays
//!
//! Positions, velocities and colors live in separate buffers so the
//! parallel passes stream through contiguous memory. The three buffers
//! always have the same length.

use glam::{Vec3, Vec4};
use rayon::prelude::*;

/// Color every orbiter starts with
pub const DEFAULT_COLOR: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

/// One particle, assembled from the buffers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbiter {
    pub position: Vec3,
    pub velocity: Vec3,
    pub color: Vec4,
}

impl Orbiter {
    /// A resting orbiter at `position`
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            color: DEFAULT_COLOR,
        }
    }

    /// Whether position and velocity are free of NaN and infinity
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

/// Live orbiter population
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrbiterBuffers {
    pub(crate) positions: Vec<Vec3>,
    pub(crate) velocities: Vec<Vec3>,
    pub(crate) colors: Vec<Vec4>,
}

impl OrbiterBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            velocities: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn colors(&self) -> &[Vec4] {
        &self.colors
    }

    /// Append an orbiter at the back
    pub fn push(&mut self, orbiter: Orbiter) {
        self.positions.push(orbiter.position);
        self.velocities.push(orbiter.velocity);
        self.colors.push(orbiter.color);
    }

    pub fn get(&self, index: usize) -> Option<Orbiter> {
        Some(Orbiter {
            position: *self.positions.get(index)?,
            velocity: *self.velocities.get(index)?,
            color: *self.colors.get(index)?,
        })
    }

    /// Overwrite the orbiter at `index`; returns false if out of bounds
    pub fn set(&mut self, index: usize, orbiter: Orbiter) -> bool {
        if index >= self.len() {
            return false;
        }
        self.positions[index] = orbiter.position;
        self.velocities[index] = orbiter.velocity;
        self.colors[index] = orbiter.color;
        true
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Orbiter> + '_ {
        self.positions
            .iter()
            .zip(&self.velocities)
            .zip(&self.colors)
            .map(|((&position, &velocity), &color)| Orbiter {
                position,
                velocity,
                color,
            })
    }

    /// Remove up to `count` orbiters from the front (the oldest)
    pub fn remove_oldest(&mut self, count: usize) -> usize {
        let count = count.min(self.len());
        self.positions.drain(..count);
        self.velocities.drain(..count);
        self.colors.drain(..count);
        count
    }

    /// Summary statistics; non-finite orbiters are counted and left out of
    /// the speed and bounds figures
    pub fn stats(&self) -> BufferStats {
        self.positions
            .par_iter()
            .zip(self.velocities.par_iter())
            .fold(StatsAccumulator::new, |acc, (&position, &velocity)| {
                acc.add(position, velocity)
            })
            .reduce(StatsAccumulator::new, StatsAccumulator::merge)
            .finish(self.len())
    }
}

/// Partial sums for [`OrbiterBuffers::stats`], one per rayon split
#[derive(Debug, Clone, Copy)]
struct StatsAccumulator {
    finite: usize,
    non_finite: usize,
    speed_sum: f64,
    min: Vec3,
    max: Vec3,
}

impl StatsAccumulator {
    fn new() -> Self {
        Self {
            finite: 0,
            non_finite: 0,
            speed_sum: 0.0,
            min: Vec3::splat(f32::MAX),
            max: Vec3::splat(f32::MIN),
        }
    }

    fn add(mut self, position: Vec3, velocity: Vec3) -> Self {
        if position.is_finite() && velocity.is_finite() {
            self.finite += 1;
            self.speed_sum += f64::from(velocity.length());
            self.min = self.min.min(position);
            self.max = self.max.max(position);
        } else {
            self.non_finite += 1;
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            finite: self.finite + other.finite,
            non_finite: self.non_finite + other.non_finite,
            speed_sum: self.speed_sum + other.speed_sum,
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    fn finish(self, count: usize) -> BufferStats {
        if self.finite == 0 {
            return BufferStats {
                count,
                non_finite: self.non_finite,
                ..BufferStats::default()
            };
        }
        BufferStats {
            count,
            non_finite: self.non_finite,
            mean_speed: (self.speed_sum / self.finite as f64) as f32,
            min: self.min,
            max: self.max,
        }
    }
}

impl FromIterator<Orbiter> for OrbiterBuffers {
    fn from_iter<I: IntoIterator<Item = Orbiter>>(iter: I) -> Self {
        let mut buffers = OrbiterBuffers::new();
        buffers.extend(iter);
        buffers
    }
}

impl Extend<Orbiter> for OrbiterBuffers {
    fn extend<I: IntoIterator<Item = Orbiter>>(&mut self, iter: I) {
        for orbiter in iter {
            self.push(orbiter);
        }
    }
}

/// Population summary for logging
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BufferStats {
    pub count: usize,
    /// Orbiters whose position or velocity went NaN or infinite
    pub non_finite: usize,
    pub mean_speed: f32,
    /// Bounds of the finite positions
    pub min: Vec3,
    pub max: Vec3,
}
