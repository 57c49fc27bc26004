//! The six animated field models
//!
//! Every model is centered on the world origin and animated purely by the
//! `time` argument. Constants default to the values the simulation was
//! tuned with; fields are public so tools can experiment with them.

// Orbit constants are tuning values, kept with the digits they were tuned at
#![allow(clippy::unreadable_literal)]

use super::operations::{fold_z, repeat_centered, smooth_min};
use super::primitives::{ground_plane, sphere};
use super::{DistanceField, FieldSample};
use crate::noise::CoherentNoise;
use glam::{Vec2, Vec3};

// ============================================================================
// Metaballs
// ============================================================================

/// Five spheres on independent orbits, blended with a smooth minimum.
///
/// The direction comes from whichever sphere last lowered the running
/// minimum, not from the blended gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metaballs {
    pub radius: f32,
    pub blend_radius: f32,
}

impl Metaballs {
    /// Number of orbiting spheres
    pub const COUNT: usize = 5;

    /// Center of sphere `i` at `time`
    pub fn center(i: usize, time: f32) -> Vec3 {
        let i = i as f32;
        let orbit_radius = i * 0.5 + 2.0;
        let angle1 = time * 4.0 * (1.0 + i * 0.1);
        let angle2 = time * 4.0 * (1.2 + i * 0.117);
        let angle3 = time * 4.0 * (1.3 + i * 0.1618);
        Vec3::new(
            angle1.cos() * orbit_radius,
            angle2.sin() * orbit_radius,
            angle3.sin() * orbit_radius,
        )
    }

    /// All sphere centers at `time`
    pub fn centers(time: f32) -> [Vec3; Self::COUNT] {
        std::array::from_fn(|i| Self::center(i, time))
    }
}

impl Default for Metaballs {
    fn default() -> Self {
        Self {
            radius: 2.0,
            blend_radius: 2.0,
        }
    }
}

impl DistanceField for Metaballs {
    fn sample(&self, time: f32, p: Vec3) -> FieldSample {
        let mut result = FieldSample::UNDEFINED;
        for i in 0..Self::COUNT {
            let ball = sphere(p, Self::center(i, time), self.radius);
            let blended = smooth_min(result.distance, ball.distance, self.blend_radius);
            if blended < result.distance {
                result = FieldSample::new(blended, ball.direction);
            }
        }
        result
    }
}

// ============================================================================
// Spin Mixer
// ============================================================================

/// Six fast-spinning spheres combined with a hard minimum.
///
/// Spheres are paired: `i / 2` picks the orbit radius, so each radius hosts
/// two spheres spinning at slightly different rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinMixer {
    pub radius: f32,
}

impl SpinMixer {
    /// Number of spinning spheres
    pub const COUNT: usize = 6;

    /// Center of sphere `i` at `time`
    pub fn center(i: usize, time: f32) -> Vec3 {
        let orbit_radius = ((i / 2 + 2) * 2) as f32;
        let angle = time * 20.0 * (1.0 + i as f32 * 0.1);
        Vec3::new(
            angle.cos() * orbit_radius,
            angle.sin(),
            angle.sin() * orbit_radius,
        )
    }

    /// All sphere centers at `time`
    pub fn centers(time: f32) -> [Vec3; Self::COUNT] {
        std::array::from_fn(|i| Self::center(i, time))
    }

    /// Index of the nearest sphere and its sample.
    ///
    /// Ties keep the lower index.
    pub fn nearest(&self, time: f32, p: Vec3) -> (usize, FieldSample) {
        let mut best = (Self::COUNT, FieldSample::UNDEFINED);
        for i in 0..Self::COUNT {
            let ball = sphere(p, Self::center(i, time), self.radius);
            if ball.distance < best.1.distance {
                best = (i, ball);
            }
        }
        best
    }
}

impl Default for SpinMixer {
    fn default() -> Self {
        Self { radius: 2.0 }
    }
}

impl DistanceField for SpinMixer {
    fn sample(&self, time: f32, p: Vec3) -> FieldSample {
        self.nearest(time, p).1
    }
}

// ============================================================================
// Sphere / Plane morph
// ============================================================================

/// A sphere that periodically flattens toward the ground plane.
///
/// Distance and direction are both linearly interpolated between the two
/// primitives with the same factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpherePlane {
    pub sphere_radius: f32,
}

impl SpherePlane {
    /// Largest plane weight reached during the oscillation
    pub const MAX_BLEND: f32 = 0.8;

    /// Plane weight at `time`, oscillating in `[0, MAX_BLEND]` and zero at `time = 0`
    pub fn blend_factor(time: f32) -> f32 {
        let half = Self::MAX_BLEND * 0.5;
        half - (time * 8.0).cos() * half
    }

    /// Evaluate with an explicit plane weight
    pub fn sample_blended(&self, factor: f32, p: Vec3) -> FieldSample {
        let ball = sphere(p, Vec3::ZERO, self.sphere_radius);
        let ground = ground_plane(p);

        let distance = ball.distance + (ground.distance - ball.distance) * factor;
        let direction = ball.direction.normalize_or_zero().lerp(ground.direction, factor);
        FieldSample::new(distance, direction)
    }
}

impl Default for SpherePlane {
    fn default() -> Self {
        Self { sphere_radius: 5.0 }
    }
}

impl DistanceField for SpherePlane {
    fn sample(&self, time: f32, p: Vec3) -> FieldSample {
        self.sample_blended(Self::blend_factor(time), p)
    }
}

// ============================================================================
// Sphere Field
// ============================================================================

/// Infinite grid of spheres whose spacing breathes over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereField {
    pub radius: f32,
    pub base_spacing: f32,
    pub spacing_amplitude: f32,
}

impl SphereField {
    /// Grid spacing at `time`
    pub fn spacing(&self, time: f32) -> f32 {
        self.base_spacing + (time * 5.0).sin() * self.spacing_amplitude
    }
}

impl Default for SphereField {
    fn default() -> Self {
        Self {
            radius: 5.0,
            base_spacing: 5.0,
            spacing_amplitude: 2.0,
        }
    }
}

impl DistanceField for SphereField {
    fn sample(&self, time: f32, p: Vec3) -> FieldSample {
        let local = repeat_centered(p, self.spacing(time));
        sphere(local, Vec3::ZERO, self.radius)
    }
}

// ============================================================================
// Figure Eight
// ============================================================================

/// Two rings in the XZ plane, mirrored across `z = 0`, with a bulge
/// traveling along the tube.
///
/// The negative-z half is evaluated in reflected space; its direction is
/// flipped back and its wave runs the other way round the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureEight {
    pub ring_radius: f32,
    pub tube_radius: f32,
}

impl FigureEight {
    /// Bulges around each ring
    pub const LOBES: f32 = 3.0;
    /// Angular speed of the traveling wave
    pub const PHASE_RATE: f32 = 8.0;
}

impl Default for FigureEight {
    fn default() -> Self {
        Self {
            ring_radius: 4.0,
            tube_radius: 0.5,
        }
    }
}

impl DistanceField for FigureEight {
    fn sample(&self, time: f32, p: Vec3) -> FieldSample {
        let (q, flipper) = fold_z(p);

        // Nearest point on the ring centered at (0, 0, ring_radius)
        let radial = Vec3::new(q.x, 0.0, q.z - self.ring_radius);
        let on_ring = radial.normalize() * self.ring_radius;
        let angle = on_ring.z.atan2(on_ring.x) + time * Self::PHASE_RATE;
        let on_ring = on_ring + Vec3::Z * self.ring_radius;

        let offset = q - on_ring;
        let direction = Vec3::new(offset.x, offset.y, offset.z * flipper);

        let wave = (angle * flipper * Self::LOBES).cos() * 0.5 + 0.5;
        let wave = wave * wave * 0.5;

        FieldSample::new(direction.length() - (self.tube_radius + wave), direction)
    }
}

// ============================================================================
// Perlin Noise terrain
// ============================================================================

/// Rolling height field from 2D gradient noise.
///
/// The direction is always world-up; the slope is ignored.
#[derive(Debug, Clone)]
pub struct NoiseTerrain {
    pub noise: CoherentNoise,
    pub scale: f32,
    pub height: f32,
}

impl NoiseTerrain {
    /// Terrain height at a point of the XZ plane
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        self.noise.sample(Vec2::new(x, z) * self.scale) * self.height
    }
}

impl Default for NoiseTerrain {
    fn default() -> Self {
        Self {
            noise: CoherentNoise::new(),
            scale: 0.2,
            height: 6.0,
        }
    }
}

impl DistanceField for NoiseTerrain {
    fn sample(&self, _time: f32, p: Vec3) -> FieldSample {
        FieldSample::new(p.y - self.height_at(p.x, p.z), Vec3::Y)
    }
}
