//! Orbiter integration
//!
//! One tick pulls every orbiter toward the active surface, kicks it with
//! jitter, damps it and moves it, then relaxes its color toward a target
//! picked from its signed distance. Orbiters never read each other, so the
//! pass is a plain parallel for-each over the buffers.

use crate::jitter::jitter_vector;
use crate::orbiter::{Orbiter, OrbiterBuffers};
use crate::params::SimulationParameters;
use glam::{Vec3, Vec4};
use orbitfield_sdf::{FieldEvaluator, FieldSample};
use rayon::prelude::*;

/// Velocity retained per tick, independent of tick length
pub const DAMPING: f32 = 0.99;

/// Color an orbiter drifts toward at signed distance `distance`.
///
/// Outside, blends from the surface color toward the exterior color over
/// `exterior_color_dist`; inside, toward the interior color over
/// `interior_color_dist`. Factors past 1 extrapolate.
pub fn target_color(distance: f32, params: &SimulationParameters) -> Vec4 {
    if distance > 0.0 {
        params
            .surface_color
            .lerp(params.exterior_color, distance / params.exterior_color_dist)
    } else {
        params
            .surface_color
            .lerp(params.interior_color, -distance / params.interior_color_dist)
    }
}

/// Apply one tick to a single orbiter given its field sample and jitter.
///
/// A zero `sample.direction` normalizes to NaN, which then stays in the
/// orbiter's state.
#[inline]
pub fn integrate_orbiter(
    position: &mut Vec3,
    velocity: &mut Vec3,
    color: &mut Vec4,
    sample: FieldSample,
    jitter: Vec3,
    params: &SimulationParameters,
) {
    let pull = sample.distance.clamp(-1.0, 1.0) * params.attraction;
    *velocity -= pull * sample.direction.normalize();
    *velocity += jitter * params.jitter;
    *velocity *= DAMPING;
    *position += *velocity;

    let target = target_color(sample.distance, params);
    *color = color.lerp(target, params.color_blend());
}

/// Advance a single orbiter, sampling the active model at its position
pub fn step_orbiter(
    evaluator: &FieldEvaluator,
    params: &SimulationParameters,
    index: usize,
    orbiter: Orbiter,
) -> Orbiter {
    let Orbiter {
        mut position,
        mut velocity,
        mut color,
    } = orbiter;
    let sample = evaluator.evaluate(params.model, params.time, position);
    let jitter = jitter_vector(params.frame, index, params.jitter_distribution);
    integrate_orbiter(&mut position, &mut velocity, &mut color, sample, jitter, params);
    Orbiter {
        position,
        velocity,
        color,
    }
}

/// Advance every orbiter one tick using `sampler` as the field.
///
/// `sampler` maps a position to its field sample and runs on many threads
/// at once.
pub fn integrate_with<F>(buffers: &mut OrbiterBuffers, params: &SimulationParameters, sampler: F)
where
    F: Fn(Vec3) -> FieldSample + Sync,
{
    buffers
        .positions
        .par_iter_mut()
        .zip(buffers.velocities.par_iter_mut())
        .zip(buffers.colors.par_iter_mut())
        .enumerate()
        .for_each(|(index, ((position, velocity), color))| {
            let sample = sampler(*position);
            let jitter = jitter_vector(params.frame, index, params.jitter_distribution);
            integrate_orbiter(position, velocity, color, sample, jitter, params);
        });
}

/// Advance every orbiter one tick against the model selected in `params`
pub fn integrate(
    buffers: &mut OrbiterBuffers,
    evaluator: &FieldEvaluator,
    params: &SimulationParameters,
) {
    let (model, time) = (params.model, params.time);
    integrate_with(buffers, params, |p| evaluator.evaluate(model, time, p));
}
