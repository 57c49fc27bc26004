//! Integration tests for the tick pipeline: field to orbiters to instances

// Tests are allowed to use expect/unwrap for cleaner error messages
#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use orbitfield_sim::integrator::{DAMPING, integrate, integrate_with, target_color};
use orbitfield_sim::population::PopulationController;
use orbitfield_sim::prelude::*;
use orbitfield_sim::render::{INSTANCES_PER_BATCH, instance_batches};

fn ring(count: usize, radius: f32) -> OrbiterBuffers {
    (0..count)
        .map(|i| {
            let a = i as f32 / count as f32 * std::f32::consts::TAU;
            Orbiter {
                position: Vec3::new(a.cos() * radius, (a * 3.0).sin(), a.sin() * radius),
                velocity: Vec3::new(-a.sin(), 0.2, a.cos()) * 0.3,
                color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            }
        })
        .collect()
}

#[test]
fn zero_force_tick_only_damps_and_moves() {
    let evaluator = FieldEvaluator::new();
    let params = SimulationParameters {
        attraction: 0.0,
        jitter: 0.0,
        model: FieldModel::SpinMixer,
        time: 0.7,
        ..SimulationParameters::default()
    };
    let before = ring(64, 7.0);
    let mut after = before.clone();
    integrate(&mut after, &evaluator, &params);

    for (old, new) in before.iter().zip(after.iter()) {
        let expected_velocity = old.velocity * DAMPING;
        assert!(new.velocity.abs_diff_eq(expected_velocity, 1e-6));
        assert!(new.position.abs_diff_eq(old.position + new.velocity, 1e-5));
    }
}

#[test]
fn color_converges_geometrically() {
    let params = SimulationParameters {
        attraction: 0.0,
        jitter: 0.0,
        delta_time: 0.025,
        color_stiffness: 4.0,
        ..SimulationParameters::default()
    };
    let k = params.color_blend();
    assert_relative_eq!(k, 0.1);

    let distance = 2.0;
    let target = target_color(distance, &params);
    let mut buffers = ring(8, 3.0);
    let start = buffers.colors()[0];

    for n in 1..=30 {
        integrate_with(&mut buffers, &params, |_| FieldSample::new(distance, Vec3::X));
        let expected = (start - target).length() * (1.0 - k).powi(n);
        let actual = (buffers.colors()[0] - target).length();
        assert_relative_eq!(actual, expected, epsilon = 1e-4);
    }
}

#[test]
fn parallel_integration_is_deterministic() {
    let evaluator = FieldEvaluator::new();
    let mut population = PopulationController::new(99);
    let mut a = OrbiterBuffers::new();
    population.resize(&mut a, 10_000);
    let mut b = a.clone();

    for frame in 1..=20 {
        let params = SimulationParameters {
            jitter: 0.01,
            frame,
            time: frame as f32 * 0.01,
            model: FieldModel::Metaballs,
            ..SimulationParameters::default()
        };
        integrate(&mut a, &evaluator, &params);
        integrate(&mut b, &evaluator, &params);
    }

    assert_eq!(a, b);
}

#[test]
fn sphere_plane_pulls_orbiters_toward_surface() {
    let evaluator = FieldEvaluator::new();
    let params = SimulationParameters {
        attraction: 0.01,
        jitter: 0.0,
        model: FieldModel::SpherePlane,
        time: 0.0,
        ..SimulationParameters::default()
    };

    let mut buffers: OrbiterBuffers = [Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -2.0)]
        .into_iter()
        .map(Orbiter::new)
        .collect();
    integrate(&mut buffers, &evaluator, &params);

    // Outside: pulled inward along -x
    assert_relative_eq!(buffers.velocities()[0].x, -0.01 * DAMPING, epsilon = 1e-6);
    // Inside: pushed outward along -z, toward the nearer surface
    assert_relative_eq!(buffers.velocities()[1].z, -0.01 * DAMPING, epsilon = 1e-6);
}

#[test]
fn orbiter_at_degenerate_point_goes_nan_and_stays_nan() {
    let evaluator = FieldEvaluator::new();
    let params = SimulationParameters {
        model: FieldModel::SpherePlane,
        time: 0.0,
        ..SimulationParameters::default()
    };
    let mut buffers: OrbiterBuffers = [Vec3::ZERO, Vec3::new(8.0, 1.0, 0.0)]
        .into_iter()
        .map(Orbiter::new)
        .collect();

    for _ in 0..5 {
        integrate(&mut buffers, &evaluator, &params);
    }

    let stats = buffers.stats();
    assert_eq!(stats.non_finite, 1);
    assert!(buffers.positions()[0].is_nan());
    assert!(!buffers.get(0).unwrap().is_finite());
    assert!(buffers.get(1).unwrap().is_finite());
}

#[test]
fn simulation_feeds_renderer_in_batches() {
    let settings = OrbiterSettings {
        particle_count: 5000,
        ..OrbiterSettings::default()
    };
    let mut sim = Simulation::new(settings, 3).unwrap();
    let report = sim.run(3, 1.0 / 60.0).unwrap();

    assert_eq!(report.stats.count, 5000);
    assert_eq!(report.batches, 5);

    let batches: Vec<_> = sim.batches().collect();
    assert_eq!(batches.len(), 5);
    assert!(batches[..4].iter().all(|b| b.len() == INSTANCES_PER_BATCH));
    assert_eq!(batches[4].len(), 5000 - 4 * INSTANCES_PER_BATCH);

    // Instances mirror orbiter order
    for (instance, position) in sim.instances().iter().zip(sim.buffers().positions()) {
        assert!(instance.translation().abs_diff_eq(*position, 1e-4));
    }
    assert_eq!(instance_batches(sim.instances()).len(), 5);
}

#[test]
fn probe_matches_field_sign() {
    let evaluator = FieldEvaluator::new();
    let report = probe_field(&evaluator, FieldModel::SphereField, 0.2, 1500, 10.0, 5).unwrap();
    for p in &report.interior {
        assert!(evaluator.evaluate(FieldModel::SphereField, 0.2, *p).is_inside());
    }
}
