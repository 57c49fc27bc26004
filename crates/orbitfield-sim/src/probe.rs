//! Field preview sampling
//!
//! Scatters random points through a cube and keeps the ones that fall
//! inside the surface, giving a rough point-cloud picture of a model.

use crate::{Error, Result};
use glam::Vec3;
use orbitfield_sdf::{FieldEvaluator, FieldModel};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

/// Points sampled by the interactive preview
pub const DEFAULT_PROBE_SAMPLES: usize = 3000;
/// Half-width of the preview cube
pub const DEFAULT_PROBE_EXTENT: f32 = 10.0;

/// Result of a probe run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeReport {
    pub model: FieldModel,
    pub time: f32,
    pub samples: usize,
    /// Sampled points with negative distance
    pub interior: Vec<Vec3>,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl ProbeReport {
    /// Share of samples that landed inside
    pub fn interior_fraction(&self) -> f32 {
        if self.samples == 0 {
            0.0
        } else {
            self.interior.len() as f32 / self.samples as f32
        }
    }
}

/// Sample `samples` uniform points in `[-extent, extent]^3`
pub fn probe_field(
    evaluator: &FieldEvaluator,
    model: FieldModel,
    time: f32,
    samples: usize,
    extent: f32,
    seed: u64,
) -> Result<ProbeReport> {
    // The sampled span is 2 * extent and must itself be finite
    if !(extent > 0.0 && (2.0 * extent).is_finite()) {
        return Err(Error::InvalidArgument(format!(
            "probe extent must be positive and finite, got {extent}"
        )));
    }
    if samples == 0 {
        return Err(Error::InvalidArgument(
            "probe needs at least one sample".to_string(),
        ));
    }

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut report = ProbeReport {
        model,
        time,
        samples,
        interior: Vec::new(),
        min_distance: f32::INFINITY,
        max_distance: f32::NEG_INFINITY,
    };

    for _ in 0..samples {
        let p = Vec3::new(
            rng.random_range(-extent..extent),
            rng.random_range(-extent..extent),
            rng.random_range(-extent..extent),
        );
        let sample = evaluator.evaluate(model, time, p);
        report.min_distance = report.min_distance.min(sample.distance);
        report.max_distance = report.max_distance.max(sample.distance);
        if sample.is_inside() {
            report.interior.push(p);
        }
    }

    Ok(report)
}
