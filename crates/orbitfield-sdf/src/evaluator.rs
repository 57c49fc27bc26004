//! Model dispatch
//!
//! [`FieldEvaluator`] owns one instance of every model and routes an
//! evaluation to the selected one. The model and the time are always passed
//! in; nothing is read from shared state, so one evaluator can serve any
//! number of threads.

use crate::field::models::{
    FigureEight, Metaballs, NoiseTerrain, SphereField, SpherePlane, SpinMixer,
};
use crate::field::{DistanceField, FieldSample};
use crate::model::FieldModel;
use glam::Vec3;
use std::sync::LazyLock;

/// All six models, ready to evaluate
#[derive(Debug, Clone, Default)]
pub struct FieldEvaluator {
    pub metaballs: Metaballs,
    pub spin_mixer: SpinMixer,
    pub sphere_plane: SpherePlane,
    pub sphere_field: SphereField,
    pub figure_eight: FigureEight,
    pub terrain: NoiseTerrain,
}

impl FieldEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field implementing `model`
    pub fn field(&self, model: FieldModel) -> &dyn DistanceField {
        match model {
            FieldModel::Metaballs => &self.metaballs,
            FieldModel::SpinMixer => &self.spin_mixer,
            FieldModel::SpherePlane => &self.sphere_plane,
            FieldModel::SphereField => &self.sphere_field,
            FieldModel::FigureEight => &self.figure_eight,
            FieldModel::PerlinNoise => &self.terrain,
        }
    }

    /// Evaluate `model` at point `p` and field time `time`
    #[inline]
    pub fn evaluate(&self, model: FieldModel, time: f32, p: Vec3) -> FieldSample {
        match model {
            FieldModel::Metaballs => self.metaballs.sample(time, p),
            FieldModel::SpinMixer => self.spin_mixer.sample(time, p),
            FieldModel::SpherePlane => self.sphere_plane.sample(time, p),
            FieldModel::SphereField => self.sphere_field.sample(time, p),
            FieldModel::FigureEight => self.figure_eight.sample(time, p),
            FieldModel::PerlinNoise => self.terrain.sample(time, p),
        }
    }

    /// Evaluate by numeric selector.
    ///
    /// Selectors outside `0..6` yield [`FieldSample::UNDEFINED`] rather than
    /// an error; feeding that into the orbiter update applies a full-strength
    /// pull along a NaN direction.
    pub fn evaluate_raw(&self, selector: u32, time: f32, p: Vec3) -> FieldSample {
        match FieldModel::try_from(selector) {
            Ok(model) => self.evaluate(model, time, p),
            Err(_) => FieldSample::UNDEFINED,
        }
    }
}

static DEFAULT_EVALUATOR: LazyLock<FieldEvaluator> = LazyLock::new(FieldEvaluator::new);

/// Evaluate `model` with the default model constants
pub fn evaluate(model: FieldModel, time: f32, p: Vec3) -> FieldSample {
    DEFAULT_EVALUATOR.evaluate(model, time, p)
}
