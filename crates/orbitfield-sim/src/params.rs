//! Per-tick parameter snapshot

use crate::settings::{JitterDistribution, OrbiterSettings};
use glam::Vec4;
use orbitfield_sdf::FieldModel;

/// What changes from one tick to the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    /// Active field model
    pub model: FieldModel,
    /// Field time handed to the evaluator
    pub time: f32,
    /// Seconds since the previous tick
    pub delta_time: f32,
    /// Frame counter, used only to seed jitter
    pub frame: u32,
}

impl Default for TickContext {
    fn default() -> Self {
        Self {
            model: FieldModel::default(),
            time: 0.0,
            delta_time: 1.0 / 60.0,
            frame: 0,
        }
    }
}

/// Read-only inputs shared by every orbiter during one tick.
///
/// Built once per tick from the settings and the tick context, then copied
/// into each parallel task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    pub attraction: f32,
    pub jitter: f32,
    pub jitter_distribution: JitterDistribution,
    pub color_stiffness: f32,
    pub surface_color: Vec4,
    pub interior_color: Vec4,
    pub exterior_color: Vec4,
    pub exterior_color_dist: f32,
    pub interior_color_dist: f32,
    pub speed_stretch: f32,
    pub model: FieldModel,
    pub time: f32,
    pub delta_time: f32,
    pub frame: u32,
}

impl SimulationParameters {
    pub fn new(settings: &OrbiterSettings, tick: TickContext) -> Self {
        Self {
            attraction: settings.attraction,
            jitter: settings.jitter,
            jitter_distribution: settings.jitter_distribution,
            color_stiffness: settings.color_stiffness,
            surface_color: settings.surface_color,
            interior_color: settings.interior_color,
            exterior_color: settings.exterior_color,
            exterior_color_dist: settings.exterior_color_dist,
            interior_color_dist: settings.interior_color_dist,
            speed_stretch: settings.speed_stretch,
            model: tick.model,
            time: tick.time,
            delta_time: tick.delta_time,
            frame: tick.frame,
        }
    }

    /// The tick-dependent part of the snapshot
    pub fn tick(&self) -> TickContext {
        TickContext {
            model: self.model,
            time: self.time,
            delta_time: self.delta_time,
            frame: self.frame,
        }
    }

    /// Fraction of the remaining color gap closed this tick (unclamped)
    pub fn color_blend(&self) -> f32 {
        self.delta_time * self.color_stiffness
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::new(&OrbiterSettings::default(), TickContext::default())
    }
}
