//! Simulation time keeping

use crate::params::TickContext;
use orbitfield_sdf::FieldModel;

/// Field time advances this much per real second
pub const FIELD_TIME_SCALE: f32 = 0.1;

/// Elapsed time and frame counter
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationClock {
    elapsed: f32,
    frame: u32,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Real seconds since the first tick
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Frames ticked so far, wrapping at `u32::MAX`
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Time handed to the field evaluator
    pub fn field_time(&self) -> f32 {
        self.elapsed * FIELD_TIME_SCALE
    }

    /// Start a tick of `delta_time` seconds under `model`
    pub fn advance(&mut self, delta_time: f32, model: FieldModel) -> TickContext {
        self.elapsed += delta_time;
        self.frame = self.frame.wrapping_add(1);
        TickContext {
            model,
            time: self.field_time(),
            delta_time,
            frame: self.frame,
        }
    }
}
