//! Model cycling
//!
//! The active model changes on a slow timer, always to one of the other
//! models so a switch is never a no-op.

use orbitfield_sdf::FieldModel;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Timer units gained per second; a switch happens every ten seconds
pub const SWITCH_RATE: f32 = 0.1;

/// Picks the active field model over time
#[derive(Debug, Clone)]
pub struct ModelSwitcher {
    current: FieldModel,
    timer: f32,
    enabled: bool,
    rng: Pcg32,
}

impl ModelSwitcher {
    /// Cycling switcher starting on `initial`
    pub fn new(initial: FieldModel, seed: u64) -> Self {
        Self {
            current: initial,
            timer: 0.0,
            enabled: true,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Switcher pinned to `model`
    pub fn fixed(model: FieldModel) -> Self {
        Self {
            enabled: false,
            ..Self::new(model, 0)
        }
    }

    pub fn current(&self) -> FieldModel {
        self.current
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Progress toward the next switch, in `[0, 1]`
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Advance by `delta_time` seconds; returns the new model on a switch
    pub fn advance(&mut self, delta_time: f32) -> Option<FieldModel> {
        if !self.enabled {
            return None;
        }

        self.timer += delta_time * SWITCH_RATE;
        if self.timer <= 1.0 {
            return None;
        }
        self.timer -= 1.0;

        let mut next = self.rng.random_range(0..FieldModel::COUNT - 1);
        if next >= self.current.index() as usize {
            next += 1;
        }
        let previous = self.current;
        self.current = FieldModel::ALL[next];
        tracing::info!("Switched field model: {} -> {}", previous, self.current);
        Some(self.current)
    }
}

impl Default for ModelSwitcher {
    fn default() -> Self {
        Self::new(FieldModel::default(), 0)
    }
}
