//! Simulation tunables
//!
//! Settings are stored as pretty-printed JSON. Missing fields fall back to
//! the defaults below, so a file only needs the values it changes.

use crate::{Error, Result};
use glam::Vec4;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::Range;
use std::path::Path;

/// Per-component range of the raw jitter draw, before the unit-length clamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JitterDistribution {
    /// Components in `[-1, 1)`: isotropic kicks
    #[default]
    Symmetric,
    /// Components in `[0, 1)`: every kick points into the positive octant
    Positive,
}

impl JitterDistribution {
    pub fn range(self) -> Range<f32> {
        match self {
            JitterDistribution::Symmetric => -1.0..1.0,
            JitterDistribution::Positive => 0.0..1.0,
        }
    }
}

/// Largest population the settings accept
pub const MAX_PARTICLE_COUNT: usize = 10_000_000;

/// Tunable parameters shared by every orbiter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbiterSettings {
    /// Pull toward the surface per tick at full clamp
    pub attraction: f32,
    /// How much speed lengthens the rendered streak
    pub speed_stretch: f32,
    /// Random velocity kick per tick
    pub jitter: f32,
    /// Color on the surface
    pub surface_color: Vec4,
    /// Color deep inside
    pub interior_color: Vec4,
    /// Color far outside
    pub exterior_color: Vec4,
    /// Distance over which the exterior color is reached
    pub exterior_color_dist: f32,
    /// Depth over which the interior color is reached
    pub interior_color_dist: f32,
    /// Rate at which colors chase their target, per second
    pub color_stiffness: f32,
    /// Number of live orbiters the population controller maintains
    pub particle_count: usize,
    /// Range of the raw jitter draw
    pub jitter_distribution: JitterDistribution,
}

fn rgb(r: u8, g: u8, b: u8) -> Vec4 {
    Vec4::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        1.0,
    )
}

impl Default for OrbiterSettings {
    fn default() -> Self {
        Self {
            attraction: 0.003,
            speed_stretch: 0.55,
            jitter: 0.001,
            surface_color: rgb(82, 62, 161),
            interior_color: rgb(231, 117, 117),
            exterior_color: rgb(133, 215, 242),
            exterior_color_dist: 5.0,
            interior_color_dist: 1.5,
            color_stiffness: 4.0,
            particle_count: 40_000,
            jitter_distribution: JitterDistribution::Symmetric,
        }
    }
}

impl OrbiterSettings {
    /// Check the settings can drive a simulation
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("attraction", self.attraction),
            ("speed_stretch", self.speed_stretch),
            ("jitter", self.jitter),
            ("exterior_color_dist", self.exterior_color_dist),
            ("interior_color_dist", self.interior_color_dist),
            ("color_stiffness", self.color_stiffness),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidSettings(format!("{name} must be finite")));
        }

        let colors = [
            ("surface_color", self.surface_color),
            ("interior_color", self.interior_color),
            ("exterior_color", self.exterior_color),
        ];
        if let Some((name, _)) = colors.iter().find(|(_, c)| !c.is_finite()) {
            return Err(Error::InvalidSettings(format!("{name} must be finite")));
        }

        if self.exterior_color_dist <= 0.0 || self.interior_color_dist <= 0.0 {
            return Err(Error::InvalidSettings(
                "color falloff distances must be positive".to_string(),
            ));
        }
        if self.speed_stretch < 0.0 {
            return Err(Error::InvalidSettings(
                "speed_stretch must not be negative".to_string(),
            ));
        }
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(Error::InvalidSettings(format!(
                "particle_count {} exceeds the limit of {MAX_PARTICLE_COUNT}",
                self.particle_count
            )));
        }

        Ok(())
    }
}

/// Load and validate settings from a JSON file
pub fn load_settings(path: &Path) -> Result<OrbiterSettings> {
    let contents = fs::read_to_string(path)?;
    let settings: OrbiterSettings = serde_json::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Write settings to a JSON file
pub fn save_settings(path: &Path, settings: &OrbiterSettings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}
