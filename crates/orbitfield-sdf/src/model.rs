//! Model selector for the six field constructions

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which closed-form field the evaluator computes.
///
/// The selector is owned by whoever drives the simulation (a switcher on a
/// timer, a CLI flag, a settings file). The evaluator only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldModel {
    /// Five smoothly blended spheres on desynchronized orbits
    #[default]
    Metaballs,
    /// Six fast-spinning spheres combined with a hard minimum
    SpinMixer,
    /// A sphere that periodically flattens toward the ground plane
    SpherePlane,
    /// Infinite grid of spheres with a breathing grid spacing
    SphereField,
    /// Two mirrored rings with a traveling bulge
    FigureEight,
    /// Rolling terrain from 2D gradient noise
    PerlinNoise,
}

impl FieldModel {
    /// Number of defined models
    pub const COUNT: usize = 6;

    /// All models in selector order
    pub const ALL: [FieldModel; Self::COUNT] = [
        FieldModel::Metaballs,
        FieldModel::SpinMixer,
        FieldModel::SpherePlane,
        FieldModel::SphereField,
        FieldModel::FigureEight,
        FieldModel::PerlinNoise,
    ];

    /// Numeric selector of this model
    pub fn index(self) -> u32 {
        match self {
            FieldModel::Metaballs => 0,
            FieldModel::SpinMixer => 1,
            FieldModel::SpherePlane => 2,
            FieldModel::SphereField => 3,
            FieldModel::FigureEight => 4,
            FieldModel::PerlinNoise => 5,
        }
    }

    /// Human-readable kebab-case name, matching the serde representation
    pub fn name(self) -> &'static str {
        match self {
            FieldModel::Metaballs => "metaballs",
            FieldModel::SpinMixer => "spin-mixer",
            FieldModel::SpherePlane => "sphere-plane",
            FieldModel::SphereField => "sphere-field",
            FieldModel::FigureEight => "figure-eight",
            FieldModel::PerlinNoise => "perlin-noise",
        }
    }
}

impl fmt::Display for FieldModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for FieldModel {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(Error::ModelOutOfRange(value))
    }
}

impl FromStr for FieldModel {
    type Err = Error;

    /// Parse a model name, ignoring case and `-`/`_` separators.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .into_iter()
            .find(|m| m.name().replace('-', "") == normalized)
            .ok_or_else(|| Error::UnknownModel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_try_from() {
        for model in FieldModel::ALL {
            assert_eq!(FieldModel::try_from(model.index()), Ok(model));
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(FieldModel::try_from(6), Err(Error::ModelOutOfRange(6)));
        assert_eq!(
            FieldModel::try_from(u32::MAX),
            Err(Error::ModelOutOfRange(u32::MAX))
        );
    }

    #[test]
    fn parses_common_spellings() {
        assert_eq!("sphere-plane".parse::<FieldModel>(), Ok(FieldModel::SpherePlane));
        assert_eq!("sphere_plane".parse::<FieldModel>(), Ok(FieldModel::SpherePlane));
        assert_eq!("SpherePlane".parse::<FieldModel>(), Ok(FieldModel::SpherePlane));
        assert_eq!("FIGURE-EIGHT".parse::<FieldModel>(), Ok(FieldModel::FigureEight));
        assert_eq!("metaballs".parse::<FieldModel>(), Ok(FieldModel::Metaballs));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "torus".parse::<FieldModel>().unwrap_err();
        assert_eq!(err, Error::UnknownModel("torus".to_string()));
    }

    #[test]
    fn display_uses_kebab_case_name() {
        assert_eq!(FieldModel::SpinMixer.to_string(), "spin-mixer");
        assert_eq!(FieldModel::PerlinNoise.to_string(), "perlin-noise");
    }
}
