//! Time-varying signed distance fields
//!
//! A field maps a point and a time to a [`FieldSample`]: the signed distance
//! to the nearest surface (negative inside, positive outside, zero on the
//! surface) and a direction vector pointing from the nearest surface feature
//! toward the point.
//!
//! The direction is deliberately *not* a true gradient for most models. It is
//! the vector from whichever analytic feature the model considers nearest,
//! left un-normalized. Callers normalize it and accept that a zero vector
//! normalizes to NaN.
//!
//! ## Example
//!
//! ```rust
//! use orbitfield_sdf::field::{DistanceField, models::SpinMixer};
//! use glam::Vec3;
//!
//! let field = SpinMixer::default();
//! let sample = field.sample(0.25, Vec3::new(3.0, 0.0, 1.0));
//! let normal = sample.direction.normalize();
//! ```

pub mod models;
pub mod operations;
pub mod primitives;

use glam::Vec3;

/// Distance and direction returned by a field evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// Signed distance to the surface
    pub distance: f32,
    /// Un-normalized vector from the nearest feature toward the point
    pub direction: Vec3,
}

impl FieldSample {
    /// Result for a selector that matches no model: maximal distance, zero direction
    pub const UNDEFINED: FieldSample = FieldSample {
        distance: f32::MAX,
        direction: Vec3::ZERO,
    };

    pub fn new(distance: f32, direction: Vec3) -> Self {
        Self {
            distance,
            direction,
        }
    }

    /// Whether the sampled point lies strictly inside the solid
    pub fn is_inside(&self) -> bool {
        self.distance < 0.0
    }
}

/// A closed-form field evaluated at a point and a time.
///
/// Implementations must be pure: no interior mutability, no allocation, safe
/// to call from many threads at once.
pub trait DistanceField: Send + Sync {
    /// Evaluate distance and direction at point `p` and field time `time`
    fn sample(&self, time: f32, p: Vec3) -> FieldSample;

    /// Evaluate only the signed distance
    fn distance(&self, time: f32, p: Vec3) -> f32 {
        self.sample(time, p).distance
    }
}

pub use models::*;
