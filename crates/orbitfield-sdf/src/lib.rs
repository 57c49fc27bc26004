//! # Orbitfield SDF
//!
//! Animated signed distance fields that orbiter particles are attracted to.
//!
//! Every model is a closed-form function of a point and a scalar time. An
//! evaluation returns the signed distance to the surface together with an
//! un-normalized direction vector that callers normalize to approximate the
//! outward surface normal.
//!
//! ## Quick Start
//!
//! ```rust
//! use orbitfield_sdf::prelude::*;
//!
//! let sample = evaluate(FieldModel::SpherePlane, 0.0, Vec3::new(10.0, 0.0, 0.0));
//! assert!((sample.distance - 5.0).abs() < 1e-5);
//! ```
//!
//! ## Units and Conventions
//!
//! - **Distances**: Arbitrary world units. Particles spawn inside a radius of 50.
//! - **Time**: Field time, already scaled by the caller's clock.
//! - **Precision**: `f32` throughout, matching the instance buffers handed to renderers.
//! - **Coordinate system**: Y-up.

pub mod evaluator;
pub mod field;
pub mod model;
pub mod noise;

mod error;

pub use error::{Error, Result};
pub use evaluator::{FieldEvaluator, evaluate};
pub use field::{DistanceField, FieldSample};
pub use model::FieldModel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::evaluator::{FieldEvaluator, evaluate};
    pub use crate::field::{DistanceField, FieldSample, models::*};
    pub use crate::model::FieldModel;
    pub use crate::noise::CoherentNoise;

    // Math (re-export glam)
    pub use glam::{Vec2, Vec3, Vec4};

    // Error handling
    pub use crate::{Error, Result};
}
