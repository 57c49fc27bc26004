//! Analytic primitives the models are assembled from
//!
//! Each primitive returns its distance together with the vector from its
//! feature (center, plane) toward the point.

use super::FieldSample;
use glam::Vec3;

/// Sphere of `radius` centered at `center`
#[inline]
pub fn sphere(p: Vec3, center: Vec3, radius: f32) -> FieldSample {
    let offset = p - center;
    FieldSample::new(offset.length() - radius, offset)
}

/// The horizontal plane `y = 0`, solid below
#[inline]
pub fn ground_plane(p: Vec3) -> FieldSample {
    FieldSample::new(p.y, Vec3::Y)
}
