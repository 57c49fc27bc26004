//! Combining and domain operations: smooth minimum, repetition, reflection

use glam::Vec3;

/// Polynomial smooth minimum with blend radius `radius`.
///
/// Equal to `a.min(b)` once the inputs are at least `radius` apart, and
/// strictly below it inside the blend band, which rounds off the crease a
/// hard minimum would leave where two surfaces meet.
#[inline]
pub fn smooth_min(a: f32, b: f32, radius: f32) -> f32 {
    let e = (radius - (a - b).abs()).max(0.0);
    a.min(b) - e * e * 0.25 / radius
}

/// Fold `p` into the cell of an infinite grid with the given spacing.
///
/// The result lies in `[-spacing/2, spacing/2)` on each axis, centered on the
/// nearest grid node.
#[inline]
pub fn repeat_centered(p: Vec3, spacing: f32) -> Vec3 {
    let half = Vec3::splat(spacing * 0.5);
    (p + half).rem_euclid(Vec3::splat(spacing)) - half
}

/// Reflect negative `z` onto positive `z`.
///
/// Returns the folded point and the sign (`1.0` or `-1.0`) needed to map
/// directions computed in folded space back to the original half-space.
#[inline]
pub fn fold_z(p: Vec3) -> (Vec3, f32) {
    if p.z < 0.0 {
        (Vec3::new(p.x, p.y, -p.z), -1.0)
    } else {
        (p, 1.0)
    }
}
