//! Render-side instance data
//!
//! Each orbiter is drawn as a thin card stretched along its velocity. This
//! module turns the orbiter buffers into per-instance model matrices and
//! colors, laid out so a renderer can upload them as-is.

use crate::orbiter::OrbiterBuffers;
use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Quat, Vec3, Vec4};
use rayon::prelude::*;

/// Instances per draw call, the usual hardware instancing limit
pub const INSTANCES_PER_BATCH: usize = 1023;

/// Card width
const CARD_WIDTH: f32 = 0.1;
/// Card thickness
const CARD_THICKNESS: f32 = 0.01;
/// Shortest the card gets along its velocity
const MIN_LENGTH: f32 = 0.1;

/// Anisotropic card scale for an orbiter moving at `velocity`
#[inline]
pub fn instance_scale(velocity: Vec3, speed_stretch: f32) -> Vec3 {
    Vec3::new(
        CARD_WIDTH,
        CARD_THICKNESS,
        (velocity.length() * speed_stretch).max(MIN_LENGTH),
    )
}

/// Rotation taking +Z to `forward` with +Y as close to `up` as possible.
///
/// A zero or non-finite `forward` gives the identity. When `forward` is
/// parallel to `up` the roll is undefined, so the shortest arc from +Z to
/// `forward` is used instead.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let Some(forward) = forward.try_normalize() else {
        return Quat::IDENTITY;
    };

    let right = up.cross(forward);
    let Some(right) = right.try_normalize() else {
        return Quat::from_rotation_arc(Vec3::Z, forward);
    };
    let up = forward.cross(right);

    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// Position, orientation and scale of one rendered orbiter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl InstanceTransform {
    /// Card at `position` looking along `velocity`
    pub fn from_motion(position: Vec3, velocity: Vec3, speed_stretch: f32) -> Self {
        Self {
            position,
            rotation: look_rotation(velocity, Vec3::Y),
            scale: instance_scale(velocity, speed_stretch),
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// GPU instance record: column-major model matrix and RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceData {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceData {
    pub fn new(transform: &InstanceTransform, color: Vec4) -> Self {
        Self {
            model: transform.matrix().to_cols_array_2d(),
            color: color.to_array(),
        }
    }

    /// Instance for one orbiter
    #[inline]
    pub fn from_orbiter(position: Vec3, velocity: Vec3, color: Vec4, speed_stretch: f32) -> Self {
        Self::new(
            &InstanceTransform::from_motion(position, velocity, speed_stretch),
            color,
        )
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.model[3][0], self.model[3][1], self.model[3][2])
    }
}

/// Build one instance per orbiter, in buffer order
pub fn prepare_instances(buffers: &OrbiterBuffers, speed_stretch: f32) -> Vec<InstanceData> {
    let mut instances = Vec::with_capacity(buffers.len());
    prepare_instances_into(buffers, speed_stretch, &mut instances);
    instances
}

/// Like [`prepare_instances`], reusing `out`'s allocation
pub fn prepare_instances_into(
    buffers: &OrbiterBuffers,
    speed_stretch: f32,
    out: &mut Vec<InstanceData>,
) {
    out.clear();
    out.par_extend(
        buffers
            .positions()
            .par_iter()
            .zip(buffers.velocities().par_iter())
            .zip(buffers.colors().par_iter())
            .map(|((&position, &velocity), &color)| {
                InstanceData::from_orbiter(position, velocity, color, speed_stretch)
            }),
    );
}

/// Split instances into draw-call sized batches; the last may be partial
pub fn instance_batches(instances: &[InstanceData]) -> impl ExactSizeIterator<Item = &[InstanceData]> {
    instances.chunks(INSTANCES_PER_BATCH)
}

/// Draw calls needed for `count` instances
pub fn batch_count(count: usize) -> usize {
    count.div_ceil(INSTANCES_PER_BATCH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbiter::{DEFAULT_COLOR, Orbiter};
    use approx::assert_relative_eq;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!(a.abs_diff_eq(b, 1e-5), "{a:?} != {b:?}");
    }

    #[test]
    fn scale_stretches_with_speed() {
        let slow = instance_scale(Vec3::new(0.01, 0.0, 0.0), 0.55);
        assert_relative_eq!(slow.x, 0.1);
        assert_relative_eq!(slow.y, 0.01);
        assert_relative_eq!(slow.z, 0.1);

        let fast = instance_scale(Vec3::new(0.0, 2.0, 0.0), 0.55);
        assert_relative_eq!(fast.z, 1.1, epsilon = 1e-6);
    }

    #[test]
    fn look_rotation_points_z_along_forward() {
        for forward in [
            Vec3::X,
            Vec3::new(1.0, 2.0, -3.0),
            Vec3::new(-0.3, -0.1, 0.2),
            Vec3::NEG_Z,
        ] {
            let q = look_rotation(forward, Vec3::Y);
            assert_vec_eq(q * Vec3::Z, forward.normalize());
            // Card stays level: its right axis has no vertical component
            assert_relative_eq!((q * Vec3::X).y, 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn look_rotation_degenerate_cases() {
        assert_eq!(look_rotation(Vec3::ZERO, Vec3::Y), Quat::IDENTITY);
        assert_eq!(look_rotation(Vec3::NAN, Vec3::Y), Quat::IDENTITY);

        let up = look_rotation(Vec3::new(0.0, 3.0, 0.0), Vec3::Y);
        assert_vec_eq(up * Vec3::Z, Vec3::Y);
        let down = look_rotation(Vec3::NEG_Y, Vec3::Y);
        assert_vec_eq(down * Vec3::Z, Vec3::NEG_Y);
    }

    #[test]
    fn matrix_places_and_orients_card() {
        let transform = InstanceTransform::from_motion(Vec3::new(1.0, 2.0, 3.0), Vec3::X * 4.0, 0.5);
        let m = transform.matrix();
        assert_vec_eq(m.transform_point3(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
        // Unit +Z maps to 2 units along +X (length = 4 * 0.5)
        assert_vec_eq(m.transform_vector3(Vec3::Z), Vec3::X * 2.0);
    }

    #[test]
    fn instances_follow_buffer_order() {
        let buffers: OrbiterBuffers = (0..10)
            .map(|i| Orbiter::new(Vec3::splat(i as f32)))
            .collect();
        let instances = prepare_instances(&buffers, 0.55);
        assert_eq!(instances.len(), 10);
        for (i, instance) in instances.iter().enumerate() {
            assert_vec_eq(instance.translation(), Vec3::splat(i as f32));
            assert_eq!(instance.color, DEFAULT_COLOR.to_array());
        }

        let mut reused = vec![InstanceData::zeroed(); 3];
        prepare_instances_into(&buffers, 0.55, &mut reused);
        assert_eq!(reused, instances);
    }

    #[test]
    fn instance_bytes_are_tightly_packed() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 80);
        let data = [InstanceData::zeroed(); 2];
        assert_eq!(bytemuck::cast_slice::<_, u8>(&data).len(), 160);
    }

    #[test]
    fn batches_cap_at_hardware_limit() {
        let instances = vec![InstanceData::zeroed(); 2500];
        let sizes: Vec<usize> = instance_batches(&instances).map(<[_]>::len).collect();
        assert_eq!(sizes, vec![1023, 1023, 454]);
        assert_eq!(batch_count(2500), 3);
        assert_eq!(batch_count(1023), 1);
        assert_eq!(batch_count(0), 0);
        assert_eq!(instance_batches(&[]).len(), 0);
    }
}
