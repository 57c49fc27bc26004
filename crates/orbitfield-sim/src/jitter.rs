//! Counter-based jitter
//!
//! Each orbiter gets a fresh generator per tick, seeded from the frame
//! counter and its index. The kick for a given `(frame, index)` pair is
//! therefore the same no matter which thread computes it or in which order.

use crate::settings::JitterDistribution;
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Large prime mixed into the frame counter (2^31 - 1)
pub const SEED_MULTIPLIER: u32 = 2_147_483_647;

/// Seed for orbiter `index` on frame `frame`.
///
/// Indices wrap to 32 bits.
#[inline]
pub fn jitter_seed(frame: u32, index: usize) -> u32 {
    frame.wrapping_mul(SEED_MULTIPLIER) ^ (index as u32).wrapping_add(1)
}

/// Scale `v` down to unit length when it is longer than 1.
///
/// Shorter vectors pass through untouched. This is a clamp, not a
/// resample, so long draws pile up on the unit sphere.
#[inline]
pub fn clamp_to_unit(v: Vec3) -> Vec3 {
    if v.length_squared() > 1.0 {
        v.normalize()
    } else {
        v
    }
}

/// Jitter direction for orbiter `index` on frame `frame`, at most unit length
pub fn jitter_vector(frame: u32, index: usize, distribution: JitterDistribution) -> Vec3 {
    let mut rng = Pcg32::seed_from_u64(u64::from(jitter_seed(frame, index)));
    let range = distribution.range();
    let raw = Vec3::new(
        rng.random_range(range.clone()),
        rng.random_range(range.clone()),
        rng.random_range(range),
    );
    clamp_to_unit(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn seed_mixes_frame_and_index() {
        assert_eq!(jitter_seed(0, 0), 1);
        assert_eq!(jitter_seed(0, 41), 42);
        assert_eq!(jitter_seed(1, 0), SEED_MULTIPLIER ^ 1);
        assert_ne!(jitter_seed(3, 7), jitter_seed(7, 3));
    }

    #[test]
    fn same_inputs_same_kick() {
        for index in [0, 1, 999, 123_456] {
            assert_eq!(
                jitter_vector(12, index, JitterDistribution::Symmetric),
                jitter_vector(12, index, JitterDistribution::Symmetric)
            );
        }
        assert_ne!(
            jitter_vector(12, 5, JitterDistribution::Symmetric),
            jitter_vector(13, 5, JitterDistribution::Symmetric)
        );
    }

    #[test]
    fn kicks_never_exceed_unit_length() {
        for frame in 0..20 {
            for index in 0..200 {
                for dist in [JitterDistribution::Symmetric, JitterDistribution::Positive] {
                    let v = jitter_vector(frame, index, dist);
                    assert!(v.length() <= 1.0 + 1e-5, "{v:?}");
                }
            }
        }
    }

    #[test]
    fn positive_kicks_stay_in_positive_octant() {
        for index in 0..500 {
            let v = jitter_vector(4, index, JitterDistribution::Positive);
            assert!(v.x >= 0.0 && v.y >= 0.0 && v.z >= 0.0, "{v:?}");
        }
    }

    #[test]
    fn symmetric_kicks_average_near_zero() {
        let n = 20_000;
        let sum: Vec3 = (0..n)
            .map(|i| jitter_vector(9, i, JitterDistribution::Symmetric))
            .sum();
        let mean = sum / n as f32;
        assert!(mean.length() < 0.03, "{mean:?}");
    }

    #[test]
    fn clamp_renormalizes_long_vectors_only() {
        let long = clamp_to_unit(Vec3::new(3.0, 4.0, 0.0));
        assert_relative_eq!(long.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(long.x, 0.6, epsilon = 1e-6);

        let short = Vec3::new(0.1, -0.2, 0.3);
        assert_eq!(clamp_to_unit(short), short);
    }
}
