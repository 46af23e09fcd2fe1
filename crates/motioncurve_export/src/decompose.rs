// SPDX-License-Identifier: MIT OR Apache-2.0
//! World transform decomposition.
//!
//! Rotations are always reported in zxy order (Z applied first, then X,
//! then Y), whatever rotation order the camera itself is configured with.
//! With column vectors that is `R = Ry * Rx * Rz`.

use crate::camera::Camera;
use glam::{DMat3, DMat4, DVec3};

/// Below this, `cos(rx)` is treated as zero and the decomposition is gimbal locked
const GIMBAL_EPSILON: f64 = 1e-12;

/// Translation and zxy Euler rotation of a transform
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    /// Translation (tx, ty, tz)
    pub translation: DVec3,
    /// Rotation in degrees (rx, ry, rz)
    pub rotation: DVec3,
}

/// Compose a rotation matrix from zxy Euler angles in degrees
pub fn compose_zxy(rotation: DVec3) -> DMat3 {
    DMat3::from_rotation_y(rotation.y.to_radians())
        * DMat3::from_rotation_x(rotation.x.to_radians())
        * DMat3::from_rotation_z(rotation.z.to_radians())
}

/// Decompose a rotation matrix into zxy Euler angles in degrees.
///
/// For `R = Ry(b) * Rx(a) * Rz(c)`:
///
/// ```text
/// m12 = -sin(a)
/// m02 =  sin(b) cos(a)    m22 = cos(b) cos(a)
/// m10 =  cos(a) sin(c)    m11 = cos(a) cos(c)
/// ```
///
/// When `cos(a)` vanishes only `b - c` (or `b + c`) is observable; `ry` is
/// pinned to zero and `rz` absorbs the whole yaw.
pub fn decompose_zxy(rotation: &DMat3) -> DVec3 {
    let m = |row: usize, col: usize| rotation.col(col)[row];

    let cos_x = m(1, 0).hypot(m(1, 1));
    let rx = (-m(1, 2)).atan2(cos_x);

    let (ry, rz) = if cos_x > GIMBAL_EPSILON {
        (m(0, 2).atan2(m(2, 2)), m(1, 0).atan2(m(1, 1)))
    } else {
        (0.0, (-m(0, 1)).atan2(m(0, 0)))
    };

    DVec3::new(
        unsigned_zero(rx.to_degrees()),
        unsigned_zero(ry.to_degrees()),
        unsigned_zero(rz.to_degrees()),
    )
}

/// Split a world transform into translation and zxy rotation
pub fn decompose(transform: &DMat4) -> Pose {
    Pose {
        translation: transform.w_axis.truncate(),
        rotation: decompose_zxy(&DMat3::from_mat4(*transform)),
    }
}

/// Sample a camera's world pose at a time
pub fn sample_pose<C: Camera + ?Sized>(camera: &C, time: f64) -> Pose {
    decompose(&camera.world_transform_at(time))
}

/// Fold -0.0 into 0.0
fn unsigned_zero(v: f64) -> f64 {
    v + 0.0
}
