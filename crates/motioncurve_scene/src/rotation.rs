// SPDX-License-Identifier: MIT OR Apache-2.0
//! Camera rotation orders.

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

/// Order in which a camera applies its axis rotations; the first axis is applied first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RotationOrder {
    /// X, then Y, then Z
    #[default]
    Xyz,
    /// X, then Z, then Y
    Xzy,
    /// Y, then X, then Z
    Yxz,
    /// Y, then Z, then X
    Yzx,
    /// Z, then X, then Y
    Zxy,
    /// Z, then Y, then X
    Zyx,
}

impl RotationOrder {
    /// Get all rotation orders
    pub fn all() -> &'static [RotationOrder] {
        &[
            Self::Xyz,
            Self::Xzy,
            Self::Yxz,
            Self::Yzx,
            Self::Zxy,
            Self::Zyx,
        ]
    }

    /// Axis indices (0 = x, 1 = y, 2 = z) in application order
    pub fn axes(&self) -> [usize; 3] {
        match self {
            Self::Xyz => [0, 1, 2],
            Self::Xzy => [0, 2, 1],
            Self::Yxz => [1, 0, 2],
            Self::Yzx => [1, 2, 0],
            Self::Zxy => [2, 0, 1],
            Self::Zyx => [2, 1, 0],
        }
    }

    /// Compose a rotation matrix from per-axis angles in degrees
    pub fn compose(&self, degrees: DVec3) -> DMat3 {
        self.axes().iter().fold(DMat3::IDENTITY, |m, &axis| {
            let angle = degrees[axis].to_radians();
            let r = match axis {
                0 => DMat3::from_rotation_x(angle),
                1 => DMat3::from_rotation_y(angle),
                _ => DMat3::from_rotation_z(angle),
            };
            r * m
        })
    }
}
