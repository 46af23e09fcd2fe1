// SPDX-License-Identifier: MIT OR Apache-2.0
//! Interpolation between channel keys.

use serde::{Deserialize, Serialize};

/// Interpolation mode between keyframes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMode {
    /// Hold the previous key (step)
    Constant,
    /// Linear interpolation
    #[default]
    Linear,
    /// Cubic with flat tangents at both keys
    Ease,
}

/// Interpolation utilities
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation between two values
    pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + (b - a) * t
    }

    /// Hermite spline interpolation
    pub fn hermite(p0: f64, m0: f64, p1: f64, m1: f64, t: f64) -> f64 {
        let t2 = t * t;
        let t3 = t2 * t;

        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        h00 * p0 + h10 * m0 + h01 * p1 + h11 * m1
    }

    /// Interpolate from `a` to `b` at normalized `t`
    pub fn interpolate(mode: InterpolationMode, a: f64, b: f64, t: f64) -> f64 {
        match mode {
            InterpolationMode::Constant => a,
            InterpolationMode::Linear => Self::lerp(a, b, t),
            InterpolationMode::Ease => Self::hermite(a, 0.0, b, 0.0, t),
        }
    }
}
