// SPDX-License-Identifier: MIT OR Apache-2.0
//! Motion curve model and its text formats.
//!
//! Key-time curves (`.vd`):
//!
//! ```text
//! fps 24.0
//! keys 3
//! \t0.0 : tx ty tz rx ry rz fovy
//! easein
//! easeout
//! ```
//!
//! Fixed-frame curves (`.wf`) carry one `tx ty tz rx ry rz fovy` line per
//! frame with no header.
//!
//! Reals are written with the shortest representation that parses back to
//! the same `f64`.

use crate::decompose::Pose;
use crate::keys::EaseFlags;
use glam::DVec3;
use std::io::{self, Write};

/// One evaluated camera sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveRecord {
    /// Sample time in seconds
    pub time: f64,
    /// Translation (tx, ty, tz)
    pub translation: DVec3,
    /// zxy rotation in degrees (rx, ry, rz)
    pub rotation: DVec3,
    /// Vertical field of view in degrees
    pub fovy: f64,
}

impl CurveRecord {
    /// Build a record from a decomposed pose
    pub fn new(time: f64, pose: Pose, fovy: f64) -> Self {
        Self {
            time,
            translation: pose.translation,
            rotation: pose.rotation,
            fovy,
        }
    }

    /// The seven exported values in file order
    pub fn values(&self) -> [f64; 7] {
        [
            self.translation.x,
            self.translation.y,
            self.translation.z,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
            self.fovy,
        ]
    }

    fn write_values<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut sep = "";
        for v in self.values() {
            write!(out, "{sep}{}", real(v))?;
            sep = " ";
        }
        Ok(())
    }
}

/// A curve sampled at key times
#[derive(Debug, Clone, PartialEq)]
pub struct MotionCurve {
    /// Frame rate of the scene
    pub fps: f64,
    /// Key count for the header; union size less suppressed ease keys
    pub keys: usize,
    /// Ease markers to append
    pub ease: EaseFlags,
    /// Samples in time order
    pub records: Vec<CurveRecord>,
}

impl MotionCurve {
    /// Serialize in key-time format
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "fps {}", real(self.fps))?;
        writeln!(out, "keys {}", self.keys)?;
        for record in &self.records {
            write!(out, "\t{} : ", real(record.time))?;
            record.write_values(out)?;
            writeln!(out)?;
        }
        if self.ease.ease_in {
            writeln!(out, "easein")?;
        }
        if self.ease.ease_out {
            writeln!(out, "easeout")?;
        }
        Ok(())
    }
}

/// A curve resampled at every frame of a range
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameCurve {
    /// One record per frame, in frame order
    pub records: Vec<CurveRecord>,
}

impl FrameCurve {
    /// Serialize in fixed-frame format
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for record in &self.records {
            record.write_values(out)?;
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Round-trippable text for a real; integral values keep their `.0`
pub fn real(v: f64) -> String {
    format!("{v:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(time: f64, x: f64) -> CurveRecord {
        CurveRecord {
            time,
            translation: DVec3::new(x, 2.0, -3.5),
            rotation: DVec3::new(0.0, 90.0, 0.1),
            fovy: 45.0,
        }
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_real_round_trips() {
        assert_eq!(real(24.0), "24.0");
        assert_eq!(real(0.1), "0.1");
        let third = 1.0 / 3.0;
        assert_eq!(real(third).parse::<f64>().unwrap(), third);
        let t = 19.0 / 24.0;
        assert_eq!(real(t).parse::<f64>().unwrap(), t);
    }

    #[test]
    fn test_key_time_format() {
        let curve = MotionCurve {
            fps: 24.0,
            keys: 2,
            ease: EaseFlags {
                ease_in: true,
                ease_out: true,
            },
            records: vec![record(0.0, 1.0), record(0.5, 1.25)],
        };
        let text = render(|buf| curve.write_to(buf));
        assert_eq!(
            text,
            "fps 24.0\n\
             keys 2\n\
             \t0.0 : 1.0 2.0 -3.5 0.0 90.0 0.1 45.0\n\
             \t0.5 : 1.25 2.0 -3.5 0.0 90.0 0.1 45.0\n\
             easein\n\
             easeout\n"
        );
    }

    #[test]
    fn test_ease_out_only() {
        let curve = MotionCurve {
            fps: 30.0,
            keys: 0,
            ease: EaseFlags {
                ease_in: false,
                ease_out: true,
            },
            records: Vec::new(),
        };
        let text = render(|buf| curve.write_to(buf));
        assert_eq!(text, "fps 30.0\nkeys 0\neaseout\n");
    }

    #[test]
    fn test_fixed_frame_format() {
        let curve = FrameCurve {
            records: vec![record(0.0, 1.0), record(1.0 / 24.0, 1.5)],
        };
        let text = render(|buf| curve.write_to(buf));
        assert_eq!(
            text,
            "1.0 2.0 -3.5 0.0 90.0 0.1 45.0\n\
             1.5 2.0 -3.5 0.0 90.0 0.1 45.0\n"
        );
    }
}
