// SPDX-License-Identifier: MIT OR Apache-2.0
//! Host camera boundary.
//!
//! The exporter never talks to a host application directly. A host binding
//! implements [`CameraAccessor`] to resolve camera identifiers and [`Camera`]
//! to expose per-channel keyframes, parameter values and world transforms.

use crate::error::ExportError;
use glam::DMat4;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named scalar channel on a camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelName {
    /// Translation X
    Tx,
    /// Translation Y
    Ty,
    /// Translation Z
    Tz,
    /// Rotation X (degrees)
    Rx,
    /// Rotation Y (degrees)
    Ry,
    /// Rotation Z (degrees)
    Rz,
    /// Focal length
    Focal,
    /// Horizontal aperture
    Aperture,
    /// Horizontal resolution
    ResX,
    /// Vertical resolution
    ResY,
}

impl ChannelName {
    /// Translation channels, all of which must carry keyframes
    pub const TRANSLATION: [ChannelName; 3] = [Self::Tx, Self::Ty, Self::Tz];

    /// Rotation channels, which may be empty
    pub const ROTATION: [ChannelName; 3] = [Self::Rx, Self::Ry, Self::Rz];

    /// The six spatial channels whose keys drive sampling
    pub const SPATIAL: [ChannelName; 6] = [
        Self::Tx,
        Self::Ty,
        Self::Tz,
        Self::Rx,
        Self::Ry,
        Self::Rz,
    ];

    /// Get all channel names
    pub fn all() -> &'static [ChannelName] {
        &[
            Self::Tx,
            Self::Ty,
            Self::Tz,
            Self::Rx,
            Self::Ry,
            Self::Rz,
            Self::Focal,
            Self::Aperture,
            Self::ResX,
            Self::ResY,
        ]
    }

    /// Host-side parameter name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tx => "tx",
            Self::Ty => "ty",
            Self::Tz => "tz",
            Self::Rx => "rx",
            Self::Ry => "ry",
            Self::Rz => "rz",
            Self::Focal => "focal",
            Self::Aperture => "aperture",
            Self::ResX => "resx",
            Self::ResY => "resy",
        }
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelName {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ExportError::UnknownChannel(s.to_string()))
    }
}

/// Convert a frame number to time. Frame 1 is time 0.
pub fn frame_to_time(frame: f64, fps: f64) -> f64 {
    if frame == 1.0 {
        0.0
    } else {
        (frame - 1.0) / fps
    }
}

/// An immutable channel sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Time in seconds
    pub time: f64,
    /// Frame number
    pub frame: f64,
    /// Channel value at this key
    pub value: f64,
}

impl Keyframe {
    /// Create a keyframe with explicit time and frame
    pub fn new(time: f64, frame: f64, value: f64) -> Self {
        Self { time, frame, value }
    }

    /// Create a keyframe whose time is derived from its frame
    pub fn at_frame(frame: f64, value: f64, fps: f64) -> Self {
        Self::new(frame_to_time(frame, fps), frame, value)
    }
}

/// An animatable camera owned by the host
pub trait Camera {
    /// Canonical path of the camera
    fn path(&self) -> &str;

    /// Keyframes of a channel in time order; empty if the channel is not animated
    fn keyframes(&self, channel: ChannelName) -> &[Keyframe];

    /// Current (unanimated) value of a parameter
    fn parameter(&self, channel: ChannelName) -> f64;

    /// Value of a channel at a time
    fn evaluate(&self, channel: ChannelName, time: f64) -> f64;

    /// World transform at a time; translation lives in `w_axis`
    fn world_transform_at(&self, time: f64) -> DMat4;
}

/// Resolves logical camera identifiers to cameras
pub trait CameraAccessor {
    /// Concrete camera type
    type Camera: Camera;

    /// Look up a camera by path or name
    fn resolve_camera(&self, path: &str) -> Option<&Self::Camera>;

    /// Global frame rate
    fn frames_per_second(&self) -> f64;
}
