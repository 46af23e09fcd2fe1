// SPDX-License-Identifier: MIT OR Apache-2.0
//! Camera motion curve export.
//!
//! This crate turns an animated scene camera into a compact motion curve
//! file for an external renderer:
//! - Key-time curves (`.vd`): one sample per keyed time, ease keys dropped
//! - Fixed-frame curves (`.wf`): one sample per frame of a range
//! - Single-channel dumps: one channel value per frame
//!
//! ## Architecture
//!
//! The exporter is built on:
//! - A host boundary ([`CameraAccessor`], [`Camera`]) implemented by adapters
//! - Keyframe set resolution with ease detection
//! - World transform decomposition into fixed zxy Euler angles
//! - Vertical field of view from aperture, focal length and aspect

pub mod camera;
pub mod curve;
pub mod decompose;
pub mod error;
pub mod export;
pub mod fov;
pub mod keys;

#[cfg(test)]
pub(crate) mod testing;

pub use camera::{frame_to_time, Camera, CameraAccessor, ChannelName, Keyframe};
pub use curve::{CurveRecord, FrameCurve, MotionCurve};
pub use decompose::{compose_zxy, decompose, decompose_zxy, sample_pose, Pose};
pub use error::{ExportError, ExportResult};
pub use export::{
    build_fixed_frame_curve, build_key_time_curve, export_camera, export_channel,
    export_fixed_frame_curve, export_key_time_curve, CurveFormat, FrameRange,
    FIXED_FRAME_EXTENSION, KEY_TIME_EXTENSION,
};
pub use fov::{vertical_fov, Lens};
pub use keys::{ChannelKeys, EaseFlags, KeySet};
