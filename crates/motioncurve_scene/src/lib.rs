// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene file camera host for motioncurve.
//!
//! This crate provides a file-backed implementation of the exporter's
//! camera boundary:
//! - RON/JSON scene documents
//! - Keyframe interpolation (constant, linear, ease)
//! - Per-camera rotation orders
//! - Camera path resolution through render outputs

pub mod camera;
pub mod channel;
pub mod document;
pub mod error;
pub mod interpolation;
pub mod rotation;
pub mod scene;

pub use camera::SceneCamera;
pub use channel::{AnimatedChannel, ChannelDocument, KeyDocument};
pub use document::{CameraDocument, OutputDocument, SceneDocument, SceneFormat, DEFAULT_FPS};
pub use error::{SceneError, SceneResult};
pub use interpolation::{Interpolation, InterpolationMode};
pub use rotation::RotationOrder;
pub use scene::{Scene, OBJECT_PREFIX, OUTPUT_PREFIX};
