// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for motion curve export.

use crate::camera::ChannelName;
use std::path::PathBuf;

/// Errors that abort an export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The camera identifier did not resolve through the accessor
    #[error("Camera not found: {0}")]
    CameraNotFound(String),

    /// A translation channel has no keyframes
    #[error("Camera {camera} has zero {channel} keyframes; add at least one keyframe to tx, ty and tz")]
    MissingKeyframes {
        /// Camera path
        camera: String,
        /// The empty channel
        channel: ChannelName,
    },

    /// Output path does not carry a recognized suffix
    #[error("Unsupported output extension for {0:?}: expected .vd or .wf")]
    InvalidExtension(PathBuf),

    /// Channel name is not one of the camera channels
    #[error("Unknown channel: {0}")]
    UnknownChannel(String),

    /// Focal length or resolution is zero
    #[error("Degenerate lens on {camera} at time {time}: focal, resx and resy must be non-zero")]
    DegenerateLens {
        /// Camera path
        camera: String,
        /// Sample time that failed
        time: f64,
    },

    /// Frame range bound is infinite or NaN
    #[error("Invalid frame range: start {start}, end {end:?}; frames must be finite")]
    InvalidFrameRange {
        /// First frame
        start: f64,
        /// Last frame, if given
        end: Option<f64>,
    },

    /// Failure writing the output file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;
