// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene loading errors.

use std::path::PathBuf;

/// Errors raised while reading or writing a scene file
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// File could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// RON document failed to parse
    #[error("RON parse error: {0}")]
    RonParse(#[from] ron::error::SpannedError),

    /// RON document failed to serialize
    #[error("RON serialization error: {0}")]
    RonWrite(#[from] ron::Error),

    /// JSON document failed to parse or serialize
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Scene path has neither a `.ron` nor a `.json` suffix
    #[error("Unsupported scene format: {0:?}")]
    UnsupportedFormat(PathBuf),

    /// Frame rate is zero, negative or not finite
    #[error("Invalid frame rate: {0}")]
    InvalidFrameRate(f64),
}

/// Result alias for scene operations
pub type SceneResult<T> = Result<T, SceneError>;
