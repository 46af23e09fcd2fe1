// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene file format.
//!
//! A scene file describes:
//! - The global frame rate
//! - Cameras by object path, with lens settings, rotation order and channels
//! - Render outputs that point at a camera
//!
//! Files are RON (`.ron`) or JSON (`.json`).

use crate::channel::ChannelDocument;
use crate::error::{SceneError, SceneResult};
use crate::rotation::RotationOrder;
use indexmap::IndexMap;
use motioncurve_export::ChannelName;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Frame rate used when a scene does not set one
pub const DEFAULT_FPS: f64 = 24.0;

fn default_fps() -> f64 {
    DEFAULT_FPS
}

/// On-disk encoding of a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneFormat {
    /// Rusty Object Notation
    Ron,
    /// JSON
    Json,
}

impl SceneFormat {
    /// Pick the encoding from a file suffix
    pub fn from_path(path: &Path) -> SceneResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("ron") => Ok(Self::Ron),
            Some("json") => Ok(Self::Json),
            _ => Err(SceneError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Root of a scene file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Frames per second
    #[serde(default = "default_fps")]
    pub fps: f64,
    /// Cameras keyed by object path (e.g. `/obj/cam1`)
    #[serde(default)]
    pub cameras: IndexMap<String, CameraDocument>,
    /// Render outputs keyed by path (e.g. `/out/mantra1`)
    #[serde(default)]
    pub outputs: IndexMap<String, OutputDocument>,
}

impl Default for SceneDocument {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            cameras: IndexMap::new(),
            outputs: IndexMap::new(),
        }
    }
}

/// Camera settings and animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDocument {
    /// Horizontal resolution
    pub resx: f64,
    /// Vertical resolution
    pub resy: f64,
    /// Focal length
    pub focal: f64,
    /// Aperture when not animated
    pub aperture: f64,
    /// Order the camera applies its rotations in
    pub rotation_order: RotationOrder,
    /// Animated channels
    pub channels: IndexMap<ChannelName, ChannelDocument>,
}

impl Default for CameraDocument {
    fn default() -> Self {
        Self {
            resx: 1920.0,
            resy: 1080.0,
            focal: 50.0,
            aperture: 41.4214,
            rotation_order: RotationOrder::default(),
            channels: IndexMap::new(),
        }
    }
}

impl CameraDocument {
    /// Set a channel, replacing any existing one
    pub fn with_channel(mut self, name: ChannelName, channel: ChannelDocument) -> Self {
        self.channels.insert(name, channel);
        self
    }
}

/// A render output that renders through a camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDocument {
    /// Camera path or name
    pub camera: String,
}

impl SceneDocument {
    /// Parse a RON document
    pub fn from_ron(s: &str) -> SceneResult<Self> {
        Ok(ron::from_str(s)?)
    }

    /// Serialize to pretty RON
    pub fn to_ron(&self) -> SceneResult<String> {
        let config = ron::ser::PrettyConfig::default().enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, config)?)
    }

    /// Parse a JSON document
    pub fn from_json(s: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a scene file, choosing the format by suffix
    pub fn load(path: &Path) -> SceneResult<Self> {
        let format = SceneFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        match format {
            SceneFormat::Ron => Self::from_ron(&content),
            SceneFormat::Json => Self::from_json(&content),
        }
    }

    /// Save a scene file, choosing the format by suffix
    pub fn save(&self, path: &Path) -> SceneResult<()> {
        let content = match SceneFormat::from_path(path)? {
            SceneFormat::Ron => self.to_ron()?,
            SceneFormat::Json => self.to_json()?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"(
        fps: 25.0,
        cameras: {
            "/obj/cam1": (
                focal: 35.0,
                rotation_order: zxy,
                channels: {
                    tx: (keys: [(frame: 1.0, value: 0.0), (frame: 10.0, value: 2.5)]),
                    ry: (interpolation: ease, keys: [(frame: 1.0, value: 90.0)]),
                },
            ),
        },
        outputs: {
            "/out/mantra1": (camera: "/obj/cam1"),
        },
    )"#;

    #[test]
    fn test_parse_ron() {
        let doc = SceneDocument::from_ron(SCENE).unwrap();
        assert_eq!(doc.fps, 25.0);

        let cam = &doc.cameras["/obj/cam1"];
        assert_eq!(cam.focal, 35.0);
        assert_eq!(cam.resx, 1920.0);
        assert_eq!(cam.rotation_order, RotationOrder::Zxy);
        assert_eq!(cam.channels[&ChannelName::Tx].keys.len(), 2);
        assert_eq!(
            cam.channels[&ChannelName::Ry].interpolation,
            crate::interpolation::InterpolationMode::Ease
        );
        assert_eq!(doc.outputs["/out/mantra1"].camera, "/obj/cam1");
    }

    #[test]
    fn test_defaults() {
        let doc = SceneDocument::from_json("{}").unwrap();
        assert_eq!(doc.fps, DEFAULT_FPS);
        assert!(doc.cameras.is_empty());
    }

    #[test]
    fn test_serialization() {
        let doc = SceneDocument::from_ron(SCENE).unwrap();

        let ron_str = doc.to_ron().unwrap();
        assert_eq!(SceneDocument::from_ron(&ron_str).unwrap(), doc);

        let json = doc.to_json().unwrap();
        assert_eq!(SceneDocument::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let doc = SceneDocument::from_ron(SCENE).unwrap();

        for name in ["scene.ron", "scene.json"] {
            let path = dir.path().join(name);
            doc.save(&path).unwrap();
            assert_eq!(SceneDocument::load(&path).unwrap(), doc);
        }

        assert!(matches!(
            doc.save(&dir.path().join("scene.toml")),
            Err(SceneError::UnsupportedFormat(_))
        ));
    }
}
