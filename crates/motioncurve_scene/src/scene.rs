// SPDX-License-Identifier: MIT OR Apache-2.0
//! Loaded scenes and camera path resolution.

use crate::camera::SceneCamera;
use crate::document::SceneDocument;
use crate::error::{SceneError, SceneResult};
use indexmap::IndexMap;
use motioncurve_export::CameraAccessor;
use std::path::Path;

/// Prefix of camera object paths
pub const OBJECT_PREFIX: &str = "/obj/";

/// Prefix of render output paths
pub const OUTPUT_PREFIX: &str = "/out/";

/// A scene whose cameras can be exported
#[derive(Debug, Clone)]
pub struct Scene {
    fps: f64,
    cameras: IndexMap<String, SceneCamera>,
    outputs: IndexMap<String, String>,
}

impl Scene {
    /// Build a scene from its document
    pub fn from_document(doc: &SceneDocument) -> SceneResult<Self> {
        if !doc.fps.is_finite() || doc.fps <= 0.0 {
            return Err(SceneError::InvalidFrameRate(doc.fps));
        }

        let cameras = doc
            .cameras
            .iter()
            .map(|(path, cam)| (path.clone(), SceneCamera::from_document(path.as_str(), cam, doc.fps)))
            .collect();
        let outputs = doc
            .outputs
            .iter()
            .map(|(path, out)| (path.clone(), out.camera.clone()))
            .collect();

        Ok(Self {
            fps: doc.fps,
            cameras,
            outputs,
        })
    }

    /// Load and build a scene file
    pub fn load(path: &Path) -> SceneResult<Self> {
        let scene = Self::from_document(&SceneDocument::load(path)?)?;
        tracing::info!(
            "Loaded scene {} ({} cameras, {} outputs, {} fps)",
            path.display(),
            scene.cameras.len(),
            scene.outputs.len(),
            scene.fps
        );
        Ok(scene)
    }

    /// Cameras in file order
    pub fn cameras(&self) -> impl Iterator<Item = &SceneCamera> {
        self.cameras.values()
    }

    /// Get camera count
    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    /// Resolve a render output, object path or bare camera name.
    ///
    /// - `/out/<name>` follows the output's camera reference
    /// - `/obj/<name>` is looked up directly
    /// - anything else is tried as `/obj/<name>`
    pub fn camera(&self, path: &str) -> Option<&SceneCamera> {
        if path.starts_with(OUTPUT_PREFIX) {
            let Some(target) = self.outputs.get(path) else {
                tracing::warn!("{path} is not a render output");
                return None;
            };
            if target.starts_with(OUTPUT_PREFIX) {
                tracing::warn!("Output {path} points at another output {target}");
                return None;
            }
            return self.object(target);
        }
        self.object(path)
    }

    fn object(&self, path: &str) -> Option<&SceneCamera> {
        if path.starts_with(OBJECT_PREFIX) {
            self.cameras.get(path)
        } else {
            self.cameras.get(&format!("{OBJECT_PREFIX}{path}"))
        }
    }
}

impl CameraAccessor for Scene {
    type Camera = SceneCamera;

    fn resolve_camera(&self, path: &str) -> Option<&SceneCamera> {
        self.camera(path)
    }

    fn frames_per_second(&self) -> f64 {
        self.fps
    }
}
