// SPDX-License-Identifier: MIT OR Apache-2.0
//! In-memory camera host for unit tests.

use crate::camera::{Camera, CameraAccessor, ChannelName, Keyframe};
use crate::decompose::compose_zxy;
use glam::{DMat4, DVec3};
use std::collections::HashMap;

/// Camera whose channels hold the value of the most recent key
pub struct MockCamera {
    path: String,
    fps: f64,
    keys: HashMap<ChannelName, Vec<Keyframe>>,
    parameters: HashMap<ChannelName, f64>,
}

impl MockCamera {
    pub fn new(path: &str, fps: f64) -> Self {
        let parameters = HashMap::from([
            (ChannelName::Focal, 50.0),
            (ChannelName::Aperture, 41.4214),
            (ChannelName::ResX, 1920.0),
            (ChannelName::ResY, 1080.0),
        ]);
        Self {
            path: path.to_string(),
            fps,
            keys: HashMap::new(),
            parameters,
        }
    }

    pub fn with_keys(mut self, channel: ChannelName, frames_values: &[(f64, f64)]) -> Self {
        let keys = frames_values
            .iter()
            .map(|&(frame, value)| Keyframe::at_frame(frame, value, self.fps))
            .collect();
        self.keys.insert(channel, keys);
        self
    }

    pub fn with_parameter(mut self, channel: ChannelName, value: f64) -> Self {
        self.parameters.insert(channel, value);
        self
    }
}

impl Camera for MockCamera {
    fn path(&self) -> &str {
        &self.path
    }

    fn keyframes(&self, channel: ChannelName) -> &[Keyframe] {
        self.keys.get(&channel).map(Vec::as_slice).unwrap_or(&[])
    }

    fn parameter(&self, channel: ChannelName) -> f64 {
        self.parameters.get(&channel).copied().unwrap_or(0.0)
    }

    fn evaluate(&self, channel: ChannelName, time: f64) -> f64 {
        self.keyframes(channel)
            .iter()
            .take_while(|k| k.time <= time)
            .last()
            .or_else(|| self.keyframes(channel).first())
            .map_or_else(|| self.parameter(channel), |k| k.value)
    }

    fn world_transform_at(&self, time: f64) -> DMat4 {
        let [tx, ty, tz, rx, ry, rz] = ChannelName::SPATIAL.map(|c| self.evaluate(c, time));
        let mut m = DMat4::from_mat3(compose_zxy(DVec3::new(rx, ry, rz)));
        m.w_axis = DVec3::new(tx, ty, tz).extend(1.0);
        m
    }
}

/// Host exposing a single camera by exact path
pub struct MockHost {
    fps: f64,
    camera: MockCamera,
}

impl MockHost {
    pub fn new(fps: f64, camera: MockCamera) -> Self {
        Self { fps, camera }
    }
}

impl CameraAccessor for MockHost {
    type Camera = MockCamera;

    fn resolve_camera(&self, path: &str) -> Option<&MockCamera> {
        (self.camera.path == path).then_some(&self.camera)
    }

    fn frames_per_second(&self) -> f64 {
        self.fps
    }
}
