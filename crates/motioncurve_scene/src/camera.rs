// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene cameras.

use crate::channel::AnimatedChannel;
use crate::document::CameraDocument;
use crate::rotation::RotationOrder;
use glam::{DMat4, DVec3};
use indexmap::IndexMap;
use motioncurve_export::{Camera, ChannelName, Keyframe};

/// A camera loaded from a scene file
#[derive(Debug, Clone, PartialEq)]
pub struct SceneCamera {
    path: String,
    resx: f64,
    resy: f64,
    focal: f64,
    aperture: f64,
    rotation_order: RotationOrder,
    channels: IndexMap<ChannelName, AnimatedChannel>,
}

impl SceneCamera {
    /// Resolve a camera document at a frame rate
    pub fn from_document(path: impl Into<String>, doc: &CameraDocument, fps: f64) -> Self {
        let channels = doc
            .channels
            .iter()
            .map(|(name, channel)| (*name, AnimatedChannel::from_document(channel, fps)))
            .collect();

        Self {
            path: path.into(),
            resx: doc.resx,
            resy: doc.resy,
            focal: doc.focal,
            aperture: doc.aperture,
            rotation_order: doc.rotation_order,
            channels,
        }
    }

    /// The camera's own rotation order
    pub fn rotation_order(&self) -> RotationOrder {
        self.rotation_order
    }

    /// Value of a channel with no keyframes
    fn static_value(&self, channel: ChannelName) -> f64 {
        match channel {
            ChannelName::Focal => self.focal,
            ChannelName::Aperture => self.aperture,
            ChannelName::ResX => self.resx,
            ChannelName::ResY => self.resy,
            _ => 0.0,
        }
    }
}

impl Camera for SceneCamera {
    fn path(&self) -> &str {
        &self.path
    }

    fn keyframes(&self, channel: ChannelName) -> &[Keyframe] {
        self.channels
            .get(&channel)
            .map(AnimatedChannel::keyframes)
            .unwrap_or(&[])
    }

    fn parameter(&self, channel: ChannelName) -> f64 {
        self.evaluate(channel, 0.0)
    }

    fn evaluate(&self, channel: ChannelName, time: f64) -> f64 {
        self.channels
            .get(&channel)
            .and_then(|c| c.evaluate(time))
            .unwrap_or_else(|| self.static_value(channel))
    }

    fn world_transform_at(&self, time: f64) -> DMat4 {
        let [tx, ty, tz, rx, ry, rz] = ChannelName::SPATIAL.map(|c| self.evaluate(c, time));
        let mut m = DMat4::from_mat3(self.rotation_order.compose(DVec3::new(rx, ry, rz)));
        m.w_axis = DVec3::new(tx, ty, tz).extend(1.0);
        m
    }
}
